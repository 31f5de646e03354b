//! Spinning snowflakes: looping animations plus a custom drift component,
//! drawn on the bundled terminal surface. Press any key to quit.

use crossterm::event::{self, Event};
use glyphgrid::{
    AnimationComponent, Color, Component, Entity, EntityManager, Frame, GridConfig, SceneLoop,
    TerminalSurface, TickError, UpdateContext,
};
use std::any::Any;
use std::error::Error;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const COLUMNS: usize = 60;
const ROWS: usize = 20;

/// One spin cycle of the snowflake, palindromic so the loop is seamless.
fn snowflake_frames() -> Result<Vec<Arc<Frame>>, Box<dyn Error>> {
    let spin: [&[&str]; 4] = [
        &[r" \ / ", r"  *  ", r" / \ "],
        &[r"  |  ", r"--*--", r"  |  "],
        &[r" / \ ", r"  *  ", r" \ / "],
        &[r"  |  ", r"--*--", r"  |  "],
    ];
    let mut frames = Vec::new();
    for art in spin {
        let frame = Frame::from_lines(art.iter().copied(), Color::WHITE, Color::Transparent)?;
        frames.push(frame.into_shared());
    }
    Ok(frames)
}

/// Drifts its entity downward, wrapping back above the grid.
struct Fall {
    ticks_per_row: u64,
}

impl Component for Fall {
    fn id(&self) -> &str {
        "fall"
    }

    fn update(&mut self, entity: &mut Entity, ctx: &UpdateContext) -> Result<(), TickError> {
        if ctx.tick % self.ticks_per_row == 0 {
            entity.y += 1;
            if entity.y > ROWS as i32 {
                entity.y = -(entity.height() as i32);
            }
        }
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

fn snowflake(id: &str, x: i32, y: i32, speed: u32) -> Result<Entity, Box<dyn Error>> {
    let frames = snowflake_frames()?;
    let mut entity = Entity::new(id, x, y, frames[0].clone());
    entity.add_component("animation", AnimationComponent::new(frames, true, speed)?);
    entity.add_component("fall", Fall {
        ticks_per_row: u64::from(speed) * 2,
    });
    Ok(entity)
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut scene = EntityManager::new();
    scene.add_entity(snowflake("flake-1", 8, 0, 3)?);
    scene.add_entity(snowflake("flake-2", 25, 6, 4)?);
    scene.add_entity(snowflake("flake-3", 44, 12, 3)?);

    let config = GridConfig::new(COLUMNS, ROWS, 20)?;
    let surface = TerminalSurface::new()?;
    let scene_loop = SceneLoop::spawn(config, Arc::new(Mutex::new(scene)), surface);

    // Block the main thread on input; the scene animates on its own thread.
    loop {
        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(_) = event::read()? {
                break;
            }
        }
    }

    scene_loop.join();
    Ok(())
}
