//! Scene loop: the fixed-interval driver tying the core together.
//!
//! Each tick runs the full pipeline on a dedicated thread: update every
//! entity, composite the grid, encode styled runs, and hand them to the
//! draw surface. Entity add/remove from other threads goes through the
//! shared manager lock; a tick holds it across update + composite so it
//! always sees a consistent snapshot of the scene.

use super::ticker::TickerActor;
use crate::error::TickFault;
use crate::render::{encode, Grid, GridConfig};
use crate::scene::{EntityManager, UpdateContext};
use crate::surface::DrawSurface;
use crossbeam_channel::RecvTimeoutError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Side channel for tick faults, called on the loop thread.
pub type FaultHook = Box<dyn Fn(&TickFault) + Send>;

/// The running scene driver.
///
/// Spawning starts ticking immediately. Stopping the loop guarantees no
/// further ticks fire and releases the ticker thread; an in-flight tick
/// runs to completion.
pub struct SceneLoop {
    /// Handle to the loop thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
    /// Shared entity collection, also handed to hosts for mutation.
    manager: Arc<Mutex<EntityManager>>,
}

impl SceneLoop {
    /// Spawn the loop over a scene and a draw surface.
    pub fn spawn<S>(config: GridConfig, manager: Arc<Mutex<EntityManager>>, surface: S) -> Self
    where
        S: DrawSurface + 'static,
    {
        Self::spawn_inner(config, manager, surface, None)
    }

    /// Spawn with a fault hook invoked for every component fault, in
    /// addition to the log side channel.
    pub fn spawn_with_fault_hook<S>(
        config: GridConfig,
        manager: Arc<Mutex<EntityManager>>,
        surface: S,
        hook: FaultHook,
    ) -> Self
    where
        S: DrawSurface + 'static,
    {
        Self::spawn_inner(config, manager, surface, Some(hook))
    }

    #[allow(clippy::missing_panics_doc)]
    fn spawn_inner<S>(
        config: GridConfig,
        manager: Arc<Mutex<EntityManager>>,
        surface: S,
        hook: Option<FaultHook>,
    ) -> Self
    where
        S: DrawSurface + 'static,
    {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();
        let manager_clone = manager.clone();

        let handle = thread::Builder::new()
            .name("glyphgrid-scene".to_string())
            .spawn(move || {
                Self::run_loop(&config, &manager_clone, surface, &shutdown_clone, hook);
            })
            .expect("Failed to spawn scene loop thread");

        Self {
            handle: Some(handle),
            shutdown,
            manager,
        }
    }

    /// The shared entity manager; lock it to add or remove entities while
    /// the loop runs.
    pub fn manager(&self) -> Arc<Mutex<EntityManager>> {
        self.manager.clone()
    }

    /// Signal the loop to stop after the current tick.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Stop the loop and wait for the thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn run_loop<S>(
        config: &GridConfig,
        manager: &Arc<Mutex<EntityManager>>,
        mut surface: S,
        shutdown: &Arc<AtomicBool>,
        hook: Option<FaultHook>,
    ) where
        S: DrawSurface,
    {
        let ticker = TickerActor::spawn(config.tick_interval());

        loop {
            if shutdown.load(Ordering::Relaxed) {
                break;
            }

            let tick = match ticker.receiver().recv_timeout(Duration::from_millis(50)) {
                Ok(tick) => tick,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };

            let ctx = UpdateContext::for_frame_rate(config.frame_rate, tick.seq);

            // One lock per tick: the update pass and the composite see the
            // same entity set even while hosts add/remove concurrently.
            let (faults, grid) = {
                let mut scene = manager.lock().unwrap_or_else(PoisonError::into_inner);
                let faults = scene.update_all(&ctx);
                let grid = Grid::composite(&scene, config.columns, config.rows);
                (faults, grid)
            };

            for fault in &faults {
                log::warn!("tick {}: {fault}", tick.seq);
                if let Some(hook) = &hook {
                    hook(fault);
                }
            }

            let runs = encode(&grid);
            let (width, height) = surface.size();
            let dims = config.fit(width, height);
            if let Err(error) = surface.draw(&runs, &dims) {
                // A failed draw loses one frame, never the scene.
                log::error!("tick {}: draw failed: {error}", tick.seq);
            }
        }

        ticker.join();
    }
}

impl Drop for SceneLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}
