//! Animation component: advances a shared frame sequence.
//!
//! The advance policy is deliberate and compatibility-critical: a
//! non-looping animation wraps its index back to frame 0 *before*
//! deactivating, so the frozen visible frame is the first frame, not the
//! last. Keep it that way.

use super::component::{Component, UpdateContext};
use super::entity::Entity;
use crate::error::{ConfigError, TickError};
use crate::frame::Frame;
use std::any::Any;
use std::sync::Arc;

/// Built-in component that steps an entity through a frame sequence.
///
/// `speed` is the number of ticks between frame advances. After every
/// update the owning entity's frame equals `frames[current_frame_index]`.
pub struct AnimationComponent {
    /// The shared frame sequence (never empty).
    frames: Vec<Arc<Frame>>,
    /// Wrap around at the end instead of stopping.
    looped: bool,
    /// Ticks per frame advance (>= 1).
    speed: u32,
    /// Index of the frame currently shown.
    current_frame_index: usize,
    /// Ticks accumulated since the last advance, in `[0, speed)`.
    frame_counter: u32,
    /// Cleared when a non-looping animation finishes.
    active: bool,
}

impl AnimationComponent {
    /// Create an animation over a frame sequence.
    ///
    /// The entity's starting frame is left alone; set it to `frames[0]`
    /// when constructing the entity if the animation should be visible
    /// before the first tick.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty frame sequence or a zero speed.
    pub fn new(frames: Vec<Arc<Frame>>, looped: bool, speed: u32) -> Result<Self, ConfigError> {
        if frames.is_empty() {
            return Err(ConfigError::NoFrames);
        }
        if speed == 0 {
            return Err(ConfigError::ZeroSpeed(speed));
        }
        Ok(Self {
            frames,
            looped,
            speed,
            current_frame_index: 0,
            frame_counter: 0,
            active: true,
        })
    }

    /// Restart the animation from the first frame and reactivate it.
    ///
    /// Does not touch the entity's position or frame; the frame catches up
    /// on the next update.
    pub fn play(&mut self) {
        self.current_frame_index = 0;
        self.frame_counter = 0;
        self.active = true;
    }

    /// Index of the frame currently shown.
    #[inline]
    pub const fn current_frame_index(&self) -> usize {
        self.current_frame_index
    }

    /// Number of frames in the sequence.
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Ticks per frame advance.
    #[inline]
    pub const fn speed(&self) -> u32 {
        self.speed
    }

    /// Whether the animation wraps at the end.
    #[inline]
    pub const fn is_looped(&self) -> bool {
        self.looped
    }
}

impl Component for AnimationComponent {
    fn id(&self) -> &str {
        "animation"
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn update(&mut self, entity: &mut Entity, _ctx: &UpdateContext) -> Result<(), TickError> {
        self.frame_counter += 1;
        if self.frame_counter >= self.speed {
            self.frame_counter = 0;
            self.current_frame_index += 1;

            if self.current_frame_index >= self.frames.len() {
                // Reset-then-deactivate: the frozen frame is frame 0.
                self.current_frame_index = 0;
                if !self.looped {
                    self.active = false;
                }
            }
        }

        entity.set_frame(Arc::clone(&self.frames[self.current_frame_index]));
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
