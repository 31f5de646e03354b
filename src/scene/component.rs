//! Component: polymorphic per-entity behavior, run once per tick.
//!
//! A component is a capability attached to an entity under a unique key.
//! The built-in [`AnimationComponent`](super::AnimationComponent) advances a
//! frame sequence; hosts add their own behaviors by implementing this trait.

use super::entity::Entity;
use crate::error::TickError;
use std::any::Any;
use std::time::Duration;

/// Per-tick context handed to every component update.
#[derive(Debug, Clone, Copy)]
pub struct UpdateContext {
    /// Wall-clock time budgeted per tick (`1000 / frame_rate` ms).
    pub delta: Duration,
    /// Tick ordinal since the scene loop started.
    pub tick: u64,
}

impl UpdateContext {
    /// Build a context for a given frame rate and tick ordinal.
    pub fn for_frame_rate(frame_rate: u32, tick: u64) -> Self {
        Self {
            delta: Duration::from_secs(1) / frame_rate.max(1),
            tick,
        }
    }
}

/// A per-tick behavior unit attached to an entity.
///
/// The owning entity is passed in by mutable borrow for the duration of the
/// call; components hold no reference to it between ticks. During `update`
/// the entity's component list is detached, so components must not add or
/// remove components on their own entity mid-update.
///
/// Component-level `active` and entity-level `active` are independent flags:
/// an inactive component is skipped while the rest of the entity keeps
/// updating and drawing.
pub trait Component: Send {
    /// Stable identifier for diagnostics.
    fn id(&self) -> &str;

    /// Whether this component should be invoked this tick.
    fn is_active(&self) -> bool {
        true
    }

    /// Advance one tick.
    ///
    /// Errors are isolated to the owning entity: the entity's remaining
    /// components are skipped for the tick and the fault is surfaced to the
    /// host, never swallowed.
    fn update(&mut self, entity: &mut Entity, ctx: &UpdateContext) -> Result<(), TickError>;

    /// Downcast support for host access to concrete component types.
    fn as_any(&self) -> &dyn Any;

    /// Mutable downcast support (e.g. to call `AnimationComponent::play`).
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
