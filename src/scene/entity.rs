//! Entity: a positioned, drawable object with attached components.

use super::component::{Component, UpdateContext};
use crate::error::TickFault;
use crate::frame::Frame;
use std::sync::Arc;

/// A positioned drawable object.
///
/// The origin `(x, y)` is the grid-space position of the frame's top-left
/// cell. Coordinates are signed: entities may sit partially or fully outside
/// the grid and are silently clipped when composited.
///
/// The current frame is a shared handle that components swap, never mutate.
/// Components live under unique string keys; their insertion order is the
/// order they run each tick.
pub struct Entity {
    /// Unique id within an entity manager.
    id: String,
    /// Grid-space column of the top-left corner.
    pub x: i32,
    /// Grid-space row of the top-left corner.
    pub y: i32,
    /// Inactive entities are neither updated nor drawn.
    pub active: bool,
    /// Currently displayed frame.
    frame: Arc<Frame>,
    /// Components in insertion order, keyed uniquely.
    components: Vec<(String, Box<dyn Component>)>,
}

impl Entity {
    /// Create an entity at a grid position showing the given frame.
    pub fn new(id: impl Into<String>, x: i32, y: i32, frame: Arc<Frame>) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            active: true,
            frame,
            components: Vec::new(),
        }
    }

    /// The entity's unique id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The currently displayed frame.
    #[inline]
    pub fn frame(&self) -> &Arc<Frame> {
        &self.frame
    }

    /// Swap the displayed frame. The previous frame is untouched; frames are
    /// shared and immutable.
    #[inline]
    pub fn set_frame(&mut self, frame: Arc<Frame>) {
        self.frame = frame;
    }

    /// Width of the current frame in columns.
    ///
    /// Can change tick-to-tick when animation frames differ in size.
    #[inline]
    pub fn width(&self) -> usize {
        self.frame.width()
    }

    /// Height of the current frame in rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.frame.height()
    }

    /// Attach a component under a key.
    ///
    /// Re-using a key replaces the existing component in place, keeping its
    /// position in the per-tick run order.
    pub fn add_component(&mut self, key: impl Into<String>, component: impl Component + 'static) {
        let key = key.into();
        let boxed: Box<dyn Component> = Box::new(component);
        if let Some(slot) = self.components.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = boxed;
        } else {
            self.components.push((key, boxed));
        }
    }

    /// Remove a component by key, returning it if present.
    pub fn remove_component(&mut self, key: &str) -> Option<Box<dyn Component>> {
        let idx = self.components.iter().position(|(k, _)| k == key)?;
        Some(self.components.remove(idx).1)
    }

    /// Borrow a component by key, downcast to its concrete type.
    pub fn component<T: Component + 'static>(&self, key: &str) -> Option<&T> {
        self.components
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, c)| c.as_any().downcast_ref::<T>())
    }

    /// Mutably borrow a component by key, downcast to its concrete type.
    pub fn component_mut<T: Component + 'static>(&mut self, key: &str) -> Option<&mut T> {
        self.components
            .iter_mut()
            .find(|(k, _)| k == key)
            .and_then(|(_, c)| c.as_any_mut().downcast_mut::<T>())
    }

    /// Number of attached components.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Run one tick: invoke every active component in insertion order.
    ///
    /// A no-op when the entity is inactive. On the first component fault the
    /// entity's remaining components are skipped for this tick and the fault
    /// is returned; the entity stays in the scene and is retried next tick.
    pub fn update(&mut self, ctx: &UpdateContext) -> Result<(), TickFault> {
        if !self.active {
            return Ok(());
        }

        // Detach the component list so components can borrow the entity.
        let mut components = std::mem::take(&mut self.components);
        let mut fault = None;

        for (key, component) in &mut components {
            if !component.is_active() {
                continue;
            }
            if let Err(error) = component.update(self, ctx) {
                fault = Some(TickFault {
                    entity: self.id.clone(),
                    component: key.clone(),
                    error,
                });
                break;
            }
        }

        self.components = components;
        fault.map_or(Ok(()), Err)
    }
}

impl std::fmt::Debug for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Entity")
            .field("id", &self.id)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("active", &self.active)
            .field("size", &(self.width(), self.height()))
            .field("components", &self.components.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TickError;
    use crate::frame::Cell;
    use std::any::Any;

    fn frame(ch: char) -> Arc<Frame> {
        Frame::filled(2, 1, Cell::new(ch)).unwrap().into_shared()
    }

    /// Moves its entity one column right per tick.
    struct Drift {
        active: bool,
    }

    impl Component for Drift {
        fn id(&self) -> &str {
            "drift"
        }
        fn is_active(&self) -> bool {
            self.active
        }
        fn update(&mut self, entity: &mut Entity, _ctx: &UpdateContext) -> Result<(), TickError> {
            entity.x += 1;
            Ok(())
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    struct Faulty;

    impl Component for Faulty {
        fn id(&self) -> &str {
            "faulty"
        }
        fn update(&mut self, _entity: &mut Entity, _ctx: &UpdateContext) -> Result<(), TickError> {
            Err(TickError::msg("deliberate"))
        }
        fn as_any(&self) -> &dyn Any {
            self
        }
        fn as_any_mut(&mut self) -> &mut dyn Any {
            self
        }
    }

    fn ctx() -> UpdateContext {
        UpdateContext::for_frame_rate(30, 0)
    }

    #[test]
    fn test_entity_dimensions_follow_frame() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        assert_eq!((entity.width(), entity.height()), (2, 1));

        entity.set_frame(Frame::filled(3, 4, Cell::new('B')).unwrap().into_shared());
        assert_eq!((entity.width(), entity.height()), (3, 4));
    }

    #[test]
    fn test_inactive_entity_skips_components() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        entity.add_component("drift", Drift { active: true });
        entity.active = false;

        entity.update(&ctx()).unwrap();
        assert_eq!(entity.x, 0);
    }

    #[test]
    fn test_inactive_component_skipped() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        entity.add_component("drift", Drift { active: false });

        entity.update(&ctx()).unwrap();
        assert_eq!(entity.x, 0);
    }

    #[test]
    fn test_component_mutates_owner() {
        let mut entity = Entity::new("e", 5, 0, frame('A'));
        entity.add_component("drift", Drift { active: true });

        entity.update(&ctx()).unwrap();
        entity.update(&ctx()).unwrap();
        assert_eq!(entity.x, 7);
    }

    #[test]
    fn test_add_component_replaces_by_key() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        entity.add_component("drift", Drift { active: false });
        entity.add_component("drift", Drift { active: true });
        assert_eq!(entity.component_count(), 1);

        entity.update(&ctx()).unwrap();
        assert_eq!(entity.x, 1);
    }

    #[test]
    fn test_component_downcast() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        entity.add_component("drift", Drift { active: true });

        assert!(entity.component::<Drift>("drift").is_some());
        assert!(entity.component::<Faulty>("drift").is_none());
        entity.component_mut::<Drift>("drift").unwrap().active = false;
        entity.update(&ctx()).unwrap();
        assert_eq!(entity.x, 0);
    }

    #[test]
    fn test_fault_stops_entity_pass_and_names_component() {
        let mut entity = Entity::new("e", 0, 0, frame('A'));
        entity.add_component("faulty", Faulty);
        entity.add_component("drift", Drift { active: true });

        let fault = entity.update(&ctx()).unwrap_err();
        assert_eq!(fault.entity, "e");
        assert_eq!(fault.component, "faulty");
        // The later component did not run this tick.
        assert_eq!(entity.x, 0);
        // The component list survives the fault.
        assert_eq!(entity.component_count(), 2);
    }
}
