//! Entity manager: the exclusive home for entity lifecycle and the
//! per-tick update pass.

use super::component::UpdateContext;
use super::entity::Entity;
use crate::error::TickFault;

/// Owns the live entities of a scene.
///
/// Entities are keyed by id and kept in insertion order. That order is
/// load-bearing: it is both the update order and the sole compositing
/// priority (later entities overwrite earlier ones on overlap).
#[derive(Default)]
pub struct EntityManager {
    entities: Vec<Entity>,
}

impl EntityManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entity.
    ///
    /// If an entity with the same id already exists it is replaced in
    /// place, keeping its original position in the update/compositing order
    /// (the semantics of inserting into an insertion-ordered map).
    pub fn add_entity(&mut self, entity: Entity) {
        if let Some(slot) = self.entities.iter_mut().find(|e| e.id() == entity.id()) {
            *slot = entity;
        } else {
            self.entities.push(entity);
        }
    }

    /// Remove an entity by id. Absent ids are not an error.
    pub fn remove_entity(&mut self, id: &str) -> Option<Entity> {
        let idx = self.entities.iter().position(|e| e.id() == id)?;
        Some(self.entities.remove(idx))
    }

    /// Look up an entity by id.
    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Mutably look up an entity by id.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id() == id)
    }

    /// Iterate entities in insertion order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Number of live entities.
    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the scene holds no entities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Remove all entities.
    pub fn clear(&mut self) {
        self.entities.clear();
    }

    /// Run one tick over every entity in insertion order.
    ///
    /// Component faults never abort the pass: the offending entity is
    /// skipped for the rest of the tick and its fault collected for the
    /// caller to surface. Entities deactivated mid-pass are still visited
    /// this pass; only their components' own active flags decide whether
    /// anything runs.
    pub fn update_all(&mut self, ctx: &UpdateContext) -> Vec<TickFault> {
        let mut faults = Vec::new();
        for entity in &mut self.entities {
            if let Err(fault) = entity.update(ctx) {
                faults.push(fault);
            }
        }
        faults
    }
}

impl std::fmt::Debug for EntityManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityManager")
            .field("entities", &self.entities.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TickError;
    use crate::frame::{Cell, Frame};
    use crate::scene::Component;
    use std::any::Any;
    use std::sync::Arc;

    fn entity(id: &str, ch: char) -> Entity {
        Entity::new(
            id,
            0,
            0,
            Frame::filled(1, 1, Cell::new(ch)).unwrap().into_shared(),
        )
    }

    struct Step;

    impl Component for Step {
        fn id(&self) -> &str {
            "step"
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

    struct Explode;

    impl Component for Explode {
        fn id(&self) -> &str {
            "explode"
        }
        fn update(&mut self, _entity: &mut Entity, _ctx: &UpdateContext) -> Result<(), TickError> {
            Err(TickError::msg("kaboom"))
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
    fn test_add_get_remove() {
        let mut manager = EntityManager::new();
        manager.add_entity(entity("a", 'A'));

        assert!(manager.get("a").is_some());
        assert!(manager.get("missing").is_none());

        assert!(manager.remove_entity("a").is_some());
        assert!(manager.remove_entity("a").is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_duplicate_id_replaces_in_place() {
        let mut manager = EntityManager::new();
        manager.add_entity(entity("a", 'A'));
        manager.add_entity(entity("b", 'B'));
        manager.add_entity(entity("a", 'Z'));

        assert_eq!(manager.len(), 2);
        // Replacement keeps the original slot in iteration order.
        let ids: Vec<&str> = manager.entities().map(Entity::id).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(manager.get("a").unwrap().frame().get(0, 0).unwrap().ch, 'Z');
    }

    #[test]
    fn test_update_all_visits_in_insertion_order() {
        let mut manager = EntityManager::new();
        for id in ["first", "second", "third"] {
            let mut e = entity(id, 'X');
            e.add_component("step", Step);
            manager.add_entity(e);
        }

        manager.update_all(&ctx());
        assert!(manager.entities().all(|e| e.x == 1));
    }

    #[test]
    fn test_fault_isolated_to_offending_entity() {
        let mut manager = EntityManager::new();

        let mut bad = entity("bad", 'B');
        bad.add_component("explode", Explode);
        manager.add_entity(bad);

        let mut good = entity("good", 'G');
        good.add_component("step", Step);
        manager.add_entity(good);

        let faults = manager.update_all(&ctx());
        assert_eq!(faults.len(), 1);
        assert_eq!(faults[0].entity, "bad");
        // The entity after the fault still updated.
        assert_eq!(manager.get("good").unwrap().x, 1);
        // The faulty entity stays in the scene.
        assert!(manager.get("bad").is_some());
    }

    #[test]
    fn test_mid_pass_deactivation_does_not_remove() {
        let mut manager = EntityManager::new();
        let mut e = entity("a", 'A');
        e.add_component("step", Step);
        manager.add_entity(e);

        manager.get_mut("a").unwrap().active = false;
        manager.update_all(&ctx());
        assert_eq!(manager.get("a").unwrap().x, 0);
        assert_eq!(manager.len(), 1);
    }
}
