//! Entity registry
//!
//! The live set of entities for a session. Iteration follows insertion order,
//! and systems iterate over a snapshot of ids (`ids()`) so that removals made
//! mid-sweep never disturb the sweep itself.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entity::{Entity, EntityId, EntityKind};

/// Insertion-ordered entity storage
#[derive(Debug, Clone)]
pub struct Registry {
    entities: Vec<Entity>,
    rng: Pcg32,
}

impl Registry {
    /// Create an empty registry whose identities are drawn from `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            entities: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Draw a fresh identity that is not currently in use
    pub fn allocate_id(&mut self) -> EntityId {
        loop {
            let id = EntityId(self.rng.random::<u64>());
            if !self.contains(id) {
                return id;
            }
            log::debug!("Entity id {} already in use, drawing again", id);
        }
    }

    /// Insert an entity, replacing (in place) any entry with the same id.
    ///
    /// Returns the replaced entity, if any.
    pub fn insert(&mut self, entity: Entity) -> Option<Entity> {
        match self.entities.iter_mut().find(|e| e.id == entity.id) {
            Some(slot) => Some(std::mem::replace(slot, entity)),
            None => {
                self.entities.push(entity);
                None
            }
        }
    }

    /// Remove an entity, preserving the order of the rest
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(index))
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.iter().any(|e| e.id == id)
    }

    /// Snapshot of current ids in registry order
    pub fn ids(&self) -> Vec<EntityId> {
        self.entities.iter().map(|e| e.id).collect()
    }

    /// Entities in registry order
    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    /// Entities of one kind, in registry order
    pub fn of_kind(&self, kind: EntityKind) -> impl Iterator<Item = &Entity> {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    pub fn count_kind(&self, kind: EntityKind) -> usize {
        self.of_kind(kind).count()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(registry: &mut Registry, kind: EntityKind) -> EntityId {
        let id = registry.allocate_id();
        registry.insert(Entity::new(id, kind));
        id
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut registry = Registry::new(1);
        let a = entity(&mut registry, EntityKind::Brick);
        let b = entity(&mut registry, EntityKind::Paddle);
        let c = entity(&mut registry, EntityKind::Ball);

        assert_eq!(registry.ids(), vec![a, b, c]);
        assert!(registry.remove(b).is_some());
        assert_eq!(registry.ids(), vec![a, c]);
        assert!(registry.remove(b).is_none());
    }

    #[test]
    fn test_insert_same_id_replaces() {
        let mut registry = Registry::new(2);
        let id = entity(&mut registry, EntityKind::Brick);
        let other = entity(&mut registry, EntityKind::Wall);

        let replaced = registry.insert(Entity::new(id, EntityKind::Ball));
        assert_eq!(replaced.map(|e| e.kind), Some(EntityKind::Brick));
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.ids(), vec![id, other]);
        assert_eq!(registry.get(id).map(|e| e.kind), Some(EntityKind::Ball));
    }

    #[test]
    fn test_snapshot_is_stable_under_removal() {
        let mut registry = Registry::new(3);
        for _ in 0..5 {
            entity(&mut registry, EntityKind::Brick);
        }

        let snapshot = registry.ids();
        let mut visited = 0;
        for id in &snapshot {
            if registry.get(*id).is_none() {
                continue;
            }
            visited += 1;
            // Remove every entity including ones later in the snapshot
            registry.clear();
        }
        assert_eq!(visited, 1);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_allocated_ids_are_unique() {
        let mut registry = Registry::new(4);
        for _ in 0..200 {
            entity(&mut registry, EntityKind::Brick);
        }
        let mut ids = registry.ids();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn test_same_seed_same_ids() {
        let mut a = Registry::new(42);
        let mut b = Registry::new(42);
        assert_eq!(a.allocate_id(), b.allocate_id());
    }
}
