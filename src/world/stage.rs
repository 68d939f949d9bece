//! Live entities of a play scene plus the collections collision rules target.
//!
//! Entities are kept in a `BTreeMap` so every pass (motion, collisions,
//! rendering) walks them in id order, which is spawn order.

use std::collections::{BTreeMap, BTreeSet};

use rand::Rng;

use super::entity::{EntityId, EntityKind, MovingEntity, SpawnY};
use crate::engine::AnimationRegistry;

/// Named membership collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Obstacles,
    Coins,
}

/// A set of entity ids. Membership ends when the entity is removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    members: BTreeSet<EntityId>,
}

impl Group {
    pub fn add(&mut self, id: EntityId) {
        self.members.insert(id);
    }

    pub fn remove(&mut self, id: EntityId) -> bool {
        self.members.remove(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.members.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.members.iter().copied()
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stage {
    entities: BTreeMap<EntityId, MovingEntity>,
    obstacles: Group,
    coins: Group,
    next_id: EntityId,
}

impl Stage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entity and add it to `collection`, if any.
    pub fn spawn<R: Rng + ?Sized>(
        &mut self,
        kind: EntityKind,
        x: f64,
        spawn_y: SpawnY,
        collection: Option<Collection>,
        rng: &mut R,
        animations: &mut AnimationRegistry,
    ) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;

        let entity = MovingEntity::spawn(id, kind, x, spawn_y, rng, animations);
        log::debug!(
            "spawned {} #{} at ({:.0}, {:.0})",
            kind.name(),
            id,
            entity.body.x,
            entity.body.y
        );
        self.entities.insert(id, entity);
        if let Some(collection) = collection {
            self.group_mut(collection).add(id);
        }
        id
    }

    /// Destroy an entity and drop it from every collection.
    /// Returns false if it was already gone.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        let Some(mut entity) = self.entities.remove(&id) else {
            return false;
        };
        entity.destroy();
        self.forget(id);
        true
    }

    /// Move every entity and remove the ones that reached the exit.
    pub fn advance(&mut self, dt_ms: f64) -> Vec<EntityId> {
        let mut removed = Vec::new();
        for (id, entity) in self.entities.iter_mut() {
            if entity.advance(dt_ms) {
                removed.push(*id);
            }
        }
        for id in &removed {
            self.entities.remove(id);
            self.forget(*id);
            log::debug!("entity #{} left the screen", id);
        }
        removed
    }

    fn forget(&mut self, id: EntityId) {
        self.obstacles.remove(id);
        self.coins.remove(id);
    }

    pub fn get(&self, id: EntityId) -> Option<&MovingEntity> {
        self.entities.get(&id)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MovingEntity> {
        self.entities.values()
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.iter().filter(|e| e.kind == kind).count()
    }

    pub fn group(&self, collection: Collection) -> &Group {
        match collection {
            Collection::Obstacles => &self.obstacles,
            Collection::Coins => &self.coins,
        }
    }

    fn group_mut(&mut self, collection: Collection) -> &mut Group {
        match collection {
            Collection::Obstacles => &mut self.obstacles,
            Collection::Coins => &mut self.coins,
        }
    }
}
