//! Entity generator: three independent, self-re-arming spawn sequences.
//!
//! After a warm-up delay, each sequence spawns one entity and schedules its
//! own next run after a random delay. The sequences never coordinate.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use rand::Rng;

use super::entity::{EntityKind, SpawnY};
use super::play_scene::SceneTask;
use super::stage::Collection;
use crate::core::constants::*;
use crate::engine::{Scheduler, TimerId};

/// How a sequence picks the vertical position of its spawns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    NearTop,
    /// Viewport height minus a uniform draw from [`FLOOR_OFFSET_RANGE`].
    AboveFloor,
}

/// Everything needed to create one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub kind: EntityKind,
    pub x: f64,
    pub spawn_y: SpawnY,
    pub collection: Option<Collection>,
}

/// Outcome of one run of a sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firing {
    pub spawn: SpawnRequest,
    pub next_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpawnSequence {
    pub kind: EntityKind,
    pub delay_ms: RangeInclusive<u64>,
    pub placement: Placement,
    pub collection: Option<Collection>,
}

impl SpawnSequence {
    pub fn clouds() -> Self {
        Self {
            kind: EntityKind::Decoration,
            delay_ms: CLOUD_DELAY_MS,
            placement: Placement::NearTop,
            collection: None,
        }
    }

    pub fn obstacles() -> Self {
        Self {
            kind: EntityKind::Hazard,
            delay_ms: OBSTACLE_DELAY_MS,
            placement: Placement::AboveFloor,
            collection: Some(Collection::Obstacles),
        }
    }

    pub fn coins() -> Self {
        Self {
            kind: EntityKind::Collectible,
            delay_ms: COIN_DELAY_MS,
            placement: Placement::AboveFloor,
            collection: Some(Collection::Coins),
        }
    }

    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Decoration => Self::clouds(),
            EntityKind::Hazard => Self::obstacles(),
            EntityKind::Collectible => Self::coins(),
        }
    }

    /// Draw one spawn and the delay until the next run.
    pub fn fire<R: Rng + ?Sized>(&self, rng: &mut R, viewport_height: i32) -> Firing {
        let spawn_y = match self.placement {
            Placement::NearTop => SpawnY::RandomNearTop,
            Placement::AboveFloor => {
                let offset = rng.gen_range(FLOOR_OFFSET_RANGE);
                SpawnY::Fixed(viewport_height as f64 - offset as f64)
            }
        };
        let next_delay_ms = rng.gen_range(self.delay_ms.clone());

        Firing {
            spawn: SpawnRequest {
                kind: self.kind,
                x: SPAWN_X,
                spawn_y,
                collection: self.collection,
            },
            next_delay_ms,
        }
    }
}

/// Owns the warm-up timer and the one pending timer of each sequence.
#[derive(Debug, Clone)]
pub struct Generator {
    warmup: Option<TimerId>,
    pending: HashMap<EntityKind, TimerId>,
}

impl Generator {
    /// Schedule the warm-up on the scene's clock.
    pub fn new(scheduler: &mut Scheduler<SceneTask>) -> Self {
        let warmup = scheduler.schedule_once(WARMUP_MS, SceneTask::WarmUp);
        Self {
            warmup: Some(warmup),
            pending: HashMap::new(),
        }
    }

    pub fn is_started(&self) -> bool {
        self.warmup.is_none()
    }

    /// Timer currently armed for `kind`.
    pub fn pending_timer(&self, kind: EntityKind) -> Option<TimerId> {
        self.pending.get(&kind).copied()
    }

    /// Warm-up elapsed: run every sequence once. `origin_ms` is the warm-up's
    /// due time.
    pub fn start<R: Rng + ?Sized>(
        &mut self,
        scheduler: &mut Scheduler<SceneTask>,
        origin_ms: u64,
        rng: &mut R,
        viewport_height: i32,
    ) -> Vec<SpawnRequest> {
        self.warmup = None;
        log::info!("generator warm-up done at {}ms", origin_ms);
        let mut spawns = Vec::with_capacity(EntityKind::ALL.len());
        for kind in EntityKind::ALL {
            spawns.push(self.fire(kind, scheduler, origin_ms, rng, viewport_height));
        }
        spawns
    }

    /// Run the `kind` sequence: return its spawn and re-arm it `next_delay_ms`
    /// after `origin_ms`.
    pub fn fire<R: Rng + ?Sized>(
        &mut self,
        kind: EntityKind,
        scheduler: &mut Scheduler<SceneTask>,
        origin_ms: u64,
        rng: &mut R,
        viewport_height: i32,
    ) -> SpawnRequest {
        let firing = SpawnSequence::for_kind(kind).fire(rng, viewport_height);
        let timer = scheduler.schedule_once_from(
            origin_ms,
            firing.next_delay_ms,
            SceneTask::Spawn(kind),
        );
        if let Some(previous) = self.pending.insert(kind, timer) {
            // At most one pending timer per kind.
            scheduler.cancel(previous);
        }
        log::debug!("next {} in {}ms", kind.name(), firing.next_delay_ms);
        firing.spawn
    }
}
