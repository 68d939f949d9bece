//! Scrolling entities: clouds, obstacles and coins.
//!
//! Every entity drives its own horizontal tween from its entry x to
//! [`EXIT_X`] and destroys itself when the tween completes.

use rand::Rng;

use crate::core::constants::*;
use crate::engine::{AnimationDef, AnimationPlayer, AnimationRegistry, Body, Repeat, Tween};

pub type EntityId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityKind {
    /// Cloud drifting in the background.
    Decoration,
    /// Obstacle; touching one ends the session.
    Hazard,
    /// Coin worth a score bonus.
    Collectible,
}

impl EntityKind {
    pub const ALL: [EntityKind; 3] = [
        EntityKind::Decoration,
        EntityKind::Hazard,
        EntityKind::Collectible,
    ];

    pub fn collides_with_player(&self) -> bool {
        !matches!(self, EntityKind::Decoration)
    }

    /// Where the travel tween starts for an entity spawned at `spawn_x`.
    pub fn entry_x(&self, spawn_x: f64) -> f64 {
        match self {
            EntityKind::Decoration => spawn_x,
            EntityKind::Hazard | EntityKind::Collectible => ENTRY_X,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Decoration => "cloud",
            EntityKind::Hazard => "obstacle",
            EntityKind::Collectible => "coin",
        }
    }
}

/// Vertical placement requested for a spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnY {
    Fixed(f64),
    /// Uniform whole pixel in [0, 100].
    RandomNearTop,
}

impl SpawnY {
    /// Older callers passed `0` to mean "pick a height near the top".
    pub fn from_legacy(y: f64) -> Self {
        if y == 0.0 {
            SpawnY::RandomNearTop
        } else {
            SpawnY::Fixed(y)
        }
    }

    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            SpawnY::Fixed(y) => y,
            SpawnY::RandomNearTop => rng.gen_range(CLOUD_Y_RANGE) as f64,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Appearance {
    Rect { color: u32 },
    Sprite { texture: &'static str },
}

#[derive(Debug, Clone)]
pub struct MovingEntity {
    pub id: EntityId,
    pub kind: EntityKind,
    pub body: Body,
    pub appearance: Appearance,
    /// Display scale; only clouds shrink.
    pub scale: f64,
    travel: Tween,
    animation: Option<AnimationPlayer>,
    alive: bool,
}

impl MovingEntity {
    pub fn spawn<R: Rng + ?Sized>(
        id: EntityId,
        kind: EntityKind,
        x: f64,
        spawn_y: SpawnY,
        rng: &mut R,
        animations: &mut AnimationRegistry,
    ) -> Self {
        let y = spawn_y.resolve(rng);
        let entry_x = kind.entry_x(x);

        let (width, height, appearance, scale) = match kind {
            EntityKind::Decoration => {
                let divisor = rng.gen_range(CLOUD_SCALE_DIVISOR);
                let scale = 1.0 / divisor as f64;
                (
                    CLOUD_WIDTH,
                    CLOUD_HEIGHT,
                    Appearance::Rect { color: CLOUD_COLOR },
                    scale,
                )
            }
            EntityKind::Hazard => (
                OBSTACLE_SIZE,
                OBSTACLE_SIZE,
                Appearance::Rect {
                    color: OBSTACLE_COLOR,
                },
                1.0,
            ),
            EntityKind::Collectible => (
                COIN_SIZE,
                COIN_SIZE,
                Appearance::Sprite {
                    texture: COIN_TEXTURE,
                },
                1.0,
            ),
        };

        let mut body = Body::new(entry_x, y, width * scale, height * scale);
        body.set_allow_gravity(false);

        let animation = match kind {
            EntityKind::Collectible => {
                let def = coin_animation(animations);
                Some(AnimationPlayer::play(&def, Repeat::Forever))
            }
            _ => None,
        };

        Self {
            id,
            kind,
            body,
            appearance,
            scale,
            travel: Tween::new(entry_x, EXIT_X, BASE_TRAVEL_MS / scale),
            animation,
            alive: true,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn travel(&self) -> &Tween {
        &self.travel
    }

    pub fn travel_duration_ms(&self) -> f64 {
        self.travel.duration_ms
    }

    /// Spritesheet frame for animated entities.
    pub fn frame(&self) -> Option<u32> {
        self.animation.as_ref().map(|a| a.current_frame())
    }

    /// Move along the travel tween. Returns true on the step that carried the
    /// entity to the exit and destroyed it.
    pub fn advance(&mut self, dt_ms: f64) -> bool {
        if !self.alive {
            return false;
        }
        let step = self.travel.advance(dt_ms);
        self.body.x = step.value;
        if let Some(animation) = &mut self.animation {
            animation.advance(dt_ms);
        }
        step.completed && self.destroy()
    }

    /// Mark the entity dead. Only the first call returns true.
    pub fn destroy(&mut self) -> bool {
        if !self.alive {
            return false;
        }
        self.alive = false;
        self.travel.stop();
        true
    }
}

/// Shared coin animation, registered on first use.
fn coin_animation(animations: &mut AnimationRegistry) -> AnimationDef {
    let def = AnimationDef::from_sheet(
        COIN_ANIMATION,
        COIN_TEXTURE,
        COIN_FIRST_FRAME,
        COIN_LAST_FRAME,
        COIN_FRAME_RATE,
    );
    if !animations.exists(COIN_ANIMATION) {
        animations.create(def.clone());
    }
    animations.get(COIN_ANIMATION).cloned().unwrap_or(def)
}
