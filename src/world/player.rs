//! The player's square: an arcade body that jumps and spins while airborne.

use crate::core::constants::*;
use crate::engine::{Body, Tween};

#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    /// Display angle in degrees.
    pub rotation: f64,
    pub jumping: bool,
    pub health: u32,
    pub invincible: bool,
    spin: Option<Tween>,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        let mut body = Body::new(x, y, PLAYER_SIZE, PLAYER_SIZE);
        body.set_collide_world_bounds(true);
        body.set_drag_y(PLAYER_DRAG_Y);
        body.mass = PLAYER_MASS;

        Self {
            body,
            rotation: 0.0,
            jumping: false,
            health: PLAYER_HEALTH,
            invincible: false,
            spin: None,
        }
    }

    /// Resting on the floor after the last physics step.
    pub fn is_grounded(&self) -> bool {
        self.body.blocked_down
    }

    pub fn is_spinning(&self) -> bool {
        self.spin.as_ref().is_some_and(|s| s.is_active())
    }

    /// Launch upward and start spinning. No-op while airborne.
    pub fn jump(&mut self) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.body.set_velocity_y(JUMP_VELOCITY);
        self.jumping = true;
        self.rotation = 0.0;
        self.spin = Some(Tween::new(0.0, JUMP_SPIN_DEGREES, JUMP_SPIN_MS).looping());
        true
    }

    /// Stop spinning and square up.
    pub fn land(&mut self) {
        if let Some(spin) = &mut self.spin {
            spin.stop();
        }
        self.jumping = false;
        self.rotation = 0.0;
    }

    pub fn advance_spin(&mut self, dt_ms: f64) {
        if let Some(spin) = &mut self.spin {
            if spin.is_active() {
                self.rotation = spin.advance(dt_ms).value;
            }
        }
    }
}
