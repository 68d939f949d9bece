//! Arcade-style physics: axis-aligned bodies, gravity, drag and world bounds.
//!
//! Positions are body centers in viewport pixels, y grows downward.
//! Velocities are pixels per second.

/// Axis-aligned box described by its center and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Aabb {
    pub fn left(&self) -> f64 {
        self.x - self.width / 2.0
    }

    pub fn right(&self) -> f64 {
        self.x + self.width / 2.0
    }

    pub fn top(&self) -> f64 {
        self.y - self.height / 2.0
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height / 2.0
    }

    /// Strict overlap; boxes that only share an edge do not touch.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

/// The rectangle bodies collide against when `collide_world_bounds` is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f64,
    pub height: f64,
}

/// Velocities are clamped to this magnitude on each axis.
pub const MAX_VELOCITY: f64 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub velocity_x: f64,
    pub velocity_y: f64,
    /// Deceleration toward zero on the y axis, pixels per second squared.
    pub drag_y: f64,
    pub mass: f64,
    pub allow_gravity: bool,
    pub collide_world_bounds: bool,
    /// Resting against the bottom world bound after the last step.
    pub blocked_down: bool,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            velocity_x: 0.0,
            velocity_y: 0.0,
            drag_y: 0.0,
            mass: 1.0,
            allow_gravity: true,
            collide_world_bounds: false,
            blocked_down: false,
        }
    }

    pub fn set_allow_gravity(&mut self, allow: bool) {
        self.allow_gravity = allow;
    }

    pub fn set_velocity_y(&mut self, velocity: f64) {
        self.velocity_y = velocity;
    }

    pub fn set_drag_y(&mut self, drag: f64) {
        self.drag_y = drag;
    }

    pub fn set_collide_world_bounds(&mut self, collide: bool) {
        self.collide_world_bounds = collide;
    }

    pub fn aabb(&self) -> Aabb {
        Aabb {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }

    /// Integrate one step of `dt_secs`.
    pub fn step(&mut self, dt_secs: f64, gravity_y: f64, bounds: WorldBounds) {
        self.blocked_down = false;

        if self.allow_gravity {
            self.velocity_y += gravity_y * dt_secs;
        }

        if self.drag_y > 0.0 {
            let drag = self.drag_y * dt_secs;
            if self.velocity_y - drag > 0.0 {
                self.velocity_y -= drag;
            } else if self.velocity_y + drag < 0.0 {
                self.velocity_y += drag;
            } else {
                self.velocity_y = 0.0;
            }
        }

        self.velocity_x = self.velocity_x.clamp(-MAX_VELOCITY, MAX_VELOCITY);
        self.velocity_y = self.velocity_y.clamp(-MAX_VELOCITY, MAX_VELOCITY);

        self.x += self.velocity_x * dt_secs;
        self.y += self.velocity_y * dt_secs;

        if self.collide_world_bounds {
            self.clamp_to(bounds);
        }
    }

    fn clamp_to(&mut self, bounds: WorldBounds) {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;

        if self.x - half_w < 0.0 {
            self.x = half_w;
            self.velocity_x = 0.0;
        } else if self.x + half_w > bounds.width {
            self.x = bounds.width - half_w;
            self.velocity_x = 0.0;
        }

        if self.y - half_h < 0.0 {
            self.y = half_h;
            self.velocity_y = 0.0;
        } else if self.y + half_h >= bounds.height {
            self.y = bounds.height - half_h;
            self.velocity_y = 0.0;
            self.blocked_down = true;
        }
    }
}
