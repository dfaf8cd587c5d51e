//! Planar point mass and its time step.
//!
//! # Integration
//!
//! [`PhysicsObject::update`] uses semi-implicit (symplectic) Euler:
//!
//! ```text
//! v' = v + a * dt
//! p' = p + v' * dt
//! ```
//!
//! Position advances with the *updated* velocity, so a body starting at
//! rest moves on the very first step.

use simul8_math::Vec2;
use tracing::trace;

/// A point mass moving in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PhysicsObject {
    /// Current position
    pub position: Vec2,
    /// Current velocity
    pub velocity: Vec2,
    /// Acceleration applied each step
    pub acceleration: Vec2,
    /// Mass
    pub mass: f64,
}

impl PhysicsObject {
    /// Creates a body at rest at `position`.
    pub fn new(position: Vec2, mass: f64) -> Self {
        Self {
            position,
            mass,
            ..Self::default()
        }
    }

    /// Sets the constant acceleration.
    pub fn with_acceleration(mut self, acceleration: Vec2) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Sets the initial velocity.
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advances the body by one time step of `dt`.
    ///
    /// Velocity is updated first and the new velocity moves the position.
    pub fn update(&mut self, dt: f64) {
        self.velocity = self.velocity + self.acceleration * dt;
        self.position = self.position + self.velocity * dt;
        trace!(dt, x = self.position.x, y = self.position.y, "update");
    }

    /// Calls [`update`](Self::update) `steps` times.
    pub fn step_n(&mut self, dt: f64, steps: usize) {
        for _ in 0..steps {
            self.update(dt);
        }
    }

    /// Linear momentum `m * v`.
    #[inline]
    pub fn momentum(&self) -> Vec2 {
        self.velocity * self.mass
    }
}
