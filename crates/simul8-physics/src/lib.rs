//! # simul8-physics
//!
//! Point-mass dynamics on top of [`simul8_math`].
//!
//! A host application owns one [`PhysicsObject`] per body and calls
//! [`PhysicsObject::update`] once per simulation tick with a positive
//! time step.
//!
//! ```rust
//! use simul8_math::Vec2;
//! use simul8_physics::PhysicsObject;
//!
//! let mut ball = PhysicsObject::new(Vec2::ZERO, 1.0).with_acceleration(Vec2::new(0.0, -9.81));
//! ball.update(0.1);
//! assert!(ball.position.y < 0.0);
//! ```

#![warn(missing_docs)]

mod object;

pub use object::*;
