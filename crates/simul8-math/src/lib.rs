//! # simul8-math
//!
//! Linear-algebra primitives for physics and simulation code.
//!
//! - [`Matrix`] - dense row-major matrix with runtime dimensions
//! - [`Mat3`] - fixed 3x3 matrix for rotations and transforms
//! - [`Vec2`], [`Vec3`], [`Vec4`] - `f64` vectors
//! - [`Quat`] - quaternion for orientation
//!
//! # Design
//!
//! Everything here is an owned value with no shared state. Vectors and
//! quaternions are `Copy` and every operation returns a new value.
//! Matrices offer both allocating operations (add, subtract, multiply,
//! transpose) and in-place ones (invert, scalar scaling, Euler
//! assignment).
//!
//! Shape problems are the only recoverable errors (see
//! [`simul8_core::Error`]). Numerical edge cases are silent:
//!
//! | case | behavior |
//! |------|----------|
//! | invert with zero determinant | matrix unchanged |
//! | divide by zero scalar | matrix unchanged |
//! | normalise a zero vector | zero vector |
//! | invert a zero quaternion | **panic** |
//!
//! # Usage
//!
//! ```rust
//! use simul8_math::{Mat3, Vec3};
//!
//! let rotation = Mat3::from_euler_angles(Vec3::new(0.0, 0.0, 0.0));
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! assert_eq!(rotation * v, v);
//! ```
//!
//! # Feature Flags
//!
//! - `serde` - derive `Serialize`/`Deserialize` on all value types
//!
//! # Dependencies
//!
//! - [`glam`] - interop with double-precision glam types
//! - [`simul8_core`] - error types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod matrix;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat3::*;
pub use matrix::*;
pub use quat::*;
pub use vec2::*;
pub use vec3::*;
pub use vec4::*;

pub use simul8_core::{Error, Result};

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3, DQuat, DVec2, DVec3, DVec4};
}
