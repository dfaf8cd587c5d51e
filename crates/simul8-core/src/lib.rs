//! # simul8-core
//!
//! Core types shared by the simul8 crates.
//!
//! The only thing every other crate needs from here is the error model:
//!
//! - [`Error`] - recoverable shape and dimension failures
//! - [`Result`] - `std::result::Result<T, Error>`
//!
//! ## Crate Structure
//!
//! ```text
//! simul8-core (this crate)
//!    ^
//!    |
//!    +-- simul8-math (vectors, matrices, quaternions)
//!    +-- simul8-physics (point-mass integration)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;

pub use error::*;

/// Prelude module for convenient imports.
///
/// ```
/// use simul8_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
}
