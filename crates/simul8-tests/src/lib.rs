//! Integration tests for simul8 crates.
//!
//! These exercise the documented contracts across crate boundaries:
//! matrix algebra identities, the silent numerical guards, the single
//! fatal quaternion case and the integrator ordering.
