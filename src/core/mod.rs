//! Low-level primitives.
//!
//! - [`coord`]: integer board coordinates and deltas.

pub mod coord;
