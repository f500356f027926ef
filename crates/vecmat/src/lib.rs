//! vecmat: immutable vector and matrix value types.
//!
//! `Vector` is an N-dimensional tuple of `f64` with a lazily cached magnitude
//! and unit vector. `Matrix` is a rectangular grid with elementwise addition
//! and subtraction. Every binary operation checks shapes and reports
//! incompatible operands through the crate `Error` type instead of panicking.
//!
//! `Organization` is a plain record kept alongside the numeric types; it has
//! no interaction with them.
pub mod error;
pub mod math;
pub mod organization;

pub use error::{Error, Result};
pub use math::{Matrix, Operand, Vector};
pub use organization::Organization;
