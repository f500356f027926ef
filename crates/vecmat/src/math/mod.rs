//! Immutable numeric value types.
//!
//! `Vector` and `Matrix` are independent of each other. `Operand` wraps either
//! one when the kind of a value is only known at runtime, e.g. when it was
//! parsed from user input.
pub mod matrix;
pub mod operand;
pub mod vector;

pub use matrix::Matrix;
pub use operand::Operand;
pub use vector::Vector;
