use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::math::{Matrix, Vector};

/// A vector or a matrix whose kind is only known at runtime.
///
/// The typed `Vector`/`Matrix` methods cannot be called with the wrong kind
/// of operand. `Operand` is where that check moves to runtime, so every
/// binary operation here first compares the kinds and returns
/// `Error::TypeMismatch` when they differ.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Vector(Vector),
    Matrix(Matrix),
}

impl Operand {
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Vector(_) => "Vector",
            Operand::Matrix(_) => "Matrix",
        }
    }

    pub fn add(&self, other: &Operand) -> Result<Operand> {
        match (self, other) {
            (Operand::Vector(a), Operand::Vector(b)) => a.add(b).map(Operand::Vector),
            (Operand::Matrix(a), Operand::Matrix(b)) => a.add(b).map(Operand::Matrix),
            _ => Err(self.type_mismatch("add", other)),
        }
    }

    pub fn subtract(&self, other: &Operand) -> Result<Operand> {
        match (self, other) {
            (Operand::Vector(a), Operand::Vector(b)) => a.subtract(b).map(Operand::Vector),
            (Operand::Matrix(a), Operand::Matrix(b)) => a.subtract(b).map(Operand::Matrix),
            _ => Err(self.type_mismatch("subtract", other)),
        }
    }

    /// Dot product; only defined between two vectors.
    pub fn dot(&self, other: &Operand) -> Result<f64> {
        match (self, other) {
            (Operand::Vector(a), Operand::Vector(b)) => a.dot(b),
            (Operand::Vector(_), _) => Err(self.type_mismatch("dot", other)),
            _ => Err(Error::TypeMismatch {
                op: "dot",
                expected: "Vector",
                found: self.kind(),
            }),
        }
    }

    fn type_mismatch(&self, op: &'static str, other: &Operand) -> Error {
        log::debug!("rejecting {} of {} and {}", op, self.kind(), other.kind());
        Error::TypeMismatch {
            op,
            expected: self.kind(),
            found: other.kind(),
        }
    }
}

impl From<Vector> for Operand {
    fn from(value: Vector) -> Self {
        Operand::Vector(value)
    }
}

impl From<Matrix> for Operand {
    fn from(value: Matrix) -> Self {
        Operand::Matrix(value)
    }
}

impl FromStr for Operand {
    type Err = Error;

    /// A `;` anywhere makes the input a matrix; otherwise it is a vector.
    fn from_str(s: &str) -> Result<Self> {
        if s.contains(';') {
            s.parse().map(Operand::Matrix)
        } else {
            s.parse().map(Operand::Vector)
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Vector(v) => fmt::Display::fmt(v, f),
            Operand::Matrix(m) => fmt::Display::fmt(m, f),
        }
    }
}

/// Parses a comma-separated list of numbers. Blank input is an empty row.
pub(crate) fn parse_row(s: &str) -> Result<Vec<f64>> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(Vec::new());
    }
    s.split(',')
        .map(|token| {
            let token = token.trim();
            token
                .parse::<f64>()
                .map_err(|e| Error::Parse(format!("invalid number '{}': {}", token, e)))
        })
        .collect()
}
