use thiserror::Error;

/// Failures raised by the value types. Nothing in the crate recovers from
/// these; they are returned to the caller at the offending call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("Cannot {op} {expected} with {found}")]
    TypeMismatch {
        op: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Cannot {op}: dimension mismatch between {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: String,
        right: String,
    },

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
