//! Errors for building field bindings from raw input.

use thiserror::Error;

/// Failure to turn a `(field, value)` pair into a typed binding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("unknown field '{field}'")]
    UnknownField { field: String },

    #[error("invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: &'static str,
    },
}
