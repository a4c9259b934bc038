//! Error types for the grid model.

use thiserror::Error;

/// Errors raised while validating parameters or assembling the model.
#[derive(Error, Debug)]
pub enum ModelError {
    /// A parameter is outside its allowed range (or not finite). The value
    /// is reported as given; nothing is clamped.
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A component was constructed with an argument that makes its
    /// dynamics ill-defined.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}

/// Convenience result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;
