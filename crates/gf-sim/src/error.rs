//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while setting up or running a transient simulation.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Model error: {message}")]
    Model { message: String },
}

pub type SimResult<T> = Result<T, SimError>;

impl From<gf_model::ModelError> for SimError {
    fn from(e: gf_model::ModelError) -> Self {
        SimError::Model {
            message: e.to_string(),
        }
    }
}
