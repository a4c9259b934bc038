//! Error types for the gf-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the model and simulation
/// crates and provides a unified error interface for frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Scenario not found: {0}")]
    ScenarioNotFound(String),

    #[error("Preset not found: {0}")]
    PresetNotFound(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gf-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<gf_model::ModelError> for AppError {
    fn from(err: gf_model::ModelError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<gf_sim::SimError> for AppError {
    fn from(err: gf_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}
