//! gf-app: service layer between the simulation engine and frontends.
//!
//! Owns everything a frontend needs that is not physics:
//! - scenario files (YAML schema, validation, presets)
//! - the run service (simulate + metrics, stateless)
//! - response metrics (RoCoF, nadir, settling frequency)
//! - export (CSV, JSON run reports)

pub mod error;
pub mod export;
pub mod metrics;
pub mod run_service;
pub mod scenario;

pub use error::{AppError, AppResult};
pub use export::{RunReport, trajectory_to_csv};
pub use metrics::{Nadir, ResponseMetrics, compute_response_metrics};
pub use run_service::{RunResponse, run_params, run_scenario};
pub use scenario::{
    LATEST_VERSION, ScenarioDef, ScenarioFile, find_preset, find_scenario, load_yaml, presets,
    save_yaml, validate_file,
};
