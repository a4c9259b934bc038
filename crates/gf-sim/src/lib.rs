//! Transient simulation of the grid frequency model.
//!
//! Provides:
//! - TransientModel trait for pluggable dynamic systems
//! - Fixed-step RK4 and forward Euler integrators
//! - Deterministic simulation runner with decimated recording
//! - The fixed-horizon frequency response study and its trajectory type

pub mod error;
pub mod freq_response;
pub mod integrator;
pub mod model;
pub mod sim;
pub mod trajectory;

// Re-exports for public API
pub use error::{SimError, SimResult};
pub use freq_response::{DT_S, HORIZON_S, SAMPLE_COUNT, simulate};
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::TransientModel;
pub use sim::{IntegratorType, SimOptions, SimRecord, run_sim};
pub use trajectory::{Trajectory, TrajectorySample};
