//! gf-model: physics of the grid frequency transient.
//!
//! Everything needed to describe the short-term frequency response of a
//! single-bus grid to a sudden power imbalance:
//! - [`params`]: the per-run parameter set and its input contract
//! - [`imbalance`]: permanent vs. self-clearing imbalance schedules
//! - [`fcr`]: droop control and the first-order actuation lag
//! - [`swing`]: the linearized swing dynamics and the assembled model
//!
//! The model is a pure function of time and state; numerical integration
//! lives in `gf-sim`.

pub mod error;
pub mod fcr;
pub mod imbalance;
pub mod params;
pub mod swing;

pub use error::{ModelError, ModelResult};
pub use fcr::{DroopController, FcrLag};
pub use imbalance::{ImbalanceMode, ImbalanceSchedule, T_STEP_CLEAR_S};
pub use params::GridParams;
pub use swing::{GridModel, GridState, Regulation, SwingDynamics};
