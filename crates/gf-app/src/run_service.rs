//! Run execution service.
//!
//! Runs are stateless: every call builds a fresh model from the parameter
//! set, integrates it, and hands back the trajectory with its metrics.
//! Nothing is cached or persisted.

use gf_model::GridParams;
use gf_sim::{Trajectory, simulate};

use crate::error::AppResult;
use crate::metrics::{ResponseMetrics, compute_response_metrics};
use crate::scenario::{ScenarioFile, find_scenario};

/// Response from a run execution.
#[derive(Debug, Clone)]
pub struct RunResponse {
    pub params: GridParams,
    pub trajectory: Trajectory,
    pub metrics: ResponseMetrics,
}

/// Run a single parameter set and compute its response metrics.
pub fn run_params(params: &GridParams) -> AppResult<RunResponse> {
    let trajectory = simulate(params)?;
    let metrics = compute_response_metrics(params, &trajectory);
    Ok(RunResponse {
        params: params.clone(),
        trajectory,
        metrics,
    })
}

/// Run one scenario out of a loaded scenario file.
pub fn run_scenario(file: &ScenarioFile, scenario_id: &str) -> AppResult<RunResponse> {
    let scenario = find_scenario(file, scenario_id)?;
    run_params(&scenario.params)
}
