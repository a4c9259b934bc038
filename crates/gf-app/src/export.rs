//! Trajectory export: CSV rows and a serializable run report.

use serde::{Deserialize, Serialize};

use gf_model::GridParams;
use gf_sim::Trajectory;

use crate::metrics::ResponseMetrics;
use crate::run_service::RunResponse;

/// Build CSV content for a trajectory.
///
/// Columns are `time_s,frequency_hz,p_fcr_pu,p_load_pu`; the FCR column is
/// left empty when the run had no regulation, so downstream tooling can tell
/// "off" apart from "zero output".
pub fn trajectory_to_csv(trajectory: &Trajectory) -> String {
    let mut csv = String::from("time_s,frequency_hz,p_fcr_pu,p_load_pu\n");
    for s in &trajectory.samples {
        let p_fcr = s.p_fcr_pu.map(|p| p.to_string()).unwrap_or_default();
        csv.push_str(&format!(
            "{},{},{},{}\n",
            s.time_s, s.frequency_hz, p_fcr, s.p_load_pu
        ));
    }
    csv
}

/// Self-contained JSON report of one run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub params: GridParams,
    pub metrics: ResponseMetrics,
    pub trajectory: Trajectory,
}

impl RunReport {
    pub fn from_response(response: &RunResponse) -> Self {
        Self {
            params: response.params.clone(),
            metrics: response.metrics.clone(),
            trajectory: response.trajectory.clone(),
        }
    }

    pub fn to_json(&self) -> crate::error::AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
