//! Fixed-horizon frequency response study.
//!
//! Binds the grid model into the transient framework and pins the engine
//! settings every run shares: a 25 s horizon integrated at 1 ms and
//! recorded every 50 ms.

use gf_model::{GridModel, GridParams, GridState};
use tracing::warn;

use crate::error::SimResult;
use crate::model::TransientModel;
use crate::sim::{IntegratorType, SimOptions, run_sim};
use crate::trajectory::{Trajectory, TrajectorySample};

/// Simulated horizon (seconds).
pub const HORIZON_S: f64 = 25.0;
/// Samples in a recorded trajectory, including t = 0.
pub const SAMPLE_COUNT: usize = 501;
/// Internal integration step (seconds).
pub const DT_S: f64 = 1e-3;

/// Decimation factor mapping the internal step onto the recorded grid.
const RECORD_EVERY: usize = 50;

impl TransientModel for GridModel {
    type State = GridState;

    fn initial_state(&self) -> GridState {
        GridModel::initial_state(self)
    }

    fn rhs(&mut self, t: f64, x: &GridState) -> SimResult<GridState> {
        Ok(self.derivatives(t, x))
    }

    fn add(&self, a: &GridState, b: &GridState) -> GridState {
        GridState {
            delta_omega_pu: a.delta_omega_pu + b.delta_omega_pu,
            p_fcr_pu: a.p_fcr_pu + b.p_fcr_pu,
        }
    }

    fn scale(&self, a: &GridState, scale: f64) -> GridState {
        GridState {
            delta_omega_pu: scale * a.delta_omega_pu,
            p_fcr_pu: scale * a.p_fcr_pu,
        }
    }
}

fn engine_options() -> SimOptions {
    SimOptions {
        dt: DT_S,
        t_end: HORIZON_S,
        max_steps: 100_000,
        record_every: RECORD_EVERY,
        integrator: IntegratorType::RK4,
    }
}

/// Run the frequency response study for one parameter set.
///
/// The returned trajectory always holds [`SAMPLE_COUNT`] samples spanning
/// t = 0..=25 s. Numerical divergence is not an error: non-finite values
/// appear in the affected samples and the run still completes, because a
/// runaway frequency is a result worth looking at, not a failure to hide.
pub fn simulate(params: &GridParams) -> SimResult<Trajectory> {
    let mut model = GridModel::new(params)?;
    let record = run_sim(&mut model, &engine_options())?;

    let mut samples = Vec::with_capacity(record.t.len());
    let mut warned = false;
    for (t, x) in record.t.iter().zip(record.x.iter()) {
        let frequency_hz = model.frequency_hz(x);
        if !warned && !frequency_hz.is_finite() {
            warn!(time_s = *t, "frequency diverged; samples turn non-finite");
            warned = true;
        }
        samples.push(TrajectorySample {
            time_s: *t,
            frequency_hz,
            p_fcr_pu: model.fcr_output_pu(x),
            p_load_pu: model.load_excess_pu(*t),
        });
    }

    Ok(Trajectory { samples })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_grid_is_consistent() {
        // The decimated record of round(HORIZON_S / DT_S) steps plus the
        // initial sample must land exactly on SAMPLE_COUNT.
        let n_steps = (HORIZON_S / DT_S).round() as usize;
        assert_eq!(n_steps % RECORD_EVERY, 0);
        assert_eq!(n_steps / RECORD_EVERY + 1, SAMPLE_COUNT);

        let opts = engine_options();
        assert!(n_steps <= opts.max_steps);
        assert_eq!(opts.record_every, RECORD_EVERY);
    }

    #[test]
    fn state_arithmetic_is_elementwise() {
        let model = GridModel::new(&GridParams::default()).unwrap();
        let a = GridState {
            delta_omega_pu: 1.0,
            p_fcr_pu: -2.0,
        };
        let b = GridState {
            delta_omega_pu: 0.5,
            p_fcr_pu: 4.0,
        };
        let sum = model.add(&a, &b);
        assert_eq!(sum.delta_omega_pu, 1.5);
        assert_eq!(sum.p_fcr_pu, 2.0);
        let half = model.scale(&a, 0.5);
        assert_eq!(half.delta_omega_pu, 0.5);
        assert_eq!(half.p_fcr_pu, -1.0);
    }

    #[test]
    fn invalid_params_are_rejected_before_integration() {
        let params = GridParams {
            droop: 0.5,
            ..GridParams::default()
        };
        assert!(simulate(&params).is_err());
    }
}
