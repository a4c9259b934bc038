//! Simulation runner and result recording.

use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator, RK4};
use crate::model::TransientModel;

/// Integrator selection for simulation.
#[derive(Clone, Copy, Debug, Default)]
pub enum IntegratorType {
    /// 4th-order Runge-Kutta (default, most accurate, 4 rhs calls per step).
    #[default]
    RK4,
    /// Forward Euler (1st-order, faster, 1 rhs call per step).
    ForwardEuler,
}

/// Options for simulation runs.
#[derive(Clone, Debug)]
pub struct SimOptions {
    /// Fixed time step (seconds)
    pub dt: f64,
    /// Final simulation time (seconds)
    pub t_end: f64,
    /// Maximum number of steps (safety limit)
    pub max_steps: usize,
    /// Record every N-th step (decimation)
    pub record_every: usize,
    /// Integrator type (default: RK4)
    pub integrator: IntegratorType,
}

impl Default for SimOptions {
    fn default() -> Self {
        Self {
            dt: 1e-3,
            t_end: 1.0,
            max_steps: 100_000,
            record_every: 10,
            integrator: IntegratorType::default(),
        }
    }
}

/// Record of simulation results.
#[derive(Clone, Debug)]
pub struct SimRecord<S> {
    /// Time points (seconds)
    pub t: Vec<f64>,
    /// State snapshots
    pub x: Vec<S>,
}

/// Run a transient simulation with a fixed step.
///
/// The step count is fixed up front as round(t_end / dt) and every recorded
/// timestamp is computed as step * dt, so a given option set always yields
/// the same number of records at the same times. Accumulating t += dt
/// instead would let float drift decide whether a final extra record
/// appears.
pub fn run_sim<M: TransientModel>(
    model: &mut M,
    opts: &SimOptions,
) -> SimResult<SimRecord<M::State>> {
    if !(opts.dt > 0.0) {
        return Err(SimError::InvalidArg {
            what: "dt must be positive",
        });
    }
    if !(opts.t_end >= 0.0) {
        return Err(SimError::InvalidArg {
            what: "t_end must be non-negative",
        });
    }
    if opts.max_steps == 0 {
        return Err(SimError::InvalidArg {
            what: "max_steps must be positive",
        });
    }
    if opts.record_every == 0 {
        return Err(SimError::InvalidArg {
            what: "record_every must be positive",
        });
    }

    let n_steps_f = (opts.t_end / opts.dt).round();
    if !n_steps_f.is_finite() || n_steps_f > opts.max_steps as f64 {
        return Err(SimError::InvalidArg {
            what: "t_end / dt exceeds max_steps",
        });
    }
    let n_steps = n_steps_f as usize;

    debug!(n_steps, dt = opts.dt, t_end = opts.t_end, "starting transient run");

    let mut x = model.initial_state();
    let mut t_record = vec![0.0];
    let mut x_record = vec![x.clone()];

    for step in 1..=n_steps {
        let t = (step - 1) as f64 * opts.dt;
        x = match opts.integrator {
            IntegratorType::RK4 => RK4.step(model, t, &x, opts.dt)?,
            IntegratorType::ForwardEuler => ForwardEuler.step(model, t, &x, opts.dt)?,
        };

        // Record if decimation matches
        if step % opts.record_every == 0 {
            t_record.push(step as f64 * opts.dt);
            x_record.push(x.clone());
        }
    }

    // Always record final state
    if n_steps % opts.record_every != 0 {
        t_record.push(n_steps as f64 * opts.dt);
        x_record.push(x);
    }

    Ok(SimRecord {
        t: t_record,
        x: x_record,
    })
}
