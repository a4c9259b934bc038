//! Swing dynamics and the assembled per-run grid model.

use gf_core::units::constants::F0_HZ;

use crate::error::{ModelError, ModelResult};
use crate::fcr::{DroopController, FcrLag};
use crate::imbalance::ImbalanceSchedule;
use crate::params::GridParams;

/// Linearized swing dynamics of a single-bus grid.
///
/// ```text
/// d(delta_omega)/dt = (P_fcr - dP_load(t)) / (2 H)
/// ```
///
/// where `delta_omega` is the per-unit frequency deviation, `H` the inertia
/// constant in seconds, `dP_load(t)` the effective excess consumption and
/// `P_fcr` the delivered regulation power, both per-unit. Excess consumption
/// decelerates the grid; regulation power accelerates it. The deviation is
/// not clamped, so a simulated frequency may cross zero or run away — that
/// is the physics the model is meant to expose.
#[derive(Clone, Debug)]
pub struct SwingDynamics {
    /// Inertia constant H (seconds).
    pub inertia_h_s: f64,
}

impl SwingDynamics {
    pub fn new(inertia_h_s: f64) -> ModelResult<Self> {
        if !(inertia_h_s > 0.0) {
            return Err(ModelError::InvalidArg {
                what: "inertia_h_s must be positive",
            });
        }
        Ok(Self { inertia_h_s })
    }

    /// Per-unit frequency acceleration for a given power balance.
    pub fn accel(&self, p_fcr_pu: f64, delta_p_load_pu: f64) -> f64 {
        (p_fcr_pu - delta_p_load_pu) / (2.0 * self.inertia_h_s)
    }
}

/// Regulation variant, selected once per run and fixed for the whole
/// integration.
#[derive(Clone, Debug)]
pub enum Regulation {
    /// No primary regulation: inertia alone carries the imbalance.
    None,
    /// Droop control applied instantaneously (algebraic feedback).
    Ideal(DroopController),
    /// Droop control filtered through a first-order actuation lag; the
    /// delivered power becomes a state variable.
    Lagged(DroopController, FcrLag),
}

impl Regulation {
    /// Pick the variant a parameter set asks for.
    pub fn from_params(params: &GridParams) -> ModelResult<Self> {
        if !params.fcr_enabled {
            return Ok(Regulation::None);
        }
        let droop = DroopController::new(params.droop)?;
        if params.fcr_lag_enabled {
            Ok(Regulation::Lagged(droop, FcrLag::new(params.t_fcr_s)?))
        } else {
            Ok(Regulation::Ideal(droop))
        }
    }
}

/// Integration state of the grid model.
///
/// The `p_fcr_pu` slot is live only for the lagged variant; the other
/// variants keep it inert at zero so state arithmetic stays elementwise.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridState {
    /// Per-unit frequency deviation from nominal.
    pub delta_omega_pu: f64,
    /// Delivered FCR power (per-unit).
    pub p_fcr_pu: f64,
}

/// Assembled frequency response model for one run.
///
/// Construction validates the parameter set; after that, evaluation is a
/// pure function of time and state with no interior failure points.
#[derive(Clone, Debug)]
pub struct GridModel {
    swing: SwingDynamics,
    imbalance: ImbalanceSchedule,
    regulation: Regulation,
}

impl GridModel {
    /// Build the model for a parameter set, rejecting invalid inputs.
    pub fn new(params: &GridParams) -> ModelResult<Self> {
        params.validate()?;
        Ok(Self {
            swing: SwingDynamics::new(params.inertia_h_s)?,
            imbalance: ImbalanceSchedule::new(params.delta_p_load_pu, params.imbalance_mode),
            regulation: Regulation::from_params(params)?,
        })
    }

    /// Initial condition: nominal frequency, regulation at rest.
    pub fn initial_state(&self) -> GridState {
        GridState {
            delta_omega_pu: 0.0,
            p_fcr_pu: 0.0,
        }
    }

    /// State derivative at time `t_s`.
    pub fn derivatives(&self, t_s: f64, x: &GridState) -> GridState {
        let delta_p_pu = self.imbalance.power_at(t_s);
        let (p_applied_pu, dp_fcr_dt) = match &self.regulation {
            Regulation::None => (0.0, 0.0),
            Regulation::Ideal(droop) => (droop.target_power(x.delta_omega_pu), 0.0),
            Regulation::Lagged(droop, lag) => (
                x.p_fcr_pu,
                lag.dpdt(x.p_fcr_pu, droop.target_power(x.delta_omega_pu)),
            ),
        };
        GridState {
            delta_omega_pu: self.swing.accel(p_applied_pu, delta_p_pu),
            p_fcr_pu: dp_fcr_dt,
        }
    }

    /// Grid frequency reported for a state (Hz).
    pub fn frequency_hz(&self, x: &GridState) -> f64 {
        F0_HZ * (1.0 + x.delta_omega_pu)
    }

    /// Delivered FCR power channel; `Some` exactly when regulation is
    /// enabled for this run.
    pub fn fcr_output_pu(&self, x: &GridState) -> Option<f64> {
        match &self.regulation {
            Regulation::None => None,
            Regulation::Ideal(droop) => Some(droop.target_power(x.delta_omega_pu)),
            Regulation::Lagged(_, _) => Some(x.p_fcr_pu),
        }
    }

    /// Effective excess consumption at time `t_s` (per-unit).
    pub fn load_excess_pu(&self, t_s: f64) -> f64 {
        self.imbalance.power_at(t_s)
    }
}
