//! Primary frequency regulation: droop control and actuation lag.

use crate::error::{ModelError, ModelResult};

/// Proportional droop controller for frequency containment reserve.
///
/// The power target is `-delta_omega / droop` (per-unit): an under-frequency
/// commands injection, an over-frequency commands absorption. The reference
/// model is deliberately unsaturated: no output limits, no rate limit, no
/// deadband.
#[derive(Clone, Debug)]
pub struct DroopController {
    /// Droop (inverse gain), dimensionless.
    pub droop: f64,
}

impl DroopController {
    pub fn new(droop: f64) -> ModelResult<Self> {
        if !(droop > 0.0) {
            return Err(ModelError::InvalidArg {
                what: "droop must be positive",
            });
        }
        Ok(Self { droop })
    }

    /// FCR power target for a frequency deviation (per-unit).
    pub fn target_power(&self, delta_omega_pu: f64) -> f64 {
        -delta_omega_pu / self.droop
    }
}

/// First-order lag of the delivered FCR power toward its droop target.
///
/// Dynamics: `d(p_fcr)/dt = (target - p_fcr) / tau`.
#[derive(Clone, Debug)]
pub struct FcrLag {
    /// Actuation time constant (seconds).
    pub tau_s: f64,
}

impl FcrLag {
    pub fn new(tau_s: f64) -> ModelResult<Self> {
        if !(tau_s > 0.0) {
            return Err(ModelError::InvalidArg {
                what: "tau_s must be positive",
            });
        }
        Ok(Self { tau_s })
    }

    /// Rate of change of the delivered power toward `target_pu`.
    pub fn dpdt(&self, p_fcr_pu: f64, target_pu: f64) -> f64 {
        (target_pu - p_fcr_pu) / self.tau_s
    }
}
