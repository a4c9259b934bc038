//! Run parameter set and input-contract validation.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};
use crate::imbalance::ImbalanceMode;

/// Lower bound for the power imbalance (per-unit).
pub const DELTA_P_LOAD_MIN_PU: f64 = -0.2;
/// Upper bound for the power imbalance (per-unit).
pub const DELTA_P_LOAD_MAX_PU: f64 = 0.2;
/// Lower bound for the inertia constant (seconds).
pub const INERTIA_H_MIN_S: f64 = 1e-3;
/// Upper bound for the inertia constant (seconds).
pub const INERTIA_H_MAX_S: f64 = 8.0;
/// Upper bound for the droop; the lower bound is exclusive zero.
pub const DROOP_MAX: f64 = 0.10;
/// Lower bound for the FCR lag time constant (seconds).
pub const T_FCR_MIN_S: f64 = 1e-3;
/// Upper bound for the FCR lag time constant (seconds).
pub const T_FCR_MAX_S: f64 = 2.0;

/// Parameter set for one frequency response run.
///
/// A fresh set is built for every run; [`GridParams::validate`] rejects
/// out-of-range or non-finite values outright instead of clamping them.
/// Every numeric field is checked regardless of which switches are on, so
/// a run cannot be made valid by disabling the feature that reads a bad
/// value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Power imbalance (per-unit of system base). Positive means excess
    /// consumption, which decelerates the grid.
    pub delta_p_load_pu: f64,
    /// Grid inertia constant H (seconds).
    pub inertia_h_s: f64,
    /// Droop (inverse regulation gain), dimensionless. Smaller droop means
    /// stronger regulation.
    pub droop: f64,
    /// FCR actuation time constant (seconds).
    pub t_fcr_s: f64,
    /// Whether the imbalance persists or clears at 4 s.
    pub imbalance_mode: ImbalanceMode,
    /// Primary frequency regulation on or off.
    pub fcr_enabled: bool,
    /// First-order lag on the delivered FCR power; only read when
    /// `fcr_enabled` is set.
    pub fcr_lag_enabled: bool,
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            delta_p_load_pu: 0.1,
            inertia_h_s: 1.0,
            droop: 0.10,
            t_fcr_s: 1.0,
            imbalance_mode: ImbalanceMode::Permanent,
            fcr_enabled: false,
            fcr_lag_enabled: false,
        }
    }
}

impl GridParams {
    /// Check every numeric field against its allowed range.
    pub fn validate(&self) -> ModelResult<()> {
        check_range(
            "delta_p_load_pu",
            self.delta_p_load_pu,
            DELTA_P_LOAD_MIN_PU,
            DELTA_P_LOAD_MAX_PU,
            "must be within [-0.2, 0.2] pu",
        )?;
        check_range(
            "inertia_h_s",
            self.inertia_h_s,
            INERTIA_H_MIN_S,
            INERTIA_H_MAX_S,
            "must be within [1e-3, 8] s",
        )?;
        if !(self.droop > 0.0 && self.droop <= DROOP_MAX) {
            return Err(ModelError::InvalidValue {
                field: "droop",
                value: self.droop,
                reason: "must be within (0, 0.1]",
            });
        }
        check_range(
            "t_fcr_s",
            self.t_fcr_s,
            T_FCR_MIN_S,
            T_FCR_MAX_S,
            "must be within [1e-3, 2] s",
        )?;
        Ok(())
    }
}

/// Inclusive range check. A NaN value fails both comparisons and is
/// rejected like any other out-of-range input.
fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
    reason: &'static str,
) -> ModelResult<()> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ModelError::InvalidValue { field, value, reason })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn defaults_are_valid() {
        GridParams::default().validate().unwrap();
    }

    #[test]
    fn boundary_values_are_accepted() {
        let p = GridParams {
            delta_p_load_pu: DELTA_P_LOAD_MAX_PU,
            inertia_h_s: INERTIA_H_MIN_S,
            droop: DROOP_MAX,
            t_fcr_s: T_FCR_MAX_S,
            ..GridParams::default()
        };
        p.validate().unwrap();

        let p = GridParams {
            delta_p_load_pu: DELTA_P_LOAD_MIN_PU,
            inertia_h_s: INERTIA_H_MAX_S,
            droop: 1e-6,
            t_fcr_s: T_FCR_MIN_S,
            ..GridParams::default()
        };
        p.validate().unwrap();
    }

    #[test]
    fn out_of_range_imbalance_is_rejected() {
        let p = GridParams {
            delta_p_load_pu: 0.25,
            ..GridParams::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("delta_p_load_pu"));
        assert!(err.to_string().contains("0.25"));
    }

    #[test]
    fn zero_inertia_is_rejected() {
        let p = GridParams {
            inertia_h_s: 0.0,
            ..GridParams::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("inertia_h_s"));
    }

    #[test]
    fn zero_droop_is_rejected() {
        let p = GridParams {
            droop: 0.0,
            ..GridParams::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("droop"));
    }

    #[test]
    fn nan_fields_are_rejected() {
        for field in 0..4 {
            let mut p = GridParams::default();
            match field {
                0 => p.delta_p_load_pu = f64::NAN,
                1 => p.inertia_h_s = f64::NAN,
                2 => p.droop = f64::NAN,
                _ => p.t_fcr_s = f64::NAN,
            }
            assert!(p.validate().is_err(), "NaN field {field} slipped through");
        }
    }

    #[test]
    fn lag_constant_is_checked_even_when_fcr_is_off() {
        let p = GridParams {
            t_fcr_s: 5.0,
            fcr_enabled: false,
            fcr_lag_enabled: false,
            ..GridParams::default()
        };
        let err = p.validate().unwrap_err();
        assert!(err.to_string().contains("t_fcr_s"));
    }

    proptest! {
        #[test]
        fn in_range_params_always_validate(
            d in DELTA_P_LOAD_MIN_PU..=DELTA_P_LOAD_MAX_PU,
            h in INERTIA_H_MIN_S..=INERTIA_H_MAX_S,
            s in 1e-4..=DROOP_MAX,
            t in T_FCR_MIN_S..=T_FCR_MAX_S,
            fcr in proptest::bool::ANY,
            lag in proptest::bool::ANY,
        ) {
            let p = GridParams {
                delta_p_load_pu: d,
                inertia_h_s: h,
                droop: s,
                t_fcr_s: t,
                imbalance_mode: ImbalanceMode::Permanent,
                fcr_enabled: fcr,
                fcr_lag_enabled: lag,
            };
            prop_assert!(p.validate().is_ok());
        }
    }
}
