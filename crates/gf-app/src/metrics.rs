//! Frequency response metrics.
//!
//! Computes the headline numbers of a run (RoCoF, nadir, final and settling
//! frequency) from the recorded trajectory. Pure post-processing; nothing
//! here feeds back into the simulation, and no grid-code interpretation
//! (alarm or blackout thresholds) is applied.

use serde::{Deserialize, Serialize};

use gf_core::units::constants::F0_HZ;
use gf_model::{GridParams, ImbalanceMode, T_STEP_CLEAR_S};
use gf_sim::Trajectory;

/// Interior frequency minimum of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nadir {
    pub time_s: f64,
    pub frequency_hz: f64,
}

/// Headline numbers for one frequency response run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMetrics {
    /// Initial rate of change of frequency (Hz/s): -f0 * dP / (2H). The
    /// FCR output starts at zero in every variant, so the analytic slope
    /// holds regardless of regulation.
    pub rocof_hz_per_s: f64,
    /// Interior minimum, present only when the trajectory turns back up by
    /// a meaningful margin.
    pub nadir: Option<Nadir>,
    /// Frequency of the last recorded sample (Hz).
    pub f_final_hz: f64,
    /// Predicted settling frequency (Hz), where the variant has one.
    pub f_settle_hz: Option<f64>,
}

/// Compute metrics for a completed run.
pub fn compute_response_metrics(params: &GridParams, trajectory: &Trajectory) -> ResponseMetrics {
    ResponseMetrics {
        rocof_hz_per_s: -F0_HZ * params.delta_p_load_pu / (2.0 * params.inertia_h_s),
        nadir: find_nadir(trajectory),
        f_final_hz: trajectory
            .final_sample()
            .map_or(f64::NAN, |s| s.frequency_hz),
        f_settle_hz: predict_settling(params),
    }
}

/// Nadir detection: the global minimum counts only when it lies strictly
/// inside the horizon and undercuts the final value by at least 1 mHz.
/// A trajectory with any non-finite sample reports no nadir.
fn find_nadir(trajectory: &Trajectory) -> Option<Nadir> {
    let samples = &trajectory.samples;
    if samples.len() < 3 {
        return None;
    }
    let f_final = samples.last()?.frequency_hz;
    if !f_final.is_finite() {
        return None;
    }

    let mut i_min = 0;
    for (i, s) in samples.iter().enumerate() {
        if !s.frequency_hz.is_finite() {
            return None;
        }
        if s.frequency_hz < samples[i_min].frequency_hz {
            i_min = i;
        }
    }

    if i_min == 0 || i_min == samples.len() - 1 {
        return None;
    }
    if samples[i_min].frequency_hz > f_final - 1e-3 {
        return None;
    }

    Some(Nadir {
        time_s: samples[i_min].time_s,
        frequency_hz: samples[i_min].frequency_hz,
    })
}

/// Predicted settling frequency per regulation variant and imbalance mode.
fn predict_settling(params: &GridParams) -> Option<f64> {
    match (params.fcr_enabled, params.imbalance_mode) {
        // Droop holds the quasi-steady deviation -dP * droop.
        (true, ImbalanceMode::Permanent) => {
            Some(F0_HZ * (1.0 - params.delta_p_load_pu * params.droop))
        }
        // Once the imbalance clears, droop pulls the grid back to nominal.
        (true, ImbalanceMode::Transient4s) => Some(F0_HZ),
        // Without regulation the ramp freezes where the clearing left it.
        (false, ImbalanceMode::Transient4s) => Some(
            F0_HZ * (1.0 - params.delta_p_load_pu * T_STEP_CLEAR_S / (2.0 * params.inertia_h_s)),
        ),
        // Unbounded ramp: no settling point exists.
        (false, ImbalanceMode::Permanent) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gf_sim::TrajectorySample;

    fn traj(points: &[(f64, f64)]) -> Trajectory {
        Trajectory {
            samples: points
                .iter()
                .map(|&(time_s, frequency_hz)| TrajectorySample {
                    time_s,
                    frequency_hz,
                    p_fcr_pu: None,
                    p_load_pu: 0.1,
                })
                .collect(),
        }
    }

    fn base_params() -> GridParams {
        GridParams {
            delta_p_load_pu: 0.1,
            inertia_h_s: 4.0,
            droop: 0.05,
            t_fcr_s: 1.0,
            imbalance_mode: ImbalanceMode::Permanent,
            fcr_enabled: false,
            fcr_lag_enabled: false,
        }
    }

    #[test]
    fn rocof_matches_the_analytic_slope() {
        let m = compute_response_metrics(&base_params(), &traj(&[(0.0, 50.0), (25.0, 34.4)]));
        assert!((m.rocof_hz_per_s + 0.625).abs() < 1e-12);
    }

    #[test]
    fn dip_and_recovery_reports_a_nadir() {
        let m = compute_response_metrics(
            &base_params(),
            &traj(&[(0.0, 50.0), (1.0, 49.6), (2.0, 49.73), (3.0, 49.75)]),
        );
        let nadir = m.nadir.expect("nadir expected");
        assert_eq!(nadir.time_s, 1.0);
        assert_eq!(nadir.frequency_hz, 49.6);
    }

    #[test]
    fn monotone_fall_reports_no_nadir() {
        let m = compute_response_metrics(
            &base_params(),
            &traj(&[(0.0, 50.0), (1.0, 49.5), (2.0, 49.0), (3.0, 48.5)]),
        );
        assert!(m.nadir.is_none());
        assert_eq!(m.f_final_hz, 48.5);
    }

    #[test]
    fn shallow_dip_below_threshold_is_ignored() {
        // Minimum only 0.5 mHz under the final value.
        let m = compute_response_metrics(
            &base_params(),
            &traj(&[(0.0, 50.0), (1.0, 49.7495), (2.0, 49.75)]),
        );
        assert!(m.nadir.is_none());
    }

    #[test]
    fn non_finite_samples_disable_nadir_detection() {
        let m = compute_response_metrics(
            &base_params(),
            &traj(&[(0.0, 50.0), (1.0, f64::NAN), (2.0, 49.0), (3.0, 49.5)]),
        );
        assert!(m.nadir.is_none());
    }

    #[test]
    fn settling_prediction_follows_the_variant() {
        let p = base_params();

        let fcr_permanent = GridParams {
            fcr_enabled: true,
            ..p.clone()
        };
        let m = compute_response_metrics(&fcr_permanent, &traj(&[(0.0, 50.0)]));
        assert!((m.f_settle_hz.unwrap() - 49.75).abs() < 1e-12);

        let fcr_transient = GridParams {
            fcr_enabled: true,
            imbalance_mode: ImbalanceMode::Transient4s,
            ..p.clone()
        };
        let m = compute_response_metrics(&fcr_transient, &traj(&[(0.0, 50.0)]));
        assert_eq!(m.f_settle_hz, Some(50.0));

        let coast_transient = GridParams {
            imbalance_mode: ImbalanceMode::Transient4s,
            ..p.clone()
        };
        let m = compute_response_metrics(&coast_transient, &traj(&[(0.0, 50.0)]));
        assert!((m.f_settle_hz.unwrap() - 47.5).abs() < 1e-12);

        let m = compute_response_metrics(&p, &traj(&[(0.0, 50.0)]));
        assert!(m.f_settle_hz.is_none());
    }
}
