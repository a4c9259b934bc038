//! Imbalance schedule: how the power deficit evolves over the run.

use serde::{Deserialize, Serialize};

/// Time at which a transient imbalance steps back to zero (seconds).
pub const T_STEP_CLEAR_S: f64 = 4.0;

/// Whether the power imbalance persists for the whole horizon or clears
/// partway through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImbalanceMode {
    /// Imbalance held for the whole simulation horizon.
    Permanent,
    /// Imbalance active for t < 4 s, zero from 4 s onwards.
    #[serde(rename = "transient_4s")]
    Transient4s,
}

/// Effective power imbalance as a function of time.
#[derive(Debug, Clone, Copy)]
pub struct ImbalanceSchedule {
    delta_p_load_pu: f64,
    mode: ImbalanceMode,
}

impl ImbalanceSchedule {
    pub fn new(delta_p_load_pu: f64, mode: ImbalanceMode) -> Self {
        Self {
            delta_p_load_pu,
            mode,
        }
    }

    /// Effective excess consumption at time `t_s` (per-unit).
    pub fn power_at(&self, t_s: f64) -> f64 {
        match self.mode {
            ImbalanceMode::Permanent => self.delta_p_load_pu,
            ImbalanceMode::Transient4s => {
                if t_s < T_STEP_CLEAR_S {
                    self.delta_p_load_pu
                } else {
                    0.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permanent_imbalance_never_clears() {
        let sched = ImbalanceSchedule::new(0.1, ImbalanceMode::Permanent);
        assert_eq!(sched.power_at(0.0), 0.1);
        assert_eq!(sched.power_at(4.0), 0.1);
        assert_eq!(sched.power_at(25.0), 0.1);
    }

    #[test]
    fn transient_imbalance_clears_at_four_seconds() {
        let sched = ImbalanceSchedule::new(0.1, ImbalanceMode::Transient4s);
        assert_eq!(sched.power_at(0.0), 0.1);
        assert_eq!(sched.power_at(3.999), 0.1);
        assert_eq!(sched.power_at(4.0), 0.0);
        assert_eq!(sched.power_at(25.0), 0.0);
    }

    #[test]
    fn negative_imbalance_passes_through() {
        let sched = ImbalanceSchedule::new(-0.05, ImbalanceMode::Transient4s);
        assert_eq!(sched.power_at(1.0), -0.05);
        assert_eq!(sched.power_at(5.0), 0.0);
    }

    #[test]
    fn mode_serde_names_are_stable() {
        let json = serde_json::to_string(&ImbalanceMode::Transient4s).unwrap();
        assert_eq!(json, "\"transient_4s\"");
        let json = serde_json::to_string(&ImbalanceMode::Permanent).unwrap();
        assert_eq!(json, "\"permanent\"");
    }
}
