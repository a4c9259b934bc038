//! Recorded output of a frequency response run.

use serde::{Deserialize, Serialize};

/// One recorded point of a frequency response run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    /// Time since the disturbance (seconds).
    pub time_s: f64,
    /// Grid frequency (Hz).
    pub frequency_hz: f64,
    /// Delivered FCR power (per-unit); absent when regulation is off for
    /// the run, so "no channel" never reads as "zero power".
    pub p_fcr_pu: Option<f64>,
    /// Effective excess consumption (per-unit).
    pub p_load_pu: f64,
}

/// A complete run: samples in strictly increasing time order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Frequency channel as a plain vector, in sample order.
    pub fn frequencies_hz(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.frequency_hz).collect()
    }

    /// Last recorded sample, if any.
    pub fn final_sample(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }
}
