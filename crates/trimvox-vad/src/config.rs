use serde::{Deserialize, Serialize};

use super::constants::{
    SILENCE_RUN_LIMIT, STEP_SIZE_SAMPLES, THRESHOLD_RATIO, WINDOW_SIZE_SAMPLES,
};

/// Tuning parameters for the adaptive energy detector.
///
/// Defaults: disjoint 160-sample windows, a 0.1 spread ratio for the
/// local threshold candidate, and suppression after a run of more than
/// 20 silent windows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VadConfig {
    /// Number of samples classified as one unit.
    pub window_size: usize,
    /// Samples removed from the head of the input queue per pull.
    /// When smaller than `window_size`, successive windows overlap.
    pub step_size: usize,
    /// Position of the local threshold candidate inside the window's
    /// energy spread: `min + (max - min) * threshold_ratio`.
    pub threshold_ratio: f64,
    /// Silence run length beyond which verdicts are forced non-speech.
    pub silence_run_limit: u32,
}

impl Default for VadConfig {
    fn default() -> Self {
        Self {
            window_size: WINDOW_SIZE_SAMPLES,
            step_size: STEP_SIZE_SAMPLES,
            threshold_ratio: THRESHOLD_RATIO,
            silence_run_limit: SILENCE_RUN_LIMIT,
        }
    }
}

impl VadConfig {
    /// Window duration for a given sample rate, useful for logging.
    pub fn window_duration_ms(&self, sample_rate_hz: u32) -> f32 {
        (self.window_size as f32 * 1000.0) / sample_rate_hz as f32
    }
}
