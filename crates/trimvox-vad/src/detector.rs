use crate::config::VadConfig;
use crate::energy::EnergyStats;
use crate::threshold::AdaptiveThreshold;
use crate::types::{VadError, VadMetrics, VadState};
use crate::FrameClassifier;

/// Adaptive energy detector with silence-run hysteresis.
///
/// One instance serves one channel for one pass; state is never reset
/// mid-stream. Every window updates the running threshold before the
/// verdict is taken, so the comparison always uses the just-updated
/// estimate.
pub struct EnergyVad {
    config: VadConfig,
    threshold: AdaptiveThreshold,
    silence_run: u32,
    metrics: VadMetrics,
}

impl EnergyVad {
    pub fn new(config: VadConfig) -> Self {
        Self {
            threshold: AdaptiveThreshold::new(config.threshold_ratio),
            silence_run: 0,
            metrics: VadMetrics::default(),
            config,
        }
    }

    pub fn metrics(&self) -> &VadMetrics {
        &self.metrics
    }

    pub fn silence_run(&self) -> u32 {
        self.silence_run
    }

    pub fn running_threshold(&self) -> f64 {
        self.threshold.current()
    }

    /// Classify one window. `Ok(true)` means speech.
    ///
    /// Side effects happen in a fixed order: the running threshold is
    /// folded first, then the silence run is advanced or cleared against
    /// the updated estimate, and only then is the hysteresis override
    /// applied.
    pub fn classify(&mut self, window: &[i16]) -> Result<bool, VadError> {
        if window.len() != self.config.window_size {
            return Err(VadError::WindowSize {
                expected: self.config.window_size,
                got: window.len(),
            });
        }

        let stats = EnergyStats::analyze(window);
        let threshold = self.threshold.observe(&stats);

        if stats.mean <= threshold {
            self.silence_run += 1;
        } else {
            self.silence_run = 0;
        }

        let is_speech = self.silence_run <= self.config.silence_run_limit;

        self.metrics.windows_processed += 1;
        if is_speech {
            self.metrics.speech_windows += 1;
        } else {
            self.metrics.suppressed_windows += 1;
        }

        tracing::trace!(
            mean_energy = stats.mean,
            threshold,
            silence_run = self.silence_run,
            is_speech,
            "classified window"
        );

        Ok(is_speech)
    }

    pub fn current_state(&self) -> VadState {
        if self.silence_run > self.config.silence_run_limit {
            VadState::Suppressed
        } else {
            VadState::Active
        }
    }

    pub fn reset(&mut self) {
        self.threshold.reset();
        self.silence_run = 0;
        self.metrics = VadMetrics::default();
    }
}

impl FrameClassifier for EnergyVad {
    fn classify(&mut self, window: &[i16]) -> Result<bool, VadError> {
        EnergyVad::classify(self, window)
    }

    fn reset(&mut self) {
        EnergyVad::reset(self)
    }

    fn current_state(&self) -> VadState {
        EnergyVad::current_state(self)
    }
}
