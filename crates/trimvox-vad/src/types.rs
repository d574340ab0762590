use thiserror::Error;

/// Detector state as seen from outside.
///
/// `Active` means silent windows still count toward the run but output
/// is not yet suppressed; `Suppressed` means the silence run has grown
/// past the configured limit and every verdict is forced non-speech
/// until a window's mean energy climbs back above the running threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VadState {
    Active,
    Suppressed,
}

/// Running counters maintained by the detector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VadMetrics {
    pub windows_processed: u64,
    pub speech_windows: u64,
    pub suppressed_windows: u64,
}

#[derive(Debug, Error)]
pub enum VadError {
    #[error("expected {expected} samples per window, got {got}")]
    WindowSize { expected: usize, got: usize },
}
