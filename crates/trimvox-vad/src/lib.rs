pub mod config;
pub mod constants;
pub mod detector;
pub mod energy;
pub mod threshold;
pub mod types;

// Core exports - grouped and sorted alphabetically
pub use config::VadConfig;
pub use constants::{SILENCE_RUN_LIMIT, STEP_SIZE_SAMPLES, THRESHOLD_RATIO, WINDOW_SIZE_SAMPLES};
pub use detector::EnergyVad;
pub use energy::EnergyStats;
pub use threshold::AdaptiveThreshold;
pub use types::{VadError, VadMetrics, VadState};

/// Main trait for classifying audio windows
pub trait FrameClassifier: Send {
    fn classify(&mut self, window: &[i16]) -> Result<bool, VadError>;
    fn reset(&mut self);
    fn current_state(&self) -> VadState;
}
