//! Audio processing constants for the VAD pipeline

/// Standard window size for VAD classification (samples)
/// At 16kHz, 160 samples = 10ms windows
pub const WINDOW_SIZE_SAMPLES: usize = 160;

/// Number of samples discarded from the head of the input queue per
/// window pulled. Equal to the window size, so windows are disjoint
/// and cover the stream with no gaps and no overlap.
pub const STEP_SIZE_SAMPLES: usize = 160;

/// Fraction of a window's energy spread added to its minimum energy
/// when forming the window-local threshold candidate
pub const THRESHOLD_RATIO: f64 = 0.1;

/// Number of consecutive below-threshold windows tolerated before the
/// detector suppresses output (strict comparison: suppression begins
/// on the window that pushes the run past this value)
pub const SILENCE_RUN_LIMIT: u32 = 20;
