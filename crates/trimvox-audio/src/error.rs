use thiserror::Error;

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("insufficient data: {available} samples buffered, {needed} needed for a window")]
    InsufficientData { available: usize, needed: usize },

    #[error("unsupported channel layout: expected 2 channels, got {channels}")]
    UnsupportedChannelLayout { channels: u16 },

    #[error("unsupported sample format: {bits_per_sample}-bit {sample_format:?}")]
    UnsupportedSampleFormat {
        bits_per_sample: u16,
        sample_format: hound::SampleFormat,
    },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),
}
