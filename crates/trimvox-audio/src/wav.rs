use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use tracing::info;

use crate::error::AudioError;

/// A stereo recording split into its two channels.
#[derive(Debug, Clone)]
pub struct StereoPcm {
    pub sample_rate: u32,
    pub left: Vec<i16>,
    pub right: Vec<i16>,
}

/// Load a stereo 16-bit PCM WAV file and de-interleave its channels.
///
/// Anything other than exactly two channels is rejected; the
/// channel-selection pipeline has a hard stereo assumption.
pub fn read_stereo<P: AsRef<Path>>(path: P) -> Result<StereoPcm, AudioError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    info!(
        "Loading WAV: {} Hz, {} channels, {} bits",
        spec.sample_rate, spec.channels, spec.bits_per_sample
    );

    if spec.channels != 2 {
        return Err(AudioError::UnsupportedChannelLayout {
            channels: spec.channels,
        });
    }
    if spec.bits_per_sample != 16 || spec.sample_format != SampleFormat::Int {
        return Err(AudioError::UnsupportedSampleFormat {
            bits_per_sample: spec.bits_per_sample,
            sample_format: spec.sample_format,
        });
    }

    let interleaved: Vec<i16> = reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()?;

    let frames = interleaved.len() / 2;
    let mut left = Vec::with_capacity(frames);
    let mut right = Vec::with_capacity(frames);
    for frame in interleaved.chunks_exact(2) {
        left.push(frame[0]);
        right.push(frame[1]);
    }

    info!(
        "WAV loaded: {} frames per channel at {} Hz",
        frames, spec.sample_rate
    );

    Ok(StereoPcm {
        sample_rate: spec.sample_rate,
        left,
        right,
    })
}

/// Write a mono 16-bit PCM WAV file at the given sample rate.
pub fn write_mono<P: AsRef<Path>>(
    path: P,
    sample_rate: u32,
    samples: &[i16],
) -> Result<(), AudioError> {
    let spec = WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(&path, spec)?;
    for &sample in samples {
        writer.write_sample(sample)?;
    }
    writer.finalize()?;

    info!(
        "WAV written: {} samples at {} Hz to {}",
        samples.len(),
        sample_rate,
        path.as_ref().display()
    );

    Ok(())
}
