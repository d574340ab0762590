use anyhow::Result;
use tracing::debug;

use trimvox_audio::{FrameAccumulator, StereoPcm};
use trimvox_vad::{EnergyVad, FrameClassifier, VadConfig};

/// Which channel of the stereo input won the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinningChannel {
    Left,
    Right,
}

/// The winning channel's retained samples.
#[derive(Debug)]
pub struct Selection {
    pub channel: WinningChannel,
    pub samples: Vec<i16>,
}

/// Run one channel's samples through a fresh accumulator and detector,
/// returning the retained (speech) samples.
pub fn run_channel(samples: &[i16], config: VadConfig) -> Result<Vec<i16>> {
    let accumulator = FrameAccumulator::new(config.window_size, config.step_size);
    let classifier = EnergyVad::new(config);
    drive(accumulator, classifier, samples)
}

fn drive<C: FrameClassifier>(
    mut accumulator: FrameAccumulator,
    mut classifier: C,
    samples: &[i16],
) -> Result<Vec<i16>> {
    accumulator.append(samples);

    while accumulator.has_window() {
        let window = accumulator.pull_window()?;
        if classifier.classify(&window)? {
            accumulator.accept(&window);
        }
    }

    debug!(
        input = samples.len(),
        retained = accumulator.output().len(),
        "channel processed"
    );

    Ok(accumulator.into_output())
}

/// Keep whichever channel retained more samples. The comparison is
/// strict: the right channel wins only when its count is strictly
/// larger, so ties go to the left channel.
pub fn select(left: Vec<i16>, right: Vec<i16>) -> Selection {
    if right.len() > left.len() {
        Selection {
            channel: WinningChannel::Right,
            samples: right,
        }
    } else {
        Selection {
            channel: WinningChannel::Left,
            samples: left,
        }
    }
}

/// Process both channels of a stereo recording and pick the winner.
///
/// The two pipelines share no state, so they run as independent
/// blocking tasks joined before the comparison. Sequential processing
/// would produce identical output.
pub async fn process_stereo(pcm: StereoPcm, config: VadConfig) -> Result<Selection> {
    let StereoPcm { left, right, .. } = pcm;

    let left_task = tokio::task::spawn_blocking(move || run_channel(&left, config));
    let right_task = tokio::task::spawn_blocking(move || run_channel(&right, config));

    let left_out = left_task.await??;
    let right_out = right_task.await??;

    Ok(select(left_out, right_out))
}
