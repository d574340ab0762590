use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use trimvox_app::pipeline;
use trimvox_vad::constants::{
    SILENCE_RUN_LIMIT, STEP_SIZE_SAMPLES, THRESHOLD_RATIO, WINDOW_SIZE_SAMPLES,
};
use trimvox_vad::VadConfig;

/// Strip silence from a stereo recording and keep the livelier channel.
///
/// Both channels are run through an adaptive energy detector; the one
/// that retains more speech samples is written out as mono.
#[derive(Parser, Debug)]
#[command(name = "trimvox", version, about)]
struct Cli {
    /// Input stereo WAV file
    input: PathBuf,

    /// Basename for the output file; `.wav` is appended
    output_basename: String,

    /// Samples per classification window
    #[arg(long, default_value_t = WINDOW_SIZE_SAMPLES)]
    window_size: usize,

    /// Samples dropped from the input queue per window pulled
    #[arg(long, default_value_t = STEP_SIZE_SAMPLES)]
    step_size: usize,

    /// Local threshold position within a window's energy spread
    #[arg(long, default_value_t = THRESHOLD_RATIO)]
    threshold_ratio: f64,

    /// Silent windows tolerated before output is suppressed
    #[arg(long, default_value_t = SILENCE_RUN_LIMIT)]
    silence_limit: u32,
}

fn init_logging() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = VadConfig {
        window_size: cli.window_size,
        step_size: cli.step_size,
        threshold_ratio: cli.threshold_ratio,
        silence_run_limit: cli.silence_limit,
    };
    anyhow::ensure!(config.window_size > 0, "window size must be positive");
    anyhow::ensure!(config.step_size > 0, "step size must be positive");

    let pcm = trimvox_audio::read_stereo(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    let sample_rate = pcm.sample_rate;
    info!(
        "Processing {} frames per channel at {} Hz ({:.1} ms windows)",
        pcm.left.len(),
        sample_rate,
        config.window_duration_ms(sample_rate)
    );

    let selection = pipeline::process_stereo(pcm, config).await?;
    info!(
        "Selected {:?} channel with {} retained samples",
        selection.channel,
        selection.samples.len()
    );

    let output_path = format!("{}.wav", cli.output_basename);
    trimvox_audio::write_mono(&output_path, sample_rate, &selection.samples)
        .with_context(|| format!("failed to write {}", output_path))?;

    Ok(())
}
