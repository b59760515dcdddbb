// Generate a short synthetic sine-tone WAV clip.
//
// Useful for exercising the transcription pipeline in environments without
// microphone access or real recordings.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use hound::{SampleFormat, WavSpec, WavWriter};

#[derive(Parser, Debug)]
#[command(name = "sample-audio")]
#[command(about = "Create a short sine-wave audio clip for testing", long_about = None)]
struct Args {
    /// Where to write the clip.
    #[arg(long, default_value = "sample.wav")]
    output: PathBuf,

    /// Clip length in seconds.
    #[arg(long, default_value_t = 3.0)]
    duration: f32,

    /// Sine tone frequency in Hz.
    #[arg(long, default_value_t = 440.0)]
    frequency: f32,

    /// Samples per second.
    #[arg(long, default_value_t = 16_000)]
    sample_rate: u32,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory: {}", parent.display())
            })?;
        }
    }

    let samples = sine_samples(args.frequency, args.duration, args.sample_rate);

    let spec = WavSpec {
        channels: 1,
        sample_rate: args.sample_rate,
        bits_per_sample: 16,
        sample_format: SampleFormat::Int,
    };

    let mut writer = WavWriter::create(&args.output, spec)
        .with_context(|| format!("failed to create '{}'", args.output.display()))?;
    for sample in &samples {
        writer.write_sample(*sample)?;
    }
    writer.finalize().context("failed to finalize WAV file")?;

    println!(
        "Wrote {} ({} samples @ {} Hz)",
        args.output.display(),
        samples.len(),
        args.sample_rate
    );
    Ok(())
}

/// Generate 16-bit PCM samples for a sine tone.
fn sine_samples(frequency_hz: f32, duration_sec: f32, sample_rate: u32) -> Vec<i16> {
    let total_samples = (duration_sec * sample_rate as f32) as usize;
    (0..total_samples)
        .map(|i| {
            let angle = 2.0 * std::f32::consts::PI * frequency_hz * (i as f32 / sample_rate as f32);
            (i16::MAX as f32 * angle.sin()) as i16
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sine_sample_count_matches_duration() {
        assert_eq!(sine_samples(440.0, 1.0, 16_000).len(), 16_000);
        assert_eq!(sine_samples(440.0, 0.25, 8_000).len(), 2_000);
    }

    #[test]
    fn sine_starts_at_zero_and_stays_in_range() {
        let samples = sine_samples(440.0, 0.1, 16_000);
        assert_eq!(samples[0], 0);
        assert!(samples.iter().any(|s| *s > 0));
        assert!(samples.iter().any(|s| *s < 0));
    }

    #[test]
    fn args_apply_documented_defaults() {
        let args = Args::try_parse_from(["sample-audio"]).expect("parse defaults");
        assert_eq!(args.output, PathBuf::from("sample.wav"));
        assert_eq!(args.duration, 3.0);
        assert_eq!(args.frequency, 440.0);
        assert_eq!(args.sample_rate, 16_000);
    }
}
