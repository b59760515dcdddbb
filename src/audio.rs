//! Audio sample normalization for the transcription half.
//!
//! Responsibilities:
//! - Hold decoded mono samples at the target rate ([`AudioBuffer`])
//! - Downmix interleaved PCM to mono
//! - Resample arbitrary source rates to the target rate (rubato)

use anyhow::{Context, Result, anyhow, bail};
use rubato::{Resampler, SincFixedIn, WindowFunction};

/// Target mono sample rate (Hz) expected by the inference backend.
pub const TARGET_SAMPLE_RATE: u32 = 16_000;

/// Source frames fed to rubato per `process()` call.
const RESAMPLE_BLOCK_FRAMES: usize = 2048;

/// Decoded audio for one transcription run: mono `f32` at [`TARGET_SAMPLE_RATE`].
///
/// The buffer is read-only after decode; chunking borrows slices of it.
#[derive(Debug, Clone, Default)]
pub struct AudioBuffer {
    samples: Vec<f32>,
}

impl AudioBuffer {
    /// Wrap samples that are already mono at the target rate.
    pub fn from_samples(samples: Vec<f32>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / TARGET_SAMPLE_RATE as f32
    }
}

/// Downmix interleaved samples into mono by averaging channels.
///
/// Policy: equal-weight average across channels (simple, predictable).
pub(crate) fn downmix_to_mono(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels <= 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Resample mono samples from `src_rate` to [`TARGET_SAMPLE_RATE`].
///
/// rubato expects fixed input blocks, so the tail is zero-padded to a full
/// block and the output truncated back to the expected frame count.
pub(crate) fn resample_to_target(mono: Vec<f32>, src_rate: u32) -> Result<Vec<f32>> {
    if src_rate == TARGET_SAMPLE_RATE {
        return Ok(mono);
    }
    if mono.is_empty() {
        return Ok(mono);
    }

    let ratio = TARGET_SAMPLE_RATE as f64 / src_rate as f64;
    let expected_frames = (mono.len() as f64 * ratio).round() as usize;

    let mut resampler = SincFixedIn::<f32>::new(
        ratio,
        2.0,
        rubato::SincInterpolationParameters {
            sinc_len: 256,
            f_cutoff: 0.95,
            interpolation: rubato::SincInterpolationType::Linear,
            oversampling_factor: 256,
            window: WindowFunction::BlackmanHarris2,
        },
        RESAMPLE_BLOCK_FRAMES,
        1, // mono
    )
    .map_err(|e| anyhow!(e))
    .context("failed to init resampler")?;

    let in_max = resampler.input_frames_max();

    let mut padded = mono;
    let rem = padded.len() % in_max;
    if rem != 0 {
        padded.resize(padded.len() + (in_max - rem), 0.0);
    }

    let mut out = Vec::with_capacity(expected_frames);
    for block in padded.chunks(in_max) {
        let result = resampler
            .process(&[block.to_vec()], None)
            .map_err(|e| anyhow!(e))
            .context("resampler process failed")?;

        if result.len() != 1 {
            bail!("expected mono output from resampler");
        }
        out.extend_from_slice(&result[0]);
    }

    out.truncate(expected_frames);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downmix_to_mono_single_channel_is_identity() {
        let input = vec![0.0, 1.0, -1.0];
        assert_eq!(downmix_to_mono(&input, 1), input);
    }

    #[test]
    fn downmix_to_mono_averages_channels() {
        // Two frames of stereo: (L=1, R=3), (L=-1, R=1) => mono: 2, 0
        let interleaved = vec![1.0, 3.0, -1.0, 1.0];
        assert_eq!(downmix_to_mono(&interleaved, 2), vec![2.0, 0.0]);
    }

    #[test]
    fn resample_is_identity_at_the_target_rate() -> anyhow::Result<()> {
        let mono = vec![0.25; 1000];
        let out = resample_to_target(mono.clone(), TARGET_SAMPLE_RATE)?;
        assert_eq!(out, mono);
        Ok(())
    }

    #[test]
    fn resample_doubles_frame_count_from_8khz() -> anyhow::Result<()> {
        let mono = vec![0.0; RESAMPLE_BLOCK_FRAMES * 2];
        let out = resample_to_target(mono, 8_000)?;
        assert_eq!(out.len(), RESAMPLE_BLOCK_FRAMES * 4);
        Ok(())
    }

    #[test]
    fn resample_truncates_padded_tail_to_expected_frames() -> anyhow::Result<()> {
        let frames = RESAMPLE_BLOCK_FRAMES + 100;
        let out = resample_to_target(vec![0.0; frames], 8_000)?;
        assert_eq!(out.len(), frames * 2);
        Ok(())
    }

    #[test]
    fn buffer_duration_matches_sample_count() {
        let buffer = AudioBuffer::from_samples(vec![0.0; TARGET_SAMPLE_RATE as usize / 2]);
        assert!((buffer.duration_seconds() - 0.5).abs() < f32::EPSILON);
        assert!(!buffer.is_empty());
        assert_eq!(buffer.len(), 8_000);
    }
}
