//! Built-in backend powered by `whisper-rs` / `whisper.cpp`.

use std::path::Path;

use anyhow::{Context, Result, ensure};
use whisper_rs::{
    FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters, WhisperSegment,
    WhisperState,
};

use crate::backend::InferenceBackend;
use crate::opts::{Device, Opts};
use crate::segments::Segment;

pub struct WhisperBackend {
    ctx: WhisperContext,
}

impl WhisperBackend {
    /// Load a whisper.cpp ggml model from disk and initialize a backend.
    ///
    /// We fail fast on a missing model file so the error names the path rather
    /// than surfacing later as an opaque inference failure.
    pub fn new(model_path: &str, device: Device) -> crate::Result<Self> {
        load_context(model_path, device)
            .map(|ctx| Self { ctx })
            .map_err(crate::Error::from)
    }

    /// Access the underlying Whisper context.
    ///
    /// This is primarily intended for advanced or experimental use-cases.
    pub fn context(&self) -> &WhisperContext {
        &self.ctx
    }
}

impl InferenceBackend for WhisperBackend {
    fn transcribe_chunk(&mut self, samples: &[f32], opts: &Opts) -> crate::Result<Vec<Segment>> {
        if samples.is_empty() {
            return Ok(Vec::new());
        }

        run_whisper_full(&self.ctx, opts, samples)
            .and_then(collect_segments)
            .map_err(|err| crate::Error::Inference(format!("{err:#}")))
    }
}

fn load_context(model_path: &str, device: Device) -> Result<WhisperContext> {
    ensure!(!model_path.trim().is_empty(), "model path must be provided");

    let path = Path::new(model_path);
    ensure!(path.exists(), "model not found at '{}'", model_path);
    ensure!(path.is_file(), "model path is not a file: '{}'", model_path);

    let mut ctx_params = WhisperContextParameters::default();
    ctx_params.use_gpu(matches!(device, Device::Cuda));

    WhisperContext::new_with_params(model_path, ctx_params)
        .with_context(|| format!("failed to load model from path: {model_path}"))
}

fn build_full_params(opts: &Opts) -> FullParams<'_, '_> {
    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size: 5,
        patience: 1.0,
    });

    params.set_n_threads(num_cpus::get() as i32);
    params.set_translate(false);
    params.set_language(opts.language.as_deref());
    params.set_no_context(true);
    params.set_single_segment(false);

    // Pinned so repeated runs over the same input produce identical output.
    params.set_temperature(0.0);

    if let Some(prompt) = opts.initial_prompt.as_deref() {
        params.set_initial_prompt(prompt);
    }

    params.set_print_progress(false);
    params.set_print_special(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    params
}

fn run_whisper_full(ctx: &WhisperContext, opts: &Opts, samples: &[f32]) -> Result<WhisperState> {
    let params = build_full_params(opts);

    let mut state = ctx
        .create_state()
        .context("failed to create whisper state")?;

    state
        .full(params, samples)
        .context("failed to run whisper full()")?;

    Ok(state)
}

fn collect_segments(state: WhisperState) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    for whisper_segment in state.as_iter() {
        segments.push(to_segment(whisper_segment)?);
    }
    Ok(segments)
}

fn to_segment(segment: WhisperSegment) -> Result<Segment> {
    let text = segment
        .to_str()
        .context("failed to get segment text")?
        .trim()
        .to_owned();

    Ok(Segment {
        start_seconds: centiseconds_to_seconds(segment.start_timestamp()),
        end_seconds: centiseconds_to_seconds(segment.end_timestamp()),
        text,
    })
}

/// Whisper timestamps are centiseconds (1/100s).
fn centiseconds_to_seconds(cs: i64) -> f32 {
    cs as f32 / 100.0
}
