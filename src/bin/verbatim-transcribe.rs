// Transcribe an audio clip with a local Whisper model.
//
// Examples
// --------
// Transcribe a file and print the text:
//
//   verbatim-transcribe sample.wav
//
// Use a different model, show segment timings, and save to disk:
//
//   verbatim-transcribe sample.wav --model medium --show-segments --output transcript.txt
//
// Feed the file in 500ms chunks to simulate a live session:
//
//   verbatim-transcribe sample.wav --live-session-ms 500

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use clap::Parser;

use verbatim::chunker::chunk_samples_from_millis;
use verbatim::decode::decode_audio_file;
use verbatim::logging;
use verbatim::opts::{Device, Opts};
use verbatim::output_type::OutputType;
use verbatim::segment_encoder::SegmentEncoder;
use verbatim::session::Session;
use verbatim::text_encoder::TextEncoder;
use verbatim::timed_encoder::TimedEncoder;

#[derive(Parser, Debug)]
#[command(name = "verbatim-transcribe")]
#[command(about = "Transcribe an audio clip with Whisper", long_about = None)]
struct Args {
    /// Path to the audio clip to transcribe.
    audio: PathBuf,

    /// Model name (tiny, base, small, medium, large-v3, ...) or a path to a
    /// ggml model file. Names resolve to `<model-dir>/ggml-<name>.bin`.
    #[arg(long, default_value = "small")]
    model: String,

    /// Directory where named models are stored.
    #[arg(long, default_value = "./models")]
    model_dir: PathBuf,

    /// Computation device.
    #[arg(long, value_enum, default_value_t = Device::Cpu)]
    device: Device,

    /// Optional language hint (e.g. "en", "ti"); auto-detect when omitted.
    #[arg(long)]
    language: Option<String>,

    /// Optional prompt to bias decoding toward domain vocabulary.
    #[arg(long)]
    initial_prompt: Option<String>,

    /// Save the transcript to this file instead of printing.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Display timing information for each segment.
    #[arg(long, default_value_t = false)]
    show_segments: bool,

    /// Feed the audio to the model in fixed chunks of this many milliseconds,
    /// simulating a live session. Default: the whole file as one chunk.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    live_session_ms: Option<u64>,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let model_path = resolve_model_path(&args.model, &args.model_dir)?;
    let buffer = decode_audio_file(&args.audio)?;

    tracing::info!(
        audio = %args.audio.display(),
        duration_seconds = buffer.duration_seconds(),
        model = %model_path,
        "starting transcription"
    );

    let opts = Opts {
        language: args.language.clone(),
        initial_prompt: args.initial_prompt.clone(),
        chunk_samples: args.live_session_ms.map(chunk_samples_from_millis),
    };

    let mut session = Session::new(&model_path, args.device)?;
    session.transcribe(&buffer, &opts)?;

    let output_type = if args.show_segments {
        OutputType::Timed
    } else {
        OutputType::Text
    };

    let mut rendered = Vec::new();
    {
        let mut encoder: Box<dyn SegmentEncoder> = match output_type {
            OutputType::Text => Box::new(TextEncoder::new(&mut rendered)),
            OutputType::Timed => Box::new(TimedEncoder::new(&mut rendered)),
        };
        session.write_to(&mut *encoder)?;
    }

    write_output(args.output.as_deref(), &rendered)?;
    Ok(())
}

/// Map `--model` to a ggml file path.
///
/// An existing path is used as-is; anything else is treated as a model name
/// under `model_dir`, matching the layout `model-downloader` produces.
fn resolve_model_path(model: &str, model_dir: &Path) -> Result<String> {
    if Path::new(model).is_file() {
        return Ok(model.to_owned());
    }

    let candidate = model_dir.join(format!("ggml-{model}.bin"));
    ensure!(
        candidate.is_file(),
        "model '{model}' not found at {}; fetch it with: model-downloader --name {model}",
        candidate.display()
    );

    Ok(candidate.to_string_lossy().into_owned())
}

fn write_output(path: Option<&Path>, rendered: &[u8]) -> Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory: {}", parent.display())
                    })?;
                }
            }
            fs::write(path, rendered)
                .with_context(|| format!("failed to write transcript: {}", path.display()))
        }
        None => {
            std::io::stdout()
                .write_all(rendered)
                .context("failed to write transcript to stdout")
        }
    }
}
