//! Decode an audio file into a normalized [`AudioBuffer`].
//!
//! Symphonia handles probing and codec decoding; this module orchestrates:
//! probe → pick audio track → decode packets → downmix → resample.
//!
//! Error handling policy (per packet):
//! - `DecodeError` → skip bad frame (common with some codecs)
//! - `IoError`     → treat as end-of-stream
//! - other errors  → fatal

use std::fs::File;
use std::path::Path;

use anyhow::{Context, anyhow, bail};
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::{CODEC_TYPE_NULL, DecoderOptions};
use symphonia::core::errors::Error as SymphoniaError;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::{MediaSourceStream, MediaSourceStreamOptions};
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

use crate::audio::{AudioBuffer, TARGET_SAMPLE_RATE, downmix_to_mono, resample_to_target};
use crate::{Error, Result};

/// Decode `path` into mono `f32` samples at the target rate.
///
/// Any container format Symphonia understands works; the file extension is
/// passed along as a probe hint. All failures surface as [`Error::Decode`].
pub fn decode_audio_file(path: impl AsRef<Path>) -> Result<AudioBuffer> {
    let path = path.as_ref();
    decode_file_inner(path).map_err(|err| Error::Decode(format!("{err:#}")))
}

fn decode_file_inner(path: &Path) -> anyhow::Result<AudioBuffer> {
    let file =
        File::open(path).with_context(|| format!("failed to open '{}'", path.display()))?;

    let mss_opts = MediaSourceStreamOptions {
        // Symphonia expects a power-of-two buffer > 32KiB for good probing behavior.
        buffer_len: 256 * 1024,
    };
    let mss = MediaSourceStream::new(Box::new(file), mss_opts);

    let mut hint = Hint::new();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        hint.with_extension(ext);
    }

    let format_opts: FormatOptions = Default::default();
    let metadata_opts: MetadataOptions = Default::default();

    let probed = symphonia::default::get_probe()
        .format(&hint, mss, &format_opts, &metadata_opts)
        .map_err(|e| anyhow!(e))
        .context("failed to probe media file")?;

    let mut format = probed.format;

    // Track selection: first decodable track with a known sample rate.
    let track = format
        .tracks()
        .iter()
        .find(|t| t.codec_params.codec != CODEC_TYPE_NULL && t.codec_params.sample_rate.is_some())
        .cloned()
        .ok_or_else(|| anyhow!("no audio track found"))?;

    let decoder_opts: DecoderOptions = Default::default();
    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &decoder_opts)
        .map_err(|e| anyhow!(e))
        .context("failed to create decoder for audio track")?;

    let mut sample_buf: Option<SampleBuffer<f32>> = None;
    let mut mono: Vec<f32> = Vec::new();
    let mut src_rate: Option<u32> = None;

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("failed reading packet"),
        };

        if packet.track_id() != track.id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(buf) => buf,
            Err(SymphoniaError::DecodeError(_)) => continue,
            Err(SymphoniaError::IoError(_)) => break,
            Err(e) => return Err(anyhow!(e)).context("decoder failure"),
        };

        let spec = *decoded.spec();
        let channels = spec.channels.count();
        if channels == 0 {
            bail!("decoded audio had zero channels");
        }
        src_rate = Some(spec.rate);

        let buf = sample_buf
            .get_or_insert_with(|| SampleBuffer::<f32>::new(decoded.capacity() as u64, spec));
        buf.copy_interleaved_ref(decoded);

        mono.extend(downmix_to_mono(buf.samples(), channels));
    }

    let src_rate = src_rate
        .or(track.codec_params.sample_rate)
        .ok_or_else(|| anyhow!("could not determine source sample rate"))?;

    let samples = if src_rate == TARGET_SAMPLE_RATE {
        mono
    } else {
        resample_to_target(mono, src_rate)?
    };

    Ok(AudioBuffer::from_samples(samples))
}
