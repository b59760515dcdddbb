//! High-level transcription session.
//!
//! A [`Session`] owns the inference backend and the transcript accumulated so
//! far. The intent is:
//! - We load the model once (expensive).
//! - We feed it chunks in order, for the whole-file case and the
//!   live-session simulation alike.
//! - The collected segments form the running transcript, in ingest order.
//!
//! Error policy: the first chunk failure aborts the run. Callers should not
//! emit output after a failed `transcribe`.

use crate::audio::AudioBuffer;
use crate::backend::InferenceBackend;
use crate::backends::whisper::WhisperBackend;
use crate::chunker::Chunks;
use crate::opts::{Device, Opts};
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;
use crate::{Error, Result};

/// The main high-level transcription entry point.
pub struct Session<B: InferenceBackend = WhisperBackend> {
    backend: B,
    segments: Vec<Segment>,
}

impl Session<WhisperBackend> {
    /// Create a session using the built-in Whisper backend.
    ///
    /// Model loading happens here; reuse the session to transcribe multiple
    /// inputs without paying that cost again.
    pub fn new(model_path: &str, device: Device) -> Result<Self> {
        Ok(Self::with_backend(WhisperBackend::new(model_path, device)?))
    }
}

impl<B: InferenceBackend> Session<B> {
    /// Create a session with a custom backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            segments: Vec::new(),
        }
    }

    /// Transcribe one chunk and append its segments to the running transcript.
    ///
    /// `start_seconds` is the chunk's offset into the whole input; returned
    /// timestamps are shifted by it before being stored. Returns the segments
    /// this call appended.
    pub fn ingest(
        &mut self,
        samples: &[f32],
        start_seconds: f32,
        opts: &Opts,
    ) -> Result<&[Segment]> {
        let mut segments = self.backend.transcribe_chunk(samples, opts)?;
        for segment in &mut segments {
            segment.offset_by(start_seconds);
        }

        let appended_from = self.segments.len();
        self.segments.extend(segments);
        Ok(&self.segments[appended_from..])
    }

    /// Transcribe a whole buffer, chunking per `opts.chunk_samples`.
    ///
    /// Chunks are processed strictly one after another; a failure on any
    /// chunk aborts the run immediately.
    pub fn transcribe(&mut self, buffer: &AudioBuffer, opts: &Opts) -> Result<()> {
        if opts.chunk_samples == Some(0) {
            return Err(Error::msg("chunk size must be at least one sample"));
        }

        for chunk in Chunks::new(buffer.samples(), opts.chunk_samples) {
            tracing::debug!(
                chunk = chunk.index,
                start_sample = chunk.start_sample,
                samples = chunk.samples.len(),
                "transcribing chunk"
            );
            self.ingest(chunk.samples, chunk.start_seconds(), opts)?;
        }

        Ok(())
    }

    /// The transcript accumulated so far, in ingest order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The running transcript as plain text (segment texts joined by spaces).
    pub fn text(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            let text = segment.text.trim();
            if text.is_empty() {
                continue;
            }
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
        out
    }

    /// Write the accumulated segments through an encoder and close it.
    pub fn write_to(&self, encoder: &mut dyn SegmentEncoder) -> Result<()> {
        for segment in &self.segments {
            encoder.write_segment(segment)?;
        }
        encoder.close()
    }

    /// Access the configured backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Access the configured backend mutably.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}
