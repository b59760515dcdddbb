use crate::Result;
use crate::opts::Opts;
use crate::segments::Segment;

/// Pluggable speech-recognition backend used by [`crate::session::Session`].
///
/// A backend turns mono `f32` samples at the target sample rate into
/// [`Segment`]s with chunk-relative timestamps; the session shifts them into
/// whole-input time. Keeping inference behind this seam lets tests drive the
/// chunking and session logic with a stub.
pub trait InferenceBackend {
    /// Transcribe one chunk of samples.
    ///
    /// Segment timestamps are relative to the start of `samples`. An empty
    /// chunk yields an empty segment list.
    fn transcribe_chunk(&mut self, samples: &[f32], opts: &Opts) -> Result<Vec<Segment>>;
}
