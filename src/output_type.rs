/// The supported output formats for encoded transcription segments.
///
/// Why this exists:
/// - We want a single, strongly-typed representation of output formats
///   across the CLI and library code.
/// - Each variant maps to a concrete `SegmentEncoder` implementation.
///
/// The transcription CLI maps its `--show-segments` flag onto `Timed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    /// Segment texts joined into plain text.
    #[default]
    Text,

    /// One `[start -> end] text` line per segment.
    Timed,
}
