use crate::Result;
use crate::segments::Segment;

/// Streaming sink for transcription segments.
///
/// Encoders receive segments in transcript order and own their output
/// framing. `close` must be idempotent; writing after `close` is an error.
pub trait SegmentEncoder {
    fn write_segment(&mut self, seg: &Segment) -> Result<()>;
    fn close(&mut self) -> Result<()>;
}
