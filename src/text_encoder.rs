use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that joins segment texts into plain text.
///
/// Design:
/// - We stream output directly to a `Write` implementation.
/// - Segments are separated by single spaces; a trailing newline is written
///   on close so the transcript ends like a normal text file.
/// - Empty output stays empty: a run with no segments writes nothing at all.
pub struct TextEncoder<W: Write> {
    /// The underlying writer we stream text into.
    w: W,

    /// Whether the next segment will be the first one written.
    /// This lets us correctly place separators between segments.
    first: bool,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> TextEncoder<W> {
    /// Create a new plain-text encoder that writes to the provided writer.
    pub fn new(w: W) -> Self {
        Self {
            w,
            first: true,
            closed: false,
        }
    }
}

impl<W: Write> SegmentEncoder for TextEncoder<W> {
    /// Append one segment's text, preceded by a space separator when needed.
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        let text = seg.text.trim();
        if text.is_empty() {
            return Ok(());
        }

        if !self.first {
            self.w.write_all(b" ")?;
        }
        self.first = false;

        self.w.write_all(text.as_bytes())?;

        // Flush so streaming consumers (stdout, pipes) see output promptly.
        self.w.flush()?;

        Ok(())
    }

    /// Terminate the transcript line and flush. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        if !self.first {
            self.w.write_all(b"\n")?;
        }
        self.w.flush()?;

        self.closed = true;
        Ok(())
    }
}
