use std::io::Write;

use crate::Result;
use crate::segment_encoder::SegmentEncoder;
use crate::segments::Segment;

/// A `SegmentEncoder` that writes one timed line per segment.
///
/// Design:
/// - We stream output directly to a `Write` implementation.
/// - Each segment becomes a `[ start ->    end] text` line with fixed-width
///   second values so the timestamps line up in a terminal.
pub struct TimedEncoder<W: Write> {
    /// The underlying writer we stream lines into.
    w: W,

    /// Whether the encoder has been closed.
    closed: bool,
}

impl<W: Write> TimedEncoder<W> {
    /// Create a new timed-line encoder that writes to the provided writer.
    pub fn new(w: W) -> Self {
        Self { w, closed: false }
    }
}

impl<W: Write> SegmentEncoder for TimedEncoder<W> {
    /// Write a single segment as a timed line.
    fn write_segment(&mut self, seg: &Segment) -> Result<()> {
        if self.closed {
            return Err(crate::Error::msg(
                "cannot write segment: encoder is already closed",
            ));
        }

        writeln!(&mut self.w, "{}", format_timed_line(seg))?;

        // Flush so streaming consumers (stdout, pipes) see output promptly.
        self.w.flush()?;

        Ok(())
    }

    /// Flush the underlying writer. This is idempotent.
    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }

        self.w.flush()?;
        self.closed = true;

        Ok(())
    }
}

/// Format a segment as `[ start ->    end] text`.
///
/// Seconds are rendered with two decimals in a six-character field, which
/// keeps columns aligned for inputs up to a few hours.
fn format_timed_line(seg: &Segment) -> String {
    format!(
        "[{:6.2} -> {:6.2}] {}",
        seg.start_seconds, seg.end_seconds, seg.text
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(start: f32, end: f32, text: &str) -> Segment {
        Segment {
            start_seconds: start,
            end_seconds: end,
            text: text.to_string(),
        }
    }

    #[test]
    fn timed_line_pads_seconds_to_fixed_width() {
        assert_eq!(
            format_timed_line(&seg(0.0, 3.2, "hello")),
            "[  0.00 ->   3.20] hello"
        );
        assert_eq!(
            format_timed_line(&seg(61.25, 123.5, "later")),
            "[ 61.25 -> 123.50] later"
        );
    }

    #[test]
    fn timed_writes_one_line_per_segment() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimedEncoder::new(&mut out);

        enc.write_segment(&seg(0.0, 1.0, "first"))?;
        enc.write_segment(&seg(1.0, 2.0, "second"))?;
        enc.close()?;

        let s = std::str::from_utf8(&out)?;
        assert_eq!(s, "[  0.00 ->   1.00] first\n[  1.00 ->   2.00] second\n");
        Ok(())
    }

    #[test]
    fn timed_close_without_segments_emits_nothing() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimedEncoder::new(&mut out);
        enc.close()?;
        assert_eq!(std::str::from_utf8(&out)?, "");
        Ok(())
    }

    #[test]
    fn timed_write_after_close_errors() -> anyhow::Result<()> {
        let mut out = Vec::new();
        let mut enc = TimedEncoder::new(&mut out);
        enc.close()?;
        let err = enc.write_segment(&seg(0.0, 1.0, "nope")).unwrap_err();
        assert!(err.to_string().contains("already closed"));
        Ok(())
    }
}
