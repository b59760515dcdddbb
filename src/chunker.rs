//! Fixed-duration chunking over a decoded audio buffer.
//!
//! Presenting the buffer as a chunk sequence lets one code path serve both
//! whole-file transcription (a single chunk) and live-session simulation
//! (many short chunks). Chunks are produced lazily and in order; restarting
//! iteration means re-slicing the buffer.

use crate::audio::TARGET_SAMPLE_RATE;

/// One contiguous slice of the audio buffer, consumed by one inference call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chunk<'a> {
    /// Position in the chunk sequence, starting at zero.
    pub index: usize,

    /// Offset of the first sample within the whole buffer.
    pub start_sample: usize,

    /// The samples themselves. Never empty.
    pub samples: &'a [f32],
}

impl Chunk<'_> {
    /// Chunk start as seconds into the whole input.
    pub fn start_seconds(&self) -> f32 {
        self.start_sample as f32 / TARGET_SAMPLE_RATE as f32
    }

    pub fn duration_seconds(&self) -> f32 {
        self.samples.len() as f32 / TARGET_SAMPLE_RATE as f32
    }

    /// Offset one past the last sample; equals the next chunk's `start_sample`.
    pub fn end_sample(&self) -> usize {
        self.start_sample + self.samples.len()
    }
}

/// Lazy, finite, ordered chunk sequence over a sample buffer.
///
/// With `chunk_samples = Some(c)` the sequence has `ceil(len / c)` chunks:
/// every chunk holds exactly `c` samples except possibly the last, which
/// holds the remainder (never padded, never dropped). With `None` the whole
/// buffer is one chunk. An empty buffer yields no chunks either way.
pub struct Chunks<'a> {
    samples: &'a [f32],
    chunk_samples: Option<usize>,
    pos: usize,
    index: usize,
}

impl<'a> Chunks<'a> {
    /// `chunk_samples` must be nonzero when present.
    pub fn new(samples: &'a [f32], chunk_samples: Option<usize>) -> Self {
        Self {
            samples,
            chunk_samples,
            pos: 0,
            index: 0,
        }
    }
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.samples.len() {
            return None;
        }

        // A zero step would never advance; clamp to one sample.
        let step = self.chunk_samples.unwrap_or(self.samples.len()).max(1);
        let end = (self.pos + step).min(self.samples.len());

        let chunk = Chunk {
            index: self.index,
            start_sample: self.pos,
            samples: &self.samples[self.pos..end],
        };

        self.pos = end;
        self.index += 1;
        Some(chunk)
    }
}

/// Convert a chunk duration in milliseconds to a sample count at the target rate.
pub fn chunk_samples_from_millis(millis: u64) -> usize {
    (millis as usize * TARGET_SAMPLE_RATE as usize) / 1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_chunk_size_yields_the_whole_buffer_as_one_chunk() {
        let samples = vec![0.0; 1000];
        let chunks: Vec<_> = Chunks::new(&samples, None).collect();

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].start_sample, 0);
        assert_eq!(chunks[0].samples.len(), 1000);
    }

    #[test]
    fn chunk_count_is_ceil_of_len_over_size() {
        let samples = vec![0.0; 1000];

        let chunks: Vec<_> = Chunks::new(&samples, Some(300)).collect();
        assert_eq!(chunks.len(), 4); // ceil(1000 / 300)

        let exact: Vec<_> = Chunks::new(&samples, Some(250)).collect();
        assert_eq!(exact.len(), 4); // exact multiple: no extra chunk
        assert!(exact.iter().all(|c| c.samples.len() == 250));
    }

    #[test]
    fn final_chunk_holds_the_remainder() {
        let samples = vec![0.0; 1000];
        let chunks: Vec<_> = Chunks::new(&samples, Some(300)).collect();

        assert_eq!(chunks[0].samples.len(), 300);
        assert_eq!(chunks[1].samples.len(), 300);
        assert_eq!(chunks[2].samples.len(), 300);
        assert_eq!(chunks[3].samples.len(), 100);
    }

    #[test]
    fn chunks_are_contiguous_and_non_overlapping() {
        let samples = vec![0.0; 1000];
        let chunks: Vec<_> = Chunks::new(&samples, Some(300)).collect();

        for pair in chunks.windows(2) {
            assert_eq!(pair[1].start_sample, pair[0].end_sample());
        }
        assert_eq!(chunks.last().unwrap().end_sample(), samples.len());
    }

    #[test]
    fn indexes_count_up_from_zero() {
        let samples = vec![0.0; 700];
        let chunks: Vec<_> = Chunks::new(&samples, Some(300)).collect();
        let indexes: Vec<_> = chunks.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![0, 1, 2]);
    }

    #[test]
    fn empty_buffer_yields_no_chunks() {
        assert_eq!(Chunks::new(&[], None).count(), 0);
        assert_eq!(Chunks::new(&[], Some(100)).count(), 0);
    }

    #[test]
    fn start_seconds_follows_the_sample_offset() {
        let samples = vec![0.0; TARGET_SAMPLE_RATE as usize];
        let chunks: Vec<_> =
            Chunks::new(&samples, Some(TARGET_SAMPLE_RATE as usize / 4)).collect();

        let starts: Vec<_> = chunks.iter().map(|c| c.start_seconds()).collect();
        assert_eq!(starts, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn millis_conversion_uses_the_target_rate() {
        assert_eq!(chunk_samples_from_millis(1000), 16_000);
        assert_eq!(chunk_samples_from_millis(250), 4_000);
        assert_eq!(chunk_samples_from_millis(1), 16);
    }
}
