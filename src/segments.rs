use serde::Serialize;

/// One unit of transcribed output.
///
/// Timestamps are seconds into the *whole* input; the session applies the
/// chunk offset before a segment is stored or encoded.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Segment {
    pub start_seconds: f32,
    pub end_seconds: f32,
    pub text: String,
}

impl Segment {
    /// Shift this segment later in time by `offset_seconds`.
    pub fn offset_by(&mut self, offset_seconds: f32) {
        self.start_seconds += offset_seconds;
        self.end_seconds += offset_seconds;
    }
}
