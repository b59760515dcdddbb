/// Options that control how a transcription is performed.
///
/// This struct represents *library-level configuration*, not CLI flags directly.
/// The CLI is responsible for mapping user input into this type so that:
/// - the library remains reusable outside of a CLI context
/// - other frontends (tests, batch jobs) can construct options programmatically
#[derive(Debug, Clone, Default)]
pub struct Opts {
    /// Optional language hint (e.g. `"en"`, `"ti"`).
    ///
    /// When `None`, the backend auto-detects the spoken language.
    pub language: Option<String>,

    /// Optional prompt that biases decoding toward domain vocabulary or
    /// low-resource accents.
    pub initial_prompt: Option<String>,

    /// Chunk size in samples for live-session simulation.
    ///
    /// `None` feeds the whole buffer to the backend as a single chunk.
    /// Must be nonzero when present.
    pub chunk_samples: Option<usize>,
}

/// The computation device for the inference backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Device {
    #[default]
    Cpu,
    Cuda,
}
