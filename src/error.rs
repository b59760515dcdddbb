use std::error::Error as StdError;

use thiserror::Error;

/// Verbatim's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Verbatim's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs. Variants follow the failure taxonomy shared by
/// both tools: transport, not-found, decode, inference, and everything else.
#[derive(Debug, Error)]
pub enum Error {
    /// No caption track, JSON transcript, or media embed could be located.
    #[error("transcript not found: {0}")]
    TranscriptNotFound(String),

    /// The audio input could not be opened, probed, or decoded.
    #[error("audio decode failed: {0}")]
    Decode(String),

    /// The speech-recognition backend failed on a chunk.
    #[error("inference failed: {0}")]
    Inference(String),

    /// A network or TLS failure while fetching a page, caption file, or model metadata.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
