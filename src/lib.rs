//! `verbatim` is a transcript toolkit with two halves sharing one library.
//!
//! This crate provides:
//! - A landing-page caption scraper (HTML `<track>` tags, embedded JSON
//!   transcript blobs, Wistia media embeds)
//! - A Whisper-based audio transcriber with optional fixed-duration chunking
//!   to simulate a live session
//! - Pluggable output encoders (plain text, timed segment listing)
//!
//! External effects (page fetches, audio decode, model inference) sit behind
//! small traits so both CLIs and tests can wire in their own implementations.

// Crate-wide error type.
pub mod error;
pub use error::{Error, Result};

// Scraper half: fetch capability, locator strategies, cue parsing.
pub mod captions;
pub mod fetch;
pub mod json_transcript;
pub mod scrape;
pub mod vtt;
pub mod wistia;

// Transcription half: decode, chunking, inference, session.
pub mod audio;
pub mod backend;
pub mod backends;
pub mod chunker;
pub mod decode;
pub mod opts;
pub mod segments;
pub mod session;

// Output selection and encoder interfaces.
pub mod output_type;
pub mod segment_encoder;

// Output encoders that serialize segments into the supported formats.
pub mod text_encoder;
pub mod timed_encoder;

// Logging configuration (binaries only).
#[cfg(feature = "logging")]
pub mod logging;
