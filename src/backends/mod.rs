//! Speech-recognition backend implementations.

pub mod whisper;
