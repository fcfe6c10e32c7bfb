//! Logging and observability
//!
//! Formatter output can be mirrored into a JSONL transcript so a deploy
//! run leaves a machine-readable record of what it printed.

pub mod transcript;

pub use transcript::{Level, Transcript, TranscriptEntry};
