//! Error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The audio output device could not be opened at startup. Non-fatal:
    /// cues are silently disabled, the countdown is unaffected.
    #[error("Audio output unavailable: {0}")]
    AudioInit(String),

    /// A single cue failed to play. Non-fatal.
    #[error("Cue playback failed: {0}")]
    Playback(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, Error>;
