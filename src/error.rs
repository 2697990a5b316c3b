use thiserror::Error;

use crate::audio_system::SoundId;

/// Sound effect errors using thiserror for structured error handling.
///
/// None of these escape the player during normal use: the player logs them
/// and degrades to "no sound played". They surface only from the lower
/// layers (backends, payload synthesis, host command parsing).
#[derive(Error, Debug)]
pub enum SoundError {
    #[error("Unknown sound: {0}")]
    UnknownSound(String),

    #[error("Audio output unavailable for {sound}: {reason}")]
    StreamUnavailable { sound: SoundId, reason: String },

    #[error("Unsupported sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("Failed to create audio handle for {sound}: {reason}")]
    HandleCreation { sound: SoundId, reason: String },

    #[error("Failed to decode {sound}: {reason}")]
    DecodeFailed { sound: SoundId, reason: String },

    #[error("Failed to synthesize clip payload")]
    Synthesis(#[from] hound::Error),

    #[error("Playback of {sound} rejected: {reason}")]
    PlaybackRejected { sound: SoundId, reason: String },

    #[error("Invalid host command")]
    InvalidCommand(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from {path}")]
    LoadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
