//! Error types for the multimedia module.

use thiserror::Error;

/// Multimedia-specific errors.
#[derive(Error, Debug)]
pub enum MultimediaError {
    /// Sample rate or channel count is zero.
    #[error("invalid sample format: {sample_rate} Hz, {channels} channel(s)")]
    InvalidFormat { sample_rate: u32, channels: u16 },

    /// The audio backend could not be initialized.
    #[error("audio backend initialization failed: {0}")]
    Initialization(String),

    /// The audio backend refused a stream.
    #[error("playback error: {0}")]
    Playback(String),

    /// Audio data could not be decoded.
    #[error("failed to decode audio: {0}")]
    Decode(String),

    /// I/O error while reading audio data.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "rodio")]
impl From<rodio::StreamError> for MultimediaError {
    fn from(err: rodio::StreamError) -> Self {
        Self::Initialization(err.to_string())
    }
}

#[cfg(feature = "rodio")]
impl From<rodio::PlayError> for MultimediaError {
    fn from(err: rodio::PlayError) -> Self {
        Self::Playback(err.to_string())
    }
}

#[cfg(feature = "rodio")]
impl From<rodio::decoder::DecoderError> for MultimediaError {
    fn from(err: rodio::decoder::DecoderError) -> Self {
        Self::Decode(err.to_string())
    }
}

/// A specialized Result type for multimedia operations.
pub type Result<T> = std::result::Result<T, MultimediaError>;
