//! Error types for the render crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while preparing render resources.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An image file could not be opened or decoded.
    #[error("failed to load image {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// In-memory image bytes could not be decoded.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// Invalid image dimensions (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel buffer length does not match the declared dimensions.
    #[error("pixel buffer has {actual} bytes, expected {expected}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
