//! Image handles.
//!
//! An [`Image`] is a cheap, clonable handle to decoded RGBA8 pixels. Widgets
//! store handles for backgrounds and icons; renderers decide how (and
//! whether) to upload the pixels. Two handles are equal when they refer to
//! the same decoded image, not when their pixels happen to match.
//!
//! # Example
//!
//! ```
//! use mtk_render::Image;
//!
//! let icon = Image::from_rgba8(2, 1, vec![255, 0, 0, 255, 0, 0, 255, 255])?;
//! assert_eq!(icon.width(), 2);
//! assert_eq!(icon, icon.clone());
//! # Ok::<(), mtk_render::RenderError>(())
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mtk_core::logging::targets;

use crate::error::{RenderError, RenderResult};
use crate::types::{Color, Size};

/// Unique identifier of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(u64);

impl ImageId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw id value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

struct ImageData {
    id: ImageId,
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

/// A shared handle to an RGBA8 image.
#[derive(Clone)]
pub struct Image {
    data: Arc<ImageData>,
}

impl Image {
    /// Create an image from raw RGBA8 pixels (4 bytes per pixel, row-major).
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(RenderError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            data: Arc::new(ImageData {
                id: ImageId::next(),
                width,
                height,
                pixels,
            }),
        })
    }

    /// Create an image filled with a single color.
    pub fn solid(width: u32, height: u32, color: Color) -> RenderResult<Self> {
        let unmul = |c: f32| {
            let v = if color.a > 0.0 { c / color.a } else { 0.0 };
            (v.clamp(0.0, 1.0) * 255.0).round() as u8
        };
        let texel = [
            unmul(color.r),
            unmul(color.g),
            unmul(color.b),
            (color.a.clamp(0.0, 1.0) * 255.0).round() as u8,
        ];
        let pixels = texel.repeat(width as usize * height as usize);
        Self::from_rgba8(width, height, pixels)
    }

    /// Load and decode an image file.
    ///
    /// Any format supported by the `image` crate is accepted.
    pub fn open(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| RenderError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        tracing::debug!(target: targets::IMAGE, path = %path.display(), width, height, "image loaded");
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Decode an image from encoded bytes (PNG, JPEG, ...).
    pub fn load_from_memory(bytes: &[u8]) -> RenderResult<Self> {
        let rgba = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = rgba.dimensions();
        Self::from_rgba8(width, height, rgba.into_raw())
    }

    /// Get the image's unique id.
    pub fn id(&self) -> ImageId {
        self.data.id
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.data.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.data.height
    }

    /// Image size in pixels.
    pub fn size(&self) -> Size {
        Size::from((self.data.width, self.data.height))
    }

    /// Raw RGBA8 pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.data.pixels
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        self.data.id == other.data.id
    }
}

impl Eq for Image {}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("id", &self.data.id)
            .field("width", &self.data.width)
            .field("height", &self.data.height)
            .finish()
    }
}
