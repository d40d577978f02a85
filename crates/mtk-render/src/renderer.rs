//! Renderer interface consumed by widgets.
//!
//! Widgets only need a handful of primitives: filled rectangles, sprites
//! with an optional color mask, and single-color text. Text measurement is
//! split into its own [`TextMetrics`] trait because widgets also need it
//! during input handling (line wrapping, tooltip sizing), when no renderer
//! is available.

use crate::image::Image;
use crate::transform::Transform2D;
use crate::types::{Color, Rect, Size};

/// Statistics from a frame render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Number of draw calls submitted.
    pub draw_calls: u32,
}

/// Measures rendered text.
pub trait TextMetrics {
    /// Size of `text` rendered at `font_px`.
    ///
    /// Embedded newlines start new lines: the width is that of the widest
    /// line and the height grows by one line height per line.
    fn measure_text(&self, text: &str, font_px: f32) -> Size;

    /// Height of a single line of text at `font_px`.
    fn line_height(&self, font_px: f32) -> f32 {
        self.measure_text("AA", font_px).height
    }
}

/// The 2D drawing interface widgets render through.
///
/// # Frame Lifecycle
///
/// ```ignore
/// renderer.begin_frame(Color::BLACK, viewport_size);
/// widget.draw(&mut renderer, Transform2D::translate(400.0, 300.0));
/// let stats = renderer.end_frame();
/// ```
pub trait Renderer: TextMetrics {
    /// Begin a new frame cleared to `clear_color`.
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size);

    /// End the current frame.
    fn end_frame(&mut self) -> FrameStats;

    /// Fill a screen-space rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw an image centered at the transform's origin.
    ///
    /// With a `mask`, every texel is multiplied by the mask color.
    fn draw_image(&mut self, image: &Image, transform: Transform2D, mask: Option<Color>);

    /// Draw text with its top-left corner at the transform's origin.
    fn draw_text(&mut self, text: &str, transform: Transform2D, color: Color, font_px: f32);
}

/// Fixed-advance metrics modelled on a 7x13 bitmap font.
///
/// Used when no font is loaded, and by headless renderers so that layout in
/// tests is deterministic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Glyph advance at the reference size.
    pub glyph_width: f32,
    /// Line height at the reference size.
    pub glyph_height: f32,
}

impl MonospaceMetrics {
    /// Pixel size the glyph dimensions are defined at.
    pub const REFERENCE_PX: f32 = 13.0;

    /// Create metrics for a 7x13 font.
    pub const fn new() -> Self {
        Self {
            glyph_width: 7.0,
            glyph_height: 13.0,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure_text(&self, text: &str, font_px: f32) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }
        let factor = font_px / Self::REFERENCE_PX;
        let mut lines = 0usize;
        let mut widest = 0usize;
        for line in text.split('\n') {
            lines += 1;
            widest = widest.max(line.chars().count());
        }
        // A trailing newline does not open a visible line.
        if text.ends_with('\n') {
            lines -= 1;
        }
        Size::new(
            widest as f32 * self.glyph_width * factor,
            lines as f32 * self.glyph_height * factor,
        )
    }

    fn line_height(&self, font_px: f32) -> f32 {
        self.glyph_height * font_px / Self::REFERENCE_PX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_reference_size() {
        let m = MonospaceMetrics::new();
        assert_eq!(m.measure_text("abc", 13.0), Size::new(21.0, 13.0));
        assert_eq!(m.line_height(13.0), 13.0);
    }

    #[test]
    fn test_monospace_scales_with_font() {
        let m = MonospaceMetrics::new();
        assert_eq!(m.measure_text("ab", 26.0), Size::new(28.0, 26.0));
    }

    #[test]
    fn test_monospace_multiline() {
        let m = MonospaceMetrics::new();
        assert_eq!(m.measure_text("abcd\nab\n", 13.0), Size::new(28.0, 26.0));
        assert_eq!(m.measure_text("", 13.0), Size::ZERO);
    }
}
