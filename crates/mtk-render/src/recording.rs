//! A headless renderer that records draw calls.
//!
//! [`RecordingRenderer`] performs no rasterization. It keeps the list of
//! primitives submitted during the current frame, which makes it useful for
//! tests and for inspecting widget output without a window.

use crate::image::{Image, ImageId};
use crate::renderer::{FrameStats, MonospaceMetrics, Renderer, TextMetrics};
use crate::transform::Transform2D;
use crate::types::{Color, Point, Rect, Size};

/// A single recorded drawing primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    Rect { rect: Rect, color: Color },
    /// An image centered at `center`.
    Image {
        image: ImageId,
        center: Point,
        size: Size,
        mask: Option<Color>,
    },
    /// A text run with its top-left corner at `origin`.
    Text {
        text: String,
        origin: Point,
        color: Color,
        font_px: f32,
    },
}

/// Renderer that records primitives instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    metrics: MonospaceMetrics,
    clear_color: Color,
    viewport: Size,
    commands: Vec<DrawCommand>,
}

impl RecordingRenderer {
    /// Create a recorder with 7x13 monospace metrics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder with custom metrics.
    pub fn with_metrics(metrics: MonospaceMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    /// Metrics used for text measurement.
    pub fn metrics(&self) -> &MonospaceMetrics {
        &self.metrics
    }

    /// Commands recorded since the last `begin_frame` or `clear`.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Discard recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Clear color of the current frame.
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Viewport size of the current frame.
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// All recorded text runs, in draw order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded filled rectangles, in draw order.
    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Rect { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }

    /// All recorded images, in draw order.
    pub fn images(&self) -> Vec<(ImageId, Point)> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Image { image, center, .. } => Some((*image, *center)),
                _ => None,
            })
            .collect()
    }
}

impl TextMetrics for RecordingRenderer {
    fn measure_text(&self, text: &str, font_px: f32) -> Size {
        self.metrics.measure_text(text, font_px)
    }

    fn line_height(&self, font_px: f32) -> f32 {
        self.metrics.line_height(font_px)
    }
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self, clear_color: Color, viewport_size: Size) {
        self.clear_color = clear_color;
        self.viewport = viewport_size;
        self.commands.clear();
    }

    fn end_frame(&mut self) -> FrameStats {
        FrameStats {
            draw_calls: self.commands.len() as u32,
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::Rect { rect, color });
    }

    fn draw_image(&mut self, image: &Image, transform: Transform2D, mask: Option<Color>) {
        self.commands.push(DrawCommand::Image {
            image: image.id(),
            center: transform.translation(),
            size: transform.transform_size(image.size()),
            mask,
        });
    }

    fn draw_text(&mut self, text: &str, transform: Transform2D, color: Color, font_px: f32) {
        if text.is_empty() {
            return;
        }
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            origin: transform.translation(),
            color,
            font_px,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut r = RecordingRenderer::new();
        r.begin_frame(Color::BLACK, Size::new(800.0, 600.0));
        r.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::RED);
        r.draw_text("hi", Transform2D::translate(5.0, 5.0), Color::WHITE, 13.0);
        r.draw_text("", Transform2D::IDENTITY, Color::WHITE, 13.0);

        assert_eq!(r.texts(), vec!["hi"]);
        assert_eq!(r.rects().len(), 1);
        assert_eq!(r.end_frame().draw_calls, 2);
    }

    #[test]
    fn test_begin_frame_resets() {
        let mut r = RecordingRenderer::new();
        r.fill_rect(Rect::ZERO, Color::RED);
        r.begin_frame(Color::WHITE, Size::new(10.0, 10.0));
        assert!(r.commands().is_empty());
        assert_eq!(r.clear_color(), Color::WHITE);
    }

    #[test]
    fn test_image_center_follows_transform() {
        let mut r = RecordingRenderer::new();
        let img = Image::solid(4, 2, Color::RED).unwrap();
        r.draw_image(&img, Transform2D::translate(50.0, 60.0), None);
        assert_eq!(r.images(), vec![(img.id(), Point::new(50.0, 60.0))]);
    }
}
