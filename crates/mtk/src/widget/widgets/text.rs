//! Text labels and line wrapping.
//!
//! [`Text`] draws a short block of text (a label, a value, a tooltip) in a
//! single color. With a maximum width set, lines wider than that are broken
//! into fixed-length chunks using [`break_line`].

use mtk_render::{Color, Point, Rect, Renderer, Size, TextMetrics, Transform2D};

use crate::widget::geometry;

/// Horizontal anchoring of a text block relative to its draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The block starts at the draw position.
    Left,
    /// The block is centered on the draw position.
    #[default]
    Center,
    /// The block ends at the draw position.
    Right,
}

/// A block of text drawn in one color and font size.
///
/// The block is always vertically centered on the draw position.
#[derive(Debug, Clone)]
pub struct Text {
    content: String,
    color: Color,
    font_px: f32,
    max_width: f32,
    align: Align,
    size: Size,
    draw_area: Rect,
}

impl Text {
    /// Create empty white text.
    pub fn new(font_px: f32) -> Self {
        Self {
            content: String::new(),
            color: Color::WHITE,
            font_px,
            max_width: 0.0,
            align: Align::Center,
            size: Size::ZERO,
            draw_area: Rect::ZERO,
        }
    }

    /// Set the content using builder pattern.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = text.into();
        self
    }

    /// Set the color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the alignment using builder pattern.
    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the maximum line width using builder pattern.
    pub fn with_max_width(mut self, width: f32) -> Self {
        self.max_width = width;
        self
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// The unwrapped content.
    pub fn text(&self) -> &str {
        &self.content
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = text.into();
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn font_px(&self) -> f32 {
        self.font_px
    }

    pub fn set_font_px(&mut self, font_px: f32) {
        self.font_px = font_px;
    }

    pub fn align(&self) -> Align {
        self.align
    }

    pub fn set_align(&mut self, align: Align) {
        self.align = align;
    }

    /// Maximum line width; zero disables wrapping.
    pub fn max_width(&self) -> f32 {
        self.max_width
    }

    pub fn set_max_width(&mut self, width: f32) {
        self.max_width = width;
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Content with long lines broken at the maximum width.
    pub fn wrapped<M: TextMetrics + ?Sized>(&self, metrics: &M) -> String {
        break_line(metrics, self.font_px, &self.content, self.max_width).join("\n")
    }

    /// Size of the wrapped content.
    pub fn measure<M: TextMetrics + ?Sized>(&self, metrics: &M) -> Size {
        metrics.measure_text(&self.wrapped(metrics), self.font_px)
    }

    /// Size measured by the last draw.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Area covered by the last draw.
    pub fn draw_area(&self) -> Rect {
        self.draw_area
    }

    /// Draw the block anchored at the transform's origin.
    pub fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let wrapped = self.wrapped(&*renderer);
        self.size = renderer.measure_text(&wrapped, self.font_px);
        let screen = transform.transform_size(self.size);
        let anchor = transform.translation();
        let left = match self.align {
            Align::Left => anchor.x,
            Align::Center => anchor.x - screen.width / 2.0,
            Align::Right => anchor.x - screen.width,
        };
        let top_left = Point::new(left, anchor.y - screen.height / 2.0);
        self.draw_area = Rect::from_origin(top_left, screen);
        renderer.draw_text(
            &wrapped,
            geometry::place_at(transform, top_left),
            self.color,
            self.font_px,
        );
    }
}

// =============================================================================
// Line wrapping
// =============================================================================

/// Number of characters that fit in `width` on the first line of `line`.
///
/// Scans the line one character at a time and returns the position of the
/// first character at which the measured prefix reaches `width`. The count
/// restarts after each embedded newline. If the whole line fits, returns
/// the index of its last character.
pub fn break_point<M: TextMetrics + ?Sized>(
    metrics: &M,
    font_px: f32,
    line: &str,
    width: f32,
) -> usize {
    let mut prefix = String::with_capacity(line.len());
    let mut point: isize = -1;
    for c in line.chars() {
        if c == '\n' {
            point = -1;
        }
        prefix.push(c);
        point += 1;
        if metrics.measure_text(&prefix, font_px).width >= width {
            return point.max(0) as usize;
        }
    }
    line.chars().count().saturating_sub(1)
}

/// Break `line` into parts no wider than `width`.
///
/// A line that fits, or a `width` of zero, yields the line unchanged.
/// Otherwise the line is cut into chunks of [`break_point`] characters.
/// Parts never end with a newline.
pub fn break_line<M: TextMetrics + ?Sized>(
    metrics: &M,
    font_px: f32,
    line: &str,
    width: f32,
) -> Vec<String> {
    if width > 0.0 && metrics.measure_text(line, font_px).width > width {
        let point = break_point(metrics, font_px, line, width);
        split_sub_n(line, point)
            .into_iter()
            .map(|part| part.trim_end_matches('\n').to_string())
            .collect()
    } else {
        vec![line.to_string()]
    }
}

/// Split `s` into chunks of `n` characters. The last chunk may be shorter.
///
/// `n == 0` yields the whole string as a single chunk.
pub fn split_sub_n(s: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return vec![s.to_string()];
    }
    let chars: Vec<char> = s.chars().collect();
    chars.chunks(n).map(|chunk| chunk.iter().collect()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use mtk_render::{DrawCommand, MonospaceMetrics, RecordingRenderer};

    // 7x13 glyphs at the reference size.
    const PX: f32 = MonospaceMetrics::REFERENCE_PX;

    #[test]
    fn test_split_sub_n() {
        assert_eq!(split_sub_n("abcdefg", 3), vec!["abc", "def", "g"]);
        assert_eq!(split_sub_n("abc", 0), vec!["abc"]);
        assert!(split_sub_n("", 2).is_empty());
        assert_eq!(split_sub_n("żółw", 2), vec!["żó", "łw"]);
    }

    #[test]
    fn test_break_point() {
        let m = MonospaceMetrics::new();
        // The third glyph brings the prefix to 21.
        assert_eq!(break_point(&m, PX, "abcdef", 21.0), 2);
        assert_eq!(break_point(&m, PX, "ab", 100.0), 1);
    }

    #[test]
    fn test_break_line() {
        let m = MonospaceMetrics::new();
        assert_eq!(break_line(&m, PX, "abcdef", 0.0), vec!["abcdef"]);
        assert_eq!(break_line(&m, PX, "abc", 21.0), vec!["abc"]);
        assert_eq!(
            break_line(&m, PX, "abcdefg", 28.0),
            vec!["abc", "def", "g"]
        );
    }

    #[test]
    fn test_center_alignment() {
        let mut renderer = RecordingRenderer::new();
        let mut text = Text::new(PX).with_text("abcd");
        text.draw(&mut renderer, Transform2D::translate(100.0, 100.0));

        assert_eq!(text.size(), Size::new(28.0, 13.0));
        assert_eq!(text.draw_area(), Rect::new(86.0, 93.5, 28.0, 13.0));
        match &renderer.commands()[0] {
            DrawCommand::Text { text, origin, .. } => {
                assert_eq!(text, "abcd");
                assert_eq!(*origin, Point::new(86.0, 93.5));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_left_and_right_alignment() {
        let mut renderer = RecordingRenderer::new();
        let mut text = Text::new(PX).with_text("ab").with_align(Align::Left);
        text.draw(&mut renderer, Transform2D::translate(10.0, 10.0));
        assert_eq!(text.draw_area().left(), 10.0);

        text.set_align(Align::Right);
        text.draw(&mut renderer, Transform2D::translate(10.0, 10.0));
        assert_eq!(text.draw_area().right(), 10.0);
    }

    #[test]
    fn test_wrapped_draw() {
        let mut renderer = RecordingRenderer::new();
        let mut text = Text::new(PX).with_text("abcdefg").with_max_width(28.0);
        text.draw(&mut renderer, Transform2D::IDENTITY);
        assert_eq!(renderer.texts(), vec!["abc\ndef\ng"]);
        assert_eq!(text.size(), Size::new(21.0, 39.0));
        assert_eq!(text.measure(&MonospaceMetrics::new()), text.size());
    }
}
