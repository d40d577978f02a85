//! Tooltips that follow the pointer.

use mtk_render::{Color, Rect, Renderer, Transform2D};

use super::text::Text;
use crate::widget::{UpdateContext, WidgetSize};

/// A small text box anchored at the pointer.
///
/// Widgets own one and draw it while hovered. The box sits above and to
/// the right of the pointer; it is as wide as the text and one and a half
/// times as tall.
#[derive(Debug, Clone)]
pub struct InfoWindow {
    text: Text,
    color: Color,
    area: Rect,
}

impl InfoWindow {
    /// Create an empty tooltip with the default shaded background.
    pub fn new() -> Self {
        Self {
            text: Text::new(WidgetSize::Small.font_px()),
            color: Color::SHADE,
            area: Rect::ZERO,
        }
    }

    /// Set the background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn text(&self) -> &str {
        self.text.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set_text(text);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text.set_color(color);
    }

    /// Area computed by the last update.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Move the box to the pointer.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        let pointer = ctx.pointer();
        let size = self.text.measure(ctx.metrics());
        let height = size.height * 1.5;
        self.area = Rect::new(pointer.x, pointer.y - height, size.width, height);
    }

    /// Draw the box. Empty tooltips draw nothing.
    pub fn draw(&mut self, renderer: &mut dyn Renderer) {
        if self.text.is_empty() {
            return;
        }
        renderer.fill_rect(self.area, self.color);
        self.text.draw(renderer, Transform2D::at(self.area.center()));
    }
}

impl Default for InfoWindow {
    fn default() -> Self {
        Self::new()
    }
}
