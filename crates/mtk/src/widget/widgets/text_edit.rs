//! Single-line text input fields.

use mtk_core::logging::targets;
use mtk_core::{ConnectionId, Signal};
use mtk_render::{Color, Point, Rect, Renderer, Size, Transform2D};
use unicode_segmentation::UnicodeSegmentation;

use super::text::{Align, Text};
use crate::widget::geometry::place_at;
use crate::widget::{FocusHandle, KeyCode, MouseButton, UpdateContext, Widget, WidgetSize, WidgetState};

/// Background color of a focused text edit.
pub const TEXT_EDIT_FOCUS_COLOR: Color = Color::CRIMSON;

/// A field collecting typed text while focused.
///
/// A left press inside the field takes focus through the registry; a left
/// press anywhere else gives it up. While focused, typed characters are
/// appended and Backspace removes the last grapheme.
///
/// Edits made through input emit `text_changed`; [`TextEdit::set_text`] and
/// [`TextEdit::clear`] do not.
pub struct TextEdit {
    state: WidgetState,
    size: Size,
    color: Color,
    focus_color: Color,
    text: Text,
    text_changed: Signal<String>,
}

impl TextEdit {
    /// Create an empty field of `size` with text in the `font` preset.
    pub fn new(size: Size, font: WidgetSize) -> Self {
        Self {
            state: WidgetState::new(),
            size,
            color: Color::SHADE,
            focus_color: TEXT_EDIT_FOCUS_COLOR,
            text: Text::new(font.font_px()).with_align(Align::Left),
            text_changed: Signal::new(),
        }
    }

    /// Set the background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_focus_color(&mut self, color: Color) {
        self.focus_color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text.set_color(color);
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn text(&self) -> &str {
        self.text.text()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set_text(text);
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn set_active(&mut self, active: bool) {
        self.state.set_disabled(!active);
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        self.state.focus_handle()
    }

    /// Signal emitted with the new text after each edit made through input.
    pub fn text_changed(&self) -> &Signal<String> {
        &self.text_changed
    }

    /// Connect to `text_changed`.
    pub fn on_text_changed<F>(&self, callback: F) -> ConnectionId
    where
        F: Fn(&String) + Send + Sync + 'static,
    {
        self.text_changed.connect(callback)
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.state.is_disabled() {
            return;
        }
        let input = ctx.input();
        let inside = self.state.track_hover(input);
        if input.is_button_just_pressed(MouseButton::Left) {
            if inside {
                ctx.focus().focus_handle(self.state.focus_handle());
            } else if !ctx.focus().release(self.state.focus_handle()) {
                self.state.focus_handle().set_focused(false);
            }
        }
        if !self.state.is_focused() {
            return;
        }

        let mut content = self.text.text().to_string();
        let before = content.len();
        let mut changed = false;
        if input.is_key_just_pressed(KeyCode::Backspace) {
            if let Some((index, _)) = content.grapheme_indices(true).next_back() {
                content.truncate(index);
                changed = true;
            }
        }
        let typed = input.typed();
        if !typed.is_empty() {
            content.push_str(typed);
            changed = true;
        }
        if changed {
            tracing::trace!(target: targets::WIDGET, before, after = content.len(), "text edited");
            self.text.set_text(content.clone());
            self.text_changed.emit(content);
        }
    }
}

impl Widget for TextEdit {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size);
        let color = if self.state.is_focused() {
            self.focus_color
        } else {
            self.color
        };
        renderer.fill_rect(area, color);
        if !self.text.is_empty() {
            let anchor = Point::new(area.left(), area.center().y);
            self.text.draw(renderer, place_at(transform, anchor));
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        TextEdit::update(self, ctx);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for TextEdit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEdit")
            .field("text", &self.text.text())
            .field("focused", &self.is_focused())
            .field("disabled", &self.state.is_disabled())
            .finish()
    }
}
