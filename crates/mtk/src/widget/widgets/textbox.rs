//! Scrollable multi-line text boxes.

use mtk_render::{Color, Point, Rect, Renderer, Size, TextMetrics, Transform2D};

use super::button::Button;
use super::text::{Align, Text, break_line};
use crate::widget::geometry::{move_br, move_tr, place_at};
use crate::widget::{
    FocusHandle, KeyCode, Shape, UpdateContext, Widget, WidgetSize, WidgetState,
};

/// A box showing the tail of a list of lines, with scroll buttons.
///
/// The box keeps every line it was given and a cursor, the start id,
/// naming the newest line that is visible. Visible lines are recomputed
/// from the cursor on every update and draw: lines are wrapped to the box
/// width and collected backwards from the cursor until they fill the box
/// height. Adding text moves the cursor back to the newest line.
///
/// The arrow keys scroll only while the box holds focus. Focus is given by
/// the application through the registry and [`Textbox::focus_handle`].
pub struct Textbox {
    state: WidgetState,
    size: Size,
    color: Color,
    text: Text,
    up_button: Button,
    down_button: Button,
    content: Vec<String>,
    visible: Vec<String>,
    start_id: usize,
}

impl Textbox {
    /// Create an empty box of `size` with text in the `font` preset.
    pub fn new(size: Size, font: WidgetSize) -> Self {
        Self {
            state: WidgetState::new(),
            size,
            color: Color::SHADE,
            text: Text::new(font.font_px()).with_align(Align::Left),
            up_button: Button::new(WidgetSize::Mini, Shape::Square).with_label("^"),
            down_button: Button::new(WidgetSize::Mini, Shape::Square).with_label("v"),
            content: Vec::new(),
            visible: Vec::new(),
            start_id: 0,
        }
    }

    /// Set the background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Set the text color using builder pattern.
    pub fn with_text_color(mut self, color: Color) -> Self {
        self.text.set_color(color);
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text.set_color(color);
    }

    /// Color of the scroll buttons.
    pub fn set_button_color(&mut self, color: Color) {
        self.up_button.set_color(color);
        self.down_button.set_color(color);
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        self.state.focus_handle()
    }

    // =========================================================================
    // Content
    // =========================================================================

    /// Replace the content and scroll to the last line.
    pub fn set_text<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content = lines.into_iter().map(Into::into).collect();
        self.scroll_bottom();
    }

    /// Append a line and scroll to it.
    pub fn add_text(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
        self.scroll_bottom();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.visible.clear();
        self.start_id = 0;
    }

    /// Every line, in insertion order.
    pub fn lines(&self) -> &[String] {
        &self.content
    }

    /// All lines concatenated.
    pub fn content(&self) -> String {
        self.content.concat()
    }

    /// Lines shown after the last update or draw, top to bottom.
    pub fn visible_lines(&self) -> &[String] {
        &self.visible
    }

    // =========================================================================
    // Scrolling
    // =========================================================================

    /// Index of the newest visible line.
    pub fn start_id(&self) -> usize {
        self.start_id
    }

    pub fn scroll_bottom(&mut self) {
        self.start_id = self.content.len().saturating_sub(1);
    }

    /// Move one line towards the beginning. Returns `false` at the first line.
    pub fn scroll_up(&mut self) -> bool {
        if self.start_id == 0 {
            return false;
        }
        self.start_id -= 1;
        true
    }

    /// Move one line towards the end. Returns `false` at the last line.
    pub fn scroll_down(&mut self) -> bool {
        if self.start_id + 1 >= self.content.len() {
            return false;
        }
        self.start_id += 1;
        true
    }

    fn text_width(&self) -> f32 {
        (self.size.width - self.up_button.size().width).max(0.0)
    }

    fn update_visibility<M: TextMetrics + ?Sized>(&mut self, metrics: &M) {
        let font_px = self.text.font_px();
        let line_height = metrics.line_height(font_px);
        let width = self.text_width();
        let end = (self.start_id + 1).min(self.content.len());

        let mut visible = Vec::new();
        let mut height = 0.0;
        for line in self.content[..end].iter().rev() {
            if height >= self.size.height {
                break;
            }
            let parts = break_line(metrics, font_px, line, width);
            height += line_height * parts.len() as f32;
            visible.extend(parts.into_iter().rev());
        }
        visible.reverse();
        self.visible = visible;
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.state.is_disabled() {
            return;
        }
        let input = ctx.input();
        self.state.track_hover(input);
        if self.state.is_focused() {
            if input.is_key_just_pressed(KeyCode::ArrowDown) {
                self.scroll_down();
            }
            if input.is_key_just_pressed(KeyCode::ArrowUp) {
                self.scroll_up();
            }
        }
        if self.up_button.update_clicked(ctx) {
            self.scroll_up();
        }
        if self.down_button.update_clicked(ctx) {
            self.scroll_down();
        }
        self.update_visibility(ctx.metrics());
    }
}

impl Widget for Textbox {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size);
        renderer.fill_rect(area, self.color);

        self.update_visibility(&*renderer);
        if !self.visible.is_empty() {
            self.text.set_text(self.visible.join("\n"));
            let block = transform.transform_size(self.text.measure(&*renderer));
            let anchor = Point::new(area.left(), area.top() + block.height / 2.0);
            self.text.draw(renderer, place_at(transform, anchor));
        }

        let button = transform.transform_size(self.up_button.size());
        self.up_button
            .draw(renderer, transform.moved(move_tr(area.size, button)));
        self.down_button
            .draw(renderer, transform.moved(move_br(area.size, button)));
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        Textbox::update(self, ctx);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for Textbox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Textbox")
            .field("size", &self.size)
            .field("lines", &self.content.len())
            .field("start_id", &self.start_id)
            .field("visible", &self.visible)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{FocusRegistry, FrameInput, MouseButton};
    use mtk_render::{MonospaceMetrics, RecordingRenderer};

    // Small text is 15px per line, so 30px fits exactly two lines.
    fn textbox(lines: &[&str]) -> Textbox {
        let mut textbox = Textbox::new(Size::new(200.0, 30.0), WidgetSize::Small);
        textbox.set_text(lines.iter().copied());
        textbox
    }

    fn update(textbox: &mut Textbox, input: &FrameInput, focus: &mut FocusRegistry) {
        let metrics = MonospaceMetrics::new();
        textbox.update(&mut UpdateContext::new(input, &metrics, focus));
    }

    #[test]
    fn test_visible_tail() {
        let mut textbox = textbox(&["a", "b", "c"]);
        assert_eq!(textbox.start_id(), 2);
        update(&mut textbox, &FrameInput::new(), &mut FocusRegistry::new());
        assert_eq!(textbox.visible_lines(), &["b", "c"]);
    }

    #[test]
    fn test_scroll_bounds() {
        let mut textbox = textbox(&["a", "b", "c"]);
        assert!(!textbox.scroll_down());
        assert!(textbox.scroll_up());
        assert!(textbox.scroll_up());
        assert!(!textbox.scroll_up());
        update(&mut textbox, &FrameInput::new(), &mut FocusRegistry::new());
        assert_eq!(textbox.visible_lines(), &["a"]);
    }

    #[test]
    fn test_add_text_scrolls_to_bottom() {
        let mut textbox = textbox(&["a", "b", "c"]);
        textbox.scroll_up();
        textbox.add_text("d");
        assert_eq!(textbox.start_id(), 3);
        assert_eq!(textbox.content(), "abcd");
    }

    #[test]
    fn test_wrapped_lines_fill_height() {
        // 200px box minus a 30px button leaves 170px; 15px glyphs are
        // about 8px wide so a 40 character line wraps into two parts.
        let long = "x".repeat(40);
        let mut textbox = textbox(&["a", &long]);
        update(&mut textbox, &FrameInput::new(), &mut FocusRegistry::new());
        assert_eq!(textbox.visible_lines().len(), 2);
        assert!(textbox.visible_lines().iter().all(|l| l.starts_with('x')));
    }

    #[test]
    fn test_keys_scroll_only_when_focused() {
        let mut textbox = textbox(&["a", "b", "c"]);
        let mut focus = FocusRegistry::new();
        let mut input = FrameInput::new();
        input.press_key(KeyCode::ArrowUp);
        update(&mut textbox, &input, &mut focus);
        assert_eq!(textbox.start_id(), 2);

        focus.focus_handle(textbox.focus_handle());
        update(&mut textbox, &input, &mut focus);
        assert_eq!(textbox.start_id(), 1);
    }

    #[test]
    fn test_scroll_button() {
        let mut textbox = Textbox::new(Size::new(200.0, 90.0), WidgetSize::Small);
        textbox.set_text(["a", "b", "c"]);
        let mut renderer = RecordingRenderer::new();
        textbox.draw(&mut renderer, Transform2D::translate(100.0, 45.0));
        assert_eq!(renderer.texts(), vec!["a\nb\nc", "^", "v"]);

        // Up button sits in the top-right corner.
        let mut input = FrameInput::new();
        input.move_pointer(Point::new(185.0, 15.0));
        input.press_button(MouseButton::Left);
        update(&mut textbox, &input, &mut FocusRegistry::new());
        input.end_frame();
        input.release_button(MouseButton::Left);
        update(&mut textbox, &input, &mut FocusRegistry::new());
        assert_eq!(textbox.start_id(), 1);
    }

    #[test]
    fn test_clear() {
        let mut textbox = textbox(&["a"]);
        textbox.clear();
        assert!(textbox.lines().is_empty());
        assert_eq!(textbox.start_id(), 0);
        update(&mut textbox, &FrameInput::new(), &mut FocusRegistry::new());
        assert!(textbox.visible_lines().is_empty());
    }
}
