//! Cyclic value selector.
//!
//! A [`Switch`] shows one value out of a list, with "<" and ">" buttons
//! stepping through the list. Stepping wraps around in both directions.
//!
//! # Example
//!
//! ```
//! use mtk::widget::widgets::{Switch, SwitchValue};
//! use mtk::widget::{Value, WidgetSize};
//!
//! let mut switch = Switch::new(WidgetSize::Medium);
//! switch.set_values(vec![
//!     SwitchValue::new("Easy", 1),
//!     SwitchValue::new("Normal", 2),
//!     SwitchValue::new("Hard", 3),
//! ]);
//! switch.on_change(|_, change| {
//!     println!("difficulty: {:?} -> {:?}", change.old, change.new);
//! });
//!
//! switch.set_index(3);
//! assert_eq!(switch.index(), 0);
//! assert_eq!(switch.find(&Value::Int(3)), Some(2));
//! ```

use mtk_core::Handler;
use mtk_core::logging::targets;
use mtk_render::{Color, Image, Rect, Renderer, Size, Transform2D};

use super::button::Button;
use super::info_window::InfoWindow;
use super::text::Text;
use crate::widget::geometry::{self, left_of, move_bc, place_at, right_of};
use crate::widget::{Shape, UpdateContext, Value, Widget, WidgetSize, WidgetState};

/// Background color of a switch.
pub const SWITCH_COLOR: Color = Color::SHADE;
/// Color of the previous/next buttons.
pub const SWITCH_BUTTON_COLOR: Color = Color::RED;

/// Margin between the value view and the step buttons.
const BUTTON_MARGIN: f32 = 10.0;

/// A value shown by a switch: what to display and what it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchValue {
    /// Displayed as an image for [`Value::Image`], as text otherwise.
    pub view: Value,
    pub value: Value,
}

impl SwitchValue {
    pub fn new(view: impl Into<Value>, value: impl Into<Value>) -> Self {
        Self {
            view: view.into(),
            value: value.into(),
        }
    }
}

/// Values before and after a step.
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchChange {
    pub old: Option<SwitchValue>,
    pub new: Option<SwitchValue>,
}

/// A value selector with previous/next buttons.
///
/// The change handler runs only when the user steps with the buttons;
/// [`set_values`](Self::set_values), [`set_index`](Self::set_index) and
/// [`reset`](Self::reset) never trigger it.
pub struct Switch {
    state: WidgetState,
    size: Size,
    color: Option<Color>,
    background: Option<Image>,
    prev_button: Button,
    next_button: Button,
    value_text: Text,
    label: Text,
    info: InfoWindow,
    values: Vec<SwitchValue>,
    index: usize,
    on_change: Handler<Switch, SwitchChange>,
}

impl Switch {
    /// Create an empty switch with a preset size.
    pub fn new(size: WidgetSize) -> Self {
        let background = size.switch_size();
        let button = || {
            Button::new(size.smaller(2), Shape::Square).with_color(SWITCH_BUTTON_COLOR)
        };
        let text_px = size.smaller(1).font_px();
        Self {
            state: WidgetState::new(),
            size: background,
            color: Some(SWITCH_COLOR),
            background: None,
            prev_button: button().with_label("<"),
            next_button: button().with_label(">"),
            value_text: Text::new(text_px).with_max_width(background.width),
            label: Text::new(text_px).with_max_width(background.width),
            info: InfoWindow::new(),
            values: Vec::new(),
            index: 0,
            on_change: Handler::new(),
        }
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn label(&self) -> &str {
        self.label.text()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label.set_text(label);
    }

    pub fn info(&self) -> &str {
        self.info.text()
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info.set_text(info);
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Use `image` as background and drop the background color.
    pub fn set_background(&mut self, image: Image) {
        self.background = Some(image);
        self.color = None;
    }

    /// Set the color of both step buttons.
    pub fn set_button_color(&mut self, color: Color) {
        self.prev_button.set_color(color);
        self.next_button.set_color(color);
    }

    pub fn set_prev_button_background(&mut self, image: Image) {
        self.prev_button.set_background(image);
    }

    pub fn set_next_button_background(&mut self, image: Image) {
        self.next_button.set_background(image);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.value_text.set_color(color);
        self.label.set_color(color);
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Replace the values.
    ///
    /// The index is kept if it is still valid, otherwise it moves back to
    /// the first value.
    pub fn set_values(&mut self, values: Vec<SwitchValue>) {
        self.values = values;
        if self.index >= self.values.len() {
            self.index = 0;
        }
        self.update_value_view();
    }

    /// Replace the values with the integers `min..max`, each shown as
    /// itself.
    pub fn set_int_values(&mut self, min: i64, max: i64) {
        let values = (min..max).map(|n| SwitchValue::new(n, n)).collect();
        self.set_values(values);
    }

    pub fn values(&self) -> &[SwitchValue] {
        &self.values
    }

    /// Index of the current value.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Select the value at `index`.
    ///
    /// Indices past the end wrap to the first value and negative indices
    /// wrap to the last one.
    pub fn set_index(&mut self, index: isize) {
        let len = self.values.len();
        self.index = if index < 0 {
            len.saturating_sub(1)
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };
        self.update_value_view();
    }

    /// Select the first value.
    pub fn reset(&mut self) {
        self.set_index(0);
    }

    /// The current value, `None` if the switch is empty.
    pub fn value(&self) -> Option<&SwitchValue> {
        self.values.get(self.index)
    }

    /// The value at `index`.
    pub fn find_value(&self, index: usize) -> Option<&SwitchValue> {
        self.values.get(index)
    }

    /// Index of the first value whose payload equals `value`.
    ///
    /// Views are not compared.
    pub fn find(&self, value: &Value) -> Option<usize> {
        self.values.iter().position(|v| v.value == *value)
    }

    /// Install the change handler, replacing any previous one.
    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&mut Switch, SwitchChange) + 'static,
    {
        self.on_change.set(callback);
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Enable or disable the switch and its buttons.
    pub fn set_active(&mut self, active: bool) {
        self.prev_button.set_active(active);
        self.next_button.set_active(active);
        self.state.set_disabled(!active);
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    fn step(&mut self, delta: isize) {
        let old = self.index;
        self.set_index(old as isize + delta);
        let change = SwitchChange {
            old: self.find_value(old).cloned(),
            new: self.value().cloned(),
        };
        tracing::trace!(target: targets::WIDGET, old, new = self.index, "switch stepped");
        Handler::fire(self, |s| &mut s.on_change, change);
    }

    fn update_value_view(&mut self) {
        let text = self
            .value()
            .and_then(|v| v.view.label())
            .unwrap_or_default();
        self.value_text.set_text(text);
    }
}

impl Widget for Switch {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size());
        match (&self.background, self.color) {
            (Some(image), _) => renderer.draw_image(image, transform, None),
            (None, Some(color)) => renderer.fill_rect(area, color),
            (None, None) => {}
        }

        let view = self.values.get(self.index).map(|v| &v.view);
        let value_area = match view {
            Some(Value::Image(image)) => {
                renderer.draw_image(image, transform, None);
                geometry::draw_area(transform, image.size())
            }
            _ => {
                self.value_text.draw(renderer, transform);
                self.value_text.draw_area()
            }
        };

        let label_size = transform.transform_size(self.label.measure(&*renderer));
        let label_offset = move_bc(area.size, label_size);
        self.label.draw(renderer, transform.moved(label_offset));
        if self.state.is_hovered() {
            self.info.draw(renderer);
        }

        let prev_size = transform.transform_size(self.prev_button.size());
        let next_size = transform.transform_size(self.next_button.size());
        let prev_at = left_of(value_area, prev_size, BUTTON_MARGIN);
        let next_at = right_of(value_area, next_size, BUTTON_MARGIN);
        self.prev_button.draw(renderer, place_at(transform, prev_at));
        self.next_button.draw(renderer, place_at(transform, next_at));
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.state.is_disabled() {
            return;
        }
        if self.state.track_hover(ctx.input()) {
            self.info.update(ctx);
        }
        if self.prev_button.update_clicked(ctx) {
            self.step(-1);
        }
        if self.next_button.update_clicked(ctx) {
            self.step(1);
        }
    }

    fn size(&self) -> Size {
        self.background
            .as_ref()
            .map(Image::size)
            .unwrap_or(self.size)
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for Switch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Switch")
            .field("index", &self.index)
            .field("values", &self.values)
            .field("state", &self.state)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::{FocusRegistry, FrameInput, MouseButton};
    use mtk_render::{MonospaceMetrics, Point, RecordingRenderer};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn three() -> Switch {
        let mut switch = Switch::new(WidgetSize::Medium);
        switch.set_values(vec![
            SwitchValue::new("a", 1),
            SwitchValue::new("b", 2),
            SwitchValue::new("c", 3),
        ]);
        switch
    }

    /// Click the center of `area` over two frames.
    fn click(switch: &mut Switch, area: Rect) {
        let metrics = MonospaceMetrics::new();
        let mut focus = FocusRegistry::new();
        let mut input = FrameInput::new();
        input.move_pointer(area.center());
        input.press_button(MouseButton::Left);
        switch.update(&mut UpdateContext::new(&input, &metrics, &mut focus));
        input.end_frame();
        input.release_button(MouseButton::Left);
        switch.update(&mut UpdateContext::new(&input, &metrics, &mut focus));
    }

    #[test]
    fn test_index_wraps() {
        let mut switch = three();
        switch.set_index(2);
        switch.set_index(3);
        assert_eq!(switch.index(), 0);
        switch.set_index(-1);
        assert_eq!(switch.index(), 2);
        switch.reset();
        assert_eq!(switch.value().map(|v| &v.value), Some(&Value::Int(1)));
    }

    #[test]
    fn test_empty_switch() {
        let mut switch = Switch::new(WidgetSize::Small);
        switch.set_index(-1);
        assert_eq!(switch.index(), 0);
        assert!(switch.value().is_none());
        assert_eq!(switch.find(&Value::Int(0)), None);
    }

    #[test]
    fn test_set_values_keeps_valid_index() {
        let mut switch = three();
        switch.set_index(1);
        switch.set_values(vec![SwitchValue::new("x", 0), SwitchValue::new("y", 0)]);
        assert_eq!(switch.index(), 1);
        switch.set_values(vec![SwitchValue::new("z", 0)]);
        assert_eq!(switch.index(), 0);
    }

    #[test]
    fn test_int_values() {
        let mut switch = Switch::new(WidgetSize::Small);
        switch.set_int_values(5, 8);
        assert_eq!(switch.values().len(), 3);
        assert_eq!(switch.find(&Value::Int(7)), Some(2));
        assert_eq!(
            switch.find_value(0),
            Some(&SwitchValue::new(5i64, 5i64))
        );
        assert!(switch.find_value(3).is_none());
    }

    #[test]
    fn test_find_ignores_view() {
        let mut switch = Switch::new(WidgetSize::Small);
        switch.set_values(vec![SwitchValue::new("one", "1")]);
        assert_eq!(switch.find(&Value::from("one")), None);
        assert_eq!(switch.find(&Value::from("1")), Some(0));
    }

    #[test]
    fn test_buttons_step_and_notify() {
        let mut switch = three();
        let changes = Rc::new(RefCell::new(Vec::new()));
        let log = changes.clone();
        switch.on_change(move |_, change| log.borrow_mut().push(change));

        let mut renderer = RecordingRenderer::new();
        switch.draw(&mut renderer, Transform2D::translate(300.0, 200.0));
        let prev = switch.prev_button.draw_area();
        let next = switch.next_button.draw_area();
        assert!(prev.right() < next.left());

        click(&mut switch, prev);
        assert_eq!(switch.index(), 2);
        click(&mut switch, next);
        assert_eq!(switch.index(), 0);

        let changes = changes.borrow();
        assert_eq!(changes.len(), 2);
        assert_eq!(changes[0].old.as_ref().map(|v| &v.value), Some(&Value::Int(1)));
        assert_eq!(changes[0].new.as_ref().map(|v| &v.value), Some(&Value::Int(3)));
        assert_eq!(changes[1].new.as_ref().map(|v| &v.value), Some(&Value::Int(1)));
    }

    #[test]
    fn test_programmatic_changes_do_not_notify() {
        let mut switch = three();
        let fired = Rc::new(RefCell::new(0));
        let count = fired.clone();
        switch.on_change(move |_, _| *count.borrow_mut() += 1);

        switch.set_index(1);
        switch.reset();
        switch.set_values(vec![SwitchValue::new("z", 0)]);
        assert_eq!(*fired.borrow(), 0);
    }

    #[test]
    fn test_disabled_switch_ignores_buttons() {
        let mut switch = three();
        let mut renderer = RecordingRenderer::new();
        switch.draw(&mut renderer, Transform2D::translate(300.0, 200.0));
        switch.set_active(false);
        let next = switch.next_button.draw_area();
        click(&mut switch, next);
        assert_eq!(switch.index(), 0);
    }

    #[test]
    fn test_draws_text_and_image_views() {
        let image = Image::solid(8, 8, Color::RED).unwrap();
        let mut switch = Switch::new(WidgetSize::Medium);
        switch.set_label("Level");
        switch.set_values(vec![
            SwitchValue::new("first", 0),
            SwitchValue::new(image.clone(), 1),
        ]);

        let mut renderer = RecordingRenderer::new();
        switch.draw(&mut renderer, Transform2D::translate(300.0, 200.0));
        assert_eq!(renderer.texts(), vec!["first", "Level", "<", ">"]);

        switch.set_index(1);
        renderer.clear();
        switch.draw(&mut renderer, Transform2D::translate(300.0, 200.0));
        assert_eq!(renderer.images(), vec![(image.id(), Point::new(300.0, 200.0))]);
        assert!(!renderer.texts().contains(&"first"));
    }
}
