//! State shared by interactive widgets.

use mtk_render::{Point, Rect, Size, Transform2D};

use super::focus::FocusHandle;
use super::geometry;
use super::input::{Input, MouseButton};

/// Hover, press, focus and enablement state plus the last draw area.
///
/// The flags are independent: a disabled widget may still be hovered, for
/// instance. The draw area is recomputed on every draw and read by the
/// following update, so a widget that has never been drawn has an empty
/// area and cannot be hit.
#[derive(Debug, Default)]
pub struct WidgetState {
    hovered: bool,
    pressed: bool,
    disabled: bool,
    draw_area: Rect,
    focus: FocusHandle,
}

impl WidgetState {
    /// Create an enabled, idle state with an empty draw area.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    #[inline]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable the widget. Disabling also drops a pending press.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.pressed = false;
        }
    }

    #[inline]
    pub fn is_focused(&self) -> bool {
        self.focus.is_focused()
    }

    /// The widget's focus handle.
    #[inline]
    pub fn focus_handle(&self) -> &FocusHandle {
        &self.focus
    }

    /// Draw area computed by the last draw.
    #[inline]
    pub fn draw_area(&self) -> Rect {
        self.draw_area
    }

    /// Recompute the draw area for a widget of `size` drawn with `transform`.
    pub fn update_draw_area(&mut self, transform: Transform2D, size: Size) -> Rect {
        self.draw_area = geometry::draw_area(transform, size);
        self.draw_area
    }

    /// Check whether `point` lies inside the last draw area.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.draw_area.contains(point)
    }

    /// Recompute the hover flag from the pointer position.
    pub fn track_hover(&mut self, input: &dyn Input) -> bool {
        self.hovered = self.contains(input.pointer_position());
        self.hovered
    }

    /// Run the left-button press/release cycle and recompute hover.
    ///
    /// A press inside the area arms the widget; a release completes a click
    /// only if the widget was armed and the pointer is still inside. The
    /// press is dropped on every release, wherever it happens.
    ///
    /// Returns `true` when a click completed this frame.
    pub fn track_pointer(&mut self, input: &dyn Input) -> bool {
        let inside = self.contains(input.pointer_position());
        if input.is_button_just_pressed(MouseButton::Left) && inside {
            self.pressed = true;
        }
        let mut clicked = false;
        if input.is_button_just_released(MouseButton::Left) {
            clicked = self.pressed && inside;
            self.pressed = false;
        }
        self.hovered = inside;
        clicked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::FrameInput;

    fn drawn() -> WidgetState {
        let mut state = WidgetState::new();
        state.update_draw_area(Transform2D::translate(50.0, 50.0), Size::new(20.0, 20.0));
        state
    }

    #[test]
    fn test_never_drawn_cannot_be_hit() {
        let mut state = WidgetState::new();
        let mut input = FrameInput::new();
        input.press_button(MouseButton::Left);
        assert!(!state.track_pointer(&input));
        assert!(!state.is_pressed());
        assert!(!state.is_hovered());
    }

    #[test]
    fn test_click_inside() {
        let mut state = drawn();
        let mut input = FrameInput::new();
        input.move_pointer(Point::new(50.0, 50.0));
        input.press_button(MouseButton::Left);
        assert!(!state.track_pointer(&input));
        assert!(state.is_pressed());
        assert!(state.is_hovered());

        input.end_frame();
        input.release_button(MouseButton::Left);
        assert!(state.track_pointer(&input));
        assert!(!state.is_pressed());
    }

    #[test]
    fn test_release_outside_cancels_press() {
        let mut state = drawn();
        let mut input = FrameInput::new();
        input.move_pointer(Point::new(50.0, 50.0));
        input.press_button(MouseButton::Left);
        state.track_pointer(&input);

        input.end_frame();
        input.move_pointer(Point::new(0.0, 0.0));
        input.release_button(MouseButton::Left);
        assert!(!state.track_pointer(&input));
        assert!(!state.is_pressed());
        assert!(!state.is_hovered());
    }

    #[test]
    fn test_release_without_press_is_not_click() {
        let mut state = drawn();
        let mut input = FrameInput::new();
        input.press_button(MouseButton::Left);
        input.end_frame();
        input.move_pointer(Point::new(50.0, 50.0));
        input.release_button(MouseButton::Left);
        assert!(!state.track_pointer(&input));
    }

    #[test]
    fn test_disable_drops_press() {
        let mut state = drawn();
        let mut input = FrameInput::new();
        input.move_pointer(Point::new(45.0, 45.0));
        input.press_button(MouseButton::Left);
        state.track_pointer(&input);
        state.set_disabled(true);
        assert!(!state.is_pressed());
        assert!(state.is_disabled());
    }
}
