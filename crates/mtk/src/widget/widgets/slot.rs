//! Value-holding slots.
//!
//! A [`Slot`] stores an ordered list of [`Value`]s (an inventory stack, for
//! instance) together with an icon, a label and a tooltip. Slots react to
//! left and right clicks, optionally modified by a "special" key, and can
//! be dragged: a dragged slot draws its icon under the pointer.
//!
//! The toolkit does not move contents around on its own. Applications
//! implement drag and drop with [`slot_switch`] and [`slot_copy`] from their
//! click handlers.

use mtk_core::Handler;
use mtk_core::logging::targets;
use mtk_render::{Color, Image, Point, Rect, Renderer, Size, Transform2D};

use super::info_window::InfoWindow;
use super::text::Text;
use crate::widget::geometry::{move_tl, place_at};
use crate::widget::{KeyCode, MouseButton, UpdateContext, Value, Widget, WidgetSize, WidgetState};

/// Background color of a slot.
pub const SLOT_COLOR: Color = Color::SHADE;

/// Which click a slot received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotClick {
    Left,
    Right,
    /// Left click with the special key held.
    SpecialLeft,
    /// Right click with the special key held.
    SpecialRight,
}

/// A widget storing values, with an icon, a label and a tooltip.
pub struct Slot {
    state: WidgetState,
    size: Size,
    color: Color,
    background: Option<Image>,
    values: Vec<Value>,
    icon: Option<Image>,
    label: Text,
    count_label: Text,
    info: InfoWindow,
    pointer: Point,
    dragged: bool,
    special_key: Option<KeyCode>,
    left_click: Handler<Slot>,
    right_click: Handler<Slot>,
    special_left_click: Handler<Slot>,
    special_right_click: Handler<Slot>,
}

impl Slot {
    /// Create an empty slot with a preset size.
    pub fn new(size: WidgetSize) -> Self {
        let font_px = WidgetSize::Mini.font_px();
        Self {
            state: WidgetState::new(),
            size: size.slot_size(),
            color: SLOT_COLOR,
            background: None,
            values: Vec::new(),
            icon: None,
            label: Text::new(font_px),
            count_label: Text::new(font_px),
            info: InfoWindow::new(),
            pointer: Point::ZERO,
            dragged: false,
            special_key: None,
            left_click: Handler::new(),
            right_click: Handler::new(),
            special_left_click: Handler::new(),
            special_right_click: Handler::new(),
        }
    }

    /// Set the font size of the label and counter using builder pattern.
    pub fn with_font_size(mut self, size: WidgetSize) -> Self {
        self.label.set_font_px(size.font_px());
        self.count_label.set_font_px(size.font_px());
        self
    }

    /// Set the background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    // =========================================================================
    // Values
    // =========================================================================

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of stored values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append values.
    pub fn add_values(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values.extend(values);
    }

    /// Append one value.
    pub fn add_value(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Replace the values. Icon, label and tooltip are left alone.
    pub fn set_values(&mut self, values: Vec<Value>) {
        self.values = values;
    }

    /// Remove and return the last value.
    ///
    /// Removing the last remaining value clears the whole slot.
    pub fn pop(&mut self) -> Option<Value> {
        let value = self.values.pop()?;
        if self.values.is_empty() {
            self.clear();
        }
        Some(value)
    }

    /// Remove values, icon, label and tooltip, and stop dragging.
    pub fn clear(&mut self) {
        self.values.clear();
        self.icon = None;
        self.label.clear();
        self.info.set_text("");
        self.dragged = false;
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn icon(&self) -> Option<&Image> {
        self.icon.as_ref()
    }

    /// Set the icon. It is drawn stretched to the slot size.
    pub fn set_icon(&mut self, icon: Option<Image>) {
        self.icon = icon;
    }

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
        self.color = color;
    }

    pub fn set_background(&mut self, image: Image) {
        self.background = Some(image);
    }

    // =========================================================================
    // Interaction
    // =========================================================================

    /// Key that turns clicks into special clicks while held.
    pub fn set_special_key(&mut self, key: Option<KeyCode>) {
        self.special_key = key;
    }

    /// Start or stop dragging the icon with the pointer.
    pub fn set_dragged(&mut self, dragged: bool) {
        self.dragged = dragged;
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    /// Record the pointer position a dragged icon is drawn at.
    ///
    /// [`Slot::update_clicked`] does this on every update; owners that skip
    /// updating a slot (such as a list with the slot scrolled out of view)
    /// call it directly.
    pub fn follow_pointer(&mut self, pointer: Point) {
        self.pointer = pointer;
    }

    /// Draw only the icon, under the pointer, if the slot is dragged.
    pub fn draw_dragged_icon(&self, renderer: &mut dyn Renderer, transform: Transform2D) {
        if self.dragged {
            self.draw_icon(renderer, place_at(transform, self.pointer));
        }
    }

    fn draw_icon(&self, renderer: &mut dyn Renderer, at: Transform2D) {
        let Some(icon) = &self.icon else {
            return;
        };
        let size = self.size();
        let icon_size = icon.size();
        let fit = Transform2D::scale_xy(
            size.width / icon_size.width.max(1.0),
            size.height / icon_size.height.max(1.0),
        );
        renderer.draw_image(icon, at.then(&fit), None);
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    pub fn on_left_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Slot) + 'static,
    {
        self.left_click.set(move |slot, ()| callback(slot));
    }

    pub fn on_right_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Slot) + 'static,
    {
        self.right_click.set(move |slot, ()| callback(slot));
    }

    pub fn on_special_left_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Slot) + 'static,
    {
        self.special_left_click.set(move |slot, ()| callback(slot));
    }

    pub fn on_special_right_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Slot) + 'static,
    {
        self.special_right_click.set(move |slot, ()| callback(slot));
    }

    /// Update the slot and report the click it received, if any.
    ///
    /// At most one click is dispatched per frame, checked in this order:
    /// special right, right, special left, left.
    pub fn update_clicked(&mut self, ctx: &mut UpdateContext<'_>) -> Option<SlotClick> {
        let input = ctx.input();
        self.pointer = input.pointer_position();
        let inside = self.state.track_hover(input);
        let special = self.special_key.is_some_and(|key| input.is_key_pressed(key));

        let click = if !inside {
            None
        } else if special && input.is_button_just_pressed(MouseButton::Right) {
            Some(SlotClick::SpecialRight)
        } else if input.is_button_just_pressed(MouseButton::Right) {
            Some(SlotClick::Right)
        } else if special && input.is_button_just_pressed(MouseButton::Left) {
            Some(SlotClick::SpecialLeft)
        } else if input.is_button_just_pressed(MouseButton::Left) {
            Some(SlotClick::Left)
        } else {
            None
        };

        if let Some(click) = click {
            tracing::trace!(target: targets::WIDGET, ?click, values = self.values.len(), "slot clicked");
            let handler: fn(&mut Slot) -> &mut Handler<Slot> = match click {
                SlotClick::Left => |s| &mut s.left_click,
                SlotClick::Right => |s| &mut s.right_click,
                SlotClick::SpecialLeft => |s| &mut s.special_left_click,
                SlotClick::SpecialRight => |s| &mut s.special_right_click,
            };
            Handler::fire(self, handler, ());
        }

        self.info.update(ctx);
        click
    }
}

impl Widget for Slot {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let size = self.size();
        let area = self.state.update_draw_area(transform, size);

        let at = if self.dragged {
            place_at(transform, self.pointer)
        } else {
            transform
        };
        self.draw_icon(renderer, at);

        match &self.background {
            Some(image) => renderer.draw_image(image, transform, None),
            None => renderer.fill_rect(area, self.color),
        }

        if !self.values.is_empty() {
            self.count_label.set_text(self.values.len().to_string());
            let count_size = transform.transform_size(self.count_label.measure(&*renderer));
            let offset = move_tl(area.size, count_size);
            self.count_label.draw(renderer, transform.moved(offset));
        }
        if !self.label.is_empty() {
            self.label.draw(renderer, transform);
        }
        if self.state.is_hovered() {
            self.info.draw(renderer);
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.update_clicked(ctx);
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

impl std::fmt::Debug for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Slot")
            .field("values", &self.values)
            .field("icon", &self.icon)
            .field("label", &self.label.text())
            .field("dragged", &self.dragged)
            .finish()
    }
}

/// Exchange values, icon, label and tooltip between two slots.
pub fn slot_switch(a: &mut Slot, b: &mut Slot) {
    std::mem::swap(&mut a.values, &mut b.values);
    std::mem::swap(&mut a.icon, &mut b.icon);
    let label = a.label.text().to_string();
    a.label.set_text(b.label.text());
    b.label.set_text(label);
    let info = a.info.text().to_string();
    a.info.set_text(b.info.text());
    b.info.set_text(info);
}

/// Overwrite `to` with the values, icon, label and tooltip of `from`.
pub fn slot_copy(from: &Slot, to: &mut Slot) {
    to.values = from.values.clone();
    to.icon = from.icon.clone();
    to.label.set_text(from.label.text());
    to.info.set_text(from.info.text());
}
