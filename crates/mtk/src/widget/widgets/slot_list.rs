//! Scrollable grids of slots.

use mtk_core::Handler;
use mtk_core::logging::targets;
use mtk_render::{Color, Point, Rect, Renderer, Size, Transform2D};

use super::button::Button;
use super::slot::{Slot, SlotClick, slot_switch};
use crate::widget::geometry::{move_br, move_tr, place_at};
use crate::widget::{Shape, UpdateContext, Widget, WidgetSize, WidgetState};

/// A grid of [`Slot`]s with up and down scroll buttons on the right edge.
///
/// The grid fills the list from the top-left corner; as many columns as fit
/// beside the scroll buttons, as many rows as fit in the height. Rows past
/// the visible ones are reached by scrolling. Only visible slots are drawn
/// and updated.
///
/// # Example
///
/// ```
/// use mtk::widget::widgets::{Slot, SlotList};
/// use mtk::widget::WidgetSize;
/// use mtk::Size;
///
/// let mut list = SlotList::new(Size::new(200.0, 100.0), WidgetSize::Medium);
/// for _ in 0..20 {
///     list.add(Slot::new(WidgetSize::Medium));
/// }
/// assert_eq!(list.columns(), 5);
/// assert_eq!(list.visible_rows(), 3);
/// assert!(list.scroll_down());
/// ```
pub struct SlotList {
    state: WidgetState,
    size: Size,
    color: Color,
    slot_size: Size,
    slots: Vec<Slot>,
    first_row: usize,
    up_button: Button,
    down_button: Button,
    on_slot_click: Handler<SlotList, (usize, SlotClick)>,
}

impl SlotList {
    /// Create an empty list of `size` holding slots of the `slot_size` preset.
    pub fn new(size: Size, slot_size: WidgetSize) -> Self {
        let up_button = Button::new(WidgetSize::Mini, Shape::Square).with_label("^");
        let down_button = Button::new(WidgetSize::Mini, Shape::Square).with_label("v");
        Self {
            state: WidgetState::new(),
            size,
            color: Color::SHADE,
            slot_size: slot_size.slot_size(),
            slots: Vec::new(),
            first_row: 0,
            up_button,
            down_button,
            on_slot_click: Handler::new(),
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

    // =========================================================================
    // Slots
    // =========================================================================

    /// Append a slot at the end of the grid.
    pub fn add(&mut self, slot: Slot) {
        self.slots.push(slot);
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    pub fn slot_mut(&mut self, index: usize) -> Option<&mut Slot> {
        self.slots.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Index of the first slot holding no values.
    pub fn empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_empty)
    }

    /// Index of the first dragged slot.
    pub fn dragged(&self) -> Option<usize> {
        self.slots.iter().position(Slot::is_dragged)
    }

    /// Make `index` the only dragged slot.
    ///
    /// Returns `false` if there is no such slot.
    pub fn start_drag(&mut self, index: usize) -> bool {
        if index >= self.slots.len() {
            return false;
        }
        for (i, slot) in self.slots.iter_mut().enumerate() {
            slot.set_dragged(i == index);
        }
        true
    }

    /// Swap the contents of the dragged slot with `target` and stop dragging.
    ///
    /// Returns `false` if nothing is dragged or `target` is out of range.
    pub fn drop_dragged(&mut self, target: usize) -> bool {
        let Some(source) = self.dragged() else {
            return false;
        };
        if target >= self.slots.len() {
            return false;
        }
        self.swap_contents(source, target);
        self.slots[source].set_dragged(false);
        tracing::debug!(target: targets::WIDGET, source, target, "slot dropped");
        true
    }

    /// Exchange the contents of two slots. See [`slot_switch`].
    pub fn swap_contents(&mut self, a: usize, b: usize) -> bool {
        if a == b || a >= self.slots.len() || b >= self.slots.len() {
            return a == b && a < self.slots.len();
        }
        let (low, high) = (a.min(b), a.max(b));
        let (head, tail) = self.slots.split_at_mut(high);
        slot_switch(&mut head[low], &mut tail[0]);
        true
    }

    /// Install the callback run when any visible slot is clicked.
    ///
    /// The slot's own handlers run first.
    pub fn on_slot_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut SlotList, usize, SlotClick) + 'static,
    {
        self.on_slot_click
            .set(move |list, (index, click)| callback(list, index, click));
    }

    // =========================================================================
    // Layout and scrolling
    // =========================================================================

    /// Number of slot columns.
    pub fn columns(&self) -> usize {
        let button = self.up_button.size();
        let width = (self.size.width - button.width).max(0.0);
        ((width / self.slot_size.width) as usize).max(1)
    }

    /// Number of slot rows shown at once.
    pub fn visible_rows(&self) -> usize {
        ((self.size.height / self.slot_size.height) as usize).max(1)
    }

    /// Index of the topmost visible row.
    pub fn first_visible_row(&self) -> usize {
        self.first_row
    }

    /// Indices of the slots currently shown.
    pub fn visible_range(&self) -> std::ops::Range<usize> {
        let columns = self.columns();
        let start = (self.first_row * columns).min(self.slots.len());
        let end = ((self.first_row + self.visible_rows()) * columns).min(self.slots.len());
        start..end
    }

    /// Scroll one row up. Returns `false` at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.first_row == 0 {
            return false;
        }
        self.first_row -= 1;
        true
    }

    /// Scroll one row down. Returns `false` once the last row is visible.
    pub fn scroll_down(&mut self) -> bool {
        let shown = (self.first_row + self.visible_rows()) * self.columns();
        if shown >= self.slots.len() {
            return false;
        }
        self.first_row += 1;
        true
    }

    /// Center of the slot at `index` relative to the list's top-left corner,
    /// in unscaled units. `None` for slots that are not visible.
    fn cell_center(&self, index: usize) -> Option<Point> {
        if !self.visible_range().contains(&index) {
            return None;
        }
        let columns = self.columns();
        let row = index / columns - self.first_row;
        let column = index % columns;
        Some(Point::new(
            (column as f32 + 0.5) * self.slot_size.width,
            (row as f32 + 0.5) * self.slot_size.height,
        ))
    }

    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.state.is_disabled() {
            return;
        }
        self.state.track_hover(ctx.input());

        if self.up_button.update_clicked(ctx) {
            self.scroll_up();
        }
        if self.down_button.update_clicked(ctx) {
            self.scroll_down();
        }

        let visible = self.visible_range();
        for index in visible.clone() {
            let Some(slot) = self.slots.get_mut(index) else {
                break;
            };
            if let Some(click) = slot.update_clicked(ctx) {
                Handler::fire(self, |list| &mut list.on_slot_click, (index, click));
            }
        }

        // Hidden slots take no clicks, but a dragged one keeps following
        // the pointer.
        let pointer = ctx.pointer();
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_dragged() && !visible.contains(&index) {
                slot.follow_pointer(pointer);
            }
        }
    }
}

impl Widget for SlotList {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size);
        renderer.fill_rect(area, self.color);

        let (sx, sy) = transform.scale_factors();
        let top_left = area.origin;
        let mut dragged = Vec::new();
        for index in self.visible_range() {
            let Some(center) = self.cell_center(index) else {
                continue;
            };
            let at = place_at(
                transform,
                Point::new(top_left.x + center.x * sx, top_left.y + center.y * sy),
            );
            if self.slots[index].is_dragged() {
                dragged.push((index, at));
            } else {
                self.slots[index].draw(renderer, at);
            }
        }
        for (index, at) in dragged {
            self.slots[index].draw(renderer, at);
        }
        let visible = self.visible_range();
        for (index, slot) in self.slots.iter().enumerate() {
            if !visible.contains(&index) {
                slot.draw_dragged_icon(renderer, transform);
            }
        }

        let button = transform.transform_size(self.up_button.size());
        self.up_button
            .draw(renderer, transform.moved(move_tr(area.size, button)));
        self.down_button
            .draw(renderer, transform.moved(move_br(area.size, button)));
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        SlotList::update(self, ctx);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for SlotList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotList")
            .field("size", &self.size)
            .field("slots", &self.slots.len())
            .field("first_row", &self.first_row)
            .finish()
    }
}
