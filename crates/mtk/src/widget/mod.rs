//! Widget system for MTK.
//!
//! This module provides the shared widget architecture:
//!
//! - [`Widget`] trait: the draw/update contract every widget implements
//! - [`WidgetState`]: hover, press, focus and enablement state
//! - [`FocusRegistry`]: the single keyboard-focus holder
//! - [`Input`] and [`FrameInput`]: per-frame pointer and keyboard state
//! - [`UpdateContext`]: what a widget may consult while updating
//! - [`Value`]: payloads stored in slots and switches
//!
//! # Frame Order
//!
//! Every frame the application draws its widgets, then updates them:
//!
//! ```
//! use mtk::widget::widgets::Button;
//! use mtk::widget::{FocusRegistry, FrameInput, UpdateContext, Widget, WidgetSize, Shape};
//! use mtk_render::{Color, RecordingRenderer, Renderer, Size, Transform2D};
//!
//! let mut button = Button::new(WidgetSize::Small, Shape::Rectangle).with_label("OK");
//! let mut renderer = RecordingRenderer::new();
//! let mut focus = FocusRegistry::new();
//! let input = FrameInput::new();
//!
//! renderer.begin_frame(Color::BLACK, Size::new(800.0, 600.0));
//! button.draw(&mut renderer, Transform2D::translate(400.0, 300.0));
//! renderer.end_frame();
//!
//! let metrics = *renderer.metrics();
//! let mut ctx = UpdateContext::new(&input, &metrics, &mut focus);
//! button.update(&mut ctx);
//! ```
//!
//! `update` hit-tests against the draw area computed by the previous
//! `draw`. A widget that has not been drawn yet cannot be hovered or
//! clicked.

mod base;
mod context;
mod focus;
pub mod geometry;
mod input;
mod value;
pub mod widgets;

use mtk_render::{Rect, Renderer, Size, Transform2D};

pub use base::WidgetState;
pub use context::UpdateContext;
pub use focus::{FocusHandle, FocusRegistry, Focusable};
pub use geometry::{Shape, WidgetSize};
pub use input::{FrameInput, Input, KeyCode, MouseButton};
pub use value::Value;

/// The draw/update contract shared by all widgets.
pub trait Widget {
    /// Draw the widget centered at the transform's origin.
    ///
    /// Recomputes the draw area used by the next [`update`](Self::update).
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D);

    /// Process this frame's input. Does nothing while the widget is
    /// disabled.
    fn update(&mut self, ctx: &mut UpdateContext<'_>);

    /// Logical size of the widget.
    fn size(&self) -> Size;

    /// Screen-space area computed by the last draw.
    fn draw_area(&self) -> Rect;
}
