//! MTK - a small retained-mode widget toolkit.
//!
//! This is the main crate. It provides the widgets, the focus registry,
//! input handling and theme configuration, and re-exports the core,
//! rendering and audio crates.
//!
//! Applications drive the toolkit once per frame: draw every visible
//! widget, then update them with the frame's input.
//!
//! # Example
//!
//! ```
//! use mtk::prelude::*;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let theme = Theme::default();
//! let clicks = Rc::new(Cell::new(0));
//! let counter = clicks.clone();
//! let mut button = theme
//!     .button(WidgetSize::Medium, Shape::Rectangle)
//!     .with_label("Start")
//!     .with_on_click(move |_| counter.set(counter.get() + 1));
//!
//! let mut renderer = RecordingRenderer::new();
//! let mut focus = FocusRegistry::new();
//! let mut input = FrameInput::new();
//! input.move_pointer(Point::new(400.0, 300.0));
//!
//! // Frame 1: press.
//! button.draw(&mut renderer, Transform2D::translate(400.0, 300.0));
//! input.press_button(MouseButton::Left);
//! button.update(&mut UpdateContext::new(&input, renderer.metrics(), &mut focus));
//! input.end_frame();
//!
//! // Frame 2: release completes the click.
//! button.draw(&mut renderer, Transform2D::translate(400.0, 300.0));
//! input.release_button(MouseButton::Left);
//! button.update(&mut UpdateContext::new(&input, renderer.metrics(), &mut focus));
//!
//! assert_eq!(clicks.get(), 1);
//! ```

pub mod prelude;
pub mod theme;
pub mod widget;

pub use mtk_core::{ConnectionId, Handler, Signal, logging};
pub use mtk_render::{
    Color, Image, MonospaceMetrics, Point, RecordingRenderer, Rect, RenderError, Renderer, Size,
    TextMetrics, Transform2D,
};
pub use theme::{HexColor, Palette, Theme, ThemeError, ThemeResult};
pub use widget::{Shape, Widget, WidgetSize};

/// Graphics rendering module.
pub mod render {
    pub use mtk_render::*;
}

/// Audio module.
pub mod multimedia {
    pub use mtk_multimedia::*;
}
