//! Rendering collaborator interfaces for MTK.
//!
//! Widgets do not rasterize anything themselves. They describe their
//! appearance through the [`Renderer`] trait, which an application
//! implements on top of its graphics backend of choice. This crate provides:
//!
//! - Geometry and color types ([`Point`], [`Size`], [`Rect`], [`Color`])
//! - [`Transform2D`] for positioning widgets
//! - [`Image`] handles decoded through the `image` crate
//! - The [`Renderer`] and [`TextMetrics`] traits
//! - [`MonospaceMetrics`], the fallback 7x13 font metrics
//! - [`RecordingRenderer`], a headless renderer for tests and tooling
//!
//! # Example
//!
//! ```
//! use mtk_render::{Color, Rect, RecordingRenderer, Renderer, Size, Transform2D};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.begin_frame(Color::BLACK, Size::new(800.0, 600.0));
//! renderer.fill_rect(Rect::new(10.0, 10.0, 100.0, 50.0), Color::CRIMSON);
//! renderer.draw_text("Hello", Transform2D::translate(20.0, 20.0), Color::WHITE, 13.0);
//! let stats = renderer.end_frame();
//! assert_eq!(stats.draw_calls, 2);
//! ```

mod error;
pub mod image;
pub mod recording;
pub mod renderer;
pub mod transform;
pub mod types;

pub use error::{RenderError, RenderResult};
pub use image::{Image, ImageId};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::{FrameStats, MonospaceMetrics, Renderer, TextMetrics};
pub use transform::Transform2D;
pub use types::{Color, Point, Rect, Size};
