//! Core systems for MTK.
//!
//! This crate provides the small set of building blocks shared by every
//! other MTK crate:
//!
//! - **Signal/Slot System**: value notifications with any number of listeners
//! - **Handlers**: optional, injected callbacks that borrow the widget that
//!   fired them
//! - **Logging**: `tracing` target names used across the toolkit
//!
//! # Signal Example
//!
//! ```
//! use mtk_core::Signal;
//!
//! let volume_changed = Signal::<f64>::new();
//!
//! let conn_id = volume_changed.connect(|volume| {
//!     println!("Volume changed to: {}", volume);
//! });
//!
//! volume_changed.emit(1.0);
//! volume_changed.disconnect(conn_id);
//! ```
//!
//! # Handler Example
//!
//! ```
//! use mtk_core::Handler;
//!
//! struct Counter {
//!     clicks: u32,
//!     on_click: Handler<Counter>,
//! }
//!
//! let mut counter = Counter { clicks: 0, on_click: Handler::new() };
//! counter.on_click.set(|c: &mut Counter, ()| c.clicks += 1);
//!
//! Handler::fire(&mut counter, |c| &mut c.on_click, ());
//! assert_eq!(counter.clicks, 1);
//! ```

pub mod handler;
pub mod logging;
pub mod signal;

pub use handler::Handler;
pub use signal::{ConnectionId, Signal};
