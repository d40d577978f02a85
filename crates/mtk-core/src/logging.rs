//! Logging facilities for MTK.
//!
//! MTK uses the `tracing` crate for instrumentation. To see logs, install a
//! tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Per-frame activity (clicks, focus handoffs, signal emission) is logged at
//! `trace` level; lifecycle changes (messages dismissed, tracks started or
//! stopped, themes loaded) at `debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem, e.g.
/// `RUST_LOG=mtk::focus=trace,mtk_multimedia::audio=debug`.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "mtk_core::signal";
    /// Focus registry target.
    pub const FOCUS: &str = "mtk::focus";
    /// Widget input handling target.
    pub const WIDGET: &str = "mtk::widget";
    /// Message window and queue target.
    pub const MESSAGE: &str = "mtk::message";
    /// Theme configuration target.
    pub const THEME: &str = "mtk::theme";
    /// Audio player target.
    pub const AUDIO: &str = "mtk_multimedia::audio";
    /// Image loading target.
    pub const IMAGE: &str = "mtk_render::image";
}
