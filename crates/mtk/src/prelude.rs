//! Prelude module for MTK.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use mtk::prelude::*;
//! ```

// ============================================================================
// Signals and Handlers
// ============================================================================

pub use mtk_core::{ConnectionId, Handler, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    FocusHandle, FocusRegistry, FrameInput, Input, KeyCode, MouseButton, Shape, UpdateContext,
    Value, Widget, WidgetSize,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{
    Align, Button, ClickSound, InfoWindow, MessageQueue, MessageWindow, Slot, SlotClick,
    SlotList, Switch, SwitchChange, SwitchValue, Text, TextEdit, Textbox, slot_copy, slot_switch,
};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::theme::Theme;

// ============================================================================
// Rendering
// ============================================================================

pub use mtk_render::{
    Color, Image, MonospaceMetrics, Point, RecordingRenderer, Rect, Renderer, Size, TextMetrics,
    Transform2D,
};

// ============================================================================
// Audio
// ============================================================================

pub use mtk_multimedia::{AudioBackend, AudioBuffer, AudioPlayer, NullBackend, SampleFormat};
