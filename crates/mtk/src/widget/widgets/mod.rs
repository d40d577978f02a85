//! Standard widgets for MTK.
//!
//! This module provides the toolkit's widgets:
//!
//! - [`Text`]: Text display with alignment and wrapping
//! - [`InfoWindow`]: Tooltip following the pointer
//! - [`Button`]: Clickable button with label, tooltip and click sound
//! - [`Switch`]: Cyclic value selector
//! - [`Slot`] and [`SlotList`]: Value containers with drag support
//! - [`Textbox`]: Scrollable multi-line text
//! - [`TextEdit`]: Single-line text input
//! - [`MessageWindow`] and [`MessageQueue`]: Messages, dialogs and their stacking

mod button;
mod info_window;
mod message_queue;
mod message_window;
mod slot;
mod slot_list;
mod switch;
mod text;
mod text_edit;
mod textbox;

pub use button::{BUTTON_COLOR, BUTTON_HOVER_COLOR, BUTTON_PUSH_COLOR, Button, ClickSound};
pub use info_window::InfoWindow;
pub use message_queue::MessageQueue;
pub use message_window::{MESSAGE_DISABLED_COLOR, MessageWindow};
pub use slot::{SLOT_COLOR, Slot, SlotClick, slot_copy, slot_switch};
pub use slot_list::SlotList;
pub use switch::{SWITCH_BUTTON_COLOR, SWITCH_COLOR, Switch, SwitchChange, SwitchValue};
pub use text::{Align, Text, break_line, break_point, split_sub_n};
pub use text_edit::{TEXT_EDIT_FOCUS_COLOR, TextEdit};
pub use textbox::Textbox;
