//! Pointer and keyboard input.
//!
//! Widgets read input through the [`Input`] trait, which answers
//! per-frame questions ("was this button just pressed?") instead of
//! delivering events. [`FrameInput`] implements it on top of winit window
//! events, and can also be driven programmatically.

use std::collections::HashSet;

use mtk_render::Point;
use winit::event::{ElementState, Ime, WindowEvent};
use winit::keyboard::PhysicalKey;

pub use winit::event::MouseButton;
pub use winit::keyboard::KeyCode;

/// Input state for the current frame.
pub trait Input {
    /// Pointer position in window coordinates.
    fn pointer_position(&self) -> Point;

    /// Check whether `button` went down this frame.
    fn is_button_just_pressed(&self, button: MouseButton) -> bool;

    /// Check whether `button` went up this frame.
    fn is_button_just_released(&self, button: MouseButton) -> bool;

    /// Check whether `button` is held.
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Check whether `key` went down this frame.
    fn is_key_just_pressed(&self, key: KeyCode) -> bool;

    /// Check whether `key` is held.
    fn is_key_pressed(&self, key: KeyCode) -> bool;

    /// Printable characters typed this frame.
    fn typed(&self) -> &str;
}

/// Input collected from window events between two frames.
///
/// Feed it events with [`handle_window_event`](Self::handle_window_event),
/// run the frame's updates, then call [`end_frame`](Self::end_frame) to
/// forget the edges ("just pressed"/"just released") and typed text.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pointer: Point,
    buttons_down: HashSet<MouseButton>,
    buttons_pressed: HashSet<MouseButton>,
    buttons_released: HashSet<MouseButton>,
    keys_down: HashSet<KeyCode>,
    keys_pressed: HashSet<KeyCode>,
    typed: String,
}

impl FrameInput {
    /// Create an empty input state with the pointer at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a winit window event.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                self.move_pointer(Point::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => self.press_button(*button),
                ElementState::Released => self.release_button(*button),
            },
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(code) = event.physical_key {
                    match event.state {
                        ElementState::Pressed if !event.repeat => self.press_key(code),
                        ElementState::Pressed => {}
                        ElementState::Released => self.release_key(code),
                    }
                }
                if event.state == ElementState::Pressed {
                    if let Some(text) = &event.text {
                        self.type_text(text);
                    }
                }
            }
            WindowEvent::Ime(Ime::Commit(text)) => self.type_text(text),
            WindowEvent::Focused(false) => {
                // Releases that happen while unfocused never reach us.
                self.buttons_down.clear();
                self.keys_down.clear();
            }
            _ => {}
        }
    }

    /// Move the pointer.
    pub fn move_pointer(&mut self, position: Point) {
        self.pointer = position;
    }

    /// Press a mouse button.
    pub fn press_button(&mut self, button: MouseButton) {
        if self.buttons_down.insert(button) {
            self.buttons_pressed.insert(button);
        }
    }

    /// Release a mouse button.
    pub fn release_button(&mut self, button: MouseButton) {
        if self.buttons_down.remove(&button) {
            self.buttons_released.insert(button);
        }
    }

    /// Press a key.
    pub fn press_key(&mut self, key: KeyCode) {
        if self.keys_down.insert(key) {
            self.keys_pressed.insert(key);
        }
    }

    /// Release a key.
    pub fn release_key(&mut self, key: KeyCode) {
        self.keys_down.remove(&key);
    }

    /// Append typed text. Control characters are dropped.
    pub fn type_text(&mut self, text: &str) {
        self.typed.extend(text.chars().filter(|c| !c.is_control()));
    }

    /// Forget this frame's edges and typed text.
    ///
    /// Held buttons and keys, and the pointer position, carry over.
    pub fn end_frame(&mut self) {
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.keys_pressed.clear();
        self.typed.clear();
    }
}

impl Input for FrameInput {
    fn pointer_position(&self) -> Point {
        self.pointer
    }

    fn is_button_just_pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    fn is_button_just_released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }

    fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    fn typed(&self) -> &str {
        &self.typed
    }
}
