//! Message and dialog windows.
//!
//! A [`MessageWindow`] shows a block of text with an accept button; the
//! dialog variant adds a cancel button. The window starts open and ends
//! dismissed:
//!
//! ```text
//! open ──accept──▶ dismissed (accepted)
//!      ──cancel──▶ dismissed (canceled)
//! ```
//!
//! Both transitions close and unfocus the window before the outcome is
//! recorded and the matching handler runs. A dismissed window stays
//! dismissed; whoever owns it should drop it. [`MessageQueue`] does that for
//! stacked messages.
//!
//! [`MessageQueue`]: super::MessageQueue

use mtk_core::Handler;
use mtk_core::logging::targets;
use mtk_render::{Color, Rect, Renderer, Size, Transform2D};

use super::button::Button;
use super::textbox::Textbox;
use crate::widget::geometry::{move_bl, move_br, move_tc};
use crate::widget::{
    FocusHandle, KeyCode, MouseButton, Shape, UpdateContext, Widget, WidgetSize, WidgetState,
};

/// Background color of an inactive message.
pub const MESSAGE_DISABLED_COLOR: Color = Color::DARK_GREY;

/// A window with text and accept, and optionally cancel, buttons.
pub struct MessageWindow {
    state: WidgetState,
    size: Size,
    color: Color,
    disabled_color: Color,
    textbox: Textbox,
    accept_button: Button,
    cancel_button: Option<Button>,
    opened: bool,
    accepted: bool,
    dismissed: bool,
    on_accept: Handler<MessageWindow>,
    on_cancel: Handler<MessageWindow>,
}

impl MessageWindow {
    /// Create an open message with an accept button.
    pub fn new(size: WidgetSize, text: &str) -> Self {
        let size = size.message_window_size();
        let accept_button = Button::new(WidgetSize::Small, Shape::Rectangle)
            .with_font_size(WidgetSize::Small)
            .with_label("Accept");
        let box_size = Size::new(size.width, size.height - accept_button.size().height);
        let mut textbox = Textbox::new(box_size, WidgetSize::Small);
        textbox.set_text(text.split('\n'));
        Self {
            state: WidgetState::new(),
            size,
            color: Color::SHADE,
            disabled_color: MESSAGE_DISABLED_COLOR,
            textbox,
            accept_button,
            cancel_button: None,
            opened: true,
            accepted: false,
            dismissed: false,
            on_accept: Handler::new(),
            on_cancel: Handler::new(),
        }
    }

    /// Create an open message with accept and cancel buttons.
    pub fn dialog(size: WidgetSize, text: &str) -> Self {
        let mut window = Self::new(size, text);
        window.cancel_button = Some(
            Button::new(WidgetSize::Small, Shape::Rectangle)
                .with_font_size(WidgetSize::Small)
                .with_label("Cancel"),
        );
        window
    }

    /// Set the background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self.textbox.set_color(color);
        self
    }

    /// Set the button color using builder pattern.
    pub fn with_button_color(mut self, color: Color) -> Self {
        self.set_button_color(color);
        self
    }

    // =========================================================================
    // Appearance
    // =========================================================================

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
        self.textbox.set_color(color);
    }

    pub fn set_disabled_color(&mut self, color: Color) {
        self.disabled_color = color;
    }

    pub fn set_button_color(&mut self, color: Color) {
        self.accept_button.set_color(color);
        if let Some(cancel) = &mut self.cancel_button {
            cancel.set_color(color);
        }
        self.textbox.set_button_color(color);
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.textbox.set_text_color(color);
    }

    /// Replace the window text.
    pub fn set_text(&mut self, text: &str) {
        self.textbox.set_text(text.split('\n'));
    }

    pub fn textbox(&self) -> &Textbox {
        &self.textbox
    }

    pub fn set_accept_label(&mut self, label: impl Into<String>) {
        self.accept_button.set_label(label);
    }

    /// Does nothing on a window without a cancel button.
    pub fn set_cancel_label(&mut self, label: impl Into<String>) {
        if let Some(cancel) = &mut self.cancel_button {
            cancel.set_label(label);
        }
    }

    pub fn has_cancel(&self) -> bool {
        self.cancel_button.is_some()
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Open or close the window.
    pub fn show(&mut self, show: bool) {
        self.opened = show;
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Enable or disable input.
    pub fn set_active(&mut self, active: bool) {
        self.state.set_disabled(!active);
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    pub fn focus_handle(&self) -> &FocusHandle {
        self.state.focus_handle()
    }

    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }

    /// Whether the window was dismissed by accepting it.
    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn on_accept<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut MessageWindow) + 'static,
    {
        self.on_accept.set(move |window, ()| callback(window));
    }

    pub fn on_cancel<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut MessageWindow) + 'static,
    {
        self.on_cancel.set(move |window, ()| callback(window));
    }

    fn reset(&mut self) {
        self.opened = false;
        self.state.focus_handle().set_focused(false);
    }

    /// Close the window as accepted and run the accept handler.
    ///
    /// This clears the window's focus flag but cannot reach the registry;
    /// input-driven dismissal inside [`MessageWindow::update`] also releases
    /// the registry's claim.
    pub fn accept(&mut self) {
        self.reset();
        self.dismissed = true;
        self.accepted = true;
        tracing::debug!(target: targets::MESSAGE, "message accepted");
        Handler::fire(self, |w| &mut w.on_accept, ());
    }

    /// Close the window as canceled and run the cancel handler.
    pub fn cancel(&mut self) {
        self.reset();
        self.dismissed = true;
        self.accepted = false;
        tracing::debug!(target: targets::MESSAGE, "message canceled");
        Handler::fire(self, |w| &mut w.on_cancel, ());
    }

    // =========================================================================
    // Frame
    // =========================================================================

    /// Handle keys, focus claims and button clicks.
    ///
    /// While focused, Escape cancels (dialogs only), Enter accepts and the
    /// arrow keys scroll the text. A left press inside the window claims
    /// focus. Buttons only act while the window is focused.
    pub fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        if self.state.is_disabled() || self.dismissed {
            return;
        }
        let input = ctx.input();

        if self.is_focused() {
            if self.has_cancel() && input.is_key_just_pressed(KeyCode::Escape) {
                self.dismiss(ctx, false);
                return;
            }
            if input.is_key_just_pressed(KeyCode::Enter) {
                self.dismiss(ctx, true);
                return;
            }
            if input.is_key_just_pressed(KeyCode::ArrowUp) {
                self.textbox.scroll_up();
            }
            if input.is_key_just_pressed(KeyCode::ArrowDown) {
                self.textbox.scroll_down();
            }
        }

        if self.state.track_hover(input) && input.is_button_just_pressed(MouseButton::Left) {
            ctx.focus().focus_handle(self.state.focus_handle());
        }

        self.textbox.update(ctx);
        if self.accept_button.update_clicked(ctx) && self.is_focused() {
            self.dismiss(ctx, true);
            return;
        }
        let canceled = self
            .cancel_button
            .as_mut()
            .is_some_and(|cancel| cancel.update_clicked(ctx));
        if canceled && self.is_focused() {
            self.dismiss(ctx, false);
        }
    }

    fn dismiss(&mut self, ctx: &mut UpdateContext<'_>, accepted: bool) {
        ctx.focus().release(self.state.focus_handle());
        if accepted {
            self.accept();
        } else {
            self.cancel();
        }
    }
}

impl Widget for MessageWindow {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size);
        let color = if self.state.is_disabled() {
            self.disabled_color
        } else {
            self.color
        };
        renderer.fill_rect(area, color);

        let accept = transform.transform_size(self.accept_button.size());
        self.accept_button
            .draw(renderer, transform.moved(move_br(area.size, accept)));
        if let Some(cancel) = &mut self.cancel_button {
            let size = transform.transform_size(cancel.size());
            cancel.draw(renderer, transform.moved(move_bl(area.size, size)));
        }

        let text = transform.transform_size(self.textbox.size());
        self.textbox
            .draw(renderer, transform.moved(move_tc(area.size, text)));
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        MessageWindow::update(self, ctx);
    }

    fn size(&self) -> Size {
        self.size
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for MessageWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageWindow")
            .field("text", &self.textbox.content())
            .field("dialog", &self.has_cancel())
            .field("opened", &self.opened)
            .field("focused", &self.is_focused())
            .field("disabled", &self.state.is_disabled())
            .field("dismissed", &self.dismissed)
            .field("accepted", &self.accepted)
            .finish()
    }
}
