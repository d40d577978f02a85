//! Push button widget.
//!
//! # Example
//!
//! ```
//! use mtk::widget::widgets::Button;
//! use mtk::widget::{Shape, WidgetSize};
//!
//! let mut button = Button::new(WidgetSize::Small, Shape::Rectangle)
//!     .with_label("Start")
//!     .with_info("Start a new game");
//!
//! button.on_click(|b| b.set_label("Started"));
//! button.click();
//! assert_eq!(button.label(), "Started");
//! ```

use mtk_core::Handler;
use mtk_core::logging::targets;
use mtk_multimedia::AudioBuffer;
use mtk_render::{Color, Image, Rect, Renderer, Size, Transform2D};

use super::info_window::InfoWindow;
use super::text::Text;
use crate::widget::{
    FocusHandle, KeyCode, Shape, UpdateContext, Widget, WidgetSize, WidgetState,
};

/// Background color of a button in its normal state.
pub const BUTTON_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2);
/// Background color of a pressed or disabled button.
pub const BUTTON_PUSH_COLOR: Color = Color::GREY;
/// Background color of a hovered button.
pub const BUTTON_HOVER_COLOR: Color = Color::CRIMSON;

/// Sound a button plays when clicked with the pointer.
#[derive(Debug, Clone, Default)]
pub enum ClickSound {
    /// The context's default click sound, if it has one.
    #[default]
    Default,
    /// No sound.
    Silent,
    /// A sound of the button's own.
    Custom(AudioBuffer),
}

/// A clickable button with a label, an optional background image and a
/// tooltip.
///
/// # Visual States
///
/// - **Pressed** or **disabled**: push color
/// - **Hovered**: hover color
/// - **Normal**: the button color
///
/// With a background image, the state color tints the image instead of
/// filling the area. [`set_background`](Self::set_background) removes the
/// normal color so an idle button shows the image untinted.
pub struct Button {
    state: WidgetState,
    size: Size,
    color: Option<Color>,
    push_color: Color,
    hover_color: Color,
    background: Option<Image>,
    label: Text,
    info: InfoWindow,
    click_sound: ClickSound,
    on_click: Handler<Button>,
}

impl Button {
    /// Create a button with a preset size and shape.
    pub fn new(size: WidgetSize, shape: Shape) -> Self {
        Self::from_size(size.button_size(shape), size.font_px())
    }

    /// Create a button with an explicit size and label font size.
    pub fn from_size(size: Size, font_px: f32) -> Self {
        Self {
            state: WidgetState::new(),
            size,
            color: Some(BUTTON_COLOR),
            push_color: BUTTON_PUSH_COLOR,
            hover_color: BUTTON_HOVER_COLOR,
            background: None,
            label: Text::new(font_px).with_max_width(size.width),
            info: InfoWindow::new(),
            click_sound: ClickSound::Default,
            on_click: Handler::new(),
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    /// Set the tooltip text using builder pattern.
    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.set_info(info);
        self
    }

    /// Set the normal background color using builder pattern.
    pub fn with_color(mut self, color: Color) -> Self {
        self.set_color(color);
        self
    }

    /// Set the background image using builder pattern.
    pub fn with_background(mut self, image: Image) -> Self {
        self.set_background(image);
        self
    }

    /// Set the click sound using builder pattern.
    pub fn with_click_sound(mut self, sound: ClickSound) -> Self {
        self.click_sound = sound;
        self
    }

    /// Set the label font size using builder pattern.
    pub fn with_font_size(mut self, size: WidgetSize) -> Self {
        self.label.set_font_px(size.font_px());
        self
    }

    /// Set the click handler using builder pattern.
    pub fn with_on_click<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut Button) + 'static,
    {
        self.on_click(callback);
        self
    }

    // =========================================================================
    // Content and Appearance
    // =========================================================================

    pub fn label(&self) -> &str {
        self.label.text()
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label.set_text(label);
    }

    pub fn set_label_color(&mut self, color: Color) {
        self.label.set_color(color);
    }

    pub fn info(&self) -> &str {
        self.info.text()
    }

    pub fn set_info(&mut self, info: impl Into<String>) {
        self.info.set_text(info);
    }

    /// Normal background color, `None` after a background image was set.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    pub fn set_push_color(&mut self, color: Color) {
        self.push_color = color;
    }

    pub fn set_hover_color(&mut self, color: Color) {
        self.hover_color = color;
    }

    pub fn set_info_color(&mut self, color: Color) {
        self.info.set_color(color);
    }

    /// Use `image` as background and drop the normal color.
    ///
    /// The button takes the image's size from the next draw on.
    pub fn set_background(&mut self, image: Image) {
        self.background = Some(image);
        self.color = None;
    }

    pub fn background(&self) -> Option<&Image> {
        self.background.as_ref()
    }

    pub fn click_sound(&self) -> &ClickSound {
        &self.click_sound
    }

    pub fn set_click_sound(&mut self, sound: ClickSound) {
        self.click_sound = sound;
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Enable or disable the button.
    pub fn set_active(&mut self, active: bool) {
        self.state.set_disabled(!active);
    }

    pub fn is_disabled(&self) -> bool {
        self.state.is_disabled()
    }

    pub fn is_hovered(&self) -> bool {
        self.state.is_hovered()
    }

    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    pub fn is_focused(&self) -> bool {
        self.state.is_focused()
    }

    /// Handle used to give this button keyboard focus.
    pub fn focus_handle(&self) -> &FocusHandle {
        self.state.focus_handle()
    }

    // =========================================================================
    // Click Handling
    // =========================================================================

    /// Install the click handler, replacing any previous one.
    pub fn on_click<F>(&mut self, mut callback: F)
    where
        F: FnMut(&mut Button) + 'static,
    {
        self.on_click.set(move |button, ()| callback(button));
    }

    /// Remove the click handler.
    pub fn clear_on_click(&mut self) {
        self.on_click.clear();
    }

    /// Fire the click handler, if one is set.
    ///
    /// Returns `true` if a handler ran.
    pub fn click(&mut self) -> bool {
        Handler::fire(self, |b| &mut b.on_click, ())
    }

    /// Update the button and report whether it was clicked this frame.
    ///
    /// A click is either a completed left-button press/release inside the
    /// button, or Enter while the button holds focus. Only pointer clicks
    /// play the click sound. Parent widgets use the return value instead of
    /// installing a handler on their child buttons.
    pub fn update_clicked(&mut self, ctx: &mut UpdateContext<'_>) -> bool {
        if self.state.is_disabled() {
            return false;
        }
        let mut clicked = false;
        if self.state.track_pointer(ctx.input()) {
            tracing::trace!(target: targets::WIDGET, label = self.label.text(), "button clicked");
            self.click();
            self.play_click_sound(ctx);
            clicked = true;
        }
        if self.state.is_hovered() || self.state.is_focused() {
            self.info.update(ctx);
        }
        if self.state.is_focused() && ctx.input().is_key_just_pressed(KeyCode::Enter) {
            self.click();
            clicked = true;
        }
        clicked
    }

    fn play_click_sound(&self, ctx: &mut UpdateContext<'_>) {
        match &self.click_sound {
            ClickSound::Default => {
                if let Some(sound) = ctx.click_sound() {
                    ctx.play_sound(sound);
                }
            }
            ClickSound::Silent => {}
            ClickSound::Custom(sound) => ctx.play_sound(sound),
        }
    }

    fn state_color(&self) -> Option<Color> {
        if self.state.is_pressed() || self.state.is_disabled() {
            Some(self.push_color)
        } else if self.state.is_hovered() {
            Some(self.hover_color)
        } else {
            self.color
        }
    }
}

impl Widget for Button {
    fn draw(&mut self, renderer: &mut dyn Renderer, transform: Transform2D) {
        let area = self.state.update_draw_area(transform, self.size());
        let color = self.state_color();
        match &self.background {
            Some(image) => renderer.draw_image(image, transform, color),
            None => {
                if let Some(color) = color {
                    renderer.fill_rect(area, color);
                }
            }
        }
        if !self.label.is_empty() {
            self.label.draw(renderer, transform);
        }
        if self.state.is_hovered() {
            self.info.draw(renderer);
        }
    }

    fn update(&mut self, ctx: &mut UpdateContext<'_>) {
        self.update_clicked(ctx);
    }

    fn size(&self) -> Size {
        self.background
            .as_ref()
            .map(Image::size)
            .unwrap_or(self.size)
    }

    fn draw_area(&self) -> Rect {
        self.state.draw_area()
    }
}

impl std::fmt::Debug for Button {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Button")
            .field("label", &self.label.text())
            .field("state", &self.state)
            .field("size", &self.size())
            .field("on_click", &self.on_click)
            .finish()
    }
}
