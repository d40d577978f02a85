//! Theme configuration.
//!
//! A [`Theme`] holds the colors and font size preset widgets are created
//! with. It can be loaded from TOML, with every field optional:
//!
//! ```toml
//! font_size = "small"
//!
//! [colors]
//! button = "#202020"
//! button_hover = "#DC143C"
//! text = "#FFFFFFFF"
//! ```
//!
//! Colors are `#RRGGBB` or `#RRGGBBAA` strings. Widgets are built through
//! the theme's factory methods so configuration reaches them without any
//! global state:
//!
//! ```
//! use mtk::{Shape, Theme, WidgetSize};
//!
//! let theme = Theme::from_toml_str(r##"
//! [colors]
//! button = "#336699"
//! "##).unwrap();
//!
//! let button = theme.button(WidgetSize::Medium, Shape::Rectangle);
//! assert_eq!(button.color().map(|c| c.to_hex()), Some("#336699FF".to_string()));
//! ```

use std::path::{Path, PathBuf};

use mtk_core::logging::targets;
use mtk_render::{Color, Size};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::widget::widgets::{
    BUTTON_COLOR, BUTTON_HOVER_COLOR, BUTTON_PUSH_COLOR, Button, MESSAGE_DISABLED_COLOR,
    MessageWindow, SLOT_COLOR, SWITCH_BUTTON_COLOR, SWITCH_COLOR, Slot, SlotList, Switch,
    TEXT_EDIT_FOCUS_COLOR, TextEdit, Textbox,
};
use crate::widget::{Shape, WidgetSize};

/// Errors that can occur while loading or saving a theme.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The theme is not valid TOML or has invalid values.
    #[error("invalid theme: {0}")]
    Parse(#[from] toml::de::Error),

    /// The theme could not be written as TOML.
    #[error("failed to serialize theme: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for theme operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

/// A color written as a hex string in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub Color);

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
            .map(HexColor)
            .ok_or_else(|| format!("invalid color {value:?}, expected #RRGGBB or #RRGGBBAA"))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0.to_hex()
    }
}

impl From<Color> for HexColor {
    fn from(color: Color) -> Self {
        HexColor(color)
    }
}

/// Widget colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub button: HexColor,
    pub button_push: HexColor,
    pub button_hover: HexColor,
    pub switch: HexColor,
    pub switch_button: HexColor,
    pub slot: HexColor,
    pub info: HexColor,
    pub message: HexColor,
    pub message_disabled: HexColor,
    pub textbox: HexColor,
    pub text: HexColor,
    pub text_edit: HexColor,
    pub text_edit_focus: HexColor,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            button: BUTTON_COLOR.into(),
            button_push: BUTTON_PUSH_COLOR.into(),
            button_hover: BUTTON_HOVER_COLOR.into(),
            switch: SWITCH_COLOR.into(),
            switch_button: SWITCH_BUTTON_COLOR.into(),
            slot: SLOT_COLOR.into(),
            info: Color::SHADE.into(),
            message: Color::SHADE.into(),
            message_disabled: MESSAGE_DISABLED_COLOR.into(),
            textbox: Color::SHADE.into(),
            text: Color::WHITE.into(),
            text_edit: Color::SHADE.into(),
            text_edit_focus: TEXT_EDIT_FOCUS_COLOR.into(),
        }
    }
}

/// Colors and sizing used to create widgets.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Font size preset for text-heavy widgets.
    pub font_size: WidgetSize,
    pub colors: Palette,
}

impl Theme {
    /// Parse a theme from TOML. Missing fields take default values.
    pub fn from_toml_str(source: &str) -> ThemeResult<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Load a theme from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let theme = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::THEME, path = %path.display(), "theme loaded");
        Ok(theme)
    }

    /// Write the theme as TOML.
    pub fn to_toml_string(&self) -> ThemeResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    // =========================================================================
    // Widget factories
    // =========================================================================

    pub fn button(&self, size: WidgetSize, shape: Shape) -> Button {
        let colors = &self.colors;
        let mut button = Button::new(size, shape).with_color(colors.button.0);
        button.set_push_color(colors.button_push.0);
        button.set_hover_color(colors.button_hover.0);
        button.set_label_color(colors.text.0);
        button.set_info_color(colors.info.0);
        button
    }

    pub fn switch(&self, size: WidgetSize) -> Switch {
        let mut switch = Switch::new(size);
        switch.set_color(self.colors.switch.0);
        switch.set_button_color(self.colors.switch_button.0);
        switch.set_text_color(self.colors.text.0);
        switch
    }

    pub fn slot(&self, size: WidgetSize) -> Slot {
        Slot::new(size).with_color(self.colors.slot.0)
    }

    pub fn slot_list(&self, size: Size, slot_size: WidgetSize) -> SlotList {
        SlotList::new(size, slot_size).with_color(self.colors.slot.0)
    }

    pub fn message(&self, text: &str) -> MessageWindow {
        self.style_message(MessageWindow::new(self.font_size, text))
    }

    pub fn dialog(&self, text: &str) -> MessageWindow {
        self.style_message(MessageWindow::dialog(self.font_size, text))
    }

    fn style_message(&self, window: MessageWindow) -> MessageWindow {
        let mut window = window
            .with_color(self.colors.message.0)
            .with_button_color(self.colors.button.0);
        window.set_disabled_color(self.colors.message_disabled.0);
        window.set_text_color(self.colors.text.0);
        window
    }

    pub fn textbox(&self, size: Size) -> Textbox {
        Textbox::new(size, self.font_size)
            .with_color(self.colors.textbox.0)
            .with_text_color(self.colors.text.0)
    }

    pub fn text_edit(&self, size: Size) -> TextEdit {
        let mut edit = TextEdit::new(size, self.font_size).with_color(self.colors.text_edit.0);
        edit.set_focus_color(self.colors.text_edit_focus.0);
        edit.set_text_color(self.colors.text.0);
        edit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_is_default() {
        let theme = Theme::from_toml_str("").unwrap();
        assert_eq!(theme, Theme::default());
        assert_eq!(theme.font_size, WidgetSize::Medium);
    }

    #[test]
    fn test_partial_override() {
        let theme = Theme::from_toml_str(
            r##"
            font_size = "small"

            [colors]
            button_hover = "#00FF00"
            "##,
        )
        .unwrap();
        assert_eq!(theme.font_size, WidgetSize::Small);
        assert_eq!(theme.colors.button_hover.0, Color::from_rgba8(0, 255, 0, 255));
        assert_eq!(theme.colors.button, Palette::default().button);
    }

    #[test]
    fn test_invalid_color() {
        let err = Theme::from_toml_str("[colors]\ntext = \"white\"").unwrap_err();
        assert!(matches!(err, ThemeError::Parse(_)));
        assert!(err.to_string().contains("invalid color"));
    }

    #[test]
    fn test_round_trip_through_toml() {
        let theme = Theme::default();
        let source = theme.to_toml_string().unwrap();
        assert!(source.contains("[colors]"));
        let parsed = Theme::from_toml_str(&source).unwrap();
        assert_eq!(parsed.font_size, theme.font_size);
        assert_eq!(parsed.colors.text.0.to_hex(), theme.colors.text.0.to_hex());
        assert_eq!(parsed.colors.slot.0.to_hex(), "#33333380");
    }

    #[test]
    fn test_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "font_size = \"big\"").unwrap();
        let theme = Theme::load(file.path()).unwrap();
        assert_eq!(theme.font_size, WidgetSize::Big);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Theme::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ThemeError::Io { .. }));
    }

    #[test]
    fn test_factories_apply_colors() {
        let mut theme = Theme::default();
        theme.colors.button = Color::BLACK.into();
        theme.colors.text_edit = Color::RED.into();
        let button = theme.button(WidgetSize::Small, Shape::Square);
        assert_eq!(button.color(), Some(Color::BLACK));

        let message = theme.dialog("sure?");
        assert!(message.has_cancel());
        assert!(message.is_open());

        let edit = theme.text_edit(Size::new(100.0, 20.0));
        assert_eq!(edit.text(), "");
        assert_eq!(theme.slot(WidgetSize::Medium).len(), 0);
    }
}
