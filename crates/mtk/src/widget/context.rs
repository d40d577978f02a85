//! Per-frame update context.

use std::fmt;

use mtk_core::logging::targets;
use mtk_multimedia::{AudioBuffer, AudioPlayer};
use mtk_render::{Point, TextMetrics};

use super::focus::FocusRegistry;
use super::input::Input;

/// Everything a widget may consult or affect while updating.
///
/// Built once per frame by the application and handed to every visible
/// widget's `update`. The audio player and the default click sound are
/// optional; widgets stay silent without them.
///
/// ```
/// use mtk::widget::{FocusRegistry, FrameInput, UpdateContext};
/// use mtk_render::MonospaceMetrics;
///
/// let input = FrameInput::new();
/// let metrics = MonospaceMetrics::new();
/// let mut focus = FocusRegistry::new();
/// let ctx = UpdateContext::new(&input, &metrics, &mut focus);
/// assert!(!ctx.has_audio());
/// ```
pub struct UpdateContext<'a> {
    input: &'a dyn Input,
    metrics: &'a dyn TextMetrics,
    focus: &'a mut FocusRegistry,
    audio: Option<&'a mut AudioPlayer>,
    click_sound: Option<&'a AudioBuffer>,
}

impl<'a> UpdateContext<'a> {
    /// Create a context without audio.
    pub fn new(
        input: &'a dyn Input,
        metrics: &'a dyn TextMetrics,
        focus: &'a mut FocusRegistry,
    ) -> Self {
        Self {
            input,
            metrics,
            focus,
            audio: None,
            click_sound: None,
        }
    }

    /// Attach the audio player used for UI sounds.
    pub fn with_audio(mut self, audio: &'a mut AudioPlayer) -> Self {
        self.audio = Some(audio);
        self
    }

    /// Set the sound buttons play on click unless they override it.
    pub fn with_click_sound(mut self, sound: &'a AudioBuffer) -> Self {
        self.click_sound = Some(sound);
        self
    }

    /// Input state for this frame.
    #[inline]
    pub fn input(&self) -> &'a dyn Input {
        self.input
    }

    /// Text measurement.
    #[inline]
    pub fn metrics(&self) -> &'a dyn TextMetrics {
        self.metrics
    }

    /// Pointer position for this frame.
    #[inline]
    pub fn pointer(&self) -> Point {
        self.input.pointer_position()
    }

    /// The focus registry.
    #[inline]
    pub fn focus(&mut self) -> &mut FocusRegistry {
        &mut *self.focus
    }

    /// Check whether an audio player is attached.
    pub fn has_audio(&self) -> bool {
        self.audio.is_some()
    }

    /// The attached audio player.
    pub fn audio(&mut self) -> Option<&mut AudioPlayer> {
        self.audio.as_deref_mut()
    }

    /// The default click sound.
    pub fn click_sound(&self) -> Option<&'a AudioBuffer> {
        self.click_sound
    }

    /// Play a one-shot sound if an audio player is attached.
    ///
    /// Playback failures are logged and otherwise ignored.
    pub fn play_sound(&mut self, sound: &AudioBuffer) {
        let Some(audio) = self.audio.as_deref_mut() else {
            return;
        };
        if let Err(err) = audio.play(sound) {
            tracing::warn!(target: targets::AUDIO, error = %err, "failed to play UI sound");
        }
    }
}

impl fmt::Debug for UpdateContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateContext")
            .field("pointer", &self.pointer())
            .field("focus", &self.focus)
            .field("has_audio", &self.has_audio())
            .field("has_click_sound", &self.click_sound.is_some())
            .finish()
    }
}
