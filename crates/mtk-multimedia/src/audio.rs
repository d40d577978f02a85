//! Audio playlist player.
//!
//! [`AudioPlayer`] keeps an ordered playlist of decoded tracks and a cursor
//! into it. One track at a time occupies the player's *control* slot: the
//! control is a single endless source registered with the backend at
//! construction, which outputs whatever stream is currently assigned to it
//! (or silence). Starting a track swaps the control's stream; stopping
//! clears it.
//!
//! The control state lives behind a mutex shared with the backend's mixing
//! thread. Every swap happens while holding that lock, and the mixer takes
//! the same lock for each chunk it pulls, so it never reads a half-updated
//! stream.
//!
//! Volume follows a base-2 scale: `0.0` leaves samples unmodified, `1.0`
//! doubles their amplitude and `-1.0` halves it. Muting is independent of
//! the stored volume.
//!
//! # Example
//!
//! ```
//! use mtk_multimedia::{AudioBuffer, AudioPlayer, NullBackend, SampleFormat};
//!
//! let format = SampleFormat::new(44_100, 2)?;
//! let mut player = AudioPlayer::new(format, NullBackend::new())?;
//!
//! player.add_audio(AudioBuffer::new(format, vec![0.0; 1024]));
//! player.add_audio(AudioBuffer::new(format, vec![0.0; 2048]));
//!
//! player.set_play_index(1);
//! player.resume_playlist();
//! assert!(player.is_playing());
//!
//! player.set_volume(-1.0);
//! player.reset();
//! assert_eq!(player.play_index(), 0);
//! assert!(!player.is_playing());
//! # Ok::<(), mtk_multimedia::MultimediaError>(())
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use mtk_core::logging::targets;
use mtk_core::signal::{ConnectionId, Signal};

use crate::backend::AudioBackend;
use crate::buffer::{AudioBuffer, BufferStream, SampleFormat, SampleSource};
use crate::error::Result;

/// The current state of the control slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing is assigned to the control.
    Stopped,
    /// A playlist track is assigned to the control.
    Playing,
    /// The assigned track played to its end.
    Finished,
}

/// State shared between the player and the mixing thread.
struct Control {
    /// Currently playing playlist stream.
    stream: Option<BufferStream>,
    /// Base-2 volume exponent.
    volume: f64,
    /// Whether output is muted.
    silent: bool,
}

impl Control {
    fn gain(&self) -> f32 {
        if self.silent {
            0.0
        } else {
            2f64.powf(self.volume) as f32
        }
    }
}

/// Shared signals that can be emitted from the mixing thread.
struct SharedSignals {
    /// Emitted when playback state changes.
    state_changed: Signal<PlaybackState>,
    /// Emitted with the playlist index of a track when it starts.
    track_changed: Signal<usize>,
}

fn apply_gain(samples: &mut [f32], gain: f32) {
    if gain != 1.0 {
        for s in samples {
            *s *= gain;
        }
    }
}

/// The endless source standing in for the control slot.
struct ControlSource {
    format: SampleFormat,
    control: Arc<Mutex<Control>>,
    signals: Arc<SharedSignals>,
}

impl SampleSource for ControlSource {
    fn format(&self) -> SampleFormat {
        self.format
    }

    fn fill(&mut self, out: &mut [f32]) -> usize {
        let mut control = self.control.lock();
        let written = match control.stream.as_mut() {
            Some(stream) => stream.fill(out),
            None => 0,
        };
        out[written..].fill(0.0);
        apply_gain(&mut out[..written], control.gain());

        let finished = written < out.len() && control.stream.take().is_some();
        drop(control);

        if finished {
            tracing::debug!(target: targets::AUDIO, "track finished");
            self.signals.state_changed.emit(PlaybackState::Finished);
        }
        out.len()
    }
}

/// A sound played outside the playlist.
struct OneShotSource {
    stream: BufferStream,
    control: Arc<Mutex<Control>>,
}

impl SampleSource for OneShotSource {
    fn format(&self) -> SampleFormat {
        self.stream.format()
    }

    fn fill(&mut self, out: &mut [f32]) -> usize {
        let written = self.stream.fill(out);
        let gain = self.control.lock().gain();
        apply_gain(&mut out[..written], gain);
        written
    }
}

/// A playlist player with signal-based notifications.
///
/// # Signals
///
/// - `state_changed`: emitted when a track starts, is stopped, or finishes.
///   `Finished` is emitted from the backend's mixing thread.
/// - `track_changed`: emitted with the playlist index of every track that
///   starts playing.
pub struct AudioPlayer {
    format: SampleFormat,
    backend: Box<dyn AudioBackend>,
    control: Arc<Mutex<Control>>,
    signals: Arc<SharedSignals>,
    playlist: Vec<AudioBuffer>,
    play_id: usize,
}

impl AudioPlayer {
    /// Create a player and initialize the backend for `format`.
    ///
    /// Fails only if the backend cannot be initialized; widgets keep working
    /// without a player.
    pub fn new(format: SampleFormat, backend: impl AudioBackend + 'static) -> Result<Self> {
        let mut backend: Box<dyn AudioBackend> = Box::new(backend);
        backend.initialize(format)?;

        let control = Arc::new(Mutex::new(Control {
            stream: None,
            volume: 0.0,
            silent: false,
        }));
        let signals = Arc::new(SharedSignals {
            state_changed: Signal::new(),
            track_changed: Signal::new(),
        });

        backend.play_mixed(Box::new(ControlSource {
            format,
            control: control.clone(),
            signals: signals.clone(),
        }))?;

        tracing::debug!(
            target: targets::AUDIO,
            sample_rate = format.sample_rate(),
            channels = format.channels(),
            "audio player created"
        );

        Ok(Self {
            format,
            backend,
            control,
            signals,
            playlist: Vec::new(),
            play_id: 0,
        })
    }

    /// Output format the backend was initialized with.
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    // =========================================================================
    // Signals
    // =========================================================================

    /// Connect a callback to the state changed signal.
    pub fn on_state_changed<F>(&self, callback: F) -> ConnectionId
    where
        F: Fn(&PlaybackState) + Send + Sync + 'static,
    {
        self.signals.state_changed.connect(callback)
    }

    /// Disconnect a state changed callback.
    pub fn disconnect_state_changed(&self, id: ConnectionId) -> bool {
        self.signals.state_changed.disconnect(id)
    }

    /// Connect a callback to the track changed signal.
    pub fn on_track_changed<F>(&self, callback: F) -> ConnectionId
    where
        F: Fn(&usize) + Send + Sync + 'static,
    {
        self.signals.track_changed.connect(callback)
    }

    /// Disconnect a track changed callback.
    pub fn disconnect_track_changed(&self, id: ConnectionId) -> bool {
        self.signals.track_changed.disconnect(id)
    }

    // =========================================================================
    // Playlist
    // =========================================================================

    /// Append a track to the playlist. Duplicates are allowed.
    pub fn add_audio(&mut self, buffer: AudioBuffer) {
        if buffer.format() != self.format {
            tracing::warn!(
                target: targets::AUDIO,
                track = ?buffer.format(),
                output = ?self.format,
                "track format differs from output format, it will not be resampled"
            );
        }
        self.playlist.push(buffer);
    }

    /// Replace the playlist.
    ///
    /// The play index is kept as is; callers shrinking the playlist should
    /// move it back into range with [`set_play_index`](Self::set_play_index).
    pub fn set_playlist(&mut self, playlist: Vec<AudioBuffer>) {
        self.playlist = playlist;
    }

    /// The playlist, in play order.
    pub fn playlist(&self) -> &[AudioBuffer] {
        &self.playlist
    }

    /// Remove every track from the playlist.
    pub fn clear(&mut self) {
        self.playlist.clear();
    }

    /// Index of the current playlist track.
    pub fn play_index(&self) -> usize {
        self.play_id
    }

    /// Move the playlist cursor.
    ///
    /// Indices past the end wrap to the first track and negative indices
    /// wrap to the last one.
    pub fn set_play_index(&mut self, index: isize) {
        let len = self.playlist.len();
        self.play_id = if index < 0 {
            len.saturating_sub(1)
        } else if index as usize >= len {
            0
        } else {
            index as usize
        };
    }

    // =========================================================================
    // Playback
    // =========================================================================

    /// Play the track under the cursor from its beginning.
    ///
    /// Does nothing if the cursor is outside the playlist. Replaces any
    /// track currently playing.
    pub fn resume_playlist(&mut self) {
        let Some(buffer) = self.playlist.get(self.play_id) else {
            tracing::trace!(target: targets::AUDIO, index = self.play_id, "play index out of range");
            return;
        };
        let stream = buffer.stream();
        self.control.lock().stream = Some(stream);

        tracing::debug!(target: targets::AUDIO, index = self.play_id, "track started");
        self.signals.state_changed.emit(PlaybackState::Playing);
        self.signals.track_changed.emit(self.play_id);
    }

    /// Play a sound immediately, alongside the playlist.
    ///
    /// The sound does not touch the control slot or the cursor, but does
    /// follow the player's volume and mute settings.
    pub fn play(&mut self, buffer: &AudioBuffer) -> Result<()> {
        self.backend.play_mixed(Box::new(OneShotSource {
            stream: buffer.stream(),
            control: self.control.clone(),
        }))
    }

    /// Stop the playlist track, if one is playing.
    pub fn stop(&mut self) {
        let stopped = self.control.lock().stream.take().is_some();
        if stopped {
            tracing::debug!(target: targets::AUDIO, index = self.play_id, "track stopped");
            self.signals.state_changed.emit(PlaybackState::Stopped);
        }
    }

    /// Stop playback and move the cursor to the first track.
    pub fn reset(&mut self) {
        self.stop();
        self.set_play_index(0);
    }

    /// Stop playback and move the cursor to the next track (wrapping).
    pub fn next_track(&mut self) {
        self.stop();
        self.set_play_index(self.play_id as isize + 1);
    }

    /// Stop playback and move the cursor to the previous track (wrapping).
    pub fn previous_track(&mut self) {
        self.stop();
        self.set_play_index(self.play_id as isize - 1);
    }

    /// Check whether a playlist track occupies the control slot.
    pub fn is_playing(&self) -> bool {
        self.control.lock().stream.is_some()
    }

    // =========================================================================
    // Volume
    // =========================================================================

    /// Set the base-2 volume exponent.
    ///
    /// `0.0` is unmodified, positive values amplify and negative values
    /// attenuate. No clamping is applied.
    pub fn set_volume(&mut self, volume: f64) {
        self.control.lock().volume = volume;
    }

    /// Current base-2 volume exponent.
    pub fn volume(&self) -> f64 {
        self.control.lock().volume
    }

    /// Mute or unmute the output. The stored volume is kept.
    pub fn set_mute(&mut self, mute: bool) {
        self.control.lock().silent = mute;
    }

    /// Check whether the output is muted.
    pub fn is_muted(&self) -> bool {
        self.control.lock().silent
    }
}

impl std::fmt::Debug for AudioPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AudioPlayer")
            .field("format", &self.format)
            .field("playlist", &self.playlist.len())
            .field("play_id", &self.play_id)
            .field("playing", &self.is_playing())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::NullBackend;
    use crate::error::MultimediaError;

    type Sources = Arc<Mutex<Vec<Box<dyn SampleSource>>>>;

    /// Backend that keeps every source so tests can pull samples like a
    /// mixer thread would.
    #[derive(Default)]
    struct CaptureBackend {
        sources: Sources,
        fail_init: bool,
    }

    impl AudioBackend for CaptureBackend {
        fn initialize(&mut self, format: SampleFormat) -> Result<()> {
            if self.fail_init {
                return Err(MultimediaError::Initialization(format!(
                    "device busy at {} Hz",
                    format.sample_rate()
                )));
            }
            Ok(())
        }

        fn play_mixed(&mut self, source: Box<dyn SampleSource>) -> Result<()> {
            self.sources.lock().push(source);
            Ok(())
        }
    }

    fn format() -> SampleFormat {
        SampleFormat::new(8_000, 1).unwrap()
    }

    fn track(samples: &[f32]) -> AudioBuffer {
        AudioBuffer::new(format(), samples.to_vec())
    }

    fn capture_player() -> (AudioPlayer, Sources) {
        let backend = CaptureBackend::default();
        let sources = backend.sources.clone();
        let player = AudioPlayer::new(format(), backend).unwrap();
        (player, sources)
    }

    fn pull(sources: &Sources, index: usize, n: usize) -> (Vec<f32>, usize) {
        let mut out = vec![f32::NAN; n];
        let written = sources.lock()[index].fill(&mut out);
        (out, written)
    }

    #[test]
    fn test_initialization_failure_is_reported() {
        let backend = CaptureBackend {
            fail_init: true,
            ..Default::default()
        };
        let err = AudioPlayer::new(format(), backend).unwrap_err();
        assert!(matches!(err, MultimediaError::Initialization(_)));
    }

    #[test]
    fn test_control_registered_once() {
        let (_player, sources) = capture_player();
        assert_eq!(sources.lock().len(), 1);
    }

    #[test]
    fn test_set_play_index_wraps() {
        let (mut player, _) = capture_player();
        player.set_playlist(vec![track(&[0.1]), track(&[0.2])]);
        player.set_play_index(1);
        assert_eq!(player.play_index(), 1);

        player.set_play_index(1 + 1);
        assert_eq!(player.play_index(), 0);

        player.set_play_index(0 - 1);
        assert_eq!(player.play_index(), 1);
    }

    #[test]
    fn test_set_play_index_on_empty_playlist() {
        let (mut player, _) = capture_player();
        player.set_play_index(-1);
        assert_eq!(player.play_index(), 0);
        player.set_play_index(3);
        assert_eq!(player.play_index(), 0);
    }

    #[test]
    fn test_resume_out_of_range_is_noop() {
        let (mut player, _) = capture_player();
        player.resume_playlist();
        assert!(!player.is_playing());

        player.add_audio(track(&[0.5]));
        player.add_audio(track(&[0.5]));
        player.set_play_index(1);
        player.set_playlist(vec![track(&[0.5])]);
        player.resume_playlist();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_control_outputs_silence_until_resumed() {
        let (mut player, sources) = capture_player();
        player.add_audio(track(&[0.25, 0.5]));

        let (out, written) = pull(&sources, 0, 4);
        assert_eq!(written, 4);
        assert_eq!(out, vec![0.0; 4]);

        player.resume_playlist();
        let (out, written) = pull(&sources, 0, 4);
        assert_eq!(written, 4);
        assert_eq!(out, vec![0.25, 0.5, 0.0, 0.0]);
        assert!(!player.is_playing());
    }

    #[test]
    fn test_resume_replaces_current_track() {
        let (mut player, sources) = capture_player();
        player.set_playlist(vec![track(&[0.1, 0.1, 0.1]), track(&[0.2, 0.2])]);
        player.resume_playlist();
        pull(&sources, 0, 1);

        player.set_play_index(1);
        player.resume_playlist();
        let (out, _) = pull(&sources, 0, 2);
        assert_eq!(out, vec![0.2, 0.2]);
    }

    #[test]
    fn test_stop_only_when_playing() {
        let (mut player, _) = capture_player();
        let states = Arc::new(Mutex::new(Vec::new()));
        let states_clone = states.clone();
        player.on_state_changed(move |s| states_clone.lock().push(*s));

        player.stop();
        assert!(states.lock().is_empty());

        player.add_audio(track(&[0.1]));
        player.resume_playlist();
        player.stop();
        player.stop();
        assert_eq!(
            *states.lock(),
            vec![PlaybackState::Playing, PlaybackState::Stopped]
        );
    }

    #[test]
    fn test_finished_emitted_from_mixer() {
        let (mut player, sources) = capture_player();
        let states = Arc::new(Mutex::new(Vec::new()));
        let states_clone = states.clone();
        player.on_state_changed(move |s| states_clone.lock().push(*s));

        player.add_audio(track(&[0.1]));
        player.resume_playlist();
        pull(&sources, 0, 8);
        pull(&sources, 0, 8);

        assert_eq!(
            *states.lock(),
            vec![PlaybackState::Playing, PlaybackState::Finished]
        );
    }

    #[test]
    fn test_track_changed_reports_index() {
        let (mut player, _) = capture_player();
        let tracks = Arc::new(Mutex::new(Vec::new()));
        let tracks_clone = tracks.clone();
        let id = player.on_track_changed(move |i| tracks_clone.lock().push(*i));

        player.set_playlist(vec![track(&[0.1]), track(&[0.1]), track(&[0.1])]);
        player.set_play_index(2);
        player.resume_playlist();
        player.next_track();
        player.resume_playlist();
        assert!(player.disconnect_track_changed(id));
        player.previous_track();
        player.resume_playlist();

        assert_eq!(*tracks.lock(), vec![2, 0]);
        assert_eq!(player.play_index(), 2);
    }

    #[test]
    fn test_volume_is_base_two() {
        let (mut player, sources) = capture_player();
        player.add_audio(track(&[0.25, 0.25]));
        player.set_volume(1.0);
        player.resume_playlist();
        let (out, _) = pull(&sources, 0, 1);
        assert_eq!(out, vec![0.5]);

        player.set_volume(-1.0);
        let (out, _) = pull(&sources, 0, 1);
        assert_eq!(out, vec![0.125]);
        assert_eq!(player.volume(), -1.0);
    }

    #[test]
    fn test_mute_keeps_volume() {
        let (mut player, sources) = capture_player();
        player.add_audio(track(&[0.5, 0.5]));
        player.set_volume(1.0);
        player.set_mute(true);
        player.resume_playlist();

        let (out, _) = pull(&sources, 0, 1);
        assert_eq!(out, vec![0.0]);
        assert!(player.is_muted());
        assert_eq!(player.volume(), 1.0);

        player.set_mute(false);
        let (out, _) = pull(&sources, 0, 1);
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn test_play_bypasses_control() {
        let (mut player, sources) = capture_player();
        player.set_volume(1.0);
        player.play(&track(&[0.25, 0.25])).unwrap();

        assert!(!player.is_playing());
        assert_eq!(player.play_index(), 0);
        assert_eq!(sources.lock().len(), 2);

        let (out, written) = pull(&sources, 1, 4);
        assert_eq!(written, 2);
        assert_eq!(&out[..2], &[0.5, 0.5]);
    }

    #[test]
    fn test_reset() {
        let (mut player, _) = capture_player();
        player.set_playlist(vec![track(&[0.1]), track(&[0.1])]);
        player.set_play_index(1);
        player.resume_playlist();
        player.reset();
        assert!(!player.is_playing());
        assert_eq!(player.play_index(), 0);
    }

    #[test]
    fn test_clear_keeps_index() {
        let (mut player, _) = capture_player();
        player.set_playlist(vec![track(&[0.1]), track(&[0.1])]);
        player.set_play_index(1);
        player.clear();
        assert!(player.playlist().is_empty());
        assert_eq!(player.play_index(), 1);
        player.resume_playlist();
        assert!(!player.is_playing());
    }

    #[test]
    fn test_null_backend_player() {
        let mut player = AudioPlayer::new(format(), NullBackend::new()).unwrap();
        player.add_audio(track(&[0.1]));
        player.resume_playlist();
        assert!(player.is_playing());
        assert!(player.play(&track(&[0.1])).is_ok());
    }
}
