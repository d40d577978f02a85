//! Multimedia module for MTK.
//!
//! This crate provides the audio side of the toolkit:
//!
//! - **Audio Playlist Player**: index-based track management with
//!   play/resume/stop, volume and mute, and signal-based notifications
//! - **Decoded audio**: [`AudioBuffer`] and per-playback [`BufferStream`]s
//! - **Backends**: the [`AudioBackend`] trait, a silent [`NullBackend`] and,
//!   with the `rodio` feature, `RodioBackend` for real output
//!
//! # Audio Playback
//!
//! ```ignore
//! use mtk_multimedia::{AudioBuffer, AudioPlayer, RodioBackend, SampleFormat};
//!
//! let mut player = AudioPlayer::new(SampleFormat::CD, RodioBackend::new())?;
//!
//! player.on_track_changed(|index| {
//!     println!("Now playing track {}", index);
//! });
//!
//! player.add_audio(AudioBuffer::open("music/theme.ogg")?);
//! player.add_audio(AudioBuffer::open("music/battle.ogg")?);
//! player.resume_playlist();
//!
//! // One-shot effects play alongside the playlist.
//! let click = AudioBuffer::open("sounds/click.wav")?;
//! player.play(&click)?;
//!
//! player.set_volume(-1.0); // half amplitude
//! player.next_track();
//! player.resume_playlist();
//! ```
//!
//! ## Supported Formats
//!
//! With the `rodio` feature, [`AudioBuffer::decode`] accepts WAV, OGG
//! Vorbis, FLAC and MP3. Without it, applications decode audio themselves
//! and build buffers from raw samples.

mod error;
pub mod audio;
pub mod backend;
pub mod buffer;

pub use error::{MultimediaError, Result};

// Re-export commonly used types at the crate root
pub use audio::{AudioPlayer, PlaybackState};
#[cfg(feature = "rodio")]
pub use backend::RodioBackend;
pub use backend::{AudioBackend, NullBackend};
pub use buffer::{AudioBuffer, BufferStream, SampleFormat, SampleSource};
