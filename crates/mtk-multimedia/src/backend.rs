//! Audio output backends.
//!
//! The player never talks to a sound device directly. It initializes an
//! [`AudioBackend`] once and then hands it sources to mix. The backend pulls
//! samples from those sources on its own mixing thread.
//!
//! Sources that share state with the UI thread (the player's control
//! stream) take that state's lock inside [`SampleSource::fill`], so a backend
//! never observes a half-swapped stream and needs no locking of its own.

use mtk_core::logging::targets;

use crate::buffer::{SampleFormat, SampleSource};
use crate::error::Result;

/// A device (or stand-in) that mixes sample sources to an output.
pub trait AudioBackend {
    /// Prepare the output for the given format.
    ///
    /// Called exactly once, before any call to [`play_mixed`](Self::play_mixed).
    fn initialize(&mut self, format: SampleFormat) -> Result<()>;

    /// Add a source to the output mix.
    ///
    /// The source plays until [`SampleSource::fill`] reports exhaustion.
    fn play_mixed(&mut self, source: Box<dyn SampleSource>) -> Result<()>;
}

/// A backend that accepts and discards every source.
///
/// Useful for running an application without sound.
#[derive(Debug, Default)]
pub struct NullBackend {
    format: Option<SampleFormat>,
}

impl NullBackend {
    /// Create a silent backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Format passed to `initialize`, if it has been called.
    pub fn format(&self) -> Option<SampleFormat> {
        self.format
    }
}

impl AudioBackend for NullBackend {
    fn initialize(&mut self, format: SampleFormat) -> Result<()> {
        tracing::debug!(
            target: targets::AUDIO,
            sample_rate = format.sample_rate(),
            channels = format.channels(),
            "null audio backend initialized"
        );
        self.format = Some(format);
        Ok(())
    }

    fn play_mixed(&mut self, _source: Box<dyn SampleSource>) -> Result<()> {
        Ok(())
    }
}

#[cfg(feature = "rodio")]
pub use self::rodio_backend::RodioBackend;

#[cfg(feature = "rodio")]
mod rodio_backend {
    use std::time::Duration;

    use rodio::{OutputStream, OutputStreamHandle, Source};

    use mtk_core::logging::targets;

    use super::AudioBackend;
    use crate::buffer::{SampleFormat, SampleSource};
    use crate::error::{MultimediaError, Result};

    /// Frames pulled from a source per refill.
    const CHUNK_FRAMES: usize = 1024;

    /// Backend playing through the default output device via rodio.
    ///
    /// rodio runs the mixing thread; every source added here becomes one
    /// input of its mixer.
    #[derive(Default)]
    pub struct RodioBackend {
        /// The output stream (must be kept alive for audio to play).
        stream: Option<(OutputStream, OutputStreamHandle)>,
    }

    impl RodioBackend {
        /// Create a backend. The device is opened by `initialize`.
        pub fn new() -> Self {
            Self::default()
        }
    }

    impl AudioBackend for RodioBackend {
        fn initialize(&mut self, format: SampleFormat) -> Result<()> {
            let (stream, handle) = OutputStream::try_default()?;
            tracing::debug!(
                target: targets::AUDIO,
                sample_rate = format.sample_rate(),
                channels = format.channels(),
                "rodio output stream opened"
            );
            self.stream = Some((stream, handle));
            Ok(())
        }

        fn play_mixed(&mut self, source: Box<dyn SampleSource>) -> Result<()> {
            let Some((_, handle)) = &self.stream else {
                return Err(MultimediaError::Playback(
                    "backend not initialized".to_string(),
                ));
            };
            handle.play_raw(SourceAdapter::new(source))?;
            Ok(())
        }
    }

    /// Exposes a [`SampleSource`] as a rodio `Source`.
    struct SourceAdapter {
        inner: Box<dyn SampleSource>,
        format: SampleFormat,
        chunk: Vec<f32>,
        filled: usize,
        position: usize,
        exhausted: bool,
    }

    impl SourceAdapter {
        fn new(inner: Box<dyn SampleSource>) -> Self {
            let format = inner.format();
            Self {
                inner,
                format,
                chunk: vec![0.0; CHUNK_FRAMES * format.channels() as usize],
                filled: 0,
                position: 0,
                exhausted: false,
            }
        }
    }

    impl Iterator for SourceAdapter {
        type Item = f32;

        fn next(&mut self) -> Option<f32> {
            if self.position >= self.filled {
                if self.exhausted {
                    return None;
                }
                self.filled = self.inner.fill(&mut self.chunk);
                self.position = 0;
                self.exhausted = self.filled < self.chunk.len();
                if self.filled == 0 {
                    return None;
                }
            }
            let sample = self.chunk[self.position];
            self.position += 1;
            Some(sample)
        }
    }

    impl Source for SourceAdapter {
        fn current_frame_len(&self) -> Option<usize> {
            None
        }

        fn channels(&self) -> u16 {
            self.format.channels()
        }

        fn sample_rate(&self) -> u32 {
            self.format.sample_rate()
        }

        fn total_duration(&self) -> Option<Duration> {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::AudioBuffer;

    #[test]
    fn test_null_backend_records_format() {
        let mut backend = NullBackend::new();
        assert!(backend.format().is_none());
        backend.initialize(SampleFormat::CD).unwrap();
        assert_eq!(backend.format(), Some(SampleFormat::CD));

        let buffer = AudioBuffer::new(SampleFormat::CD, vec![0.0; 4]);
        assert!(backend.play_mixed(Box::new(buffer.stream())).is_ok());
    }
}
