//! Decoded audio and sample streams.
//!
//! Audio handed to the player is already decoded into interleaved `f32`
//! samples. [`AudioBuffer`] owns those samples behind an `Arc`, so playlist
//! entries and one-shot sounds are cheap handles onto shared data; each
//! playback reads through its own [`BufferStream`] cursor.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::error::{MultimediaError, Result};

/// Sample rate and channel layout of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SampleFormat {
    sample_rate: u32,
    channels: u16,
}

impl SampleFormat {
    /// Create a sample format.
    ///
    /// Both the sample rate and the channel count must be non-zero.
    pub fn new(sample_rate: u32, channels: u16) -> Result<Self> {
        if sample_rate == 0 || channels == 0 {
            return Err(MultimediaError::InvalidFormat {
                sample_rate,
                channels,
            });
        }
        Ok(Self {
            sample_rate,
            channels,
        })
    }

    /// CD quality stereo, 44.1 kHz.
    pub const CD: Self = Self {
        sample_rate: 44_100,
        channels: 2,
    };

    /// Samples per second per channel.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of interleaved channels.
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Duration of `samples` interleaved samples in this format.
    pub fn duration_of(&self, samples: usize) -> Duration {
        let frames = samples as f64 / self.channels as f64;
        Duration::from_secs_f64(frames / self.sample_rate as f64)
    }
}

/// A source of interleaved `f32` samples pulled by a mixer.
///
/// Sources are handed to an [`AudioBackend`](crate::AudioBackend) and then
/// read on the backend's mixing thread, hence the `Send` bound.
pub trait SampleSource: Send {
    /// Format of the produced samples.
    fn format(&self) -> SampleFormat;

    /// Fill `out` with the next samples.
    ///
    /// Returns the number of samples written. A return value smaller than
    /// `out.len()` means the source is exhausted.
    fn fill(&mut self, out: &mut [f32]) -> usize;
}

/// Decoded audio held in memory.
#[derive(Clone)]
pub struct AudioBuffer {
    format: SampleFormat,
    samples: Arc<[f32]>,
}

impl AudioBuffer {
    /// Create a buffer from interleaved samples.
    pub fn new(format: SampleFormat, samples: impl Into<Arc<[f32]>>) -> Self {
        Self {
            format,
            samples: samples.into(),
        }
    }

    /// Decode encoded audio (WAV, OGG Vorbis, FLAC, MP3).
    #[cfg(feature = "rodio")]
    pub fn decode(data: Vec<u8>) -> Result<Self> {
        use rodio::Source;

        let decoder = rodio::Decoder::new(std::io::Cursor::new(data))?;
        let format = SampleFormat::new(decoder.sample_rate(), decoder.channels())?;
        let samples: Vec<f32> = decoder.convert_samples::<f32>().collect();
        Ok(Self::new(format, samples))
    }

    /// Read and decode an audio file.
    #[cfg(feature = "rodio")]
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read(path)?;
        Self::decode(data)
    }

    /// Format of the samples.
    pub fn format(&self) -> SampleFormat {
        self.format
    }

    /// Interleaved samples.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Number of interleaved samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Playback duration.
    pub fn duration(&self) -> Duration {
        self.format.duration_of(self.samples.len())
    }

    /// Open a stream reading the buffer from the start.
    pub fn stream(&self) -> BufferStream {
        BufferStream {
            buffer: self.clone(),
            position: 0,
        }
    }

    /// Check whether two handles share the same samples.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.samples, &other.samples)
    }
}

impl fmt::Debug for AudioBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioBuffer")
            .field("format", &self.format)
            .field("samples", &self.samples.len())
            .finish()
    }
}

/// A read cursor over an [`AudioBuffer`].
#[derive(Debug, Clone)]
pub struct BufferStream {
    buffer: AudioBuffer,
    position: usize,
}

impl BufferStream {
    /// The buffer being read.
    pub fn buffer(&self) -> &AudioBuffer {
        &self.buffer
    }

    /// Samples read so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check whether every sample has been read.
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.buffer.len()
    }
}

impl SampleSource for BufferStream {
    fn format(&self) -> SampleFormat {
        self.buffer.format
    }

    fn fill(&mut self, out: &mut [f32]) -> usize {
        let remaining = &self.buffer.samples[self.position.min(self.buffer.len())..];
        let n = remaining.len().min(out.len());
        out[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<f32>) -> AudioBuffer {
        AudioBuffer::new(SampleFormat::new(8_000, 1).unwrap(), samples)
    }

    #[test]
    fn test_sample_format_rejects_zero() {
        assert!(matches!(
            SampleFormat::new(0, 2),
            Err(MultimediaError::InvalidFormat { sample_rate: 0, .. })
        ));
        assert!(SampleFormat::new(44_100, 0).is_err());
        assert_eq!(SampleFormat::new(44_100, 2).unwrap(), SampleFormat::CD);
    }

    #[test]
    fn test_duration() {
        let buffer = AudioBuffer::new(SampleFormat::new(4, 2).unwrap(), vec![0.0; 16]);
        assert_eq!(buffer.duration(), Duration::from_secs(2));
    }

    #[test]
    fn test_stream_reads_in_chunks() {
        let buffer = mono(vec![1.0, 2.0, 3.0]);
        let mut stream = buffer.stream();
        let mut out = [0.0; 2];

        assert_eq!(stream.fill(&mut out), 2);
        assert_eq!(out, [1.0, 2.0]);
        assert_eq!(stream.fill(&mut out), 1);
        assert_eq!(out[0], 3.0);
        assert!(stream.is_exhausted());
        assert_eq!(stream.fill(&mut out), 0);
    }

    #[test]
    fn test_streams_are_independent() {
        let buffer = mono(vec![1.0, 2.0]);
        let mut a = buffer.stream();
        let b = buffer.stream();
        let mut out = [0.0; 2];
        a.fill(&mut out);
        assert!(a.is_exhausted());
        assert_eq!(b.position(), 0);
        assert!(a.buffer().ptr_eq(&buffer));
    }

    #[cfg(feature = "rodio")]
    #[test]
    fn test_decode_wav() {
        fn wav(samples: &[i16], rate: u32) -> Vec<u8> {
            let data_len = (samples.len() * 2) as u32;
            let mut bytes = Vec::new();
            bytes.extend_from_slice(b"RIFF");
            bytes.extend_from_slice(&(36 + data_len).to_le_bytes());
            bytes.extend_from_slice(b"WAVEfmt ");
            bytes.extend_from_slice(&16u32.to_le_bytes());
            bytes.extend_from_slice(&1u16.to_le_bytes());
            bytes.extend_from_slice(&1u16.to_le_bytes());
            bytes.extend_from_slice(&rate.to_le_bytes());
            bytes.extend_from_slice(&(rate * 2).to_le_bytes());
            bytes.extend_from_slice(&2u16.to_le_bytes());
            bytes.extend_from_slice(&16u16.to_le_bytes());
            bytes.extend_from_slice(b"data");
            bytes.extend_from_slice(&data_len.to_le_bytes());
            for s in samples {
                bytes.extend_from_slice(&s.to_le_bytes());
            }
            bytes
        }

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("click.wav");
        std::fs::write(&path, wav(&[0, 16384, -16384, 0], 8_000)).unwrap();

        let buffer = AudioBuffer::open(&path).unwrap();
        assert_eq!(buffer.format(), SampleFormat::new(8_000, 1).unwrap());
        assert_eq!(buffer.len(), 4);
        assert!((buffer.samples()[1] - 0.5).abs() < 0.01);
        assert!((buffer.samples()[2] + 0.5).abs() < 0.01);
    }
}
