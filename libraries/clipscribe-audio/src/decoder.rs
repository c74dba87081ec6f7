/// Audio decoder implementation using Symphonia
use crate::error::{AudioError, Result};
use clipscribe_core::{AudioDecoder as AudioDecoderTrait, SampleBuffer, SampleRate};
use std::path::Path;
use symphonia::core::audio::{AudioBufferRef, Signal};
use symphonia::core::codecs::{Decoder, DecoderOptions};
use symphonia::core::formats::{FormatOptions, FormatReader};
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;

/// Audio decoder using Symphonia
///
/// Supports: MP3, FLAC, OGG, WAV, AAC, OPUS
///
/// Decodes the default track of a file into a planar `SampleBuffer`,
/// preserving the source channel layout. Clip extraction and encoding are
/// channel-count generic, so no downmix happens here; the waveform view
/// reads channel 0 only.
pub struct SymphoniaDecoder;

impl SymphoniaDecoder {
    /// Create a new decoder
    pub fn new() -> Self {
        Self
    }

    /// Convert one decoded Symphonia packet into planar f32 channels
    ///
    /// Signed integers use symmetric scaling (divide by 2^(N-1)) so the
    /// [-1.0, 1.0) range is symmetric; unsigned formats are centered on zero.
    fn append_packet(decoded: &AudioBufferRef, channels: &mut [Vec<f32>]) {
        match decoded {
            AudioBufferRef::F32(buf) => Self::append_planar(buf, channels, |s| s),
            AudioBufferRef::F64(buf) => Self::append_planar(buf, channels, |s| s as f32),
            AudioBufferRef::S32(buf) => {
                Self::append_planar(buf, channels, |s| s as f32 / 2_147_483_648.0)
            }
            AudioBufferRef::S16(buf) => {
                Self::append_planar(buf, channels, |s| f32::from(s) / 32_768.0)
            }
            AudioBufferRef::S8(buf) => {
                Self::append_planar(buf, channels, |s| f32::from(s) / 128.0)
            }
            AudioBufferRef::S24(buf) => {
                Self::append_planar(buf, channels, |s| s.inner() as f32 / 8_388_608.0)
            }
            AudioBufferRef::U32(buf) => Self::append_planar(buf, channels, |s| {
                (s as f32 / u32::MAX as f32) * 2.0 - 1.0
            }),
            AudioBufferRef::U16(buf) => Self::append_planar(buf, channels, |s| {
                (f32::from(s) / f32::from(u16::MAX)) * 2.0 - 1.0
            }),
            AudioBufferRef::U8(buf) => Self::append_planar(buf, channels, |s| {
                (f32::from(s) / f32::from(u8::MAX)) * 2.0 - 1.0
            }),
            AudioBufferRef::U24(buf) => Self::append_planar(buf, channels, |s| {
                (s.inner() as f32 / 16_777_215.0) * 2.0 - 1.0
            }),
        }
    }

    fn append_planar<T, F>(
        buf: &symphonia::core::audio::AudioBuffer<T>,
        channels: &mut [Vec<f32>],
        normalize: F,
    ) where
        T: symphonia::core::sample::Sample + Copy,
        F: Fn(T) -> f32,
    {
        let present = buf.spec().channels.count().min(channels.len());
        for (index, out) in channels.iter_mut().enumerate().take(present) {
            out.extend(buf.chan(index).iter().copied().map(&normalize));
        }
    }
}

impl Default for SymphoniaDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDecoderTrait for SymphoniaDecoder {
    fn decode(&mut self, path: &Path) -> clipscribe_core::Result<SampleBuffer> {
        if !path.exists() {
            return Err(AudioError::FileNotFound(path.display().to_string()).into());
        }

        let file = std::fs::File::open(path).map_err(AudioError::Io)?;
        let mss = MediaSourceStream::new(Box::new(file), Default::default());

        // Hint the format registry with the file extension
        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe()
            .format(
                &hint,
                mss,
                &FormatOptions::default(),
                &MetadataOptions::default(),
            )
            .map_err(|e| AudioError::Symphonia(format!("Failed to probe file: {}", e)))?;

        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| AudioError::DecodeError("No audio tracks found".to_string()))?;

        let sample_rate = track.codec_params.sample_rate.unwrap_or(44_100);
        let channel_count = track
            .codec_params
            .channels
            .map(symphonia::core::audio::Channels::count)
            .unwrap_or(2);
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())
            .map_err(|e| AudioError::Symphonia(format!("Failed to create decoder: {}", e)))?;

        let mut channels: Vec<Vec<f32>> = vec![Vec::new(); channel_count];

        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(symphonia::core::errors::Error::IoError(e))
                    if e.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    break;
                }
                Err(e) => {
                    return Err(
                        AudioError::Symphonia(format!("Error reading packet: {}", e)).into()
                    );
                }
            };

            if packet.track_id() != track_id {
                continue;
            }

            let decoded = match decoder.decode(&packet) {
                Ok(decoded) => decoded,
                Err(symphonia::core::errors::Error::DecodeError(e)) => {
                    // Bitstream errors in a single packet are recoverable
                    tracing::warn!("recoverable decode error: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(AudioError::DecodeError(format!("Decode error: {}", e)).into());
                }
            };

            Self::append_packet(&decoded, &mut channels);
        }

        SampleBuffer::new(SampleRate::new(sample_rate), channels)
    }

    fn supports_format(&self, path: &Path) -> bool {
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            matches!(
                ext.to_lowercase().as_str(),
                "mp3" | "flac" | "ogg" | "opus" | "wav" | "m4a" | "aac"
            )
        } else {
            false
        }
    }
}
