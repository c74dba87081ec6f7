//! Minimal WAV (RIFF/PCM) encoder
//!
//! Serializes a `SampleBuffer` into a canonical 44-byte header followed by
//! interleaved 16-bit little-endian samples. The float-to-i16 mapping is
//! asymmetric (negative samples scale by 32768, positive by 32767) so the
//! full negative range of a two's-complement sample is preserved.

use clipscribe_core::SampleBuffer;

/// Size of the canonical RIFF/fmt/data header
pub const HEADER_LEN: usize = 44;

const BYTES_PER_SAMPLE: usize = 2;

/// Little-endian byte writer owning its output
///
/// An explicit cursor: every write appends at the end, so sequential calls
/// lay fields out in declaration order.
struct ByteWriter {
    out: Vec<u8>,
}

impl ByteWriter {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
        }
    }

    fn tag(&mut self, tag: &[u8; 4]) {
        self.out.extend_from_slice(tag);
    }

    fn u16_le(&mut self, value: u16) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn u32_le(&mut self, value: u32) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn i16_le(&mut self, value: i16) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn into_inner(self) -> Vec<u8> {
        self.out
    }
}

/// Convert a float sample to i16 with asymmetric scaling
///
/// Clamps to [-1.0, 1.0] first; -1.0 maps to -32768 and 1.0 to 32767.
#[inline]
fn sample_to_i16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0).floor() as i16
    } else {
        (s * 32767.0).floor() as i16
    }
}

/// Encode a buffer as a complete WAV byte sequence
///
/// Infallible: out-of-range samples are clamped rather than rejected. The
/// result is `44 + frames * channels * 2` bytes.
pub fn encode_wav(buffer: &SampleBuffer) -> Vec<u8> {
    let channels = buffer.channel_count();
    let frames = buffer.frame_count();
    let rate = buffer.sample_rate().as_hz();

    let data_len = frames * channels * BYTES_PER_SAMPLE;
    let block_align = (channels * BYTES_PER_SAMPLE) as u16;
    let byte_rate = rate * u32::from(block_align);

    let mut w = ByteWriter::with_capacity(HEADER_LEN + data_len);

    // RIFF chunk
    w.tag(b"RIFF");
    w.u32_le(36 + data_len as u32);
    w.tag(b"WAVE");

    // fmt chunk: 16-byte linear PCM block
    w.tag(b"fmt ");
    w.u32_le(16);
    w.u16_le(1); // PCM
    w.u16_le(channels as u16);
    w.u32_le(rate);
    w.u32_le(byte_rate);
    w.u16_le(block_align);
    w.u16_le(16); // bits per sample

    // data chunk, interleaved frame-major
    w.tag(b"data");
    w.u32_le(data_len as u32);
    for frame in 0..frames {
        for channel in buffer.channels() {
            w.i16_le(sample_to_i16(channel[frame]));
        }
    }

    tracing::debug!(frames, channels, rate, bytes = HEADER_LEN + data_len, "encoded wav clip");

    w.into_inner()
}
