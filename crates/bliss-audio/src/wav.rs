use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{AudioError, Result};

/// Size of the canonical RIFF + `fmt ` + `data` header
pub const WAV_HEADER_LEN: usize = 44;

/// Bytes counted by the RIFF size field besides the PCM payload
const RIFF_OVERHEAD: u32 = 36;

/// Size of a PCM `fmt ` chunk body
const FMT_CHUNK_LEN: u32 = 16;

/// WAVE format tag for uncompressed integer PCM
const FORMAT_PCM: u16 = 1;

/// Layout of the PCM samples being wrapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Number of interleaved channels
    pub channels: u16,
    /// Samples per second per channel
    pub sample_rate: u32,
    /// Bytes per sample per channel
    pub sample_width: u16,
}

impl Default for WavSpec {
    /// Mono, 24 kHz, 16-bit: what the TTS model emits
    fn default() -> Self {
        Self {
            channels: 1,
            sample_rate: 24_000,
            sample_width: 2,
        }
    }
}

impl WavSpec {
    pub const fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub const fn bits_per_sample(&self) -> u16 {
        self.sample_width * 8
    }

    pub const fn block_align(&self) -> u16 {
        self.channels * self.sample_width
    }

    pub const fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }

    fn validate(&self) -> Result<()> {
        if self.channels == 0 {
            return Err(AudioError::InvalidSpec("channel count must be at least 1".to_owned()));
        }
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSpec("sample rate must be positive".to_owned()));
        }
        if !(1..=4).contains(&self.sample_width) {
            return Err(AudioError::InvalidSpec(format!(
                "sample width must be 1 to 4 bytes, got {}",
                self.sample_width
            )));
        }
        if self.channels.checked_mul(self.sample_width).is_none()
            || self.sample_rate.checked_mul(u32::from(self.block_align())).is_none()
        {
            return Err(AudioError::InvalidSpec("byte rate overflows 32 bits".to_owned()));
        }
        Ok(())
    }
}

/// Wrap raw PCM bytes in a single-file RIFF/WAVE container
///
/// Output is deterministic: identical input always yields identical bytes.
pub fn encode_wav(pcm: &[u8], spec: WavSpec) -> Result<Vec<u8>> {
    spec.validate()?;

    let data_len = u32::try_from(pcm.len())
        .ok()
        .filter(|len| len.checked_add(RIFF_OVERHEAD).is_some())
        .ok_or(AudioError::PayloadTooLarge(pcm.len()))?;

    let mut out = Vec::with_capacity(WAV_HEADER_LEN + pcm.len());

    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(RIFF_OVERHEAD + data_len).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    out.extend_from_slice(&FORMAT_PCM.to_le_bytes());
    out.extend_from_slice(&spec.channels.to_le_bytes());
    out.extend_from_slice(&spec.sample_rate.to_le_bytes());
    out.extend_from_slice(&spec.byte_rate().to_le_bytes());
    out.extend_from_slice(&spec.block_align().to_le_bytes());
    out.extend_from_slice(&spec.bits_per_sample().to_le_bytes());

    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_len.to_le_bytes());
    out.extend_from_slice(pcm);

    Ok(out)
}

/// Encode PCM as a WAV file and return it base64-encoded
pub fn encode_wav_base64(pcm: &[u8], spec: WavSpec) -> Result<String> {
    encode_wav(pcm, spec).map(|wav| STANDARD.encode(wav))
}

/// Encode PCM as a playable `data:audio/wav;base64,...` URI
pub fn wav_data_uri(pcm: &[u8], spec: WavSpec) -> Result<String> {
    Ok(format!("data:audio/wav;base64,{}", encode_wav_base64(pcm, spec)?))
}

/// Fields read back from a canonical WAV header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub riff_size: u32,
    pub format_tag: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_len: u32,
}

impl WavHeader {
    /// Sample layout declared by the header
    pub const fn spec(&self) -> WavSpec {
        WavSpec {
            channels: self.channels,
            sample_rate: self.sample_rate,
            sample_width: self.bits_per_sample / 8,
        }
    }
}

/// Parse the 44-byte header produced by [`encode_wav`]
pub fn parse_header(bytes: &[u8]) -> Result<WavHeader> {
    if bytes.len() < WAV_HEADER_LEN {
        return Err(AudioError::MalformedHeader("shorter than 44 bytes"));
    }
    if &bytes[0..4] != b"RIFF" {
        return Err(AudioError::MalformedHeader("missing RIFF tag"));
    }
    if &bytes[8..12] != b"WAVE" {
        return Err(AudioError::MalformedHeader("missing WAVE tag"));
    }
    if &bytes[12..16] != b"fmt " || read_u32(bytes, 16) != FMT_CHUNK_LEN {
        return Err(AudioError::MalformedHeader("missing 16-byte fmt chunk"));
    }
    if &bytes[36..40] != b"data" {
        return Err(AudioError::MalformedHeader("missing data chunk"));
    }

    Ok(WavHeader {
        riff_size: read_u32(bytes, 4),
        format_tag: read_u16(bytes, 20),
        channels: read_u16(bytes, 22),
        sample_rate: read_u32(bytes, 24),
        byte_rate: read_u32(bytes, 28),
        block_align: read_u16(bytes, 32),
        bits_per_sample: read_u16(bytes, 34),
        data_len: read_u32(bytes, 40),
    })
}

fn read_u16(bytes: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([bytes[at], bytes[at + 1]])
}

fn read_u32(bytes: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}
