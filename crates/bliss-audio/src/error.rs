use thiserror::Error;

pub type Result<T> = std::result::Result<T, AudioError>;

/// Errors raised while packaging or inspecting audio payloads
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AudioError {
    /// Channel count, sample rate, or sample width is unusable
    #[error("invalid audio format: {0}")]
    InvalidSpec(String),

    /// PCM payload does not fit in a 32-bit RIFF size field
    #[error("PCM payload of {0} bytes exceeds the RIFF size limit")]
    PayloadTooLarge(usize),

    /// Bytes do not start with a canonical WAV header
    #[error("malformed WAV header: {0}")]
    MalformedHeader(&'static str),

    /// String is not a `data:` URI
    #[error("malformed data URI: {0}")]
    MalformedDataUri(&'static str),

    /// Base64 body could not be decoded
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}
