use bliss_audio::AudioError;
use bliss_gemini::GeminiError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Song generation errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Provider could not be reached
    #[error("{0}")]
    Transport(String),

    /// Provider returned an error response
    #[error("{0}")]
    Provider(String),

    /// Provider answered without any audio
    #[error("TTS media generation failed.")]
    NoMedia,

    /// Audio payload could not be decoded
    #[error("TTS media could not be decoded: {0}")]
    InvalidMedia(String),

    /// Decoded audio could not be packaged as WAV
    #[error(transparent)]
    Audio(#[from] AudioError),
}

impl From<GeminiError> for TtsError {
    fn from(error: GeminiError) -> Self {
        if error.is_transport() {
            Self::Transport(error.to_string())
        } else {
            Self::Provider(error.to_string())
        }
    }
}
