pub mod google;

use async_trait::async_trait;

use crate::error::Result;

/// Speech synthesis request
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    /// Model identifier (e.g. `gemini-2.5-flash-preview-tts`)
    pub model: String,
    /// Text to speak
    pub input: String,
    /// Prebuilt voice name
    pub voice: String,
}

/// Audio returned by a provider
#[derive(Debug, Clone)]
pub struct Media {
    /// Comma-delimited prefix followed by the base64 payload
    pub url: String,
}

/// Provider response; `media` is `None` when no audio was produced
#[derive(Debug, Clone, Default)]
pub struct SpeechResponse {
    pub media: Option<Media>,
}

/// Trait for TTS provider implementations
#[async_trait]
pub trait SpeechModel: Send + Sync {
    /// Synthesize text to speech
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse>;

    /// Get the provider name
    fn name(&self) -> &str;
}
