use async_trait::async_trait;
use bliss_gemini::{GeminiClient, GenerateContentRequest, GenerationConfig, SpeechConfig};

use super::{Media, SpeechModel, SpeechRequest, SpeechResponse};
use crate::error::Result;

/// Gemini TTS provider
pub struct GoogleSpeechModel {
    client: GeminiClient,
}

impl GoogleSpeechModel {
    pub const fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SpeechModel for GoogleSpeechModel {
    async fn synthesize(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
        tracing::debug!(
            "Gemini TTS request: model={}, voice={}, input_len={}",
            request.model,
            request.voice,
            request.input.len(),
        );

        let wire_request = GenerateContentRequest::from_prompt(request.input.as_str()).with_config(GenerationConfig {
            response_modalities: Some(vec!["AUDIO".to_owned()]),
            speech_config: Some(SpeechConfig::prebuilt(request.voice.as_str())),
            ..GenerationConfig::default()
        });

        let response = self.client.generate_content(&request.model, &wire_request).await?;

        let media = response.inline_data().map(|inline| Media {
            url: format!("data:{};base64,{}", inline.mime_type, inline.data),
        });

        match &media {
            Some(media) => tracing::debug!("Gemini TTS synthesis complete, {} url bytes", media.url.len()),
            None => tracing::warn!(
                finish_reason = response.finish_reason().unwrap_or("none"),
                "Gemini TTS response carried no audio"
            ),
        }

        Ok(SpeechResponse { media })
    }

    fn name(&self) -> &str {
        "google"
    }
}
