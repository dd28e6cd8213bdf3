//! Gemini-backed structured text generation

use async_trait::async_trait;
use bliss_gemini::{GeminiClient, GenerateContentRequest, GenerationConfig};

use super::{LanguageModel, StructuredRequest};
use crate::error::LlmError;

/// Language model served by the Gemini `generateContent` API
pub struct GoogleLanguageModel {
    client: GeminiClient,
    model: String,
}

impl GoogleLanguageModel {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for GoogleLanguageModel {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate_object(&self, request: &StructuredRequest) -> Result<serde_json::Value, LlmError> {
        let wire_request = GenerateContentRequest::from_prompt(request.prompt.as_str()).with_config(GenerationConfig {
            response_mime_type: Some("application/json".to_owned()),
            response_schema: Some(request.schema.clone()),
            ..GenerationConfig::default()
        });

        let response = self.client.generate_content(&self.model, &wire_request).await?;

        let Some(text) = response.text() else {
            let reason = response.finish_reason().unwrap_or("none").to_owned();
            tracing::warn!(model = %self.model, %reason, "model produced no text output");
            return Err(LlmError::EmptyOutput(reason));
        };

        serde_json::from_str(text.trim()).map_err(|e| {
            tracing::warn!(model = %self.model, error = %e, "model output was not valid JSON");
            LlmError::InvalidOutput(e.to_string())
        })
    }
}
