use std::time::Duration;

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::error::GeminiError;
use crate::http_client::build_http_client;
use crate::protocol::{ErrorResponse, GenerateContentRequest, GenerateContentResponse};

/// Default Gemini Generative Language API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Header carrying the API key, kept out of the URL so it never lands in logs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini API client
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient").field("base_url", &self.base_url).finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client for the given key and optional base URL override
    pub fn new(api_key: SecretString, base_url: Option<&Url>, timeout: Duration) -> Result<Self, GeminiError> {
        let client = build_http_client(timeout)
            .map_err(|e| GeminiError::Connection(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url
            .map_or(DEFAULT_BASE_URL, Url::as_str)
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the `generateContent` endpoint URL for a model
    fn generate_url(&self, model: &str) -> String {
        let model = model.strip_prefix("models/").unwrap_or(model);
        format!("{}/models/{model}:generateContent", self.base_url)
    }

    /// Send a single non-streaming `generateContent` request
    pub async fn generate_content(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, GeminiError> {
        let url = self.generate_url(model);

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model, error = %e, "Gemini request failed");
                GeminiError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "Unknown error".to_owned());
            let message = serde_json::from_str::<ErrorResponse>(&body).map_or(body, |e| e.error.message);

            tracing::warn!(model, status = %status, "Gemini returned error: {message}");

            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let response: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!(model, error = %e, "failed to parse Gemini response");
            GeminiError::Decode(e.to_string())
        })?;

        tracing::debug!(
            model,
            candidates = response.candidates.len(),
            finish_reason = response.finish_reason().unwrap_or("none"),
            "Gemini request complete"
        );

        Ok(response)
    }
}
