use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Gemini provider credentials and transport settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// API key
    pub api_key: SecretString,
    /// Base URL override (e.g. a mock in tests)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl GeminiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: None,
            timeout_seconds: default_timeout_seconds(),
        }
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

const fn default_timeout_seconds() -> u64 {
    120
}
