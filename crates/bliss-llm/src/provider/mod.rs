//! Language model boundary

pub mod google;

use async_trait::async_trait;

use crate::error::LlmError;

/// A structured-output request: a prompt plus the JSON schema the answer
/// must satisfy
#[derive(Debug, Clone)]
pub struct StructuredRequest {
    pub prompt: String,
    pub schema: serde_json::Value,
}

/// Trait implemented by hosted language model backends
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Backend name used in logs
    fn name(&self) -> &str;

    /// Generate one JSON object conforming to `request.schema`
    async fn generate_object(&self, request: &StructuredRequest) -> Result<serde_json::Value, LlmError>;
}
