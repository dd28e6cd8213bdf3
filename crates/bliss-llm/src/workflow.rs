use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::LlmError;
use crate::provider::{LanguageModel, StructuredRequest};

/// Details the greeting is personalised with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMessageInput {
    /// The name of the birthday person
    pub name: String,
    /// The age they are turning
    pub age: u32,
    /// Their interests, free-form
    pub interests: String,
}

/// Structured output the model is constrained to
///
/// Keys besides `message` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateMessageOutput {
    /// A personalized birthday message
    pub message: String,
}

/// Render the prompt sent to the language model
pub fn message_prompt(input: &GenerateMessageInput) -> String {
    format!(
        "Generate a personalized birthday message for {}, who is turning {} years old. \
         Their interests include: {}.  The message should be cheerful and celebratory.",
        input.name.trim(),
        input.age,
        input.interests,
    )
}

/// Schema restricting output to a single `message` string
pub fn message_schema() -> serde_json::Value {
    serde_json::json!({
        "type": "OBJECT",
        "properties": {
            "message": {
                "type": "STRING",
                "description": "A personalized birthday message."
            }
        },
        "required": ["message"]
    })
}

/// Generates personalised birthday greetings
///
/// One model call per invocation; failures are returned as-is.
#[derive(Clone)]
pub struct MessageWorkflow {
    model: Arc<dyn LanguageModel>,
}

impl MessageWorkflow {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        Self { model }
    }

    pub async fn generate(&self, input: &GenerateMessageInput) -> Result<GenerateMessageOutput, LlmError> {
        tracing::debug!(model = self.model.name(), age = input.age, "generating birthday message");

        let request = StructuredRequest {
            prompt: message_prompt(input),
            schema: message_schema(),
        };

        let object = self.model.generate_object(&request).await?;

        let output: GenerateMessageOutput =
            serde_json::from_value(object).map_err(|e| LlmError::InvalidOutput(e.to_string()))?;

        if output.message.trim().is_empty() {
            tracing::warn!(model = self.model.name(), "model returned an empty birthday message");
            return Err(LlmError::EmptyMessage);
        }

        tracing::debug!(len = output.message.len(), "birthday message generated");

        Ok(output)
    }
}
