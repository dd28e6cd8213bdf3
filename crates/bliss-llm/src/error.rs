use bliss_gemini::GeminiError;
use thiserror::Error;

/// Errors that can occur while generating a birthday message
#[derive(Debug, Error)]
pub enum LlmError {
    /// Provider could not be reached
    #[error("{0}")]
    Transport(String),

    /// Provider returned an error response
    #[error("{0}")]
    Provider(String),

    /// Provider answered but produced no structured output
    #[error("Model returned no output (finish reason: {0})")]
    EmptyOutput(String),

    /// Output matched the schema but the message was blank
    #[error("Model returned an empty birthday message")]
    EmptyMessage,

    /// Output did not match the `{ message: string }` schema
    #[error("Model output did not match schema: {0}")]
    InvalidOutput(String),
}

impl From<GeminiError> for LlmError {
    fn from(error: GeminiError) -> Self {
        if error.is_transport() {
            Self::Transport(error.to_string())
        } else {
            Self::Provider(error.to_string())
        }
    }
}
