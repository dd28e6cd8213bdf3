use thiserror::Error;

/// Failures talking to the Gemini API
#[derive(Debug, Error)]
pub enum GeminiError {
    /// Network-level failure before a response arrived
    #[error("Failed to reach Gemini: {0}")]
    Connection(String),

    /// Provider answered with a non-success status
    #[error("Gemini API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body was not a valid `generateContent` response
    #[error("Failed to decode Gemini response: {0}")]
    Decode(String),
}

impl GeminiError {
    /// Whether the failure happened at the transport layer
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}
