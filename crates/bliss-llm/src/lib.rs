//! Birthday message generation backed by a hosted language model

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
pub mod provider;
mod workflow;

pub use error::LlmError;
pub use provider::{LanguageModel, StructuredRequest, google::GoogleLanguageModel};
pub use workflow::{GenerateMessageInput, GenerateMessageOutput, MessageWorkflow, message_prompt, message_schema};
