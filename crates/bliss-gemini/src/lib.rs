//! Minimal client for the Gemini Generative Language API
//!
//! Shared by the message and song workflows; each workflow maps responses
//! into its own boundary contract.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod client;
mod error;
mod http_client;
pub mod protocol;

pub use client::{DEFAULT_BASE_URL, GeminiClient};
pub use error::GeminiError;
pub use protocol::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, SpeechConfig};
