#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod gemini;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;
pub mod workflows;

use serde::Deserialize;

pub use cors::*;
pub use gemini::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;
pub use workflows::*;

/// Top-level Birthday Bliss configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Gemini API credentials
    pub gemini: GeminiConfig,
    /// Message generation workflow
    #[serde(default)]
    pub message: MessageConfig,
    /// Song generation workflow
    #[serde(default)]
    pub song: SongConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
