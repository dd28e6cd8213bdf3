//! Sung birthday greetings via a hosted text-to-speech model

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
pub mod provider;
mod workflow;

pub use error::{Result, TtsError};
pub use provider::{Media, SpeechModel, SpeechRequest, SpeechResponse, google::GoogleSpeechModel};
pub use workflow::{
    DEFAULT_TTS_MODEL, DEFAULT_VOICE, GenerateSongInput, GenerateSongOutput, SongWorkflow, birthday_lyric,
};
