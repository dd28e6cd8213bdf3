use serde::Deserialize;

/// Message generation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageConfig {
    /// Language model used for greetings
    #[serde(default = "default_message_model")]
    pub model: String,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self {
            model: default_message_model(),
        }
    }
}

/// Song generation settings
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SongConfig {
    /// Speech model used for the sung greeting
    #[serde(default = "default_song_model")]
    pub model: String,
    /// Prebuilt voice name
    #[serde(default = "default_voice")]
    pub voice: String,
}

impl Default for SongConfig {
    fn default() -> Self {
        Self {
            model: default_song_model(),
            voice: default_voice(),
        }
    }
}

fn default_message_model() -> String {
    "gemini-2.0-flash".to_owned()
}

fn default_song_model() -> String {
    "gemini-2.5-flash-preview-tts".to_owned()
}

fn default_voice() -> String {
    "Algenib".to_owned()
}
