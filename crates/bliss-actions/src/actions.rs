use bliss_llm::MessageWorkflow;
use bliss_tts::{GenerateSongInput, SongWorkflow};

use crate::result::{FormActionResult, NAME_REQUIRED, SONG_FAILED, SongActionResult};
use crate::validation::{RawForm, Validation, validate_message_form};

/// Entry points the card UI calls
///
/// Every failure comes back as data; nothing here panics or propagates.
#[derive(Clone)]
pub struct Actions {
    messages: MessageWorkflow,
    songs: SongWorkflow,
}

impl Actions {
    pub const fn new(messages: MessageWorkflow, songs: SongWorkflow) -> Self {
        Self { messages, songs }
    }

    /// Validate a message form and, if it passes, generate the greeting
    pub async fn submit_message_request(&self, form: &RawForm) -> FormActionResult {
        let input = match validate_message_form(form) {
            Validation::Valid(input) => input,
            Validation::Invalid(issues) => {
                tracing::debug!(issues = issues.len(), "message form rejected");
                return FormActionResult::invalid(form.clone(), issues);
            }
        };

        match self.messages.generate(&input).await {
            Ok(output) => FormActionResult::generated(output.message),
            Err(e) => {
                tracing::error!(error = %e, "message generation failed");
                FormActionResult::failed(e.to_string())
            }
        }
    }

    /// Generate the sung greeting for `name`
    pub async fn submit_song_request(&self, name: &str) -> SongActionResult {
        if name.trim().is_empty() {
            return SongActionResult::Failed {
                error: NAME_REQUIRED.to_owned(),
            };
        }

        let input = GenerateSongInput { name: name.to_owned() };

        match self.songs.generate(&input).await {
            Ok(output) => SongActionResult::Song {
                song_url: output.audio_data_uri,
            },
            Err(e) => {
                tracing::error!(error = %e, "song generation failed");
                SongActionResult::Failed {
                    error: format!("{SONG_FAILED}: {e}"),
                }
            }
        }
    }
}
