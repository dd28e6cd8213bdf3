use serde::{Deserialize, Serialize};

use crate::validation::RawForm;

pub const MESSAGE_GENERATED: &str = "Message generated successfully!";
pub const CHECK_FIELDS: &str = "Please check the fields below.";
pub const MESSAGE_FAILED: &str = "Failed to generate message. Please try again.";
pub const NAME_REQUIRED: &str = "Name is required to generate a song.";
pub const SONG_FAILED: &str = "Failed to generate the birthday song";
pub const UNREADABLE_FORM: &str = "Could not read the submitted form.";
pub const UNREADABLE_SONG_REQUEST: &str = "Could not read the song request";

/// Outcome of a message form submission
///
/// Serializes as `{ message, fields?, issues?, generatedMessage? }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormActionResult {
    Success {
        /// Status line shown to the user
        message: String,
        #[serde(rename = "generatedMessage")]
        generated_message: String,
    },
    Failure {
        /// Status line shown to the user
        message: String,
        /// Submitted values echoed back when validation failed
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fields: Option<RawForm>,
        /// One human-readable entry per problem
        issues: Vec<String>,
    },
}

impl FormActionResult {
    pub(crate) fn generated(message: String) -> Self {
        Self::Success {
            message: MESSAGE_GENERATED.to_owned(),
            generated_message: message,
        }
    }

    pub(crate) fn invalid(fields: RawForm, issues: Vec<String>) -> Self {
        Self::Failure {
            message: CHECK_FIELDS.to_owned(),
            fields: Some(fields),
            issues,
        }
    }

    /// The body could not be decoded into form fields at all
    pub(crate) fn unreadable(error: String) -> Self {
        Self::Failure {
            message: UNREADABLE_FORM.to_owned(),
            fields: None,
            issues: vec![error],
        }
    }

    pub(crate) fn failed(error: String) -> Self {
        Self::Failure {
            message: MESSAGE_FAILED.to_owned(),
            fields: None,
            issues: vec![error],
        }
    }

    pub fn status_message(&self) -> &str {
        match self {
            Self::Success { message, .. } | Self::Failure { message, .. } => message.as_str(),
        }
    }

    pub fn generated_message(&self) -> Option<&str> {
        match self {
            Self::Success { generated_message, .. } => Some(generated_message.as_str()),
            Self::Failure { .. } => None,
        }
    }

    pub fn issues(&self) -> &[String] {
        match self {
            Self::Success { .. } => &[],
            Self::Failure { issues, .. } => issues.as_slice(),
        }
    }
}

/// Outcome of a song request: `{ songUrl }` or `{ error }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SongActionResult {
    Song {
        #[serde(rename = "songUrl")]
        song_url: String,
    },
    Failed {
        error: String,
    },
}
