use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use bliss_audio::{WavSpec, wav_data_uri};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TtsError};
use crate::provider::{SpeechModel, SpeechRequest};

/// Default Gemini speech model
pub const DEFAULT_TTS_MODEL: &str = "gemini-2.5-flash-preview-tts";

/// Default prebuilt voice
pub const DEFAULT_VOICE: &str = "Algenib";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateSongInput {
    /// The name of the birthday person
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSongOutput {
    /// `data:audio/wav;base64,...` URI of the sung greeting
    pub audio_data_uri: String,
}

/// The four-line lyric, name in the third line
pub fn birthday_lyric(name: &str) -> String {
    format!(
        "Happy birthday to you. Happy birthday to you. Happy birthday dear {}. Happy birthday to you.",
        name.trim()
    )
}

/// Sings "Happy Birthday" via a TTS provider and packages it as WAV
#[derive(Clone)]
pub struct SongWorkflow {
    model: Arc<dyn SpeechModel>,
    model_id: String,
    voice: String,
}

impl SongWorkflow {
    pub fn new(model: Arc<dyn SpeechModel>, model_id: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            model,
            model_id: model_id.into(),
            voice: voice.into(),
        }
    }

    pub async fn generate(&self, input: &GenerateSongInput) -> Result<GenerateSongOutput> {
        tracing::debug!(provider = self.model.name(), model = %self.model_id, "generating birthday song");

        let request = SpeechRequest {
            model: self.model_id.clone(),
            input: birthday_lyric(&input.name),
            voice: self.voice.clone(),
        };

        let media = self.model.synthesize(&request).await?.media.ok_or(TtsError::NoMedia)?;

        let (header, payload) = media.url.split_once(',').unwrap_or(("", media.url.as_str()));
        let pcm = STANDARD
            .decode(payload.trim())
            .map_err(|e| TtsError::InvalidMedia(e.to_string()))?;

        let spec = pcm_spec(header);
        if pcm.len() % usize::from(spec.block_align()) != 0 {
            tracing::warn!(bytes = pcm.len(), "PCM payload is not frame aligned");
        }

        let audio_data_uri = wav_data_uri(&pcm, spec)?;

        tracing::debug!(pcm_bytes = pcm.len(), sample_rate = spec.sample_rate, "birthday song generated");

        Ok(GenerateSongOutput { audio_data_uri })
    }
}

/// PCM layout for a provider media prefix such as
/// `data:audio/L16;codec=pcm;rate=24000;base64`
///
/// The provider only ever returns mono 16-bit PCM, so only the declared rate
/// is honoured; everything else uses the defaults.
fn pcm_spec(header: &str) -> WavSpec {
    let declared_rate = header
        .split(';')
        .filter_map(|param| param.trim().split_once('='))
        .find(|(key, _)| key.eq_ignore_ascii_case("rate"))
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|rate| *rate > 0);

    match declared_rate {
        Some(rate) => WavSpec::default().with_sample_rate(rate),
        None => WavSpec::default(),
    }
}
