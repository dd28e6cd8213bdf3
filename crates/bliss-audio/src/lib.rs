//! Audio packaging for generated songs
//!
//! Wraps raw PCM from the TTS provider into a RIFF/WAVE container and
//! embeds it in a `data:` URI the browser can play directly

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod data_uri;
mod error;
mod wav;

pub use data_uri::DataUri;
pub use error::{AudioError, Result};
pub use wav::{WAV_HEADER_LEN, WavHeader, WavSpec, encode_wav, encode_wav_base64, parse_header, wav_data_uri};
