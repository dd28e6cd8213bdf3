use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::{AudioError, Result};

/// A decoded `data:<mime>[;param=value]*;base64,<payload>` URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUri {
    /// Media type, lowercased (e.g. `audio/wav`)
    pub mime_type: String,
    /// `key=value` parameters between the media type and `;base64`
    pub params: Vec<(String, String)>,
    /// Decoded payload
    pub data: Vec<u8>,
}

impl DataUri {
    pub fn new(mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            params: Vec::new(),
            data,
        }
    }

    /// Parse a base64 data URI
    ///
    /// Everything after the first comma is the payload. A missing media type
    /// defaults to `application/octet-stream`.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri
            .strip_prefix("data:")
            .ok_or(AudioError::MalformedDataUri("missing `data:` scheme"))?;
        let (header, payload) = rest
            .split_once(',')
            .ok_or(AudioError::MalformedDataUri("missing `,` before payload"))?;

        let mut segments = header.split(';');
        let mime_type = match segments.next().map(str::trim) {
            Some("") | None => "application/octet-stream".to_owned(),
            Some(mime) => mime.to_ascii_lowercase(),
        };

        let mut params = Vec::new();
        let mut is_base64 = false;
        for segment in segments.map(str::trim) {
            if segment.eq_ignore_ascii_case("base64") {
                is_base64 = true;
            } else if let Some((key, value)) = segment.split_once('=') {
                params.push((key.trim().to_ascii_lowercase(), value.trim().to_owned()));
            }
        }

        if !is_base64 {
            return Err(AudioError::MalformedDataUri("only base64 payloads are supported"));
        }

        let data = STANDARD
            .decode(payload.trim())
            .map_err(|e| AudioError::InvalidBase64(e.to_string()))?;

        Ok(Self { mime_type, params, data })
    }

    /// Look up a media type parameter by name, case-insensitively
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl fmt::Display for DataUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "data:{}", self.mime_type)?;
        for (key, value) in &self.params {
            write!(f, ";{key}={value}")?;
        }
        write!(f, ";base64,{}", STANDARD.encode(&self.data))
    }
}
