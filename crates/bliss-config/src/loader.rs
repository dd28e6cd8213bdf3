use std::path::Path;

use secrecy::ExposeSecret;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if credentials are missing or a workflow is
    /// configured with an empty model or voice
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_gemini()?;
        self.validate_workflows()?;
        self.validate_server()?;
        Ok(())
    }

    fn validate_gemini(&self) -> anyhow::Result<()> {
        if self.gemini.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("gemini.api_key must not be empty");
        }

        if self.gemini.timeout_seconds == 0 {
            anyhow::bail!("gemini.timeout_seconds must be greater than 0");
        }

        Ok(())
    }

    fn validate_workflows(&self) -> anyhow::Result<()> {
        if self.message.model.trim().is_empty() {
            anyhow::bail!("message.model must not be empty");
        }

        if self.song.model.trim().is_empty() {
            anyhow::bail!("song.model must not be empty");
        }

        if self.song.voice.trim().is_empty() {
            anyhow::bail!("song.voice must not be empty");
        }

        Ok(())
    }

    fn validate_server(&self) -> anyhow::Result<()> {
        let health = &self.server.health;

        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got '{}'", health.path);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{AnyOrList, LogFormat};

    use super::*;

    const FULL: &str = r#"
[server]
listen_address = "127.0.0.1:4000"

[server.health]
path = "/healthz"

[server.cors]
origins = ["https://bliss.example"]
max_age = 600

[gemini]
api_key = "{{ env.BLISS_LOADER_KEY }}"
base_url = "http://localhost:9000/v1beta"

[message]
model = "gemini-2.0-flash-lite"

[song]
voice = "Puck"

[telemetry]
filter = "debug"
format = "json"
"#;

    #[test]
    fn parses_full_config() {
        temp_env::with_var("BLISS_LOADER_KEY", Some("abc123"), || {
            let config = Config::from_toml(FULL).unwrap();

            assert_eq!(config.server.listen_address.unwrap().port(), 4000);
            assert_eq!(config.server.health.path, "/healthz");
            assert!(config.server.health.enabled);

            let cors = config.server.cors.as_ref().unwrap();
            assert_eq!(cors.origins, AnyOrList::List(vec!["https://bliss.example".to_owned()]));
            assert_eq!(cors.headers, AnyOrList::Any);
            assert_eq!(cors.max_age_duration().unwrap().as_secs(), 600);

            assert_eq!(config.gemini.api_key.expose_secret(), "abc123");
            assert_eq!(config.gemini.base_url.as_ref().unwrap().port(), Some(9000));
            assert_eq!(config.gemini.timeout().as_secs(), 120);

            assert_eq!(config.message.model, "gemini-2.0-flash-lite");
            assert_eq!(config.song.model, "gemini-2.5-flash-preview-tts");
            assert_eq!(config.song.voice, "Puck");

            assert_eq!(config.telemetry.filter, "debug");
            assert_eq!(config.telemetry.format, LogFormat::Json);
        });
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::from_toml("[gemini]\napi_key = \"k\"\n").unwrap();

        assert!(config.server.listen_address.is_none());
        assert!(config.server.cors.is_none());
        assert_eq!(config.server.health.path, "/health");
        assert_eq!(config.message.model, "gemini-2.0-flash");
        assert_eq!(config.song.voice, "Algenib");
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn wildcard_anywhere_in_list_means_any() {
        let config = Config::from_toml(
            "[server.cors]\norigins = [\"https://a.example\", \"*\"]\nheaders = \"*\"\n[gemini]\napi_key = \"k\"\n",
        )
        .unwrap();

        let cors = config.server.cors.unwrap();
        assert_eq!(cors.origins, AnyOrList::Any);
        assert_eq!(cors.headers, AnyOrList::Any);
    }

    #[test]
    fn missing_gemini_section_is_rejected() {
        let err = Config::from_toml("[message]\nmodel = \"m\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn empty_api_key_is_rejected() {
        let err = Config::from_toml("[gemini]\napi_key = \"  \"\n").unwrap_err();
        assert!(err.to_string().contains("gemini.api_key"));
    }

    #[test]
    fn empty_voice_is_rejected() {
        let err = Config::from_toml("[gemini]\napi_key = \"k\"\n[song]\nvoice = \"\"\n").unwrap_err();
        assert!(err.to_string().contains("song.voice"));
    }

    #[test]
    fn relative_health_path_is_rejected() {
        let err = Config::from_toml("[server.health]\npath = \"health\"\n[gemini]\napi_key = \"k\"\n").unwrap_err();
        assert!(err.to_string().contains("server.health.path"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::from_toml("[gemini]\napi_key = \"k\"\nregion = \"us\"\n").unwrap_err();
        assert!(err.to_string().contains("failed to parse config"));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[gemini]\napi_key = \"from-file\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.gemini.api_key.expose_secret(), "from-file");
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = Config::load(Path::new("/nonexistent/bliss.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/bliss.toml"));
    }
}
