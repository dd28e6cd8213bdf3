//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use bliss_config::{
    Config, CorsConfig, GeminiConfig, HealthConfig, MessageConfig, ServerConfig, SongConfig, TelemetryConfig,
};

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Minimal config pointed at a mock Gemini base URL
    pub fn new(gemini_base_url: &str) -> Self {
        let mut gemini = GeminiConfig::new("test-key");
        gemini.base_url = Some(gemini_base_url.parse().expect("valid URL"));
        gemini.timeout_seconds = 5;

        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                gemini,
                message: MessageConfig::default(),
                song: SongConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    pub fn with_voice(mut self, voice: &str) -> Self {
        voice.clone_into(&mut self.config.song.voice);
        self
    }

    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    pub fn build(self) -> Config {
        self.config.validate().expect("test config must be valid");
        self.config
    }
}
