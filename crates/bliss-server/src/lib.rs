//! HTTP server exposing the card actions

mod cors;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bliss_actions::Actions;
use bliss_config::Config;
use bliss_gemini::GeminiClient;
use bliss_llm::{GoogleLanguageModel, MessageWorkflow};
use bliss_tts::{GoogleSpeechModel, SongWorkflow};
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the Gemini HTTP client cannot be built
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let actions = Arc::new(build_actions(config)?);

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(|| async { "ok" }));
        }

        app = app.merge(bliss_actions::endpoint_router().with_state(actions));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests until `shutdown` is cancelled
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Wire both workflows to one shared Gemini client
fn build_actions(config: &Config) -> anyhow::Result<Actions> {
    let client = GeminiClient::new(
        config.gemini.api_key.clone(),
        config.gemini.base_url.as_ref(),
        config.gemini.timeout(),
    )?;

    tracing::debug!(
        base_url = client.base_url(),
        message_model = %config.message.model,
        song_model = %config.song.model,
        voice = %config.song.voice,
        "Gemini workflows configured"
    );

    let messages = MessageWorkflow::new(Arc::new(GoogleLanguageModel::new(client.clone(), &config.message.model)));
    let songs = SongWorkflow::new(
        Arc::new(GoogleSpeechModel::new(client)),
        &config.song.model,
        &config.song.voice,
    );

    Ok(Actions::new(messages, songs))
}
