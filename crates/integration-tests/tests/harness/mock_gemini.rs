//! Mock Gemini backend for integration tests
//!
//! Serves `POST /v1beta/models/{model}:generateContent`. Requests asking for
//! the `AUDIO` modality get inline PCM, everything else gets a JSON text part.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

/// Eight bytes of 16-bit PCM: samples 0, 1, 2, 3
pub const PCM_BASE64: &str = "AAABAAIAAwA=";

/// How the mock answers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Succeed,
    /// Every request gets a 503 with a Gemini error body
    Fail,
    /// Speech requests come back without inline audio
    NoMedia,
}

pub struct MockGemini {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    message: String,
    text_count: AtomicU32,
    speech_count: AtomicU32,
    last_request: Mutex<Option<(String, Value)>>,
}

impl MockGemini {
    pub async fn start() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Succeed, "Happy birthday from the mock!").await
    }

    pub async fn start_with_message(message: &str) -> anyhow::Result<Self> {
        Self::start_with(Behavior::Succeed, message).await
    }

    pub async fn start_failing() -> anyhow::Result<Self> {
        Self::start_with(Behavior::Fail, "").await
    }

    pub async fn start_without_media() -> anyhow::Result<Self> {
        Self::start_with(Behavior::NoMedia, "").await
    }

    async fn start_with(behavior: Behavior, message: &str) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            message: message.to_owned(),
            text_count: AtomicU32::new(0),
            speech_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
        });

        let app = Router::new()
            .route("/v1beta/models/{action}", routing::post(handle_generate))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL to put in `gemini.base_url`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1beta", self.addr)
    }

    pub fn text_count(&self) -> u32 {
        self.state.text_count.load(Ordering::Relaxed)
    }

    pub fn speech_count(&self) -> u32 {
        self.state.speech_count.load(Ordering::Relaxed)
    }

    /// Path action and body of the most recent request
    pub fn last_request(&self) -> Option<(String, Value)> {
        self.state.last_request.lock().unwrap().clone()
    }
}

impl Drop for MockGemini {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_generate(
    State(state): State<Arc<MockState>>,
    Path(action): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !action.ends_with(":generateContent") {
        return StatusCode::NOT_FOUND.into_response();
    }

    let is_speech = body.pointer("/generationConfig/responseModalities").is_some();
    if is_speech {
        state.speech_count.fetch_add(1, Ordering::Relaxed);
    } else {
        state.text_count.fetch_add(1, Ordering::Relaxed);
    }
    *state.last_request.lock().unwrap() = Some((action, body));

    match (state.behavior, is_speech) {
        (Behavior::Fail, _) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}
            })),
        )
            .into_response(),
        (Behavior::NoMedia, true) => Json(json!({
            "candidates": [{"content": {"role": "model", "parts": []}, "finishReason": "OTHER"}]
        }))
        .into_response(),
        (_, true) => Json(json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"inlineData": {"mimeType": "audio/L16;codec=pcm;rate=24000", "data": PCM_BASE64}}]
                },
                "finishReason": "STOP"
            }]
        }))
        .into_response(),
        (_, false) => {
            let text = json!({ "message": state.message }).to_string();
            Json(json!({
                "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}, "finishReason": "STOP"}],
                "usageMetadata": {"promptTokenCount": 42, "candidatesTokenCount": 17, "totalTokenCount": 59}
            }))
            .into_response()
        }
    }
}
