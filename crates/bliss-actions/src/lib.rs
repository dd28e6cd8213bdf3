//! Action layer between the card UI and the generation workflows
//!
//! Validates untrusted input, runs a workflow, and shapes the outcome into a
//! result the UI can render without further error handling.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod actions;
mod result;
mod validation;


use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Request, State};
use axum::http::header;
use axum::{Form, Json, Router, routing::post};
use serde::Deserialize;

pub use actions::Actions;
pub use result::{
    CHECK_FIELDS, FormActionResult, MESSAGE_FAILED, MESSAGE_GENERATED, NAME_REQUIRED, SONG_FAILED, SongActionResult,
    UNREADABLE_FORM, UNREADABLE_SONG_REQUEST,
};
pub use validation::{RawForm, Validation, validate_message_form};

/// Body of a song request
#[derive(Debug, Deserialize)]
pub struct SongRequest {
    #[serde(default)]
    pub name: String,
}

/// Create the endpoint router for both actions
pub fn endpoint_router() -> Router<Arc<Actions>> {
    Router::new()
        .route("/api/message", post(create_message))
        .route("/api/song", post(create_song))
}

/// Handle a message form, urlencoded or multipart
///
/// An unreadable body is answered with a failure result, never a rejection.
async fn create_message(State(actions): State<Arc<Actions>>, request: Request) -> Json<FormActionResult> {
    let form = match read_form(request).await {
        Ok(form) => form,
        Err(error) => {
            tracing::debug!(%error, "message form unreadable");
            return Json(FormActionResult::unreadable(error));
        }
    };

    tracing::debug!(fields = form.len(), "message action called");

    Json(actions.submit_message_request(&form).await)
}

/// Collect the text fields of a form body
///
/// File parts (the card photo) stay with the client and are skipped.
async fn read_form(request: Request) -> Result<RawForm, String> {
    let is_multipart = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"));

    if !is_multipart {
        let Form(form) = Form::<RawForm>::from_request(request, &())
            .await
            .map_err(|rejection| rejection.body_text())?;
        return Ok(form);
    }

    let mut multipart = Multipart::from_request(request, &())
        .await
        .map_err(|rejection| rejection.body_text())?;
    let mut form = RawForm::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        let value = field.text().await.map_err(|e| e.body_text())?;
        form.insert(name, value);
    }

    Ok(form)
}

/// Handle a song request
async fn create_song(
    State(actions): State<Arc<Actions>>,
    request: Result<Json<SongRequest>, JsonRejection>,
) -> Json<SongActionResult> {
    let Json(request) = match request {
        Ok(request) => request,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "song request unreadable");
            return Json(SongActionResult::Failed {
                error: format!("{UNREADABLE_SONG_REQUEST}: {}", rejection.body_text()),
            });
        }
    };

    tracing::debug!("song action called");

    Json(actions.submit_song_request(&request.name).await)
}
