//! Diagram upload into the session.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use axum::response::{IntoResponse, Response};
use tracing::info;

use graphview_core::error::AppError;
use graphview_entity::SessionDiagram;
use graphview_module::RAW_FORMAT;

use crate::dto::FieldErrorsResponse;
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

const FILE_FIELD: &str = "file";
const TYPE_FIELD: &str = "type";

/// POST /api/diagram/upload
///
/// Multipart form with a `file` part and a `type` part. Replaces the
/// session's diagram.
pub async fn upload_diagram(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    mut multipart: Multipart,
) -> Result<Response, ApiError> {
    let mut content = None;
    let mut filename = None;
    let mut format_type = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        match field.name() {
            Some(FILE_FIELD) => {
                filename = field.file_name().map(str::to_owned);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read file: {e}")))?;
                content = Some(bytes);
            }
            Some(TYPE_FIELD) => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Failed to read type: {e}")))?;
                format_type = Some(value.trim().to_owned());
            }
            _ => {}
        }
    }

    let mut errors = FieldErrorsResponse::default();

    let content = match content.map(|bytes| String::from_utf8(bytes.to_vec())) {
        Some(Ok(text)) if !text.trim().is_empty() => Some(text),
        Some(Ok(_)) | None => {
            errors
                .error
                .insert(FILE_FIELD.to_string(), "Please choose a diagram file.".to_string());
            None
        }
        Some(Err(_)) => {
            errors
                .error
                .insert(FILE_FIELD.to_string(), "Diagram file must be UTF-8 text.".to_string());
            None
        }
    };

    let format_type = match format_type.filter(|t| !t.is_empty()) {
        Some(t) if t == RAW_FORMAT || state.registry.contains(&t) => Some(t),
        Some(_) => {
            errors
                .error
                .insert(TYPE_FIELD.to_string(), "Unknown diagram type.".to_string());
            None
        }
        None => {
            errors
                .error
                .insert(TYPE_FIELD.to_string(), "Please choose a diagram type.".to_string());
            None
        }
    };

    let (Some(content), Some(format_type)) = (content, format_type) else {
        return Ok((StatusCode::BAD_REQUEST, Json(errors)).into_response());
    };

    info!(
        session_id = %session,
        format_type = %format_type,
        filename = filename.as_deref().unwrap_or(""),
        bytes = content.len(),
        "Diagram uploaded"
    );
    state
        .sessions
        .put(session, SessionDiagram::new(content, format_type, filename))
        .await;

    Ok(StatusCode::NO_CONTENT.into_response())
}
