//! Session diagram retrieval.
//!
//! Reads the session's stored diagram, converts it through the dispatcher,
//! and answers `200 {"graph_json", "name"}`. Every failure answers a bare
//! `400`; the reason is only logged.

use std::time::Duration;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{debug, error};

use graphview_module::{ConversionOutcome, ConverterDispatcher};

use crate::dto::SessionDiagramResponse;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// GET /api/session-diagram
pub async fn get_session_diagram(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> Response {
    let Some(diagram) = state.sessions.get(session).await else {
        debug!(session_id = %session, "No diagram stored in session");
        return StatusCode::BAD_REQUEST.into_response();
    };

    let Some((content, format_type)) = diagram.convertible() else {
        debug!(session_id = %session, "Session diagram has no content or type");
        return StatusCode::BAD_REQUEST.into_response();
    };

    let timeout = Duration::from_secs(state.config.modules.invocation_timeout_seconds);
    let outcome = convert_bounded(
        state.dispatcher.clone(),
        format_type.to_owned(),
        content.to_owned(),
        timeout,
    )
    .await;

    match outcome {
        Some(ConversionOutcome::Success { json }) => Json(SessionDiagramResponse {
            graph_json: json,
            name: diagram.filename.clone(),
        })
        .into_response(),
        Some(ConversionOutcome::Failure { kind }) => {
            debug!(
                session_id = %session,
                format_type,
                failure = %kind,
                "Session diagram conversion failed"
            );
            StatusCode::BAD_REQUEST.into_response()
        }
        None => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Runs the synchronous dispatch on the blocking pool, bounded by `timeout`.
///
/// Returns `None` when the dispatch did not finish in time or its task died.
/// A timed-out module keeps its blocking thread until it returns.
async fn convert_bounded(
    dispatcher: ConverterDispatcher,
    format_type: String,
    content: String,
    timeout: Duration,
) -> Option<ConversionOutcome> {
    let task = tokio::task::spawn_blocking({
        let format_type = format_type.clone();
        move || dispatcher.dispatch(&format_type, &content)
    });

    match tokio::time::timeout(timeout, task).await {
        Ok(Ok(outcome)) => Some(outcome),
        Ok(Err(e)) => {
            error!(format_type = %format_type, error = %e, "Conversion task failed");
            None
        }
        Err(_) => {
            error!(
                format_type = %format_type,
                timeout_seconds = timeout.as_secs(),
                "Conversion timed out"
            );
            None
        }
    }
}
