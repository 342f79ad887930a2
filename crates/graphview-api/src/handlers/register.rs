//! User self-registration.

use axum::extract::State;
use axum::extract::rejection::FormRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use tracing::debug;

use graphview_auth::{RegistrationError, RegistrationForm};
use graphview_core::error::AppError;

use crate::dto::FieldErrorsResponse;
use crate::error::ApiError;
use crate::extractors::CurrentSession;
use crate::state::AppState;

/// POST /api/register
///
/// `201` with no body on success, `400 {"error": {field: message}}` listing
/// every violated field otherwise. A body that is not url-encoded counts as
/// an empty form.
pub async fn register(
    State(state): State<AppState>,
    CurrentSession(session): CurrentSession,
    form: Result<Form<RegistrationForm>, FormRejection>,
) -> Result<Response, ApiError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(FormRejection::InvalidFormContentType(_)) => RegistrationForm::default(),
        Err(rejection) => return Err(AppError::validation(rejection.body_text()).into()),
    };

    match state.registration.register(form, session).await {
        Ok(_) => Ok(StatusCode::CREATED.into_response()),
        Err(RegistrationError::Invalid(errors)) => {
            debug!(session_id = %session, fields = errors.len(), "Registration rejected");
            Ok((StatusCode::BAD_REQUEST, Json(FieldErrorsResponse::from(errors))).into_response())
        }
        Err(RegistrationError::Internal(e)) => Err(e.into()),
    }
}
