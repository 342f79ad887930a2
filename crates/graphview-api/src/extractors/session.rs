//! `CurrentSession` extractor: the session id assigned by the session cookie
//! middleware.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use graphview_core::error::AppError;
use graphview_core::types::SessionId;

use crate::error::ApiError;

/// Browser session of the current request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentSession(pub SessionId);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionId>()
            .copied()
            .map(Self)
            .ok_or_else(|| ApiError(AppError::session("Session middleware is not installed")))
    }
}
