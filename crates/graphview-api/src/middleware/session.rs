//! Session cookie middleware.
//!
//! Every request is bound to a [`SessionId`]. The id comes from the session
//! cookie when it carries a valid one; otherwise a new id is minted and sent
//! back with `Set-Cookie`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use graphview_core::types::SessionId;

use crate::state::AppState;

/// Resolves or mints the session id and stores it in request extensions.
pub async fn session_cookie(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let cookie_name = state.config.session.cookie_name.as_str();
    let existing = jar
        .get(cookie_name)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let (session, minted) = match existing {
        Some(session) => (session, false),
        None => {
            let session = SessionId::new();
            debug!(session_id = %session, "Starting new session");
            (session, true)
        }
    };

    request.extensions_mut().insert(session);
    let response = next.run(request).await;

    if !minted {
        return response;
    }

    let cookie = Cookie::build((cookie_name.to_owned(), session.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);
    (jar.add(cookie), response).into_response()
}
