//! Session gate for protected routes.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::SignedCookieJar;

use crate::AppState;
use crate::sessions::SESSION_COOKIE;

/// Session-gate middleware.
///
/// Reads the signed session cookie, resolves it against the server-side
/// store, and either stores the authenticated identity in request
/// extensions or redirects to the login view.
pub async fn session_gate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let jar = SignedCookieJar::from_headers(request.headers(), state.cookie_key.clone());

    let session = jar
        .get(SESSION_COOKIE)
        .and_then(|cookie| state.sessions.get(cookie.value()));

    match session {
        Some(session) => {
            request.extensions_mut().insert(CurrentUser {
                username: session.username,
            });
            next.run(request).await
        }
        None => Redirect::to("/login").into_response(),
    }
}

/// Extractor for the authenticated session identity.
///
/// Only populated on routes behind [`session_gate`].
#[derive(Debug, Clone)]
pub struct CurrentUser {
    /// Username established at login.
    pub username: String,
}

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Self>()
            .cloned()
            .ok_or_else(|| Redirect::to("/login"))
    }
}
