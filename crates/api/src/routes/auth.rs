//! Login and logout routes.

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Deserialize;
use tracing::info;

use crate::AppState;
use crate::sessions::SESSION_COOKIE;
use crate::views;

/// Creates the auth routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_form).post(login))
        .route("/logout", post(logout))
}

/// Login form submission.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    /// Submitted username.
    pub username: String,
    /// Submitted password.
    pub password: String,
}

/// GET /login - renders the login view.
async fn login_form() -> Html<String> {
    Html(views::login_page(None))
}

/// POST /login - checks the credential pair and establishes a session.
///
/// A mismatch re-renders the login view with a generic message; no detail
/// about which field was wrong is leaked.
async fn login(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Form(form): Form<LoginForm>,
) -> Response {
    if state.verifier.verify(&form.username, &form.password) {
        let session_id = state.sessions.create(&form.username);
        let cookie = Cookie::build((SESSION_COOKIE, session_id))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build();

        info!(username = %form.username, "Login successful");
        (jar.add(cookie), Redirect::to("/")).into_response()
    } else {
        info!(username = %form.username, "Failed login attempt");
        (
            StatusCode::UNAUTHORIZED,
            Html(views::login_page(Some("Incorrect credentials."))),
        )
            .into_response()
    }
}

/// POST /logout - destroys the session and clears the cookie.
async fn logout(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.remove(cookie.value());
    }

    let removal = Cookie::build((SESSION_COOKIE, "")).path("/").build();
    (jar.remove(removal), Redirect::to("/login")).into_response()
}
