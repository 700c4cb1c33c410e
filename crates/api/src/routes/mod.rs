//! API route definitions.

use axum::{Router, middleware};

use crate::{AppState, middleware::session::session_gate};

pub mod auth;
pub mod companies;
pub mod health;
pub mod home;
pub mod reports;

/// Creates the full router: public routes plus session-gated routes.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require a live session
    let protected_routes = Router::new()
        .merge(home::routes())
        .merge(companies::routes())
        .merge(reports::routes())
        .layer(middleware::from_fn_with_state(state.clone(), session_gate));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
