//! Home page: the report form.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use tracing::error;

use crate::{AppState, middleware::CurrentUser, views};

/// Creates the home route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// GET / - renders the company list and report-type enumeration.
async fn home(State(state): State<AppState>, user: CurrentUser) -> Response {
    match state.companies.list_active().await {
        Ok(companies) => Html(views::form_page(&user.username, &companies, None)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to list companies");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::form_page(&user.username, &[], Some("Failed to load companies."))),
            )
                .into_response()
        }
    }
}
