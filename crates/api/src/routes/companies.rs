//! Company registry administration routes.

use axum::{
    Form, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::post,
};
use serde::Deserialize;
use tracing::{error, info};

use aliada_core::company::CompanyError;

use crate::{AppState, middleware::CurrentUser, views};

/// Creates the company admin routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/admin/companies", post(upsert_company))
}

/// Company upsert form submission.
#[derive(Debug, Deserialize)]
pub struct CompanyForm {
    /// Company identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// External tenant identifier.
    #[serde(rename = "realmId", default)]
    pub realm_id: String,
}

/// POST /admin/companies - creates or updates a company.
///
/// Redirects home on success; re-renders the form with the error on
/// invalid input.
async fn upsert_company(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<CompanyForm>,
) -> Response {
    match state
        .companies
        .upsert(&form.id, &form.name, &form.realm_id)
        .await
    {
        Ok(company) => {
            info!(company_id = %company.id, "Company upserted");
            Redirect::to("/").into_response()
        }
        Err(e @ CompanyError::MissingFields) => {
            let companies = state.companies.list_active().await.unwrap_or_default();
            (
                StatusCode::BAD_REQUEST,
                Html(views::form_page(&user.username, &companies, Some(&e.to_string()))),
            )
                .into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to upsert company");
            let companies = state.companies.list_active().await.unwrap_or_default();
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(views::form_page(
                    &user.username,
                    &companies,
                    Some("Failed to save company."),
                )),
            )
                .into_response()
        }
    }
}
