//! Report API routes: the proxy to the external report webhook.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use aliada_core::reports::{RunReportInput, XLSX_CONTENT_TYPE, validate_run_report};
use aliada_shared::AppError;

use crate::{AppState, middleware::CurrentUser};

/// Creates the report API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/run-report", post(run_report))
        .route("/api/meta/accounts", get(meta_accounts))
}

/// Renders an [`AppError`] as the JSON error shape the browser expects.
fn api_error(err: &AppError) -> Response {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

/// POST /api/run-report - validates the request, forwards it to the
/// webhook, and relays the spreadsheet back as a download.
async fn run_report(
    State(state): State<AppState>,
    _user: CurrentUser,
    Json(input): Json<RunReportInput>,
) -> Response {
    // Validation rejects before anything is sent upstream
    let request = match validate_run_report(&input) {
        Ok(request) => request,
        Err(e) => return api_error(&AppError::Validation(e.to_string())),
    };

    // The realm must belong to a known, active company
    match state.companies.find_active_by_realm(&request.realm_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return api_error(&AppError::Validation("Invalid company.".into())),
        Err(e) => {
            error!(error = %e, "Failed to resolve company");
            return api_error(&AppError::Database(e.to_string()));
        }
    }

    let body = match state.webhook.run_report(&request.to_payload()).await {
        Ok(body) => body,
        Err(e) => {
            error!(error = %e, report_type = %request.report_type, "Report run failed");
            return api_error(&e);
        }
    };

    info!(
        report_type = %request.report_type,
        realm_id = %request.realm_id,
        bytes = body.len(),
        "Report generated"
    );

    let disposition = format!("attachment; filename=\"{}\"", request.filename());
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

/// Query parameters for the account metadata proxy.
#[derive(Debug, Deserialize)]
pub struct AccountsQuery {
    /// External tenant identifier.
    #[serde(rename = "realmId")]
    pub realm_id: Option<String>,
}

/// GET /api/meta/accounts - proxies account metadata for a realm.
async fn meta_accounts(
    State(state): State<AppState>,
    _user: CurrentUser,
    Query(query): Query<AccountsQuery>,
) -> Response {
    let realm_id = match query.realm_id.as_deref().map(str::trim) {
        Some(realm) if !realm.is_empty() => realm.to_string(),
        _ => return api_error(&AppError::Validation("Missing realmId.".into())),
    };

    match state.webhook.fetch_accounts(&realm_id).await {
        Ok(accounts) => Json(accounts).into_response(),
        Err(e) => {
            error!(error = %e, realm_id = %realm_id, "Account metadata fetch failed");
            api_error(&e)
        }
    }
}
