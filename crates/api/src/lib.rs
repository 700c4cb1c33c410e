//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - Session-gated routes for the report form and the report-run API
//! - The server-side session store and session-gate middleware
//! - The outbound webhook forwarder

pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod views;
pub mod webhook;

use std::sync::Arc;

use axum::Router;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;
use tower_http::trace::TraceLayer;

use aliada_core::auth::CredentialVerifier;
use aliada_core::company::CompanyStore;
use sessions::SessionStore;
use webhook::WebhookClient;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Company registry.
    pub companies: Arc<dyn CompanyStore>,
    /// Login credential verifier.
    pub verifier: Arc<dyn CredentialVerifier>,
    /// Server-side session store.
    pub sessions: Arc<SessionStore>,
    /// Outbound webhook client.
    pub webhook: Arc<WebhookClient>,
    /// Key for signing the session cookie.
    pub cookie_key: Key,
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    routes::api_routes_with_state(state.clone())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
