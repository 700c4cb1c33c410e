//! Aliada Report Gateway
//!
//! Main entry point for the Aliada backend service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aliada_api::sessions::{SessionStore, derive_cookie_key};
use aliada_api::webhook::WebhookClient;
use aliada_api::{AppState, create_router};
use aliada_core::auth::StaticCredentials;
use aliada_db::{CompanyRepository, connect};
use aliada_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aliada=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    if config.webhook.run_report_url.is_none() {
        info!("Report webhook URL not configured; report runs will fail with a configuration error");
    }

    // Create application state
    let state = AppState {
        companies: Arc::new(CompanyRepository::new(db)),
        verifier: Arc::new(StaticCredentials::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        )),
        sessions: Arc::new(SessionStore::new(config.session.ttl_minutes)),
        webhook: Arc::new(WebhookClient::new(config.webhook.clone())),
        cookie_key: derive_cookie_key(&config.session.secret),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
