//! Outbound webhook forwarder.
//!
//! Report generation is fully delegated to an externally hosted webhook;
//! this client assembles the request, attaches the shared-secret header,
//! and relays the response. No retries, no timeout policy: one awaited
//! request per report.

use bytes::Bytes;

use aliada_core::reports::WebhookPayload;
use aliada_shared::AppError;
use aliada_shared::config::WebhookConfig;

/// Shared-secret header sent on every upstream call.
pub const SHARED_KEY_HEADER: &str = "x-aliada-key";

/// HTTP client for the report-generation webhook.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    http: reqwest::Client,
    config: WebhookConfig,
}

impl WebhookClient {
    /// Creates a client for the configured endpoints.
    #[must_use]
    pub fn new(config: WebhookConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn shared_key(&self) -> Result<&str, AppError> {
        self.config.shared_key.as_deref().ok_or_else(|| {
            AppError::Configuration("Missing webhook shared key (ALIADA__WEBHOOK__SHARED_KEY).".into())
        })
    }

    /// Runs a report and returns the raw spreadsheet bytes.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when the endpoint URL or shared
    /// key is absent, and [`AppError::Upstream`] for non-success responses,
    /// carrying the upstream status code and body text.
    pub async fn run_report(&self, payload: &WebhookPayload) -> Result<Bytes, AppError> {
        let url = self.config.run_report_url.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Missing report webhook URL (ALIADA__WEBHOOK__RUN_REPORT_URL).".into(),
            )
        })?;
        let key = self.shared_key()?;

        let response = self
            .http
            .post(url)
            .header(SHARED_KEY_HEADER, key)
            .json(payload)
            .send()
            .await
            .map_err(transport_err)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response.bytes().await.map_err(transport_err)
    }

    /// Fetches account metadata for a realm from the metadata webhook.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`WebhookClient::run_report`].
    pub async fn fetch_accounts(&self, realm_id: &str) -> Result<serde_json::Value, AppError> {
        let url = self.config.meta_accounts_url.as_deref().ok_or_else(|| {
            AppError::Configuration(
                "Missing metadata webhook URL (ALIADA__WEBHOOK__META_ACCOUNTS_URL).".into(),
            )
        })?;
        let key = self.shared_key()?;

        let response = self
            .http
            .get(url)
            .query(&[("realmId", realm_id)])
            .header(SHARED_KEY_HEADER, key)
            .send()
            .await
            .map_err(transport_err)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(transport_err)
    }
}

fn transport_err(err: reqwest::Error) -> AppError {
    AppError::Internal(format!("Webhook request failed: {err}"))
}
