//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Session configuration.
    pub session: SessionConfig,
    /// Login credential configuration.
    pub auth: AuthConfig,
    /// Outbound webhook configuration.
    #[serde(default)]
    pub webhook: WebhookConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Secret used to derive the cookie signing key.
    pub secret: String,
    /// Session lifetime in minutes.
    #[serde(default = "default_session_ttl")]
    pub ttl_minutes: i64,
}

fn default_session_ttl() -> i64 {
    480 // 8 hours
}

/// Login credential configuration.
///
/// A single configured username/password pair. This is a placeholder auth
/// scheme: no hashing, no lockout.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Operator username.
    pub username: String,
    /// Operator password.
    pub password: String,
}

/// Outbound webhook configuration.
///
/// All fields are optional at load time; report routes fail with a
/// descriptive configuration error when a required value is absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WebhookConfig {
    /// URL of the report-run webhook.
    pub run_report_url: Option<String>,
    /// URL of the account-metadata webhook.
    pub meta_accounts_url: Option<String>,
    /// Shared secret sent as the `x-aliada-key` header.
    pub shared_key: Option<String>,
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("ALIADA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(default_host(), "0.0.0.0");
        assert_eq!(default_port(), 3000);
        assert_eq!(default_max_connections(), 10);
        assert_eq!(default_min_connections(), 1);
        assert_eq!(default_session_ttl(), 480);
    }

    #[test]
    fn test_load_from_env() {
        temp_env::with_vars(
            [
                ("ALIADA__DATABASE__URL", Some("postgres://localhost/aliada")),
                ("ALIADA__SESSION__SECRET", Some("test-secret")),
                ("ALIADA__AUTH__USERNAME", Some("admin")),
                ("ALIADA__AUTH__PASSWORD", Some("admin123")),
                ("ALIADA__SERVER__PORT", Some("8099")),
                (
                    "ALIADA__WEBHOOK__RUN_REPORT_URL",
                    Some("https://n8n.example.com/webhook/qbo-report/run"),
                ),
            ],
            || {
                let config = AppConfig::load().expect("config should load");
                assert_eq!(config.database.url, "postgres://localhost/aliada");
                assert_eq!(config.server.port, 8099);
                assert_eq!(config.session.secret, "test-secret");
                assert_eq!(config.auth.username, "admin");
                assert_eq!(
                    config.webhook.run_report_url.as_deref(),
                    Some("https://n8n.example.com/webhook/qbo-report/run")
                );
                assert!(config.webhook.shared_key.is_none());
            },
        );
    }
}
