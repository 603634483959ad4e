//! Server configuration

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// Every item can be overridden through the environment:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/digishop/admin | store and log directory |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | ADMIN_EMAIL | super@digishop.local | admin identity |
/// | ADMIN_PASSWORD | Admin2025 | admin password |
/// | SESSION_SECRET | dev-secret (dev only) | session signing secret |
/// | SESSION_TTL_MINUTES | 1440 | session token lifetime |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | tracing level |
///
/// The defaults for the admin identity and the signing secret are insecure
/// on purpose: they exist so a development checkout runs with zero setup.
/// With `ENVIRONMENT=production` the secret must be provided explicitly.
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/digishop HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the order store and logs
    pub work_dir: String,
    /// HTTP API listen port
    pub http_port: u16,
    /// Admin identity the credential check compares against
    pub admin_email: String,
    /// Admin password
    pub admin_password: String,
    /// JWT session configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level for the tracing subscriber
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "/var/lib/digishop/admin".to_string(),
            http_port: 3000,
            admin_email: "super@digishop.local".to_string(),
            admin_password: "Admin2025".to_string(),
            jwt: JwtConfig::default(),
            environment: "development".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let environment =
            std::env::var("ENVIRONMENT").unwrap_or_else(|_| defaults.environment.clone());

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            admin_email: std::env::var("ADMIN_EMAIL").unwrap_or(defaults.admin_email),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            jwt: JwtConfig {
                secret: load_session_secret(&environment),
                expiration_minutes: std::env::var("SESSION_TTL_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.jwt.expiration_minutes),
                ..defaults.jwt
            },
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            environment,
        }
    }

    /// Override work directory and port, for tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::default();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Whether the server runs in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Resolve the session signing secret
///
/// Outside production a missing secret falls back to the well-known
/// development value (with a warning). In production an absent or short
/// secret aborts startup rather than signing sessions with a guessable key.
fn load_session_secret(environment: &str) -> String {
    match std::env::var("SESSION_SECRET") {
        Ok(secret) if environment != "production" => secret,
        Ok(secret) => {
            if secret.len() < 32 {
                panic!("FATAL: SESSION_SECRET must be at least 32 characters in production");
            }
            secret
        }
        Err(_) => {
            if environment == "production" {
                panic!("FATAL: SESSION_SECRET must be set in production");
            }
            tracing::warn!("SESSION_SECRET not set, using the development default");
            "dev-secret".to_string()
        }
    }
}
