use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3001";
const DEFAULT_PUBLIC_URL: &str = "http://localhost:3001";

/// Everything the service reads from the environment, resolved once at boot.
/// Only the database URL is mandatory; mail stays disabled until SMTP_HOST
/// is set.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    /// Base URL this deployment is reachable at; used in email links and to
    /// resolve media URLs back to files on disk.
    pub public_url: String,
    pub admin_token: Option<String>,
    pub media_root: PathBuf,
    pub locations_file: PathBuf,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub username: String,
    pub password: String,
    pub from: String,
    /// Recipient of the back-office notifications (new submissions).
    pub admin_email: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            bind_addr: env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
                .parse()
                .expect("BIND_ADDR must be a valid socket address"),
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            admin_token: env::var("ADMIN_TOKEN").ok().filter(|t| !t.is_empty()),
            media_root: env::var("MEDIA_ROOT")
                .unwrap_or_else(|_| "media".to_string())
                .into(),
            locations_file: env::var("LOCATIONS_FILE")
                .unwrap_or_else(|_| "data/locations.json".to_string())
                .into(),
            smtp: SmtpConfig::from_env(),
        }
    }
}

impl SmtpConfig {
    fn from_env() -> Self {
        Self {
            host: env::var("SMTP_HOST").ok().filter(|h| !h.is_empty()),
            username: env::var("SMTP_USERNAME").unwrap_or_default(),
            password: env::var("SMTP_PASSWORD").unwrap_or_default(),
            from: env::var("SMTP_FROM")
                .unwrap_or_else(|_| "Bureau de Turismo <no-reply@localhost>".to_string()),
            admin_email: env::var("ADMIN_EMAIL")
                .unwrap_or_else(|_| "admin@localhost".to_string()),
        }
    }
}
