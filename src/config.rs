//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the gateway
//! dials its backends. All defaults are enumerated here as data; nothing
//! falls back per-request.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:7070`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DEFAULT_OFFSET` - List offset used when the query string omits `offset` (default: 0)
//! - `DEFAULT_LIMIT` - List limit used when the query string omits `limit` (default: 10)
//! - `AUTHOR_SERVICE_HOST` / `AUTHOR_SERVICE_PORT` - Author backend (default: `localhost:9000`)
//! - `ARTICLE_SERVICE_HOST` / `ARTICLE_SERVICE_PORT` - Article backend (default: `localhost:9001`)
//! - `AUTHORIZATION_SERVICE_HOST` / `AUTHORIZATION_SERVICE_PORT` - Authorization backend (default: `localhost:9002`)
//!
//! All backends must be reachable at startup; the gateway refuses to serve
//! traffic otherwise (see [`crate::infrastructure::grpc::GrpcBackends::open`]).

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::str::FromStr;

/// Address of a single backend gRPC service, supplied once at startup.
#[derive(Debug, Clone)]
pub struct BackendEndpoint {
    /// Stable service name used in logs and error context.
    pub service: &'static str,
    pub host: String,
    pub port: u16,
}

impl BackendEndpoint {
    /// The URI the gRPC channel dials. Plaintext; the backends are internal.
    pub fn uri(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for BackendEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}:{})", self.service, self.host, self.port)
    }
}

/// Gateway configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    /// List offset applied when a request omits the `offset` query parameter.
    pub default_offset: i64,
    /// List limit applied when a request omits the `limit` query parameter.
    pub default_limit: i64,

    pub author_backend: BackendEndpoint,
    pub article_backend: BackendEndpoint,
    pub authorization_backend: BackendEndpoint,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but does not parse.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:7070".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let default_offset = parse_env("DEFAULT_OFFSET", 0i64)?;
        let default_limit = parse_env("DEFAULT_LIMIT", 10i64)?;

        let author_backend = load_endpoint("author", "AUTHOR_SERVICE", 9000)?;
        let article_backend = load_endpoint("article", "ARTICLE_SERVICE", 9001)?;
        let authorization_backend = load_endpoint("authorization", "AUTHORIZATION_SERVICE", 9002)?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            default_offset,
            default_limit,
            author_backend,
            article_backend,
            authorization_backend,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    /// - `DEFAULT_OFFSET` is negative or `DEFAULT_LIMIT` is not positive
    /// - any backend port is 0
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.default_offset < 0 {
            anyhow::bail!(
                "DEFAULT_OFFSET must be non-negative, got {}",
                self.default_offset
            );
        }

        if self.default_limit < 1 {
            anyhow::bail!("DEFAULT_LIMIT must be positive, got {}", self.default_limit);
        }

        for endpoint in [
            &self.author_backend,
            &self.article_backend,
            &self.authorization_backend,
        ] {
            if endpoint.port == 0 {
                anyhow::bail!("{} backend port must not be 0", endpoint.service);
            }
            if endpoint.host.is_empty() {
                anyhow::bail!("{} backend host must not be empty", endpoint.service);
            }
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Author backend: {}", self.author_backend);
        tracing::info!("  Article backend: {}", self.article_backend);
        tracing::info!("  Authorization backend: {}", self.authorization_backend);
        tracing::info!(
            "  List defaults: offset={} limit={}",
            self.default_offset,
            self.default_limit
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Parses an optional environment variable, failing loudly on malformed input
/// rather than silently substituting the default.
fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be a number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

fn load_endpoint(service: &'static str, prefix: &str, default_port: u16) -> Result<BackendEndpoint> {
    let host = env::var(format!("{prefix}_HOST")).unwrap_or_else(|_| "localhost".to_string());
    let port = parse_env(&format!("{prefix}_PORT"), default_port)?;

    Ok(BackendEndpoint {
        service,
        host,
        port,
    })
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
