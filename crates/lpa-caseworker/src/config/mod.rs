use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use url::Url;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the caseworker frontend.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub sirius: SiriusConfig,
    pub cookies: CookieConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .unwrap_or_else(|_| "8888".to_string())
            .parse::<u16>()
            .map_err(|_| ConfigError::InvalidPort)?;
        let prefix = normalize_prefix(&env::var("PREFIX").unwrap_or_default());

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = LogFormat::parse(
            &env::var("APP_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string()),
        )?;

        let raw_url = env::var("SIRIUS_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
        let base_url = Url::parse(raw_url.trim()).map_err(|source| ConfigError::InvalidSiriusUrl {
            value: raw_url.clone(),
            source,
        })?;
        let timeout_secs = env::var("SIRIUS_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or(ConfigError::InvalidTimeout)?;

        let secure = env::var("INSECURE_COOKIES").map_or(true, |value| value.trim() != "1");

        Ok(Self {
            environment,
            server: ServerConfig { host, port, prefix },
            telemetry: TelemetryConfig { log_level, format },
            sirius: SiriusConfig {
                base_url,
                timeout: Duration::from_secs(timeout_secs),
            },
            cookies: CookieConfig { secure },
        })
    }
}

fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Path prefix the frontend is mounted under, without a trailing slash.
    pub prefix: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        if self.host.eq_ignore_ascii_case("localhost") {
            return Ok(SocketAddr::new(IpAddr::from([127, 0, 0, 1]), self.port));
        }

        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|source| ConfigError::InvalidHost { source })?;

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::InvalidLogFormat(other.to_string())),
        }
    }
}

/// Location of the backend case API.
#[derive(Debug, Clone)]
pub struct SiriusConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone, Copy)]
pub struct CookieConfig {
    pub secure: bool,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidPort,
    InvalidHost {
        source: std::net::AddrParseError,
    },
    InvalidSiriusUrl {
        value: String,
        source: url::ParseError,
    },
    InvalidTimeout,
    InvalidLogFormat(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidPort => write!(f, "APP_PORT must be a valid u16"),
            ConfigError::InvalidHost { .. } => {
                write!(f, "APP_HOST must parse to an IPv4 or IPv6 address")
            }
            ConfigError::InvalidSiriusUrl { value, .. } => {
                write!(f, "SIRIUS_URL '{value}' is not an absolute URL")
            }
            ConfigError::InvalidTimeout => {
                write!(f, "SIRIUS_TIMEOUT_SECS must be a positive number of seconds")
            }
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT '{value}' must be one of compact, json")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidHost { source } => Some(source),
            ConfigError::InvalidSiriusUrl { source, .. } => Some(source),
            ConfigError::InvalidPort
            | ConfigError::InvalidTimeout
            | ConfigError::InvalidLogFormat(_) => None,
        }
    }
}
