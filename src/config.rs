//! Client configuration parsed from environment variables.

use std::path::PathBuf;

use crate::auth::bearer::RefreshMode;
use crate::demo::LatencyWindow;
use crate::error::ErrorCode;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DEMO_LATENCY_MIN_MS: u64 = 220;
pub const DEFAULT_DEMO_LATENCY_MAX_MS: u64 = 350;
pub const DEFAULT_STORE_PATH: &str = ".auditshield/session.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

impl ErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => "E_CONFIG_PARSE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for HttpTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Versioned API root, without a trailing slash (e.g. `http://host/api/v1`).
    pub api_base_url: String,
    pub timeouts: HttpTimeouts,
    pub refresh_mode: RefreshMode,
    pub demo_latency: LatencyWindow,
    pub store_path: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            timeouts: HttpTimeouts::default(),
            refresh_mode: RefreshMode::default(),
            demo_latency: LatencyWindow::default(),
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl ClientConfig {
    /// Build typed client config from environment variables.
    ///
    /// Optional:
    /// - `AUDITSHIELD_API_URL`: default `http://localhost:8000/api/v1`
    /// - `AUDITSHIELD_REQUEST_TIMEOUT_SECS`: default 30
    /// - `AUDITSHIELD_CONNECT_TIMEOUT_SECS`: default 10
    /// - `AUDITSHIELD_REFRESH_MODE`: `single_flight` (default) or `suppress`
    /// - `AUDITSHIELD_DEMO_LATENCY_MIN_MS` / `AUDITSHIELD_DEMO_LATENCY_MAX_MS`: default 220 / 350
    /// - `AUDITSHIELD_STORE_PATH`: default `.auditshield/session.json`
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown refresh mode or an inverted latency window.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_base_url = std::env::var("AUDITSHIELD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        let timeouts = HttpTimeouts {
            request_secs: env_parse("AUDITSHIELD_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse("AUDITSHIELD_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let refresh_mode = parse_refresh_mode(std::env::var("AUDITSHIELD_REFRESH_MODE").ok().as_deref())?;

        let min_ms = env_parse("AUDITSHIELD_DEMO_LATENCY_MIN_MS", DEFAULT_DEMO_LATENCY_MIN_MS);
        let max_ms = env_parse("AUDITSHIELD_DEMO_LATENCY_MAX_MS", DEFAULT_DEMO_LATENCY_MAX_MS);
        if min_ms > max_ms {
            return Err(ConfigError::Parse(format!("demo latency window is inverted ({min_ms}ms > {max_ms}ms)")));
        }

        let store_path = std::env::var("AUDITSHIELD_STORE_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_STORE_PATH), PathBuf::from);

        Ok(Self { api_base_url, timeouts, refresh_mode, demo_latency: LatencyWindow { min_ms, max_ms }, store_path })
    }
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<T>().ok())
        .unwrap_or(default)
}

fn parse_refresh_mode(raw: Option<&str>) -> Result<RefreshMode, ConfigError> {
    match raw.unwrap_or("single_flight") {
        "single_flight" => Ok(RefreshMode::SingleFlight),
        "suppress" => Ok(RefreshMode::Suppress),
        other => Err(ConfigError::Parse(format!(
            "unsupported refresh mode '{other}' (expected 'single_flight' or 'suppress')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
