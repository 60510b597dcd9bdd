use std::{env, path::PathBuf};

use thiserror::Error;

/// Base URL used when `API_BASE_URL` is not set in a local environment.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Location of the persisted session state when `ADMIN_SESSION_FILE` is not set.
pub const DEFAULT_SESSION_FILE: &str = ".flowershop/local_storage.json";

/// AppConfig
///
/// Holds the client's configuration. It is built once at startup and handed to
/// the endpoint registry, so every URL the client produces is derived from the
/// same base.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Fully qualified API root, e.g. `http://localhost:8080/api`. Never empty.
    pub base_url: String,
    // Runtime environment marker. Selects log format and fail-fast behaviour.
    pub env: Env,
    // File standing in for browser local storage.
    pub session_file: PathBuf,
}

/// Env
///
/// Defines the runtime context.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Env {
    Local,
    Production,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base URL must not be empty")]
    EmptyBaseUrl,
}

impl Default for AppConfig {
    /// default
    ///
    /// Local configuration pointing at the default backend. Used by tests and
    /// by callers that do not read the environment.
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            env: Env::Local,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl AppConfig {
    /// new
    ///
    /// Explicit construction with a caller-chosen base URL. The URL is kept
    /// verbatim; only an empty (or whitespace-only) value is rejected.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ConfigError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }

        Ok(Self {
            base_url,
            ..Self::default()
        })
    }

    /// load
    ///
    /// Reads the configuration from the process environment.
    ///
    /// # Panics
    /// Panics in `Env::Production` when `API_BASE_URL` is missing or empty.
    /// Locally the default base URL is used instead.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let configured = env::var("API_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        let base_url = match env {
            Env::Production => {
                configured.expect("FATAL: API_BASE_URL must be set in production.")
            }
            Env::Local => configured.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let session_file = env::var("ADMIN_SESSION_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE));

        Self {
            base_url,
            env,
            session_file,
        }
    }
}
