//! Endpoint configuration parsed from environment variables.

pub const DEFAULT_PROTECTED_PATH: &str = "/protected";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is not set.
    #[error("missing env var: {var} not set")]
    MissingVar { var: String },
}

/// Transport timeouts in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
        }
    }
}

/// Where the login request goes and where success navigates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Server origin, no trailing slash (e.g. `http://localhost:3000`).
    pub base_url: String,
    /// Post-authentication destination path.
    pub protected_path: String,
    pub timeouts: Timeouts,
}

impl AppConfig {
    /// Config for the given origin with default path and timeouts.
    ///
    /// A trailing slash on the origin is trimmed so path concatenation
    /// stays canonical.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            protected_path: DEFAULT_PROTECTED_PATH.to_owned(),
            timeouts: Timeouts::default(),
        }
    }

    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `LOGIN_BASE_URL`: server origin, e.g. `http://localhost:3000`
    ///
    /// Optional:
    /// - `LOGIN_PROTECTED_PATH`: default `/protected`
    /// - `LOGIN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `LOGIN_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when `LOGIN_BASE_URL` is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = std::env::var("LOGIN_BASE_URL").map_err(|_| ConfigError::MissingVar {
            var: "LOGIN_BASE_URL".into(),
        })?;

        let mut config = Self::new(base_url);
        if let Ok(path) = std::env::var("LOGIN_PROTECTED_PATH") {
            config.protected_path = path;
        }
        config.timeouts = Timeouts {
            request_secs: env_parse_u64("LOGIN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LOGIN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        Ok(config)
    }
}

pub(crate) fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
