//! Bot configuration
//!
//! Credentials and tuning knobs are read once at startup and passed down
//! explicitly; nothing below `main` looks at the environment.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use review_client::DEFAULT_ENDPOINT;

/// Environment variable holding the status API token
pub const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
/// Environment variable holding the Telegram bot token
pub const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
/// Environment variable holding the target chat id
pub const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Log file used when `LOG_FILE` is unset
pub const DEFAULT_LOG_FILE: &str = "review-bot.log";

const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more required credentials are unset or blank
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    /// A value was present but unusable
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat notifications are delivered to
    pub telegram_chat_id: String,

    /// Status endpoint URL
    pub endpoint: String,

    /// Delay between poll cycles
    pub poll_interval: Duration,

    /// Upper bound on any single HTTP request
    pub http_timeout: Duration,

    /// Log file path; `None` logs to stdout only
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Creates configuration from a variable lookup
    ///
    /// `main` passes the process environment; tests pass a map.
    /// Every missing credential is reported, not just the first one.
    ///
    /// Expected variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: the public status endpoint)
    /// - POLL_INTERVAL (optional, seconds, default: 60)
    /// - HTTP_TIMEOUT (optional, seconds, default: 30)
    /// - LOG_FILE (optional, default: review-bot.log, empty disables)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let practicum_token = required(PRACTICUM_TOKEN);
        let telegram_token = required(TELEGRAM_TOKEN);
        let telegram_chat_id = required(TELEGRAM_CHAT_ID);

        let (Some(practicum_token), Some(telegram_token), Some(telegram_chat_id)) =
            (&practicum_token, &telegram_token, &telegram_chat_id)
        else {
            let missing = [
                (PRACTICUM_TOKEN, practicum_token.is_none()),
                (TELEGRAM_TOKEN, telegram_token.is_none()),
                (TELEGRAM_CHAT_ID, telegram_chat_id.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect();
            return Err(ConfigError::MissingTokens(missing));
        };

        let endpoint = lookup("PRACTICUM_ENDPOINT")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let poll_interval = lookup("POLL_INTERVAL")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL);

        let http_timeout = lookup("HTTP_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT);

        Ok(Self {
            practicum_token: practicum_token.clone(),
            telegram_token: telegram_token.clone(),
            telegram_chat_id: telegram_chat_id.clone(),
            endpoint,
            poll_interval,
            http_timeout,
            log_file: log_file_from_lookup(&lookup),
        })
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid(
                "endpoint must start with http:// or https://".to_string(),
            ));
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        if self.http_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "http_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("poll_interval", &self.poll_interval)
            .field("http_timeout", &self.http_timeout)
            .field("log_file", &self.log_file)
            .finish()
    }
}

/// Reads the log file location from the environment
///
/// Needed before the rest of the configuration so that credential errors
/// can already be logged to the file.
pub fn log_file_from_env() -> Option<PathBuf> {
    log_file_from_lookup(&|name: &str| std::env::var(name).ok())
}

fn log_file_from_lookup<F>(lookup: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup("LOG_FILE") {
        Some(path) if path.trim().is_empty() => None,
        Some(path) => Some(PathBuf::from(path)),
        None => Some(PathBuf::from(DEFAULT_LOG_FILE)),
    }
}
