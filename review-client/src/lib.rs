//! Review HTTP Clients
//!
//! Thin, typed HTTP clients used by the review bot:
//! - [`PracticumClient`] polls the homework status API
//! - [`TelegramClient`] delivers notifications through the Telegram Bot API
//!
//! Both share [`ClientError`], which never embeds the API tokens.
//!
//! # Example
//!
//! ```no_run
//! use review_client::{DEFAULT_ENDPOINT, PracticumClient, TELEGRAM_API_URL, TelegramClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let http = reqwest::Client::new();
//!     let practicum = PracticumClient::with_client(DEFAULT_ENDPOINT, "practicum-token", http.clone());
//!     let telegram = TelegramClient::with_client(TELEGRAM_API_URL, "bot-token", "123456", http);
//!
//!     let body = practicum.fetch_status(0).await?;
//!     telegram.send_message(&body.to_string()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
mod homeworks;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use telegram::{TELEGRAM_API_URL, TelegramClient};

use reqwest::Client;

/// Default homework status endpoint
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework status API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the status endpoint
    endpoint: String,
    /// OAuth token sent in the Authorization header
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a client for `endpoint` (normally [`DEFAULT_ENDPOINT`])
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    ///
    /// # Example
    /// ```
    /// use review_client::PracticumClient;
    /// use reqwest::Client;
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = PracticumClient::with_client("http://localhost:8080/statuses/", "token", http_client);
    /// ```
    pub fn with_client(endpoint: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_keeps_trailing_slash() {
        let client = PracticumClient::with_client("http://localhost:8080/statuses/", "token", Client::new());
        assert_eq!(client.endpoint, "http://localhost:8080/statuses/");
    }
}
