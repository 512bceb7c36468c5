//! Telegram Bot API client
//!
//! Only `sendMessage` is needed: the bot never reads updates, it just
//! pushes plain-text notifications into one chat.
//! Docs: <https://core.telegram.org/bots/api#sendmessage>

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{ClientError, Result};

/// Base URL of the public Bot API
pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// HTTP client bound to one bot and one chat
#[derive(Debug, Clone)]
pub struct TelegramClient {
    base_url: String,
    token: String,
    chat_id: String,
    client: Client,
}

impl TelegramClient {
    /// Create a client for `base_url` (normally [`TELEGRAM_API_URL`])
    pub fn with_client(
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
        client: Client,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.into(),
            chat_id: chat_id.into(),
            client,
        }
    }

    /// Send a plain-text message to the configured chat
    ///
    /// # Errors
    /// * [`ClientError::RequestFailed`] if the request could not be sent
    /// * [`ClientError::Rejected`] if the Bot API refused the message
    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.token);
        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
            })
            .send()
            .await
            .map_err(|e| ClientError::RequestFailed(e.without_url()))?;

        let status = response.status();
        let reply: Option<BotReply> = response.json().await.ok();

        match reply {
            Some(reply) if status.is_success() && reply.ok => {
                info!("Message sent: {}", text);
                Ok(())
            }
            Some(reply) => Err(ClientError::Rejected {
                status: status.as_u16(),
                description: reply
                    .description
                    .unwrap_or_else(|| "Unknown error".to_string()),
            }),
            None if status.is_success() => Err(ClientError::ParseError(
                "Bot API returned a non-JSON reply".to_string(),
            )),
            None => Err(ClientError::Rejected {
                status: status.as_u16(),
                description: "Unknown error".to_string(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct BotReply {
    ok: bool,
    description: Option<String>,
}
