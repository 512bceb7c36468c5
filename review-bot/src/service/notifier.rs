//! Notification service
//!
//! Delivers notification texts to the configured chat. Delivery is best
//! effort: failures are returned to the caller, never retried here.

use async_trait::async_trait;
use review_client::{Result, TelegramClient};

/// Service trait for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` to the configured chat
    async fn notify(&self, text: &str) -> Result<()>;
}

/// Telegram implementation of Notifier
pub struct TelegramNotifier {
    client: TelegramClient,
}

impl TelegramNotifier {
    /// Creates a notifier bound to the client's chat
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<()> {
        self.client.send_message(text).await
    }
}
