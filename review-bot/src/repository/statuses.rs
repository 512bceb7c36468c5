//! Homework status repository
//!
//! Fetches the raw status response for a given cursor.

use async_trait::async_trait;
use review_client::{PracticumClient, Result};
use serde_json::Value;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses updated since `from_date`
    ///
    /// # Arguments
    /// * `from_date` - Unix timestamp cursor
    ///
    /// # Returns
    /// The decoded response body, not yet validated
    async fn fetch_status(&self, from_date: i64) -> Result<Value>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    /// Creates a new HTTP status repository
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch_status(&self, from_date: i64) -> Result<Value> {
        self.client.fetch_status(from_date).await
    }
}
