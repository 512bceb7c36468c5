//! Homework status poller
//!
//! Polls the status API on a fixed interval and notifies the chat whenever
//! the verdict for the most recent homework changes. Any failure inside a
//! cycle is turned into a notification of its own; the loop never stops.

use review_client::ClientError;
use review_core::{ValidationError, current_date, describe, extract_homeworks, failure_message};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::repository::StatusRepository;
use crate::scheduler::Sleeper;
use crate::service::Notifier;

/// Anything that can go wrong inside a single poll cycle
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CycleError {
    /// Check if the failure is likely to clear on the next poll
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_transient())
    }

    /// Check if the API reported something outside the known contract
    pub fn is_contract_change(&self) -> bool {
        matches!(self, Self::Validation(e) if e.is_contract_change())
    }
}

/// What a single poll cycle ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status message was sent (or at least attempted)
    Notified,
    /// The status message matched the last one sent
    Unchanged,
    /// The API reported no homework updates since the cursor
    NoHomeworks,
    /// The cycle failed; a failure message was handled instead
    Failed,
}

/// Status poller that runs poll cycles forever
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    notifier: Arc<dyn Notifier>,
    sleeper: Arc<dyn Sleeper>,
    poll_interval: Duration,
    /// Unix timestamp to request updates from
    cursor: i64,
    /// Last text handed to the notifier
    last_message: Option<String>,
}

impl StatusPoller {
    /// Creates a new status poller starting at `cursor`
    pub fn new(
        poll_interval: Duration,
        cursor: i64,
        statuses: Arc<dyn StatusRepository>,
        notifier: Arc<dyn Notifier>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            statuses,
            notifier,
            sleeper,
            poll_interval,
            cursor,
            last_message: None,
        }
    }

    /// Current cursor
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Starts the polling loop
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?}, from_date: {})",
            self.poll_interval,
            self.cursor()
        );

        loop {
            self.tick().await;
            self.sleeper.sleep(self.poll_interval).await;
        }
    }

    /// Performs a single poll cycle
    ///
    /// Never fails: errors are reported through the notifier and the log.
    pub async fn tick(&mut self) -> CycleOutcome {
        match self.poll_once().await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = failure_message(&e);
                if e.is_transient() {
                    warn!("{}", message);
                } else if e.is_contract_change() {
                    error!("Status API contract changed: {}", message);
                } else {
                    error!("{}", message);
                }
                self.deliver(message).await;
                CycleOutcome::Failed
            }
        }
    }

    async fn poll_once(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self.statuses.fetch_status(self.cursor).await?;
        let homeworks = extract_homeworks(&response)?;

        // Only the most recent homework matters.
        let outcome = match homeworks.first() {
            None => {
                debug!("No homework updates since {}", self.cursor);
                CycleOutcome::NoHomeworks
            }
            Some(record) => {
                let message = describe(record)?;
                if self.deliver(message).await {
                    CycleOutcome::Notified
                } else {
                    debug!("Homework status has not changed");
                    CycleOutcome::Unchanged
                }
            }
        };

        if let Some(date) = current_date(&response) {
            self.cursor = date;
        }

        Ok(outcome)
    }

    /// Hands `message` to the notifier unless it repeats the last one
    ///
    /// Returns whether a send was attempted. A failed send still counts as
    /// the last message and is not retried.
    async fn deliver(&mut self, message: String) -> bool {
        if self.last_message.as_deref() == Some(message.as_str()) {
            return false;
        }

        if let Err(e) = self.notifier.notify(&message).await {
            error!("Failed to send message: {}", e);
        }

        self.last_message = Some(message);
        true
    }
}
