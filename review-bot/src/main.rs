//! Review Bot
//!
//! Watches the homework review API and reports verdict changes to a
//! Telegram chat.
//!
//! Architecture:
//! - Configuration: credentials and intervals from the environment (and `.env`)
//! - Repositories: status API access behind a trait
//! - Services: notification delivery behind a trait
//! - Scheduler: the poll / detect / notify loop
//!
//! The bot runs until the process is killed. Only missing credentials stop
//! it, and they do so before any request is made.

mod config;
mod logging;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::Config;
use crate::repository::HttpStatusRepository;
use crate::scheduler::{StatusPoller, TokioSleeper};
use crate::service::TelegramNotifier;
use review_client::{PracticumClient, TELEGRAM_API_URL, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let _log_guard = logging::init(config::log_file_from_env().as_deref());

    let mut poller = build_poller(|name| std::env::var(name).ok())?;
    info!("Bot started");

    poller.run().await;

    Ok(())
}

/// Loads configuration and wires the poller
///
/// Configuration comes first: a missing credential returns before any
/// client exists, so no request can be made.
fn build_poller<F>(lookup: F) -> Result<StatusPoller>
where
    F: Fn(&str) -> Option<String>,
{
    let config = load_config_from(lookup)?;
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    // Initialize clients
    let http = reqwest::Client::builder()
        .timeout(config.http_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let practicum = PracticumClient::with_client(
        config.endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    );
    let telegram = TelegramClient::with_client(
        TELEGRAM_API_URL,
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
        http,
    );

    let statuses = Arc::new(HttpStatusRepository::new(practicum));
    let notifier = Arc::new(TelegramNotifier::new(telegram));

    let cursor = chrono::Utc::now().timestamp();
    Ok(StatusPoller::new(
        config.poll_interval,
        cursor,
        statuses,
        notifier,
        Arc::new(TokioSleeper),
    ))
}

/// Loads and validates configuration, logging the reason on failure
fn load_config_from<F>(lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    let config = Config::from_lookup(lookup)
        .and_then(|config| config.validate().map(|()| config))
        .inspect_err(|e| error!("Cannot start: {}", e))?;
    Ok(config)
}
