//! Scheduler layer for the bot
//!
//! This layer drives the poll cycle: fetch, validate, translate, notify,
//! then wait for the next tick.

pub mod poller;
pub mod sleeper;

pub use poller::StatusPoller;
pub use sleeper::{Sleeper, TokioSleeper};
