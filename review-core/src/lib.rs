//! Review Core
//!
//! Core types and pure logic for the homework review notifier.
//!
//! This crate contains:
//! - Domain types: homework records and the closed set of review statuses
//! - Validation: shape checks on the raw status API response
//! - Messages: the notification texts sent to the chat
//!
//! Nothing here performs I/O; HTTP lives in `review-client`, the polling
//! loop in `review-bot`.

pub mod domain;
pub mod error;
pub mod message;
pub mod validate;

pub use domain::homework::{Homework, HomeworkStatus};
pub use error::{Result, ValidationError};
pub use message::{describe, failure_message};
pub use validate::{current_date, extract_homeworks};
