//! Service layer
//!
//! Services wrap outbound side effects the poller triggers.
//!
//! All services are trait-based to enable testing and dependency injection.

mod notifier;

// Re-export traits
pub use notifier::Notifier;

// Re-export implementations
pub use notifier::TelegramNotifier;
