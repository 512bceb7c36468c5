//! Repository layer
//!
//! Repositories are stateless adapters over the HTTP clients. They give the
//! poller a narrow interface to depend on instead of a concrete client.
//!
//! All repositories are trait-based to enable testing and mocking.

mod statuses;

// Re-export traits
pub use statuses::StatusRepository;

// Re-export implementations
pub use statuses::HttpStatusRepository;
