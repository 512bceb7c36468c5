//! Core domain types
//!
//! The status API returns loosely-typed JSON; these types are the parts of
//! it the notifier actually relies on.

pub mod homework;
