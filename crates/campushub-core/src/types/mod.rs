//! Shared domain-level types.

pub mod id;

pub use id::{EventId, StudentId};
