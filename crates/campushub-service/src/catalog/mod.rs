//! Event catalog: creation, listing, and photo URL materialization.

pub mod photo;
pub mod service;

pub use service::{CatalogService, EventDetails, EventSummary};
