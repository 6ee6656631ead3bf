//! # campushub-database
//!
//! PostgreSQL connection management, embedded migrations, and repository
//! implementations for CampusHub.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
