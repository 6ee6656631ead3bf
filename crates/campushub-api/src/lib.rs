//! # campushub-api
//!
//! HTTP API layer for CampusHub built on Axum.
//!
//! Provides all REST endpoints, the bearer-token extractor, DTOs with
//! validation, CORS middleware, static photo serving, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_state, run_server};
pub use state::AppState;
