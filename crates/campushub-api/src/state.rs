//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use campushub_auth::jwt::decoder::JwtDecoder;
use campushub_auth::jwt::encoder::JwtEncoder;
use campushub_auth::password::PasswordHasher;
use campushub_core::config::AppConfig;
use campushub_database::repositories::event::EventRepository;
use campushub_database::repositories::student::StudentRepository;
use campushub_service::catalog::CatalogService;
use campushub_service::registration::RegistrationService;
use campushub_service::roster::RosterService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    // ── Auth ─────────────────────────────────────────────────
    /// JWT token encoder
    pub jwt_encoder: Arc<JwtEncoder>,
    /// JWT token decoder and validator
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,

    // ── Repositories ─────────────────────────────────────────
    /// Student repository
    pub student_repo: Arc<StudentRepository>,
    /// Event repository
    pub event_repo: Arc<EventRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Registration core (activation, login, event signup)
    pub registration_service: Arc<RegistrationService>,
    /// Roster import service
    pub roster_service: Arc<RosterService>,
    /// Event catalog service
    pub catalog_service: Arc<CatalogService>,
}
