//! Application builder — wires repositories, services, and state into a
//! running Axum server.

use std::sync::Arc;

use sqlx::PgPool;

use campushub_auth::jwt::decoder::JwtDecoder;
use campushub_auth::jwt::encoder::JwtEncoder;
use campushub_auth::password::PasswordHasher;
use campushub_core::config::AppConfig;
use campushub_core::error::AppError;
use campushub_database::repositories::event::EventRepository;
use campushub_database::repositories::student::StudentRepository;
use campushub_service::catalog::CatalogService;
use campushub_service::catalog::photo::PhotoStore;
use campushub_service::registration::RegistrationService;
use campushub_service::roster::RosterService;

use crate::router::build_router;
use crate::state::AppState;

/// Construct the full application state from configuration and a pool.
///
/// Shared between the server entry point and the integration test harness.
pub fn build_state(config: AppConfig, db_pool: PgPool) -> AppState {
    let student_repo = Arc::new(StudentRepository::new(db_pool.clone()));
    let event_repo = Arc::new(EventRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let registration_service = Arc::new(RegistrationService::new(
        Arc::clone(&student_repo),
        Arc::clone(&event_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
    ));
    let roster_service = Arc::new(RosterService::new(Arc::clone(&student_repo)));
    let catalog_service = Arc::new(CatalogService::new(
        Arc::clone(&event_repo),
        PhotoStore::new(&config.uploads.directory, &config.server.public_url),
    ));

    AppState {
        config: Arc::new(config),
        db_pool,
        jwt_encoder,
        jwt_decoder,
        password_hasher,
        student_repo,
        event_repo,
        registration_service,
        roster_service,
        catalog_service,
    }
}

/// Runs the CampusHub server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    // Uploaded photos land here; the directory must exist before ServeDir
    // starts answering for it.
    tokio::fs::create_dir_all(&config.uploads.directory)
        .await
        .map_err(|e| {
            AppError::storage(format!(
                "Failed to create uploads dir '{}': {e}",
                config.uploads.directory
            ))
        })?;

    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool);
    let app = build_router(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("CampusHub server listening on {addr}");

    let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("CampusHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
