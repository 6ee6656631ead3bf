//! Shared test helpers for integration tests.
//!
//! The harness drives the real router against a real PostgreSQL database.
//! Tests are skipped (not failed) when `CAMPUSHUB_TEST_DATABASE_URL` is
//! unset, so the suite still passes in environments without a database.
//! Tests share one database and therefore scope all data they create with
//! unique identifiers instead of truncating tables.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use campushub_api::app::build_state;
use campushub_api::router::build_router;
use campushub_core::config::logging::LoggingConfig;
use campushub_core::config::server::ServerConfig;
use campushub_core::config::uploads::UploadsConfig;
use campushub_core::config::{AppConfig, DatabaseConfig};

/// Multipart boundary used by the upload helpers.
const BOUNDARY: &str = "campushub-test-boundary";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// A decoded response: status plus parsed JSON body.
pub struct TestResponse {
    /// HTTP status code.
    pub status: StatusCode,
    /// Parsed JSON body (`Value::Null` when empty or not JSON).
    pub body: Value,
}

impl TestApp {
    /// Create a new test application, or `None` when no test database is
    /// configured.
    pub async fn try_new() -> Option<Self> {
        let url = match std::env::var("CAMPUSHUB_TEST_DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                eprintln!("CAMPUSHUB_TEST_DATABASE_URL not set; skipping integration test");
                return None;
            }
        };

        let config = test_config(&url);

        let pool = campushub_database::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        campushub_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        tokio::fs::create_dir_all(&config.uploads.directory)
            .await
            .expect("Failed to create test uploads dir");

        let state = build_state(config, pool.clone());

        Some(Self {
            router: build_router(state),
            db_pool: pool,
        })
    }

    /// Send a JSON (or empty-body) request.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a multipart request with text fields and an optional file part.
    pub async fn request_multipart(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        file: Option<(&str, &str, &[u8])>,
    ) -> TestResponse {
        let mut body = Vec::new();

        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }

        if let Some((name, filename, data)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                     filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }

        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("Failed to build multipart request");

        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        TestResponse { status, body }
    }

    /// Import a one-row roster for the given student.
    pub async fn import_student(&self, name: &str, national_id: &str, student_number: &str) {
        let csv = format!("name,national_id,student_number\n{name},{national_id},{student_number}\n");
        let response = self
            .request_multipart(
                "/api/admin/students/import",
                &[],
                Some(("file", "roster.csv", csv.as_bytes())),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "roster import failed");
    }

    /// Activate a provisioned student.
    pub async fn activate_student(
        &self,
        name: &str,
        national_id: &str,
        student_number: &str,
        email: &str,
        password: &str,
    ) -> TestResponse {
        self.request(
            "POST",
            "/api/students/signup",
            Some(serde_json::json!({
                "name": name,
                "national_id": national_id,
                "student_number": student_number,
                "email": email,
                "password": password,
            })),
            None,
        )
        .await
    }

    /// Log in and return the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/students/login",
                Some(serde_json::json!({ "email": email, "password": password })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed");
        response.body["data"]["token"]
            .as_str()
            .expect("token in login response")
            .to_string()
    }

    /// Create a minimal event and return its ID.
    pub async fn create_event(&self, name: &str) -> String {
        let response = self
            .request_multipart(
                "/api/admin/events",
                &[
                    ("name", name),
                    ("venue", "Main Hall"),
                    ("date", "2026-09-12"),
                    ("time", "18:30"),
                ],
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "event creation failed");
        response.body["data"]["id"]
            .as_str()
            .expect("id in event response")
            .to_string()
    }

    /// Count students persisted for the given roster pair.
    pub async fn student_count(&self, national_id: &str, student_number: &str) -> i64 {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM students WHERE national_id = $1 AND student_number = $2",
        )
        .bind(national_id)
        .bind(student_number)
        .fetch_one(&self.db_pool)
        .await
        .expect("count students")
    }

    /// Count attendee rows for the given event.
    pub async fn attendee_count(&self, event_id: &str) -> i64 {
        let event_id: Uuid = event_id.parse().expect("event id is a uuid");
        sqlx::query_scalar("SELECT COUNT(*) FROM event_attendees WHERE event_id = $1")
            .bind(event_id)
            .fetch_one(&self.db_pool)
            .await
            .expect("count attendees")
    }
}

/// Unique per-test suffix so parallel tests never collide on roster keys
/// or emails.
pub fn unique_suffix() -> String {
    Uuid::new_v4().simple().to_string()[..12].to_string()
}

fn test_config(database_url: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            public_url: "http://campushub.test".to_string(),
            ..ServerConfig::default()
        },
        database: DatabaseConfig {
            url: database_url.to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 10,
            idle_timeout_seconds: 300,
        },
        auth: campushub_core::config::auth::AuthConfig {
            jwt_secret: "integration-test-secret".to_string(),
            token_ttl_days: 7,
        },
        uploads: UploadsConfig {
            directory: std::env::temp_dir()
                .join("campushub-test-uploads")
                .to_string_lossy()
                .into_owned(),
            max_upload_size_bytes: 10 * 1024 * 1024,
        },
        logging: LoggingConfig::default(),
    }
}
