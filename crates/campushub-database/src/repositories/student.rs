//! Student repository implementation.

use sqlx::PgPool;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::types::StudentId;
use campushub_entity::student::model::{Activation, ProvisionedStudent};
use campushub_entity::student::Student;

/// Repository for student lookups and lifecycle transitions.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: PgPool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a student by primary key.
    pub async fn find_by_id(&self, id: StudentId) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by id", e)
            })
    }

    /// Find a student by the roster key pair.
    pub async fn find_by_credentials(
        &self,
        national_id: &str,
        student_number: &str,
    ) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE national_id = $1 AND student_number = $2",
        )
        .bind(national_id)
        .bind(student_number)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find student by roster key", e)
        })
    }

    /// Find a student by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find student by email", e)
            })
    }

    /// Upsert a provisioned student stub, keyed on the roster pair.
    ///
    /// Creates the record if the `(national_id, student_number)` pair is new,
    /// otherwise only overwrites the name. Re-running an identical roster is
    /// a no-op apart from the `updated_at` touch.
    pub async fn upsert_provisioned(&self, data: &ProvisionedStudent) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, name, national_id, student_number) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (national_id, student_number) \
             DO UPDATE SET name = EXCLUDED.name, updated_at = NOW() \
             RETURNING *",
        )
        .bind(StudentId::new())
        .bind(&data.name)
        .bind(&data.national_id)
        .bind(&data.student_number)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to upsert provisioned student", e)
        })
    }

    /// Apply an activation to a still-provisioned record.
    ///
    /// The `WHERE email IS NULL AND password_hash IS NULL` guard makes the
    /// transition atomic: of two racing activations exactly one sees the
    /// provisioned row and wins; the other gets `Ok(None)`.
    pub async fn activate(&self, id: StudentId, data: &Activation) -> AppResult<Option<Student>> {
        sqlx::query_as::<_, Student>(
            "UPDATE students \
             SET name = $2, email = $3, password_hash = $4, updated_at = NOW() \
             WHERE id = $1 AND email IS NULL AND password_hash IS NULL \
             RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("students_email_key") =>
            {
                AppError::conflict("Email already in use")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to activate student", e),
        })
    }
}
