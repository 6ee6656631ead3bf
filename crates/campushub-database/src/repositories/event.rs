//! Event repository implementation.

use sqlx::PgPool;

use campushub_core::error::{AppError, ErrorKind};
use campushub_core::result::AppResult;
use campushub_core::types::{EventId, StudentId};
use campushub_entity::event::{Event, NewEvent};
use campushub_entity::student::AttendeeProfile;

/// Repository for event catalog CRUD and the attendee set.
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new event repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event.
    pub async fn create(&self, data: &NewEvent) -> AppResult<Event> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (id, name, photo, description, venue, date, time, is_free, price) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING *",
        )
        .bind(EventId::new())
        .bind(&data.name)
        .bind(&data.photo)
        .bind(&data.description)
        .bind(&data.venue)
        .bind(data.date)
        .bind(data.time)
        .bind(data.is_free)
        .bind(data.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create event", e))
    }

    /// List all events in schedule order.
    pub async fn find_all(&self) -> AppResult<Vec<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY date ASC, time ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list events", e))
    }

    /// Find an event by primary key.
    pub async fn find_by_id(&self, id: EventId) -> AppResult<Option<Event>> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find event by id", e)
            })
    }

    /// Add a student to an event's attendee set.
    ///
    /// The attendee set is keyed on `(event_id, student_id)`, so the insert
    /// is an atomic add-if-absent: under concurrent signups for the same
    /// pair, exactly one insert takes effect. Returns `false` when the
    /// student was already a member.
    pub async fn add_attendee(&self, event_id: EventId, student_id: StudentId) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO event_attendees (event_id, student_id) \
             VALUES ($1, $2) \
             ON CONFLICT (event_id, student_id) DO NOTHING",
        )
        .bind(event_id)
        .bind(student_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to add attendee", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// List an event's attendees as the read-side projection,
    /// in registration order.
    pub async fn list_attendees(&self, event_id: EventId) -> AppResult<Vec<AttendeeProfile>> {
        sqlx::query_as::<_, AttendeeProfile>(
            "SELECT s.id, s.name, s.national_id, s.student_number, s.email \
             FROM event_attendees ea \
             JOIN students s ON s.id = ea.student_id \
             WHERE ea.event_id = $1 \
             ORDER BY ea.registered_at ASC",
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attendees", e))
    }
}
