//! Event entity model.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campushub_core::types::EventId;

/// A campus event students can register for.
///
/// The attendee set lives in its own table keyed on
/// `(event_id, student_id)` and is exposed through the repository, not as a
/// field here; the row itself only carries the catalog data.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    /// Unique event identifier.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Stored photo filename; resolved to an absolute URL at read time.
    pub photo: Option<String>,
    /// Optional free-form description.
    pub description: Option<String>,
    /// Venue name.
    pub venue: String,
    /// Event date.
    pub date: NaiveDate,
    /// Event start time.
    pub time: NaiveTime,
    /// Whether attendance is free of charge.
    pub is_free: bool,
    /// Ticket price in whole currency units; always 0 for free events.
    pub price: i64,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEvent {
    /// Event name.
    pub name: String,
    /// Stored photo filename, if a photo was uploaded.
    pub photo: Option<String>,
    /// Optional description.
    pub description: Option<String>,
    /// Venue name.
    pub venue: String,
    /// Event date.
    pub date: NaiveDate,
    /// Event start time.
    pub time: NaiveTime,
    /// Whether attendance is free of charge.
    pub is_free: bool,
    /// Submitted ticket price.
    pub price: i64,
}

impl NewEvent {
    /// Enforce the free-event invariant: a free event always stores price 0,
    /// whatever the caller submitted.
    pub fn normalize(mut self) -> Self {
        if self.is_free {
            self.price = 0;
        }
        self
    }
}
