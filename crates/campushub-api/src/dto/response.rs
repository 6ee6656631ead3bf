//! Response DTOs.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use campushub_core::types::{EventId, StudentId};
use campushub_entity::student::AttendeeProfile;
use campushub_service::catalog::{EventDetails, EventSummary};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent protected calls.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Authenticated student's ID.
    pub student_id: StudentId,
    /// Authenticated student's display name.
    pub name: String,
}

/// Roster import response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    /// Number of roster rows processed.
    pub imported: usize,
}

/// Event summary for list and create responses.
///
/// `photo` carries the resolved absolute URL, or null when no photo was
/// attached; the stored filename never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    /// Event ID.
    pub id: EventId,
    /// Event name.
    pub name: String,
    /// Resolved photo URL.
    pub photo: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Venue.
    pub venue: String,
    /// Date.
    pub date: NaiveDate,
    /// Start time.
    pub time: NaiveTime,
    /// Whether attendance is free.
    pub is_free: bool,
    /// Ticket price (always 0 for free events).
    pub price: i64,
}

impl From<EventSummary> for EventResponse {
    fn from(summary: EventSummary) -> Self {
        let event = summary.event;
        Self {
            id: event.id,
            name: event.name,
            photo: summary.photo_url,
            description: event.description,
            venue: event.venue,
            date: event.date,
            time: event.time,
            is_free: event.is_free,
            price: event.price,
        }
    }
}

/// Attendee projection exposed on event detail responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeResponse {
    /// Student ID.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// National identity number.
    pub national_id: String,
    /// Campus student number.
    pub student_number: String,
    /// Email, if activated.
    pub email: Option<String>,
}

impl From<AttendeeProfile> for AttendeeResponse {
    fn from(p: AttendeeProfile) -> Self {
        Self {
            id: p.id,
            name: p.name,
            national_id: p.national_id,
            student_number: p.student_number,
            email: p.email,
        }
    }
}

/// Event detail with expanded attendees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetailResponse {
    /// The event itself.
    #[serde(flatten)]
    pub event: EventResponse,
    /// Expanded attendee set.
    pub attendees: Vec<AttendeeResponse>,
}

impl From<EventDetails> for EventDetailResponse {
    fn from(details: EventDetails) -> Self {
        Self {
            event: details.summary.into(),
            attendees: details.attendees.into_iter().map(Into::into).collect(),
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
