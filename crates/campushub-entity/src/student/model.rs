//! Student entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use campushub_core::types::StudentId;

/// A student record in the CampusHub system.
///
/// A student exists in one of two lifecycle states: *provisioned* (created
/// by an admin roster import; `email` and `password_hash` are both absent)
/// or *activated* (both set). The transition happens exactly once, through
/// account activation, and never reverses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Student {
    /// Unique student identifier.
    pub id: StudentId,
    /// Display name, seeded by the roster import.
    pub name: String,
    /// National identity number, immutable after import.
    pub national_id: String,
    /// Campus student number, immutable after import.
    pub student_number: String,
    /// Email address; absent until activation, unique once set.
    pub email: Option<String>,
    /// Argon2id password hash; absent until activation.
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Student {
    /// Check whether this student has completed account activation.
    ///
    /// A record with either credential field set counts as activated;
    /// re-activation must be rejected even for half-written records.
    pub fn is_activated(&self) -> bool {
        self.email.is_some() || self.password_hash.is_some()
    }
}

/// Data for a roster-imported (provisioned) student stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvisionedStudent {
    /// Display name from the roster.
    pub name: String,
    /// National identity number.
    pub national_id: String,
    /// Campus student number.
    pub student_number: String,
}

/// Data applied to a provisioned record during activation.
#[derive(Debug, Clone)]
pub struct Activation {
    /// Name as entered at signup (overwrites the roster value).
    pub name: String,
    /// Email address to attach.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
}

/// Read-side projection of a student for attendee expansion.
///
/// This is the only student shape that event detail responses expose;
/// it never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendeeProfile {
    /// Student identifier.
    pub id: StudentId,
    /// Display name.
    pub name: String,
    /// National identity number.
    pub national_id: String,
    /// Campus student number.
    pub student_number: String,
    /// Email, if the student has activated.
    pub email: Option<String>,
}
