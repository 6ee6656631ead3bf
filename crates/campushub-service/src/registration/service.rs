//! Registration service — activation, login, and event signup.
//!
//! Every state transition on a `Student` record or an attendee set goes
//! through here. Activation and signup are deliberately non-idempotent: a
//! repeated attempt is a conflict, not a no-op, so callers can distinguish
//! "done" from "done twice".

use std::sync::Arc;

use tracing::info;

use campushub_auth::jwt::encoder::{IssuedToken, JwtEncoder};
use campushub_auth::password::PasswordHasher;
use campushub_core::error::AppError;
use campushub_core::types::{EventId, StudentId};
use campushub_database::repositories::event::EventRepository;
use campushub_database::repositories::student::StudentRepository;
use campushub_entity::student::model::Activation;

/// Single generic message for every login failure.
///
/// Unknown email, wrong password, and not-yet-activated accounts must be
/// indistinguishable to the caller.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Orchestrates the student lifecycle and the attendee set.
#[derive(Debug, Clone)]
pub struct RegistrationService {
    /// Student repository.
    students: Arc<StudentRepository>,
    /// Event repository.
    events: Arc<EventRepository>,
    /// Password hasher.
    hasher: Arc<PasswordHasher>,
    /// Bearer token issuer.
    jwt: Arc<JwtEncoder>,
}

/// Input for account activation.
#[derive(Debug, Clone)]
pub struct ActivateStudent {
    /// Name as entered at signup.
    pub name: String,
    /// National identity number from the roster.
    pub national_id: String,
    /// Campus student number from the roster.
    pub student_number: String,
    /// Email address to attach to the account.
    pub email: String,
    /// Plaintext password; hashed before it touches the store.
    pub password: String,
}

/// Successful login result.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued bearer token.
    pub token: IssuedToken,
    /// The authenticated student's ID.
    pub student_id: StudentId,
    /// The authenticated student's display name.
    pub name: String,
}

impl RegistrationService {
    /// Creates a new registration service.
    pub fn new(
        students: Arc<StudentRepository>,
        events: Arc<EventRepository>,
        hasher: Arc<PasswordHasher>,
        jwt: Arc<JwtEncoder>,
    ) -> Self {
        Self {
            students,
            events,
            hasher,
            jwt,
        }
    }

    /// Activate a provisioned student account.
    ///
    /// The `(national_id, student_number)` pair is an allow-list: only
    /// records the admin imported can activate, so a miss is a forbidden
    /// error rather than a plain not-found. Activation happens at most once
    /// per record; losing the conditional update means someone else got
    /// there first and the attempt is rejected as a conflict.
    pub async fn activate(&self, input: ActivateStudent) -> Result<(), AppError> {
        let student = self
            .students
            .find_by_credentials(&input.national_id, &input.student_number)
            .await?
            .ok_or_else(|| {
                AppError::forbidden("National ID and student number not found")
            })?;

        if student.is_activated() {
            return Err(AppError::conflict("Student already signed up"));
        }

        let password_hash = self.hasher.hash_password(&input.password)?;
        let activation = Activation {
            name: input.name,
            email: input.email,
            password_hash,
        };

        let updated = self.students.activate(student.id, &activation).await?;
        if updated.is_none() {
            // Lost the race against a concurrent activation.
            return Err(AppError::conflict("Student already signed up"));
        }

        info!(student_id = %student.id, "Student account activated");
        Ok(())
    }

    /// Authenticate a student and issue a bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginOutcome, AppError> {
        let student = self
            .students
            .find_by_email(email)
            .await?
            .ok_or_else(|| AppError::unauthorized(INVALID_CREDENTIALS))?;

        let Some(stored_hash) = student.password_hash.as_deref() else {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        };

        if !self.hasher.verify_password(password, stored_hash)? {
            return Err(AppError::unauthorized(INVALID_CREDENTIALS));
        }

        let email = student
            .email
            .as_deref()
            .unwrap_or_default();
        let token = self.jwt.issue(student.id, &student.name, email)?;

        info!(student_id = %student.id, "Student logged in");

        Ok(LoginOutcome {
            token,
            student_id: student.id,
            name: student.name,
        })
    }

    /// Register a student for an event.
    ///
    /// The student identity comes from a verified bearer token upstream;
    /// this method never trusts a caller-supplied subject. Membership in the
    /// attendee set is added atomically at the store, so concurrent signups
    /// for the same pair settle to one member and one conflict.
    pub async fn register_attendance(
        &self,
        student_id: StudentId,
        event_id: EventId,
    ) -> Result<(), AppError> {
        let student = self
            .students
            .find_by_id(student_id)
            .await?
            .ok_or_else(|| AppError::not_found("Student not found"))?;

        let event = self
            .events
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let added = self.events.add_attendee(event.id, student.id).await?;
        if !added {
            return Err(AppError::conflict(
                "Student already signed up for this event",
            ));
        }

        info!(student_id = %student.id, event_id = %event.id, "Event signup recorded");
        Ok(())
    }
}
