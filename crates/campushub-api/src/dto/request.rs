//! Request DTOs with validation.
//!
//! Every body is an explicit validated structure; unknown fields are
//! rejected before any business logic runs.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Account activation (signup) request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ActivateRequest {
    /// Student display name.
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// National identity number from the roster.
    #[validate(length(min = 1, message = "National ID is required"))]
    pub national_id: String,
    /// Campus student number from the roster.
    #[validate(length(min = 1, message = "Student number is required"))]
    pub student_number: String,
    /// Email address to attach to the account.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Chosen password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    /// Email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}
