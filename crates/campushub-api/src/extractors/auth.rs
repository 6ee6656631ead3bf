//! `AuthStudent` extractor — pulls the JWT from the Authorization header,
//! validates it, and exposes the verified student identity.
//!
//! Protected routes take their subject from this extractor and never from
//! the request body, so a caller cannot register someone else.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use campushub_core::error::AppError;
use campushub_core::types::StudentId;

use crate::error::ApiError;
use crate::state::AppState;

/// Verified student identity available in protected handlers.
#[derive(Debug, Clone)]
pub struct AuthStudent {
    /// Student ID from the token's subject claim.
    pub student_id: StudentId,
    /// Display name at token issuance time.
    pub name: String,
    /// Email at token issuance time.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthStudent {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // Extract Bearer token from Authorization header
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthorized("Invalid Authorization header format"))?;

        // Decode and validate JWT
        let claims = state.jwt_decoder.decode(token)?;

        Ok(AuthStudent {
            student_id: claims.student_id(),
            name: claims.name,
            email: claims.email,
        })
    }
}
