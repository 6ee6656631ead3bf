//! Student handlers — account activation and login.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use campushub_core::error::AppError;
use campushub_service::registration::ActivateStudent;

use crate::dto::request::{ActivateRequest, LoginRequest};
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/students/signup
///
/// One-time activation of a roster-provisioned account. No token is issued
/// here; activation and login are separate steps.
pub async fn activate(
    State(state): State<AppState>,
    Json(req): Json<ActivateRequest>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    state
        .registration_service
        .activate(ActivateStudent {
            name: req.name,
            national_id: req.national_id,
            student_number: req.student_number,
            email: req.email,
            password: req.password,
        })
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Signup successful".to_string(),
    })))
}

/// POST /api/students/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let outcome = state
        .registration_service
        .login(&req.email, &req.password)
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        token: outcome.token.token,
        expires_at: outcome.token.expires_at,
        student_id: outcome.student_id,
        name: outcome.name,
    })))
}
