//! Event handlers — catalog reads and token-authenticated signup.

use axum::Json;
use axum::extract::{Path, State};

use campushub_core::types::EventId;

use crate::dto::response::{ApiResponse, EventDetailResponse, EventResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthStudent;
use crate::state::AppState;

/// GET /api/events
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<EventResponse>>>, ApiError> {
    let events = state.catalog_service.list_events().await?;

    Ok(Json(ApiResponse::ok(
        events.into_iter().map(EventResponse::from).collect(),
    )))
}

/// GET /api/events/{id}
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<EventDetailResponse>>, ApiError> {
    let details = state.catalog_service.get_event(id).await?;

    Ok(Json(ApiResponse::ok(details.into())))
}

/// POST /api/events/{id}/signup
///
/// The signup subject is the verified bearer token's student, never a
/// caller-supplied identity.
pub async fn signup_for_event(
    State(state): State<AppState>,
    auth: AuthStudent,
    Path(id): Path<EventId>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .registration_service
        .register_attendance(auth.student_id, id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Signup successful".to_string(),
    })))
}
