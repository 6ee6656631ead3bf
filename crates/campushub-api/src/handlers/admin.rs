//! Admin handlers — roster upload and event creation.

use axum::Json;
use axum::extract::{Multipart, State};
use bytes::Bytes;
use chrono::{NaiveDate, NaiveTime};

use campushub_core::error::AppError;
use campushub_entity::event::NewEvent;

use crate::dto::response::{ApiResponse, EventResponse, ImportResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// POST /api/admin/students/import — multipart CSV roster upload.
pub async fn import_students(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<ImportResponse>>, ApiError> {
    let mut file: Option<Bytes> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        if field.name() == Some("file") {
            file = Some(
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
            );
        }
    }

    let file = file.ok_or_else(|| AppError::validation("No file uploaded"))?;
    let imported = state.roster_service.import_csv(&file).await?;

    Ok(Json(ApiResponse::ok(ImportResponse { imported })))
}

/// POST /api/admin/events — multipart event creation with optional photo.
///
/// Text fields: `name`, `venue`, `date` (YYYY-MM-DD), `time` (HH:MM),
/// optional `description`, `is_free`, `price`. File field: `photo`.
pub async fn create_event(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ApiResponse<EventResponse>>, ApiError> {
    let mut name: Option<String> = None;
    let mut venue: Option<String> = None;
    let mut date: Option<String> = None;
    let mut time: Option<String> = None;
    let mut description: Option<String> = None;
    let mut is_free: Option<String> = None;
    let mut price: Option<String> = None;
    let mut photo: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            "photo" => {
                let original = field.file_name().unwrap_or("photo").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                photo = Some((original, data));
            }
            _ => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::validation(format!("Read error: {e}")))?;
                match field_name.as_str() {
                    "name" => name = Some(text),
                    "venue" => venue = Some(text),
                    "date" => date = Some(text),
                    "time" => time = Some(text),
                    "description" => description = Some(text),
                    "is_free" => is_free = Some(text),
                    "price" => price = Some(text),
                    _ => {
                        return Err(
                            AppError::validation(format!("Unknown field '{field_name}'")).into()
                        );
                    }
                }
            }
        }
    }

    let draft = build_event_draft(name, venue, date, time, description, is_free, price)?;
    let summary = state.catalog_service.create_event(draft, photo).await?;

    Ok(Json(ApiResponse::ok(summary.into())))
}

/// Assemble and validate the event draft from raw multipart text fields.
fn build_event_draft(
    name: Option<String>,
    venue: Option<String>,
    date: Option<String>,
    time: Option<String>,
    description: Option<String>,
    is_free: Option<String>,
    price: Option<String>,
) -> Result<NewEvent, AppError> {
    let name = required_text(name, "name")?;
    let venue = required_text(venue, "venue")?;
    let date = required_text(date, "date")?;
    let time = required_text(time, "time")?;

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| AppError::validation("date must be YYYY-MM-DD"))?;
    let time = parse_time(&time)?;

    let is_free = match is_free.as_deref() {
        None | Some("") => true,
        Some(raw) => raw
            .parse::<bool>()
            .map_err(|_| AppError::validation("is_free must be true or false"))?,
    };

    let price = match price.as_deref() {
        None | Some("") => 0,
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| AppError::validation("price must be an integer"))?,
    };

    if price < 0 {
        return Err(AppError::validation("price must not be negative"));
    }

    Ok(NewEvent {
        name,
        photo: None,
        description: description.filter(|d| !d.is_empty()),
        venue,
        date,
        time,
        is_free,
        price,
    })
}

fn required_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::validation(format!("{field} is required"))),
    }
}

/// Accept `HH:MM` or `HH:MM:SS`.
fn parse_time(raw: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| AppError::validation("time must be HH:MM"))
}
