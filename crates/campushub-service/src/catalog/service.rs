//! Event catalog service.

use std::sync::Arc;

use bytes::Bytes;
use tracing::info;

use campushub_core::error::AppError;
use campushub_core::types::EventId;
use campushub_database::repositories::event::EventRepository;
use campushub_entity::event::{Event, NewEvent};
use campushub_entity::student::AttendeeProfile;

use super::photo::PhotoStore;

/// An event as returned on read paths, with the photo reference already
/// resolved to an absolute URL.
#[derive(Debug, Clone)]
pub struct EventSummary {
    /// The event record.
    pub event: Event,
    /// Resolved photo URL, absent when no photo was attached.
    pub photo_url: Option<String>,
}

/// A single event with its attendee set expanded.
#[derive(Debug, Clone)]
pub struct EventDetails {
    /// The event record with resolved photo URL.
    pub summary: EventSummary,
    /// Expanded attendee projections.
    pub attendees: Vec<AttendeeProfile>,
}

/// Handles event creation and catalog reads.
#[derive(Debug, Clone)]
pub struct CatalogService {
    /// Event repository.
    events: Arc<EventRepository>,
    /// Photo persistence and URL resolution.
    photos: PhotoStore,
}

impl CatalogService {
    /// Creates a new catalog service.
    pub fn new(events: Arc<EventRepository>, photos: PhotoStore) -> Self {
        Self { events, photos }
    }

    /// Create an event, optionally persisting an uploaded photo first.
    ///
    /// The draft is normalized before it reaches the store, so a free event
    /// is stored with price 0 whatever was submitted.
    pub async fn create_event(
        &self,
        mut draft: NewEvent,
        photo: Option<(String, Bytes)>,
    ) -> Result<EventSummary, AppError> {
        if let Some((original_name, data)) = photo {
            let stored = self.photos.save(&original_name, data).await?;
            draft.photo = Some(stored);
        }

        let event = self.events.create(&draft.normalize()).await?;
        info!(event_id = %event.id, name = %event.name, "Event created");

        Ok(self.with_photo_url(event))
    }

    /// List all events with resolved photo URLs.
    pub async fn list_events(&self) -> Result<Vec<EventSummary>, AppError> {
        let events = self.events.find_all().await?;
        Ok(events.into_iter().map(|e| self.with_photo_url(e)).collect())
    }

    /// Fetch one event with its attendee set expanded.
    pub async fn get_event(&self, id: EventId) -> Result<EventDetails, AppError> {
        let event = self
            .events
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Event not found"))?;

        let attendees = self.events.list_attendees(event.id).await?;

        Ok(EventDetails {
            summary: self.with_photo_url(event),
            attendees,
        })
    }

    fn with_photo_url(&self, event: Event) -> EventSummary {
        let photo_url = self.photos.resolve_url(event.photo.as_deref());
        EventSummary { event, photo_url }
    }
}
