//! Attendance: event creation with optional QR check-in.

pub mod qr;

use std::sync::Arc;

use futures::future::try_join_all;

use crate::error::{Error, Result};
use crate::model::{Attendee, CreateEvent, Event, EventId, UserId};
use crate::store::{EventRepository, UserRepository};
use qr::QrEncoder;

/// The link a check-in QR code points at.
pub fn event_url(domain: &str, id: &EventId) -> String {
    format!("{}/events/{id}", domain.trim_end_matches('/'))
}

/// Server-side handler for event creation.
pub struct EventService {
    users: Arc<dyn UserRepository>,
    events: Arc<dyn EventRepository>,
    qr: Arc<dyn QrEncoder>,
    domain: String,
}

impl EventService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        events: Arc<dyn EventRepository>,
        qr: Arc<dyn QrEncoder>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            users,
            events,
            qr,
            domain: domain.into(),
        }
    }

    /// Create and persist an event. Failures are logged and returned; nothing
    /// is persisted unless every step before the write succeeded.
    pub async fn create_event(&self, input: CreateEvent) -> Result<Event> {
        let name = input.name.clone();
        self.build_and_store(input).await.inspect_err(|e| {
            tracing::error!(event_name = %name, error = %e, "failed to create event");
        })
    }

    pub async fn event(&self, id: &EventId) -> Result<Event> {
        self.events
            .get(id)
            .await?
            .ok_or_else(|| Error::not_found("event", id))
    }

    async fn build_and_store(&self, input: CreateEvent) -> Result<Event> {
        validate(&input)?;

        let id = EventId::generate();
        let qr_code = if input.is_qr_required {
            self.qr.encode(&event_url(&self.domain, &id))?
        } else {
            String::new()
        };

        let invited_attendees = self.resolve_attendees(&input.attendees).await?;

        let event = Event {
            id,
            name: input.name,
            start_date: input.start_date,
            end_date: input.end_date,
            departments: input.departments,
            attendees: Vec::new(),
            invited_attendees,
            has_started: false,
            qr_code,
        };
        self.events.add(&event).await?;

        tracing::info!(
            event_id = %event.id,
            invited = event.invited_attendees.len(),
            qr = input.is_qr_required,
            "event created"
        );
        Ok(event)
    }

    /// Look up every invitee concurrently; results keep the input order.
    async fn resolve_attendees(&self, ids: &[UserId]) -> Result<Vec<Attendee>> {
        try_join_all(ids.iter().map(|id| async move {
            let user = self
                .users
                .get_by_id(id)
                .await?
                .ok_or_else(|| Error::not_found("user", id))?;
            Ok::<_, Error>(Attendee {
                name: user.name.unwrap_or_default(),
                id: id.clone(),
            })
        }))
        .await
    }
}

fn validate(input: &CreateEvent) -> Result<()> {
    if input.name.trim().is_empty() {
        return Err(Error::InvalidEvent("name must not be empty".to_string()));
    }
    if input.end_date < input.start_date {
        return Err(Error::InvalidEvent(format!(
            "ends ({}) before it starts ({})",
            input.end_date, input.start_date
        )));
    }
    Ok(())
}
