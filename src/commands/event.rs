use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::Subcommand;
use uuid::Uuid;

use orgdesk::attendance::EventService;
use orgdesk::attendance::qr::SvgQrEncoder;
use orgdesk::config::Config;
use orgdesk::model::{CreateEvent, Department, EventId, UserId, parse_instant};
use orgdesk::store::sqlite::SqliteStore;

#[derive(Subcommand)]
pub enum EventAction {
    Create {
        #[arg(long)]
        name: String,
        /// Start time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)
        #[arg(long, value_parser = instant)]
        start: DateTime<Utc>,
        /// End time (RFC 3339 or YYYY-MM-DDTHH:MM, UTC)
        #[arg(long, value_parser = instant)]
        end: DateTime<Utc>,
        #[arg(long = "department")]
        departments: Vec<Department>,
        /// User id to invite (repeatable)
        #[arg(long = "attendee")]
        attendees: Vec<String>,
        /// Generate a QR code for check-in
        #[arg(long, default_value_t = false)]
        qr: bool,
        /// Base URL for the check-in link (overrides config)
        #[arg(long)]
        domain: Option<String>,
    },
    Show { id: Uuid },
}

fn instant(s: &str) -> Result<DateTime<Utc>, String> {
    parse_instant(s).map_err(|e| e.to_string())
}

pub async fn run(db: &str, action: EventAction) -> Result<()> {
    let store = Arc::new(SqliteStore::open(db)?);
    let config = Config::open(db)?;

    match action {
        EventAction::Create {
            name,
            start,
            end,
            departments,
            attendees,
            qr,
            domain,
        } => {
            let domain = config.resolve_domain(domain.as_deref())?;
            let service = EventService::new(
                store.clone(),
                store,
                Arc::new(SvgQrEncoder::default()),
                domain,
            );
            let event = service
                .create_event(CreateEvent {
                    name,
                    start_date: start,
                    end_date: end,
                    departments,
                    attendees: attendees.into_iter().map(UserId::new).collect(),
                    is_qr_required: qr,
                })
                .await?;
            println!("✓ created event {}", event.id);
            println!("  invited {}", event.invited_attendees.len());
            if !event.qr_code.is_empty() {
                println!("  qr code {} bytes", event.qr_code.len());
            }
        }
        EventAction::Show { id } => {
            let service = EventService::new(
                store.clone(),
                store,
                Arc::new(SvgQrEncoder::default()),
                config.resolve_domain(None)?,
            );
            let event = service.event(&EventId(id)).await?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_reports_unparseable_input() {
        assert!(instant("2024-01-01T09:00").is_ok());
        assert!(instant("next tuesday").is_err());
    }
}
