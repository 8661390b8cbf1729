//! Domain errors returned by the recruitment and attendance handlers.
//!
//! Storage and session plumbing report `anyhow` errors; those pass through
//! [`Error::Storage`] unchanged.

use crate::model::{ApplicationStatus, UserId};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("cannot change application status from {from} to {to}")]
    InvalidTransition {
        from: ApplicationStatus,
        to: ApplicationStatus,
    },

    #[error("user {0} is not an applicant")]
    NotAnApplicant(UserId),

    #[error("invalid event: {0}")]
    InvalidEvent(String),

    #[error("failed to render QR code: {0}")]
    Qr(String),

    /// The status write went through but the follow-up promotion did not.
    #[error("application marked {status} but member promotion failed: {source}")]
    PromotionFailed {
        status: ApplicationStatus,
        #[source]
        source: Box<Error>,
    },

    /// The applicant was promoted but the stale session is still active.
    #[error("applicant promoted but the session could not be ended: {source}")]
    SessionNotInvalidated {
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl Error {
    pub fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Error::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_kind_and_id() {
        let err = Error::not_found("user", "u9");
        assert_eq!(err.to_string(), "user not found: u9");
    }

    #[test]
    fn promotion_failure_carries_cause() {
        let err = Error::PromotionFailed {
            status: ApplicationStatus::Accepted,
            source: Box::new(Error::NotAnApplicant(UserId::from("u1"))),
        };
        let msg = err.to_string();
        assert!(msg.contains("ACCEPTED"));
        assert!(msg.contains("u1 is not an applicant"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn storage_errors_are_transparent() {
        let err = Error::from(anyhow::anyhow!("disk full"));
        assert_eq!(err.to_string(), "disk full");
    }
}
