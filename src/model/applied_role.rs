use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Department, ParseEnumError, Role, UserId, parse_label};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppliedRoleId(pub String);

impl AppliedRoleId {
    /// A fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppliedRoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AppliedRoleId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    /// Whether a record in this status may be moved to `next`.
    ///
    /// Pending resolves once. Re-applying the current status is allowed so
    /// an accept can be replayed after its promotion step failed.
    pub fn can_become(self, next: ApplicationStatus) -> bool {
        self == next || (self == ApplicationStatus::Pending && next != ApplicationStatus::Pending)
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::Accepted => "ACCEPTED",
            ApplicationStatus::Rejected => "REJECTED",
        })
    }
}

/// One applicant's application to a role in a department.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppliedRole {
    pub id: AppliedRoleId,
    pub applicant_id: UserId,
    pub role: Role,
    pub department: Department,
    pub status: ApplicationStatus,
}

impl AppliedRole {
    /// A new pending application with a generated id.
    pub fn pending(applicant_id: UserId, role: Role, department: Department) -> Self {
        Self {
            id: AppliedRoleId::generate(),
            applicant_id,
            role,
            department,
            status: ApplicationStatus::Pending,
        }
    }
}

/// The choice an applicant confirms in the decision prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

impl Decision {
    const LABELS: &'static [(Decision, &'static str)] =
        &[(Decision::Accept, "accept"), (Decision::Reject, "reject")];

    pub fn target_status(self) -> ApplicationStatus {
        match self {
            Decision::Accept => ApplicationStatus::Accepted,
            Decision::Reject => ApplicationStatus::Rejected,
        }
    }

    /// Prompt title, e.g. "Confirm Acceptance?".
    pub fn confirm_title(self) -> &'static str {
        match self {
            Decision::Accept => "Confirm Acceptance?",
            Decision::Reject => "Confirm Rejection?",
        }
    }
}

impl FromStr for Decision {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("decision", s, Self::LABELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_maps_to_status() {
        assert_eq!(
            Decision::Accept.target_status(),
            ApplicationStatus::Accepted
        );
        assert_eq!(
            Decision::Reject.target_status(),
            ApplicationStatus::Rejected
        );
    }

    #[test]
    fn decision_parses_case_insensitively() {
        assert_eq!("ACCEPT".parse::<Decision>().unwrap(), Decision::Accept);
        assert_eq!("reject".parse::<Decision>().unwrap(), Decision::Reject);
        assert!("maybe".parse::<Decision>().is_err());
    }

    #[test]
    fn pending_resolves_once() {
        use ApplicationStatus::{Accepted, Pending, Rejected};
        assert!(Pending.can_become(Accepted));
        assert!(Pending.can_become(Rejected));
        assert!(!Accepted.can_become(Rejected));
        assert!(!Rejected.can_become(Accepted));
        assert!(!Accepted.can_become(Pending));
    }

    #[test]
    fn same_status_is_idempotent() {
        use ApplicationStatus::{Accepted, Pending, Rejected};
        assert!(Accepted.can_become(Accepted));
        assert!(Rejected.can_become(Rejected));
        assert!(Pending.can_become(Pending));
    }

    #[test]
    fn status_serializes_uppercase() {
        let json = serde_json::to_string(&ApplicationStatus::Accepted).unwrap();
        assert_eq!(json, "\"ACCEPTED\"");
    }

    #[test]
    fn pending_application_uses_camel_case() {
        let role = AppliedRole::pending(UserId::from("u1"), Role::Designer, Department::Design);
        let json = serde_json::to_value(&role).unwrap();
        assert_eq!(json["applicantId"], "u1");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["role"], "designer");
    }
}
