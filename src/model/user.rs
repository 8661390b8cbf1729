use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ParseEnumError, parse_label};

/// Identifier of a person record (applicant or member).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Whether a person is still applying or already belongs to the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonKind {
    Applicant,
    Member,
}

impl fmt::Display for PersonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PersonKind::Applicant => "applicant",
            PersonKind::Member => "member",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Department {
    Engineering,
    Design,
    Product,
    Marketing,
    Operations,
    Finance,
}

impl Department {
    const LABELS: &'static [(Department, &'static str)] = &[
        (Department::Engineering, "engineering"),
        (Department::Design, "design"),
        (Department::Product, "product"),
        (Department::Marketing, "marketing"),
        (Department::Operations, "operations"),
        (Department::Finance, "finance"),
    ];

    pub fn as_str(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(d, _)| *d == self)
            .map_or("", |(_, label)| *label)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("department", s, Self::LABELS)
    }
}

/// Position an applicant applies for and a member holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Role {
    Developer,
    Designer,
    ProductManager,
    Marketer,
    Coordinator,
    Analyst,
}

impl Role {
    const LABELS: &'static [(Role, &'static str)] = &[
        (Role::Developer, "developer"),
        (Role::Designer, "designer"),
        (Role::ProductManager, "product-manager"),
        (Role::Marketer, "marketer"),
        (Role::Coordinator, "coordinator"),
        (Role::Analyst, "analyst"),
    ];

    pub fn as_str(self) -> &'static str {
        Self::LABELS
            .iter()
            .find(|(r, _)| *r == self)
            .map_or("", |(_, label)| *label)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label("role", s, Self::LABELS)
    }
}

/// A person record. Applicants carry no role until they are promoted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: PersonKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<Department>,
}

impl User {
    /// A fresh applicant with no role or department yet.
    pub fn applicant(id: impl Into<UserId>, name: Option<String>) -> Self {
        Self {
            id: id.into(),
            name,
            kind: PersonKind::Applicant,
            role: None,
            department: None,
        }
    }

    /// Display name, empty when the record has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_labels() {
        for (role, label) in Role::LABELS {
            assert_eq!(role.as_str(), *label);
            assert_eq!(label.parse::<Role>().unwrap(), *role);
        }
    }

    #[test]
    fn role_accepts_underscored_input() {
        assert_eq!(
            "Product_Manager".parse::<Role>().unwrap(),
            Role::ProductManager
        );
    }

    #[test]
    fn department_rejects_unknown() {
        let err = "legal".parse::<Department>().unwrap_err();
        assert_eq!(err.kind, "department");
    }

    #[test]
    fn role_serializes_kebab_case() {
        let json = serde_json::to_string(&Role::ProductManager).unwrap();
        assert_eq!(json, "\"product-manager\"");
    }

    #[test]
    fn applicant_has_no_role() {
        let user = User::applicant("u1", Some("Ada".to_string()));
        assert_eq!(user.kind, PersonKind::Applicant);
        assert!(user.role.is_none());
        assert_eq!(user.display_name(), "Ada");
    }

    #[test]
    fn display_name_defaults_to_empty() {
        let user = User::applicant("u2", None);
        assert_eq!(user.display_name(), "");
    }

    #[test]
    fn user_json_omits_missing_fields() {
        let user = User::applicant("u3", None);
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({ "id": "u3", "kind": "applicant" }));
    }
}
