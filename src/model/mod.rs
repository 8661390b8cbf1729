//! Domain records shared by the recruitment and attendance flows.
//!
//! Every record is stored as a JSON document, so the serde attributes here
//! define the persisted shape.

pub mod applied_role;
pub mod event;
pub mod user;

pub use applied_role::{AppliedRole, AppliedRoleId, ApplicationStatus, Decision};
pub use event::{Attendee, CreateEvent, Event, EventId, parse_instant};
pub use user::{Department, PersonKind, Role, User, UserId};

/// A string that names no variant of a closed enumeration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

/// Case-insensitive lookup over a closed set of labelled variants.
/// Underscores and spaces in the input are read as hyphens.
pub(crate) fn parse_label<T: Copy>(
    kind: &'static str,
    input: &str,
    variants: &[(T, &'static str)],
) -> Result<T, ParseEnumError> {
    let normalized = input.trim().replace(['_', ' '], "-");
    variants
        .iter()
        .find(|(_, label)| label.eq_ignore_ascii_case(&normalized))
        .map(|(variant, _)| *variant)
        .ok_or_else(|| ParseEnumError {
            kind,
            value: input.to_string(),
            expected: variants
                .iter()
                .map(|(_, label)| *label)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Shade {
        Light,
        DarkBlue,
    }

    const SHADES: &[(Shade, &str)] = &[(Shade::Light, "light"), (Shade::DarkBlue, "dark-blue")];

    #[test]
    fn parse_label_ignores_case_and_separators() {
        assert_eq!(parse_label("shade", "LIGHT", SHADES).unwrap(), Shade::Light);
        assert_eq!(
            parse_label("shade", "dark_blue", SHADES).unwrap(),
            Shade::DarkBlue
        );
        assert_eq!(
            parse_label("shade", " Dark Blue ", SHADES).unwrap(),
            Shade::DarkBlue
        );
    }

    #[test]
    fn parse_label_lists_expected_values() {
        let err = parse_label("shade", "teal", SHADES).unwrap_err();
        assert_eq!(err.kind, "shade");
        assert_eq!(err.expected, "light, dark-blue");
        assert!(err.to_string().contains("teal"));
    }
}
