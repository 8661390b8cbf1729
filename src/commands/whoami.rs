use anyhow::Result;

use orgdesk::auth::{Session, SessionStorage};

fn describe(session: Option<&Session>) -> Vec<String> {
    match session {
        Some(session) => vec![
            format!("  user    {}", session.user_id),
            format!("  kind    {}", session.kind),
            format!("  since   {}", session.signed_in_at.to_rfc3339()),
        ],
        None => vec!["  not signed in".to_string()],
    }
}

pub fn run(db: &str) -> Result<()> {
    let session = SessionStorage::open(db)?.current()?;
    for line in describe(session.as_ref()) {
        println!("{line}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use orgdesk::model::{PersonKind, UserId};

    #[test]
    fn signed_out() {
        assert_eq!(describe(None), vec!["  not signed in"]);
    }

    #[test]
    fn shows_user_and_kind() {
        let session = Session {
            user_id: UserId::from("u1"),
            kind: PersonKind::Member,
            signed_in_at: chrono::Utc::now(),
        };
        let lines = describe(Some(&session));
        assert_eq!(lines[0], "  user    u1");
        assert_eq!(lines[1], "  kind    member");
    }
}
