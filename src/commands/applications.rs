use anyhow::Result;

use orgdesk::model::AppliedRole;
use orgdesk::store::AppliedRoleRepository;
use orgdesk::store::sqlite::SqliteStore;

use super::require_session;

fn row(applied: &AppliedRole) -> String {
    format!(
        "  {}  {:<8}  {} in {}",
        applied.id,
        applied.status.to_string(),
        applied.role,
        applied.department
    )
}

pub async fn run(db: &str) -> Result<()> {
    let session = require_session(db)?;
    let store = SqliteStore::open(db)?;
    let applied = store.list_for_applicant(&session.user_id).await?;
    if applied.is_empty() {
        println!("  no applications");
    }
    for role in &applied {
        println!("{}", row(role));
    }
    Ok(())
}
