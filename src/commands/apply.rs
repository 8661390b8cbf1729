use std::sync::Arc;

use anyhow::Result;

use orgdesk::model::{Department, Role};
use orgdesk::recruitment::RecruitmentApi;
use orgdesk::recruitment::service::RecruitmentService;
use orgdesk::store::sqlite::SqliteStore;

use super::require_session;

pub async fn run(db: &str, role: Role, department: Department) -> Result<()> {
    let session = require_session(db)?;
    let store = Arc::new(SqliteStore::open(db)?);
    let api = RecruitmentService::new(store.clone(), store);
    let applied = api.apply(&session.user_id, role, department).await?;
    println!("✓ applied for {role} in {department}");
    println!("  application {}", applied.id);
    Ok(())
}
