use anyhow::Result;

use orgdesk::auth;
use orgdesk::model::UserId;

pub async fn run(db: &str, user_id: String) -> Result<()> {
    let session = auth::login(db, &UserId::new(user_id)).await?;
    println!("✓ signed in as {} ({})", session.user_id, session.kind);
    Ok(())
}
