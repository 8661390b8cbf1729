use anyhow::Result;

use orgdesk::auth;

pub fn run(db: &str) -> Result<()> {
    auth::logout(db)?;
    println!("✓ signed out");
    Ok(())
}
