use anyhow::{Result, bail};
use clap::Subcommand;

use orgdesk::model::{Department, PersonKind, Role, User, UserId};
use orgdesk::store::UserRepository;
use orgdesk::store::sqlite::SqliteStore;

#[derive(Subcommand)]
pub enum UserAction {
    /// Add or replace a person record (an applicant unless --member)
    Add {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, default_value_t = false, requires_all = ["role", "department"])]
        member: bool,
        #[arg(long)]
        role: Option<Role>,
        #[arg(long)]
        department: Option<Department>,
    },
    Show { id: String },
}

pub async fn run(db: &str, action: UserAction) -> Result<()> {
    let store = SqliteStore::open(db)?;
    match action {
        UserAction::Add {
            id,
            name,
            member,
            role,
            department,
        } => {
            let user = User {
                id: UserId::new(id),
                name,
                kind: if member {
                    PersonKind::Member
                } else {
                    PersonKind::Applicant
                },
                role,
                department,
            };
            store.save(&user).await?;
            println!("✓ saved {} ({})", user.id, user.kind);
        }
        UserAction::Show { id } => {
            let id = UserId::new(id);
            let Some(user) = store.get_by_id(&id).await? else {
                bail!("no such user: {id}");
            };
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
    }
    Ok(())
}
