pub mod storage;

pub use storage::{Session, SessionStorage};

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use chrono::Utc;

use crate::model::UserId;
use crate::store::UserRepository;
use crate::store::sqlite::SqliteStore;

/// The sign-in state the decision flow can revoke.
///
/// After `invalidate` the caller must sign in again before acting; the
/// fresh session picks up any role change made in between.
#[async_trait]
pub trait SessionControl: Send + Sync {
    async fn invalidate(&self) -> Result<()>;
}

/// Sign in as an existing user, replacing any current session.
///
/// Used by the `orgdesk login` subcommand.
pub async fn login(db_path: &str, user_id: &UserId) -> Result<Session> {
    let store = SqliteStore::open(db_path).context("failed to open store")?;
    let Some(user) = store.get_by_id(user_id).await? else {
        bail!("no such user: {user_id}");
    };
    let session = Session {
        user_id: user.id,
        kind: user.kind,
        signed_in_at: Utc::now(),
    };
    let storage = SessionStorage::open(db_path).context("failed to open session storage")?;
    storage
        .set(&session)
        .context("failed to save session")?;
    tracing::info!(user_id = %session.user_id, kind = %session.kind, "signed in");
    Ok(session)
}

/// Drop the current session, if any.
pub fn logout(db_path: &str) -> Result<()> {
    let storage = SessionStorage::open(db_path).context("failed to open session storage")?;
    storage.clear().context("failed to remove session")?;
    Ok(())
}
