//! One handler per CLI subcommand.
//!
//! Every handler takes the resolved database path. Store, session and config
//! each open their own connection to it, so the path must name a file.

pub mod applications;
pub mod apply;
pub mod config;
pub mod decide;
pub mod event;
pub mod login;
pub mod logout;
pub mod user;
pub mod whoami;

use anyhow::{Context, Result, bail};

use orgdesk::auth::{Session, SessionStorage};
use orgdesk::consts::default_db_path;

/// Pick the database path: the `--db` flag, else `~/.orgdesk/orgdesk.db`.
///
/// `:memory:` is refused because every collaborator would get its own
/// empty database.
pub fn resolve_db(flag: Option<String>) -> Result<String> {
    if let Some(db) = flag {
        if db.trim() == ":memory:" {
            bail!("--db :memory: is not supported; pass a file path");
        }
        return Ok(db);
    }
    let path = default_db_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    Ok(path.to_string_lossy().into_owned())
}

pub fn require_session(db: &str) -> Result<Session> {
    match SessionStorage::open(db)?.current()? {
        Some(session) => Ok(session),
        None => bail!("not signed in; run `orgdesk login <user-id>` first"),
    }
}
