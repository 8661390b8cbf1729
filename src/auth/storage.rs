use std::sync::{Mutex, MutexGuard};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rusqlite::{Connection, OptionalExtension};
use serde::{Deserialize, Serialize};

use super::SessionControl;
use crate::model::{PersonKind, UserId};

/// The single row key the current session lives under.
const CURRENT: &str = "current";

/// Who is signed in, and as what. `kind` is captured at sign-in and goes
/// stale after a promotion, which is why promotion invalidates the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub kind: PersonKind,
    pub signed_in_at: DateTime<Utc>,
}

/// Manages the signed-in session in SQLite.
pub struct SessionStorage {
    conn: Mutex<Connection>,
}

impl SessionStorage {
    /// Open or create the session table in the given database path.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS session (
                slot TEXT PRIMARY KEY,
                data TEXT NOT NULL
            )",
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow!("session connection poisoned"))
    }

    pub fn current(&self) -> Result<Option<Session>> {
        let conn = self.conn()?;
        let json: Option<String> = conn
            .query_row("SELECT data FROM session WHERE slot = ?1", [CURRENT], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(json.map(|json| serde_json::from_str(&json)).transpose()?)
    }

    /// Replace the current session.
    pub fn set(&self, session: &Session) -> Result<()> {
        let json = serde_json::to_string(session)?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO session (slot, data) VALUES (?1, ?2)
             ON CONFLICT(slot) DO UPDATE SET data = excluded.data",
            [CURRENT, &json],
        )?;
        Ok(())
    }

    pub fn clear(&self) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM session WHERE slot = ?1", [CURRENT])?;
        Ok(())
    }
}

#[async_trait]
impl SessionControl for SessionStorage {
    async fn invalidate(&self) -> Result<()> {
        self.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(user: &str, kind: PersonKind) -> Session {
        Session {
            user_id: UserId::from(user),
            kind,
            signed_in_at: Utc::now(),
        }
    }

    #[test]
    fn current_is_none_when_signed_out() {
        let storage = SessionStorage::open(":memory:").unwrap();
        assert!(storage.current().unwrap().is_none());
    }

    #[test]
    fn set_replaces_previous_session() {
        let storage = SessionStorage::open(":memory:").unwrap();
        storage.set(&session("u1", PersonKind::Applicant)).unwrap();
        storage.set(&session("u2", PersonKind::Member)).unwrap();

        let current = storage.current().unwrap().unwrap();
        assert_eq!(current.user_id, UserId::from("u2"));
        assert_eq!(current.kind, PersonKind::Member);
    }

    #[tokio::test]
    async fn invalidate_clears_session() {
        let storage = SessionStorage::open(":memory:").unwrap();
        storage.set(&session("u1", PersonKind::Applicant)).unwrap();
        storage.invalidate().await.unwrap();
        assert!(storage.current().unwrap().is_none());
    }

    #[test]
    fn clear_when_signed_out_is_ok() {
        SessionStorage::open(":memory:").unwrap().clear().unwrap();
    }
}
