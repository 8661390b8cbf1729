use std::sync::{Mutex, MutexGuard};

use anyhow::{Context, Result, anyhow, bail};
use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{AppliedRoleRepository, EventRepository, UserRepository};
use crate::model::{AppliedRole, AppliedRoleId, Event, EventId, User, UserId};

const USERS: &str = "users";
const APPLIED_ROLES: &str = "applied_roles";
const EVENTS: &str = "events";

/// SQLite-backed document store. One table per collection, one JSON
/// document per row.
///
/// Shares a database file with [`Config`](crate::config::Config) and
/// [`SessionStorage`](crate::auth::SessionStorage).
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open or create the collections in the given database.
    /// Use `":memory:"` for tests.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open store database")?;
        for table in [USERS, APPLIED_ROLES, EVENTS] {
            conn.execute_batch(&format!(
                "CREATE TABLE IF NOT EXISTS {table} (
                    id   TEXT PRIMARY KEY,
                    data TEXT NOT NULL
                )"
            ))
            .with_context(|| format!("failed to create {table} table"))?;
        }
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow!("store connection poisoned"))
    }

    fn get_doc<T: DeserializeOwned>(&self, table: &str, id: &str) -> Result<Option<T>> {
        let conn = self.conn()?;
        let json: Option<String> = conn
            .query_row(
                &format!("SELECT data FROM {table} WHERE id = ?1"),
                [id],
                |row| row.get(0),
            )
            .optional()?;
        json.map(|json| {
            serde_json::from_str(&json).with_context(|| format!("corrupt {table} document {id}"))
        })
        .transpose()
    }

    fn put_doc<T: Serialize>(&self, table: &str, id: &str, doc: &T) -> Result<()> {
        let json = serde_json::to_string(doc)?;
        let conn = self.conn()?;
        conn.execute(
            &format!(
                "INSERT INTO {table} (id, data) VALUES (?1, ?2)
                 ON CONFLICT(id) DO UPDATE SET data = excluded.data"
            ),
            params![id, json],
        )?;
        Ok(())
    }
}

#[async_trait]
impl UserRepository for SqliteStore {
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>> {
        self.get_doc(USERS, id.as_str())
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.put_doc(USERS, user.id.as_str(), user)
    }
}

#[async_trait]
impl AppliedRoleRepository for SqliteStore {
    async fn get(&self, id: &AppliedRoleId) -> Result<Option<AppliedRole>> {
        self.get_doc(APPLIED_ROLES, id.as_str())
    }

    async fn save(&self, applied_role: &AppliedRole) -> Result<()> {
        self.put_doc(APPLIED_ROLES, applied_role.id.as_str(), applied_role)
    }

    async fn list_for_applicant(&self, applicant_id: &UserId) -> Result<Vec<AppliedRole>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT data FROM applied_roles
             WHERE json_extract(data, '$.applicantId') = ?1
             ORDER BY rowid ASC",
        )?;
        let jsons = stmt
            .query_map([applicant_id.as_str()], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        let roles = jsons
            .iter()
            .map(|json| serde_json::from_str(json))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(roles)
    }
}

#[async_trait]
impl EventRepository for SqliteStore {
    async fn add(&self, event: &Event) -> Result<()> {
        let id = event.id.to_string();
        let json = serde_json::to_string(event)?;
        let conn = self.conn()?;
        let inserted = conn.execute(
            "INSERT INTO events (id, data) VALUES (?1, ?2) ON CONFLICT(id) DO NOTHING",
            params![id, json],
        )?;
        if inserted == 0 {
            bail!("event {id} already exists");
        }
        Ok(())
    }

    async fn get(&self, id: &EventId) -> Result<Option<Event>> {
        self.get_doc(EVENTS, &id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Department, Role};

    #[tokio::test]
    async fn missing_user_is_none() {
        let store = SqliteStore::in_memory().unwrap();
        assert!(store.get_by_id(&UserId::from("nobody")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_replaces_existing_user() {
        let store = SqliteStore::in_memory().unwrap();
        UserRepository::save(&store, &User::applicant("u1", Some("Ada".to_string())))
            .await
            .unwrap();
        UserRepository::save(
            &store,
            &User::applicant("u1", Some("Ada Lovelace".to_string())),
        )
        .await
        .unwrap();

        let user = store.get_by_id(&UserId::from("u1")).await.unwrap().unwrap();
        assert_eq!(user.display_name(), "Ada Lovelace");
    }

    #[tokio::test]
    async fn list_for_applicant_filters_and_keeps_order() {
        let store = SqliteStore::in_memory().unwrap();
        let first = AppliedRole::pending(UserId::from("u1"), Role::Developer, Department::Engineering);
        let other = AppliedRole::pending(UserId::from("u2"), Role::Analyst, Department::Finance);
        let second = AppliedRole::pending(UserId::from("u1"), Role::Designer, Department::Design);
        for role in [&first, &other, &second] {
            AppliedRoleRepository::save(&store, role).await.unwrap();
        }

        let roles = store.list_for_applicant(&UserId::from("u1")).await.unwrap();
        assert_eq!(roles, vec![first, second]);
    }

    #[tokio::test]
    async fn corrupt_document_is_an_error() {
        let store = SqliteStore::in_memory().unwrap();
        store
            .conn()
            .unwrap()
            .execute(
                "INSERT INTO users (id, data) VALUES ('bad', 'not json')",
                [],
            )
            .unwrap();
        let err = store.get_by_id(&UserId::from("bad")).await.unwrap_err();
        assert!(err.to_string().contains("corrupt users document"));
    }
}
