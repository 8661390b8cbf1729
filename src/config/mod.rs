//! Key-value settings stored next to the documents.
//!
//! Shares a database with [`SqliteStore`](crate::store::sqlite::SqliteStore)
//! and [`SessionStorage`](crate::auth::SessionStorage). Pass the same path
//! to all three.

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

use crate::consts::{DEFAULT_DOMAIN, DOMAIN_ENV_VAR};

/// Config key holding the public base URL used in QR check-in links.
pub const DOMAIN_KEY: &str = "domain";

/// Persistent key-value configuration store.
pub struct Config {
    conn: Mutex<Connection>,
}

impl Config {
    /// Open or create the config table in the given database.
    pub fn open(path: &str) -> Result<Self> {
        let conn = Connection::open(path).context("failed to open config database")?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS config (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
        )
        .context("failed to create config table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| anyhow!("config connection poisoned"))
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn()?;
        let value = conn
            .query_row("SELECT value FROM config WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Set a config value (upsert).
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO config (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM config WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Base domain for event links.
    /// The explicit flag wins, then the stored `domain`, then `ORGDESK_DOMAIN`,
    /// then the default.
    pub fn resolve_domain(&self, explicit: Option<&str>) -> Result<String> {
        let env = std::env::var(DOMAIN_ENV_VAR).ok();
        Ok(pick_domain(explicit, self.get(DOMAIN_KEY)?, env))
    }
}

fn pick_domain(explicit: Option<&str>, stored: Option<String>, env: Option<String>) -> String {
    explicit
        .map(str::to_string)
        .into_iter()
        .chain(stored)
        .chain(env)
        .find(|d| !d.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_DOMAIN.to_string())
}
