//! Document collections backing the handlers.
//!
//! Each collection is a trait so handlers can be tested against a store
//! that fails on purpose. [`sqlite::SqliteStore`] implements all of them.

pub mod sqlite;

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{AppliedRole, AppliedRoleId, Event, EventId, User, UserId};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &UserId) -> Result<Option<User>>;
    /// Insert or replace.
    async fn save(&self, user: &User) -> Result<()>;
}

#[async_trait]
pub trait AppliedRoleRepository: Send + Sync {
    async fn get(&self, id: &AppliedRoleId) -> Result<Option<AppliedRole>>;
    /// Insert or replace.
    async fn save(&self, applied_role: &AppliedRole) -> Result<()>;
    async fn list_for_applicant(&self, applicant_id: &UserId) -> Result<Vec<AppliedRole>>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Insert a new event. Fails if the id is already taken.
    async fn add(&self, event: &Event) -> Result<()>;
    async fn get(&self, id: &EventId) -> Result<Option<Event>>;
}
