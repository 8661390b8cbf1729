//! Recruitment: applications, accept/reject decisions, member promotion.

pub mod mock;
pub mod modal;
pub mod service;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{AppliedRole, AppliedRoleId, ApplicationStatus, Department, Role, UserId};

/// The recruitment procedures a client may call.
///
/// [`service::RecruitmentService`] is the server-side implementation;
/// [`mock::MockRecruitment`] stands in for it in tests.
#[async_trait]
pub trait RecruitmentApi: Send + Sync {
    async fn update_applied_role_status(
        &self,
        applied_role_id: &AppliedRoleId,
        status: ApplicationStatus,
    ) -> Result<()>;

    async fn update_applicant_to_member(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<()>;

    /// File a new pending application.
    async fn apply(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<AppliedRole>;

    async fn applied_role(&self, applied_role_id: &AppliedRoleId) -> Result<AppliedRole>;
}
