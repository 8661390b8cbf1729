use std::sync::Arc;

use async_trait::async_trait;

use super::RecruitmentApi;
use crate::error::{Error, Result};
use crate::model::{
    AppliedRole, AppliedRoleId, ApplicationStatus, Department, PersonKind, Role, User, UserId,
};
use crate::store::{AppliedRoleRepository, UserRepository};

/// Server-side handlers for the recruitment procedures.
pub struct RecruitmentService {
    users: Arc<dyn UserRepository>,
    applied_roles: Arc<dyn AppliedRoleRepository>,
}

impl RecruitmentService {
    pub fn new(users: Arc<dyn UserRepository>, applied_roles: Arc<dyn AppliedRoleRepository>) -> Self {
        Self {
            users,
            applied_roles,
        }
    }

    async fn applicant(&self, applicant_id: &UserId) -> Result<User> {
        let user = self
            .users
            .get_by_id(applicant_id)
            .await?
            .ok_or_else(|| Error::not_found("user", applicant_id))?;
        if user.kind != PersonKind::Applicant {
            return Err(Error::NotAnApplicant(user.id));
        }
        Ok(user)
    }
}

/// A replayed promotion finds the person already holding the target position.
fn is_member_as(user: &User, role: Role, department: Department) -> bool {
    user.kind == PersonKind::Member
        && user.role == Some(role)
        && user.department == Some(department)
}

#[async_trait]
impl RecruitmentApi for RecruitmentService {
    async fn update_applied_role_status(
        &self,
        applied_role_id: &AppliedRoleId,
        status: ApplicationStatus,
    ) -> Result<()> {
        let mut applied_role = self.applied_role(applied_role_id).await?;
        if !applied_role.status.can_become(status) {
            return Err(Error::InvalidTransition {
                from: applied_role.status,
                to: status,
            });
        }
        if applied_role.status == status {
            tracing::debug!(%applied_role_id, %status, "status unchanged");
            return Ok(());
        }
        applied_role.status = status;
        self.applied_roles.save(&applied_role).await?;
        tracing::info!(%applied_role_id, %status, "application status updated");
        Ok(())
    }

    async fn update_applicant_to_member(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<()> {
        let mut user = self
            .users
            .get_by_id(applicant_id)
            .await?
            .ok_or_else(|| Error::not_found("user", applicant_id))?;
        if is_member_as(&user, role, department) {
            tracing::debug!(%applicant_id, %role, %department, "already a member");
            return Ok(());
        }
        if user.kind != PersonKind::Applicant {
            return Err(Error::NotAnApplicant(user.id));
        }
        user.kind = PersonKind::Member;
        user.role = Some(role);
        user.department = Some(department);
        self.users.save(&user).await?;
        tracing::info!(%applicant_id, %role, %department, "applicant promoted to member");
        Ok(())
    }

    async fn apply(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<AppliedRole> {
        let applicant = self.applicant(applicant_id).await?;
        let applied_role = AppliedRole::pending(applicant.id, role, department);
        self.applied_roles.save(&applied_role).await?;
        tracing::info!(applied_role_id = %applied_role.id, %applicant_id, %role, "application filed");
        Ok(applied_role)
    }

    async fn applied_role(&self, applied_role_id: &AppliedRoleId) -> Result<AppliedRole> {
        self.applied_roles
            .get(applied_role_id)
            .await?
            .ok_or_else(|| Error::not_found("applied role", applied_role_id))
    }
}
