use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use super::RecruitmentApi;
use crate::error::{Error, Result};
use crate::model::{AppliedRole, AppliedRoleId, ApplicationStatus, Department, Role, UserId};

/// A call received by [`MockRecruitment`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    UpdateStatus {
        applied_role_id: AppliedRoleId,
        status: ApplicationStatus,
    },
    Promote {
        applicant_id: UserId,
        role: Role,
        department: Department,
    },
    Apply {
        applicant_id: UserId,
    },
    Get {
        applied_role_id: AppliedRoleId,
    },
}

/// Scripted recruitment endpoint for tests. Records every call and fails
/// the procedures it was told to fail.
#[derive(Default)]
pub struct MockRecruitment {
    calls: Mutex<Vec<Call>>,
    fail_status: Option<String>,
    fail_promotion: Option<String>,
}

impl MockRecruitment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `update_applied_role_status` fail with `message`.
    pub fn failing_status(mut self, message: &str) -> Self {
        self.fail_status = Some(message.to_string());
        self
    }

    /// Make `update_applicant_to_member` fail with `message`.
    pub fn failing_promotion(mut self, message: &str) -> Self {
        self.fail_promotion = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn promotions(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::Promote { .. }))
            .count()
    }

    fn record(&self, call: Call) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

fn scripted(failure: Option<&String>) -> Result<()> {
    match failure {
        Some(message) => Err(Error::Storage(anyhow!("{message}"))),
        None => Ok(()),
    }
}

#[async_trait]
impl RecruitmentApi for MockRecruitment {
    async fn update_applied_role_status(
        &self,
        applied_role_id: &AppliedRoleId,
        status: ApplicationStatus,
    ) -> Result<()> {
        self.record(Call::UpdateStatus {
            applied_role_id: applied_role_id.clone(),
            status,
        });
        scripted(self.fail_status.as_ref())
    }

    async fn update_applicant_to_member(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<()> {
        self.record(Call::Promote {
            applicant_id: applicant_id.clone(),
            role,
            department,
        });
        scripted(self.fail_promotion.as_ref())
    }

    async fn apply(
        &self,
        applicant_id: &UserId,
        role: Role,
        department: Department,
    ) -> Result<AppliedRole> {
        self.record(Call::Apply {
            applicant_id: applicant_id.clone(),
        });
        Ok(AppliedRole::pending(applicant_id.clone(), role, department))
    }

    async fn applied_role(&self, applied_role_id: &AppliedRoleId) -> Result<AppliedRole> {
        self.record(Call::Get {
            applied_role_id: applied_role_id.clone(),
        });
        Err(Error::not_found("applied role", applied_role_id))
    }
}
