//! Accept/reject confirmation for an applicant's offer.
//!
//! Confirming runs one sequential chain: status update, refresh, and on
//! accept the promotion plus session invalidation. Each step starts only
//! after the previous call completed. Nothing is retried or rolled back;
//! a failed promotion after a successful status write is reported as
//! [`Error::PromotionFailed`], and a session that could not be ended after
//! the promotion as [`Error::SessionNotInvalidated`].

use async_trait::async_trait;

use super::RecruitmentApi;
use crate::auth::SessionControl;
use crate::error::{Error, Result};
use crate::model::{AppliedRole, ApplicationStatus, Decision, UserId};
use crate::notify::{Notifier, Toast, ToastId};

const ERROR_TITLE: &str = "Oops, an error occurred!";

/// Re-reads whatever view shows the application once the status changed.
#[async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self) -> anyhow::Result<()>;
}

/// A refresh that does nothing.
pub struct NoRefresh;

#[async_trait]
impl Refresh for NoRefresh {
    async fn refresh(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

/// The answer to the confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Confirm,
    Cancel,
}

impl Choice {
    /// Read a `[y/N]` answer. Anything but yes cancels.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Choice::Confirm,
            _ => Choice::Cancel,
        }
    }
}

/// A decision waiting for confirmation.
#[derive(Debug, Clone)]
pub struct PendingDecision {
    pub applicant_id: UserId,
    pub applied_role: AppliedRole,
    pub decision: Decision,
}

impl PendingDecision {
    pub fn title(&self) -> &'static str {
        self.decision.confirm_title()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// Dismissed without side effects.
    Cancelled,
    /// Status set to REJECTED.
    Rejected,
    /// Status set to ACCEPTED and the applicant is now a member. The session
    /// was invalidated; the caller has to sign in again.
    Promoted,
}

/// Runs a confirmed decision against its collaborators.
pub struct DecisionModal<'a> {
    api: &'a dyn RecruitmentApi,
    notifier: &'a dyn Notifier,
    session: &'a dyn SessionControl,
}

impl<'a> DecisionModal<'a> {
    pub fn new(
        api: &'a dyn RecruitmentApi,
        notifier: &'a dyn Notifier,
        session: &'a dyn SessionControl,
    ) -> Self {
        Self {
            api,
            notifier,
            session,
        }
    }

    /// Resolve the prompt. On failure an error toast is shown and the error
    /// is returned as well.
    pub async fn resolve(
        &self,
        pending: &PendingDecision,
        choice: Choice,
        refresh: &dyn Refresh,
    ) -> Result<DecisionOutcome> {
        if choice == Choice::Cancel {
            tracing::debug!(applied_role_id = %pending.applied_role.id, "decision cancelled");
            return Ok(DecisionOutcome::Cancelled);
        }

        let loading = self
            .notifier
            .show(Toast::loading("Updating", "Waiting to update..."))
            .await;
        let mut loading = Some(loading);

        let result = self.confirm(pending, refresh, &mut loading).await;

        if let Some(id) = loading.take() {
            self.notifier.close(id).await;
        }
        if let Err(e) = &result {
            tracing::warn!(
                applied_role_id = %pending.applied_role.id,
                error = %e,
                "decision failed"
            );
            self.notifier
                .show(Toast::error(ERROR_TITLE, e.to_string()))
                .await;
        }
        result
    }

    async fn confirm(
        &self,
        pending: &PendingDecision,
        refresh: &dyn Refresh,
        loading: &mut Option<ToastId>,
    ) -> Result<DecisionOutcome> {
        let status = pending.decision.target_status();
        let applied_role = &pending.applied_role;

        self.api
            .update_applied_role_status(&applied_role.id, status)
            .await?;
        refresh.refresh().await?;

        if let Some(id) = loading.take() {
            self.notifier.close(id).await;
        }
        self.notifier
            .show(Toast::success(
                "Success",
                "Application status updated successfully!",
            ))
            .await;

        if status != ApplicationStatus::Accepted {
            return Ok(DecisionOutcome::Rejected);
        }

        self.api
            .update_applicant_to_member(
                &pending.applicant_id,
                applied_role.role,
                applied_role.department,
            )
            .await
            .map_err(|e| Error::PromotionFailed {
                status,
                source: Box::new(e),
            })?;

        self.session
            .invalidate()
            .await
            .map_err(|source| Error::SessionNotInvalidated { source })?;

        self.notifier
            .show(Toast::success(
                "Re-login",
                "You are now a member. We will require a re-login, so you are being logged out",
            ))
            .await;
        tracing::info!(
            applicant_id = %pending.applicant_id,
            role = %applied_role.role,
            "member promoted, session invalidated"
        );
        Ok(DecisionOutcome::Promoted)
    }
}
