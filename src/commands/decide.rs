use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;

use orgdesk::auth::SessionStorage;
use orgdesk::model::{AppliedRoleId, Decision};
use orgdesk::notify::console::ConsoleNotifier;
use orgdesk::recruitment::RecruitmentApi;
use orgdesk::recruitment::modal::{Choice, DecisionModal, DecisionOutcome, PendingDecision, Refresh};
use orgdesk::recruitment::service::RecruitmentService;
use orgdesk::store::sqlite::SqliteStore;

/// Prints the application's status as stored after the update.
struct StatusRefresh<'a> {
    api: &'a dyn RecruitmentApi,
    id: &'a AppliedRoleId,
}

#[async_trait]
impl Refresh for StatusRefresh<'_> {
    async fn refresh(&self) -> Result<()> {
        let applied = self.api.applied_role(self.id).await?;
        println!("  application {}: {}", applied.id, applied.status);
        Ok(())
    }
}

fn prompt(title: &str) -> Result<Choice> {
    print!("{title} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(Choice::from_answer(&answer))
}

pub async fn run(
    db: &str,
    applied_role_id: AppliedRoleId,
    decision: Decision,
    yes: bool,
) -> Result<ExitCode> {
    let sessions = SessionStorage::open(db)?;
    let Some(session) = sessions.current()? else {
        bail!("not signed in; run `orgdesk login <user-id>` first");
    };

    let store = Arc::new(SqliteStore::open(db)?);
    let api = RecruitmentService::new(store.clone(), store);
    let applied_role = api.applied_role(&applied_role_id).await?;
    if applied_role.applicant_id != session.user_id {
        bail!(
            "application {} belongs to {}, not {}",
            applied_role.id,
            applied_role.applicant_id,
            session.user_id
        );
    }

    let pending = PendingDecision {
        applicant_id: session.user_id,
        applied_role,
        decision,
    };
    let choice = if yes {
        Choice::Confirm
    } else {
        prompt(pending.title())?
    };

    let notifier = ConsoleNotifier::new();
    let refresh = StatusRefresh {
        api: &api,
        id: &applied_role_id,
    };
    let modal = DecisionModal::new(&api, &notifier, &sessions);

    // The modal already reported any failure as an error toast.
    let Ok(outcome) = modal.resolve(&pending, choice, &refresh).await else {
        return Ok(ExitCode::FAILURE);
    };
    match outcome {
        DecisionOutcome::Cancelled => println!("  cancelled"),
        DecisionOutcome::Rejected => println!("  application rejected"),
        DecisionOutcome::Promoted => {
            println!(
                "  signed out. run `orgdesk login {}` to continue as a member",
                pending.applicant_id
            );
        }
    }
    Ok(ExitCode::SUCCESS)
}
