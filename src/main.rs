mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use orgdesk::consts::REPO;
use orgdesk::logging;
use orgdesk::model::{AppliedRoleId, Decision, Department, Role};

use commands::config::ConfigAction;
use commands::event::EventAction;
use commands::user::UserAction;

#[derive(Parser)]
#[command(
    name = "orgdesk",
    version,
    about = "Recruitment decisions and attendance events for your organization.",
    after_help = format!("Report issues at {REPO}/issues")
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// SQLite database file (default ~/.orgdesk/orgdesk.db)
    #[arg(short, long, global = true)]
    db: Option<String>,

    /// Log debug output to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in as an existing user
    Login { user_id: String },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Read or change stored settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Manage person records
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Apply for a role as the signed-in applicant
    Apply {
        #[arg(long)]
        role: Role,
        #[arg(long)]
        department: Department,
    },
    /// List the signed-in user's applications
    Applications,
    /// Accept or reject an offered role
    Decide {
        applied_role_id: String,
        decision: Decision,
        /// Skip the confirmation prompt
        #[arg(short, long, default_value_t = false)]
        yes: bool,
    },
    /// Create and inspect events
    Event {
        #[command(subcommand)]
        action: EventAction,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("warning: {e}");
    }

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    let db = commands::resolve_db(cli.db)?;

    match cli.command {
        Command::Login { user_id } => commands::login::run(&db, user_id).await?,
        Command::Logout => commands::logout::run(&db)?,
        Command::Whoami => commands::whoami::run(&db)?,
        Command::Config { action } => commands::config::run(&db, action)?,
        Command::User { action } => commands::user::run(&db, action).await?,
        Command::Apply { role, department } => commands::apply::run(&db, role, department).await?,
        Command::Applications => commands::applications::run(&db).await?,
        Command::Decide {
            applied_role_id,
            decision,
            yes,
        } => {
            return commands::decide::run(&db, AppliedRoleId(applied_role_id), decision, yes).await;
        }
        Command::Event { action } => commands::event::run(&db, action).await?,
    }
    Ok(ExitCode::SUCCESS)
}
