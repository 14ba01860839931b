//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod account;
mod company;
mod jobs;
mod seeker;

pub use account::AccountCommands;
pub use company::CompanyCommands;
pub use jobs::JobCommands;
pub use seeker::SeekerCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse, view and post jobs
    Jobs {
        #[command(subcommand)]
        command: JobCommands,
    },
    /// Register, sign in and sign out
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },
    /// Jobseeker profile management
    Seeker {
        #[command(subcommand)]
        command: SeekerCommands,
    },
    /// Company profile, dashboard and applicants
    Company {
        #[command(subcommand)]
        command: CompanyCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Jobs { command } => jobs::handle_job_command(command, config).await,
        Commands::Account { command } => account::handle_account_command(command, config).await,
        Commands::Seeker { command } => seeker::handle_seeker_command(command, config).await,
        Commands::Company { command } => company::handle_company_command(command, config).await,
    }
}
