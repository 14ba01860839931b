//! Account command handlers
//!
//! Register, sign in and sign out.

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use jobline_client::JobBoardClient;
use jobline_core::dto::user::{CreateUser, LoginRequest};

use crate::config::Config;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Create a new account
    Register {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Account role: jobseeker or employer
        #[arg(long, default_value = "jobseeker")]
        role: String,
    },
    /// Sign in
    Login {
        /// Email address
        #[arg(long)]
        email: String,

        /// Password
        #[arg(long)]
        password: String,
    },
    /// Sign out the current session
    Logout,
}

/// Handle account commands
pub async fn handle_account_command(command: AccountCommands, config: &Config) -> Result<()> {
    let client = JobBoardClient::new(&config.api_url);

    match command {
        AccountCommands::Register {
            email,
            password,
            role,
        } => {
            if role != "jobseeker" && role != "employer" {
                anyhow::bail!("role must be 'jobseeker' or 'employer', got '{}'", role);
            }
            let user = client
                .create_user(&CreateUser {
                    email,
                    password,
                    role,
                })
                .await?;
            println!(
                "{} Registered {} as {}",
                "✓".green(),
                user.email.cyan(),
                user.role
            );
            Ok(())
        }
        AccountCommands::Login { email, password } => {
            let user = client.login(&LoginRequest { email, password }).await?;
            println!("{} Signed in as {}", "✓".green(), user.email.cyan());
            Ok(())
        }
        AccountCommands::Logout => {
            client.logout().await?;
            println!("{} Signed out", "✓".green());
            Ok(())
        }
    }
}
