//! Company command handlers
//!
//! Company profile, dashboard aggregates and applicant tracking.

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;
use colored::*;

use jobline_client::JobBoardClient;
use jobline_core::dto::profile::{ApplicationStatus, UpdateCompanyProfile};

use crate::config::Config;
use crate::render::{print_applicant, print_company_profile, print_dashboard};

/// Company subcommands
#[derive(Subcommand)]
pub enum CompanyCommands {
    /// Show the company profile
    Profile,
    /// Update company profile fields and logo
    Update {
        /// Company name
        #[arg(long)]
        name: Option<String>,

        /// Industry
        #[arg(long)]
        industry: Option<String>,

        /// Company size bucket, e.g. "11-50"
        #[arg(long)]
        company_size: Option<String>,

        /// Website URL
        #[arg(long)]
        website: Option<String>,

        /// About text
        #[arg(long)]
        about: Option<String>,

        /// Path to a logo image to upload
        #[arg(long)]
        logo: Option<PathBuf>,
    },
    /// Show dashboard aggregates
    Dashboard,
    /// List applicants, optionally for one posting or one status
    Applicants {
        /// Restrict to one job posting
        #[arg(long)]
        job: Option<i64>,

        /// Restrict to one application status
        #[arg(long, value_parser = parse_status)]
        status: Option<ApplicationStatus>,
    },
    /// Move an application to a new status
    SetStatus {
        /// Application record id
        applicant_id: i64,

        /// New status: submitted, in-review, shortlisted, rejected, hired
        #[arg(value_parser = parse_status)]
        status: ApplicationStatus,
    },
}

/// Parse an application-status flag value
fn parse_status(s: &str) -> Result<ApplicationStatus> {
    ApplicationStatus::parse(s).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown status '{}', expected one of: submitted, in-review, shortlisted, rejected, hired",
            s
        )
    })
}

/// Handle company commands
pub async fn handle_company_command(command: CompanyCommands, config: &Config) -> Result<()> {
    let client = JobBoardClient::new(&config.api_url);

    match command {
        CompanyCommands::Profile => {
            match client.get_company_profile().await {
                Ok(profile) => print_company_profile(&profile),
                Err(e) if e.is_not_found() => {
                    println!("{}", "No company profile yet.".yellow());
                }
                Err(e) => return Err(e.into()),
            }
            Ok(())
        }
        CompanyCommands::Update {
            name,
            industry,
            company_size,
            website,
            about,
            logo,
        } => {
            let update = UpdateCompanyProfile {
                name,
                industry,
                company_size,
                website,
                about,
            };

            let profile = client
                .update_company_profile(&update, logo.as_deref())
                .await?;

            println!("{} Company profile updated", "✓".green());
            println!();
            print_company_profile(&profile);
            Ok(())
        }
        CompanyCommands::Dashboard => {
            let stats = client.get_company_dashboard().await?;
            print_dashboard(&stats);
            Ok(())
        }
        CompanyCommands::Applicants { job, status } => {
            let mut applicants = client.list_applicants(job).await?;
            if let Some(status) = status {
                applicants.retain(|a| a.status == status);
            }

            if applicants.is_empty() {
                println!("{}", "No applicants found.".yellow());
            } else {
                println!(
                    "{}",
                    format!("Found {} applicant(s):", applicants.len()).bold()
                );
                println!();
                for applicant in &applicants {
                    print_applicant(applicant);
                }
            }
            Ok(())
        }
        CompanyCommands::SetStatus {
            applicant_id,
            status,
        } => {
            client
                .update_application_status(applicant_id, status)
                .await?;
            println!(
                "{} Application {} moved to {}",
                "✓".green(),
                applicant_id.to_string().cyan(),
                status
            );
            Ok(())
        }
    }
}
