//! Jobseeker command handlers
//!
//! Profile viewing and updating, including resume and picture uploads.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;

use jobline_client::JobBoardClient;
use jobline_core::dto::profile::UpdateJobseekerProfile;

use crate::config::Config;
use crate::render::print_jobseeker_profile;

/// Jobseeker subcommands
#[derive(Subcommand)]
pub enum SeekerCommands {
    /// Show the signed-in jobseeker's profile
    Profile,
    /// Update profile fields and uploads
    Update {
        /// Full name
        #[arg(long)]
        name: Option<String>,

        /// Headline, e.g. "Frontend Developer"
        #[arg(long)]
        headline: Option<String>,

        /// Location
        #[arg(long)]
        location: Option<String>,

        /// Skills (comma-separated)
        #[arg(long, value_delimiter = ',')]
        skills: Vec<String>,

        /// About text
        #[arg(long)]
        about: Option<String>,

        /// Path to a profile picture to upload
        #[arg(long)]
        profile_pic: Option<PathBuf>,

        /// Path to a resume to upload
        #[arg(long)]
        resume: Option<PathBuf>,
    },
    /// Download a jobseeker's resume
    Resume {
        /// Jobseeker profile id
        id: i64,

        /// Output file path
        #[arg(short, long, default_value = "resume.pdf")]
        output: PathBuf,
    },
}

/// Handle jobseeker commands
pub async fn handle_seeker_command(command: SeekerCommands, config: &Config) -> Result<()> {
    let client = JobBoardClient::new(&config.api_url);

    match command {
        SeekerCommands::Profile => {
            match client.get_jobseeker_profile().await {
                Ok(profile) => print_jobseeker_profile(&profile),
                Err(e) if e.is_not_found() => {
                    println!("{}", "No jobseeker profile yet.".yellow());
                }
                Err(e) => return Err(e.into()),
            }
            Ok(())
        }
        SeekerCommands::Update {
            name,
            headline,
            location,
            skills,
            about,
            profile_pic,
            resume,
        } => {
            let update = UpdateJobseekerProfile {
                full_name: name,
                headline,
                location,
                skills: if skills.is_empty() { None } else { Some(skills) },
                about,
            };

            let profile = client
                .update_jobseeker_profile(&update, profile_pic.as_deref(), resume.as_deref())
                .await?;

            println!("{} Profile updated", "✓".green());
            println!();
            print_jobseeker_profile(&profile);
            Ok(())
        }
        SeekerCommands::Resume { id, output } => {
            let bytes = client.get_jobseeker_resume(id).await?;
            tokio::fs::write(&output, &bytes)
                .await
                .with_context(|| format!("Failed to write {}", output.display()))?;
            println!(
                "{} Saved {} byte(s) to {}",
                "✓".green(),
                bytes.len(),
                output.display().to_string().cyan()
            );
            Ok(())
        }
    }
}
