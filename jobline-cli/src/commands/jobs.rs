//! Job command handlers
//!
//! Handles browsing the job list with filters, viewing one posting, and
//! creating new postings.

use anyhow::Result;
use clap::Subcommand;
use colored::*;
use validator::Validate;

use jobline_client::{HttpJobRepository, JobBoardClient, JobRepository};
use jobline_core::domain::{FilterCriteria, SortKey};
use jobline_core::dto::job::CreateJobRequest;
use jobline_core::pipeline;

use crate::config::Config;
use crate::render::{print_job_card, print_job_record_details, print_pagination_bar};

/// Job subcommands
#[derive(Subcommand)]
pub enum JobCommands {
    /// Browse jobs with filters, sorting and paging
    Browse {
        /// Free-text keyword (title, company, description, tags)
        #[arg(short, long)]
        keyword: Option<String>,

        /// Location substring
        #[arg(short, long)]
        location: Option<String>,

        /// Job type, e.g. "full time"
        #[arg(short = 't', long)]
        job_type: Option<String>,

        /// Experience level
        #[arg(long)]
        experience: Option<String>,

        /// Salary band
        #[arg(long)]
        salary_band: Option<String>,

        /// Date-posted bucket
        #[arg(long)]
        posted: Option<String>,

        /// Industry
        #[arg(long)]
        industry: Option<String>,

        /// Education level
        #[arg(long)]
        education: Option<String>,

        /// Company size
        #[arg(long)]
        company_size: Option<String>,

        /// Sort order: relevance, recent, salary-high, salary-low
        #[arg(short, long, default_value = "relevance", value_parser = parse_sort_key)]
        sort: SortKey,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,
    },
    /// Get one job posting
    Get {
        /// Job id
        id: i64,
    },
    /// Post a new job
    Post {
        /// Job title
        #[arg(long)]
        title: String,

        /// Employer id the posting belongs to
        #[arg(long)]
        employer_id: i64,

        /// Job type in backend spelling, e.g. full_time
        #[arg(long)]
        job_type: String,

        /// Yearly base salary
        #[arg(long)]
        base_salary: i64,

        /// Job description
        #[arg(long)]
        description: String,

        /// Responsibilities
        #[arg(long, default_value = "")]
        responsibilities: String,

        /// Requirements
        #[arg(long, default_value = "")]
        requirements: String,

        /// Location
        #[arg(long)]
        location: String,
    },
}

/// Parse a sort key flag value
fn parse_sort_key(s: &str) -> Result<SortKey> {
    SortKey::parse(s).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown sort '{}', expected one of: relevance, recent, salary-high, salary-low",
            s
        )
    })
}

/// Handle job commands
///
/// Routes job subcommands to their respective handlers.
pub async fn handle_job_command(command: JobCommands, config: &Config) -> Result<()> {
    let client = JobBoardClient::new(&config.api_url);

    match command {
        JobCommands::Browse {
            keyword,
            location,
            job_type,
            experience,
            salary_band,
            posted,
            industry,
            education,
            company_size,
            sort,
            page,
        } => {
            let criteria = FilterCriteria {
                keyword,
                location,
                job_type,
                experience,
                salary_band,
                date_posted: posted,
                industry,
                education,
                company_size,
            };
            browse_jobs(client, &criteria, sort, page, config.page_size).await
        }
        JobCommands::Get { id } => get_job(&client, id).await,
        JobCommands::Post {
            title,
            employer_id,
            job_type,
            base_salary,
            description,
            responsibilities,
            requirements,
            location,
        } => {
            let req = CreateJobRequest {
                title,
                employer_id,
                job_type,
                base_salary,
                description,
                responsibilities,
                requirements,
                location,
            };
            post_job(&client, req).await
        }
    }
}

/// Fetch, filter, sort and show one page of jobs
async fn browse_jobs(
    client: JobBoardClient,
    criteria: &FilterCriteria,
    sort: SortKey,
    page: usize,
    page_size: usize,
) -> Result<()> {
    let repository = HttpJobRepository::new(client);
    let all = repository.fetch_all().await;

    let matched = pipeline::filter(&all, criteria).len();
    let total_pages = pipeline::total_pages(matched, page_size);
    // The pagination control never lands outside the valid range.
    let page = page.clamp(1, total_pages.max(1));

    let visible = pipeline::apply(&all, criteria, sort, page, page_size);

    if visible.is_empty() {
        if criteria.is_empty() {
            println!("{}", "No jobs available right now.".yellow());
        } else {
            println!("{}", "No jobs match your filters.".yellow());
        }
        return Ok(());
    }

    println!(
        "{}",
        format!("Showing {} of {} matching job(s):", visible.len(), matched).bold()
    );
    println!();
    for job in &visible {
        print_job_card(job);
    }

    print_pagination_bar(page, total_pages);

    Ok(())
}

/// Get and display a single job posting
async fn get_job(client: &JobBoardClient, id: i64) -> Result<()> {
    match client.get_job(id).await {
        Ok(record) => {
            print_job_record_details(&record);
            Ok(())
        }
        // Not-found is a display state, not a failure.
        Err(e) if e.is_not_found() => {
            println!("{}", format!("Job {} not found.", id).yellow());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Validate and submit a new posting
async fn post_job(client: &JobBoardClient, req: CreateJobRequest) -> Result<()> {
    if let Err(errors) = req.validate() {
        println!("{}", "The posting has problems:".red().bold());
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors {
                let message = error
                    .message
                    .as_deref()
                    .unwrap_or("invalid value");
                println!("  {} {}: {}", "✗".red(), field.cyan(), message);
            }
        }
        anyhow::bail!("job not posted");
    }

    let created = client.create_job(&req).await?;

    println!("{} Job posted with id {}", "✓".green(), created.id.to_string().cyan());
    Ok(())
}
