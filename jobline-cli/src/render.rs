//! Terminal rendering helpers
//!
//! Job cards, posting details, applicant rows and the pagination bar.

use colored::*;

use jobline_core::domain::JobListing;
use jobline_core::dto::job::JobRecord;
use jobline_core::dto::profile::{
    ApplicantRecord, ApplicationStatus, CompanyProfile, DashboardStats, JobseekerProfile,
};
use jobline_core::pipeline;

/// How many page numbers the pagination bar shows at once
const PAGE_WINDOW: usize = 5;

/// Print one job's summary card
pub fn print_job_card(job: &JobListing) {
    println!("  {} {}", "▸".cyan(), job.title.bold());
    println!("    {} · {} · {}", job.company, job.location, job.job_type);
    println!("    {}", job.salary.green());
    if !job.tags.is_empty() {
        println!("    {}", job.tags.join(", ").dimmed());
    }
    println!("    Posted {}  (job {})", job.posted.dimmed(), job.id.dimmed());
    println!();
}

/// Print a full backend posting
pub fn print_job_record_details(record: &JobRecord) {
    println!("{}", "Job Details:".bold());
    println!("  ID:        {}", record.id.to_string().cyan());
    println!("  Title:     {}", record.title.bold());
    println!("  Type:      {}", record.job_type);
    println!("  Salary:    {}", record.base_salary.to_string().green());
    println!("  Location:  {}", record.location);
    println!(
        "  Created:   {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S")
    );
    println!("\n{}", "Description:".bold());
    println!("{}", record.description);
    if !record.responsibilities.is_empty() {
        println!("\n{}", "Responsibilities:".bold());
        println!("{}", record.responsibilities);
    }
    if !record.requirements.is_empty() {
        println!("\n{}", "Requirements:".bold());
        println!("{}", record.requirements);
    }
}

/// Print the pagination bar with the current page highlighted
pub fn print_pagination_bar(current: usize, total_pages: usize) {
    if total_pages <= 1 {
        return;
    }

    let window = pipeline::page_window(current, total_pages, PAGE_WINDOW);
    let mut bar = String::new();
    for page in window {
        if page == current {
            bar.push_str(&format!("[{}] ", page.to_string().bold()));
        } else {
            bar.push_str(&format!(" {}  ", page));
        }
    }
    println!("  Page {}", bar.trim_end());
    println!("  {}", format!("{} page(s) total", total_pages).dimmed());
}

/// Print a jobseeker profile
pub fn print_jobseeker_profile(profile: &JobseekerProfile) {
    println!("{}", "Jobseeker Profile:".bold());
    println!("  ID:        {}", profile.id.to_string().cyan());
    println!("  Name:      {}", profile.full_name.bold());
    if let Some(headline) = &profile.headline {
        println!("  Headline:  {}", headline);
    }
    if let Some(location) = &profile.location {
        println!("  Location:  {}", location);
    }
    if !profile.skills.is_empty() {
        println!("  Skills:    {}", profile.skills.join(", "));
    }
    if let Some(about) = &profile.about {
        println!("\n{}", "About:".bold());
        println!("{}", about);
    }
}

/// Print a company profile
pub fn print_company_profile(profile: &CompanyProfile) {
    println!("{}", "Company Profile:".bold());
    println!("  ID:        {}", profile.id.to_string().cyan());
    println!("  Name:      {}", profile.name.bold());
    if let Some(industry) = &profile.industry {
        println!("  Industry:  {}", industry);
    }
    if let Some(size) = &profile.company_size {
        println!("  Size:      {}", size);
    }
    if let Some(website) = &profile.website {
        println!("  Website:   {}", website);
    }
    if let Some(about) = &profile.about {
        println!("\n{}", "About:".bold());
        println!("{}", about);
    }
}

/// Print the company dashboard aggregates
pub fn print_dashboard(stats: &DashboardStats) {
    println!("{}", "Dashboard:".bold());
    println!("  Open jobs:        {}", stats.open_jobs.to_string().cyan());
    println!("  Total applicants: {}", stats.total_applicants.to_string().cyan());
    println!("  New this week:    {}", stats.new_this_week.to_string().cyan());
    println!("  Shortlisted:      {}", stats.shortlisted.to_string().cyan());
}

/// Print one applicant row
pub fn print_applicant(applicant: &ApplicantRecord) {
    println!(
        "  {} {} — {}",
        "▸".cyan(),
        applicant.applicant_name.bold(),
        applicant.job_title
    );
    println!(
        "    Status: {}   Applied: {}   (application {})",
        colorize_application_status(applicant.status),
        applicant
            .applied_at
            .format("%Y-%m-%d")
            .to_string()
            .dimmed(),
        applicant.id.to_string().dimmed()
    );
    println!();
}

/// Colorize an application status for display
pub fn colorize_application_status(status: ApplicationStatus) -> colored::ColoredString {
    let label = status.to_string();
    match status {
        ApplicationStatus::Submitted => label.yellow(),
        ApplicationStatus::InReview => label.cyan(),
        ApplicationStatus::Shortlisted => label.green(),
        ApplicationStatus::Rejected => label.red(),
        ApplicationStatus::Hired => label.green().bold(),
    }
}
