//! Backend record to display-shape mapping
//!
//! Every backend record maps to exactly one [`JobListing`]; missing optional
//! fields fall back to fixed placeholders so the mapping is total. The
//! current time is a parameter of the relative-date label, which keeps the
//! whole module a pure function of its inputs.

use chrono::{DateTime, Utc};

use crate::domain::JobListing;
use crate::dto::job::JobRecord;

/// Logo shown when the backend record carries none.
pub const PLACEHOLDER_LOGO_URL: &str = "/assets/company-placeholder.png";

/// Tags shown when the backend record carries none.
pub const DEFAULT_TAGS: [&str; 3] = ["communication", "teamwork", "problem solving"];

impl JobListing {
    /// Map one backend record into its display shape.
    pub fn from_record(record: JobRecord, now: DateTime<Utc>) -> Self {
        let company = record
            .company_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| format!("Employer #{}", record.employer_id));

        let tags = record
            .tags
            .filter(|tags| !tags.is_empty())
            .unwrap_or_else(|| DEFAULT_TAGS.iter().map(|t| t.to_string()).collect());

        JobListing {
            id: record.id.to_string(),
            title: record.title,
            company,
            job_type: humanize_job_type(&record.job_type),
            salary: format_salary(record.base_salary),
            description: record.description,
            location: record.location,
            posted: relative_posted_label(record.created_at, now),
            tags,
            logo_url: record.logo_url.unwrap_or_else(|| PLACEHOLDER_LOGO_URL.to_string()),
        }
    }
}

/// Turn the backend's snake_case job type into a display label:
/// "full_time" becomes "full time".
pub fn humanize_job_type(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a yearly base salary: 85000 becomes "$85,000 per year".
pub fn format_salary(base_salary: i64) -> String {
    format!("${} per year", group_thousands(base_salary))
}

fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Coarse relative label for a posting timestamp.
///
/// Timestamps in the future (clock skew between client and backend) are
/// treated as "today".
pub fn relative_posted_label(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let days = now.signed_duration_since(created_at).num_days().max(0);
    match days {
        0 => "today".to_string(),
        1 => "1 day ago".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=13 => "1 week ago".to_string(),
        14..=29 => format!("{} weeks ago", days / 7),
        30..=59 => "1 month ago".to_string(),
        _ => format!("{} months ago", days / 30),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> JobRecord {
        JobRecord {
            id: 42,
            title: "Frontend Developer".to_string(),
            employer_id: 9,
            job_type: "full_time".to_string(),
            base_salary: 85_000,
            description: "Build the job board UI.".to_string(),
            responsibilities: "Components, pages".to_string(),
            requirements: "React, CSS".to_string(),
            location: "Lagos".to_string(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 10, 9, 0, 0).unwrap(),
            company_name: Some("Acme Corp".to_string()),
            tags: Some(vec!["React".to_string(), "CSS".to_string()]),
            logo_url: None,
        }
    }

    #[test]
    fn maps_job_type_and_salary() {
        let now = Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap();
        let listing = JobListing::from_record(record(), now);
        assert_eq!(listing.job_type, "full time");
        assert_eq!(listing.salary, "$85,000 per year");
    }

    #[test]
    fn missing_optionals_fall_back_to_placeholders() {
        let mut rec = record();
        rec.company_name = None;
        rec.tags = None;
        let now = Utc.with_ymd_and_hms(2026, 8, 10, 12, 0, 0).unwrap();
        let listing = JobListing::from_record(rec, now);
        assert_eq!(listing.company, "Employer #9");
        assert_eq!(listing.tags, DEFAULT_TAGS);
        assert_eq!(listing.logo_url, PLACEHOLDER_LOGO_URL);
    }

    #[test]
    fn humanize_handles_hyphens_and_case() {
        assert_eq!(humanize_job_type("Part-Time"), "part time");
        assert_eq!(humanize_job_type("contract"), "contract");
    }

    #[test]
    fn salary_grouping() {
        assert_eq!(format_salary(900), "$900 per year");
        assert_eq!(format_salary(1_250_000), "$1,250,000 per year");
        assert_eq!(format_salary(0), "$0 per year");
    }

    #[test]
    fn relative_labels_cover_the_coarse_buckets() {
        let posted = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        let same_day = Utc.with_ymd_and_hms(2026, 8, 1, 23, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, same_day), "today");

        let next_day = Utc.with_ymd_and_hms(2026, 8, 2, 1, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, next_day), "1 day ago");

        let later = Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, later), "3 days ago");

        let weeks = Utc.with_ymd_and_hms(2026, 8, 16, 0, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, weeks), "2 weeks ago");

        let months = Utc.with_ymd_and_hms(2026, 11, 1, 0, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, months), "3 months ago");
    }

    #[test]
    fn future_timestamps_read_as_today() {
        let posted = Utc.with_ymd_and_hms(2026, 8, 2, 0, 0, 0).unwrap();
        let now = Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap();
        assert_eq!(relative_posted_label(posted, now), "today");
    }
}
