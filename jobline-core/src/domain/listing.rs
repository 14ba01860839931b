//! Job listing domain type

use serde::{Deserialize, Serialize};

/// A single employer-posted opening as displayed to a job seeker.
///
/// Built by mapping one backend record (see [`crate::mapping`]) and
/// immutable in this view from then on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    /// Company label, falls back to a placeholder derived from the employer id.
    pub company: String,
    /// Humanized job-type label, e.g. "full time".
    pub job_type: String,
    /// Formatted salary string, e.g. "$85,000 per year".
    pub salary: String,
    pub description: String,
    pub location: String,
    /// Relative posted-date label, e.g. "today", "3 days ago".
    pub posted: String,
    /// Ordered skill tags.
    pub tags: Vec<String>,
    pub logo_url: String,
}
