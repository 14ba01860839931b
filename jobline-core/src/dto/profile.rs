//! Jobseeker and company profile DTOs

use serde::{Deserialize, Serialize};

/// Jobseeker profile as exchanged with `GET/POST /jobseeker/profile`.
///
/// The `profile_pic` and `resume` files travel as multipart parts, not in
/// this JSON body; the backend serves them from the `/{id}/image` and
/// `/{id}/resume` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobseekerProfile {
    pub id: i64,
    pub full_name: String,
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub about: Option<String>,
}

/// Fields a jobseeker may change on their profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateJobseekerProfile {
    pub full_name: Option<String>,
    pub headline: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub about: Option<String>,
}

/// Company profile as exchanged with `GET/POST /company/profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub company_size: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
}

/// Fields an employer may change on the company profile.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCompanyProfile {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub company_size: Option<String>,
    pub website: Option<String>,
    pub about: Option<String>,
}

/// One submitted application as listed on the company applicants page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub applicant_name: String,
    pub status: ApplicationStatus,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

/// Application lifecycle as tracked by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Submitted,
    InReview,
    Shortlisted,
    Rejected,
    Hired,
}

impl ApplicationStatus {
    /// Parse the CLI spelling of a status.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().replace('-', "_").as_str() {
            "submitted" => Some(Self::Submitted),
            "in_review" => Some(Self::InReview),
            "shortlisted" => Some(Self::Shortlisted),
            "rejected" => Some(Self::Rejected),
            "hired" => Some(Self::Hired),
            _ => None,
        }
    }
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Submitted => "submitted",
            Self::InReview => "in review",
            Self::Shortlisted => "shortlisted",
            Self::Rejected => "rejected",
            Self::Hired => "hired",
        };
        write!(f, "{}", label)
    }
}

/// Request body for `POST /company/applicants/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateApplicationStatus {
    pub status: ApplicationStatus,
}

/// Aggregates for the company dashboard page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub open_jobs: u32,
    pub total_applicants: u32,
    pub new_this_week: u32,
    pub shortlisted: u32,
}
