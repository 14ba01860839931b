//! Job DTOs as served by the backend

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One job record as returned by `GET /Jobs/all` and `GET /Jobs/{id}`.
///
/// `company_name`, `tags` and `logo_url` are not guaranteed by the backend;
/// the mapping layer substitutes fixed placeholders when they are absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: i64,
    pub title: String,
    pub employer_id: i64,
    /// Backend spelling, e.g. "full_time".
    pub job_type: String,
    pub base_salary: i64,
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    pub location: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Request body for `POST /Jobs/create`.
///
/// Same shape as [`JobRecord`] minus the server-assigned `id`/`created_at`.
/// Validation errors are field-level and surfaced inline by the caller.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateJobRequest {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(range(min = 1, message = "employer id must be positive"))]
    pub employer_id: i64,
    #[validate(length(min = 1, message = "job type must not be empty"))]
    pub job_type: String,
    #[validate(range(min = 0, message = "salary must not be negative"))]
    pub base_salary: i64,
    #[validate(length(min = 1, message = "description must not be empty"))]
    pub description: String,
    pub responsibilities: String,
    pub requirements: String,
    #[validate(length(min = 1, message = "location must not be empty"))]
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateJobRequest {
        CreateJobRequest {
            title: "Backend Developer".to_string(),
            employer_id: 7,
            job_type: "full_time".to_string(),
            base_salary: 90_000,
            description: "Build APIs.".to_string(),
            responsibilities: "Ship features".to_string(),
            requirements: "Rust".to_string(),
            location: "Berlin".to_string(),
        }
    }

    #[test]
    fn valid_request_passes_validation() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn empty_title_is_a_field_level_error() {
        let mut req = valid_request();
        req.title = String::new();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn negative_salary_is_rejected() {
        let mut req = valid_request();
        req.base_salary = -1;
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("base_salary"));
    }

    #[test]
    fn record_deserializes_without_optional_fields() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Frontend Developer",
            "employer_id": 3,
            "job_type": "part_time",
            "base_salary": 40000,
            "description": "UI work",
            "responsibilities": "Components",
            "requirements": "React",
            "location": "Remote",
            "created_at": "2026-08-01T10:00:00Z"
        });
        let record: JobRecord = serde_json::from_value(json).unwrap();
        assert!(record.company_name.is_none());
        assert!(record.tags.is_none());
        assert!(record.logo_url.is_none());
    }
}
