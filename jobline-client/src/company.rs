//! Company profile, dashboard and applicant endpoints

use std::path::Path;

use reqwest::multipart;

use crate::JobBoardClient;
use crate::error::Result;
use crate::jobseeker::file_part;
use jobline_core::dto::profile::{
    ApplicantRecord, ApplicationStatus, CompanyProfile, DashboardStats, UpdateApplicationStatus,
    UpdateCompanyProfile,
};

impl JobBoardClient {
    /// Get the signed-in employer's company profile
    pub async fn get_company_profile(&self) -> Result<CompanyProfile> {
        let url = format!("{}/company/profile", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Update the company profile
    ///
    /// Sent as multipart like the jobseeker profile: text fields as one
    /// JSON part, the optional logo as a `logo` file part.
    pub async fn update_company_profile(
        &self,
        update: &UpdateCompanyProfile,
        logo: Option<&Path>,
    ) -> Result<CompanyProfile> {
        let mut form = multipart::Form::new().text(
            "profile",
            serde_json::to_string(update)
                .map_err(|e| crate::ClientError::InvalidRequest(e.to_string()))?,
        );

        if let Some(path) = logo {
            form = form.part("logo", file_part(path).await?);
        }

        let url = format!("{}/company/profile", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        self.handle_response(response).await
    }

    /// Get the company dashboard aggregates
    pub async fn get_company_dashboard(&self) -> Result<DashboardStats> {
        let url = format!("{}/company/dashboard", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// List applicants across the company's postings
    ///
    /// # Arguments
    /// * `job_id` - Restrict to one posting when set
    pub async fn list_applicants(&self, job_id: Option<i64>) -> Result<Vec<ApplicantRecord>> {
        let url = match job_id {
            Some(id) => format!("{}/company/applicants?job_id={}", self.base_url, id),
            None => format!("{}/company/applicants", self.base_url),
        };
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Move one application to a new status
    ///
    /// # Arguments
    /// * `applicant_id` - The application record id
    /// * `status` - The new status
    pub async fn update_application_status(
        &self,
        applicant_id: i64,
        status: ApplicationStatus,
    ) -> Result<()> {
        let url = format!("{}/company/applicants/{}/status", self.base_url, applicant_id);
        let response = self
            .client
            .post(&url)
            .json(&UpdateApplicationStatus { status })
            .send()
            .await?;

        self.handle_empty_response(response).await
    }
}
