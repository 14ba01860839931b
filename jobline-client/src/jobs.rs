//! Job posting endpoints

use crate::JobBoardClient;
use crate::error::Result;
use jobline_core::dto::job::{CreateJobRequest, JobRecord};

impl JobBoardClient {
    /// List every job posting
    ///
    /// # Returns
    /// All backend job records, unmapped
    pub async fn list_jobs(&self) -> Result<Vec<JobRecord>> {
        let url = format!("{}/Jobs/all", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Get a single job posting by id
    ///
    /// # Arguments
    /// * `job_id` - The backend job id
    pub async fn get_job(&self, job_id: i64) -> Result<JobRecord> {
        let url = format!("{}/Jobs/{}", self.base_url, job_id);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Create a new job posting
    ///
    /// # Arguments
    /// * `req` - The posting fields; `id` and `created_at` are assigned by
    ///   the backend
    ///
    /// # Returns
    /// The created record as stored by the backend
    pub async fn create_job(&self, req: &CreateJobRequest) -> Result<JobRecord> {
        let url = format!("{}/Jobs/create", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }
}
