//! Jobseeker profile endpoints

use std::path::Path;

use reqwest::multipart;

use crate::JobBoardClient;
use crate::error::Result;
use jobline_core::dto::profile::{JobseekerProfile, UpdateJobseekerProfile};

impl JobBoardClient {
    /// Get the signed-in jobseeker's profile
    pub async fn get_jobseeker_profile(&self) -> Result<JobseekerProfile> {
        let url = format!("{}/jobseeker/profile", self.base_url);
        let response = self.client.get(&url).send().await?;

        self.handle_response(response).await
    }

    /// Update the jobseeker profile
    ///
    /// Sent as multipart: the text fields travel as one JSON part and the
    /// optional picture/resume files as `profile_pic` and `resume` file
    /// parts, matching the backend's form handler.
    ///
    /// # Arguments
    /// * `update` - Changed text fields; unset fields are left untouched
    /// * `profile_pic` - Optional path to a picture file to upload
    /// * `resume` - Optional path to a resume file to upload
    pub async fn update_jobseeker_profile(
        &self,
        update: &UpdateJobseekerProfile,
        profile_pic: Option<&Path>,
        resume: Option<&Path>,
    ) -> Result<JobseekerProfile> {
        let mut form = multipart::Form::new().text(
            "profile",
            serde_json::to_string(update)
                .map_err(|e| crate::ClientError::InvalidRequest(e.to_string()))?,
        );

        if let Some(path) = profile_pic {
            form = form.part("profile_pic", file_part(path).await?);
        }
        if let Some(path) = resume {
            form = form.part("resume", file_part(path).await?);
        }

        let url = format!("{}/jobseeker/profile", self.base_url);
        let response = self.client.post(&url).multipart(form).send().await?;

        self.handle_response(response).await
    }

    /// Download a jobseeker's resume file
    ///
    /// # Arguments
    /// * `profile_id` - The jobseeker profile id
    ///
    /// # Returns
    /// The raw resume bytes
    pub async fn get_jobseeker_resume(&self, profile_id: i64) -> Result<Vec<u8>> {
        let url = format!("{}/jobseeker/profile/{}/resume", self.base_url, profile_id);
        let response = self.client.get(&url).send().await?;

        self.handle_bytes_response(response).await
    }

    /// Download a jobseeker's profile picture
    ///
    /// # Arguments
    /// * `profile_id` - The jobseeker profile id
    ///
    /// # Returns
    /// The raw image bytes
    pub async fn get_jobseeker_image(&self, profile_id: i64) -> Result<Vec<u8>> {
        let url = format!("{}/jobseeker/profile/{}/image", self.base_url, profile_id);
        let response = self.client.get(&url).send().await?;

        self.handle_bytes_response(response).await
    }
}

/// Read a local file into a multipart part named after its filename
pub(crate) async fn file_part(path: &Path) -> Result<multipart::Part> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    Ok(multipart::Part::bytes(bytes).file_name(file_name))
}
