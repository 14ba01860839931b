//! User account endpoints

use crate::JobBoardClient;
use crate::error::Result;
use jobline_core::dto::user::{CreateUser, LoginRequest, SessionUser};

impl JobBoardClient {
    /// Register a new user account
    ///
    /// # Arguments
    /// * `req` - Email, password and role ("jobseeker" or "employer")
    pub async fn create_user(&self, req: &CreateUser) -> Result<SessionUser> {
        let url = format!("{}/users", self.base_url);
        let response = self.client.post(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Sign in
    ///
    /// The backend models login as a PATCH against the session resource.
    pub async fn login(&self, req: &LoginRequest) -> Result<SessionUser> {
        let url = format!("{}/login", self.base_url);
        let response = self.client.patch(&url).json(req).send().await?;

        self.handle_response(response).await
    }

    /// Sign out the current session
    pub async fn logout(&self) -> Result<()> {
        let url = format!("{}/logout", self.base_url);
        let response = self.client.patch(&url).send().await?;

        self.handle_empty_response(response).await
    }
}
