//! Jobline HTTP Client
//!
//! A simple, type-safe HTTP client for the job-board backend API.
//!
//! This crate provides one wrapper over every backend endpoint the pages
//! use, so the CLI and any future surface share a single request path
//! instead of duplicating raw HTTP calls.
//!
//! # Example
//!
//! ```no_run
//! use jobline_client::JobBoardClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = JobBoardClient::new("http://localhost:3000");
//!
//!     let jobs = client.list_jobs().await?;
//!     println!("{} open jobs", jobs.len());
//!     Ok(())
//! }
//! ```

pub mod error;
mod company;
mod jobs;
mod jobseeker;
pub mod repository;
mod users;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use repository::{HttpJobRepository, InMemoryJobRepository, JobRepository};

use reqwest::Client;
use serde::de::DeserializeOwned;

/// HTTP client for the job-board backend API
///
/// Endpoint methods are grouped into logical modules:
/// - Job postings (list, get, create)
/// - Jobseeker profile (read, update, resume and picture files)
/// - Company profile, dashboard and applicants
/// - User accounts (register, login, logout)
///
/// No auth token or header is attached to any request; the backend is
/// assumed to be the fixed local instance the pages were written against.
#[derive(Debug, Clone)]
pub struct JobBoardClient {
    /// Base URL of the backend (e.g., "http://localhost:3000")
    base_url: String,
    /// HTTP client instance
    client: Client,
}

impl JobBoardClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:3000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Create a new client with a custom HTTP client
    ///
    /// This allows configuring timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // =============================================================================
    // Response Handlers
    // =============================================================================

    /// Handle an API response and deserialize JSON
    ///
    /// Checks the status code and returns an appropriate error if the
    /// request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::ParseError(format!("Failed to parse JSON response: {}", e)))
    }

    /// Handle an API response that returns no useful body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(())
    }

    /// Handle an API response carrying raw bytes (resume and image downloads)
    async fn handle_bytes_response(&self, response: reqwest::Response) -> Result<Vec<u8>> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = JobBoardClient::new("http://localhost:3000");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = JobBoardClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = JobBoardClient::with_client("http://localhost:3000", http_client);
        assert_eq!(client.base_url(), "http://localhost:3000");
    }
}
