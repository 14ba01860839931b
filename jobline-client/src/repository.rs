//! Job repository abstraction
//!
//! The job browser wants "the full list or nothing": a failed or malformed
//! fetch degrades to an empty list with a logged diagnostic, it never
//! propagates an error into the rendering path. The trait seam also lets
//! tests and demos run against an in-memory list instead of a live backend.

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};

use crate::JobBoardClient;
use jobline_core::domain::JobListing;

/// Source of the full job list shown by the browser
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Fetch every listing, already mapped to display shape.
    ///
    /// Infallible: implementations log failures and return an empty list.
    async fn fetch_all(&self) -> Vec<JobListing>;
}

/// Repository backed by the live backend API
pub struct HttpJobRepository {
    client: JobBoardClient,
}

impl HttpJobRepository {
    pub fn new(client: JobBoardClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl JobRepository for HttpJobRepository {
    async fn fetch_all(&self) -> Vec<JobListing> {
        match self.client.list_jobs().await {
            Ok(records) => {
                let now = Utc::now();
                debug!("fetched {} job records", records.len());
                records
                    .into_iter()
                    .map(|record| JobListing::from_record(record, now))
                    .collect()
            }
            Err(e) => {
                error!("failed to fetch jobs, showing an empty list: {}", e);
                Vec::new()
            }
        }
    }
}

/// Repository over a fixed in-memory list
///
/// Stands in for the backend in tests and offline demos.
pub struct InMemoryJobRepository {
    listings: Vec<JobListing>,
}

impl InMemoryJobRepository {
    pub fn new(listings: Vec<JobListing>) -> Self {
        Self { listings }
    }
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn fetch_all(&self) -> Vec<JobListing> {
        self.listings.clone()
    }
}
