//! Configuration module
//!
//! Handles CLI configuration including backend URL and paging settings.

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the backend API
    pub api_url: String,
    /// Jobs shown per page when browsing
    pub page_size: usize,
}
