//! Core domain types
//!
//! This module contains the display-shape structures the rest of the
//! workspace operates on. They are produced once from backend records at
//! fetch time and treated as immutable afterwards.

pub mod criteria;
pub mod listing;

pub use criteria::{FilterCriteria, SortKey};
pub use listing::JobListing;
