//! Jobline Core
//!
//! Core types and pure logic for the Jobline job board client.
//!
//! This crate contains:
//! - Domain types: display-shape entities (JobListing, FilterCriteria, SortKey)
//! - DTOs: wire shapes exchanged with the backend API
//! - Mapping: backend record to display-shape conversion
//! - Pipeline: the filter/sort/paginate logic behind the job browser

pub mod domain;
pub mod dto;
pub mod mapping;
pub mod pipeline;
