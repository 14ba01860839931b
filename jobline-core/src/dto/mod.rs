//! Data Transfer Objects for the backend API
//!
//! This module contains the wire shapes exchanged with the job-board
//! backend. Field names follow the backend's JSON exactly; humanizing and
//! formatting for display happens in [`crate::mapping`], not here.

pub mod job;
pub mod profile;
pub mod user;
