//! Shared configuration, error types, route constants and small utilities
//! for the Kairos recurrence workspace.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
