//! HTTP host for the Kairos recurrence engine.

pub mod app;
pub mod config;
pub mod error;
