//! Consumers of the recurrence engine: the validate-then-generate schedule
//! contract, the JSON export document and the preset rule catalogue.

pub mod error;
pub mod export;
pub mod presets;
pub mod schedule;
