//! Recurrence engine: rule validation and bounded occurrence generation.
//!
//! The engine exposes two independent, pure entry points:
//! - [`validate`] checks a [`RecurrenceRule`] for internal consistency and
//!   reports every violation it finds.
//! - [`generate`] expands a rule into an ordered, capped list of
//!   [`Occurrence`]s. It never fails; degenerate rules yield a truncated list.
//!
//! Callers are expected to validate before generating. Generation on an
//! invalid rule is permitted and produces a best-effort sequence.

pub mod error;
pub mod generate;
pub mod occurrence;
pub mod rule;
pub mod validate;

pub use error::{EngineError, EngineResult};
pub use generate::{DEFAULT_MAX_OCCURRENCES, generate, step_once};
pub use occurrence::{Occurrence, OccurrenceRole};
pub use rule::{DayOfWeek, MonthlyPattern, RecurrenceKind, RecurrenceRule, WeekOfMonth};
pub use validate::{ValidationResult, validate};
