//! Slug generation for human-readable identifiers.
//!
//! ## Summary
//! Turns display names (preset names, export labels) into stable, URL-safe
//! slugs: lowercase ASCII alphanumerics separated by single hyphens.

/// Generate a URL-safe slug from a name.
///
/// Examples:
/// - "Daily Standup" -> "daily-standup"
/// - "Every Other Day" -> "every-other-day"
/// - "Q1 & Q2 Reviews" -> "q1-q2-reviews"
#[must_use]
pub fn generate_slug(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
