//! Test-name normalization.
//!
//! Two names that differ only in case, spacing, or punctuation normalize to
//! the same string, so "Free T4", "free t4" and "FREE-T4" all compare equal
//! in the exact and partial tiers.

/// Normalize a test name for exact/partial comparison.
///
/// Lower-cases the input and keeps only ASCII letters and digits. The
/// operation is idempotent.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
