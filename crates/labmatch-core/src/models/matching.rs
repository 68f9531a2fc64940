//! Match result models for the reconciliation engine.

use serde::{Deserialize, Serialize};

use super::TestDefinition;

/// Which tier of the matching algorithm produced a result.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Normalized names are identical
    Exact,
    /// One normalized name contains the other
    Partial,
    /// Description substring or curated abbreviation hit
    Synonym,
}

/// Confidence assigned to an exact-tier match.
pub const CONFIDENCE_EXACT: u8 = 100;
/// Confidence assigned to a partial-tier match.
pub const CONFIDENCE_PARTIAL: u8 = 85;
/// Confidence assigned to a synonym-tier match.
pub const CONFIDENCE_SYNONYM: u8 = 75;

/// The outcome of reconciling one extracted name against the catalog.
///
/// Transient: created per query, never persisted by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchResult {
    /// The matched catalog entry
    pub test: TestDefinition,
    /// One of 100 (exact), 85 (partial), 75 (synonym)
    pub confidence: u8,
    /// Tier that produced the match
    pub match_type: MatchType,
}

impl MatchResult {
    /// Whether this match came from the exact tier.
    pub fn is_exact(&self) -> bool {
        matches!(self.match_type, MatchType::Exact)
    }
}
