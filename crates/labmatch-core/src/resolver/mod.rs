//! Reconciliation engine for extracted test names.
//!
//! Pipeline: Extracted name → Normalization → Tiered comparison → Best match
//!
//! Three tiers, strict priority per candidate:
//! 1. exact normalized equality (confidence 100)
//! 2. normalized substring either way (confidence 85)
//! 3. synonym evidence in the description (confidence 75)

mod normalizer;
mod synonyms;

pub use normalizer::*;
pub use synonyms::*;

use crate::models::{
    MatchResult, MatchType, TestDefinition, CONFIDENCE_EXACT, CONFIDENCE_PARTIAL,
    CONFIDENCE_SYNONYM,
};

/// Matcher that reconciles extracted names against the catalog.
///
/// Holds only the immutable abbreviation table, so one instance serves any
/// number of concurrent queries.
pub struct Matcher {
    abbreviations: AbbreviationTable,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Matcher {
    /// Create a matcher with the default abbreviation table.
    pub fn new() -> Self {
        Self {
            abbreviations: AbbreviationTable::new(),
        }
    }

    /// Find the single best catalog match for an extracted name.
    ///
    /// Returns `None` for empty input, an empty catalog, or when no tier
    /// fires for any candidate. "No match" is a normal outcome, not an
    /// error; this operation has no failure mode.
    ///
    /// Ties resolve to the first-encountered entry: a later candidate only
    /// replaces the current best on strictly higher confidence.
    pub fn find_best_match(
        &self,
        extracted: &str,
        catalog: &[TestDefinition],
    ) -> Option<MatchResult> {
        let raw_lower = extracted.trim().to_lowercase();
        if raw_lower.is_empty() || catalog.is_empty() {
            return None;
        }

        let normalized = normalize(extracted);

        let mut best: Option<MatchResult> = None;
        for def in catalog {
            let Some((confidence, match_type)) =
                self.match_candidate(&raw_lower, &normalized, def)
            else {
                continue;
            };

            if best.as_ref().map_or(true, |b| confidence > b.confidence) {
                best = Some(MatchResult {
                    test: def.clone(),
                    confidence,
                    match_type,
                });
            }
        }

        best
    }

    /// Evaluate one candidate; the first tier that fires wins.
    fn match_candidate(
        &self,
        raw_lower: &str,
        normalized: &str,
        def: &TestDefinition,
    ) -> Option<(u8, MatchType)> {
        let candidate = normalize(&def.test_name);

        // An empty normalized form would substring-match everything, so
        // tiers 1-2 require substance on both sides.
        if !normalized.is_empty() && !candidate.is_empty() {
            if normalized == candidate {
                return Some((CONFIDENCE_EXACT, MatchType::Exact));
            }
            if candidate.contains(normalized) || normalized.contains(&candidate) {
                return Some((CONFIDENCE_PARTIAL, MatchType::Partial));
            }
        }

        if self.is_synonym(raw_lower, normalized, &def.description) {
            return Some((CONFIDENCE_SYNONYM, MatchType::Synonym));
        }

        None
    }

    /// Synonym tier: case-insensitive but punctuation-preserving.
    ///
    /// Fires when the lower-cased extracted name appears inside the
    /// lower-cased description, or when the normalized name is a known
    /// abbreviation whose expansion appears there. The abbreviation table is
    /// a fallback for names too short to substring-match reliably.
    fn is_synonym(&self, raw_lower: &str, normalized: &str, description: &str) -> bool {
        let description_lower = description.to_lowercase();

        if description_lower.contains(raw_lower) {
            return true;
        }

        match self.abbreviations.expansions(normalized) {
            Some(full_names) => full_names
                .iter()
                .any(|name| description_lower.contains(name.as_str())),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TestDefinition;

    fn named(name: &str) -> TestDefinition {
        TestDefinition::new(name)
    }

    fn with_description(name: &str, description: &str) -> TestDefinition {
        let mut def = TestDefinition::new(name);
        def.description = description.into();
        def
    }

    #[test]
    fn test_exact_match_ignores_case_and_punctuation() {
        let matcher = Matcher::new();
        let catalog = vec![named("testosterone")];

        let result = matcher.find_best_match("Testosterone", &catalog).unwrap();
        assert_eq!(result.confidence, 100);
        assert_eq!(result.match_type, MatchType::Exact);

        let result = matcher.find_best_match("TESTO-STERONE", &catalog).unwrap();
        assert_eq!(result.match_type, MatchType::Exact);
    }

    #[test]
    fn test_partial_match_either_direction() {
        let matcher = Matcher::new();

        // Extracted contains catalog name
        let catalog = vec![named("testosterone")];
        let result = matcher
            .find_best_match("free testosterone", &catalog)
            .unwrap();
        assert_eq!(result.confidence, 85);
        assert_eq!(result.match_type, MatchType::Partial);

        // Catalog name contains extracted
        let catalog = vec![named("free testosterone")];
        let result = matcher.find_best_match("testosterone", &catalog).unwrap();
        assert_eq!(result.match_type, MatchType::Partial);
    }

    #[test]
    fn test_exact_beats_partial_regardless_of_order() {
        let matcher = Matcher::new();
        let catalog = vec![named("free testosterone"), named("testosterone")];

        let result = matcher.find_best_match("Testosterone", &catalog).unwrap();
        assert_eq!(result.test.test_name, "testosterone");
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_synonym_via_abbreviation_table() {
        let matcher = Matcher::new();
        let catalog = vec![with_description(
            "Thyroid Panel A",
            "Measures thyroid stimulating hormone produced by the pituitary",
        )];

        let result = matcher.find_best_match("TSH", &catalog).unwrap();
        assert_eq!(result.confidence, 75);
        assert_eq!(result.match_type, MatchType::Synonym);
        assert_eq!(result.test.test_name, "Thyroid Panel A");
    }

    #[test]
    fn test_synonym_via_description_substring() {
        let matcher = Matcher::new();
        let catalog = vec![with_description(
            "CMP",
            "Comprehensive panel including fasting glucose and electrolytes",
        )];

        let result = matcher.find_best_match("fasting glucose", &catalog).unwrap();
        assert_eq!(result.match_type, MatchType::Synonym);
        assert_eq!(result.confidence, 75);
    }

    #[test]
    fn test_short_abbreviation_requires_table_expansion() {
        let matcher = Matcher::new();

        // "k" is not a substring-safe query; it must go through the table.
        let potassium = with_description("Basic Metabolic Panel", "Includes potassium and sodium");
        let result = matcher
            .find_best_match("K", std::slice::from_ref(&potassium))
            .unwrap();
        assert_eq!(result.match_type, MatchType::Synonym);

        // Known precision limitation: any description containing the literal
        // letter "k" also fires through the raw substring path.
        let incidental = with_description("Lipid Panel", "Checks lipid markers");
        let result = matcher.find_best_match("K", std::slice::from_ref(&incidental));
        assert!(result.is_some());
    }

    #[test]
    fn test_no_match() {
        let matcher = Matcher::new();
        let catalog = vec![
            with_description("Testosterone", "Total testosterone measurement"),
            with_description("Estradiol", "Primary estrogen hormone"),
        ];

        assert!(matcher.find_best_match("xyz123unknown", &catalog).is_none());
    }

    #[test]
    fn test_empty_inputs() {
        let matcher = Matcher::new();
        let catalog = vec![named("testosterone")];

        assert!(matcher.find_best_match("", &catalog).is_none());
        assert!(matcher.find_best_match("   ", &catalog).is_none());
        assert!(matcher.find_best_match("testosterone", &[]).is_none());
    }

    #[test]
    fn test_punctuation_only_input_matches_nothing_in_upper_tiers() {
        let matcher = Matcher::new();
        let catalog = vec![named("testosterone")];

        // Normalizes to "" - must not substring-match every candidate.
        assert!(matcher.find_best_match("?!-", &catalog).is_none());
    }

    #[test]
    fn test_tie_break_prefers_earlier_entry() {
        let matcher = Matcher::new();
        let catalog = vec![named("free testosterone"), named("testosterone total")];

        // Both fire tier 2 at confidence 85; the first entry must win.
        let result = matcher.find_best_match("testosterone", &catalog).unwrap();
        assert_eq!(result.test.test_name, "free testosterone");

        // And with the order flipped, the other one wins.
        let flipped: Vec<_> = catalog.into_iter().rev().collect();
        let result = matcher.find_best_match("testosterone", &flipped).unwrap();
        assert_eq!(result.test.test_name, "testosterone total");
    }

    #[test]
    fn test_candidate_matches_at_most_one_tier() {
        let matcher = Matcher::new();

        // Name matches exactly AND the description contains the query; the
        // exact tier must win for this candidate.
        let catalog = vec![with_description(
            "Testosterone",
            "Total testosterone in serum",
        )];
        let result = matcher.find_best_match("testosterone", &catalog).unwrap();
        assert_eq!(result.match_type, MatchType::Exact);
        assert_eq!(result.confidence, 100);
    }

    #[test]
    fn test_deterministic_over_repeated_queries() {
        let matcher = Matcher::new();
        let catalog = vec![
            with_description("Free T4", "Free thyroxine"),
            with_description("Thyroid Panel", "Includes thyroid stimulating hormone"),
        ];

        let first = matcher.find_best_match("T4", &catalog);
        for _ in 0..10 {
            assert_eq!(matcher.find_best_match("T4", &catalog), first);
        }
    }
}
