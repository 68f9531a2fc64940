//! Reference catalog models.

use serde::{Deserialize, Serialize};

/// A single laboratory-test definition from the reference catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TestDefinition {
    /// Canonical test name - primary identity for matching
    pub test_name: String,
    /// Grouping label (e.g., "hormonal")
    pub category: String,
    /// Sub-grouping within a category
    pub panel: String,
    /// Free-text description; also the source of synonym evidence
    pub description: String,
    /// Numeric lower bound; `None` when the source field was unparsable
    pub reference_range_min: Option<f64>,
    /// Numeric upper bound; `None` when the source field was unparsable
    pub reference_range_max: Option<f64>,
    /// Range kind (e.g., "range", "below", "above"); defaults to "range"
    pub reference_range_type: String,
    /// Display unit label (e.g., "ng/dL")
    pub units: String,
    /// Display-only rationale text
    pub why_it_matters: String,
}

impl TestDefinition {
    /// Create a definition with required name and everything else defaulted.
    pub fn new(test_name: impl Into<String>) -> Self {
        Self {
            test_name: test_name.into(),
            category: String::new(),
            panel: String::new(),
            description: String::new(),
            reference_range_min: None,
            reference_range_max: None,
            reference_range_type: "range".into(),
            units: String::new(),
            why_it_matters: String::new(),
        }
    }

    /// Whether a measured value falls inside the reference range.
    ///
    /// Returns `None` when neither bound is known.
    pub fn is_in_range(&self, value: f64) -> Option<bool> {
        match (self.reference_range_min, self.reference_range_max) {
            (None, None) => None,
            (min, max) => Some(
                min.map_or(true, |lo| value >= lo) && max.map_or(true, |hi| value <= hi),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let def = TestDefinition::new("Testosterone");
        assert_eq!(def.test_name, "Testosterone");
        assert_eq!(def.reference_range_type, "range");
        assert!(def.reference_range_min.is_none());
        assert!(def.category.is_empty());
    }

    #[test]
    fn test_in_range_both_bounds() {
        let mut def = TestDefinition::new("Estradiol");
        def.reference_range_min = Some(10.0);
        def.reference_range_max = Some(40.0);

        assert_eq!(def.is_in_range(25.0), Some(true));
        assert_eq!(def.is_in_range(5.0), Some(false));
        assert_eq!(def.is_in_range(50.0), Some(false));
    }

    #[test]
    fn test_in_range_single_bound() {
        let mut def = TestDefinition::new("TSH");
        def.reference_range_max = Some(4.5);

        assert_eq!(def.is_in_range(2.0), Some(true));
        assert_eq!(def.is_in_range(6.0), Some(false));
    }

    #[test]
    fn test_in_range_unknown_bounds() {
        let def = TestDefinition::new("TSH");
        assert_eq!(def.is_in_range(2.0), None);
    }
}
