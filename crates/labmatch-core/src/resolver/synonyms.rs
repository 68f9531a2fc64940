//! Curated clinical abbreviation table.
//!
//! Short abbreviations like "k" or "t" are too generic to substring-match
//! against arbitrary description text, so they are routed through this
//! table instead: the key must equal the normalized extracted name exactly,
//! and one of its expansions must then appear in the candidate description.

use std::collections::HashMap;

/// Immutable mapping from clinical abbreviations to full clinical names.
///
/// Built once at startup; the contract includes no runtime mutation.
pub struct AbbreviationTable {
    map: HashMap<String, Vec<String>>,
}

impl Default for AbbreviationTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AbbreviationTable {
    /// Create the table with the default clinical mappings.
    pub fn new() -> Self {
        Self {
            map: Self::default_mappings(),
        }
    }

    /// Full clinical names for a normalized abbreviation, if known.
    pub fn expansions(&self, key: &str) -> Option<&[String]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Default abbreviation mappings.
    fn default_mappings() -> HashMap<String, Vec<String>> {
        let entries: &[(&str, &[&str])] = &[
            // Hormones
            ("e2", &["estradiol", "oestradiol"]),
            ("t", &["testosterone"]),
            ("tsh", &["thyroid stimulating hormone", "thyrotropin"]),
            ("t4", &["thyroxine", "free t4"]),
            ("t3", &["triiodothyronine", "free t3"]),
            // Liver enzymes
            ("alt", &["alanine aminotransferase", "alanine transaminase"]),
            ("ast", &["aspartate aminotransferase", "aspartate transaminase"]),
            ("ggt", &["gamma-glutamyl transferase", "gamma glutamyl"]),
            ("alp", &["alkaline phosphatase"]),
            // Complete blood count
            ("hgb", &["hemoglobin"]),
            ("hct", &["hematocrit"]),
            ("wbc", &["white blood cell"]),
            ("rbc", &["red blood cell"]),
            ("plt", &["platelet"]),
            // Lipids
            ("hdl", &["high-density lipoprotein", "hdl cholesterol"]),
            ("ldl", &["low-density lipoprotein", "ldl cholesterol"]),
            ("tg", &["triglyceride"]),
            // Metabolic panel
            ("bun", &["blood urea nitrogen", "urea nitrogen"]),
            ("na", &["sodium"]),
            ("k", &["potassium"]),
            ("cl", &["chloride"]),
            ("ca", &["calcium"]),
            ("mg", &["magnesium"]),
            ("fe", &["iron"]),
        ];

        entries
            .iter()
            .map(|(key, names)| {
                (
                    (*key).to_string(),
                    names.iter().map(|n| (*n).to_string()).collect(),
                )
            })
            .collect()
    }
}
