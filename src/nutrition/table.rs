//! Per-100 g nutrient reference table
//!
//! Lookup is first-substring-match: the first key, in table order, that
//! appears inside the lowercased ingredient name wins. This is ordering
//! dependent and can misclassify ("buttermilk" resolves to "butter",
//! "eggplant" to "egg"). Every lookup also reports the other keys that
//! matched.

use serde::Serialize;

use crate::error::{TransformError, TransformResult};
use crate::models::NutrientProfile;

/// How trustworthy a table match is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchConfidence {
    /// Ingredient name equals the key
    Exact,
    /// Exactly one key is a substring of the name
    Substring,
    /// Several keys are substrings; the first in table order was used
    Ambiguous,
}

/// Result of resolving an ingredient name against the table
#[derive(Debug, Clone, PartialEq)]
pub struct TableMatch<'a> {
    pub key: &'a str,
    pub per_100g: NutrientProfile,
    pub confidence: MatchConfidence,
    /// Other keys that also matched, in table order
    pub alternatives: Vec<&'a str>,
}

/// Ordered table of nutrient densities
#[derive(Debug, Clone)]
pub struct NutrientTable {
    entries: Vec<(String, NutrientProfile)>,
}

impl NutrientTable {
    /// Build a table, rejecting negative or non-finite values
    pub fn new<K: Into<String>>(entries: Vec<(K, NutrientProfile)>) -> TransformResult<Self> {
        let entries = entries
            .into_iter()
            .map(|(key, profile)| (key.into().to_lowercase(), profile))
            .collect::<Vec<_>>();

        if let Some((key, field)) = entries
            .iter()
            .find_map(|(key, p)| p.first_invalid_field().map(|f| (key.clone(), f)))
        {
            return Err(TransformError::NegativeNutrient { key, field });
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    /// Resolve an ingredient name to its first matching entry
    pub fn lookup(&self, ingredient_name: &str) -> Option<TableMatch<'_>> {
        let lower = ingredient_name.trim().to_lowercase();

        let mut hits = self
            .entries
            .iter()
            .filter(|(key, _)| lower.contains(key.as_str()));

        let (key, per_100g) = hits.next()?;
        let alternatives: Vec<&str> = hits.map(|(k, _)| k.as_str()).collect();

        let confidence = if lower == *key {
            MatchConfidence::Exact
        } else if alternatives.is_empty() {
            MatchConfidence::Substring
        } else {
            MatchConfidence::Ambiguous
        };

        Some(TableMatch {
            key: key.as_str(),
            per_100g: *per_100g,
            confidence,
            alternatives,
        })
    }
}

impl Default for NutrientTable {
    /// Built-in reference values per 100 g
    fn default() -> Self {
        let entries = BUILT_IN
            .iter()
            .map(|(key, profile)| (key.to_string(), *profile))
            .collect();
        Self { entries }
    }
}

const BUILT_IN: &[(&str, NutrientProfile)] = &[
    ("flour", NutrientProfile::new(364.0, 10.0, 76.0, 1.0, 2.7, 0.3)),
    ("sugar", NutrientProfile::new(396.0, 0.0, 100.0, 0.0, 0.0, 100.0)),
    ("butter", NutrientProfile::new(717.0, 0.9, 0.1, 81.0, 0.0, 0.1)),
    ("egg", NutrientProfile::new(155.0, 12.6, 1.1, 11.0, 0.0, 1.1)),
    ("milk", NutrientProfile::new(42.0, 3.4, 5.0, 1.0, 0.0, 5.0)),
    ("chicken", NutrientProfile::new(165.0, 31.0, 0.0, 3.6, 0.0, 0.0)),
    ("beef", NutrientProfile::new(250.0, 26.0, 0.0, 17.0, 0.0, 0.0)),
    ("rice", NutrientProfile::new(130.0, 2.7, 28.0, 0.3, 0.4, 0.1)),
    ("pasta", NutrientProfile::new(158.0, 5.8, 31.0, 0.9, 1.8, 0.6)),
    ("potato", NutrientProfile::new(77.0, 2.0, 17.0, 0.1, 2.2, 0.8)),
    ("carrot", NutrientProfile::new(41.0, 0.9, 10.0, 0.2, 2.8, 4.7)),
    ("onion", NutrientProfile::new(40.0, 1.1, 9.3, 0.1, 1.7, 4.2)),
    ("garlic", NutrientProfile::new(149.0, 6.4, 33.0, 0.5, 2.1, 1.0)),
    ("tomato", NutrientProfile::new(18.0, 0.9, 3.9, 0.2, 1.2, 2.6)),
    ("cheese", NutrientProfile::new(402.0, 25.0, 1.3, 33.0, 0.0, 0.1)),
    ("olive oil", NutrientProfile::new(884.0, 0.0, 0.0, 100.0, 0.0, 0.0)),
    ("salt", NutrientProfile::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0)),
    ("pepper", NutrientProfile::new(251.0, 10.0, 64.0, 3.3, 25.0, 0.6)),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_valid() {
        let table = NutrientTable::default();
        assert_eq!(table.len(), 18);
        assert!(BUILT_IN.iter().all(|(_, p)| p.first_invalid_field().is_none()));
    }

    #[test]
    fn test_exact_match() {
        let table = NutrientTable::default();
        let hit = table.lookup("Milk").unwrap();
        assert_eq!(hit.key, "milk");
        assert_eq!(hit.confidence, MatchConfidence::Exact);
        assert_eq!(hit.per_100g.calories, 42.0);
    }

    #[test]
    fn test_substring_match() {
        let table = NutrientTable::default();
        let hit = table.lookup("All-purpose flour").unwrap();
        assert_eq!(hit.key, "flour");
        assert_eq!(hit.confidence, MatchConfidence::Substring);
        assert!(hit.alternatives.is_empty());
    }

    #[test]
    fn test_first_match_wins_and_is_flagged() {
        let table = NutrientTable::default();
        // "butter" precedes "milk" in table order
        let hit = table.lookup("buttermilk").unwrap();
        assert_eq!(hit.key, "butter");
        assert_eq!(hit.confidence, MatchConfidence::Ambiguous);
        assert_eq!(hit.alternatives, vec!["milk"]);
    }

    #[test]
    fn test_unintended_substring_is_preserved() {
        let table = NutrientTable::default();
        let hit = table.lookup("eggplant").unwrap();
        assert_eq!(hit.key, "egg");
        assert_eq!(hit.confidence, MatchConfidence::Substring);
    }

    #[test]
    fn test_no_match() {
        assert!(NutrientTable::default().lookup("vanilla extract").is_none());
    }

    #[test]
    fn test_rejects_negative_values() {
        let err = NutrientTable::new(vec![(
            "Mystery",
            NutrientProfile::new(10.0, -1.0, 0.0, 0.0, 0.0, 0.0),
        )])
        .unwrap_err();
        assert_eq!(
            err,
            TransformError::NegativeNutrient { key: "mystery".to_string(), field: "protein" }
        );
    }

    #[test]
    fn test_custom_table_keeps_order() {
        let table = NutrientTable::new(vec![
            ("ham", NutrientProfile::new(145.0, 21.0, 1.5, 5.5, 0.0, 0.0)),
            ("graham", NutrientProfile::new(430.0, 7.0, 77.0, 10.0, 3.0, 24.0)),
        ])
        .unwrap();
        let hit = table.lookup("graham crackers").unwrap();
        assert_eq!(hit.key, "ham");
        assert_eq!(hit.alternatives, vec!["graham"]);
    }
}
