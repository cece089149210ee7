//! Recipe nutrition aggregation
//!
//! Sums per-ingredient contributions (`per_100g * grams / 100`) over every
//! ingredient the nutrient table recognises. Unmatched ingredients add
//! nothing; the estimate reports how many were covered so a caller can say
//! "N of M ingredients could not be estimated".

use serde::Serialize;

use super::converter::to_grams;
use super::quantity::parse_quantity;
use super::table::{MatchConfidence, NutrientTable};
use crate::models::{NutrientProfile, Recipe};

/// How one ingredient was resolved
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngredientMatch {
    pub ingredient: String,
    pub key: String,
    pub grams: f64,
    pub confidence: MatchConfidence,
    pub alternatives: Vec<String>,
    /// False when the quantity text was unreadable and counted as 1
    pub quantity_parsed: bool,
}

/// Nutrition estimate with coverage details
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionEstimate {
    pub profile: NutrientProfile,
    pub per_serving: bool,
    pub matched: usize,
    pub total: usize,
    pub unmatched: Vec<String>,
    pub matches: Vec<IngredientMatch>,
}

impl NutritionEstimate {
    /// Whether every ingredient contributed
    pub fn is_complete(&self) -> bool {
        self.matched == self.total
    }

    pub fn has_ambiguous_matches(&self) -> bool {
        self.matches
            .iter()
            .any(|m| m.confidence == MatchConfidence::Ambiguous)
    }
}

/// Estimates nutrition facts from a recipe's ingredient list
#[derive(Debug, Clone, Default)]
pub struct NutritionAggregator {
    table: NutrientTable,
}

impl NutritionAggregator {
    pub fn new(table: NutrientTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &NutrientTable {
        &self.table
    }

    /// Summed nutrition, optionally divided by the recipe's servings
    pub fn aggregate(&self, recipe: &Recipe, per_serving: bool) -> NutrientProfile {
        self.estimate(recipe, per_serving).profile
    }

    /// Summed nutrition plus per-ingredient match details
    pub fn estimate(&self, recipe: &Recipe, per_serving: bool) -> NutritionEstimate {
        let mut matches = Vec::new();
        let mut unmatched = Vec::new();
        let mut total = NutrientProfile::zero();

        for ingredient in &recipe.ingredients {
            let Some(hit) = self.table.lookup(&ingredient.name) else {
                tracing::debug!(ingredient = %ingredient.name, "No nutrient entry; contributes zero");
                unmatched.push(ingredient.name.clone());
                continue;
            };

            if hit.confidence == MatchConfidence::Ambiguous {
                tracing::debug!(
                    ingredient = %ingredient.name,
                    key = hit.key,
                    alternatives = ?hit.alternatives,
                    "Ambiguous nutrient match; using first key in table order"
                );
            }

            let parsed = parse_quantity(&ingredient.quantity_text, Some(&ingredient.unit));
            let grams = to_grams(&parsed, Some(hit.key));
            total = total + hit.per_100g * (grams / 100.0);

            matches.push(IngredientMatch {
                ingredient: ingredient.name.clone(),
                key: hit.key.to_string(),
                grams,
                confidence: hit.confidence,
                alternatives: hit.alternatives.iter().map(|k| k.to_string()).collect(),
                quantity_parsed: parsed.parse_ok,
            });
        }

        if per_serving {
            // Zero-serving recipes are reported whole
            let servings = recipe.servings.max(1) as f64;
            total = total * (1.0 / servings);
        }

        NutritionEstimate {
            profile: total.rounded(),
            per_serving,
            matched: matches.len(),
            total: recipe.ingredients.len(),
            unmatched,
            matches,
        }
    }
}
