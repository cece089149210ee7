//! Nutrition estimate tool

use serde::Serialize;

use crate::models::{NutrientProfile, Recipe};
use crate::nutrition::{IngredientMatch, NutritionAggregator};

#[derive(Debug, Serialize)]
pub struct NutritionResponse {
    pub title: String,
    pub servings: u32,
    pub per_serving: bool,
    pub nutrition: NutrientProfile,
    pub matched_ingredients: usize,
    pub total_ingredients: usize,
    pub unmatched_ingredients: Vec<String>,
    pub matches: Vec<IngredientMatch>,
    pub warnings: Vec<String>,
}

pub fn calculate_nutrition(
    aggregator: &NutritionAggregator,
    recipe: &Recipe,
    per_serving: bool,
) -> NutritionResponse {
    let estimate = aggregator.estimate(recipe, per_serving);

    let mut warnings = Vec::new();
    if per_serving && recipe.servings == 0 {
        warnings.push("Recipe declares zero servings; values are for the whole recipe".to_string());
    }
    if !estimate.is_complete() {
        warnings.push(format!(
            "{} of {} ingredients could not be estimated: {}",
            estimate.total - estimate.matched,
            estimate.total,
            estimate.unmatched.join(", ")
        ));
    }
    for m in estimate.matches.iter().filter(|m| !m.alternatives.is_empty()) {
        warnings.push(format!(
            "'{}' matched '{}' but could also be: {}",
            m.ingredient,
            m.key,
            m.alternatives.join(", ")
        ));
    }
    for m in estimate.matches.iter().filter(|m| !m.quantity_parsed) {
        warnings.push(format!("Quantity for '{}' was unreadable; counted as 1", m.ingredient));
    }

    NutritionResponse {
        title: recipe.title.clone(),
        servings: recipe.servings,
        per_serving,
        nutrition: estimate.profile,
        matched_ingredients: estimate.matched,
        total_ingredients: estimate.total,
        unmatched_ingredients: estimate.unmatched,
        matches: estimate.matches,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn latte(servings: u32) -> Recipe {
        Recipe {
            id: String::new(),
            title: "Vanilla Latte".into(),
            servings,
            ingredients: vec![
                Ingredient::new("milk", "1", "cup"),
                Ingredient::new("vanilla syrup", "2", "tbsp"),
            ],
            instructions: vec![],
            cook_time_minutes: None,
            tags: vec![],
        }
    }

    #[test]
    fn test_coverage_warning() {
        let response = calculate_nutrition(&NutritionAggregator::default(), &latte(1), false);
        assert_eq!(response.nutrition.calories, 102.9);
        assert_eq!(response.matched_ingredients, 1);
        assert_eq!(
            response.warnings[0],
            "1 of 2 ingredients could not be estimated: vanilla syrup"
        );
    }

    #[test]
    fn test_zero_servings_per_serving_uses_whole_recipe() {
        let response = calculate_nutrition(&NutritionAggregator::default(), &latte(0), true);
        assert_eq!(response.nutrition.calories, 102.9);
        assert!(response.warnings[0].contains("zero servings"));
    }

    #[test]
    fn test_per_serving_divides() {
        let response = calculate_nutrition(&NutritionAggregator::default(), &latte(3), true);
        assert_eq!(response.nutrition.calories, 34.3);
        assert!(response.per_serving);
    }
}
