//! Recipe scaling and quantity tools

use serde::Serialize;

use crate::models::Recipe;
use crate::nutrition::{categorize_unit, grams_per_unit, parse_quantity, ParsedQuantity, UnitCategory};
use crate::transform::scale;

const COOK_TIME_NOTE: &str = "Cooking times are estimates (square-root heuristic) and may need \
    further adjustment based on your equipment and ingredients.";

/// One scaled ingredient line
#[derive(Debug, Serialize)]
pub struct ScaledIngredientLine {
    pub name: String,
    pub quantity: String,
    pub unit: String,
    pub display: String,
}

/// Response for scale_recipe
#[derive(Debug, Serialize)]
pub struct ScaleRecipeResponse {
    pub title: String,
    pub original_servings: u32,
    pub target_servings: u32,
    pub scale_factor: f64,
    pub ingredients: Vec<ScaledIngredientLine>,
    pub original_cook_time_minutes: Option<u32>,
    pub adjusted_cook_time_minutes: Option<u32>,
    /// Ingredients whose amounts could not be read and were left unchanged
    pub unscaled_ingredients: Vec<String>,
    pub note: Option<&'static str>,
}

/// Response for parse_quantity
#[derive(Debug, Serialize)]
pub struct ParseQuantityResponse {
    pub parsed: ParsedQuantity,
    pub unit_category: UnitCategory,
    pub estimated_grams: f64,
    pub warning: Option<String>,
}

/// Scale a recipe to a new number of servings
pub fn scale_recipe(recipe: &Recipe, target_servings: i64) -> Result<ScaleRecipeResponse, String> {
    let scaled = scale(recipe, target_servings).map_err(|e| e.to_string())?;

    let ingredients = scaled
        .ingredients
        .iter()
        .map(|i| ScaledIngredientLine {
            name: i.name.clone(),
            quantity: i.quantity_text.clone(),
            unit: i.unit.clone(),
            display: i.display(),
        })
        .collect();

    Ok(ScaleRecipeResponse {
        title: recipe.title.clone(),
        original_servings: scaled.original_servings,
        target_servings: scaled.target_servings,
        scale_factor: (scaled.factor * 1000.0).round() / 1000.0,
        ingredients,
        original_cook_time_minutes: recipe.cook_time_minutes,
        adjusted_cook_time_minutes: scaled.cook_time_minutes,
        unscaled_ingredients: scaled.unscaled,
        note: scaled.cook_time_minutes.map(|_| COOK_TIME_NOTE),
    })
}

/// Parse a quantity string and estimate its mass
pub fn preview_quantity(
    quantity_text: &str,
    unit: Option<&str>,
    ingredient: Option<&str>,
) -> ParseQuantityResponse {
    let parsed = parse_quantity(quantity_text, unit);
    let unit_category = categorize_unit(&parsed.unit);

    // Prefer the trailing name from the text, then the caller's ingredient
    let name = Some(parsed.name.as_str())
        .filter(|n| parsed.parse_ok && !n.is_empty())
        .or(ingredient);
    let estimated_grams = parsed.value * grams_per_unit(&parsed.unit, name);

    let warning = (!parsed.parse_ok).then(|| {
        format!(
            "Could not read a number from '{}'; treating it as a quantity of 1",
            quantity_text
        )
    });

    ParseQuantityResponse {
        parsed,
        unit_category,
        estimated_grams: (estimated_grams * 10.0).round() / 10.0,
        warning,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ingredient;

    fn pancakes() -> Recipe {
        Recipe {
            id: "p1".into(),
            title: "Buttermilk Pancakes".into(),
            servings: 4,
            ingredients: vec![
                Ingredient::new("All-purpose flour", "2", "cups"),
                Ingredient::new("Salt", "a pinch", ""),
            ],
            instructions: vec![],
            cook_time_minutes: Some(20),
            tags: vec![],
        }
    }

    #[test]
    fn test_scale_recipe_response() {
        let response = scale_recipe(&pancakes(), 8).unwrap();
        assert_eq!(response.ingredients[0].display, "4.0 cups All-purpose flour");
        assert_eq!(response.adjusted_cook_time_minutes, Some(28));
        assert_eq!(response.unscaled_ingredients, vec!["Salt".to_string()]);
        assert!(response.note.is_some());
    }

    #[test]
    fn test_scale_recipe_rejects_zero() {
        let err = scale_recipe(&pancakes(), 0).unwrap_err();
        assert!(err.contains("at least 1"));
    }

    #[test]
    fn test_preview_quantity() {
        let response = preview_quantity("2 cups flour", None, None);
        assert!(response.parsed.parse_ok);
        assert_eq!(response.unit_category, UnitCategory::Volume);
        assert_eq!(response.estimated_grams, 250.0);
        assert!(response.warning.is_none());
    }

    #[test]
    fn test_preview_quantity_uses_ingredient_hint() {
        let response = preview_quantity("1", Some("cup"), Some("milk"));
        assert_eq!(response.estimated_grams, 245.0);
    }

    #[test]
    fn test_preview_unreadable_quantity_warns() {
        let response = preview_quantity("to taste", None, Some("salt"));
        assert!(!response.parsed.parse_ok);
        assert!(response.warning.is_some());
    }
}
