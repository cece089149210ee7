//! Serving-size scaling
//!
//! Multiplies every readable ingredient amount by `target / servings` and
//! estimates a new cook time. Amounts that do not start with a number ("to
//! taste", "a pinch") are passed through unscaled and listed in
//! [`ScaledRecipe::unscaled`].

use serde::Serialize;

use crate::error::{TransformError, TransformResult};
use crate::models::{Ingredient, Recipe};
use crate::nutrition::split_numeric_prefix;

/// Estimates cook time for a scaled batch
pub trait CookTimeStrategy {
    fn adjust(&self, minutes: u32, factor: f64) -> u32;
}

/// `round(minutes * sqrt(factor))`.
///
/// A heuristic, not a heat-transfer model: a bigger batch takes longer, but
/// far less than proportionally longer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SquareRootCookTime;

impl CookTimeStrategy for SquareRootCookTime {
    fn adjust(&self, minutes: u32, factor: f64) -> u32 {
        (minutes as f64 * factor.sqrt()).round() as u32
    }
}

/// `round(minutes * factor)`, for dishes cooked in proportionally more batches
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearCookTime;

impl CookTimeStrategy for LinearCookTime {
    fn adjust(&self, minutes: u32, factor: f64) -> u32 {
        (minutes as f64 * factor).round() as u32
    }
}

/// Scaled ingredient list and cook time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    pub original_servings: u32,
    pub target_servings: u32,
    pub factor: f64,
    pub ingredients: Vec<Ingredient>,
    pub cook_time_minutes: Option<u32>,
    /// Ingredients whose amount could not be read and were left as-is
    pub unscaled: Vec<String>,
}

impl ScaledRecipe {
    /// Full recipe at the target yield; `original` is left untouched
    pub fn into_recipe(self, original: &Recipe) -> Recipe {
        Recipe {
            servings: self.target_servings,
            ingredients: self.ingredients,
            cook_time_minutes: self.cook_time_minutes,
            ..original.clone()
        }
    }
}

/// Scales recipes with a configurable cook-time strategy
#[derive(Debug, Clone, Default)]
pub struct RecipeScaler<S = SquareRootCookTime> {
    cook_time: S,
}

impl<S: CookTimeStrategy> RecipeScaler<S> {
    pub fn with_strategy(cook_time: S) -> Self {
        Self { cook_time }
    }

    pub fn scale(&self, recipe: &Recipe, target_servings: i64) -> TransformResult<ScaledRecipe> {
        if target_servings < 1 {
            return Err(TransformError::InvalidServings { requested: target_servings });
        }
        if recipe.servings == 0 {
            return Err(TransformError::InvalidRecipeServings);
        }
        let target = u32::try_from(target_servings)
            .map_err(|_| TransformError::InvalidServings { requested: target_servings })?;

        let factor = target as f64 / recipe.servings as f64;
        let mut unscaled = Vec::new();

        let ingredients = recipe
            .ingredients
            .iter()
            .map(|ingredient| match scale_quantity_text(&ingredient.quantity_text, factor) {
                Some(quantity_text) => Ingredient {
                    quantity_text,
                    ..ingredient.clone()
                },
                None => {
                    tracing::debug!(
                        ingredient = %ingredient.name,
                        quantity = %ingredient.quantity_text,
                        "Quantity is not a finite number; passing through unscaled"
                    );
                    unscaled.push(ingredient.name.clone());
                    ingredient.clone()
                }
            })
            .collect();

        let cook_time_minutes = recipe
            .cook_time_minutes
            .map(|minutes| self.cook_time.adjust(minutes, factor));

        Ok(ScaledRecipe {
            original_servings: recipe.servings,
            target_servings: target,
            factor,
            ingredients,
            cook_time_minutes,
            unscaled,
        })
    }
}

/// Scale with the default square-root cook-time heuristic
pub fn scale(recipe: &Recipe, target_servings: i64) -> TransformResult<ScaledRecipe> {
    RecipeScaler::<SquareRootCookTime>::default().scale(recipe, target_servings)
}

/// Rewrite the leading amount of a quantity string, keeping the rest
///
/// Returns None when the text has no readable amount or the scaled amount
/// is not finite.
pub fn scale_quantity_text(quantity_text: &str, factor: f64) -> Option<String> {
    let (value, remainder) = split_numeric_prefix(quantity_text)?;
    let scaled = round2(value * factor);
    if !scaled.is_finite() {
        return None;
    }
    Some(format!("{}{}", format_quantity(scaled), remainder.trim_end()))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One decimal for whole tenths ("4.0", "0.5"), otherwise two ("0.33")
pub fn format_quantity(value: f64) -> String {
    let tenths = value * 10.0;
    if (tenths - tenths.round()).abs() < 1e-9 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(servings: u32, cook_time: Option<u32>, ingredients: Vec<Ingredient>) -> Recipe {
        Recipe {
            id: "r".into(),
            title: "Test".into(),
            servings,
            ingredients,
            instructions: vec!["Mix".into()],
            cook_time_minutes: cook_time,
            tags: vec!["baking".into()],
        }
    }

    #[test]
    fn test_doubles_quantities() {
        let r = recipe(4, None, vec![Ingredient::new("flour", "2", "cups")]);
        let scaled = scale(&r, 8).unwrap();
        assert_eq!(scaled.factor, 2.0);
        assert_eq!(scaled.ingredients[0].quantity_text, "4.0");
        assert_eq!(scaled.ingredients[0].display(), "4.0 cups flour");
    }

    #[test]
    fn test_keeps_unit_and_name_tokens_in_text() {
        let r = recipe(4, None, vec![Ingredient::new("flour", "2 cups flour", "")]);
        let scaled = scale(&r, 8).unwrap();
        assert_eq!(scaled.ingredients[0].quantity_text, "4.0 cups flour");
    }

    #[test]
    fn test_fractions_and_mixed_numbers() {
        let r = recipe(
            4,
            None,
            vec![
                Ingredient::new("butter", "1/2", "cup"),
                Ingredient::new("flour", "2 1/4", "cups"),
            ],
        );
        let scaled = scale(&r, 2).unwrap();
        assert_eq!(scaled.ingredients[0].quantity_text, "0.25");
        assert_eq!(scaled.ingredients[1].quantity_text, "1.13");
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        let r = recipe(3, None, vec![Ingredient::new("sugar", "1", "cup")]);
        let scaled = scale(&r, 1).unwrap();
        assert_eq!(scaled.ingredients[0].quantity_text, "0.33");
    }

    #[test]
    fn test_unparseable_passes_through() {
        let r = recipe(2, None, vec![Ingredient::new("salt", "to taste", "")]);
        let scaled = scale(&r, 6).unwrap();
        assert_eq!(scaled.ingredients[0].quantity_text, "to taste");
        assert_eq!(scaled.unscaled, vec!["salt".to_string()]);
    }

    #[test]
    fn test_overflowing_amount_passes_through() {
        assert_eq!(scale_quantity_text("1e308 cups", 2.0), None);

        let r = recipe(1, None, vec![Ingredient::new("flour", "1e308", "cups")]);
        let scaled = scale(&r, 2).unwrap();
        assert_eq!(scaled.ingredients[0].quantity_text, "1e308");
        assert_eq!(scaled.unscaled, vec!["flour".to_string()]);
    }

    #[test]
    fn test_cook_time_square_root_heuristic() {
        let r = recipe(4, Some(30), vec![]);
        // 30 * sqrt(2) = 42.43
        assert_eq!(scale(&r, 8).unwrap().cook_time_minutes, Some(42));
        // 30 * sqrt(0.25) = 15
        assert_eq!(scale(&r, 1).unwrap().cook_time_minutes, Some(15));
        assert_eq!(scale(&recipe(4, None, vec![]), 8).unwrap().cook_time_minutes, None);
    }

    #[test]
    fn test_linear_cook_time_strategy() {
        let r = recipe(4, Some(30), vec![]);
        let scaler = RecipeScaler::with_strategy(LinearCookTime);
        assert_eq!(scaler.scale(&r, 8).unwrap().cook_time_minutes, Some(60));
    }

    #[test]
    fn test_invalid_target_servings() {
        let r = recipe(4, Some(30), vec![Ingredient::new("flour", "2", "cups")]);
        assert_eq!(scale(&r, 0), Err(TransformError::InvalidServings { requested: 0 }));
        assert_eq!(scale(&r, -3), Err(TransformError::InvalidServings { requested: -3 }));
    }

    #[test]
    fn test_zero_servings_recipe() {
        let r = recipe(0, None, vec![]);
        assert_eq!(scale(&r, 2), Err(TransformError::InvalidRecipeServings));
    }

    #[test]
    fn test_into_recipe_leaves_original_untouched() {
        let r = recipe(4, Some(20), vec![Ingredient::new("flour", "2", "cups")]);
        let scaled = scale(&r, 2).unwrap().into_recipe(&r);
        assert_eq!(scaled.servings, 2);
        assert_eq!(scaled.ingredients[0].quantity_text, "1.0");
        assert_eq!(scaled.title, r.title);
        assert_eq!(scaled.instructions, r.instructions);
        assert_eq!(r.ingredients[0].quantity_text, "2");
        assert_eq!(r.servings, 4);
    }

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(4.0), "4.0");
        assert_eq!(format_quantity(0.5), "0.5");
        assert_eq!(format_quantity(1.25), "1.25");
        assert_eq!(format_quantity(0.33), "0.33");
    }
}
