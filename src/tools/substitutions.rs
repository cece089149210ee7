//! Substitution tools
//!
//! Listing, previewing and applying ingredient substitutions, plus the
//! per-session history of applied substitutions.

use serde::Serialize;

use crate::models::{BalanceEffect, BalanceResult, Recipe, SubstitutionOption};
use crate::transform::{substitute_ingredient, SubstitutionCalculator, SubstitutionRecord};

#[derive(Debug, Serialize)]
pub struct ListSubstitutionsResponse {
    pub ingredient: String,
    pub options: Vec<SubstitutionOption>,
    /// Ingredients with known substitutes, when the requested one has none
    pub known_ingredients: Option<Vec<String>>,
}

#[derive(Debug, Serialize)]
pub struct PreviewSubstitutionResponse {
    pub ingredient: String,
    pub option: SubstitutionOption,
    pub balance: BalanceResult,
}

#[derive(Debug, Serialize)]
pub struct ApplySubstitutionResponse {
    pub recipe: Recipe,
    pub substitution: SubstitutionRecord,
    pub balance: BalanceResult,
}

#[derive(Debug, Serialize)]
pub struct AddSubstitutionResponse {
    pub success: bool,
    pub ingredient: String,
    pub option: SubstitutionOption,
    pub options_for_ingredient: usize,
}

#[derive(Debug, Serialize)]
pub struct SubstitutionHistoryResponse {
    pub count: usize,
    pub substitutions: Vec<SubstitutionRecord>,
}

fn lookup<'a>(
    calculator: &'a SubstitutionCalculator,
    ingredient: &str,
    substitute: &str,
) -> Result<&'a SubstitutionOption, String> {
    calculator.find_option(ingredient, substitute).ok_or_else(|| {
        let known: Vec<&str> = calculator
            .get_options(ingredient)
            .iter()
            .map(|o| o.substitute_name.as_str())
            .collect();
        if known.is_empty() {
            format!("No substitutions are known for '{}'", ingredient)
        } else {
            format!(
                "'{}' is not a known substitute for '{}'. Options: {}",
                substitute,
                ingredient,
                known.join(", ")
            )
        }
    })
}

pub fn list_substitutions(
    calculator: &SubstitutionCalculator,
    ingredient: &str,
) -> ListSubstitutionsResponse {
    let options = calculator.get_options(ingredient).to_vec();
    let known_ingredients = options.is_empty().then(|| {
        calculator
            .repository()
            .ingredients()
            .into_iter()
            .map(String::from)
            .collect()
    });

    ListSubstitutionsResponse {
        ingredient: ingredient.to_string(),
        options,
        known_ingredients,
    }
}

pub fn preview_substitution(
    calculator: &SubstitutionCalculator,
    ingredient: &str,
    substitute: &str,
) -> Result<PreviewSubstitutionResponse, String> {
    let option = lookup(calculator, ingredient, substitute)?;
    Ok(PreviewSubstitutionResponse {
        ingredient: ingredient.to_string(),
        balance: calculator.apply_substitution(option),
        option: option.clone(),
    })
}

/// Swap the ingredient in the recipe and record the substitution
pub fn apply_substitution(
    calculator: &SubstitutionCalculator,
    history: &mut Vec<SubstitutionRecord>,
    recipe: &Recipe,
    ingredient: &str,
    substitute: &str,
) -> Result<ApplySubstitutionResponse, String> {
    let option = lookup(calculator, ingredient, substitute)?;
    let updated = substitute_ingredient(recipe, ingredient, option).map_err(|e| e.to_string())?;

    let record = SubstitutionRecord::new(recipe, ingredient, option);
    history.push(record.clone());
    tracing::info!(
        recipe = %recipe.title,
        original = %ingredient,
        substitute = %option.substitute_name,
        "Applied substitution"
    );

    Ok(ApplySubstitutionResponse {
        recipe: updated,
        substitution: record,
        balance: calculator.apply_substitution(option),
    })
}

pub fn add_custom_substitution(
    calculator: &mut SubstitutionCalculator,
    ingredient: &str,
    option: SubstitutionOption,
) -> Result<AddSubstitutionResponse, String> {
    if ingredient.trim().is_empty() {
        return Err("Ingredient name must not be empty".to_string());
    }
    if option.substitute_name.trim().is_empty() {
        return Err("Substitute name must not be empty".to_string());
    }

    calculator
        .add_option(ingredient, option.clone())
        .map_err(|e| e.to_string())?;
    Ok(AddSubstitutionResponse {
        success: true,
        ingredient: ingredient.to_string(),
        options_for_ingredient: calculator.get_options(ingredient).len(),
        option,
    })
}

/// Applied substitutions, newest first
pub fn substitution_history(history: &[SubstitutionRecord]) -> SubstitutionHistoryResponse {
    SubstitutionHistoryResponse {
        count: history.len(),
        substitutions: history.iter().rev().cloned().collect(),
    }
}

/// Build an option from tool arguments; missing effects default to zero
pub fn custom_option(
    substitute_name: &str,
    ratio_text: &str,
    impact_description: &str,
    effect: Option<BalanceEffect>,
) -> SubstitutionOption {
    SubstitutionOption::new(
        substitute_name.trim(),
        ratio_text,
        impact_description,
        effect.unwrap_or_default(),
    )
}
