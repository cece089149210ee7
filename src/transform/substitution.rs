//! Ingredient substitution
//!
//! A [`SubstitutionRepository`] maps exact ingredient names to candidate
//! substitutes. Each [`SubstitutionCalculator`] owns its repository, so
//! custom options registered through one calculator are only visible to
//! whoever shares that calculator.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::balance::compute_balance;
use crate::error::{TransformError, TransformResult};
use crate::models::{BalanceEffect, BalanceResult, Ingredient, Recipe, SubstitutionOption};

/// Ingredient name to substitute candidates
#[derive(Debug, Clone, Default)]
pub struct SubstitutionRepository {
    options: HashMap<String, Vec<SubstitutionOption>>,
}

impl SubstitutionRepository {
    /// Repository with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Repository seeded with the built-in baking substitutions
    pub fn with_defaults() -> Self {
        let mut repo = Self::empty();
        for (ingredient, substitute, ratio, impact, (flavor, texture, moisture)) in BUILT_IN {
            repo.add_option(
                *ingredient,
                SubstitutionOption::new(
                    *substitute,
                    *ratio,
                    *impact,
                    BalanceEffect::new(*flavor, *texture, *moisture),
                ),
            );
        }
        repo
    }

    /// Candidates for an exact ingredient name; empty when none are known
    pub fn options(&self, ingredient: &str) -> &[SubstitutionOption] {
        self.options.get(ingredient).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Append a candidate for an ingredient
    pub fn add_option(&mut self, ingredient: impl Into<String>, option: SubstitutionOption) {
        self.options.entry(ingredient.into()).or_default().push(option);
    }

    /// Append every candidate from another mapping
    pub fn extend(&mut self, entries: HashMap<String, Vec<SubstitutionOption>>) {
        for (ingredient, options) in entries {
            self.options.entry(ingredient).or_default().extend(options);
        }
    }

    /// Ingredient names with at least one candidate, sorted
    pub fn ingredients(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.options.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn option_count(&self) -> usize {
        self.options.values().map(Vec::len).sum()
    }
}

/// Looks up substitutes and scores their effect on the recipe
#[derive(Debug, Clone)]
pub struct SubstitutionCalculator {
    repository: SubstitutionRepository,
}

impl Default for SubstitutionCalculator {
    fn default() -> Self {
        Self::new(SubstitutionRepository::with_defaults())
    }
}

impl SubstitutionCalculator {
    pub fn new(repository: SubstitutionRepository) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &SubstitutionRepository {
        &self.repository
    }

    pub fn get_options(&self, ingredient: &str) -> &[SubstitutionOption] {
        self.repository.options(ingredient)
    }

    /// Find a candidate by ingredient and substitute name
    pub fn find_option(&self, ingredient: &str, substitute: &str) -> Option<&SubstitutionOption> {
        self.get_options(ingredient)
            .iter()
            .find(|o| o.substitute_name.eq_ignore_ascii_case(substitute))
    }

    /// Register a caller-supplied substitute on this calculator's repository
    ///
    /// Rejects effects beyond [`crate::models::MAX_AXIS_EFFECT`] on any axis.
    pub fn add_option(
        &mut self,
        ingredient: impl Into<String>,
        option: SubstitutionOption,
    ) -> TransformResult<()> {
        check_option(&option)?;
        let ingredient = ingredient.into();
        tracing::info!(
            ingredient = %ingredient,
            substitute = %option.substitute_name,
            "Registered custom substitution"
        );
        self.repository.add_option(ingredient, option);
        Ok(())
    }

    pub fn apply_substitution(&self, option: &SubstitutionOption) -> BalanceResult {
        compute_balance(&option.balance_effect)
    }
}

/// Validate a substitution option's balance effect
pub fn check_option(option: &SubstitutionOption) -> TransformResult<()> {
    match option.balance_effect.first_out_of_range() {
        Some((axis, value)) => Err(TransformError::EffectOutOfRange {
            substitute: option.substitute_name.clone(),
            axis,
            value,
        }),
        None => Ok(()),
    }
}

/// Return a copy of `recipe` with `ingredient` replaced by the substitute.
///
/// Quantity and unit are kept; the option's ratio is advice for the cook,
/// not something the engine can apply to free-text amounts.
pub fn substitute_ingredient(
    recipe: &Recipe,
    ingredient: &str,
    option: &SubstitutionOption,
) -> TransformResult<Recipe> {
    if recipe.ingredient(ingredient).is_none() {
        return Err(TransformError::UnknownSubstitution {
            ingredient: ingredient.to_string(),
            substitute: option.substitute_name.clone(),
        });
    }

    let ingredients = recipe
        .ingredients
        .iter()
        .map(|i| {
            if i.name == ingredient {
                Ingredient {
                    name: option.substitute_name.clone(),
                    ..i.clone()
                }
            } else {
                i.clone()
            }
        })
        .collect();

    Ok(Recipe {
        ingredients,
        ..recipe.clone()
    })
}

/// One applied substitution, kept for the session history
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubstitutionRecord {
    pub recipe: String,
    pub original: String,
    pub substitute: String,
    pub ratio: String,
    pub applied_at: DateTime<Utc>,
}

impl SubstitutionRecord {
    pub fn new(recipe: &Recipe, original: &str, option: &SubstitutionOption) -> Self {
        Self {
            recipe: recipe.title.clone(),
            original: original.to_string(),
            substitute: option.substitute_name.clone(),
            ratio: option.ratio_text.clone(),
            applied_at: Utc::now(),
        }
    }
}

type BuiltIn = (&'static str, &'static str, &'static str, &'static str, (i32, i32, i32));

const BUILT_IN: &[BuiltIn] = &[
    ("All-purpose flour", "Almond flour", "1:1", "Creates denser, moister cookies with nutty flavor", (10, -20, 15)),
    ("All-purpose flour", "Gluten-free flour blend", "1:1", "Similar texture with xanthan gum, slightly different flavor", (-5, -5, 0)),
    ("All-purpose flour", "Oat flour", "1:1", "Heartier texture, slightly sweet flavor", (5, -10, -5)),
    ("All-purpose flour", "Coconut flour", "1:4", "Very absorbent, requires more liquid, coconut flavor", (15, -15, -25)),
    ("Butter", "Coconut oil", "1:1", "Adds coconut flavor, slightly different texture", (15, -5, -5)),
    ("Butter", "Applesauce", "1:1", "Reduces fat, adds moisture, less rich", (-10, -15, 25)),
    ("Butter", "Avocado", "1:1", "Creamy texture, subtle flavor, healthier fats", (-5, -5, 10)),
    ("Butter", "Greek yogurt", "1:1", "Tangy flavor, adds protein, reduces fat", (5, -10, 15)),
    ("Granulated sugar", "Honey", "3/4:1", "More moisture, distinct flavor, browns faster", (10, -5, 15)),
    ("Granulated sugar", "Maple syrup", "3/4:1", "Adds maple flavor, more moisture", (15, -5, 15)),
    ("Granulated sugar", "Coconut sugar", "1:1", "Caramel-like flavor, less sweet", (5, 0, -5)),
    ("Granulated sugar", "Stevia", "1/4 tsp per cup of sugar", "Zero calories, very sweet, may have aftertaste", (-10, -15, -20)),
    ("Brown sugar", "Coconut sugar", "1:1", "Similar caramel notes, less moisture", (0, -5, -10)),
    ("Brown sugar", "Date sugar", "1:1", "Rich flavor, natural sweetness", (10, -5, -5)),
    ("Brown sugar", "Maple sugar", "1:1", "Distinct maple flavor, similar texture", (15, 0, -5)),
    ("Eggs", "Flax eggs", "1 tbsp ground flax + 3 tbsp water per egg", "Less binding, vegan-friendly, nuttier flavor", (-5, -15, 5)),
    ("Eggs", "Applesauce", "1/4 cup per egg", "Less structure, more moisture, subtle flavor", (-5, -20, 20)),
    ("Eggs", "Yogurt", "1/4 cup per egg", "Adds tanginess, maintains moisture", (5, -10, 5)),
    ("Eggs", "Banana", "1/2 mashed banana per egg", "Adds banana flavor, good binding", (15, -5, 10)),
    ("Chocolate chips", "Cacao nibs", "1:1", "Less sweet, more bitter, crunchy texture", (-10, 5, -5)),
    ("Chocolate chips", "Chopped nuts", "1:1", "Different texture, nutty flavor", (-5, 10, -10)),
    ("Chocolate chips", "Dried fruit", "1:1", "Sweeter, chewy texture, fruity flavor", (15, -5, 5)),
    ("Chocolate chips", "Carob chips", "1:1", "Naturally sweet, no caffeine, different flavor", (-5, 0, 0)),
    ("Buttermilk", "Milk + lemon juice", "1 cup milk + 1 tbsp lemon juice", "Similar acidity, slightly different flavor", (-5, 0, 0)),
    ("Buttermilk", "Yogurt + milk", "3/4 cup yogurt + 1/4 cup milk", "Thicker consistency, tangy flavor", (5, 5, -5)),
    ("Buttermilk", "Sour cream + water", "3/4 cup sour cream + 1/4 cup water", "Rich and tangy, similar acidity", (10, 5, -5)),
    ("Bananas", "Applesauce", "1:1", "Milder flavor, similar moisture", (-15, -5, 5)),
    ("Bananas", "Pumpkin puree", "1:1", "Earthy flavor, similar moisture", (10, 0, 0)),
    ("Bananas", "Mashed avocado", "1:1", "Creamy texture, less sweet, more fat", (-15, 5, -5)),
    ("Walnuts", "Pecans", "1:1", "Sweeter, buttery flavor", (5, 0, 0)),
    ("Walnuts", "Almonds", "1:1", "Milder flavor, similar crunch", (-5, 5, -5)),
    ("Walnuts", "Sunflower seeds", "1:1", "Allergy-friendly, different flavor", (-10, 5, -5)),
];
