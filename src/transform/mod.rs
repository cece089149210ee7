//! Recipe transformations
//!
//! Scaling to a new yield and substituting ingredients. Every operation
//! takes the recipe by reference and returns new values.

pub mod balance;
pub mod scaling;
pub mod substitution;

pub use balance::{compute_balance, recommend_adjustments, BASELINE, NO_ADJUSTMENT_NEEDED};
pub use scaling::{
    format_quantity, scale, scale_quantity_text, CookTimeStrategy, LinearCookTime, RecipeScaler,
    ScaledRecipe, SquareRootCookTime,
};
pub use substitution::{
    check_option, substitute_ingredient, SubstitutionCalculator, SubstitutionRecord,
    SubstitutionRepository,
};
