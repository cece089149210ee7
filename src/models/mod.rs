//! Data models
//!
//! Plain value types consumed and produced by the transformation engine.

mod nutrition;
mod recipe;
mod substitution;

pub use nutrition::NutrientProfile;
pub use recipe::{Ingredient, Recipe};
pub use substitution::{
    AxisBands, BalanceBand, BalanceEffect, BalanceResult, SubstitutionOption,
    SubstitutionVerdict, MAX_AXIS_EFFECT,
};
