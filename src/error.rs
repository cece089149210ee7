//! Engine error types

use thiserror::Error;

/// Errors reported by recipe transformations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    #[error("Target servings must be at least 1 (got {requested})")]
    InvalidServings { requested: i64 },

    #[error("Recipe declares zero servings; cannot derive a scale factor")]
    InvalidRecipeServings,

    #[error("Nutrient table entry '{key}' has a negative {field} value")]
    NegativeNutrient { key: String, field: &'static str },

    #[error("Ingredient '{ingredient}' is not in the recipe; cannot substitute '{substitute}'")]
    UnknownSubstitution { ingredient: String, substitute: String },

    #[error("Substitute '{substitute}' has {axis} effect {value}; effects must be within -100..=100")]
    EffectOutOfRange { substitute: String, axis: &'static str, value: i32 },
}

/// Result type for engine operations
pub type TransformResult<T> = Result<T, TransformError>;
