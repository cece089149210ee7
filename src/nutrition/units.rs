//! Unit types and conversion constants
//!
//! Kitchen units and the gram multipliers used to estimate ingredient mass.
//! Only the metric mass units are exact; every other multiplier is a
//! cooking-grade approximation.

use serde::Serialize;

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Mass units (g, kg, oz, lb)
    Mass,
    /// Volume units (tsp, tbsp, cup, ml, l)
    Volume,
    /// No unit, or a count word (each, large, clove)
    Count,
    /// Anything else; estimated with the generic per-unit fallback
    Unknown,
}

// ============================================================================
// Mass Conversion Constants (to grams)
// ============================================================================

pub const G_PER_KG: f64 = 1000.0;
/// Rounded avoirdupois ounce
pub const G_PER_OZ: f64 = 28.35;
/// Rounded avoirdupois pound
pub const G_PER_LB: f64 = 453.6;

// ============================================================================
// Volume Approximations (to grams)
// ============================================================================

/// Tablespoon of a typical ingredient, assuming roughly water density
pub const G_PER_TBSP: f64 = 15.0;
/// Teaspoon of a typical ingredient, assuming roughly water density
pub const G_PER_TSP: f64 = 5.0;
/// Milliliter at water density
pub const G_PER_ML: f64 = 1.0;
/// Liter at water density
pub const G_PER_LITER: f64 = 1000.0;

// ============================================================================
// Unit Recognition
// ============================================================================

/// Exact gram multiplier for a mass unit
pub fn grams_per_mass_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "g" | "gram" | "grams" => Some(1.0),
        "kg" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "oz" | "ounce" | "ounces" => Some(G_PER_OZ),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

/// Approximate gram multiplier for a volume unit that does not need an
/// ingredient-specific density (everything except cups)
pub fn grams_per_fixed_volume_unit(unit: &str) -> Option<f64> {
    match normalize_unit(unit).as_str() {
        "tbsp" | "tablespoon" | "tablespoons" => Some(G_PER_TBSP),
        "tsp" | "teaspoon" | "teaspoons" => Some(G_PER_TSP),
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(G_PER_ML),
        "l" | "liter" | "liters" | "litre" | "litres" => Some(G_PER_LITER),
        _ => None,
    }
}

/// Whether the unit is a cup, which needs a density lookup
pub fn is_cup(unit: &str) -> bool {
    matches!(normalize_unit(unit).as_str(), "cup" | "cups" | "c")
}

/// Whether the unit means "so many of the thing itself"
pub fn is_count_unit(unit: &str) -> bool {
    matches!(
        normalize_unit(unit).as_str(),
        "" | "each"
            | "piece"
            | "pieces"
            | "whole"
            | "large"
            | "medium"
            | "small"
            | "clove"
            | "cloves"
    )
}

/// Determine the category of a unit string
pub fn categorize_unit(unit: &str) -> UnitCategory {
    if grams_per_mass_unit(unit).is_some() {
        return UnitCategory::Mass;
    }
    if grams_per_fixed_volume_unit(unit).is_some() || is_cup(unit) {
        return UnitCategory::Volume;
    }
    if is_count_unit(unit) {
        return UnitCategory::Count;
    }
    UnitCategory::Unknown
}

/// Lowercase, trim, and drop a trailing period ("tbsp." -> "tbsp")
fn normalize_unit(unit: &str) -> String {
    unit.trim().trim_end_matches('.').to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categorize_mass_units() {
        assert_eq!(categorize_unit("g"), UnitCategory::Mass);
        assert_eq!(categorize_unit("Grams"), UnitCategory::Mass);
        assert_eq!(categorize_unit("oz"), UnitCategory::Mass);
        assert_eq!(categorize_unit("lbs"), UnitCategory::Mass);
        assert_eq!(categorize_unit("kg"), UnitCategory::Mass);
    }

    #[test]
    fn test_categorize_volume_units() {
        assert_eq!(categorize_unit("ml"), UnitCategory::Volume);
        assert_eq!(categorize_unit("tbsp."), UnitCategory::Volume);
        assert_eq!(categorize_unit("cups"), UnitCategory::Volume);
        assert_eq!(categorize_unit("teaspoon"), UnitCategory::Volume);
    }

    #[test]
    fn test_categorize_count_and_unknown() {
        assert_eq!(categorize_unit(""), UnitCategory::Count);
        assert_eq!(categorize_unit("large"), UnitCategory::Count);
        assert_eq!(categorize_unit("cloves"), UnitCategory::Count);
        assert_eq!(categorize_unit("pinch"), UnitCategory::Unknown);
        assert_eq!(categorize_unit("can"), UnitCategory::Unknown);
    }

    #[test]
    fn test_mass_multipliers() {
        assert_eq!(grams_per_mass_unit("g"), Some(1.0));
        assert_eq!(grams_per_mass_unit("oz"), Some(28.35));
        assert_eq!(grams_per_mass_unit("lb"), Some(453.6));
        assert_eq!(grams_per_mass_unit("tbsp"), None);
    }

    #[test]
    fn test_large_is_not_a_mass_unit() {
        // "large" contains a "g" but is a count word
        assert_eq!(grams_per_mass_unit("large"), None);
        assert!(is_count_unit("large"));
    }
}
