//! Gram estimation
//!
//! Converts a parsed quantity into an estimated mass in grams. Mass units are
//! exact; spoons and metric volumes assume water density; cups use an
//! ingredient-specific density table; counted items use an average item
//! mass. None of the non-metric figures are physical constants: they are
//! kitchen approximations good enough for a nutrition estimate.
//!
//! Conversion never fails. Anything unrecognised falls through to
//! [`FALLBACK_GRAMS_PER_UNIT`] so a single odd unit only blurs the estimate.

use super::quantity::ParsedQuantity;
use super::units::{grams_per_fixed_volume_unit, grams_per_mass_unit, is_count_unit, is_cup};

/// Grams per cup when the ingredient has no density entry
pub const FALLBACK_GRAMS_PER_CUP: f64 = 150.0;

/// Grams per unit when neither unit nor ingredient is recognised
pub const FALLBACK_GRAMS_PER_UNIT: f64 = 30.0;

/// Approximate grams per US cup, matched by substring in table order
const CUP_DENSITIES: &[(&str, f64)] = &[
    ("flour", 125.0),
    ("sugar", 200.0),
    ("rice", 185.0),
    ("milk", 245.0),
];

/// Average mass of one counted item, matched by substring in table order
const ITEM_MASSES: &[(&str, f64)] = &[
    ("egg", 50.0),
    ("banana", 118.0),
    ("onion", 110.0),
    ("potato", 170.0),
    ("carrot", 61.0),
    ("tomato", 123.0),
    ("garlic", 3.0),
];

/// Estimate the grams in a parsed quantity.
///
/// `ingredient` is the ingredient name or the nutrient-table key it matched;
/// it selects the cup density and the counted-item mass.
pub fn to_grams(parsed: &ParsedQuantity, ingredient: Option<&str>) -> f64 {
    parsed.value * grams_per_unit(&parsed.unit, ingredient)
}

/// Grams represented by one of `unit` for the given ingredient
pub fn grams_per_unit(unit: &str, ingredient: Option<&str>) -> f64 {
    if let Some(factor) = grams_per_mass_unit(unit) {
        return factor;
    }

    if let Some(factor) = grams_per_fixed_volume_unit(unit) {
        return factor;
    }

    if is_cup(unit) {
        return ingredient
            .and_then(|name| lookup(CUP_DENSITIES, name))
            .unwrap_or(FALLBACK_GRAMS_PER_CUP);
    }

    if is_count_unit(unit) {
        if let Some(mass) = ingredient.and_then(|name| lookup(ITEM_MASSES, name)) {
            return mass;
        }
    }

    FALLBACK_GRAMS_PER_UNIT
}

fn lookup(table: &[(&str, f64)], ingredient: &str) -> Option<f64> {
    let lower = ingredient.to_lowercase();
    table
        .iter()
        .find(|(key, _)| lower.contains(key))
        .map(|(_, grams)| *grams)
}
