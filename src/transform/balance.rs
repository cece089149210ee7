//! Recipe balance after a substitution
//!
//! Each axis (flavor, texture, moisture) starts at 100 and moves by the
//! option's effect. Bands use four cut lines: 80, 90, 110 and 120.

use crate::models::{AxisBands, BalanceBand, BalanceEffect, BalanceResult, SubstitutionVerdict};
use crate::temperature::fahrenheit_delta_to_celsius;

/// Axis value before any substitution
pub const BASELINE: i32 = 100;

/// Oven temperature drop suggested for very moist results
const OVEN_DROP_F: f64 = 25.0;

pub const NO_ADJUSTMENT_NEEDED: &str = "No major adjustments needed for this substitution.";

/// Compute the post-substitution balance and its advice
pub fn compute_balance(effect: &BalanceEffect) -> BalanceResult {
    let flavor = BASELINE.saturating_add(effect.flavor);
    let texture = BASELINE.saturating_add(effect.texture);
    let moisture = BASELINE.saturating_add(effect.moisture);

    BalanceResult {
        flavor,
        texture,
        moisture,
        bands: AxisBands {
            flavor: BalanceBand::from_value(flavor),
            texture: BalanceBand::from_value(texture),
            moisture: BalanceBand::from_value(moisture),
        },
        adjustments: recommend_adjustments(flavor, texture, moisture),
        verdict: verdict(flavor, texture, moisture),
        summary: summarize(flavor, texture),
    }
}

/// Cooking adjustments for the axes that leave their comfortable range
pub fn recommend_adjustments(flavor: i32, texture: i32, moisture: i32) -> Vec<String> {
    let mut adjustments = Vec::new();

    if moisture > 120 {
        adjustments.push("Increase baking time by 5-10 minutes to account for extra moisture.".to_string());
        adjustments.push(format!(
            "Reduce oven temperature by {:.0}°F (about {:.0}°C) to prevent over-browning.",
            OVEN_DROP_F,
            fahrenheit_delta_to_celsius(OVEN_DROP_F)
        ));
    } else if moisture < 80 {
        adjustments.push("Reduce baking time by 5 minutes to prevent dryness.".to_string());
        adjustments.push(
            "Consider adding 2-3 tablespoons of liquid (milk, water, oil) to the recipe.".to_string(),
        );
    }

    if flavor < 90 {
        adjustments.push("Consider adding 1/2 tsp more vanilla or spices to enhance flavor.".to_string());
        adjustments.push("A pinch of salt can help bring out the remaining flavors.".to_string());
    } else if flavor > 110 {
        adjustments.push(
            "You may want to reduce other flavorings slightly to balance the recipe.".to_string(),
        );
    }

    if texture < 80 {
        adjustments.push(
            "Add 1/4 tsp xanthan gum or 1 tbsp cornstarch to improve structure.".to_string(),
        );
        adjustments.push(
            "Let the batter/dough rest longer before baking to develop structure.".to_string(),
        );
    }

    if adjustments.is_empty() {
        adjustments.push(NO_ADJUSTMENT_NEEDED.to_string());
    }
    adjustments
}

fn verdict(flavor: i32, texture: i32, moisture: i32) -> SubstitutionVerdict {
    let axes = [flavor, texture, moisture];
    if axes.iter().all(|v| (90..=110).contains(v)) {
        SubstitutionVerdict::Excellent
    } else if axes.iter().all(|v| (80..=120).contains(v)) {
        SubstitutionVerdict::Good
    } else {
        SubstitutionVerdict::Challenging
    }
}

fn summarize(flavor: i32, texture: i32) -> String {
    let flavor_part = match flavor {
        f if f > 105 => "enhance the flavor profile",
        f if f < 95 => "slightly reduce the flavor intensity",
        _ => "maintain a similar flavor profile",
    };
    let texture_part = match texture {
        t if t > 105 => "create a firmer texture",
        t if t < 95 => "result in a softer texture",
        _ => "maintain a similar texture",
    };
    format!("This substitution will {} and {}.", flavor_part, texture_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_applesauce_for_butter() {
        let result = compute_balance(&BalanceEffect::new(-10, -15, 25));
        assert_eq!((result.flavor, result.texture, result.moisture), (90, 85, 125));
        assert_eq!(result.bands.flavor, BalanceBand::Good);
        assert_eq!(result.bands.texture, BalanceBand::CautionLow);
        assert_eq!(result.bands.moisture, BalanceBand::PoorHigh);
        assert!(result.adjustments.iter().any(|a| a.contains("Increase baking time")));
        assert!(result.adjustments.iter().any(|a| a.contains("25°F (about 14°C)")));
        assert_eq!(result.verdict, SubstitutionVerdict::Challenging);
    }

    #[test]
    fn test_extreme_effects_saturate() {
        let result = compute_balance(&BalanceEffect::new(i32::MIN, 0, i32::MAX));
        assert_eq!(result.flavor, i32::MIN);
        assert_eq!(result.moisture, i32::MAX);
        assert_eq!(result.bands.flavor, BalanceBand::PoorLow);
        assert_eq!(result.bands.moisture, BalanceBand::PoorHigh);
        assert!(result.adjustments.iter().any(|a| a.contains("Increase baking time")));
    }

    #[test]
    fn test_no_adjustment_message_when_balanced() {
        let result = compute_balance(&BalanceEffect::default());
        assert_eq!(result.adjustments, vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        assert_eq!(result.verdict, SubstitutionVerdict::Excellent);
        assert_eq!(
            result.summary,
            "This substitution will maintain a similar flavor profile and maintain a similar texture."
        );
    }

    #[test]
    fn test_dry_result() {
        let adjustments = recommend_adjustments(100, 100, 79);
        assert_eq!(adjustments.len(), 2);
        assert!(adjustments[0].contains("Reduce baking time by 5 minutes"));
        assert!(adjustments[1].contains("2-3 tablespoons of liquid"));
    }

    #[test]
    fn test_moisture_boundaries_are_exclusive() {
        assert_eq!(recommend_adjustments(100, 100, 80), vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        assert_eq!(recommend_adjustments(100, 100, 120), vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        assert_eq!(recommend_adjustments(100, 100, 121).len(), 2);
    }

    #[test]
    fn test_flavor_boundaries() {
        assert_eq!(recommend_adjustments(90, 100, 100), vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        assert_eq!(recommend_adjustments(89, 100, 100).len(), 2);
        assert_eq!(recommend_adjustments(110, 100, 100), vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        let high = recommend_adjustments(111, 100, 100);
        assert_eq!(high.len(), 1);
        assert!(high[0].contains("reduce other flavorings"));
    }

    #[test]
    fn test_texture_boundary() {
        assert_eq!(recommend_adjustments(100, 80, 100), vec![NO_ADJUSTMENT_NEEDED.to_string()]);
        let soft = recommend_adjustments(100, 79, 100);
        assert!(soft[0].contains("xanthan gum"));
        assert!(soft[1].contains("rest longer"));
    }

    #[test]
    fn test_advice_combines_across_axes() {
        let adjustments = recommend_adjustments(85, 75, 125);
        assert_eq!(adjustments.len(), 6);
    }

    #[test]
    fn test_verdict_edges() {
        assert_eq!(verdict(90, 110, 100), SubstitutionVerdict::Excellent);
        assert_eq!(verdict(89, 110, 100), SubstitutionVerdict::Good);
        assert_eq!(verdict(80, 120, 100), SubstitutionVerdict::Good);
        assert_eq!(verdict(79, 100, 100), SubstitutionVerdict::Challenging);
    }

    #[test]
    fn test_summary_direction() {
        let summary = summarize(115, 80);
        assert_eq!(
            summary,
            "This substitution will enhance the flavor profile and result in a softer texture."
        );
    }
}
