//! Nutrient profile shared by the nutrient table and aggregated estimates

use serde::{Deserialize, Serialize};

/// Nutrition facts; per 100 g in the table, totals in estimates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientProfile {
    pub calories: f64,
    pub protein: f64, // grams
    pub carbs: f64,   // grams
    pub fat: f64,     // grams
    pub fiber: f64,   // grams
    pub sugar: f64,   // grams
}

impl NutrientProfile {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64, sugar: f64) -> Self {
        Self { calories, protein, carbs, fat, fiber, sugar }
    }

    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every field by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein: self.protein * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
            fiber: self.fiber * multiplier,
            sugar: self.sugar * multiplier,
        }
    }

    pub fn add(&self, other: &NutrientProfile) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein: self.protein + other.protein,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
            fiber: self.fiber + other.fiber,
            sugar: self.sugar + other.sugar,
        }
    }

    /// Round every field to one decimal place
    pub fn rounded(&self) -> Self {
        let round1 = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            calories: round1(self.calories),
            protein: round1(self.protein),
            carbs: round1(self.carbs),
            fat: round1(self.fat),
            fiber: round1(self.fiber),
            sugar: round1(self.sugar),
        }
    }

    /// Field names paired with values, in display order
    pub fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("calories", self.calories),
            ("protein", self.protein),
            ("carbs", self.carbs),
            ("fat", self.fat),
            ("fiber", self.fiber),
            ("sugar", self.sugar),
        ]
    }

    /// First field that is negative or not finite, if any
    pub fn first_invalid_field(&self) -> Option<&'static str> {
        self.fields()
            .into_iter()
            .find(|(_, v)| !v.is_finite() || *v < 0.0)
            .map(|(name, _)| name)
    }
}

impl std::ops::Add for NutrientProfile {
    type Output = NutrientProfile;

    fn add(self, other: NutrientProfile) -> NutrientProfile {
        NutrientProfile::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for NutrientProfile {
    type Output = NutrientProfile;

    fn mul(self, multiplier: f64) -> NutrientProfile {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutrientProfile {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutrientProfile::zero(), |acc, n| acc + n)
    }
}
