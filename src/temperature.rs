//! Safe internal cooking temperatures
//!
//! Reference temperatures by food category, stored in Fahrenheit with
//! Celsius derived on demand.

use std::str::FromStr;

use serde::Serialize;

/// Food categories in the guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TemperatureCategory {
    Meat,
    Seafood,
    Eggs,
    Baked,
    Leftovers,
}

impl TemperatureCategory {
    pub const ALL: [TemperatureCategory; 5] = [
        TemperatureCategory::Meat,
        TemperatureCategory::Seafood,
        TemperatureCategory::Eggs,
        TemperatureCategory::Baked,
        TemperatureCategory::Leftovers,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureCategory::Meat => "meat",
            TemperatureCategory::Seafood => "seafood",
            TemperatureCategory::Eggs => "eggs",
            TemperatureCategory::Baked => "baked",
            TemperatureCategory::Leftovers => "leftovers",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemperatureCategory::Meat => "Meat & Poultry",
            TemperatureCategory::Seafood => "Seafood",
            TemperatureCategory::Eggs => "Eggs",
            TemperatureCategory::Baked => "Baked Goods",
            TemperatureCategory::Leftovers => "Leftovers",
        }
    }
}

impl FromStr for TemperatureCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "meat" | "poultry" => Ok(TemperatureCategory::Meat),
            "seafood" | "fish" => Ok(TemperatureCategory::Seafood),
            "eggs" | "egg" => Ok(TemperatureCategory::Eggs),
            "baked" | "baking" => Ok(TemperatureCategory::Baked),
            "leftovers" => Ok(TemperatureCategory::Leftovers),
            other => Err(format!(
                "Unknown temperature category '{}'. Expected one of: meat, seafood, eggs, baked, leftovers",
                other
            )),
        }
    }
}

/// One row of the guide
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureEntry {
    pub food: &'static str,
    /// Fahrenheit low and optional high; None when doneness is judged visually
    pub fahrenheit: Option<(f64, Option<f64>)>,
    pub notes: &'static str,
}

impl TemperatureEntry {
    /// "145°F (63°C)", "170-175°F (77-79°C)" or "N/A"
    pub fn display(&self) -> String {
        match self.fahrenheit {
            None => "N/A".to_string(),
            Some((low, None)) => format!(
                "{:.0}°F ({:.0}°C)",
                low,
                fahrenheit_to_celsius(low)
            ),
            Some((low, Some(high))) => format!(
                "{:.0}-{:.0}°F ({:.0}-{:.0}°C)",
                low,
                high,
                fahrenheit_to_celsius(low),
                fahrenheit_to_celsius(high)
            ),
        }
    }
}

pub fn fahrenheit_to_celsius(f: f64) -> f64 {
    (f - 32.0) * 5.0 / 9.0
}

/// Convert a temperature difference (no 32° offset)
pub fn fahrenheit_delta_to_celsius(delta_f: f64) -> f64 {
    delta_f * 5.0 / 9.0
}

/// Guide rows for a category
pub fn guide(category: TemperatureCategory) -> &'static [TemperatureEntry] {
    match category {
        TemperatureCategory::Meat => MEAT,
        TemperatureCategory::Seafood => SEAFOOD,
        TemperatureCategory::Eggs => EGGS,
        TemperatureCategory::Baked => BAKED,
        TemperatureCategory::Leftovers => LEFTOVERS,
    }
}

const fn at(f: f64) -> Option<(f64, Option<f64>)> {
    Some((f, None))
}

const MEAT: &[TemperatureEntry] = &[
    TemperatureEntry { food: "Beef, Pork, Veal, Lamb (Steaks, Chops, Roasts)", fahrenheit: at(145.0), notes: "Allow to rest for at least 3 minutes" },
    TemperatureEntry { food: "Ground Meats (Beef, Pork, Veal, Lamb)", fahrenheit: at(160.0), notes: "Cook until no pink remains" },
    TemperatureEntry { food: "Poultry (Whole and Parts)", fahrenheit: at(165.0), notes: "Check temperature in thickest part" },
    TemperatureEntry { food: "Ground Poultry", fahrenheit: at(165.0), notes: "Cook until no pink remains" },
    TemperatureEntry { food: "Ham (Fresh or Smoked, Uncooked)", fahrenheit: at(145.0), notes: "Allow to rest for at least 3 minutes" },
    TemperatureEntry { food: "Fully Cooked Ham (To Reheat)", fahrenheit: at(140.0), notes: "For USDA-inspected plants, 165°F (74°C) for others" },
];

const SEAFOOD: &[TemperatureEntry] = &[
    TemperatureEntry { food: "Fish", fahrenheit: at(145.0), notes: "Until flesh is opaque and separates easily with a fork" },
    TemperatureEntry { food: "Shellfish (Shrimp, Lobster, Crab, Scallops)", fahrenheit: None, notes: "Cook until flesh is pearly or white, and opaque" },
    TemperatureEntry { food: "Clams, Oysters, Mussels", fahrenheit: None, notes: "Cook until shells open during cooking" },
];

const EGGS: &[TemperatureEntry] = &[
    TemperatureEntry { food: "Eggs", fahrenheit: None, notes: "Cook until both the yolk and white are firm" },
    TemperatureEntry { food: "Egg Dishes (e.g., Frittata, Quiche)", fahrenheit: at(160.0), notes: "Cook until center is set" },
];

const BAKED: &[TemperatureEntry] = &[
    TemperatureEntry { food: "Dense Cakes (e.g., Pound Cake, Fruit Cake)", fahrenheit: at(210.0), notes: "Internal temperature when fully baked" },
    TemperatureEntry { food: "Fluffy Cakes (e.g., Chiffon, Chocolate)", fahrenheit: at(200.0), notes: "Internal temperature when fully baked" },
    TemperatureEntry { food: "Quick Breads (e.g., Muffins, Banana Bread)", fahrenheit: at(200.0), notes: "Internal temperature when fully baked" },
    TemperatureEntry { food: "Yeasted Breads (e.g., Rolls, Buns)", fahrenheit: at(190.0), notes: "Internal temperature when fully baked" },
    TemperatureEntry { food: "Custards (e.g., Flan, Pumpkin Pie)", fahrenheit: Some((170.0, Some(175.0))), notes: "Internal temperature when fully baked" },
    TemperatureEntry { food: "Cheesecake", fahrenheit: at(150.0), notes: "For creamy texture without overbaking" },
];

const LEFTOVERS: &[TemperatureEntry] = &[
    TemperatureEntry { food: "Leftovers", fahrenheit: at(165.0), notes: "Reheat thoroughly" },
    TemperatureEntry { food: "Casseroles (Containing Meat and Poultry)", fahrenheit: at(165.0), notes: "Heat until bubbling" },
];
