//! Recipe model
//!
//! A recipe as delivered by the external recipe store. The engine only ever
//! reads it; every transformation returns a new value.

use serde::{Deserialize, Serialize};

/// A recipe with its ingredient list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(default = "default_servings")]
    pub servings: u32,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub instructions: Vec<String>,
    #[serde(default)]
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_servings() -> u32 {
    1
}

/// A single ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-text amount: "2", "3/4", "2 1/4", "to taste"
    #[serde(alias = "quantity")]
    pub quantity_text: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub category: Option<String>,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, quantity_text: impl Into<String>, unit: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity_text: quantity_text.into(),
            unit: unit.into(),
            category: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Render as "quantity unit name", skipping empty parts
    pub fn display(&self) -> String {
        [self.quantity_text.as_str(), self.unit.as_str(), self.name.as_str()]
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Recipe {
    /// Find an ingredient by exact name
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        self.ingredients.iter().find(|i| i.name == name)
    }
}
