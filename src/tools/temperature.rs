//! Temperature guide tool

use serde::Serialize;

use crate::temperature::{fahrenheit_to_celsius, guide, TemperatureCategory};

#[derive(Debug, Serialize)]
pub struct TemperatureRow {
    pub food: &'static str,
    pub temperature: String,
    pub fahrenheit_min: Option<f64>,
    pub celsius_min: Option<f64>,
    pub notes: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TemperatureSection {
    pub category: TemperatureCategory,
    pub label: &'static str,
    pub entries: Vec<TemperatureRow>,
}

#[derive(Debug, Serialize)]
pub struct TemperatureGuideResponse {
    pub sections: Vec<TemperatureSection>,
}

fn section(category: TemperatureCategory) -> TemperatureSection {
    let entries = guide(category)
        .iter()
        .map(|entry| {
            let low = entry.fahrenheit.map(|(low, _)| low);
            TemperatureRow {
                food: entry.food,
                temperature: entry.display(),
                fahrenheit_min: low,
                celsius_min: low.map(|f| fahrenheit_to_celsius(f).round()),
                notes: entry.notes,
            }
        })
        .collect();

    TemperatureSection {
        category,
        label: category.label(),
        entries,
    }
}

/// One category, or every category when none is given
pub fn temperature_guide(category: Option<&str>) -> Result<TemperatureGuideResponse, String> {
    let sections = match category {
        Some(name) => vec![section(name.parse()?)],
        None => TemperatureCategory::ALL.into_iter().map(section).collect(),
    };
    Ok(TemperatureGuideResponse { sections })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_category() {
        let response = temperature_guide(Some("poultry")).unwrap();
        assert_eq!(response.sections.len(), 1);
        assert_eq!(response.sections[0].label, "Meat & Poultry");
        assert_eq!(response.sections[0].entries[2].celsius_min, Some(74.0));
    }

    #[test]
    fn test_all_categories() {
        let response = temperature_guide(None).unwrap();
        assert_eq!(response.sections.len(), TemperatureCategory::ALL.len());
    }

    #[test]
    fn test_unknown_category() {
        assert!(temperature_guide(Some("dessert")).is_err());
    }
}
