//! CookPilot Status Tool
//!
//! Provides runtime status information about the CookPilot service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Usage guide for AI assistants, returned by cookpilot_status
pub const USAGE_INSTRUCTIONS: &str = r#"
# CookPilot Usage

CookPilot transforms recipes you pass in. It keeps no recipe store; send the
full recipe (title, servings, ingredients) with each call.

## Ingredients

Each ingredient has a `name`, a free-text `quantity` ("2", "1/2", "2 1/4",
"1.5", "a pinch") and an optional `unit` ("cups", "tbsp", "g").

## Scaling

`scale_recipe(recipe, target_servings)`
- target_servings must be at least 1
- Numeric quantities are multiplied and rounded to 2 decimals
- Unreadable quantities are left unchanged and listed in `unscaled_ingredients`
- Cook time is scaled by the square root of the factor (a heuristic)

## Substitutions

1. `list_substitutions(ingredient)` - candidate substitutes
2. `preview_substitution(ingredient, substitute)` - balance scores and advice
3. `apply_substitution(recipe, ingredient, substitute)` - new recipe plus balance
4. `add_custom_substitution(...)` - register your own option for this session
5. `substitution_history()` - substitutions applied this session

Balance axes start at 100. Bands: below 80 poor, 80-89 caution,
90-110 good, 111-120 caution, above 120 poor.

## Nutrition

`calculate_nutrition(recipe, per_serving)` estimates calories, protein,
carbs, fat, fiber and sugar. Ingredients missing from the nutrient table
contribute nothing; the response says how many were not estimated.

## Food Safety

`temperature_guide(category)` lists safe internal temperatures for meat,
seafood, eggs, baked goods and leftovers.
"#;

/// Runtime status of the CookPilot service
#[derive(Debug, Serialize)]
pub struct CookPilotStatus {
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
    pub substitution_ingredients: usize,
    pub substitution_options: usize,
    pub substitutions_applied: usize,
    pub instructions: &'static str,
}

/// Tracks service start time for status reporting
pub struct StatusTracker {
    start_time: Instant,
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
        }
    }

    /// Get the current status
    pub fn get_status(
        &self,
        substitution_ingredients: usize,
        substitution_options: usize,
        substitutions_applied: usize,
    ) -> CookPilotStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        CookPilotStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
            substitution_ingredients,
            substitution_options,
            substitutions_applied,
            instructions: USAGE_INSTRUCTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_counts() {
        let tracker = StatusTracker::new();
        let status = tracker.get_status(9, 32, 2);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.substitution_ingredients, 9);
        assert_eq!(status.substitution_options, 32);
        assert_eq!(status.substitutions_applied, 2);
        assert!(status.instructions.contains("scale_recipe"));
    }
}
