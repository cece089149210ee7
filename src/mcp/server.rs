//! CookPilot MCP Server Implementation
//!
//! Implements the MCP server with all CookPilot tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::models::{BalanceEffect, Ingredient, Recipe};
use crate::nutrition::NutritionAggregator;
use crate::tools::nutrition;
use crate::tools::recipes;
use crate::tools::status::StatusTracker;
use crate::tools::substitutions;
use crate::tools::temperature;
use crate::transform::{SubstitutionCalculator, SubstitutionRecord};

/// CookPilot MCP Service
///
/// Custom substitutions and the substitution history live on the service
/// instance and are shared by every clone of it.
#[derive(Clone)]
pub struct CookPilotService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    calculator: Arc<std::sync::Mutex<SubstitutionCalculator>>,
    history: Arc<std::sync::Mutex<Vec<SubstitutionRecord>>>,
    aggregator: Arc<NutritionAggregator>,
    tool_router: ToolRouter<CookPilotService>,
}

impl CookPilotService {
    pub fn new(calculator: SubstitutionCalculator, aggregator: NutritionAggregator) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            calculator: Arc::new(std::sync::Mutex::new(calculator)),
            history: Arc::new(std::sync::Mutex::new(Vec::new())),
            aggregator: Arc::new(aggregator),
            tool_router: Self::tool_router(),
        }
    }

    fn calculator(&self) -> Result<std::sync::MutexGuard<'_, SubstitutionCalculator>, McpError> {
        self.calculator
            .lock()
            .map_err(|e| McpError::internal_error(format!("Lock error: {}", e), None))
    }

    fn history(&self) -> Result<std::sync::MutexGuard<'_, Vec<SubstitutionRecord>>, McpError> {
        self.history
            .lock()
            .map_err(|e| McpError::internal_error(format!("Lock error: {}", e), None))
    }
}

impl Default for CookPilotService {
    fn default() -> Self {
        Self::new(SubstitutionCalculator::default(), NutritionAggregator::default())
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Recipe Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    /// Ingredient name (e.g., "All-purpose flour")
    pub name: String,
    /// Free-text amount: "2", "1/2", "2 1/4", "1.5", "a pinch"
    #[serde(default)]
    pub quantity: String,
    /// Unit (e.g., "cups", "tbsp", "g"); empty for counted items
    #[serde(default)]
    pub unit: Option<String>,
    pub category: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RecipeParams {
    pub id: Option<String>,
    pub title: String,
    /// Number of servings the recipe makes (must be at least 1)
    pub servings: u32,
    pub ingredients: Vec<IngredientParams>,
    #[serde(default)]
    pub instructions: Vec<String>,
    pub cook_time_minutes: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl From<RecipeParams> for Recipe {
    fn from(p: RecipeParams) -> Self {
        Recipe {
            id: p.id.unwrap_or_default(),
            title: p.title,
            servings: p.servings,
            ingredients: p
                .ingredients
                .into_iter()
                .map(|i| Ingredient {
                    name: i.name,
                    quantity_text: i.quantity,
                    unit: i.unit.unwrap_or_default(),
                    category: i.category,
                })
                .collect(),
            instructions: p.instructions,
            cook_time_minutes: p.cook_time_minutes,
            tags: p.tags,
        }
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ParseQuantityParams {
    /// Quantity text, optionally followed by unit and name (e.g., "2 1/4 cups flour")
    pub text: String,
    /// Unit to use when the text has none
    pub unit: Option<String>,
    /// Ingredient name used for density lookup
    pub ingredient: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleRecipeParams {
    pub recipe: RecipeParams,
    /// Desired number of servings (must be at least 1)
    pub target_servings: i64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateNutritionParams {
    pub recipe: RecipeParams,
    /// Divide totals by the recipe's servings
    #[serde(default)]
    pub per_serving: bool,
}

// ============================================================================
// Substitution Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListSubstitutionsParams {
    /// Exact ingredient name (e.g., "Butter")
    pub ingredient: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreviewSubstitutionParams {
    pub ingredient: String,
    /// Substitute name as returned by list_substitutions (case-insensitive)
    pub substitute: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ApplySubstitutionParams {
    pub recipe: RecipeParams,
    /// Ingredient name as it appears in the recipe
    pub ingredient: String,
    pub substitute: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddCustomSubstitutionParams {
    pub ingredient: String,
    pub substitute: String,
    /// Replacement ratio (e.g., "1:1", "3/4 cup per cup")
    #[serde(default = "default_ratio")]
    pub ratio: String,
    #[serde(default)]
    pub impact: String,
    /// Flavor change relative to 100 (e.g., -10)
    #[serde(default)]
    pub flavor: i32,
    #[serde(default)]
    pub texture: i32,
    #[serde(default)]
    pub moisture: i32,
}

fn default_ratio() -> String { "1:1".to_string() }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TemperatureGuideParams {
    /// meat, seafood, eggs, baked or leftovers; omit for all
    pub category: Option<String>,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl CookPilotService {
    // --- Status ---

    #[tool(description = "Get the current status of the CookPilot service including build info, process information, and usage instructions")]
    async fn cookpilot_status(&self) -> Result<CallToolResult, McpError> {
        let (ingredients, options) = {
            let calc = self.calculator()?;
            (calc.repository().ingredients().len(), calc.repository().option_count())
        };
        let applied = self.history()?.len();

        let tracker = self.status_tracker.lock().await;
        let status = tracker.get_status(ingredients, options, applied);
        json_result(&status)
    }

    // --- Recipes ---

    #[tool(description = "Parse a quantity string like '2 1/4 cups flour' into value, unit and name, with an estimated mass in grams")]
    fn parse_quantity(&self, Parameters(p): Parameters<ParseQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = recipes::preview_quantity(&p.text, p.unit.as_deref(), p.ingredient.as_deref());
        json_result(&result)
    }

    #[tool(description = "Scale a recipe to a target number of servings. Quantities are multiplied and cook time is adjusted by the square root of the scale factor.")]
    fn scale_recipe(&self, Parameters(p): Parameters<ScaleRecipeParams>) -> Result<CallToolResult, McpError> {
        let recipe = Recipe::from(p.recipe);
        let result = recipes::scale_recipe(&recipe, p.target_servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    // --- Substitutions ---

    #[tool(description = "List known substitutes for an ingredient with ratios and expected impact")]
    fn list_substitutions(&self, Parameters(p): Parameters<ListSubstitutionsParams>) -> Result<CallToolResult, McpError> {
        let calc = self.calculator()?;
        let result = substitutions::list_substitutions(&calc, &p.ingredient);
        json_result(&result)
    }

    #[tool(description = "Score a substitution's effect on flavor, texture and moisture and get cooking adjustments, without changing any recipe")]
    fn preview_substitution(&self, Parameters(p): Parameters<PreviewSubstitutionParams>) -> Result<CallToolResult, McpError> {
        let calc = self.calculator()?;
        let result = substitutions::preview_substitution(&calc, &p.ingredient, &p.substitute)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Replace an ingredient in a recipe with a known substitute. Returns the updated recipe and balance scores, and records the substitution in this session's history.")]
    fn apply_substitution(&self, Parameters(p): Parameters<ApplySubstitutionParams>) -> Result<CallToolResult, McpError> {
        let recipe = Recipe::from(p.recipe);
        let calc = self.calculator()?;
        let mut history = self.history()?;
        let result = substitutions::apply_substitution(&calc, &mut history, &recipe, &p.ingredient, &p.substitute)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Register a custom substitute for an ingredient. Visible only to this server session.")]
    fn add_custom_substitution(&self, Parameters(p): Parameters<AddCustomSubstitutionParams>) -> Result<CallToolResult, McpError> {
        let option = substitutions::custom_option(
            &p.substitute,
            &p.ratio,
            &p.impact,
            Some(BalanceEffect::new(p.flavor, p.texture, p.moisture)),
        );
        let mut calc = self.calculator()?;
        let result = substitutions::add_custom_substitution(&mut calc, p.ingredient.trim(), option)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List substitutions applied during this session, newest first")]
    fn substitution_history(&self) -> Result<CallToolResult, McpError> {
        let history = self.history()?;
        let result = substitutions::substitution_history(&history);
        json_result(&result)
    }

    // --- Nutrition ---

    #[tool(description = "Estimate calories, protein, carbs, fat, fiber and sugar for a recipe, in total or per serving")]
    fn calculate_nutrition(&self, Parameters(p): Parameters<CalculateNutritionParams>) -> Result<CallToolResult, McpError> {
        let recipe = Recipe::from(p.recipe);
        let result = nutrition::calculate_nutrition(&self.aggregator, &recipe, p.per_serving);
        json_result(&result)
    }

    // --- Food Safety ---

    #[tool(description = "Safe internal cooking temperatures by food category")]
    fn temperature_guide(&self, Parameters(p): Parameters<TemperatureGuideParams>) -> Result<CallToolResult, McpError> {
        let result = temperature::temperature_guide(p.category.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

#[tool_handler]
impl ServerHandler for CookPilotService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "cookpilot".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("CookPilot".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "CookPilot - Recipe scaling, ingredient substitution, and nutrition estimates. \
                 Call cookpilot_status for usage instructions. Recipes are passed inline on every call. \
                 Quantities: parse_quantity. Scaling: scale_recipe. \
                 Substitutions: list_substitutions, preview_substitution, apply_substitution, \
                 add_custom_substitution, substitution_history. \
                 Nutrition: calculate_nutrition. Food safety: temperature_guide."
                    .into(),
            ),
        }
    }
}
