//! Quantity parsing, gram estimation, and nutrition aggregation

pub mod aggregator;
pub mod converter;
pub mod quantity;
pub mod table;
pub mod units;

pub use aggregator::{IngredientMatch, NutritionAggregator, NutritionEstimate};
pub use converter::{grams_per_unit, to_grams, FALLBACK_GRAMS_PER_CUP, FALLBACK_GRAMS_PER_UNIT};
pub use quantity::{parse_quantity, split_numeric_prefix, ParsedQuantity};
pub use table::{MatchConfidence, NutrientTable, TableMatch};
pub use units::{categorize_unit, UnitCategory};
