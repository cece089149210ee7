//! CookPilot Tools module
//!
//! Tool implementations behind the MCP server. Each function validates its
//! input, calls the engine, and returns a serializable response.

pub mod nutrition;
pub mod recipes;
pub mod status;
pub mod substitutions;
pub mod temperature;
