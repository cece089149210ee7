//! CookPilot Library
//!
//! Recipe transformation engine: scaling, ingredient substitution with
//! balance scoring, and nutrition estimates. The MCP server in [`mcp`]
//! exposes it over stdio.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod models;
pub mod nutrition;
pub mod temperature;
pub mod tools;
pub mod transform;

pub use error::{TransformError, TransformResult};
