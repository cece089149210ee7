//! CookPilot
//!
//! An MCP server for recipe scaling, ingredient substitution, and
//! nutrition estimates.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};

use cookpilot::build_info;
use cookpilot::config::{self, ServerConfig};
use cookpilot::mcp::CookPilotService;
use cookpilot::nutrition::NutritionAggregator;
use cookpilot::transform::{SubstitutionCalculator, SubstitutionRepository};

/// Built-in substitutions plus any configured custom file
fn build_repository(config: &ServerConfig) -> SubstitutionRepository {
    let mut repository = SubstitutionRepository::with_defaults();

    if let Some(path) = &config.substitutions_path {
        match config::load_custom_substitutions(path) {
            Ok(entries) => {
                let added: usize = entries.values().map(Vec::len).sum();
                repository.extend(entries);
                tracing::info!(path = %path.display(), added, "Loaded custom substitutions");
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping custom substitutions");
            }
        }
    }

    repository
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env();
    let (filter, filter_warnings) = config.log_filter();

    // Initialize logging (output to stderr to not interfere with MCP stdio)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    for warning in filter_warnings {
        tracing::warn!("{}", warning);
    }

    // Print startup banner to stderr
    build_info::print_startup_banner();
    eprintln!("Starting MCP server on stdio...");

    let repository = build_repository(&config);
    eprintln!(
        "Substitutions: {} options for {} ingredients",
        repository.option_count(),
        repository.ingredients().len()
    );

    // Create the CookPilot service
    let service = CookPilotService::new(
        SubstitutionCalculator::new(repository),
        NutritionAggregator::default(),
    );

    // Create stdio transport
    let transport = (stdin(), stdout());

    // Start the MCP server
    let server = service.serve(transport).await?;

    // Wait for the server to complete
    server.waiting().await?;

    Ok(())
}
