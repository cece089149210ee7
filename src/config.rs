//! Server configuration
//!
//! Read from environment variables at startup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::error::TransformError;
use crate::models::SubstitutionOption;
use crate::transform::check_option;

/// Optional JSON file of extra substitutions
pub const SUBSTITUTIONS_PATH_VAR: &str = "COOKPILOT_SUBSTITUTIONS_PATH";
/// Log filter directive, e.g. "cookpilot=debug"
pub const LOG_VAR: &str = "COOKPILOT_LOG";

/// Standard filter variable; takes precedence over COOKPILOT_LOG
pub const RUST_LOG_VAR: &str = "RUST_LOG";

pub const DEFAULT_LOG_DIRECTIVE: &str = "cookpilot=info";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid substitutions JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid substitution for '{ingredient}': {source}")]
    Substitution {
        ingredient: String,
        #[source]
        source: TransformError,
    },
}

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub substitutions_path: Option<PathBuf>,
    pub log_directive: String,
    pub rust_log: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            substitutions_path: None,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
            rust_log: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            substitutions_path: non_empty(SUBSTITUTIONS_PATH_VAR).map(PathBuf::from),
            log_directive: non_empty(LOG_VAR).unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string()),
            rust_log: non_empty(RUST_LOG_VAR),
        }
    }

    /// Log filter from RUST_LOG, then COOKPILOT_LOG, then the default.
    ///
    /// Unparseable settings are skipped; the second value lists them so the
    /// caller can warn once logging is up.
    pub fn log_filter(&self) -> (EnvFilter, Vec<String>) {
        let mut warnings = Vec::new();
        let candidates = [
            (RUST_LOG_VAR, self.rust_log.as_deref()),
            (LOG_VAR, Some(self.log_directive.as_str())),
        ];

        for (var, value) in candidates {
            let Some(value) = value else { continue };
            match EnvFilter::try_new(value) {
                Ok(filter) => return (filter, warnings),
                Err(e) => warnings.push(format!("Ignoring {}={:?}: {}", var, value, e)),
            }
        }

        (EnvFilter::new(DEFAULT_LOG_DIRECTIVE), warnings)
    }
}

/// Load `{ "<ingredient>": [SubstitutionOption, ...] }` from a JSON file
pub fn load_custom_substitutions(
    path: &Path,
) -> ConfigResult<HashMap<String, Vec<SubstitutionOption>>> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_custom_substitutions(&contents)
}

pub fn parse_custom_substitutions(
    json: &str,
) -> ConfigResult<HashMap<String, Vec<SubstitutionOption>>> {
    let entries: HashMap<String, Vec<SubstitutionOption>> = serde_json::from_str(json)?;
    for (ingredient, options) in &entries {
        for option in options {
            check_option(option).map_err(|source| ConfigError::Substitution {
                ingredient: ingredient.clone(),
                source,
            })?;
        }
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_when_unset() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_reads_variables() {
        let config = ServerConfig::from_lookup(|key| match key {
            SUBSTITUTIONS_PATH_VAR => Some("/etc/cookpilot/subs.json".to_string()),
            LOG_VAR => Some("cookpilot=debug".to_string()),
            _ => None,
        });
        assert_eq!(config.substitutions_path, Some(PathBuf::from("/etc/cookpilot/subs.json")));
        assert_eq!(config.log_directive, "cookpilot=debug");
    }

    #[test]
    fn test_blank_values_are_ignored() {
        let config = ServerConfig::from_lookup(|_| Some("  ".to_string()));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn test_rust_log_takes_precedence() {
        let config = ServerConfig::from_lookup(|key| match key {
            RUST_LOG_VAR => Some("cookpilot=trace".to_string()),
            LOG_VAR => Some("cookpilot=warn".to_string()),
            _ => None,
        });
        let (filter, warnings) = config.log_filter();
        assert_eq!(filter.to_string().to_lowercase(), "cookpilot=trace");
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_cookpilot_log_used_without_rust_log() {
        let config = ServerConfig::from_lookup(|key| match key {
            LOG_VAR => Some("cookpilot=debug".to_string()),
            _ => None,
        });
        assert_eq!(config.log_filter().0.to_string().to_lowercase(), "cookpilot=debug");
    }

    #[test]
    fn test_malformed_directive_falls_back_with_warning() {
        let config = ServerConfig::from_lookup(|key| match key {
            LOG_VAR => Some("cookpilot=loudest".to_string()),
            _ => None,
        });
        let (filter, warnings) = config.log_filter();
        assert_eq!(filter.to_string().to_lowercase(), DEFAULT_LOG_DIRECTIVE);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains(LOG_VAR));
    }

    #[test]
    fn test_load_custom_substitutions_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "Heavy cream": [
                    {{
                        "substitute_name": "Coconut cream",
                        "ratio_text": "1:1",
                        "impact_description": "Dairy-free, coconut notes",
                        "balance_effect": {{ "flavor": 10, "texture": 0, "moisture": 5 }}
                    }},
                    {{
                        "substitute_name": "Milk + butter",
                        "ratio_text": "3/4 cup milk + 1/4 cup butter",
                        "impact_description": "Will not whip"
                    }}
                ]
            }}"#
        )
        .unwrap();

        let entries = load_custom_substitutions(file.path()).unwrap();
        let options = &entries["Heavy cream"];
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].balance_effect.flavor, 10);
        assert_eq!(options[1].balance_effect.moisture, 0);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_custom_substitutions(Path::new("/nonexistent/cookpilot.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_out_of_range_effect_is_rejected() {
        let err = parse_custom_substitutions(
            r#"{ "Butter": [ {
                "substitute_name": "Lard",
                "ratio_text": "1:1",
                "impact_description": "",
                "balance_effect": { "moisture": 2147483647 }
            } ] }"#,
        )
        .unwrap_err();
        match err {
            ConfigError::Substitution { ingredient, source } => {
                assert_eq!(ingredient, "Butter");
                assert!(matches!(source, TransformError::EffectOutOfRange { axis: "moisture", .. }));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_bad_json_is_json_error() {
        let err = parse_custom_substitutions("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}
