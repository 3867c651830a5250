//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::signals::build_signals;
use crate::types::ProjectConfig;
use std::path::Path;

/// File name of the project configuration.
pub const CONFIG_FILE: &str = "pwlgen.toml";

/// Loads and validates a `pwlgen.toml` configuration from a project directory.
///
/// Reads `<project_dir>/pwlgen.toml`, parses it, and validates it.
pub fn load_config(project_dir: &Path) -> Result<ProjectConfig, ConfigError> {
    let config_path = project_dir.join(CONFIG_FILE);
    let content =
        std::fs::read_to_string(&config_path).map_err(|source| ConfigError::IoError {
            path: config_path.clone(),
            source,
        })?;
    load_config_from_str(&content)
}

/// Parses and validates a `pwlgen.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ProjectConfig, ConfigError> {
    let config: ProjectConfig =
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

/// Validates required fields and that every signal definition can be built.
fn validate_config(config: &ProjectConfig) -> Result<(), ConfigError> {
    if config.project.name.trim().is_empty() {
        return Err(ConfigError::MissingField("project.name".to_string()));
    }
    if config.project.cycles == 0 {
        return Err(ConfigError::ValidationError(
            "project.cycles must be greater than zero".to_string(),
        ));
    }
    build_signals(config)?;
    Ok(())
}
