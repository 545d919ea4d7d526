use crate::config::types::{Config, PartialConfig};
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Reads a partial configuration from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(PartialConfig)` - The values present in the file
/// * `Err(ConfigError)` - Failed to read or parse the file
pub fn load_config_file(path: &Path) -> Result<PartialConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let partial: PartialConfig = toml::from_str(&content)?;
    Ok(partial)
}

/// Builds the effective configuration
///
/// Values are taken, in order of precedence, from `overrides` (command line
/// and environment), then the optional TOML file, then built-in defaults.
/// The result is validated before being returned.
///
/// # Arguments
///
/// * `file` - Optional path to a TOML configuration file
/// * `overrides` - Values given on the command line or through the environment
///
/// # Returns
///
/// * `Ok(Config)` - Merged and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use newsbrief::config::{build_config, PartialConfig};
///
/// let config = build_config(Some(Path::new("newsbrief.toml")), PartialConfig::default()).unwrap();
/// println!("Listening on port {}", config.server.port);
/// ```
pub fn build_config(file: Option<&Path>, overrides: PartialConfig) -> Result<Config, ConfigError> {
    let base = match file {
        Some(path) => load_config_file(path)?,
        None => PartialConfig::default(),
    };

    let config = base.overlay(overrides).resolve();
    validate(&config)?;

    Ok(config)
}
