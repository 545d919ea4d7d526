use crate::config::types::{Config, FetchConfig, NlpConfig, ServerConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_server_config(&config.server)?;
    validate_nlp_config(&config.nlp)?;
    validate_fetch_config(&config.fetch)?;
    Ok(())
}

/// Validates server configuration
fn validate_server_config(config: &ServerConfig) -> Result<(), ConfigError> {
    if config.host.is_empty() {
        return Err(ConfigError::Validation("host cannot be empty".to_string()));
    }

    if config.port == 0 {
        return Err(ConfigError::Validation(
            "port must be between 1 and 65535, got 0".to_string(),
        ));
    }

    if config.secret_key.is_empty() {
        return Err(ConfigError::Validation(
            "secret_key cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates language data configuration
fn validate_nlp_config(config: &NlpConfig) -> Result<(), ConfigError> {
    if config.data_dir.as_os_str().is_empty() {
        return Err(ConfigError::Validation(
            "data_dir cannot be empty".to_string(),
        ));
    }

    let url = Url::parse(&config.lexicon_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid lexicon_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "lexicon_url '{}' must use HTTP or HTTPS",
            config.lexicon_url
        )));
    }

    Ok(())
}

/// Validates outbound fetch configuration
fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
