/// Configuration loading from TOML file
use std::path::Path;

use crate::error::{ClockError, Result};
use crate::types::Config;

/// Load driver configuration. A missing file is not an error; the defaults
/// (1-second refresh, info logging) cover the common case.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    if !path.as_ref().exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .map_err(|e| ClockError::ConfigError(format!("Failed to read config file: {}", e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| ClockError::ConfigError(format!("Failed to parse config: {}", e)))?;

    // Validate config
    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &Config) -> Result<()> {
    if config.log_level.is_empty() {
        return Err(ClockError::ConfigError("log_level is empty".to_string()));
    }

    if config.refresh_secs == 0 || config.refresh_secs > 3600 {
        return Err(ClockError::ConfigError(format!(
            "Invalid refresh_secs: {} (expected 1..=3600)",
            config.refresh_secs
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let config = load_config("does-not-exist.toml").unwrap();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.refresh_secs, 1);
    }

    #[test]
    fn test_parse_with_defaults_filled_in() {
        let config: Config = toml::from_str("log_level = \"debug\"").unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.refresh_secs, 1);
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_rejects_zero_refresh() {
        let config: Config = toml::from_str("refresh_secs = 0").unwrap();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_rejects_oversized_refresh() {
        let config: Config = toml::from_str("refresh_secs = 7200").unwrap();
        assert!(validate_config(&config).is_err());
    }
}
