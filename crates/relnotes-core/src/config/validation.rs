//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_changelog(config)?;
    validate_tracker(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn validate_changelog(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "changelog.file".to_string(),
            message: "path cannot be empty".to_string(),
        }
        .into());
    }

    Ok(())
}

fn validate_tracker(config: &Config) -> Result<()> {
    let base = &config.tracker.base_url;

    if base.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "tracker.base_url".to_string(),
            message: "base URL cannot be empty".to_string(),
        }
        .into());
    }

    if !base.starts_with("http://") && !base.starts_with("https://") {
        return Err(ConfigError::InvalidValue {
            field: "tracker.base_url".to_string(),
            message: "base URL must start with http:// or https://".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_changelog_file_rejected() {
        let mut config = Config::default();
        config.changelog.file = std::path::PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_empty_tracker_url_rejected() {
        let mut config = Config::default();
        config.tracker.base_url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_non_http_tracker_url_rejected() {
        let mut config = Config::default();
        config.tracker.base_url = "ftp://bugs.example.org".to_string();
        let err = validate_config(&config).unwrap_err();
        assert!(err.to_string().contains("tracker.base_url"));
    }
}
