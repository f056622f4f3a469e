// Configuration validation module

use std::path::PathBuf;

use thiserror::Error;
use tracing::warn;

use crate::config::{load_config, AppConfig};

/// Reasons a loaded configuration is unusable
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("application title must not be empty")]
    EmptyTitle,

    #[error("announcer history_limit must be at least 1")]
    ZeroHistoryLimit,

    #[error("timing `{0}` must be greater than zero")]
    ZeroTiming(&'static str),
}

/// Check invariants the rest of the app relies on
pub fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    if config.application.title.trim().is_empty() {
        return Err(ConfigError::EmptyTitle);
    }
    if config.announcer.history_limit == 0 {
        return Err(ConfigError::ZeroHistoryLimit);
    }
    if config.timings.detection_delay_ms == 0 {
        return Err(ConfigError::ZeroTiming("detection_delay_ms"));
    }
    if config.timings.phrase_flash_ms == 0 {
        return Err(ConfigError::ZeroTiming("phrase_flash_ms"));
    }
    if config.timings.sign_in_delay_ms == 0 {
        return Err(ConfigError::ZeroTiming("sign_in_delay_ms"));
    }
    Ok(())
}

/// Load and validate configuration with error recovery: a missing or
/// unreadable file falls back to compiled defaults, but a file that parses
/// and then fails validation is a hard error.
pub fn load_and_validate_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "failed to load configuration, using defaults");
            AppConfig::default()
        }
    };

    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        assert_eq!(validate(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let mut config = AppConfig::default();
        config.application.title = "   ".to_string();
        assert_eq!(validate(&config), Err(ConfigError::EmptyTitle));
    }

    #[test]
    fn test_zero_timing_is_rejected() {
        let mut config = AppConfig::default();
        config.timings.phrase_flash_ms = 0;
        assert_eq!(validate(&config), Err(ConfigError::ZeroTiming("phrase_flash_ms")));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config =
            load_and_validate_config(Some(PathBuf::from("/nonexistent/config.yaml"))).unwrap();
        assert_eq!(config.application.title, "AccessCare");
    }
}
