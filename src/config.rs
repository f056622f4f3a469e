// Configuration loading module

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub application: ApplicationConfig,
    #[serde(default)]
    pub announcer: AnnouncerConfig,
    #[serde(default)]
    pub timings: TimingsConfig,
    #[serde(default = "default_bindings")]
    pub bindings: Vec<BindingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationConfig {
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnnouncerConfig {
    /// How many past announcements the banner can page through
    pub history_limit: usize,
    /// Show the narration banner above the status bar
    #[serde(default = "default_true")]
    pub show_banner: bool,
}

/// Fixed delays behind the mocked external collaborators
#[derive(Debug, Clone, Deserialize)]
pub struct TimingsConfig {
    pub detection_delay_ms: u64,
    pub phrase_flash_ms: u64,
    pub sign_in_delay_ms: u64,
}

impl TimingsConfig {
    pub fn detection_delay(&self) -> Duration {
        Duration::from_millis(self.detection_delay_ms)
    }

    pub fn phrase_flash(&self) -> Duration {
        Duration::from_millis(self.phrase_flash_ms)
    }

    pub fn sign_in_delay(&self) -> Duration {
        Duration::from_millis(self.sign_in_delay_ms)
    }
}

/// One key legend entry for the status bar
#[derive(Debug, Clone, Deserialize)]
pub struct BindingConfig {
    pub key: String,
    pub description: String,
}

fn default_true() -> bool {
    true
}

fn default_bindings() -> Vec<BindingConfig> {
    [
        ("Tab", "Switch tab"),
        ("\u{2191}\u{2193}", "Navigate"),
        ("Enter", "Select"),
        ("Esc", "Back"),
        ("q", "Quit"),
    ]
    .into_iter()
    .map(|(key, description)| BindingConfig {
        key: key.to_string(),
        description: description.to_string(),
    })
    .collect()
}

impl Default for AnnouncerConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            show_banner: true,
        }
    }
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            detection_delay_ms: 2000,
            phrase_flash_ms: 500,
            sign_in_delay_ms: 800,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig {
                title: "AccessCare".to_string(),
                subtitle: "Your Daily Support Hub".to_string(),
            },
            announcer: AnnouncerConfig::default(),
            timings: TimingsConfig::default(),
            bindings: default_bindings(),
        }
    }
}

/// Load configuration from `config_path`, defaulting to the bundled
/// `src/config.yaml`
pub fn load_config(config_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let path = config_path.unwrap_or_else(default_config_path);
    let contents = fs::read_to_string(&path)?;
    let config: AppConfig = serde_yaml::from_str(&contents)?;
    Ok(config)
}

pub fn default_config_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("src");
    path.push("config.yaml");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let config = AppConfig::default();
        assert_eq!(config.application.title, "AccessCare");
        assert_eq!(config.timings.detection_delay(), Duration::from_millis(2000));
        assert!(config.announcer.history_limit > 0);
        assert!(!config.bindings.is_empty());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "application:\n  title: Demo\n  subtitle: Subtitle\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.application.title, "Demo");
        assert_eq!(config.timings.phrase_flash(), Duration::from_millis(500));
    }
}
