//! Runtime configuration for the fanfare binary.
//!
//! Settings load from a TOML file, with every field optional. An explicit
//! `--config` path must exist; the default location
//! (`<config_dir>/fanfare/fanfare.toml`) is skipped silently when absent.

use derive_getters::Getters;
use fanfare::{DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL};
use fanfare_error::{ConfigError, FanfareError, FanfareResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Model selection and request pacing.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct ModelsConfig {
    /// Model used for campaign copy.
    #[serde(default = "default_text_model")]
    text_model: String,

    /// Model used for thumbnails.
    #[serde(default = "default_image_model")]
    image_model: String,

    /// Sampling temperature for copy generation.
    #[serde(default)]
    temperature: Option<f32>,

    /// Request budget shared across copy and thumbnail calls.
    #[serde(default = "default_requests_per_minute")]
    requests_per_minute: u32,
}

fn default_text_model() -> String {
    DEFAULT_TEXT_MODEL.to_string()
}

fn default_image_model() -> String {
    DEFAULT_IMAGE_MODEL.to_string()
}

fn default_requests_per_minute() -> u32 {
    10
}

impl Default for ModelsConfig {
    fn default() -> Self {
        Self {
            text_model: default_text_model(),
            image_model: default_image_model(),
            temperature: None,
            requests_per_minute: default_requests_per_minute(),
        }
    }
}

/// Output locations.
#[derive(Debug, Clone, Serialize, Deserialize, Getters)]
pub struct OutputConfig {
    /// Directory thumbnails are saved into.
    #[serde(default = "default_directory")]
    directory: PathBuf,
}

fn default_directory() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

/// Configuration for the fanfare binary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Getters)]
pub struct FanfareConfig {
    /// Model selection and request pacing.
    #[serde(default)]
    models: ModelsConfig,

    /// Output locations.
    #[serde(default)]
    output: OutputConfig,
}

impl FanfareConfig {
    /// Load configuration from a TOML file.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FanfareResult<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| {
            FanfareError::from(ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            )))
        })?;

        toml::from_str(&content).map_err(|e| {
            FanfareError::from(ConfigError::new(format!(
                "Failed to parse config {}: {}",
                path.display(),
                e
            )))
        })
    }

    /// Resolve and load the configuration.
    pub fn load(path: Option<&Path>) -> FanfareResult<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Default configuration file location.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fanfare").join("fanfare.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: FanfareConfig = toml::from_str("").unwrap();
        assert_eq!(config.models().text_model(), DEFAULT_TEXT_MODEL);
        assert_eq!(config.models().image_model(), DEFAULT_IMAGE_MODEL);
        assert_eq!(*config.models().requests_per_minute(), 10);
        assert!(config.models().temperature().is_none());
    }

    #[test]
    fn partial_models_table_keeps_other_defaults() {
        let config: FanfareConfig = toml::from_str(
            r#"
[models]
text_model = "gemini-exp"
temperature = 0.7
"#,
        )
        .unwrap();

        assert_eq!(config.models().text_model(), "gemini-exp");
        assert_eq!(config.models().image_model(), DEFAULT_IMAGE_MODEL);
        assert_eq!(*config.models().temperature(), Some(0.7));
    }

    #[test]
    fn output_directory_round_trips() {
        let config: FanfareConfig = toml::from_str(
            r#"
[output]
directory = "/tmp/fanfare-thumbs"
"#,
        )
        .unwrap();

        assert_eq!(
            config.output().directory(),
            &PathBuf::from("/tmp/fanfare-thumbs")
        );
    }

    #[test]
    fn unreadable_explicit_path_errors() {
        let err = FanfareConfig::from_file("/nonexistent/fanfare.toml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to read config file"));
        assert!(message.contains("/nonexistent/fanfare.toml"));
    }

    #[test]
    fn malformed_toml_names_the_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("fanfare.toml");
        std::fs::write(&path, "[models\ntext_model = ").unwrap();

        let err = FanfareConfig::from_file(&path).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse config"));
        assert!(message.contains("fanfare.toml"));
    }
}
