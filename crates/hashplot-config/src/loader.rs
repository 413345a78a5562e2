//! Settings loading from YAML files.

use crate::schema::PlotSettings;
use crate::validation::ConfigValidator;
use hashplot_common::{PlotError, Result};
use std::path::Path;
use thiserror::Error;

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading the settings file
    #[error("Failed to read settings file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("Failed to parse YAML settings: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

impl From<ConfigError> for PlotError {
    fn from(err: ConfigError) -> Self {
        PlotError::config_with_source("Failed to load settings", err)
    }
}

/// Settings loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Parses and validates settings from YAML text.
    pub fn from_yaml(content: &str) -> Result<PlotSettings> {
        // An empty document deserializes to unit, not to the defaulted struct
        let settings = if content.trim().is_empty() {
            PlotSettings::default()
        } else {
            serde_yaml::from_str(content).map_err(ConfigError::from)?
        };

        ConfigValidator::validate(&settings)?;
        Ok(settings)
    }

    /// Loads settings from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<PlotSettings> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::IoError {
            path: path.display().to_string(),
            source,
        })?;

        let settings = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "Loaded plot settings");
        Ok(settings)
    }

    /// Loads settings from `path` when given, otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<PlotSettings> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(PlotSettings::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = ConfigLoader::from_yaml("figure:\n  dpi: 100\n").unwrap();
        assert_eq!(settings.figure.dpi, 100);
        assert_eq!(settings.figure.width_inches, 15.0);
        assert_eq!(settings.bar_chart, crate::BarChartConfig::default());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let settings = ConfigLoader::from_yaml("  \n").unwrap();
        assert_eq!(settings, PlotSettings::default());
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ConfigLoader::from_yaml("figure: [not, a, map]").unwrap_err();
        assert!(matches!(err, PlotError::Config { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = ConfigLoader::from_yaml("histogram:\n  bins: 0\n").unwrap_err();
        assert!(matches!(err, PlotError::Validation { .. }));
    }

    #[test]
    fn test_load_without_path() {
        assert_eq!(ConfigLoader::load(None).unwrap(), PlotSettings::default());
    }

    #[test]
    fn test_missing_file() {
        let err = ConfigLoader::load_from_file("/nonexistent/hashplot.yaml").unwrap_err();
        assert!(err.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_logging_section() {
        let yaml = "logging:\n  level: debug\n  compact: false\n  file: /var/log/hashplot.log\n  include_targets: true\n";
        let settings = ConfigLoader::from_yaml(yaml).unwrap();

        let config = settings.logging.to_logging_config();
        assert_eq!(config.level, "debug");
        assert!(!config.compact);
        assert!(config.ansi);
        assert_eq!(config.file_path.as_deref(), Some("/var/log/hashplot.log"));
        assert!(config.include_targets);
    }

    #[test]
    fn test_empty_log_file_rejected() {
        let err = ConfigLoader::from_yaml("logging:\n  file: \"\"\n").unwrap_err();
        assert!(matches!(err, PlotError::Validation { .. }));
    }
}
