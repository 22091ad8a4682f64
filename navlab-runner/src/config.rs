//! Serializable run configuration.
//!
//! A run config is a TOML file with two sections, both optional:
//!
//! ```toml
//! [analysis]
//! window = 200
//! jump_threshold = 0.10
//! recency_days = 200
//!
//! [analysis.vocabulary]
//! exclusion_keywords = ["liquid fund", "overnight fund"]
//! strip_tokens = ["direct plan", "regular plan", "direct", "-"]
//!
//! [report]
//! max_rows = 50
//! max_name_length = 60
//! ```
//!
//! Missing sections fall back to the analysis defaults, so an empty file is
//! a valid config.

use std::path::Path;

use navlab_core::AnalysisConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from config loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display-shaping options consumed by the report generators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Maximum rows rendered per partition table.
    pub max_rows: usize,
    /// Scheme names longer than this are truncated with an ellipsis.
    pub max_name_length: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            max_rows: 50,
            max_name_length: 60,
        }
    }
}

/// Complete configuration for one analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub analysis: AnalysisConfig,
    pub report: ReportConfig,
}

impl RunnerConfig {
    /// Load a runner config from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a runner config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = RunnerConfig::from_toml("").unwrap();
        assert_eq!(config.analysis.window, 200);
        assert_eq!(config.report.max_rows, 50);
        assert_eq!(config.report.max_name_length, 60);
    }

    #[test]
    fn partial_config_overrides_only_named_fields() {
        let config = RunnerConfig::from_toml(
            r#"
            [analysis]
            window = 50

            [report]
            max_rows = 10
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.window, 50);
        assert_eq!(config.analysis.jump_threshold, 0.10);
        assert_eq!(config.report.max_rows, 10);
        assert_eq!(config.report.max_name_length, 60);
    }

    #[test]
    fn vocabulary_override_replaces_lists() {
        let config = RunnerConfig::from_toml(
            r#"
            [analysis.vocabulary]
            exclusion_keywords = ["money market"]
            strip_tokens = ["-"]
            "#,
        )
        .unwrap();
        assert!(config.analysis.vocabulary.is_excluded("X Money Market Fund"));
        assert!(!config.analysis.vocabulary.is_excluded("X Liquid Fund"));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = RunnerConfig::from_toml("[analysis\nwindow = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = RunnerConfig::from_file(Path::new("/nonexistent/navlab.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/navlab.toml"));
    }
}
