//! Engine configuration
//!
//! Loaded from TOML; every field is optional:
//!
//! ```toml
//! fixed_date = "2024-03-07"
//! simulated_latency_ms = 0
//! export_dir = "exports"
//! default_export_format = "markdown"
//! seed_demo_data = true
//! ```

use crate::error::ConfigError;
use crate::export::ExportFormat;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Date printed on generated documents; today when unset
    pub fixed_date: Option<NaiveDate>,
    /// Artificial delay before each generation
    pub simulated_latency_ms: u64,
    /// Directory exports are written into
    pub export_dir: PathBuf,
    /// Format used when the caller does not pick one
    pub default_export_format: ExportFormat,
    /// Populate the store with sample records on startup
    pub seed_demo_data: bool,
}

impl EngineConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    /// `ConfigError::Parse` on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    /// `ConfigError::Io` when the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(config)
    }

    /// With a pinned document date
    #[inline]
    #[must_use]
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// With simulated latency
    #[inline]
    #[must_use]
    pub fn with_simulated_latency_ms(mut self, ms: u64) -> Self {
        self.simulated_latency_ms = ms;
        self
    }

    /// With export directory
    #[inline]
    #[must_use]
    pub fn with_export_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.export_dir = dir.into();
        self
    }

    /// With default export format
    #[inline]
    #[must_use]
    pub fn with_default_export_format(mut self, format: ExportFormat) -> Self {
        self.default_export_format = format;
        self
    }

    /// With demo seeding toggled
    #[inline]
    #[must_use]
    pub fn with_seed_demo_data(mut self, seed: bool) -> Self {
        self.seed_demo_data = seed;
        self
    }

    /// Date to print on a document generated now
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.fixed_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    #[inline]
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            fixed_date: None,
            simulated_latency_ms: 0,
            export_dir: PathBuf::from("exports"),
            default_export_format: ExportFormat::Text,
            seed_demo_data: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(EngineConfig::from_toml_str("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn toml_overrides() {
        let config = EngineConfig::from_toml_str(
            r#"
fixed_date = "2024-03-07"
simulated_latency_ms = 1500
export_dir = "out"
default_export_format = "md"
seed_demo_data = true
"#,
        )
        .unwrap();

        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(config.latency(), Duration::from_millis(1500));
        assert_eq!(config.export_dir, PathBuf::from("out"));
        assert_eq!(config.default_export_format, ExportFormat::Markdown);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = EngineConfig::from_toml_str("latency = 3").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = EngineConfig::from_file("/nonexistent/doctrine.toml").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/doctrine.toml"));
    }

    #[test]
    fn builder() {
        let config = EngineConfig::new()
            .with_simulated_latency_ms(10)
            .with_export_dir("docs")
            .with_default_export_format(ExportFormat::Markdown)
            .with_seed_demo_data(true);
        assert_eq!(config.simulated_latency_ms, 10);
        assert_eq!(config.export_dir, PathBuf::from("docs"));
        assert!(config.fixed_date.is_none());
    }
}
