//! # Parkvakt Configuration System
//!
//! Hierarchical configuration management for the parkvakt monitor.
//!
//! ## Features
//! - **Unified Configuration**: Single source of truth across all components
//! - **Validation**: Runtime validation of park descriptors and cadence
//! - **Environment Awareness**: `PARKVAKT_*` variables override any file value
//!
//! The default configuration is a complete, runnable deployment (the seven
//! Orlando parks), so the service starts with no config file at all.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod park;
mod poll;
mod storage;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use park::default_parks;
pub use park::ParkConfig;
pub use poll::PollConfig;
pub use storage::StorageConfig;
pub use telemetry::TelemetryConfig;

/// Top-level configuration container for all parkvakt components.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct ParkvaktConfig {
    /// Monitored parks. Order is the per-tick evaluation order.
    #[validate(nested)]
    pub parks: Vec<ParkConfig>,

    /// Monitoring loop cadence.
    #[validate(nested)]
    pub poll: PollConfig,

    /// Day-file storage parameters.
    #[validate(nested)]
    pub storage: StorageConfig,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetryConfig,
}

impl Default for ParkvaktConfig {
    fn default() -> Self {
        Self {
            parks: default_parks(),
            poll: PollConfig::default(),
            storage: StorageConfig::default(),
            telemetry: TelemetryConfig::default(),
        }
    }
}

impl ParkvaktConfig {
    /// Load configuration from default files and environment.
    ///
    /// Hierarchy:
    /// 1. Default values (the Orlando deployment).
    /// 2. `config/parkvakt.yaml` - base settings. If missing, defaults are used.
    /// 3. `PARKVAKT_*` environment variables (`__` separates nesting).
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(ParkvaktConfig::default()));

        if Path::new("config/parkvakt.yaml").exists() {
            figment = figment.merge(Yaml::file("config/parkvakt.yaml"));
        }

        Self::extract_validated(figment.merge(Env::prefixed("PARKVAKT_").split("__")))
    }

    /// Load configuration from a specific path, with env overrides on top.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(path)));
        }

        Self::extract_validated(
            Figment::from(Serialized::defaults(ParkvaktConfig::default()))
                .merge(Yaml::file(path))
                .merge(Env::prefixed("PARKVAKT_").split("__")),
        )
    }

    fn extract_validated(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        config.ensure_distinct_names()?;
        Ok(config)
    }

    /// Day-file paths are keyed by park name, so duplicates would make
    /// two parks interleave appends into one file.
    fn ensure_distinct_names(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for park in &self.parks {
            if !seen.insert(park.name.as_str()) {
                return Err(ConfigError::DuplicatePark(park.name.clone()));
            }
        }
        Ok(())
    }

    /// Look up a park by its unique name.
    pub fn park(&self, name: &str) -> Option<&ParkConfig> {
        self.parks.iter().find(|p| p.name == name)
    }

    /// Re-run full validation after programmatic mutation (CLI overrides).
    pub fn revalidate(&self) -> Result<(), ConfigError> {
        self.validate()?;
        self.ensure_distinct_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_full_config_validation() {
        let config = ParkvaktConfig::default();
        config.validate().expect("Default config should validate");
        config.ensure_distinct_names().expect("names are distinct");
    }

    #[test]
    fn test_environment_override() {
        std::env::set_var("PARKVAKT_TELEMETRY__LOG_FILTER", "debug");
        let config = ParkvaktConfig::load().unwrap();
        assert_eq!(config.telemetry.log_filter, "debug");
        std::env::remove_var("PARKVAKT_TELEMETRY__LOG_FILTER");
    }

    #[test]
    fn test_load_from_path_missing_file() {
        let err = ParkvaktConfig::load_from_path("no/such/parkvakt.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_load_from_path_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::with_suffix(".yaml").unwrap();
        writeln!(
            file,
            "parks:\n  - name: Tivoli\n    url: https://api.themeparks.wiki/v1/entity/tivoli/live\n    start_hour: 11\n    end_hour: 23\n    timezone: Europe/Copenhagen\nstorage:\n  data_dir: /tmp/parkvakt-test"
        )
        .unwrap();

        let config = ParkvaktConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.parks.len(), 1);
        assert_eq!(config.parks[0].name, "Tivoli");
        assert_eq!(config.poll.interval_secs, 900);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut config = ParkvaktConfig::default();
        let clone = config.parks[0].clone();
        config.parks.push(clone);
        assert!(matches!(
            config.ensure_distinct_names(),
            Err(ConfigError::DuplicatePark(_))
        ));
    }
}
