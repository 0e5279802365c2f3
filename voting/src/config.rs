//! Planner configuration with TOML file support.

use serde::{Deserialize, Serialize};
use std::path::Path;

use veolas_types::BaseUnits;

use crate::error::ConfigError;

/// Configuration for a [`crate::VotePlanner`].
///
/// Can be loaded from a TOML file via [`PlannerConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Per-user voting budget in base units.
    #[serde(default = "default_max_weight")]
    pub max_weight: u64,

    /// Replay the planned order against the budget before returning it.
    #[serde(default = "default_true")]
    pub verify_budget: bool,

    /// Log format: "human" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_max_weight() -> u64 {
    BaseUnits::MAX_WEIGHT.get()
}

fn default_true() -> bool {
    true
}

fn default_log_format() -> String {
    "human".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl PlannerConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("PlannerConfig is always serializable to TOML")
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_weight == 0 {
            return Err(ConfigError::ZeroBudget);
        }
        Ok(())
    }

    pub fn budget(&self) -> BaseUnits {
        BaseUnits::new(self.max_weight)
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_weight: default_max_weight(),
            verify_budget: default_true(),
            log_format: default_log_format(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = PlannerConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = PlannerConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = PlannerConfig::from_toml_str("").expect("empty toml should use defaults");
        assert_eq!(config.budget(), BaseUnits::MAX_WEIGHT);
        assert!(config.verify_budget);
        assert_eq!(config.log_format, "human");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            verify_budget = false
            log_level = "debug"
        "#;
        let config = PlannerConfig::from_toml_str(toml).expect("should parse");
        assert!(!config.verify_budget);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.max_weight, 10_000); // default
    }

    #[test]
    fn zero_budget_is_rejected() {
        let err = PlannerConfig::from_toml_str("max_weight = 0").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroBudget));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_format = \"json\"").unwrap();
        let config = PlannerConfig::from_toml_file(file.path()).unwrap();
        assert_eq!(config.log_format, "json");
    }

    #[test]
    fn missing_file_returns_read_error() {
        let result = PlannerConfig::from_toml_file("/nonexistent/veolas.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
