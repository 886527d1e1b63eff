//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `domo.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use domo_domain::plan::HousePlan;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Device enumeration settings.
    pub house: HouseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Device enumeration configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HouseConfig {
    /// Ordered device names the registry is seeded with.
    pub devices: Vec<String>,
    /// Devices the away-mode macro turns on, in execution order.
    pub away_mode: Vec<String>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `domo.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// configured house plan is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("domo.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("DOMOD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.house_plan()
            .validate()
            .map_err(|err| ConfigError::Validation(err.to_string()))
    }

    /// The house plan described by this configuration.
    #[must_use]
    pub fn house_plan(&self) -> HousePlan {
        HousePlan {
            devices: self.house.devices.clone(),
            away_mode: self.house.away_mode.clone(),
        }
    }
}

impl Default for HouseConfig {
    fn default() -> Self {
        let plan = HousePlan::default();
        Self {
            devices: plan.devices,
            away_mode: plan.away_mode,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "domod=info,domo_app=info,domo_domain=info".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.house.devices.len(), 13);
        assert_eq!(config.house.away_mode.len(), 8);
        assert_eq!(
            config.logging.filter,
            "domod=info,domo_app=info,domo_domain=info"
        );
    }

    #[test]
    fn should_parse_minimal_toml() {
        let toml = "";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.house.devices.len(), 13);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [house]
            devices = ['Lamp', 'Heater', 'Siren']
            away_mode = ['Siren', 'Lamp']

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.house.devices, vec!["Lamp", "Heater", "Siren"]);
        assert_eq!(config.house.away_mode, vec!["Siren", "Lamp"]);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let toml = "
            [logging]
            filter = 'trace'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.logging.filter, "trace");
        assert_eq!(config.house.devices.len(), 13);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.house.devices.len(), 13);
    }

    #[test]
    fn should_validate_default_plan() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_reject_away_device_missing_from_enumeration() {
        let toml = "
            [house]
            devices = ['Lamp']
            away_mode = ['Siren']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let result = config.validate();
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn should_build_house_plan_from_config() {
        let toml = "
            [house]
            devices = ['Lamp', 'Siren']
            away_mode = ['Siren']
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let plan = config.house_plan();
        assert_eq!(plan.devices, vec!["Lamp", "Siren"]);
        assert_eq!(plan.away_mode, vec!["Siren"]);
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
