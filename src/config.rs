use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use itinerary_core::{DateTimeValue, FragmentKind};
use serde::Deserialize;

use crate::error::{ReconcilerError, Result};

pub const DEFAULT_CONFIG_PATH: &str = "reconciler.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub postprocessor: PostprocessorConfig,
    pub validator: ValidatorConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PostprocessorConfig {
    /// Run the validator over the finalized result
    pub validation_enabled: bool,
    /// Reference date for boarding pass year disambiguation
    pub context_date: Option<String>,
}

impl PostprocessorConfig {
    pub fn context_date(&self) -> Result<Option<DateTimeValue>> {
        self.context_date
            .as_deref()
            .map(|raw| raw.parse::<DateTimeValue>().map_err(ReconcilerError::from))
            .transpose()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Top-level type names to accept, empty accepts everything
    pub accepted_types: Vec<String>,
    /// Reject minimal cancellation stubs and other incomplete elements
    pub accept_only_complete: bool,
}

pub const DEFAULT_ACCEPTED_TYPES: [&str; 17] = [
    "FlightReservation",
    "TrainReservation",
    "BusReservation",
    "RentalCarReservation",
    "TaxiReservation",
    "EventReservation",
    "FoodEstablishmentReservation",
    "LodgingReservation",
    "Flight",
    "TrainTrip",
    "BusTrip",
    "RentalCar",
    "Taxi",
    "Event",
    "TouristAttractionVisit",
    "FoodEstablishment",
    "LocalBusiness",
];

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            accepted_types: DEFAULT_ACCEPTED_TYPES.iter().map(|s| s.to_string()).collect(),
            accept_only_complete: true,
        }
    }
}

impl ValidatorConfig {
    /// Accepted types resolved to kinds; unknown names are skipped.
    pub fn accepted_kinds(&self) -> Vec<FragmentKind> {
        self.accepted_types
            .iter()
            .filter_map(|name| FragmentKind::from_name(name))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub directory: String,
    pub file_name: String,
    pub json_file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: "logs".to_string(),
            file_name: "reconciler.log".to_string(),
            json_file: true,
        }
    }
}

impl Config {
    /// Loads `reconciler.toml` from the working directory, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        if !Path::new(DEFAULT_CONFIG_PATH).exists() {
            return Ok(Self::default());
        }
        Self::from_file(DEFAULT_CONFIG_PATH)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config_content = fs::read_to_string(path).map_err(|e| {
            ReconcilerError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&config_content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        for name in &self.validator.accepted_types {
            if FragmentKind::from_name(name).is_none() {
                bail!("Unknown accepted type '{}'", name);
            }
        }
        if self.logging.directory.trim().is_empty() {
            bail!("Logging directory must not be empty");
        }
        self.postprocessor
            .context_date()
            .context("Invalid postprocessor.context_date")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.postprocessor.validation_enabled);
        assert!(config.validator.accept_only_complete);
        assert_eq!(config.validator.accepted_kinds().len(), DEFAULT_ACCEPTED_TYPES.len());
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [postprocessor]
            validation_enabled = true
            context_date = "2024-05-01T00:00:00Z"

            [validator]
            accepted_types = ["FlightReservation"]
            "#,
        )
        .unwrap();
        assert!(config.postprocessor.validation_enabled);
        assert!(config.postprocessor.context_date().unwrap().is_some());
        assert_eq!(config.validator.accepted_kinds(), vec![FragmentKind::FlightReservation]);
        assert!(config.validator.accept_only_complete);
        assert_eq!(config.logging.file_name, "reconciler.log");
    }

    #[test]
    fn test_validate_rejects_unknown_type() {
        let mut config = Config::default();
        config.validator.accepted_types.push("Spaceship".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_context_date() {
        let mut config = Config::default();
        config.postprocessor.context_date = Some("soon".to_string());
        assert!(config.validate().is_err());
    }
}
