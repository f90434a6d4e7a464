//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the stay
//! tariff and charges from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ChargesConfig, EngineConfig, TariffConfig};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── tariff.yaml    # Weekend, seasonal, length-of-stay, early-booking rules
/// └── charges.yaml   # Taxes and reservation fees
/// ```
///
/// # Example
///
/// ```no_run
/// use occupancy_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard")?;
/// println!("Tariff: {}", loader.config().tariff().name);
/// # Ok::<(), occupancy_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file is missing, contains invalid YAML, or
    /// holds values the engine cannot use (months outside 1-12, negative
    /// discounts, taxes or fees).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let tariff_path = path.join("tariff.yaml");
        let tariff = Self::load_yaml::<TariffConfig>(&tariff_path)?;
        Self::validate_tariff(&tariff, &tariff_path)?;

        let charges_path = path.join("charges.yaml");
        let charges = Self::load_yaml::<ChargesConfig>(&charges_path)?;
        Self::validate_charges(&charges, &charges_path)?;

        Ok(Self {
            config: EngineConfig::new(tariff, charges),
        })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn validate_tariff(tariff: &TariffConfig, path: &Path) -> EngineResult<()> {
        let invalid = |message: String| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        };

        if tariff.weekend.surcharge < Decimal::ZERO {
            return Err(invalid("weekend surcharge must not be negative".to_string()));
        }
        for season in &tariff.seasons {
            if let Some(month) = season.months.iter().find(|m| !(1..=12).contains(*m)) {
                return Err(invalid(format!(
                    "season '{}' has invalid month {}",
                    season.name, month
                )));
            }
        }
        if tariff.length_of_stay.iter().any(|t| t.discount < Decimal::ZERO)
            || tariff.early_booking.iter().any(|t| t.discount < Decimal::ZERO)
        {
            return Err(invalid(
                "discounts are positive fractions; the engine applies the sign".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_charges(charges: &ChargesConfig, path: &Path) -> EngineResult<()> {
        let fees = &charges.fees;
        let values = [
            charges.taxes.city,
            charges.taxes.state,
            charges.taxes.tourism,
            fees.resort_per_night,
            fees.service_rate,
            fees.cleaning,
        ];
        if values.iter().any(|v| *v < Decimal::ZERO) {
            return Err(EngineError::ConfigParseError {
                path: path.display().to_string(),
                message: "taxes and fees must not be negative".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "occupancy-engine-{}-{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().tariff().name, "standard");
    }

    #[test]
    fn test_weekend_nights_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tariff = loader.config().tariff();
        assert_eq!(tariff.weekend.surcharge, dec("0.25"));
        assert_eq!(tariff.weekend.nights, vec![Weekday::Fri, Weekday::Sat]);
    }

    #[test]
    fn test_every_month_has_a_season() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let tariff = loader.config().tariff();
        assert_eq!(tariff.season_for(7).unwrap().adjustment, dec("0.20"));
        assert_eq!(tariff.season_for(12).unwrap().adjustment, dec("0.25"));
        assert_eq!(tariff.season_for(9).unwrap().adjustment, dec("0.10"));
        assert_eq!(tariff.season_for(2).unwrap().adjustment, dec("-0.15"));
        assert_eq!(tariff.season_for(11).unwrap().adjustment, dec("-0.05"));
    }

    #[test]
    fn test_charges_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let charges = loader.config().charges();
        assert_eq!(charges.taxes.combined(), dec("0.13"));
        assert_eq!(charges.fees.resort_per_night, dec("15.00"));
        assert_eq!(charges.fees.service_rate, dec("0.02"));
        assert_eq!(charges.fees.cleaning, dec("25.00"));
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("tariff.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = scratch_dir("bad-yaml");
        fs::write(dir.join("tariff.yaml"), "name: [unclosed").unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert!(path.contains("tariff.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_season_with_invalid_month_is_rejected() {
        let dir = scratch_dir("bad-month");
        let tariff = fs::read_to_string(Path::new(config_path()).join("tariff.yaml"))
            .unwrap()
            .replace("months: [12]", "months: [13]");
        fs::write(dir.join("tariff.yaml"), tariff).unwrap();

        match ConfigLoader::load(&dir) {
            Err(EngineError::ConfigParseError { message, .. }) => {
                assert!(message.contains("invalid month 13"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
        fs::remove_dir_all(dir).ok();
    }
}
