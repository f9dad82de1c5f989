//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading a parking
//! facility's configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{ParkingError, ParkingResult};
use crate::models::VehicleType;

use super::types::{LotConfig, ParkingConfig, TariffConfig};

/// Loads and provides access to a facility configuration.
///
/// # Directory Structure
///
/// ```text
/// config/alke/
/// ├── lot.yaml      # Facility name and capacity
/// └── tariff.yaml   # Base fees, extra-time blocks and discount
/// ```
///
/// # Example
///
/// ```no_run
/// use parking_engine::config::ConfigLoader;
/// use parking_engine::models::VehicleType;
///
/// let loader = ConfigLoader::load("./config/alke").unwrap();
/// println!("{} holds {} vehicles", loader.lot().name, loader.lot().max_capacity);
/// println!("Car base fee: {}", loader.base_fee(VehicleType::Car));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ParkingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Fails with `ConfigNotFound` when a file is missing, `ConfigParseError`
    /// when a file is not valid YAML for its type, and `InvalidConfig` when a
    /// value breaks its contract.
    pub fn load<P: AsRef<Path>>(path: P) -> ParkingResult<Self> {
        let path = path.as_ref();

        let lot = Self::load_yaml::<LotConfig>(&path.join("lot.yaml"))?;
        let tariff = Self::load_yaml::<TariffConfig>(&path.join("tariff.yaml"))?;

        let config = ParkingConfig::new(lot, tariff)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: ParkingConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ParkingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ParkingError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ParkingError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &ParkingConfig {
        &self.config
    }

    /// Returns the facility settings.
    pub fn lot(&self) -> &LotConfig {
        self.config.lot()
    }

    /// Returns the fee rules.
    pub fn tariff(&self) -> &TariffConfig {
        self.config.tariff()
    }

    /// Gets the configured base fee for a vehicle type.
    pub fn base_fee(&self, vehicle_type: VehicleType) -> u32 {
        self.tariff().base_fees.for_type(vehicle_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn config_path() -> &'static str {
        "./config/alke"
    }

    fn write_config(dir: &Path, lot: &str, tariff: &str) {
        fs::write(dir.join("lot.yaml"), lot).unwrap();
        fs::write(dir.join("tariff.yaml"), tariff).unwrap();
    }

    const VALID_TARIFF: &str = r#"
base_fees:
  car: 20
  moto: 15
  mini_bus: 25
  bus: 30
included_minutes: 120
block_minutes: 15
block_fee: 5
discount_rate: "0.15"
"#;

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.lot().name, "AlkeParking");
        assert_eq!(loader.lot().max_capacity, 20);
    }

    #[test]
    fn test_shipped_configuration_matches_defaults() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.config(), ConfigLoader::default().config());
    }

    #[test]
    fn test_base_fee_lookup() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.base_fee(VehicleType::Car), 20);
        assert_eq!(loader.base_fee(VehicleType::Moto), 15);
        assert_eq!(loader.base_fee(VehicleType::MiniBus), 25);
        assert_eq!(loader.base_fee(VehicleType::Bus), 30);
        assert_eq!(
            loader.tariff().discount_rate,
            Decimal::from_str("0.15").unwrap()
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(ParkingError::ConfigNotFound { path }) => {
                assert!(path.contains("lot.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_yaml_returns_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "name: [unterminated", VALID_TARIFF);

        match ConfigLoader::load(dir.path()) {
            Err(ParkingError::ConfigParseError { path, .. }) => {
                assert!(path.contains("lot.yaml"));
            }
            other => panic!("Expected ConfigParseError, got {:?}", other),
        }
    }

    #[test]
    fn test_load_zero_capacity_returns_invalid_config() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "name: Tiny\nmax_capacity: 0\n", VALID_TARIFF);

        match ConfigLoader::load(dir.path()) {
            Err(ParkingError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "max_capacity");
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_load_custom_capacity() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "name: Small Lot\nmax_capacity: 3\n", VALID_TARIFF);

        let loader = ConfigLoader::load(dir.path()).unwrap();
        assert_eq!(loader.lot().name, "Small Lot");
        assert_eq!(loader.lot().max_capacity, 3);
    }
}
