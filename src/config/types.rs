//! Configuration types for the parking engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{ParkingError, ParkingResult};
use crate::models::VehicleType;

/// Standard maximum number of parked vehicles.
pub const DEFAULT_MAX_CAPACITY: usize = 20;

/// Minutes covered by the base fee.
pub const DEFAULT_INCLUDED_MINUTES: u32 = 120;

/// Length of one extra-time block in minutes.
pub const DEFAULT_BLOCK_MINUTES: u32 = 15;

/// Charge per started extra-time block.
pub const DEFAULT_BLOCK_FEE: u32 = 5;

/// Discount granted to discount card holders (15%).
pub const DEFAULT_DISCOUNT_RATE: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Facility settings from `lot.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotConfig {
    /// Display name of the facility.
    pub name: String,
    /// Maximum number of vehicles parked at once.
    pub max_capacity: usize,
}

impl Default for LotConfig {
    fn default() -> Self {
        Self {
            name: "AlkeParking".to_string(),
            max_capacity: DEFAULT_MAX_CAPACITY,
        }
    }
}

impl LotConfig {
    /// Checks the construction-time contract.
    pub fn validate(&self) -> ParkingResult<()> {
        if self.max_capacity == 0 {
            return Err(ParkingError::InvalidConfig {
                field: "max_capacity".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Base fee for each vehicle type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseFees {
    /// Base fee for cars.
    pub car: u32,
    /// Base fee for motorcycles.
    pub moto: u32,
    /// Base fee for minibuses.
    pub mini_bus: u32,
    /// Base fee for buses.
    pub bus: u32,
}

impl Default for BaseFees {
    fn default() -> Self {
        Self {
            car: VehicleType::Car.base_fee(),
            moto: VehicleType::Moto.base_fee(),
            mini_bus: VehicleType::MiniBus.base_fee(),
            bus: VehicleType::Bus.base_fee(),
        }
    }
}

impl BaseFees {
    /// Returns the base fee for `vehicle_type`.
    pub fn for_type(&self, vehicle_type: VehicleType) -> u32 {
        match vehicle_type {
            VehicleType::Car => self.car,
            VehicleType::Moto => self.moto,
            VehicleType::MiniBus => self.mini_bus,
            VehicleType::Bus => self.bus,
        }
    }
}

/// Fee rules from `tariff.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TariffConfig {
    /// Base fees per vehicle type.
    pub base_fees: BaseFees,
    /// Minutes covered by the base fee.
    pub included_minutes: u32,
    /// Length of one extra-time block.
    pub block_minutes: u32,
    /// Charge per started extra-time block.
    pub block_fee: u32,
    /// Fraction taken off for discount card holders.
    pub discount_rate: Decimal,
}

impl Default for TariffConfig {
    fn default() -> Self {
        Self {
            base_fees: BaseFees::default(),
            included_minutes: DEFAULT_INCLUDED_MINUTES,
            block_minutes: DEFAULT_BLOCK_MINUTES,
            block_fee: DEFAULT_BLOCK_FEE,
            discount_rate: DEFAULT_DISCOUNT_RATE,
        }
    }
}

impl TariffConfig {
    /// Checks the construction-time contract.
    pub fn validate(&self) -> ParkingResult<()> {
        if self.block_minutes == 0 {
            return Err(ParkingError::InvalidConfig {
                field: "block_minutes".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.discount_rate < Decimal::ZERO || self.discount_rate > Decimal::ONE {
            return Err(ParkingError::InvalidConfig {
                field: "discount_rate".to_string(),
                message: format!("{} is outside 0..=1", self.discount_rate),
            });
        }
        Ok(())
    }
}

/// The complete configuration of one parking facility.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParkingConfig {
    lot: LotConfig,
    tariff: TariffConfig,
}

impl ParkingConfig {
    /// Creates a validated configuration from its parts.
    pub fn new(lot: LotConfig, tariff: TariffConfig) -> ParkingResult<Self> {
        lot.validate()?;
        tariff.validate()?;
        Ok(Self { lot, tariff })
    }

    /// Returns the facility settings.
    pub fn lot(&self) -> &LotConfig {
        &self.lot
    }

    /// Returns the fee rules.
    pub fn tariff(&self) -> &TariffConfig {
        &self.tariff
    }
}
