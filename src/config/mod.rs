//! Configuration loading and management for the parking engine.
//!
//! This module provides functionality to load a facility's configuration from
//! YAML files: its capacity and the tariff used to price each stay.
//!
//! # Example
//!
//! ```no_run
//! use parking_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/alke").unwrap();
//! println!("Loaded lot: {}", config.lot().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BaseFees, DEFAULT_BLOCK_FEE, DEFAULT_BLOCK_MINUTES, DEFAULT_DISCOUNT_RATE,
    DEFAULT_INCLUDED_MINUTES, DEFAULT_MAX_CAPACITY, LotConfig, ParkingConfig, TariffConfig,
};
