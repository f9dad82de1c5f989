//! Error types for the parking engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the lot, its configuration and its callers can observe.

use thiserror::Error;

/// The main error type for the parking engine.
///
/// Check-in rejections and check-out misses are expected, non-fatal outcomes
/// and are reported through this type rather than by panicking.
///
/// # Example
///
/// ```
/// use parking_engine::error::ParkingError;
///
/// let error = ParkingError::VehicleNotFound {
///     plate: "AA111AA".to_string(),
/// };
/// assert_eq!(error.to_string(), "Vehicle not found: AA111AA");
/// ```
#[derive(Debug, Error)]
pub enum ParkingError {
    /// The lot is at maximum capacity.
    #[error("Parking lot is full (capacity {capacity})")]
    CapacityFull {
        /// The configured maximum capacity.
        capacity: usize,
    },

    /// A vehicle with the same plate is already parked.
    #[error("Vehicle with plate '{plate}' is already parked")]
    DuplicatePlate {
        /// The duplicated plate.
        plate: String,
    },

    /// No parked vehicle has the requested plate.
    #[error("Vehicle not found: {plate}")]
    VehicleNotFound {
        /// The plate that was looked up.
        plate: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value violates its contract.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// What is wrong with it.
        message: String,
    },
}

impl ParkingError {
    /// Returns true for the two ways a check-in can be refused.
    ///
    /// Callers that only care whether the vehicle got in can treat both
    /// causes alike.
    pub fn is_check_in_rejection(&self) -> bool {
        matches!(
            self,
            ParkingError::CapacityFull { .. } | ParkingError::DuplicatePlate { .. }
        )
    }
}

/// A type alias for Results that return ParkingError.
pub type ParkingResult<T> = Result<T, ParkingError>;
