//! Core data models for the parking engine.
//!
//! This module contains the domain models used throughout the engine.

mod fee_result;
mod vehicle;

pub use fee_result::{CheckOutReceipt, EarningsSummary, FeeCalculation, FeeStep};
pub use vehicle::{Vehicle, VehicleType};
