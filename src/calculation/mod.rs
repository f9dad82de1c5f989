//! Calculation logic for the parking engine.
//!
//! This module contains the fee rules applied at check-out: base fee lookup
//! by vehicle type, the extra-time surcharge charged per started block, and
//! the discount card reduction, plus the composition of the three.

mod base_fee;
mod discount;
mod extra_time;
mod fee;

pub use base_fee::{BaseFeeResult, get_base_fee};
pub use discount::{DiscountResult, apply_discount};
pub use extra_time::{ExtraTimeResult, calculate_extra_time};
pub use fee::{calculate_fee, calculate_vehicle_fee};
