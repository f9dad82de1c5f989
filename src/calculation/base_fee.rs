//! Base fee lookup functionality.
//!
//! This module determines the flat charge that covers a vehicle's first
//! included minutes, taken from the tariff by vehicle type.

use crate::config::TariffConfig;
use crate::models::{FeeStep, VehicleType};

/// The result of a base fee lookup, including the fee and audit step.
#[derive(Debug, Clone)]
pub struct BaseFeeResult {
    /// The base fee for the vehicle type.
    pub base_fee: u32,
    /// The audit step recording this lookup.
    pub audit_step: FeeStep,
}

/// Looks up the base fee for a vehicle type.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::get_base_fee;
/// use parking_engine::config::TariffConfig;
/// use parking_engine::models::VehicleType;
///
/// let result = get_base_fee(VehicleType::MiniBus, &TariffConfig::default(), 1);
/// assert_eq!(result.base_fee, 25);
/// ```
pub fn get_base_fee(
    vehicle_type: VehicleType,
    tariff: &TariffConfig,
    step_number: u32,
) -> BaseFeeResult {
    let base_fee = tariff.base_fees.for_type(vehicle_type);

    let audit_step = FeeStep {
        step_number,
        rule_id: "base_fee".to_string(),
        rule_name: "Base Fee".to_string(),
        input: serde_json::json!({
            "vehicle_type": vehicle_type.as_str(),
            "included_minutes": tariff.included_minutes
        }),
        output: serde_json::json!({
            "base_fee": base_fee
        }),
        reasoning: format!(
            "Base fee for {} is {} covering the first {} minutes",
            vehicle_type.as_str(),
            base_fee,
            tariff.included_minutes
        ),
    };

    BaseFeeResult {
        base_fee,
        audit_step,
    }
}
