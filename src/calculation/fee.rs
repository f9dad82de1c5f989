//! Parking fee calculation.
//!
//! Composes the base fee, extra-time surcharge and discount card rules into
//! the fee charged at check-out.

use chrono::{DateTime, Utc};

use crate::config::TariffConfig;
use crate::models::{FeeCalculation, Vehicle, VehicleType};

use super::base_fee::get_base_fee;
use super::discount::apply_discount;
use super::extra_time::calculate_extra_time;

/// Calculates the fee for a stay of `parked_minutes`.
///
/// The rules run in a fixed order:
/// 1. base fee for the vehicle type (covers the included minutes)
/// 2. surcharge for every started block beyond the included minutes
/// 3. discount card reduction on the sum, truncated
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::calculate_fee;
/// use parking_engine::config::TariffConfig;
/// use parking_engine::models::VehicleType;
///
/// let tariff = TariffConfig::default();
///
/// assert_eq!(calculate_fee(VehicleType::Car, 90, false, &tariff).fee, 20);
/// assert_eq!(calculate_fee(VehicleType::Car, 150, false, &tariff).fee, 30);
/// assert_eq!(calculate_fee(VehicleType::Bus, 150, true, &tariff).fee, 34);
/// ```
pub fn calculate_fee(
    vehicle_type: VehicleType,
    parked_minutes: u32,
    has_discount_card: bool,
    tariff: &TariffConfig,
) -> FeeCalculation {
    let base = get_base_fee(vehicle_type, tariff, 1);
    let extra = calculate_extra_time(parked_minutes, tariff, 2);
    let gross_fee = base.base_fee.saturating_add(extra.surcharge);
    let discount = apply_discount(gross_fee, has_discount_card, tariff.discount_rate, 3);

    FeeCalculation {
        vehicle_type,
        parked_minutes,
        base_fee: base.base_fee,
        extra_blocks: extra.extra_blocks,
        surcharge: extra.surcharge,
        discount_applied: discount.applied,
        discount: discount.discount,
        fee: discount.fee,
        steps: vec![base.audit_step, extra.audit_step, discount.audit_step],
    }
}

/// Calculates the fee `vehicle` owes if it leaves at `now`.
pub fn calculate_vehicle_fee(
    vehicle: &Vehicle,
    now: DateTime<Utc>,
    tariff: &TariffConfig,
) -> FeeCalculation {
    calculate_fee(
        vehicle.vehicle_type(),
        vehicle.parked_minutes(now),
        vehicle.has_discount_card(),
        tariff,
    )
}
