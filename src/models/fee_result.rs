//! Fee calculation result models.
//!
//! This module contains the [`FeeCalculation`] type produced by the fee
//! rules, the [`CheckOutReceipt`] handed back when a vehicle leaves, and the
//! lot-wide [`EarningsSummary`].

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::VehicleType;

/// A single step in a fee calculation recording one rule application.
///
/// Each step captures the input, output, and reasoning for the rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// The complete breakdown of a parking fee.
///
/// # Example
///
/// ```
/// use parking_engine::models::{FeeCalculation, VehicleType};
///
/// let calculation = FeeCalculation {
///     vehicle_type: VehicleType::Car,
///     parked_minutes: 150,
///     base_fee: 20,
///     extra_blocks: 2,
///     surcharge: 10,
///     discount_applied: false,
///     discount: 0,
///     fee: 30,
///     steps: vec![],
/// };
/// assert_eq!(calculation.gross_fee(), 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeCalculation {
    /// The type the fee was computed for.
    pub vehicle_type: VehicleType,
    /// Whole minutes parked at the moment of calculation.
    pub parked_minutes: u32,
    /// The base fee covering the included minutes.
    pub base_fee: u32,
    /// Number of started blocks beyond the included minutes.
    pub extra_blocks: u32,
    /// Charge for the extra blocks.
    pub surcharge: u32,
    /// Whether the discount card reduction was applied.
    pub discount_applied: bool,
    /// Amount taken off by the discount.
    pub discount: u32,
    /// The fee to collect.
    pub fee: u32,
    /// The rule applications that produced the fee.
    pub steps: Vec<FeeStep>,
}

impl FeeCalculation {
    /// The fee before any discount.
    pub fn gross_fee(&self) -> u32 {
        self.base_fee + self.surcharge
    }
}

/// What a vehicle receives when it checks out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutReceipt {
    /// The plate of the departed vehicle.
    pub plate: String,
    /// When the vehicle checked in.
    pub check_in_time: DateTime<Utc>,
    /// When the vehicle checked out.
    pub check_out_time: DateTime<Utc>,
    /// The fee collected.
    pub fee: u32,
    /// How the fee was reached.
    pub calculation: FeeCalculation,
}

/// Aggregate earnings of the lot.
///
/// # Example
///
/// ```
/// use parking_engine::models::EarningsSummary;
///
/// let summary = EarningsSummary { vehicle_count: 3, total_earnings: 75 };
/// assert_eq!(
///     summary.to_string(),
///     "3 vehicles have checked out and have earnings of $75"
/// );
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EarningsSummary {
    /// Number of completed check-outs.
    pub vehicle_count: u64,
    /// Sum of all fees collected.
    pub total_earnings: u64,
}

impl fmt::Display for EarningsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} vehicles have checked out and have earnings of ${}",
            self.vehicle_count, self.total_earnings
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn create_sample_calculation(fee: u32) -> FeeCalculation {
        FeeCalculation {
            vehicle_type: VehicleType::Bus,
            parked_minutes: 150,
            base_fee: 30,
            extra_blocks: 2,
            surcharge: 10,
            discount_applied: true,
            discount: 40 - fee,
            fee,
            steps: vec![FeeStep {
                step_number: 1,
                rule_id: "base_fee".to_string(),
                rule_name: "Base Fee".to_string(),
                input: serde_json::json!({"vehicle_type": "bus"}),
                output: serde_json::json!({"base_fee": 30}),
                reasoning: "Base fee for bus is 30".to_string(),
            }],
        }
    }

    #[test]
    fn test_gross_fee_excludes_discount() {
        let calculation = create_sample_calculation(34);
        assert_eq!(calculation.gross_fee(), 40);
        assert_eq!(calculation.gross_fee() - calculation.discount, 34);
    }

    #[test]
    fn test_receipt_serializes_fee_and_times() {
        let receipt = CheckOutReceipt {
            plate: "DD444DD".to_string(),
            check_in_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 0, 0).unwrap(),
            check_out_time: Utc.with_ymd_and_hms(2026, 1, 15, 11, 30, 0).unwrap(),
            fee: 34,
            calculation: create_sample_calculation(34),
        };

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["plate"], "DD444DD");
        assert_eq!(json["fee"], 34);
        assert_eq!(json["calculation"]["vehicle_type"], "bus");
        assert_eq!(json["calculation"]["steps"][0]["rule_id"], "base_fee");
        assert_eq!(json["check_in_time"], "2026-01-15T09:00:00Z");
    }

    #[test]
    fn test_earnings_summary_default_is_zero() {
        let summary = EarningsSummary::default();
        assert_eq!(summary.vehicle_count, 0);
        assert_eq!(summary.total_earnings, 0);
    }

    #[test]
    fn test_earnings_summary_display() {
        let summary = EarningsSummary {
            vehicle_count: 2,
            total_earnings: 45,
        };
        assert_eq!(
            summary.to_string(),
            "2 vehicles have checked out and have earnings of $45"
        );
    }
}
