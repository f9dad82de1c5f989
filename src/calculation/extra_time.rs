//! Extra-time surcharge calculation.
//!
//! Time beyond the included minutes is billed in fixed blocks. Every started
//! block is charged in full.

use crate::config::TariffConfig;
use crate::models::FeeStep;

/// The result of the extra-time surcharge calculation.
#[derive(Debug, Clone)]
pub struct ExtraTimeResult {
    /// Minutes parked beyond the included minutes.
    pub extra_minutes: u32,
    /// Number of started blocks in the extra minutes.
    pub extra_blocks: u32,
    /// Charge for the extra blocks.
    pub surcharge: u32,
    /// The audit step recording this calculation.
    pub audit_step: FeeStep,
}

/// Calculates the surcharge for time parked beyond the included minutes.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::calculate_extra_time;
/// use parking_engine::config::TariffConfig;
///
/// // 150 minutes: 30 extra minutes, two 15-minute blocks at 5 each.
/// let result = calculate_extra_time(150, &TariffConfig::default(), 2);
/// assert_eq!(result.extra_blocks, 2);
/// assert_eq!(result.surcharge, 10);
///
/// // A single minute over starts a new block.
/// let result = calculate_extra_time(121, &TariffConfig::default(), 2);
/// assert_eq!(result.extra_blocks, 1);
/// ```
pub fn calculate_extra_time(
    parked_minutes: u32,
    tariff: &TariffConfig,
    step_number: u32,
) -> ExtraTimeResult {
    let extra_minutes = parked_minutes.saturating_sub(tariff.included_minutes);

    // block_minutes is validated non-zero when the tariff is loaded
    let extra_blocks = if extra_minutes == 0 || tariff.block_minutes == 0 {
        0
    } else {
        extra_minutes.div_ceil(tariff.block_minutes)
    };
    let surcharge = extra_blocks.saturating_mul(tariff.block_fee);

    let reasoning = if extra_blocks > 0 {
        format!(
            "{} minutes parked exceeds {} included minutes by {}: {} started block(s) of {} minutes at {} each",
            parked_minutes,
            tariff.included_minutes,
            extra_minutes,
            extra_blocks,
            tariff.block_minutes,
            tariff.block_fee
        )
    } else {
        format!(
            "{} minutes parked is within the {} included minutes",
            parked_minutes, tariff.included_minutes
        )
    };

    let audit_step = FeeStep {
        step_number,
        rule_id: "extra_time_surcharge".to_string(),
        rule_name: "Extra Time Surcharge".to_string(),
        input: serde_json::json!({
            "parked_minutes": parked_minutes,
            "included_minutes": tariff.included_minutes,
            "block_minutes": tariff.block_minutes,
            "block_fee": tariff.block_fee
        }),
        output: serde_json::json!({
            "extra_minutes": extra_minutes,
            "extra_blocks": extra_blocks,
            "surcharge": surcharge
        }),
        reasoning,
    };

    ExtraTimeResult {
        extra_minutes,
        extra_blocks,
        surcharge,
        audit_step,
    }
}
