//! Discount card reduction.
//!
//! Holders of a discount card pay the fee reduced by the tariff's discount
//! rate. The reduction is applied to the fee including any surcharge and the
//! result is truncated to a whole amount.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::models::FeeStep;

/// The result of applying (or skipping) the discount.
#[derive(Debug, Clone)]
pub struct DiscountResult {
    /// Whether the reduction was applied.
    pub applied: bool,
    /// Amount taken off the gross fee.
    pub discount: u32,
    /// The fee after the reduction.
    pub fee: u32,
    /// The audit step recording this decision.
    pub audit_step: FeeStep,
}

/// Applies the discount card reduction to `gross_fee`.
///
/// # Examples
///
/// ```
/// use parking_engine::calculation::apply_discount;
/// use parking_engine::config::DEFAULT_DISCOUNT_RATE;
///
/// // floor(40 * 0.85) = 34
/// let result = apply_discount(40, true, DEFAULT_DISCOUNT_RATE, 3);
/// assert_eq!(result.fee, 34);
/// assert_eq!(result.discount, 6);
///
/// let result = apply_discount(40, false, DEFAULT_DISCOUNT_RATE, 3);
/// assert_eq!(result.fee, 40);
/// ```
pub fn apply_discount(
    gross_fee: u32,
    has_discount_card: bool,
    discount_rate: Decimal,
    step_number: u32,
) -> DiscountResult {
    let fee = if has_discount_card {
        let multiplier = (Decimal::ONE - discount_rate).max(Decimal::ZERO);
        (Decimal::from(gross_fee) * multiplier)
            .floor()
            .to_u32()
            .unwrap_or(gross_fee)
            .min(gross_fee)
    } else {
        gross_fee
    };
    let discount = gross_fee - fee;

    let reasoning = if has_discount_card {
        format!(
            "Discount card presented: {} reduced by {} to {}",
            gross_fee, discount_rate, fee
        )
    } else {
        "No discount card presented".to_string()
    };

    let audit_step = FeeStep {
        step_number,
        rule_id: "discount_card".to_string(),
        rule_name: "Discount Card".to_string(),
        input: serde_json::json!({
            "gross_fee": gross_fee,
            "has_discount_card": has_discount_card,
            "discount_rate": discount_rate.to_string()
        }),
        output: serde_json::json!({
            "discount": discount,
            "fee": fee
        }),
        reasoning,
    };

    DiscountResult {
        applied: has_discount_card,
        discount,
        fee,
        audit_step,
    }
}
