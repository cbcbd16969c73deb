//! The split computation: proportional allocation with ceiling rounding.
//!
//! Each role's raw share is `total * weight / total_weight` per person. The
//! per-person payment is that share rounded up to the next multiple of the
//! rounding unit, so the collected total never falls below the bill.

use chrono::Utc;
use warikan_types::{PaymentResult, RolePayment};

use crate::validator::ValidatedInput;

/// Computes the payment schedule for validated inputs.
///
/// The rounding never subtracts: a raw share already on a unit boundary is
/// kept as is, anything else moves up to the next boundary. Overshoot across
/// all payers is reported as the excess amount. Amount arithmetic saturates
/// at the top of the `u64` range rather than wrapping.
#[must_use]
pub fn compute(input: &ValidatedInput) -> PaymentResult {
    let total_weight = input.total_weight();
    let price_per_weight = input.total_amount / total_weight;
    let unit = input.rounding_unit;

    let mut roles = Vec::with_capacity(input.roles.len());
    let mut total_collected: u64 = 0;
    for role in &input.roles {
        let raw_share = price_per_weight * role.weight;
        let units = (raw_share / unit as f64).ceil() as u64;
        let payment = units.saturating_mul(unit);
        total_collected =
            total_collected.saturating_add(payment.saturating_mul(u64::from(role.count)));
        roles.push(RolePayment {
            name: role.name.clone(),
            weight: role.weight,
            count: role.count,
            final_individual_payment: payment,
        });
    }

    let excess_amount = total_collected as f64 - input.total_amount;
    PaymentResult {
        roles,
        total_amount: input.total_amount,
        total_collected_amount: total_collected,
        excess_amount,
        calculated_at: Utc::now(),
    }
}
