//! Input validation for split calculations.
//!
//! Checks run in a fixed order and stop at the first failure, so the caller
//! always has exactly one message to surface: the total amount, then the
//! rounding unit, then each role in display order (name, weight, count), and
//! finally the combined weight.

use tracing::debug;
use warikan_types::{Role, SplitConfig};

use crate::error::{SplitError, SplitResult};

/// Smallest weight a role may carry into a calculation.
pub const MIN_WEIGHT: f64 = 0.1;

/// Largest total amount a calculation accepts.
pub const MAX_TOTAL_AMOUNT: f64 = 1e15;

/// A role that passed validation: trimmed name, checked ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRole {
    /// Display name with surrounding whitespace removed.
    pub name: String,
    /// Relative payment weight, finite and at least [`MIN_WEIGHT`].
    pub weight: f64,
    /// Number of people paying this role's amount, at least one.
    pub count: u32,
}

/// A full set of inputs that passed validation, ready for computation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInput {
    /// Roles in display order.
    pub roles: Vec<ValidatedRole>,
    /// Total amount to split.
    pub total_amount: f64,
    /// Rounding unit, at least one currency unit.
    pub rounding_unit: u64,
}

impl ValidatedInput {
    /// Sum of weight-times-count over all roles. Guaranteed positive.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.roles
            .iter()
            .map(|role| role.weight * f64::from(role.count))
            .sum()
    }
}

/// Validates the roster and configuration for a calculation.
///
/// On success the returned input is internally consistent: the total amount
/// is positive and at most [`MAX_TOTAL_AMOUNT`], every role has a non-empty
/// trimmed name, a finite weight of at least [`MIN_WEIGHT`] and a count of
/// at least one, and the combined weight is positive.
pub fn validate(roles: &[Role], config: &SplitConfig) -> SplitResult<ValidatedInput> {
    if !config.total_amount.is_finite() || config.total_amount <= 0.0 {
        return Err(SplitError::invalid_total_amount(format!(
            "expected a positive amount, got {}",
            config.total_amount
        )));
    }
    // Collected totals are tracked in whole u64 currency units; amounts
    // beyond the cap have no faithful schedule.
    if config.total_amount > MAX_TOTAL_AMOUNT {
        return Err(SplitError::invalid_total_amount(format!(
            "expected at most {MAX_TOTAL_AMOUNT}, got {}",
            config.total_amount
        )));
    }
    if config.rounding_unit < 1 {
        return Err(SplitError::invalid_rounding_unit(format!(
            "expected a whole currency unit of at least 1, got {}",
            config.rounding_unit
        )));
    }

    let mut validated = Vec::with_capacity(roles.len());
    for (index, role) in roles.iter().enumerate() {
        let position = index + 1;
        let name = role.name.trim();
        if name.is_empty() {
            return Err(SplitError::empty_role_name(position));
        }
        if !role.weight.is_finite() || role.weight < MIN_WEIGHT {
            return Err(SplitError::invalid_weight(
                name,
                position,
                format!("expected at least {MIN_WEIGHT}, got {}", role.weight),
            ));
        }
        if role.count < 1 {
            return Err(SplitError::invalid_count(
                name,
                position,
                "expected at least one person",
            ));
        }
        validated.push(ValidatedRole {
            name: name.to_string(),
            weight: role.weight,
            count: role.count,
        });
    }

    let input = ValidatedInput {
        roles: validated,
        total_amount: config.total_amount,
        rounding_unit: config.rounding_unit as u64,
    };
    // With per-role minimums in place, only an empty role slice can still
    // produce a zero combined weight.
    if input.total_weight() <= 0.0 {
        return Err(SplitError::ZeroTotalWeight);
    }
    debug!(
        roles = input.roles.len(),
        total_amount = input.total_amount,
        rounding_unit = input.rounding_unit,
        "Inputs validated"
    );
    Ok(input)
}
