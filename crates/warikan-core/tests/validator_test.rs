//! Validation precedence: the first failing check in the documented order is
//! the one reported, and well-formed input passes through unchanged apart
//! from name trimming.

use warikan_core::{MAX_TOTAL_AMOUNT, MIN_WEIGHT, SplitError, validate};
use warikan_types::{Role, SplitConfig};

fn role(id: u64, name: &str, weight: f64, count: u32) -> Role {
    Role::new(id, name, weight, count)
}

fn config(total: f64, unit: i64) -> SplitConfig {
    SplitConfig::new(total, unit)
}

#[test]
fn accepts_well_formed_input() {
    let roles = vec![role(1, "organizer", 1.5, 2), role(2, " member ", 1.0, 3)];
    let input = validate(&roles, &config(10000.0, 100)).expect("valid input");
    assert_eq!(input.roles.len(), 2);
    assert_eq!(input.roles[1].name, "member");
    assert_eq!(input.total_amount, 10000.0);
    assert_eq!(input.rounding_unit, 100);
    assert!((input.total_weight() - 6.0).abs() < 1e-9);
}

#[test]
fn rejects_non_positive_totals() {
    let roles = vec![role(1, "a", 1.0, 1)];
    for total in [0.0, -100.0] {
        let err = validate(&roles, &config(total, 1)).expect_err("invalid total");
        assert!(matches!(err, SplitError::InvalidTotalAmount { .. }));
    }
}

#[test]
fn rejects_non_finite_totals() {
    let roles = vec![role(1, "a", 1.0, 1)];
    for total in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = validate(&roles, &config(total, 1)).expect_err("invalid total");
        assert!(matches!(err, SplitError::InvalidTotalAmount { .. }));
    }
}

#[test]
fn rejects_totals_beyond_the_cap() {
    // Finite but far past anything a u64 collection could represent.
    let roles = vec![role(1, "a", 1.0, 2)];
    let err = validate(&roles, &config(4.0e19, 1)).expect_err("absurd total");
    assert!(matches!(err, SplitError::InvalidTotalAmount { .. }));
}

#[test]
fn accepts_the_maximum_total_exactly() {
    let roles = vec![role(1, "a", 1.0, 1)];
    assert!(validate(&roles, &config(MAX_TOTAL_AMOUNT, 1)).is_ok());
}

#[test]
fn total_amount_is_checked_before_anything_else() {
    // Both the total and a role are invalid; the total wins.
    let roles = vec![role(1, "", 0.0, 0)];
    let err = validate(&roles, &config(-1.0, 0)).expect_err("invalid input");
    assert!(matches!(err, SplitError::InvalidTotalAmount { .. }));
}

#[test]
fn rejects_rounding_units_below_one() {
    let roles = vec![role(1, "a", 1.0, 1)];
    for unit in [0, -10] {
        let err = validate(&roles, &config(100.0, unit)).expect_err("invalid unit");
        assert!(matches!(err, SplitError::InvalidRoundingUnit { .. }));
    }
}

#[test]
fn rounding_unit_is_checked_before_roles() {
    let roles = vec![role(1, "", 1.0, 1)];
    let err = validate(&roles, &config(100.0, 0)).expect_err("invalid input");
    assert!(matches!(err, SplitError::InvalidRoundingUnit { .. }));
}

#[test]
fn rejects_blank_names_with_their_position() {
    let roles = vec![role(1, "a", 1.0, 1), role(2, "   ", 1.0, 1)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("blank name");
    assert_eq!(err, SplitError::EmptyRoleName { position: 2 });
}

#[test]
fn name_is_checked_before_weight_within_a_role() {
    let roles = vec![role(1, "", f64::NAN, 0)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("invalid role");
    assert_eq!(err, SplitError::EmptyRoleName { position: 1 });
}

#[test]
fn rejects_weights_below_the_minimum() {
    let roles = vec![role(1, "a", MIN_WEIGHT - 0.01, 1)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("weight too small");
    assert!(matches!(err, SplitError::InvalidWeight { position: 1, .. }));
}

#[test]
fn accepts_the_minimum_weight_exactly() {
    let roles = vec![role(1, "a", MIN_WEIGHT, 1)];
    assert!(validate(&roles, &config(100.0, 1)).is_ok());
}

#[test]
fn rejects_non_finite_weights() {
    for weight in [f64::NAN, f64::INFINITY] {
        let roles = vec![role(1, "a", weight, 1)];
        let err = validate(&roles, &config(100.0, 1)).expect_err("bad weight");
        assert!(matches!(err, SplitError::InvalidWeight { .. }));
    }
}

#[test]
fn rejects_a_zero_count() {
    let roles = vec![role(1, "a", 1.0, 1), role(2, "b", 1.0, 0)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("zero count");
    assert!(matches!(
        err,
        SplitError::InvalidCount { position: 2, .. }
    ));
}

#[test]
fn weight_is_checked_before_count_within_a_role() {
    let roles = vec![role(1, "a", 0.0, 0)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("invalid role");
    assert!(matches!(err, SplitError::InvalidWeight { .. }));
}

#[test]
fn earlier_roles_are_checked_before_later_ones() {
    let roles = vec![role(1, "a", 1.0, 0), role(2, "", 1.0, 1)];
    let err = validate(&roles, &config(100.0, 1)).expect_err("invalid input");
    assert!(matches!(
        err,
        SplitError::InvalidCount { position: 1, .. }
    ));
}

#[test]
fn an_empty_role_list_reports_zero_total_weight() {
    let err = validate(&[], &config(100.0, 1)).expect_err("no roles");
    assert_eq!(err, SplitError::ZeroTotalWeight);
}
