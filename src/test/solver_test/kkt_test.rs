use super::*;

const C: f64 = 1.0;
const EPS: f64 = 1e-3;

#[test]
fn test_inside_point_with_positive_multiplier_violates() {
    // Strictly inside the sphere: the multiplier should be zero
    assert!(violates_kkt_condition(-0.1, 0.5, C, EPS));
}

#[test]
fn test_inside_point_with_zero_multiplier_is_consistent() {
    assert!(!violates_kkt_condition(-0.1, 0.0, C, EPS));
}

#[test]
fn test_outside_point_below_upper_bound_violates() {
    // Strictly outside the sphere: the multiplier should be at C
    assert!(violates_kkt_condition(0.1, 0.5, C, EPS));
}

#[test]
fn test_outside_point_at_upper_bound_is_consistent() {
    assert!(!violates_kkt_condition(0.1, C, C, EPS));
}

#[test]
fn test_boundary_point_is_consistent_for_any_multiplier() {
    assert!(!violates_kkt_condition(0.0, 0.0, C, EPS));
    assert!(!violates_kkt_condition(0.0, 0.5, C, EPS));
    assert!(!violates_kkt_condition(0.0, C, C, EPS));
}

#[test]
fn test_distances_within_tolerance_do_not_violate() {
    assert!(!violates_kkt_condition(-0.5 * EPS, 0.5, C, EPS));
    assert!(!violates_kkt_condition(0.5 * EPS, 0.5, C, EPS));
}

#[test]
fn test_multipliers_within_tolerance_do_not_violate() {
    // Inside, but the multiplier is already epsilon-close to zero
    assert!(!violates_kkt_condition(-0.1, 0.5 * EPS, C, EPS));
    // Outside, but the multiplier is already epsilon-close to C
    assert!(!violates_kkt_condition(0.1, C - 0.5 * EPS, C, EPS));
}
