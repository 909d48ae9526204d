use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_step_conserves_pair_sum_and_bounds() {
    let k = Array2::<f64>::eye(3);
    let mut alpha = arr1(&[0.5, 0.3, 0.2]);
    let c = 0.6;
    let state = calculate_predictions(alpha.view(), k.view(), c, 1e-6);

    let deltas = take_step(
        &mut alpha,
        1,
        2,
        &state.distances_to_center,
        k.view(),
        c,
        1e-6,
    );

    let (delta1, delta2) = deltas.expect("a significant step must exist");
    assert_abs_diff_eq!(delta1, -0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(delta2, 0.05, epsilon = 1e-12);
    assert_abs_diff_eq!(alpha[1] + alpha[2], 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(alpha.sum(), 1.0, epsilon = 1e-12);
    for &a in alpha.iter() {
        assert!((0.0..=c).contains(&a));
    }
}

#[test]
fn test_interior_optimum_matches_brute_force_minimization() {
    let x = arr2(&[[1.0, 0.0], [0.8, 0.3], [0.2, 0.9]]);
    let k = linear_gram(&x);
    let c = 0.6;
    let mut alpha = arr1(&[0.2, 0.5, 0.3]);
    let state = calculate_predictions(alpha.view(), k.view(), c, 1e-6);

    let alpha_before = alpha.clone();
    let objective_before = dual_objective(&alpha, &k);
    let (i1, i2) = (1, 2);
    take_step(
        &mut alpha,
        i1,
        i2,
        &state.distances_to_center,
        k.view(),
        c,
        1e-6,
    )
    .expect("a significant step must exist");

    // Scan the feasible segment of the restricted problem for the minimizer
    let delta = alpha_before[i1] + alpha_before[i2];
    let low = 0.0f64.max(delta - c);
    let high = c.min(delta);
    let steps = 60_000;
    let mut best_alpha2 = low;
    let mut best_value = f64::INFINITY;
    for t in 0..=steps {
        let candidate2 = low + (high - low) * t as f64 / steps as f64;
        let mut candidate = alpha_before.clone();
        candidate[i2] = candidate2;
        candidate[i1] = delta - candidate2;
        let value = dual_objective(&candidate, &k);
        if value < best_value {
            best_value = value;
            best_alpha2 = candidate2;
        }
    }

    assert_abs_diff_eq!(alpha[i2], best_alpha2, epsilon = 1e-3);
    assert!(dual_objective(&alpha, &k) <= objective_before + 1e-12);
}

#[test]
fn test_optimum_clipped_to_feasible_segment() {
    let x = arr2(&[[1.0, 0.0], [0.8, 0.3], [0.2, 0.9]]);
    let k = linear_gram(&x);
    let c = 0.6;
    let mut alpha = arr1(&[0.2, 0.5, 0.3]);
    let state = calculate_predictions(alpha.view(), k.view(), c, 1e-6);

    // For this pair the unconstrained optimum lies below L and must be clipped
    let (i1, i2) = (0, 1);
    let delta = alpha[i1] + alpha[i2];
    let low = 0.0f64.max(delta - c);
    take_step(
        &mut alpha,
        i1,
        i2,
        &state.distances_to_center,
        k.view(),
        c,
        1e-6,
    )
    .expect("a significant step must exist");

    assert_abs_diff_eq!(alpha[i2], low, epsilon = 1e-12);
    assert_abs_diff_eq!(alpha[i1], delta - low, epsilon = 1e-12);
}

#[test]
fn test_clipping_to_upper_bound() {
    let k = Array2::<f64>::eye(2);
    let mut alpha = arr1(&[0.3, 0.2]);
    // A fabricated distance gap pushes the optimum far above H
    let distances = arr1(&[0.0, 10.0]);

    let deltas = take_step(&mut alpha, 0, 1, &distances, k.view(), 0.4, 1e-6);

    let (delta1, delta2) = deltas.expect("a significant step must exist");
    assert_abs_diff_eq!(alpha[1], 0.4, epsilon = 1e-12);
    assert_abs_diff_eq!(alpha[0], 0.1, epsilon = 1e-12);
    assert_abs_diff_eq!(delta1, -0.2, epsilon = 1e-12);
    assert_abs_diff_eq!(delta2, 0.2, epsilon = 1e-12);
}

#[test]
fn test_same_index_pair_fails() {
    let k = Array2::<f64>::eye(2);
    let mut alpha = arr1(&[0.5, 0.5]);
    let distances = arr1(&[0.0, 1.0]);

    assert!(take_step(&mut alpha, 1, 1, &distances, k.view(), 0.6, 1e-6).is_none());
    assert_eq!(alpha, arr1(&[0.5, 0.5]));
}

#[test]
fn test_degenerate_bounds_fail() {
    let k = Array2::<f64>::eye(2);
    // Both multipliers at C: L == H == C and no movement is feasible
    let mut alpha = arr1(&[0.5, 0.5]);
    let distances = arr1(&[0.0, 1.0]);

    assert!(take_step(&mut alpha, 0, 1, &distances, k.view(), 0.5, 1e-6).is_none());
    assert_eq!(alpha, arr1(&[0.5, 0.5]));
}

#[test]
fn test_non_positive_curvature_fails() {
    // An indefinite kernel submatrix: eta = 1 + 1 - 4 <= 0
    let k = arr2(&[[1.0, 2.0], [2.0, 1.0]]);
    let mut alpha = arr1(&[0.6, 0.4]);
    let distances = arr1(&[0.0, 1.0]);

    assert!(take_step(&mut alpha, 0, 1, &distances, k.view(), 0.7, 1e-6).is_none());
    assert_eq!(alpha, arr1(&[0.6, 0.4]));
}

#[test]
fn test_insignificant_change_fails_without_mutation() {
    let k = Array2::<f64>::eye(2);
    // Equal distances leave the unconstrained optimum exactly in place
    let mut alpha = arr1(&[0.5, 0.5]);
    let distances = arr1(&[0.7, 0.7]);

    assert!(take_step(&mut alpha, 0, 1, &distances, k.view(), 0.6, 1e-6).is_none());
    assert_eq!(alpha, arr1(&[0.5, 0.5]));
}
