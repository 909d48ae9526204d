use super::*;
use approx::assert_abs_diff_eq;

#[test]
fn test_identical_points_have_zero_distances() {
    // Two identical points: the center coincides with both
    let k = arr2(&[[1.0, 1.0], [1.0, 1.0]]);
    let alpha = arr1(&[0.5, 0.5]);

    let state = calculate_predictions(alpha.view(), k.view(), 0.5, 1e-6);

    assert_abs_diff_eq!(state.const_term, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(state.radius_squared, 0.0, epsilon = 1e-12);
    for i in 0..2 {
        assert_abs_diff_eq!(state.distances_to_center[i], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(state.distances_to_boundary[i], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_orthonormal_points_with_uniform_multipliers() {
    let k = Array2::<f64>::eye(3);
    let third = 1.0 / 3.0;
    let alpha = arr1(&[third, third, third]);

    let state = calculate_predictions(alpha.view(), k.view(), 0.5, 1e-6);

    // const = sum alpha_i^2 = 1/3, d_i = 1 - 2/3 + 1/3 = 2/3
    assert_abs_diff_eq!(state.const_term, third, epsilon = 1e-12);
    assert_abs_diff_eq!(state.radius_squared, 2.0 * third, epsilon = 1e-12);
    for i in 0..3 {
        assert_abs_diff_eq!(state.distances_to_center[i], 2.0 * third, epsilon = 1e-12);
        assert_abs_diff_eq!(state.distances_to_boundary[i], 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_radius_averages_only_non_bounded_support_vectors() {
    let k = Array2::<f64>::eye(3);
    // Index 0 sits at the C bound, index 2 at zero; only index 1 is non-bounded
    let alpha = arr1(&[0.6, 0.4, 0.0]);

    let state = calculate_predictions(alpha.view(), k.view(), 0.6, 1e-6);

    assert_abs_diff_eq!(
        state.radius_squared,
        state.distances_to_center[1],
        epsilon = 1e-12
    );
}

#[test]
fn test_radius_falls_back_to_support_vectors_when_none_non_bounded() {
    let k = Array2::<f64>::eye(3);
    // Both support vectors sit exactly at the C bound
    let alpha = arr1(&[0.5, 0.5, 0.0]);

    let state = calculate_predictions(alpha.view(), k.view(), 0.5, 1e-6);

    let expected = (state.distances_to_center[0] + state.distances_to_center[1]) / 2.0;
    assert_abs_diff_eq!(state.radius_squared, expected, epsilon = 1e-12);
    // The zero-multiplier point plays no part in the radius
    assert_abs_diff_eq!(state.radius_squared, 0.5, epsilon = 1e-12);
}

#[test]
fn test_incremental_update_matches_full_recomputation() {
    let x = arr2(&[[1.0, 0.0], [0.8, 0.3], [0.2, 0.9]]);
    let k = linear_gram(&x);
    let c = 0.6;
    let opt_precision = 1e-6;

    let mut alpha = arr1(&[0.2, 0.5, 0.3]);
    let mut state = calculate_predictions(alpha.view(), k.view(), c, opt_precision);

    // Move mass from index 1 to index 2 and refresh incrementally
    let (i1, i2) = (1, 2);
    let (delta1, delta2) = (-0.15, 0.15);
    alpha[i1] += delta1;
    alpha[i2] += delta2;
    update_predictions(
        &mut state,
        alpha.view(),
        k.view(),
        i1,
        i2,
        delta1,
        delta2,
        c,
        opt_precision,
    );

    let fresh = calculate_predictions(alpha.view(), k.view(), c, opt_precision);
    assert_abs_diff_eq!(state.const_term, fresh.const_term, epsilon = 1e-10);
    assert_abs_diff_eq!(state.radius_squared, fresh.radius_squared, epsilon = 1e-10);
    for i in 0..3 {
        assert_abs_diff_eq!(
            state.distances_to_center[i],
            fresh.distances_to_center[i],
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            state.distances_to_boundary[i],
            fresh.distances_to_boundary[i],
            epsilon = 1e-10
        );
    }
}

#[test]
fn test_repeated_incremental_updates_stay_consistent() {
    let x = arr2(&[[1.0, 0.0], [0.8, 0.3], [0.2, 0.9], [-0.4, 0.5]]);
    let k = linear_gram(&x);
    let c = 0.5;
    let opt_precision = 1e-6;

    let mut alpha = arr1(&[0.4, 0.3, 0.2, 0.1]);
    let mut state = calculate_predictions(alpha.view(), k.view(), c, opt_precision);

    let moves = [(0usize, 2usize, -0.1), (1, 3, -0.05), (2, 0, -0.08)];
    for &(i1, i2, delta1) in &moves {
        alpha[i1] += delta1;
        alpha[i2] -= delta1;
        update_predictions(
            &mut state,
            alpha.view(),
            k.view(),
            i1,
            i2,
            delta1,
            -delta1,
            c,
            opt_precision,
        );
    }

    let fresh = calculate_predictions(alpha.view(), k.view(), c, opt_precision);
    assert_abs_diff_eq!(state.const_term, fresh.const_term, epsilon = 1e-9);
    assert_abs_diff_eq!(state.radius_squared, fresh.radius_squared, epsilon = 1e-9);
    for i in 0..4 {
        assert_abs_diff_eq!(
            state.distances_to_center[i],
            fresh.distances_to_center[i],
            epsilon = 1e-9
        );
    }
}
