use ndarray::{Array1, ArrayView2};

/// Attempts the analytic optimization step for the pair (i1, i2), mutating the
/// multiplier vector in place on success.
///
/// Because the multipliers sum to one, `delta = alpha[i1] + alpha[i2]` is
/// invariant over the step, which bounds the new value of `alpha[i2]` to
/// `[L, H]` with `L = max(0, delta - C)` and `H = min(C, delta)`. Within those
/// bounds the restricted dual is a parabola in `alpha[i2]` with curvature
/// `eta = K[i1][i1] + K[i2][i2] - 2 * K[i1][i2]`; its unconstrained optimum is
///
/// `alpha*[i2] = alpha[i2] + (d2 - d1) / (2 * eta)`
///
/// where `d1`, `d2` are the current distances to the center. The optimum is
/// clipped to `[L, H]` and committed only if the change passes the
/// significance threshold `|alpha*[i2] - alpha[i2]| >=
/// opt_precision * (alpha[i2] + alpha*[i2] + opt_precision)`.
///
/// # Parameters
///
/// - `alpha` - Multiplier vector, mutated in place on success
/// - `i1`, `i2` - The pair to optimize
/// - `distances_to_center` - Current distances to the sphere center, consistent with `alpha`
/// - `k` - Precomputed kernel matrix
/// - `c` - Regularization parameter
/// - `opt_precision` - Numerical tolerance
///
/// # Returns
///
/// - `Some((delta1, delta2))` - The changes applied to `alpha[i1]` and `alpha[i2]`
/// - `None` - No feasible significant step exists: the pair is degenerate
///   (`L == H`), the kernel submatrix has non-positive curvature, or the
///   optimal change is below the significance threshold. `alpha` is left
///   untouched in all failure cases.
pub fn take_step(
    alpha: &mut Array1<f64>,
    i1: usize,
    i2: usize,
    distances_to_center: &Array1<f64>,
    k: ArrayView2<f64>,
    c: f64,
    opt_precision: f64,
) -> Option<(f64, f64)> {
    if i1 == i2 {
        return None;
    }

    let alpha1_old = alpha[i1];
    let alpha2_old = alpha[i2];
    let delta = alpha1_old + alpha2_old;

    let low = 0.0f64.max(delta - c);
    let high = c.min(delta);
    if high <= low {
        return None;
    }

    let eta = k[[i1, i1]] + k[[i2, i2]] - 2.0 * k[[i1, i2]];
    if eta <= 0.0 {
        return None;
    }

    let mut alpha2_new =
        alpha2_old + (distances_to_center[i2] - distances_to_center[i1]) / (2.0 * eta);
    if alpha2_new < low {
        alpha2_new = low;
    } else if alpha2_new > high {
        alpha2_new = high;
    }

    if (alpha2_new - alpha2_old).abs() < opt_precision * (alpha2_new + alpha2_old + opt_precision) {
        return None;
    }

    let alpha1_new = delta - alpha2_new;

    alpha[i1] = alpha1_new;
    alpha[i2] = alpha2_new;

    Some((alpha1_new - alpha1_old, alpha2_new - alpha2_old))
}
