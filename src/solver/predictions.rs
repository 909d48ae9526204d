use ndarray::{Array1, ArrayView1, ArrayView2};

/// Derived per-point prediction state, kept consistent with the multiplier
/// vector after every optimization step.
///
/// # Fields
///
/// - `distances_to_center` - Squared feature-space distance of each point to the sphere center
/// - `distances_to_boundary` - `distances_to_center - radius_squared`; negative inside the sphere
/// - `radius_squared` - Squared radius of the current decision boundary
/// - `const_term` - The shared double sum `sum_jk alpha_j * alpha_k * K[j][k]`, identical for every point
#[derive(Debug, Clone)]
pub struct PredictionState {
    pub distances_to_center: Array1<f64>,
    pub distances_to_boundary: Array1<f64>,
    pub radius_squared: f64,
    pub const_term: f64,
}

/// Squared radius of the decision boundary for the current multipliers.
///
/// The radius is not unique when intermediate multipliers violate the
/// optimality conditions, so it is averaged over all non-bounded support
/// vectors (`opt_precision < alpha < C - opt_precision`). When that set is
/// empty the average falls back to all support vectors (`alpha >
/// opt_precision`), which exist whenever the multipliers sum to one.
fn squared_radius(
    distances_to_center: &Array1<f64>,
    alpha: ArrayView1<f64>,
    c: f64,
    opt_precision: f64,
) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;

    for (i, &a) in alpha.iter().enumerate() {
        if a > opt_precision && a < c - opt_precision {
            sum += distances_to_center[i];
            count += 1;
        }
    }

    if count == 0 {
        for (i, &a) in alpha.iter().enumerate() {
            if a > opt_precision {
                sum += distances_to_center[i];
                count += 1;
            }
        }
    }

    if count == 0 {
        // only reachable when opt_precision swamps 1/N
        return 0.0;
    }

    sum / count as f64
}

/// Computes the full prediction state from scratch in O(N^2).
///
/// The distance of point i to the center is
/// `K[i][i] - 2 * sum_j alpha_j * K[i][j] + const_term`, where the constant
/// double-sum term is shared across all points and computed once. This full
/// computation runs once per solve; every subsequent refresh goes through
/// [`update_predictions`].
///
/// # Parameters
///
/// - `alpha` - Current Lagrange multipliers
/// - `k` - Precomputed kernel matrix
/// - `c` - Regularization parameter
/// - `opt_precision` - Tolerance used to classify support vectors
///
/// # Returns
///
/// * `PredictionState` - Distances, squared radius, and the shared constant term
pub fn calculate_predictions(
    alpha: ArrayView1<f64>,
    k: ArrayView2<f64>,
    c: f64,
    opt_precision: f64,
) -> PredictionState {
    let n = alpha.len();
    let weighted = k.dot(&alpha);
    let const_term = alpha.dot(&weighted);

    let mut distances_to_center = Array1::<f64>::zeros(n);
    for i in 0..n {
        distances_to_center[i] = k[[i, i]] - 2.0 * weighted[i] + const_term;
    }

    let radius_squared = squared_radius(&distances_to_center, alpha, c, opt_precision);
    let distances_to_boundary = &distances_to_center - radius_squared;

    PredictionState {
        distances_to_center,
        distances_to_boundary,
        radius_squared,
        const_term,
    }
}

/// Incrementally refreshes the prediction state after a two-variable step in O(N).
///
/// For every point i the distance to the center changes by
/// `-2 * delta1 * K[i1][i] - 2 * delta2 * K[i2][i] + delta_const`, where
/// `delta_const` is the change of the shared double-sum term. The squared
/// radius is then re-averaged over the (possibly changed) set of non-bounded
/// support vectors.
///
/// Must be called with `alpha` already mutated by the step and with the state
/// still holding the pre-step values.
///
/// # Parameters
///
/// - `state` - Prediction state to refresh in place
/// - `alpha` - Multiplier vector after the step
/// - `k` - Precomputed kernel matrix
/// - `i1`, `i2` - The optimized pair
/// - `delta1`, `delta2` - The changes applied to `alpha[i1]` and `alpha[i2]`
/// - `c` - Regularization parameter
/// - `opt_precision` - Tolerance used to classify support vectors
#[allow(clippy::too_many_arguments)]
pub fn update_predictions(
    state: &mut PredictionState,
    alpha: ArrayView1<f64>,
    k: ArrayView2<f64>,
    i1: usize,
    i2: usize,
    delta1: f64,
    delta2: f64,
    c: f64,
    opt_precision: f64,
) {
    let k11 = k[[i1, i1]];
    let k22 = k[[i2, i2]];
    let k12 = k[[i1, i2]];

    // Pre-step weighted sums, recovered from the stored distances:
    // d_i = K[i][i] - 2 * g_i + const_term
    let g1_old = (k11 + state.const_term - state.distances_to_center[i1]) / 2.0;
    let g2_old = (k22 + state.const_term - state.distances_to_center[i2]) / 2.0;

    let delta_const = 2.0 * (delta1 * g1_old + delta2 * g2_old)
        + delta1 * delta1 * k11
        + 2.0 * delta1 * delta2 * k12
        + delta2 * delta2 * k22;

    let row1 = k.row(i1);
    let row2 = k.row(i2);
    for (i, d) in state.distances_to_center.iter_mut().enumerate() {
        *d += -2.0 * (delta1 * row1[i] + delta2 * row2[i]) + delta_const;
    }

    state.const_term += delta_const;
    state.radius_squared = squared_radius(&state.distances_to_center, alpha, c, opt_precision);
    state.distances_to_boundary = &state.distances_to_center - state.radius_squared;
}
