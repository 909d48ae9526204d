use crate::error::ModelError;
use crate::validation::validate_regularization;
use ndarray::Array1;
use rand::Rng;
use rand::rngs::StdRng;

/// Produces a feasible random starting point for the multiplier vector.
///
/// `floor(1/C)` distinct indices, chosen at random, are set to C and one
/// further random index receives the residual `1 - floor(1/C) * C`, so that
/// the result satisfies both constraints of the one-class dual:
/// the entries sum to one and each entry lies in `[0, C]`.
///
/// When `1/C` is integral the residual is zero and no extra index is
/// assigned; the C-valued indices already sum to one.
///
/// # Parameters
///
/// - `n` - Number of training points
/// - `c` - Regularization parameter, must lie in `(0, 1]`
/// - `rng` - Random number generator used to pick the indices
///
/// # Returns
///
/// - `Ok(Array1<f64>)` - A feasible multiplier vector of length `n`
/// - `Err(ModelError::InputValidationError)` - If `n` is zero, C is outside
///   `(0, 1]`, or `n * C < 1` so that no feasible vector exists
pub fn initialize_alpha(n: usize, c: f64, rng: &mut StdRng) -> Result<Array1<f64>, ModelError> {
    validate_regularization(c)?;

    if n == 0 {
        return Err(ModelError::InputValidationError(
            "Cannot initialize multipliers for zero training points".to_string(),
        ));
    }

    if (n as f64) * c < 1.0 {
        return Err(ModelError::InputValidationError(format!(
            "No feasible multiplier vector: {} points with C = {} sum to at most {}",
            n,
            c,
            n as f64 * c
        )));
    }

    let mut k = (1.0 / c).floor() as usize;
    let mut residual = 1.0 - k as f64 * c;

    // floor(1/C) can overshoot by one when 1/C rounds up past an integer
    if residual < 0.0 {
        k -= 1;
        residual = 1.0 - k as f64 * c;
    }

    // Fisher-Yates shuffle of the first k + 1 positions
    let mut indices: Vec<usize> = (0..n).collect();
    for i in 0..(k + 1).min(n) {
        let j = rng.random_range(i..n);
        indices.swap(i, j);
    }

    let mut alpha = Array1::<f64>::zeros(n);
    for &idx in indices.iter().take(k) {
        alpha[idx] = c;
    }

    if residual > f64::EPSILON {
        alpha[indices[k]] = residual;
    }

    Ok(alpha)
}
