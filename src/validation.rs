use crate::error::ModelError;
use ndarray::{ArrayBase, Data, Ix1, Ix2};

/// Performs validation checks on an input data matrix.
///
/// This function validates that:
/// - The input data matrix is not empty
/// - The input data does not contain NaN or infinite values
///
/// # Parameters
///
/// * `x` - A 2D array of feature values where rows represent samples and columns represent features
///
/// # Returns
///
/// - `Ok(())` - If all validation checks pass
/// - `Err(ModelError::InputValidationError)` - If any validation check fails, with an informative error message
pub fn preliminary_check<S>(x: &ArrayBase<S, Ix2>) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if x.nrows() == 0 || x.ncols() == 0 {
        return Err(ModelError::InputValidationError(
            "Input data is empty".to_string(),
        ));
    }

    for (i, row) in x.outer_iter().enumerate() {
        for (j, &val) in row.iter().enumerate() {
            if val.is_nan() || val.is_infinite() {
                return Err(ModelError::InputValidationError(format!(
                    "Input data contains NaN or infinite value at position [{}][{}]",
                    i, j
                )));
            }
        }
    }

    Ok(())
}

/// Validates the regularization parameter C of the one-class objective.
///
/// C bounds each Lagrange multiplier from above while the multipliers sum to
/// one, so only values in `(0, 1]` admit a feasible assignment.
///
/// # Parameters
///
/// * `c` - The regularization parameter to validate
///
/// # Returns
///
/// - `Ok(())` - If C lies in `(0, 1]`
/// - `Err(ModelError::InputValidationError)` - If C is non-positive, greater than one, NaN, or infinite
pub fn validate_regularization(c: f64) -> Result<(), ModelError> {
    if !c.is_finite() || c <= 0.0 || c > 1.0 {
        return Err(ModelError::InputValidationError(format!(
            "Regularization parameter C must lie in (0, 1], got {}",
            c
        )));
    }

    Ok(())
}

/// Validates that the optimization precision is positive and finite.
///
/// The precision governs both the KKT-violation tolerance and the significance
/// threshold for accepting an optimization step.
///
/// # Parameters
///
/// * `opt_precision` - The optimization precision value to validate
///
/// # Returns
///
/// - `Ok(())` - If the precision is valid (positive and finite)
/// - `Err(ModelError::InputValidationError)` - If the precision is non-positive, NaN, or infinite
pub fn validate_tolerance(opt_precision: f64) -> Result<(), ModelError> {
    if opt_precision <= 0.0 || !opt_precision.is_finite() {
        return Err(ModelError::InputValidationError(format!(
            "opt_precision must be positive and finite, got {}",
            opt_precision
        )));
    }

    Ok(())
}

/// Validates that the maximum iterations parameter is greater than zero.
///
/// # Parameters
///
/// * `max_iterations` - The maximum number of iterations to validate
///
/// # Returns
///
/// - `Ok(())` - If the maximum iterations value is valid (greater than 0)
/// - `Err(ModelError::InputValidationError)` - If the maximum iterations value is 0
pub fn validate_max_iterations(max_iterations: usize) -> Result<(), ModelError> {
    if max_iterations == 0 {
        return Err(ModelError::InputValidationError(
            "max_iterations must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validates a precomputed kernel matrix.
///
/// The solver requires a non-empty square matrix of finite values that is
/// symmetric within the given tolerance. Positive semi-definiteness is assumed
/// and not re-verified.
///
/// # Parameters
///
/// - `k` - The kernel matrix to validate
/// - `tol` - Absolute tolerance for the symmetry check
///
/// # Returns
///
/// - `Ok(())` - If the matrix is non-empty, square, finite, and symmetric
/// - `Err(ModelError::InputValidationError)` - Otherwise, with an informative error message
pub fn validate_kernel_matrix<S>(k: &ArrayBase<S, Ix2>, tol: f64) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    let n = k.nrows();

    if n == 0 {
        return Err(ModelError::InputValidationError(
            "Kernel matrix is empty".to_string(),
        ));
    }

    if k.ncols() != n {
        return Err(ModelError::InputValidationError(format!(
            "Kernel matrix must be square, got {}x{}",
            n,
            k.ncols()
        )));
    }

    for i in 0..n {
        for j in i..n {
            let upper = k[[i, j]];
            let lower = k[[j, i]];

            if !upper.is_finite() || !lower.is_finite() {
                return Err(ModelError::InputValidationError(format!(
                    "Kernel matrix contains NaN or infinite value at position [{}][{}]",
                    i, j
                )));
            }

            if (upper - lower).abs() > tol {
                return Err(ModelError::InputValidationError(format!(
                    "Kernel matrix is not symmetric: K[{i}][{j}] = {upper} but K[{j}][{i}] = {lower}"
                )));
            }
        }
    }

    Ok(())
}

/// Validates a Lagrange multiplier vector against the one-class constraints.
///
/// Checks that the vector length matches the kernel matrix, that every entry
/// lies in `[0, C]` (within tolerance), and that the entries sum to one
/// (within tolerance).
///
/// # Parameters
///
/// - `alpha` - The multiplier vector to validate
/// - `n` - Expected length (number of training points)
/// - `c` - Upper bound for each multiplier
/// - `tol` - Tolerance for the bound and sum checks
///
/// # Returns
///
/// - `Ok(())` - If the vector is a feasible starting point
/// - `Err(ModelError::InputValidationError)` - Otherwise
pub fn validate_alpha<S>(
    alpha: &ArrayBase<S, Ix1>,
    n: usize,
    c: f64,
    tol: f64,
) -> Result<(), ModelError>
where
    S: Data<Elem = f64>,
{
    if alpha.len() != n {
        return Err(ModelError::InputValidationError(format!(
            "Multiplier vector has length {} but the kernel matrix has {} rows",
            alpha.len(),
            n
        )));
    }

    for (i, &a) in alpha.iter().enumerate() {
        if !a.is_finite() || a < -tol || a > c + tol {
            return Err(ModelError::InputValidationError(format!(
                "Multiplier {} at index {} is outside [0, {}]",
                a, i, c
            )));
        }
    }

    let sum: f64 = alpha.sum();
    if (sum - 1.0).abs() > tol {
        return Err(ModelError::InputValidationError(format!(
            "Multipliers must sum to 1, got {}",
            sum
        )));
    }

    Ok(())
}
