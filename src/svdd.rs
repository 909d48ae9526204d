use crate::error::ModelError;
use crate::kernel::{KernelType, compute_kernel, compute_kernel_matrix};
use crate::solver::{SolveStatus, initialize_alpha, smo};
use crate::validation::{
    preliminary_check, validate_max_iterations, validate_regularization, validate_tolerance,
};
use ndarray::{Array1, Array2, ArrayView2};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;

/// Threshold for using parallel computation in SVDD prediction.
/// When the number of samples is below this threshold, sequential computation is used.
const SVDD_PARALLEL_THRESHOLD: usize = 100;

/// Support Vector Data Description
///
/// A one-class model that fits the smallest hypersphere enclosing the training
/// data in an implicit kernel feature space, trading sphere volume against
/// excluded points through the regularization parameter C. The dual quadratic
/// program is solved with the Sequential Minimal Optimization engine in
/// [`crate::solver`]. New points are scored by their squared distance to the
/// fitted decision boundary: positive scores lie outside the sphere and are
/// classified as outliers.
///
/// # Fields
///
/// - `kernel` - Kernel function type that defines the implicit feature space
/// - `regularization_param` - Regularization parameter C in `(0, 1]`; smaller values let more training points fall outside the sphere
/// - `opt_precision` - Numerical tolerance of the solver
/// - `max_iterations` - Budget of successful optimization steps
/// - `random_state` - Random seed for reproducibility
/// - `support_vectors` - Training samples with non-zero multipliers (available after fitting)
/// - `support_vector_alphas` - The corresponding Lagrange multipliers
/// - `radius_squared` - Squared radius of the fitted sphere
/// - `const_term` - Shared double-sum term of the decision function
/// - `status` - Terminal solver status of the last fit
/// - `n_iter` - Number of optimization steps the last fit took
///
/// # Examples
/// ```rust
/// use svdd::svdd::SVDD;
/// use svdd::kernel::KernelType;
/// use ndarray::arr2;
///
/// let x = arr2(&[
///     [0.0, 0.1],
///     [0.1, 0.0],
///     [-0.1, 0.1],
///     [0.1, -0.1],
///     [0.0, -0.1],
///     [8.0, 8.0],
/// ]);
///
/// let mut model = SVDD::new(KernelType::RBF { gamma: 0.5 }, 0.2, 1e-6, 100_000, Some(42));
/// model.fit(x.view()).unwrap();
///
/// let labels = model.predict(x.view()).unwrap();
/// assert_eq!(labels[5], -1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SVDD {
    kernel: KernelType,
    regularization_param: f64,
    opt_precision: f64,
    max_iterations: usize,
    random_state: Option<u64>,
    support_vectors: Option<Array2<f64>>,
    support_vector_alphas: Option<Array1<f64>>,
    radius_squared: Option<f64>,
    const_term: Option<f64>,
    status: Option<SolveStatus>,
    n_iter: Option<usize>,
}

impl Default for SVDD {
    /// Creates an SVDD instance with default parameters
    ///
    /// Default configuration:
    /// - Kernel function: RBF (Radial Basis Function) with gamma=0.1
    /// - Regularization parameter: 1.0 (no training point forced outside)
    /// - Optimization precision: 1e-6
    /// - Maximum iterations: 100000
    /// - Random state: None
    fn default() -> Self {
        SVDD {
            kernel: KernelType::RBF { gamma: 0.1 },
            regularization_param: 1.0,
            opt_precision: 1e-6,
            max_iterations: 100_000,
            random_state: None,
            support_vectors: None,
            support_vector_alphas: None,
            radius_squared: None,
            const_term: None,
            status: None,
            n_iter: None,
        }
    }
}

impl SVDD {
    /// Creates a new Support Vector Data Description model with specified parameters
    ///
    /// # Parameters
    ///
    /// - `kernel` - The kernel type defining the implicit feature space
    /// - `regularization_param` - The regularization parameter C, must lie in `(0, 1]`
    /// - `opt_precision` - Numerical tolerance of the solver
    /// - `max_iterations` - Budget of successful optimization steps
    /// - `random_state` - Random seed for reproducibility. If None, uses a non-deterministic seed
    ///
    /// # Returns
    ///
    /// * `Self` - A new unfitted SVDD instance
    pub fn new(
        kernel: KernelType,
        regularization_param: f64,
        opt_precision: f64,
        max_iterations: usize,
        random_state: Option<u64>,
    ) -> Self {
        SVDD {
            kernel,
            regularization_param,
            opt_precision,
            max_iterations,
            random_state,
            support_vectors: None,
            support_vector_alphas: None,
            radius_squared: None,
            const_term: None,
            status: None,
            n_iter: None,
        }
    }

    // Getters
    get_field_as_ref!(get_kernel, kernel, &KernelType);
    get_field!(get_regularization_parameter, regularization_param, f64);
    get_field!(get_opt_precision, opt_precision, f64);
    get_field!(get_max_iterations, max_iterations, usize);
    get_field!(get_random_state, random_state, Option<u64>);
    get_field!(get_radius_squared, radius_squared, Option<f64>);
    get_field!(get_status, status, Option<SolveStatus>);
    get_field!(get_actual_iterations, n_iter, Option<usize>);
    get_field_as_ref!(get_support_vectors, support_vectors, &Option<Array2<f64>>);
    get_field_as_ref!(
        get_support_vector_alphas,
        support_vector_alphas,
        &Option<Array1<f64>>
    );

    /// Fits the SVDD model to the training data
    ///
    /// Builds the kernel matrix, initializes a feasible multiplier vector, and
    /// runs the SMO solver. Training points whose final multiplier exceeds
    /// `opt_precision` are retained as support vectors together with the
    /// squared radius and the shared constant term of the decision function.
    ///
    /// A solve that runs out of iterations or stalls keeps its best-effort
    /// solution; the outcome is recorded in the `status` field rather than
    /// reported as an error.
    ///
    /// # Parameters
    ///
    /// * `x` - Training data matrix where each row is a sample
    ///
    /// # Returns
    ///
    /// - `Ok(&mut Self)` - The fitted model (for method chaining)
    /// - `Err(ModelError::InputValidationError)` - If the data or the model parameters are malformed
    /// - `Err(ModelError::ProcessingError)` - If the kernel matrix degenerates numerically
    pub fn fit(&mut self, x: ArrayView2<f64>) -> Result<&mut Self, ModelError> {
        preliminary_check(&x)?;
        validate_regularization(self.regularization_param)?;
        validate_tolerance(self.opt_precision)?;
        validate_max_iterations(self.max_iterations)?;

        let n_samples = x.nrows();
        let kernel_matrix = compute_kernel_matrix(x, &self.kernel);

        if kernel_matrix.iter().any(|&val| !val.is_finite()) {
            return Err(ModelError::ProcessingError(
                "Kernel matrix contains invalid values - check kernel parameters".to_string(),
            ));
        }

        let mut rng = if let Some(seed) = self.random_state {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_rng(&mut rand::rng())
        };

        let alpha = initialize_alpha(n_samples, self.regularization_param, &mut rng)?;
        let solution = smo(
            alpha,
            kernel_matrix.view(),
            self.regularization_param,
            self.opt_precision,
            self.max_iterations,
            &mut rng,
        )?;

        let support_indices: Vec<usize> = (0..n_samples)
            .filter(|&i| solution.alpha[i] > self.opt_precision)
            .collect();

        if support_indices.is_empty() {
            return Err(ModelError::ProcessingError(
                "No support vectors found - model failed to converge. Try adjusting parameters."
                    .to_string(),
            ));
        }

        let const_term = solution.alpha.dot(&kernel_matrix.dot(&solution.alpha));
        if !const_term.is_finite() || !solution.radius_squared.is_finite() {
            return Err(ModelError::ProcessingError(
                "Decision function terms are invalid - numerical instability detected".to_string(),
            ));
        }

        let n_support_vectors = support_indices.len();
        let mut support_vectors = Array2::<f64>::zeros((n_support_vectors, x.ncols()));
        let mut support_vector_alphas = Array1::<f64>::zeros(n_support_vectors);
        for (i, &idx) in support_indices.iter().enumerate() {
            support_vectors.row_mut(i).assign(&x.row(idx));
            support_vector_alphas[i] = solution.alpha[idx];
        }

        println!(
            "SVDD model computing finished at iteration {}, support vectors: {}, squared radius: {}",
            solution.iterations, n_support_vectors, solution.radius_squared
        );

        self.support_vectors = Some(support_vectors);
        self.support_vector_alphas = Some(support_vector_alphas);
        self.radius_squared = Some(solution.radius_squared);
        self.const_term = Some(const_term);
        self.status = Some(solution.status);
        self.n_iter = Some(solution.iterations);

        Ok(self)
    }

    /// Computes the decision function values for samples in X
    ///
    /// The score of a point is its squared feature-space distance to the
    /// sphere center minus the squared radius:
    /// `f(x) = K(x, x) - 2 * sum_j alpha_j * K(x, x_j) + const - R^2`.
    /// Positive scores lie outside the decision boundary.
    ///
    /// # Parameters
    ///
    /// * `x` - The input samples, where each row is a sample
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - The decision function values
    /// - `Err(ModelError::NotFitted)` - If the model hasn't been fitted yet
    /// - `Err(ModelError::InputValidationError)` - If input data is invalid
    pub fn decision_function(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, ModelError> {
        let (support_vectors, alphas, radius_squared, const_term) = match (
            &self.support_vectors,
            &self.support_vector_alphas,
            self.radius_squared,
            self.const_term,
        ) {
            (Some(sv), Some(a), Some(r), Some(t)) => (sv, a, r, t),
            _ => return Err(ModelError::NotFitted),
        };

        preliminary_check(&x)?;

        if x.ncols() != support_vectors.ncols() {
            return Err(ModelError::InputValidationError(format!(
                "Input has {} features but model was trained on {} features",
                x.ncols(),
                support_vectors.ncols()
            )));
        }

        let n_samples = x.nrows();
        let compute_score = |i: usize| -> f64 {
            let row = x.row(i);
            let self_similarity = compute_kernel(&row, &row, &self.kernel);
            let weighted: f64 = (0..support_vectors.nrows())
                .map(|j| alphas[j] * compute_kernel(&row, &support_vectors.row(j), &self.kernel))
                .sum();
            self_similarity - 2.0 * weighted + const_term - radius_squared
        };

        let scores: Vec<f64> = if n_samples >= SVDD_PARALLEL_THRESHOLD {
            (0..n_samples).into_par_iter().map(compute_score).collect()
        } else {
            (0..n_samples).map(compute_score).collect()
        };

        if scores.iter().any(|&val| !val.is_finite()) {
            return Err(ModelError::ProcessingError(
                "Decision function produced invalid value during prediction".to_string(),
            ));
        }

        Ok(Array1::from(scores))
    }

    /// Predicts inlier/outlier labels for samples in X
    ///
    /// # Parameters
    ///
    /// * `x` - The input samples, where each row is a sample
    ///
    /// # Returns
    ///
    /// - `Ok(Array1<f64>)` - The predicted labels: +1.0 for inliers (inside or
    ///   on the decision boundary), -1.0 for outliers
    /// - `Err(ModelError::NotFitted)` - If the model hasn't been fitted yet
    /// - `Err(ModelError::InputValidationError)` - If input data is invalid
    pub fn predict(&self, x: ArrayView2<f64>) -> Result<Array1<f64>, ModelError> {
        let scores = self.decision_function(x)?;
        Ok(scores.mapv(|score| if score > 0.0 { -1.0 } else { 1.0 }))
    }
}
