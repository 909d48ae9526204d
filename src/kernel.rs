use ndarray::{Array2, ArrayBase, ArrayView2, Data, Ix1};
use rayon::prelude::*;

/// Threshold for using parallel computation in kernel matrix construction.
/// When the number of samples is below this threshold, sequential computation is used.
/// This avoids the overhead of thread spawning for small datasets.
pub(crate) const KERNEL_PARALLEL_THRESHOLD: usize = 100;

/// Represents different kernel function types used to map data into an
/// implicit feature space.
///
/// # Variants
///
/// - `Linear` - Linear kernel, the plain inner product `K(x, y) = x . y`
/// - `Poly` - Polynomial kernel `K(x, y) = (gamma * x . y + coef0)^degree`
/// - `RBF` - Radial Basis Function kernel `K(x, y) = exp(-gamma * |x - y|^2)`
/// - `Sigmoid` - Sigmoid kernel `K(x, y) = tanh(gamma * x . y + coef0)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KernelType {
    Linear,
    Poly { degree: u32, gamma: f64, coef0: f64 },
    RBF { gamma: f64 },
    Sigmoid { gamma: f64, coef0: f64 },
}

/// Calculates the kernel value between two samples based on the specified kernel type.
///
/// # Parameters
///
/// - `x` - First feature vector
/// - `y` - Second feature vector
/// - `kernel` - Kernel type configuration
///
/// # Returns
///
/// * `f64` - The computed kernel value as a floating-point number
pub fn compute_kernel<S>(x: &ArrayBase<S, Ix1>, y: &ArrayBase<S, Ix1>, kernel: &KernelType) -> f64
where
    S: Data<Elem = f64>,
{
    match kernel {
        KernelType::Linear => x.dot(y),
        KernelType::Poly {
            degree,
            gamma,
            coef0,
        } => (gamma * x.dot(y) + coef0).powi(*degree as i32),
        KernelType::RBF { gamma } => {
            let diff = x - y;
            let norm_sq = diff.dot(&diff);
            (-gamma * norm_sq).exp()
        }
        KernelType::Sigmoid { gamma, coef0 } => (gamma * x.dot(y) + coef0).tanh(),
    }
}

/// Computes the kernel matrix (Gram matrix) for the given data.
///
/// Only the upper triangle plus the diagonal is evaluated; the lower triangle
/// is filled by symmetry. Computation is parallelized when the number of
/// samples reaches `KERNEL_PARALLEL_THRESHOLD`.
///
/// # Parameters
///
/// - `x` - Input data matrix where each row is a sample
/// - `kernel` - Kernel type configuration
///
/// # Returns
///
/// * `Array2<f64>` - The computed N x N kernel matrix
pub fn compute_kernel_matrix(x: ArrayView2<f64>, kernel: &KernelType) -> Array2<f64> {
    let n_samples = x.nrows();
    let mut kernel_matrix = Array2::<f64>::zeros((n_samples, n_samples));

    // All (i, j) pairs with i <= j
    let pairs: Vec<(usize, usize)> = (0..n_samples)
        .flat_map(|i| (i..n_samples).map(move |j| (i, j)))
        .collect();

    let kernel_values: Vec<((usize, usize), f64)> = if n_samples >= KERNEL_PARALLEL_THRESHOLD {
        pairs
            .par_iter()
            .map(|&(i, j)| {
                let k_val = compute_kernel(&x.row(i), &x.row(j), kernel);
                ((i, j), k_val)
            })
            .collect()
    } else {
        pairs
            .iter()
            .map(|&(i, j)| {
                let k_val = compute_kernel(&x.row(i), &x.row(j), kernel);
                ((i, j), k_val)
            })
            .collect()
    };

    for ((i, j), val) in kernel_values {
        kernel_matrix[[i, j]] = val;
        if i != j {
            kernel_matrix[[j, i]] = val;
        }
    }

    kernel_matrix
}
