use ndarray::Array1;

/// Feasible random initialization of the Lagrange multiplier vector
pub mod alpha_init;
/// Karush-Kuhn-Tucker violation check for a single index
pub mod kkt;
/// Working-pair selection heuristics, sweeps, and the index blacklist
pub mod pair_selection;
/// Per-point distances to the sphere center and decision boundary
pub mod predictions;
/// The sweep-alternating SMO iteration driver
pub mod smo;
/// The analytic two-variable optimization step
pub mod take_step;

pub use alpha_init::*;
pub use kkt::*;
pub use pair_selection::*;
pub use predictions::*;
pub use smo::*;
pub use take_step::*;

/// Terminal state of one SMO solve.
///
/// # Variants
///
/// - `Converged` - A full sweep found no KKT violation within tolerance
/// - `Exhausted` - The iteration budget ran out first; the returned multipliers are best effort
/// - `Stalled` - Violations remain but every violating index is blacklisted, so no further progress is possible
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Converged,
    Exhausted,
    Stalled,
}

/// The result of one SMO solve.
///
/// # Fields
///
/// - `alpha` - Final Lagrange multipliers, one per training point
/// - `radius_squared` - Squared radius of the fitted hypersphere
/// - `status` - Terminal state of the solve
/// - `iterations` - Number of successful optimization steps taken
#[derive(Debug, Clone)]
pub struct SmoSolution {
    pub alpha: Array1<f64>,
    pub radius_squared: f64,
    pub status: SolveStatus,
    pub iterations: usize,
}
