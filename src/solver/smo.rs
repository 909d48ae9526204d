use crate::error::ModelError;
use crate::solver::pair_selection::{SweepMode, SweepOutcome, examine_and_update_predictions};
use crate::solver::predictions::calculate_predictions;
use crate::solver::{SmoSolution, SolveStatus};
use crate::validation::{
    validate_alpha, validate_kernel_matrix, validate_max_iterations, validate_regularization,
    validate_tolerance,
};
use ahash::AHashSet;
use ndarray::{Array1, ArrayView2};
use rand::rngs::StdRng;

/// Solves the one-class dual program with Sequential Minimal Optimization.
///
/// Starting from a feasible multiplier vector, the solver alternates two sweep
/// phases: a full sweep over all indices, and, after each successful full-sweep
/// step, repeated restricted sweeps over the non-bounded support vectors until
/// the restricted subset is free of violations, at which point control returns
/// to a full sweep with a fresh blacklist. A clean full sweep certifies
/// convergence.
///
/// Each successful two-variable step counts one iteration against
/// `max_iterations`; the prediction state is refreshed incrementally after
/// every step, so the per-step cost is O(N) plus the violator scan.
///
/// # Parameters
///
/// - `alpha` - Feasible starting multipliers (entries in `[0, C]`, summing to one)
/// - `k` - Precomputed symmetric kernel matrix, one row/column per training point
/// - `c` - Regularization parameter in `(0, 1]`
/// - `opt_precision` - Numerical tolerance for violation detection and step significance
/// - `max_iterations` - Budget of successful optimization steps
/// - `rng` - Random number generator driving violator selection and fallback scans
///
/// # Returns
///
/// - `Ok(SmoSolution)` - Final multipliers, squared radius, terminal status
///   (`Converged`, `Exhausted`, or `Stalled`), and the number of steps taken
/// - `Err(ModelError::InputValidationError)` - Malformed inputs, detected
///   before any iteration
pub fn smo(
    alpha: Array1<f64>,
    k: ArrayView2<f64>,
    c: f64,
    opt_precision: f64,
    max_iterations: usize,
    rng: &mut StdRng,
) -> Result<SmoSolution, ModelError> {
    validate_tolerance(opt_precision)?;
    validate_max_iterations(max_iterations)?;
    validate_regularization(c)?;
    validate_kernel_matrix(&k, opt_precision)?;
    validate_alpha(&alpha, k.nrows(), c, opt_precision)?;

    let mut alpha = alpha;
    let mut state = calculate_predictions(alpha.view(), k, c, opt_precision);
    let mut blacklist: AHashSet<usize> = AHashSet::new();
    let mut mode = SweepMode::Full;
    let mut iterations = 0usize;

    let status = loop {
        if iterations >= max_iterations {
            eprintln!(
                "Warning: SMO reached maximum iterations ({}) without full convergence",
                max_iterations
            );
            break SolveStatus::Exhausted;
        }

        let outcome = examine_and_update_predictions(
            &mut alpha,
            &mut state,
            k,
            c,
            opt_precision,
            &mut blacklist,
            mode,
            rng,
        );

        match (mode, outcome) {
            (SweepMode::Full, SweepOutcome::Clean) => break SolveStatus::Converged,
            (SweepMode::Full, SweepOutcome::Stalled) => {
                eprintln!(
                    "Warning: SMO stalled with {} blacklisted indices still violating optimality",
                    blacklist.len()
                );
                break SolveStatus::Stalled;
            }
            (SweepMode::Full, SweepOutcome::Updated) => {
                iterations += 1;
                mode = SweepMode::Restricted;
            }
            // the blacklist grew; retry the full sweep on the remaining violators
            (SweepMode::Full, SweepOutcome::NoStep) => {}
            (SweepMode::Restricted, SweepOutcome::Clean | SweepOutcome::Stalled) => {
                // The restricted subset is exhausted; a fresh full sweep decides
                // whether the remaining violations are workable.
                mode = SweepMode::Full;
                blacklist.clear();
            }
            (SweepMode::Restricted, SweepOutcome::Updated) => iterations += 1,
            (SweepMode::Restricted, SweepOutcome::NoStep) => {}
        }
    };

    Ok(SmoSolution {
        alpha,
        radius_squared: state.radius_squared,
        status,
        iterations,
    })
}
