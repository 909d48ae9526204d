use crate::solver::kkt::violates_kkt_condition;
use crate::solver::predictions::{PredictionState, update_predictions};
use crate::solver::take_step::take_step;
use ahash::AHashSet;
use ndarray::{Array1, ArrayView2};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Which subset of indices a sweep scans for KKT violations.
///
/// # Variants
///
/// - `Full` - All indices; a clean full sweep certifies convergence
/// - `Restricted` - Only the non-bounded support vectors, `0 < alpha < C`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepMode {
    Full,
    Restricted,
}

/// Result of one unit of sweep work.
///
/// # Variants
///
/// - `Clean` - No index in the scanned subset violates the KKT conditions
/// - `Updated` - One pair was optimized and the prediction state refreshed
/// - `NoStep` - The chosen violator admitted no significant step and was blacklisted
/// - `Stalled` - Violations remain but every violating index is blacklisted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepOutcome {
    Clean,
    Updated,
    NoStep,
    Stalled,
}

/// Indices of the non-bounded support vectors, `opt_precision < alpha < C - opt_precision`.
pub(crate) fn non_bounded_support_vectors(
    alpha: &Array1<f64>,
    c: f64,
    opt_precision: f64,
) -> Vec<usize> {
    alpha
        .iter()
        .enumerate()
        .filter(|&(_, &a)| a > opt_precision && a < c - opt_precision)
        .map(|(i, _)| i)
        .collect()
}

/// Selects the partner index i1 expected to yield the largest feasible step.
///
/// Among the non-bounded support vectors (excluding i2 itself), picks the i1
/// maximizing `|distance_to_center[i1] - distance_to_center[i2]|`. Candidates
/// are admitted only when the resulting move of `alpha[i2]` is feasible: the
/// step changes `alpha[i2]` proportionally to `d2 - d1`, so a candidate with a
/// smaller distance needs headroom above (`alpha[i2] < C`) and one with a
/// larger distance needs headroom below (`alpha[i2] > 0`).
///
/// # Parameters
///
/// - `i2` - The violating index the step is built around
/// - `alpha` - Current Lagrange multipliers
/// - `distances_to_center` - Current distances to the sphere center
/// - `c` - Regularization parameter
/// - `opt_precision` - Numerical tolerance
///
/// # Returns
///
/// - `Some(i1)` - The best qualifying partner index
/// - `None` - No non-bounded support vector qualifies
pub fn second_choice_heuristic(
    i2: usize,
    alpha: &Array1<f64>,
    distances_to_center: &Array1<f64>,
    c: f64,
    opt_precision: f64,
) -> Option<usize> {
    let d2 = distances_to_center[i2];
    let can_increase = alpha[i2] < c - opt_precision;
    let can_decrease = alpha[i2] > opt_precision;

    let mut best: Option<(usize, f64)> = None;
    for i1 in non_bounded_support_vectors(alpha, c, opt_precision) {
        if i1 == i2 {
            continue;
        }

        let d1 = distances_to_center[i1];
        let feasible = (d1 < d2 && can_increase) || (d1 > d2 && can_decrease);
        if !feasible {
            continue;
        }

        let gap = (d1 - d2).abs();
        match best {
            Some((_, best_gap)) if gap <= best_gap => {}
            _ => best = Some((i1, gap)),
        }
    }

    best.map(|(i1, _)| i1)
}

/// Searches for a partner i1 for the violating index i2 and takes the first
/// significant optimization step found.
///
/// Candidates are tried in three stages: the [`second_choice_heuristic`]
/// candidate first, then all non-bounded support vectors in random order, then
/// all remaining indices in random order. The staged fallback follows the
/// recommendations in J. Platt, "Sequential minimal optimization: A fast
/// algorithm for training support vector machines," 1998.
///
/// On success the prediction state is refreshed incrementally and the search
/// stops. If every candidate fails, i2 is added to the blacklist.
///
/// # Parameters
///
/// - `alpha` - Multiplier vector, mutated in place on success
/// - `i2` - The violating index to optimize
/// - `state` - Prediction state, refreshed in place on success
/// - `k` - Precomputed kernel matrix
/// - `c` - Regularization parameter
/// - `opt_precision` - Numerical tolerance
/// - `blacklist` - Indices already known to admit no significant step
/// - `rng` - Random number generator for the fallback scan order
///
/// # Returns
///
/// * `bool` - `true` if a significant step was taken, `false` if i2 was blacklisted
#[allow(clippy::too_many_arguments)]
pub fn examine_example(
    alpha: &mut Array1<f64>,
    i2: usize,
    state: &mut PredictionState,
    k: ArrayView2<f64>,
    c: f64,
    opt_precision: f64,
    blacklist: &mut AHashSet<usize>,
    rng: &mut StdRng,
) -> bool {
    let try_candidate = |i1: usize, alpha: &mut Array1<f64>, state: &mut PredictionState| {
        match take_step(alpha, i1, i2, &state.distances_to_center, k, c, opt_precision) {
            Some((delta1, delta2)) => {
                update_predictions(
                    state,
                    alpha.view(),
                    k,
                    i1,
                    i2,
                    delta1,
                    delta2,
                    c,
                    opt_precision,
                );
                true
            }
            None => false,
        }
    };

    if let Some(i1) = second_choice_heuristic(i2, alpha, &state.distances_to_center, c, opt_precision)
    {
        if try_candidate(i1, alpha, state) {
            return true;
        }
    }

    let sv_nb = non_bounded_support_vectors(alpha, c, opt_precision);
    let in_sv_nb: AHashSet<usize> = sv_nb.iter().copied().collect();

    let mut candidates: Vec<usize> = sv_nb.into_iter().filter(|&i| i != i2).collect();
    candidates.shuffle(rng);
    for i1 in candidates {
        if try_candidate(i1, alpha, state) {
            return true;
        }
    }

    let mut rest: Vec<usize> = (0..alpha.len())
        .filter(|&i| i != i2 && !in_sv_nb.contains(&i))
        .collect();
    rest.shuffle(rng);
    for i1 in rest {
        if try_candidate(i1, alpha, state) {
            return true;
        }
    }

    blacklist.insert(i2);
    false
}

/// Performs one unit of sweep work: scan for violators, pick one at random,
/// and attempt an optimization step on it.
///
/// A `Full` sweep scans every index, a `Restricted` sweep only the non-bounded
/// support vectors. The scan itself ignores the blacklist so that a clean
/// result always certifies the absence of violations; blacklisted violators
/// are merely excluded from selection, and a sweep whose violators are all
/// blacklisted reports `Stalled` rather than `Clean`.
///
/// # Parameters
///
/// - `alpha` - Multiplier vector, mutated in place on a successful step
/// - `state` - Prediction state, refreshed in place on a successful step
/// - `k` - Precomputed kernel matrix
/// - `c` - Regularization parameter
/// - `opt_precision` - Numerical tolerance
/// - `blacklist` - Indices currently known to admit no significant step
/// - `mode` - Which subset of indices to scan
/// - `rng` - Random number generator for violator selection and fallback order
///
/// # Returns
///
/// * `SweepOutcome` - See the variant documentation
#[allow(clippy::too_many_arguments)]
pub fn examine_and_update_predictions(
    alpha: &mut Array1<f64>,
    state: &mut PredictionState,
    k: ArrayView2<f64>,
    c: f64,
    opt_precision: f64,
    blacklist: &mut AHashSet<usize>,
    mode: SweepMode,
    rng: &mut StdRng,
) -> SweepOutcome {
    let scanned: Vec<usize> = match mode {
        SweepMode::Full => (0..alpha.len()).collect(),
        SweepMode::Restricted => non_bounded_support_vectors(alpha, c, opt_precision),
    };

    let violators: Vec<usize> = scanned
        .into_iter()
        .filter(|&i| {
            violates_kkt_condition(state.distances_to_boundary[i], alpha[i], c, opt_precision)
        })
        .collect();

    if violators.is_empty() {
        return SweepOutcome::Clean;
    }

    let workable: Vec<usize> = violators
        .into_iter()
        .filter(|i| !blacklist.contains(i))
        .collect();

    if workable.is_empty() {
        return SweepOutcome::Stalled;
    }

    let i2 = workable[rng.random_range(0..workable.len())];
    if examine_example(alpha, i2, state, k, c, opt_precision, blacklist, rng) {
        SweepOutcome::Updated
    } else {
        SweepOutcome::NoStep
    }
}
