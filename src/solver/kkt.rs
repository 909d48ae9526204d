/// Checks whether one index violates the Karush-Kuhn-Tucker conditions
/// within tolerance.
///
/// Complementary slackness ties each multiplier to the position of its point
/// relative to the decision boundary:
///
/// - strictly inside the sphere (`distance_to_boundary < -opt_precision`),
///   the multiplier must be 0; a value above `opt_precision` is a violation
/// - strictly outside (`distance_to_boundary > opt_precision`), the multiplier
///   must be C; a value below `C - opt_precision` is a violation
/// - on the boundary, any multiplier value in `[0, C]` is consistent
///
/// # Parameters
///
/// - `distance_to_boundary` - Signed squared distance of the point to the decision boundary
/// - `alpha` - The point's current Lagrange multiplier
/// - `c` - Regularization parameter (upper bound of the multiplier)
/// - `opt_precision` - Numerical tolerance
///
/// # Returns
///
/// * `bool` - `true` if the index violates the optimality conditions
pub fn violates_kkt_condition(
    distance_to_boundary: f64,
    alpha: f64,
    c: f64,
    opt_precision: f64,
) -> bool {
    (distance_to_boundary < -opt_precision && alpha > opt_precision)
        || (distance_to_boundary > opt_precision && alpha < c - opt_precision)
}
