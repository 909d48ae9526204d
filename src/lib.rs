//! # svdd
//!
//! A pure Rust implementation of Support Vector Data Description (SVDD), a
//! one-class method that fits a minimal-enclosing hypersphere around the data
//! in an implicit kernel feature space. Points outside the fitted boundary are
//! flagged as outliers.
//!
//! The quadratic program behind the boundary is solved with Sequential Minimal
//! Optimization (SMO): the solver repeatedly picks a pair of Lagrange
//! multipliers that violates the optimality conditions, solves the restricted
//! two-variable problem analytically, and refreshes its prediction state
//! incrementally until no violations remain.
//!
//! # Example
//! ```rust
//! use svdd::prelude::*;
//! use ndarray::arr2;
//!
//! // A compact cluster and one far-away point
//! let x = arr2(&[
//!     [0.0, 0.1],
//!     [0.1, 0.0],
//!     [-0.1, 0.1],
//!     [0.1, -0.1],
//!     [0.0, -0.1],
//!     [8.0, 8.0],
//! ]);
//!
//! let mut model = SVDD::new(
//!     KernelType::RBF { gamma: 0.5 },
//!     0.2,      // regularization parameter C
//!     1e-6,     // optimization precision
//!     100_000,  // max iterations
//!     Some(42), // random state
//! );
//! model.fit(x.view()).unwrap();
//!
//! let labels = model.predict(x.view()).unwrap();
//! assert_eq!(labels[5], -1.0); // the far point is an outlier
//! ```

/// A macro that generates a getter method for any field.
///
/// This macro creates a public getter method that returns the value
/// of the specified field. The generated method includes appropriate
/// documentation describing the field being accessed.
///
/// # Parameters
///
/// - `$method_name` - The name of the getter method (e.g., get_max_iterations)
/// - `$field_name` - The name of the field to access (e.g., max_iterations)
/// - `$return_type` - The return type of the getter method
macro_rules! get_field {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field")]
        pub fn $method_name(&self) -> $return_type {
            self.$field_name
        }
    };
}

/// A macro that generates a public getter method returning a reference to a field.
///
/// # Parameters
///
/// - `$method_name` - The identifier for the generated getter method name
/// - `$field_name` - The identifier of the struct field to access
/// - `$return_type` - The type expression for the return value (typically a reference type like `&Type`)
macro_rules! get_field_as_ref {
    ($method_name:ident, $field_name:ident, $return_type:ty) => {
        #[doc = concat!("Gets the `", stringify!($field_name), "` field.\n\n")]
        #[doc = "# Returns\n\n"]
        #[doc = concat!("* `", stringify!($return_type), "` - The value of the `", stringify!($field_name), "` field as a reference")]
        pub fn $method_name(&self) -> $return_type {
            &self.$field_name
        }
    };
}

/// Error types that can occur during model operations
pub mod error;

/// Kernel functions and Gram matrix construction.
///
/// Provides the `KernelType` enum (Linear, Polynomial, RBF, Sigmoid), pairwise
/// kernel evaluation, and symmetric kernel matrix computation with parallel
/// processing for large datasets.
pub mod kernel;

/// The Sequential Minimal Optimization engine.
///
/// This module contains the solver proper: feasible initialization of the
/// Lagrange multiplier vector, the prediction state (distances to center and
/// to the decision boundary, squared radius), the Karush-Kuhn-Tucker violation
/// check, working-pair selection with its fallback heuristics and blacklist,
/// the analytic two-variable optimization step, and the sweep-alternating
/// iteration driver.
///
/// The solver operates on a precomputed kernel matrix and owns no data; the
/// `SVDD` model in [`crate::svdd`] is the convenience wrapper that builds the
/// matrix and interprets the solution.
pub mod solver;

/// The Support Vector Data Description model.
///
/// A one-class estimator in the usual fit/predict shape: `fit` builds the
/// kernel matrix and runs the SMO solver, `decision_function` scores new
/// points by their distance to the fitted decision boundary, and `predict`
/// maps scores to inlier (+1.0) / outlier (-1.0) labels.
pub mod svdd;

/// Input validation helpers shared by the solver and the model
pub mod validation;

/// A convenience module that re-exports the most commonly used types from this crate.
pub mod prelude;
