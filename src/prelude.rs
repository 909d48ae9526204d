pub use crate::error::ModelError;
pub use crate::kernel::{KernelType, compute_kernel, compute_kernel_matrix};
pub use crate::solver::{SmoSolution, SolveStatus, initialize_alpha, smo};
pub use crate::svdd::SVDD;
