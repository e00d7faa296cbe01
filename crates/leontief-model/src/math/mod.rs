//! Dense square-matrix helpers shared by the model.
//!
//! Matrices and vectors are plain `ndarray` containers. Inversion is handed
//! to `nalgebra`'s LU decomposition and guarded by a reciprocal condition
//! estimate so that near-singular Leontief matrices are rejected instead of
//! producing meaningless totals.
pub mod matrix;
pub mod vector;

pub use matrix::{check_aligned, invert, norm_1, square_dim, Inverse};
pub use vector::{round_vector, row_sums};
