use ndarray::{Array1, Array2, Axis};

use crate::config::RoundingPolicy;

/// Sum of every row of `matrix`.
pub fn row_sums(matrix: &Array2<f64>) -> Array1<f64> {
    matrix.sum_axis(Axis(1))
}

pub fn round_vector(values: &Array1<f64>, policy: RoundingPolicy) -> Array1<f64> {
    values.mapv(|v| policy.apply(v))
}
