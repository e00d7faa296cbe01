use nalgebra::DMatrix;
use ndarray::{Array1, Array2, Axis};

use crate::error::ModelError;

/// Inverse of a square matrix together with its reciprocal 1-norm condition
/// estimate `1 / (‖M‖₁ · ‖M⁻¹‖₁)`.
#[derive(Debug, Clone)]
pub struct Inverse {
    pub matrix: Array2<f64>,
    pub rcond: f64,
}

/// Dimension of a non-empty square matrix.
pub fn square_dim(matrix: &Array2<f64>) -> Result<usize, ModelError> {
    let (rows, cols) = matrix.dim();
    if rows == 0 {
        return Err(ModelError::shape("matrix rows", 1, 0));
    }
    if rows != cols {
        return Err(ModelError::shape("matrix columns", rows, cols));
    }
    Ok(rows)
}

/// Dimension of `matrix` once it is known to be square and `vector` matches it.
pub fn check_aligned(
    matrix: &Array2<f64>,
    vector: &Array1<f64>,
    what: &'static str,
) -> Result<usize, ModelError> {
    let n = square_dim(matrix)?;
    if vector.len() != n {
        return Err(ModelError::shape(what, n, vector.len()));
    }
    Ok(n)
}

/// Maximum absolute column sum.
pub fn norm_1(matrix: &Array2<f64>) -> f64 {
    matrix
        .axis_iter(Axis(1))
        .map(|column| column.iter().map(|v| v.abs()).sum::<f64>())
        .fold(0.0, f64::max)
}

/// Invert `matrix`, failing with [`ModelError::SingularMatrix`] when the LU
/// decomposition finds no inverse or the condition estimate falls below
/// `tolerance`.
pub fn invert(matrix: &Array2<f64>, tolerance: f64) -> Result<Inverse, ModelError> {
    let n = square_dim(matrix)?;

    let dense = DMatrix::from_row_iterator(n, n, matrix.iter().copied());
    let dense_inverse = dense
        .lu()
        .try_inverse()
        .ok_or(ModelError::SingularMatrix { rcond: 0.0 })?;

    let inverse = Array2::from_shape_fn((n, n), |(i, j)| dense_inverse[(i, j)]);
    if inverse.iter().any(|v| !v.is_finite()) {
        return Err(ModelError::SingularMatrix { rcond: 0.0 });
    }

    let denom = norm_1(matrix) * norm_1(&inverse);
    let rcond = if denom > 0.0 { 1.0 / denom } else { 0.0 };
    // NaN must fail too
    if !(rcond >= tolerance) {
        return Err(ModelError::SingularMatrix { rcond });
    }

    log::trace!("[Leontief::Math] inverted {}x{} matrix, rcond = {:e}", n, n, rcond);
    Ok(Inverse {
        matrix: inverse,
        rcond,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn square_dim_rejects_rectangular() {
        let m = Array2::<f64>::zeros((2, 3));
        assert_eq!(
            square_dim(&m),
            Err(ModelError::Shape {
                what: "matrix columns",
                expected: 2,
                found: 3
            })
        );
    }

    #[test]
    fn square_dim_rejects_empty() {
        let m = Array2::<f64>::zeros((0, 0));
        assert!(matches!(square_dim(&m), Err(ModelError::Shape { .. })));
    }

    #[test]
    fn norm_1_takes_largest_column() {
        let m = array![[1.0, -4.0], [-2.0, 1.0]];
        assert_eq!(norm_1(&m), 5.0);
    }

    #[test]
    fn invert_two_by_two() {
        let m = array![[4.0, 7.0], [2.0, 6.0]];
        let inv = invert(&m, 1e-12).unwrap();
        let expected = array![[0.6, -0.7], [-0.2, 0.4]];
        for (a, b) in inv.matrix.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
        assert!(inv.rcond > 0.0 && inv.rcond <= 1.0);
    }

    #[test]
    fn invert_identity_is_identity() {
        let inv = invert(&Array2::eye(3), 1e-12).unwrap();
        assert_eq!(inv.matrix, Array2::<f64>::eye(3));
        assert!((inv.rcond - 1.0).abs() < 1e-12);
    }

    #[test]
    fn invert_zero_matrix_is_singular() {
        let m = Array2::<f64>::zeros((2, 2));
        assert!(matches!(
            invert(&m, 1e-12),
            Err(ModelError::SingularMatrix { .. })
        ));
    }

    #[test]
    fn invert_rejects_ill_conditioned() {
        let m = array![[1.0, -1.0], [-1.0, 1.0 + 1e-14]];
        assert!(matches!(
            invert(&m, 1e-12),
            Err(ModelError::SingularMatrix { .. })
        ));
    }
}
