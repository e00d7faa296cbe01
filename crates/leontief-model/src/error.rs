use std::error::Error;
use std::fmt;

/// Failures raised by the input-output model.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Matrix not square, empty, or a vector whose length differs from the
    /// matrix dimension.
    Shape {
        what: &'static str,
        expected: usize,
        found: usize,
    },
    /// `(I - A)` has no usable inverse. `rcond` is the reciprocal condition
    /// estimate when the decomposition succeeded, `0.0` otherwise.
    SingularMatrix { rcond: f64 },
}

impl ModelError {
    pub(crate) fn shape(what: &'static str, expected: usize, found: usize) -> Self {
        ModelError::Shape {
            what,
            expected,
            found,
        }
    }
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ModelError::Shape {
                what,
                expected,
                found,
            } => write!(f, "shape mismatch: {} expected {}, found {}", what, expected, found),
            ModelError::SingularMatrix { rcond } => write!(
                f,
                "model not invertible: Leontief matrix is singular (rcond = {:e})",
                rcond
            ),
        }
    }
}

impl Error for ModelError {}
