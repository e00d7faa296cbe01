//! The input-output model.
//!
//! Two workflows, picked by the shape of the input:
//!
//! * flows + total output: final demand is the row balance
//!   `d[i] = x[i] - Σ_j X[i][j]`;
//! * coefficients + final demand: total output solves `x = (I - A)^-1 · d`,
//!   after which the flow matrix is `X[i][j] = round(A[i][j] · x[j])`.
//!
//! All operations borrow their inputs and return new values.
use ndarray::{Array1, Array2};

use crate::config::{ModelConfig, RoundingPolicy};
use crate::error::ModelError;
use crate::math::{check_aligned, invert, round_vector, row_sums, square_dim};

/// Matrix/vector pair as read from an input table.
#[derive(Debug, Clone, PartialEq)]
pub enum InputShape {
    FlowsWithTotalOutput {
        flows: Array2<f64>,
        total_output: Array1<f64>,
    },
    CoefficientsWithFinalDemand {
        coefficients: Array2<f64>,
        final_demand: Array1<f64>,
    },
}

/// Which of the two trailing vectors the model had to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedVector {
    FinalDemand,
    TotalOutput,
}

impl DerivedVector {
    pub fn label(self) -> &'static str {
        match self {
            DerivedVector::FinalDemand => "final_demand",
            DerivedVector::TotalOutput => "total_output",
        }
    }
}

impl InputShape {
    pub fn derives(&self) -> DerivedVector {
        match self {
            InputShape::FlowsWithTotalOutput { .. } => DerivedVector::FinalDemand,
            InputShape::CoefficientsWithFinalDemand { .. } => DerivedVector::TotalOutput,
        }
    }

    /// Number of sectors, if the matrix is square.
    pub fn sectors(&self) -> Result<usize, ModelError> {
        match self {
            InputShape::FlowsWithTotalOutput { flows, .. } => square_dim(flows),
            InputShape::CoefficientsWithFinalDemand { coefficients, .. } => {
                square_dim(coefficients)
            }
        }
    }
}

/// A complete input-output table.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOutputTable {
    pub flows: Array2<f64>,
    pub final_demand: Array1<f64>,
    pub total_output: Array1<f64>,
    pub derived: DerivedVector,
}

impl InputOutputTable {
    pub fn sectors(&self) -> usize {
        self.flows.nrows()
    }
}

/// Result of the total-output solve: the rounded totals and the flow matrix
/// they imply.
#[derive(Debug, Clone, PartialEq)]
pub struct TotalOutputSolution {
    pub total_output: Array1<f64>,
    pub flows: Array2<f64>,
}

/// Leontief matrix `(I - A)`.
pub fn to_leontief(coefficients: &Array2<f64>) -> Result<Array2<f64>, ModelError> {
    let n = square_dim(coefficients)?;
    Ok(Array2::<f64>::eye(n) - coefficients)
}

/// Flow matrix `X[i][j] = round(A[i][j] · x[j])`.
pub fn coefficients_to_flows(
    coefficients: &Array2<f64>,
    total_output: &Array1<f64>,
    rounding: RoundingPolicy,
) -> Result<Array2<f64>, ModelError> {
    let n = check_aligned(coefficients, total_output, "total output length")?;
    Ok(Array2::from_shape_fn((n, n), |(i, j)| {
        rounding.apply(coefficients[(i, j)] * total_output[j])
    }))
}

/// Final demand `d[i] = x[i] - Σ_j X[i][j]`. Not rounded.
pub fn final_demand_from_flows(
    flows: &Array2<f64>,
    total_output: &Array1<f64>,
) -> Result<Array1<f64>, ModelError> {
    check_aligned(flows, total_output, "total output length")?;
    Ok(total_output - &row_sums(flows))
}

/// Solve `x = round((I - A)^-1 · d)` and derive the flow matrix from `x`.
pub fn total_output_from_coefficients(
    coefficients: &Array2<f64>,
    final_demand: &Array1<f64>,
    config: &ModelConfig,
) -> Result<TotalOutputSolution, ModelError> {
    let n = check_aligned(coefficients, final_demand, "final demand length")?;

    let leontief = to_leontief(coefficients)?;
    let inverse = invert(&leontief, config.singularity_tolerance)?;
    log::debug!(
        "[Leontief::Model] inverted {}x{} Leontief matrix (rcond = {:e})",
        n,
        n,
        inverse.rcond
    );

    let total_output = round_vector(&inverse.matrix.dot(final_demand), config.rounding);
    let flows = coefficients_to_flows(coefficients, &total_output, config.rounding)?;

    Ok(TotalOutputSolution {
        total_output,
        flows,
    })
}

/// Runs whichever workflow the input shape calls for.
#[derive(Debug, Clone, Default)]
pub struct InputOutputModel {
    config: ModelConfig,
}

impl InputOutputModel {
    pub fn new(config: ModelConfig) -> Self {
        Self { config }
    }

    pub fn compute(&self, input: InputShape) -> Result<InputOutputTable, ModelError> {
        let derived = input.derives();
        match input {
            InputShape::FlowsWithTotalOutput {
                flows,
                total_output,
            } => {
                log::info!(
                    "[Leontief::Model] Deriving final demand for {} sectors from flows",
                    flows.nrows()
                );
                let final_demand = final_demand_from_flows(&flows, &total_output)?;
                Ok(InputOutputTable {
                    flows,
                    final_demand,
                    total_output,
                    derived,
                })
            }
            InputShape::CoefficientsWithFinalDemand {
                coefficients,
                final_demand,
            } => {
                log::info!(
                    "[Leontief::Model] Solving total output for {} sectors ({} rounding)",
                    coefficients.nrows(),
                    self.config.rounding.name()
                );
                let solution =
                    total_output_from_coefficients(&coefficients, &final_demand, &self.config)?;
                Ok(InputOutputTable {
                    flows: solution.flows,
                    final_demand,
                    total_output: solution.total_output,
                    derived,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn leontief_of_zero_is_identity() {
        let l = to_leontief(&Array2::zeros((3, 3))).unwrap();
        assert_eq!(l, Array2::<f64>::eye(3));
    }

    #[test]
    fn leontief_of_identity_is_zero() {
        let l = to_leontief(&Array2::eye(4)).unwrap();
        assert_eq!(l, Array2::<f64>::zeros((4, 4)));
    }

    #[test]
    fn leontief_negates_off_diagonal() {
        let a = array![[0.2, 0.3], [0.1, 0.4]];
        let l = to_leontief(&a).unwrap();
        let expected = array![[0.8, -0.3], [-0.1, 0.6]];
        for (got, want) in l.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
        // argument untouched
        assert_eq!(a, array![[0.2, 0.3], [0.1, 0.4]]);
    }

    #[test]
    fn flows_use_rounding_policy_on_ties() {
        let a = array![[0.5]];
        let x = array![5.0];
        assert_eq!(
            coefficients_to_flows(&a, &x, RoundingPolicy::HalfToEven).unwrap(),
            array![[2.0]]
        );
        assert_eq!(
            coefficients_to_flows(&a, &x, RoundingPolicy::HalfAwayFromZero).unwrap(),
            array![[3.0]]
        );
    }

    #[test]
    fn final_demand_is_row_balance() {
        let flows = array![[10.0, 20.0], [20.0, 10.0]];
        let x = array![40.0, 40.0];
        assert_eq!(final_demand_from_flows(&flows, &x).unwrap(), array![10.0, 10.0]);
    }

    #[test]
    fn shape_checked_before_solve() {
        let a = array![[0.1, 0.2], [0.3, 0.4]];
        let d = array![1.0, 2.0, 3.0];
        let err = total_output_from_coefficients(&a, &d, &ModelConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ModelError::Shape {
                what: "final demand length",
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn compute_reports_derived_vector() {
        let model = InputOutputModel::default();
        let table = model
            .compute(InputShape::FlowsWithTotalOutput {
                flows: array![[1.0]],
                total_output: array![3.0],
            })
            .unwrap();
        assert_eq!(table.derived, DerivedVector::FinalDemand);
        assert_eq!(table.final_demand, array![2.0]);
        assert_eq!(table.sectors(), 1);
    }
}
