//! leontief-model: Leontief input-output tables for an N-sector economy.
//!
//! This crate converts between technical-coefficient form and flow form,
//! solves the balance equation `x = (I - A)^-1 * d` for total output, and
//! derives final demand from flows via `d = x - row_sum(X)`. It also ships
//! the reader for the `;`-delimited table files and the renderer used by the
//! `leontief` binary.
//!
//! The numerics never mutate their arguments: each operation borrows its
//! inputs and returns freshly owned matrices and vectors.
pub mod config;
pub mod error;
pub mod io;
pub mod math;
pub mod model;
pub mod report;

pub use config::{ModelConfig, RoundingPolicy};
pub use error::ModelError;
pub use model::{
    coefficients_to_flows, final_demand_from_flows, to_leontief, total_output_from_coefficients,
    DerivedVector, InputOutputModel, InputOutputTable, InputShape, TotalOutputSolution,
};
