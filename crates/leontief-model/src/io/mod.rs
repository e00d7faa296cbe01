//! Readers for input-output table files.

pub mod table_file;

pub use table_file::{parse_cell, parse_input_shape, read_input_shape, ShapeMarker};
