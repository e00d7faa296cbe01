//! Rendering of finished input-output tables.
//!
//! The text layout is a fixed-width console table; the JSON form mirrors the
//! same data for downstream tooling.
pub mod table;

pub use table::{render_table, table_to_json, write_table_file, TableRecord};
