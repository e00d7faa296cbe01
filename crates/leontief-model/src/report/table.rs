use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::InputOutputTable;

const LABEL_WIDTH: usize = 9;
const SECTOR_WIDTH: usize = 10;
const VECTOR_WIDTH: usize = 20;

/// Serialisable view of an [`InputOutputTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRecord {
    pub sectors: usize,
    pub flows: Vec<Vec<f64>>,
    pub final_demand: Vec<f64>,
    pub total_output: Vec<f64>,
    pub derived: String,
}

impl From<&InputOutputTable> for TableRecord {
    fn from(table: &InputOutputTable) -> Self {
        Self {
            sectors: table.sectors(),
            flows: table.flows.rows().into_iter().map(|row| row.to_vec()).collect(),
            final_demand: table.final_demand.to_vec(),
            total_output: table.total_output.to_vec(),
            derived: table.derived.label().to_string(),
        }
    }
}

/// Render the table as aligned text: one row per sector, flows first, then
/// final demand and total output.
pub fn render_table(table: &InputOutputTable) -> String {
    let n = table.sectors();

    let mut header = format!("{:width$}|", "", width = LABEL_WIDTH);
    for i in 0..n {
        header.push_str(&format!(
            "{:^width$}",
            format!("Sector {}", i + 1),
            width = SECTOR_WIDTH
        ));
    }
    header.push_str(&format!(
        "{:^width$}{:^width$}",
        "Final demand",
        "Total output",
        width = VECTOR_WIDTH
    ));

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');
    out.push_str(&"-".repeat(LABEL_WIDTH));
    out.push('|');
    out.push_str(&"-".repeat(header.chars().count() - LABEL_WIDTH - 1));
    out.push('\n');

    for i in 0..n {
        out.push_str(&format!("{:<width$}|", format!("Sector {}", i + 1), width = LABEL_WIDTH));
        for j in 0..n {
            out.push_str(&format!(
                "{:^width$}",
                format_value(table.flows[(i, j)]),
                width = SECTOR_WIDTH
            ));
        }
        out.push_str(&format!(
            "{:^width$}{:^width$}",
            format_value(table.final_demand[i]),
            format_value(table.total_output[i]),
            width = VECTOR_WIDTH
        ));
        out.push('\n');
    }
    out
}

/// Write [`render_table`] output to `path`.
pub fn write_table_file<P: AsRef<Path>>(table: &InputOutputTable, path: P) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(render_table(table).as_bytes())?;
    writer.flush()?;
    Ok(())
}

pub fn table_to_json(table: &InputOutputTable) -> Result<String> {
    serde_json::to_string_pretty(&TableRecord::from(table)).context("Failed to serialise table")
}

fn format_value(value: f64) -> String {
    // -0 shows up after subtracting equal sums
    let value = if value == 0.0 { 0.0 } else { value };
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{:.2}", value)
    }
}
