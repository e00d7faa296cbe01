//! Reader for `;`-delimited input-output table files.
//!
//! Layout:
//!
//! ```text
//! x
//! 10;20;40
//! 20;10;40
//! ```
//!
//! The optional first row is a marker: `x` means the rows hold flows followed
//! by total output, `y` means coefficients followed by final demand. Every data
//! row carries N matrix cells and one trailing vector cell. Cells may be
//! written as fractions (`1/4`).
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use csv::StringRecord;
use ndarray::{Array1, Array2};

use crate::model::InputShape;

/// Leading marker row of a table file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeMarker {
    /// `x`: flows and total output.
    Flows,
    /// `y`: technical coefficients and final demand.
    Coefficients,
}

impl ShapeMarker {
    fn from_record(record: &StringRecord) -> Option<Self> {
        if record.len() != 1 {
            return None;
        }
        match record.get(0)?.trim().to_ascii_lowercase().as_str() {
            "x" => Some(ShapeMarker::Flows),
            "y" => Some(ShapeMarker::Coefficients),
            _ => None,
        }
    }
}

/// Read a table file from disk.
pub fn read_input_shape<P: AsRef<Path>>(path: P) -> Result<InputShape> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open table file: {}", path.as_ref().display()))?;
    parse_input_shape(BufReader::new(file))
        .with_context(|| format!("Failed to parse table file: {}", path.as_ref().display()))
}

/// Parse table rows from any reader.
pub fn parse_input_shape<R: Read>(reader: R) -> Result<InputShape> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut marker = None;
    let mut cells = Vec::new();
    let mut width = None;
    let mut rows = 0usize;

    for (record_idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("Failed to read row {}", record_idx + 1))?;
        // blank lines are skipped by the reader, so report the file line
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(record_idx as u64 + 1);
        if record.iter().all(|field| field.is_empty()) {
            continue;
        }

        if rows == 0 && marker.is_none() {
            if let Some(found) = ShapeMarker::from_record(&record) {
                marker = Some(found);
                continue;
            }
        }

        match width {
            None => width = Some(record.len()),
            Some(w) if w != record.len() => bail!(
                "Row {} has {} cells, expected {}",
                line,
                record.len(),
                w
            ),
            Some(_) => {}
        }

        for (col_idx, field) in record.iter().enumerate() {
            let value = parse_cell(field).with_context(|| {
                format!("Invalid cell '{}' at row {}, column {}", field, line, col_idx + 1)
            })?;
            cells.push(value);
        }
        rows += 1;
    }

    let width = width.ok_or_else(|| anyhow!("Table file contains no data rows"))?;
    if width != rows + 1 {
        bail!(
            "Expected {} matrix columns plus one vector column per row, found {} cells per row",
            rows,
            width
        );
    }

    let table = Array2::from_shape_vec((rows, width), cells)
        .context("Failed to build table matrix")?;
    let matrix = table.slice(ndarray::s![.., ..rows]).to_owned();
    let vector: Array1<f64> = table.column(rows).to_owned();

    let marker = marker.unwrap_or_else(|| {
        log::warn!("[Leontief::IO] No shape marker row found; assuming coefficients and final demand");
        ShapeMarker::Coefficients
    });
    log::debug!("[Leontief::IO] Read {} sectors ({:?})", rows, marker);

    Ok(match marker {
        ShapeMarker::Flows => InputShape::FlowsWithTotalOutput {
            flows: matrix,
            total_output: vector,
        },
        ShapeMarker::Coefficients => InputShape::CoefficientsWithFinalDemand {
            coefficients: matrix,
            final_demand: vector,
        },
    })
}

/// Parse a single cell: an integer, a decimal, or a fraction `p/q`.
pub fn parse_cell(field: &str) -> Result<f64> {
    let field = field.trim();
    let value = match field.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator = numerator
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid numerator '{}'", numerator))?;
            let denominator = denominator
                .trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid denominator '{}'", denominator))?;
            if denominator == 0.0 {
                bail!("Zero denominator in '{}'", field);
            }
            numerator / denominator
        }
        None => field
            .parse::<f64>()
            .with_context(|| format!("Not a number: '{}'", field))?,
    };
    if !value.is_finite() {
        bail!("Non-finite value '{}'", field);
    }
    Ok(value)
}
