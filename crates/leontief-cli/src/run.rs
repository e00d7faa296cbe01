use anyhow::{Context, Result};
use std::path::Path;

use leontief_model::io::read_input_shape;
use leontief_model::report::{render_table, table_to_json, write_table_file};
use leontief_model::{InputOutputModel, InputOutputTable};

use crate::input::{OutputFormat, TableRunConfig};
use crate::util::validate_input_file;

/// Read the input table, run the model, and return the finished table.
pub fn build_table(config: &TableRunConfig) -> Result<InputOutputTable> {
    validate_input_file(&config.input_file)?;
    let shape = read_input_shape(&config.input_file)?;
    let model = InputOutputModel::new(config.model.clone());
    let table = model
        .compute(shape)
        .with_context(|| format!("Failed to compute table for {}", config.input_file))?;
    Ok(table)
}

/// Text printed to stdout for `table` in the configured format.
pub fn format_table(table: &InputOutputTable, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(table)),
        OutputFormat::Json => table_to_json(table),
    }
}

pub fn run(config: &TableRunConfig) -> Result<()> {
    let table = build_table(config)?;
    let rendered = format_table(&table, config.format)?;
    println!("\n{}", rendered);

    if config.write_file {
        let path = Path::new(&config.output_file);
        match config.format {
            OutputFormat::Table => write_table_file(&table, path)?,
            OutputFormat::Json => std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file: {:?}", path))?,
        }
        log::info!("[Leontief::CLI] Table written to {}", path.display());
    }
    Ok(())
}
