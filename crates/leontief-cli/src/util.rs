use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub fn validate_input_file(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        anyhow::bail!("No input file given");
    }
    let pb = PathBuf::from(path);
    if !pb.exists() {
        anyhow::bail!("File does not exist: {}", path);
    }
    if !pb.is_file() {
        anyhow::bail!("Not a regular file: {}", path);
    }
    Ok(())
}

/// Ask for the input file name on `output` and read one line from `input`.
pub fn prompt_for_input_file<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "Enter input file name: ")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read input file name")?;
    let name = line.trim().to_string();
    if name.is_empty() {
        anyhow::bail!("No input file given");
    }
    Ok(name)
}
