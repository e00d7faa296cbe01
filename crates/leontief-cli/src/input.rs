use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

use leontief_model::{ModelConfig, RoundingPolicy};

/// How the finished table is printed.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TableRunConfig {
    pub input_file: String,
    pub output_file: String,
    pub write_file: bool,
    pub format: OutputFormat,
    pub model: ModelConfig,
}

impl Default for TableRunConfig {
    fn default() -> Self {
        TableRunConfig {
            input_file: String::new(),
            output_file: String::from("results.txt"),
            write_file: true,
            format: OutputFormat::Table,
            model: ModelConfig::default(),
        }
    }
}

impl TableRunConfig {
    /// Load a run configuration from JSON, falling back to defaults field by field.
    pub fn from_json(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = TableRunConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(input_file);
        load_or_default!(output_file);
        load_or_default!(write_file);
        load_or_default!(format);
        load_or_default!(model);

        Ok(config)
    }

    pub fn from_arguments(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => {
                let config_json = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {:?}", path))?;
                TableRunConfig::from_json(&config_json)
                    .with_context(|| format!("Failed to parse config file: {:?}", path))?
            }
            None => TableRunConfig::default(),
        };

        // Apply CLI overrides
        if let Some(input_file) = matches.get_one::<String>("input_file") {
            config.input_file = input_file.clone();
        }
        if let Some(output_file) = matches.get_one::<String>("output_file") {
            config.output_file = output_file.clone();
        }
        if matches.get_flag("no_file") {
            config.write_file = false;
        }
        if let Some(format) = matches.get_one::<String>("format") {
            config.format = OutputFormat::from_str(format).map_err(anyhow::Error::msg)?;
        }
        if let Some(rounding) = matches.get_one::<String>("rounding") {
            config.model.rounding =
                RoundingPolicy::from_str(rounding).map_err(anyhow::Error::msg)?;
        }
        if let Some(tolerance) = matches.get_one::<f64>("tolerance") {
            config.model.singularity_tolerance = *tolerance;
        }

        Ok(config)
    }
}
