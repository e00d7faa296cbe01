use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use leontief_cli::input::TableRunConfig;
use leontief_cli::run::run;
use leontief_cli::util::prompt_for_input_file;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("LEONTIEF_LOG", "error,leontief=info"))
        .init();

    let matches = Command::new("leontief")
        .version(clap::crate_version!())
        .about("Build Leontief input-output tables from flows or technical coefficients")
        .arg(
            Arg::new("input_file")
                .help(
                    "Path to the ';'-delimited table file. A leading 'x' row marks flows with \
                     total output, 'y' marks coefficients with final demand. Prompted for when omitted.",
                )
                .required(false)
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to a JSON run configuration")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("File the table is written to. Defaults to results.txt.")
                .value_parser(clap::builder::NonEmptyStringValueParser::new())
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("no_file")
                .long("no-file")
                .help("Only print the table; do not write the output file.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format")
                .value_parser(["table", "json"]),
        )
        .arg(
            Arg::new("rounding")
                .long("rounding")
                .help("Rounding applied to derived flows and total output")
                .value_parser(["half-even", "half-away"]),
        )
        .arg(
            Arg::new("tolerance")
                .long("singularity-tolerance")
                .help("Reciprocal condition number below which (I - A) is treated as singular")
                .value_parser(clap::value_parser!(f64)),
        )
        .get_matches();

    let config_path: Option<&PathBuf> = matches.get_one("config");
    match configure_and_run(config_path, &matches) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Table computation failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn configure_and_run(config_path: Option<&PathBuf>, matches: &ArgMatches) -> Result<()> {
    let mut config = TableRunConfig::from_arguments(config_path, matches)?;

    if config.input_file.is_empty() {
        let stdin = io::stdin();
        config.input_file = prompt_for_input_file(&mut stdin.lock(), &mut io::stdout())?;
    }

    log::info!("[Leontief::CLI] Building table from {}", config.input_file);
    run(&config)
}
