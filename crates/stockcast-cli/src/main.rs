mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use std::process::ExitCode;
use stockcast_core::{pipeline, RunConfig, RunContext};
use tracing::debug;

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::from(error.exit_code())
        }
    }
}

fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_file())?;

    let config = RunConfig::new(&cli.data_directory_path, cli.input_file_count)?
        .with_forecaster(cli.forecaster.into())
        .with_seed(cli.seed);
    debug!(?config, "arguments are valid");

    let report = pipeline::execute(&config, RunContext::capture())?;
    output::render(&report, cli.summary, cli.pretty)?;

    // Per-file skips and failures are in the report; they do not affect the exit status.
    Ok(ExitCode::SUCCESS)
}
