use crate::cli::SqlBenchCli;
use clap::Parser;

/// Initialise the CLI and logging for a SQL Bench suite binary.
pub fn init() -> SqlBenchCli {
    env_logger::init();

    SqlBenchCli::parse()
}
