//! CLI mode
//!
//! Loads `.env`, the configuration and logging, then hands the parsed
//! command to the CLI interface.

use clap::Parser;
use tracing::debug;

use crate::cli::Cli;
use crate::config::init_config;
use crate::interfaces::cli::{CliError, run_cli_command};
use crate::system::init_logging;

/// Parse process arguments and run the command
pub fn run_cli() -> Result<(), CliError> {
    run_parsed(Cli::parse())
}

/// Run an already parsed command line
///
/// This function:
/// 1. Loads `.env` (if present) so `UTM__*` overrides apply
/// 2. Loads the configuration, honoring `--config` and `--data-dir`
/// 3. Initializes logging to stderr or the configured file
/// 4. Dispatches the subcommand
pub fn run_parsed(cli: Cli) -> Result<(), CliError> {
    dotenvy::dotenv().ok();

    let mut config = init_config(cli.config.as_deref()).clone();
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }

    // guard 需要活到命令结束
    let _guard = init_logging(&config.logging)?;
    debug!("Using data directory: {}", config.storage.data_dir);

    run_cli_command(cli.command, &config)
}
