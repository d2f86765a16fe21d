//! xo - tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use xo_terminal::{Cli, Command, TerminalConfig, logging, run_replay, run_tui};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TerminalConfig::load_or_default(&cli.config)?;
    if let Some(highlight) = cli.highlight {
        config = config.with_highlight(highlight);
    }

    match cli.command.unwrap_or_default() {
        Command::Play => {
            logging::init_file_logging(config.log_file())?;
            info!(config = ?config, "Configuration resolved");
            run_tui(config)
        }
        Command::Replay { clicks, json } => {
            logging::init_stderr_logging();
            println!("{}", run_replay(&clicks, json)?);
            Ok(())
        }
    }
}
