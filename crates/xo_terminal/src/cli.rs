//! Command-line interface for the xo board.

use crate::config::HighlightColor;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// xo - tic-tac-toe on a terminal board
#[derive(Parser, Debug)]
#[command(name = "xo")]
#[command(about = "Two-side tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "xo.toml")]
    pub config: PathBuf,

    /// Override the winning-line highlight color
    #[arg(long, global = true)]
    pub highlight: Option<HighlightColor>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Default, PartialEq, Eq)]
pub enum Command {
    /// Play interactively (keyboard and mouse)
    #[default]
    Play,

    /// Apply cell clicks to a fresh board and print the result
    Replay {
        /// Cell indices (0-8) in click order, space- or comma-separated
        #[arg(value_delimiter = ',', num_args = 1..)]
        clicks: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_play() {
        let cli = Cli::parse_from(["xo"]);
        assert_eq!(cli.command.unwrap_or_default(), Command::Play);
        assert_eq!(cli.config, PathBuf::from("xo.toml"));
    }

    #[test]
    fn test_replay_accepts_commas_and_spaces() {
        let cli = Cli::parse_from(["xo", "replay", "0,4", "1", "--json"]);
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                clicks: vec![0, 4, 1],
                json: true,
            })
        );
    }

    #[test]
    fn test_highlight_override() {
        let cli = Cli::parse_from(["xo", "--highlight", "cyan", "play"]);
        assert_eq!(cli.highlight, Some(HighlightColor::Cyan));
    }
}
