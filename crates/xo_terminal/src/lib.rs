//! Terminal front end for the xo tic-tac-toe board.
//!
//! The binary (`xo`) turns key presses and mouse clicks into cell clicks
//! and resets on an [`xo_board::Session`], and draws the board with
//! ratatui. A `replay` command applies a list of clicks without a terminal.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod config;
pub mod input;
pub mod logging;
pub mod replay;
pub mod tui;
pub mod ui;

pub use app::{App, Transition};
pub use cli::{Cli, Command};
pub use config::{ConfigError, HighlightColor, TerminalConfig};
pub use replay::run_replay;
pub use tui::run_tui;
pub use ui::BoardLayout;
