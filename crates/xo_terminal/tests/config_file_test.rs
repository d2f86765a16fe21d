//! Tests for loading `xo.toml`.

use std::io::Write;
use std::path::PathBuf;
use xo_terminal::{HighlightColor, TerminalConfig};

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = TerminalConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, TerminalConfig::default());
    assert_eq!(*config.highlight(), HighlightColor::Green);
}

#[test]
fn test_full_file_is_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"board.log\"\nhighlight = \"magenta\"\nshow_cell_numbers = false"
    )
    .unwrap();

    let config = TerminalConfig::load_or_default(file.path()).unwrap();
    assert_eq!(config.log_file(), &PathBuf::from("board.log"));
    assert_eq!(*config.highlight(), HighlightColor::Magenta);
    assert!(!*config.show_cell_numbers());
}

#[test]
fn test_invalid_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "highlight = \"plaid\"").unwrap();

    let err = TerminalConfig::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_cli_override_replaces_highlight() {
    let config = TerminalConfig::default().with_highlight(HighlightColor::White);
    assert_eq!(*config.highlight(), HighlightColor::White);
    assert!(*config.show_cell_numbers());
}
