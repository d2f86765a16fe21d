//! Non-interactive replay of cell clicks.

use anyhow::Result;
use tracing::{info, instrument, warn};
use xo_board::{Click, Session};

/// Applies `clicks` to a fresh board and renders the final state.
///
/// Ignored clicks are logged and skipped; they never abort the replay.
#[instrument]
pub fn run_replay(clicks: &[usize], json: bool) -> Result<String> {
    let mut session = Session::new();
    for &index in clicks {
        if let Click::Ignored(reason) = session.click(index) {
            warn!(index, %reason, "Click ignored");
        }
    }
    info!(outcome = %session.outcome(), "Replay finished");

    if json {
        return Ok(serde_json::to_string_pretty(&session.snapshot())?);
    }

    let mut out = session.board().display();
    out.push_str("\n\n");
    out.push_str(&session.status().to_string());
    if !session.winning_line().is_empty() {
        out.push_str(&format!("\nWinning line: {:?}", session.winning_line()));
    }
    Ok(out)
}
