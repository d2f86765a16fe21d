//! Game outcome, derived from a board.

use crate::rules::{check_winner, is_full};
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The three cell indices of a completed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub(crate) fn new(indices: [usize; 3]) -> Self {
        Self(indices)
    }

    /// Returns the indices in line order.
    pub fn indices(&self) -> &[usize; 3] {
        &self.0
    }

    /// Returns true if the cell at `index` is part of this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// A completed line and the mark that completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Win {
    /// The winning mark.
    pub mark: Mark,
    /// The completed line.
    pub line: WinningLine,
}

/// Outcome of a board.
///
/// Never stored next to the board; call [`evaluate`] whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line completed and at least one cell empty.
    InProgress,
    /// A line is complete.
    Win(Win),
    /// Every cell marked, no line complete.
    Draw,
}

impl Outcome {
    /// Returns the winning mark if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(win) => Some(win.mark),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(win) => write!(f, "{} wins on {:?}", win.mark, win.line.indices()),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Computes the outcome of a board.
#[instrument]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(win) = check_winner(board) {
        Outcome::Win(win)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
