//! Interactive board session: board, turn and presentation state.
//!
//! A [`Session`] is owned by whatever event loop drives the board. Cell
//! clicks go through [`Session::click`], the restart button through
//! [`Session::reset`]. Invalid clicks are not errors: they leave the session
//! untouched and come back as [`Click::Ignored`].

use crate::outcome::{Outcome, WinningLine, evaluate};
use crate::status::Status;
use crate::types::{Board, CELL_COUNT, Cell, Mark};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Why a click left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The index does not name a cell.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(usize),
    /// The board already has a winner.
    #[display("Game is already over")]
    GameOver,
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
}

/// Result of a cell click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Click {
    /// The mark was placed.
    Accepted {
        /// Cell that was marked.
        index: usize,
        /// Mark that was placed.
        mark: Mark,
        /// Outcome of the board after the move.
        outcome: Outcome,
    },
    /// Nothing changed.
    Ignored(IgnoreReason),
}

impl Click {
    /// Returns true if the click placed a mark.
    pub fn is_accepted(&self) -> bool {
        matches!(self, Click::Accepted { .. })
    }
}

/// Serializable view of a session, for renderers and scripted output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Cells in row-major order.
    pub board: Board,
    /// Mark that moves next.
    pub next: Mark,
    /// Outcome of the board.
    pub outcome: Outcome,
    /// Status line kind.
    pub status: Status,
    /// Plain status text.
    pub status_text: String,
    /// Highlighted cells, empty unless won.
    pub winning_line: Vec<usize>,
}

/// One interactive board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    board: Board,
    next: Mark,
    status: Status,
    winning_line: Option<WinningLine>,
}

impl Session {
    /// Creates a session in the initial state: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            next: Mark::X,
            status: Status::Greeting,
            winning_line: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn next(&self) -> Mark {
        self.next
    }

    /// Returns the status line.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the outcome, recomputed from the board.
    pub fn outcome(&self) -> Outcome {
        evaluate(&self.board)
    }

    /// Returns the highlighted cells (empty unless won).
    pub fn winning_line(&self) -> &[usize] {
        self.winning_line
            .as_ref()
            .map(|line| line.indices().as_slice())
            .unwrap_or(&[])
    }

    /// Returns true if the cell at `index` belongs to the winning line.
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.winning_line
            .is_some_and(|line| line.contains(index))
    }

    /// Handles a click on the cell at `index`.
    #[instrument(skip(self), fields(next = %self.next))]
    pub fn click(&mut self, index: usize) -> Click {
        if index >= CELL_COUNT {
            debug!(index, "Click outside the board ignored");
            return Click::Ignored(IgnoreReason::OutOfRange(index));
        }
        if self.outcome().winner().is_some() {
            debug!(index, "Click after a win ignored");
            return Click::Ignored(IgnoreReason::GameOver);
        }
        if !self.board.is_empty(index) {
            debug!(index, "Click on occupied cell ignored");
            return Click::Ignored(IgnoreReason::Occupied(index));
        }

        let mark = self.next;
        if let Err(e) = self.board.set(index, Cell::Marked(mark)) {
            // Bounds were checked above.
            debug!(error = %e, "Board refused write");
            return Click::Ignored(IgnoreReason::OutOfRange(index));
        }
        self.next = mark.opponent();

        let outcome = self.outcome();
        match outcome {
            Outcome::Win(win) => {
                self.status = Status::Wins(win.mark);
                self.winning_line = Some(win.line);
            }
            Outcome::Draw => self.status = Status::EqualGame,
            Outcome::InProgress => self.status = Status::NextPlayer(self.next),
        }
        debug!(index, %mark, ?outcome, "Mark placed");

        Click::Accepted {
            index,
            mark,
            outcome,
        }
    }

    /// Restores the initial state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting board");
        *self = Self::new();
    }

    /// Captures the session for rendering or serialization.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            next: self.next,
            outcome: self.outcome(),
            status: self.status,
            status_text: self.status.to_string(),
            winning_line: self.winning_line().to_vec(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
