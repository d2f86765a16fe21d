//! Tic-tac-toe board logic.
//!
//! This crate holds everything a front end needs to run a two-side
//! tic-tac-toe board, with no I/O of its own.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`] and the fixed 9-cell [`Board`]
//! - **Rules**: pure win and draw checks over a board
//! - **Outcome**: [`evaluate`] derives [`Outcome`] from a board on demand
//! - **Session**: [`Session`] owns board, turn and status and handles clicks
//!   and resets
//!
//! # Example
//!
//! ```
//! use xo_board::{Mark, Outcome, Session};
//!
//! let mut session = Session::new();
//! for index in [0, 4, 1, 5, 2] {
//!     session.click(index);
//! }
//! assert_eq!(session.outcome().winner(), Some(Mark::X));
//! assert_eq!(session.status().to_string(), "X Wins");
//! assert_eq!(session.winning_line(), &[0, 1, 2]);
//!
//! session.reset();
//! assert_eq!(session.outcome(), Outcome::InProgress);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod outcome;
mod position;
pub mod rules;
mod session;
mod status;
mod types;

pub use outcome::{Outcome, Win, WinningLine, evaluate};
pub use position::Position;
pub use session::{Click, IgnoreReason, Session, Snapshot};
pub use status::{Status, StatusSegment};
pub use types::{Board, BoardError, CELL_COUNT, Cell, Mark};
