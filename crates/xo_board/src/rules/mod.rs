//! Game rules.
//!
//! Pure functions over a [`Board`](crate::Board). Nothing here reads or
//! writes session state, so every rule can be exercised on a bare board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner};
