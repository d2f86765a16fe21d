//! Win detection.

use crate::outcome::{Win, WinningLine};
use crate::types::{Board, Cell};
use tracing::instrument;

/// The 8 winning lines, in evaluation order.
pub const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Checks if some line holds three equal marks.
///
/// Lines are scanned in [`LINES`] order and the first complete one wins, so
/// a final move that closes two lines at once reports the earlier line.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&[a, b, c]| {
        let cell = board.get(a)?;
        match cell {
            Cell::Marked(mark) if board.get(b) == Some(cell) && board.get(c) == Some(cell) => {
                Some(Win {
                    mark,
                    line: WinningLine::new([a, b, c]),
                })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mark;

    fn board(pattern: &str) -> Board {
        Board::from_pattern(pattern).unwrap()
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let win = check_winner(&board("XXX.OO...")).unwrap();
        assert_eq!(win.mark, Mark::X);
        assert_eq!(win.line.indices(), &[0, 1, 2]);
    }

    #[test]
    fn test_winner_column() {
        let win = check_winner(&board("XXO..OX.O")).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line.indices(), &[2, 5, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let win = check_winner(&board("X.OXO.O.X")).unwrap();
        assert_eq!(win.mark, Mark::O);
        assert_eq!(win.line.indices(), &[2, 4, 6]);
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(check_winner(&board("XX.......")), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        assert_eq!(check_winner(&board("XOX......")), None);
    }

    #[test]
    fn test_first_line_wins_tie_break() {
        // Final X at 0 closes both the top row and the left column.
        let win = check_winner(&board("XXXXOOXOO")).unwrap();
        assert_eq!(win.line.indices(), &[0, 1, 2]);

        // Column 0 and the main diagonal: the column comes first.
        let win = check_winner(&board("XOOXX.XOX")).unwrap();
        assert_eq!(win.line.indices(), &[0, 3, 6]);
    }
}
