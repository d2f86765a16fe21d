//! Exhaustive checks of the win evaluator over every possible board.

use xo_board::rules::{LINES, check_winner, is_full};
use xo_board::{Board, Cell, Mark, Outcome, evaluate};

/// Every assignment of empty/X/O to the 9 cells (3^9 boards).
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut code| {
        let mut board = Board::new();
        for index in 0..9 {
            let cell = match code % 3 {
                0 => Cell::Empty,
                1 => Cell::Marked(Mark::X),
                _ => Cell::Marked(Mark::O),
            };
            board.set(index, cell).unwrap();
            code /= 3;
        }
        board
    })
}

fn first_uniform_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    LINES.iter().find_map(|&line| {
        let marks: Vec<Option<Mark>> = line
            .iter()
            .map(|&i| board.get(i).and_then(Cell::mark))
            .collect();
        match marks.as_slice() {
            [Some(a), Some(b), Some(c)] if a == b && b == c => Some((*a, line)),
            _ => None,
        }
    })
}

#[test]
fn test_outcome_matches_definition_on_every_board() {
    for board in all_boards() {
        let outcome = evaluate(&board);
        match first_uniform_line(&board) {
            Some((mark, line)) => match outcome {
                Outcome::Win(win) => {
                    assert_eq!(win.mark, mark, "{}", board.display());
                    assert_eq!(win.line.indices(), &line, "{}", board.display());
                }
                other => panic!("expected win, got {other:?}\n{}", board.display()),
            },
            None if is_full(&board) => assert_eq!(outcome, Outcome::Draw),
            None => assert_eq!(outcome, Outcome::InProgress),
        }
    }
}

#[test]
fn test_evaluator_is_pure() {
    for board in all_boards().step_by(97) {
        let copy = board.clone();
        assert_eq!(check_winner(&board), check_winner(&copy));
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(board, copy);
    }
}
