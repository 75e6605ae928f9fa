//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board according to
//! tic-tac-toe rules. Rules are separated from board storage and from the
//! session so they can be tested and reused on their own.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_winner, winning_line};

use crate::{Board, GameStatus};
use serde::Serialize;
use tracing::{instrument, trace};

/// Result of evaluating a board.
///
/// `win_line` is present exactly when `status` is `XWin` or `OWin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    /// Derived game status.
    pub status: GameStatus,
    /// The completed line, for a win.
    pub win_line: Option<WinLine>,
}

impl Evaluation {
    fn playing() -> Self {
        Self {
            status: GameStatus::Playing,
            win_line: None,
        }
    }
}

/// Evaluates a board: win, draw or still playing.
///
/// Never returns `Loading`; that status only exists before the first move
/// has been evaluated.
#[instrument(level = "debug", skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((mark, line)) = winning_line(board) {
        trace!(%mark, line = ?line.indices(), "Line complete");
        return Evaluation {
            status: GameStatus::won_by(mark),
            win_line: Some(line),
        };
    }

    if is_full(board) {
        return Evaluation {
            status: GameStatus::Ended,
            win_line: None,
        };
    }

    Evaluation::playing()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Mark};

    const X: Cell = Cell::Marked(Mark::Cross);
    const O: Cell = Cell::Marked(Mark::Circle);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_is_playing() {
        assert_eq!(evaluate(&Board::new()), Evaluation::playing());
    }

    #[test]
    fn test_circle_column_win() {
        let board = Board::from_cells([X, O, X, E, O, X, E, O, E]);
        let eval = evaluate(&board);
        assert_eq!(eval.status, GameStatus::OWin);
        assert_eq!(eval.win_line.map(|l| l.indices()), Some([1, 4, 7]));
    }

    #[test]
    fn test_full_board_without_line_is_ended() {
        let board = Board::from_cells([X, O, X, X, O, O, O, X, X]);
        let eval = evaluate(&board);
        assert_eq!(eval.status, GameStatus::Ended);
        assert_eq!(eval.win_line, None);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        let eval = evaluate(&board);
        assert_eq!(eval.status, GameStatus::XWin);
        assert_eq!(eval.win_line.map(|l| l.indices()), Some([0, 4, 8]));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board = Board::from_cells([X, X, X, O, O, E, E, E, E]);
        let before = board.clone();
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }
}
