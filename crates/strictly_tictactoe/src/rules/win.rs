//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Mark, Position};
use serde::Serialize;
use tracing::instrument;

/// One of the eight canonical winning lines.
///
/// A `WinLine` can only be obtained from [`WinLine::ALL`] or
/// [`WinLine::from_indices`], so it always holds exactly three positions
/// forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WinLine([Position; 3]);

impl WinLine {
    /// All lines in evaluation order: rows, then columns, then diagonals.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([Position::TopLeft, Position::TopCenter, Position::TopRight]),
        WinLine([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
        WinLine([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
        // Columns
        WinLine([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
        WinLine([Position::TopCenter, Position::Center, Position::BottomCenter]),
        WinLine([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
        // Diagonals
        WinLine([Position::TopLeft, Position::Center, Position::BottomRight]),
        WinLine([Position::TopRight, Position::Center, Position::BottomLeft]),
    ];

    /// Returns the three positions of the line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Returns the three board indices of the line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Finds the canonical line made of exactly these indices, in any order.
    pub fn from_indices(indices: &[usize]) -> Option<Self> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable();
        Self::ALL
            .into_iter()
            .find(|line| line.indices().as_slice() == sorted.as_slice())
    }

    /// Returns true if the line contains the position.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// Returns the mark filling all three cells, if any.
    fn owner(&self, board: &Board) -> Option<Mark> {
        let [a, b, c] = self.0;
        match board.at(a) {
            Cell::Marked(mark) if board.at(b) == Cell::Marked(mark) && board.at(c) == Cell::Marked(mark) => {
                Some(mark)
            }
            _ => None,
        }
    }
}

impl From<WinLine> for [usize; 3] {
    fn from(line: WinLine) -> Self {
        line.indices()
    }
}

/// Finds the first complete line on the board.
///
/// Lines are checked in [`WinLine::ALL`] order, so the result is
/// deterministic even for boards with more than one complete line.
#[instrument(level = "trace", skip(board))]
pub fn winning_line(board: &Board) -> Option<(Mark, WinLine)> {
    WinLine::ALL
        .into_iter()
        .find_map(|line| line.owner(board).map(|mark| (mark, line)))
}

/// Checks if there is a winner on the board.
pub fn check_winner(board: &Board) -> Option<Mark> {
    winning_line(board).map(|(mark, _)| mark)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for &(i, mark) in marks {
            cells[i] = Cell::Marked(mark);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[(0, Mark::Cross), (1, Mark::Cross), (2, Mark::Cross)]);
        let (mark, line) = winning_line(&board).expect("top row wins");
        assert_eq!(mark, Mark::Cross);
        assert_eq!(line.indices(), [0, 1, 2]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[(2, Mark::Circle), (4, Mark::Circle), (6, Mark::Circle)]);
        assert_eq!(check_winner(&board), Some(Mark::Circle));
        assert_eq!(winning_line(&board).map(|(_, l)| l.indices()), Some([2, 4, 6]));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[(0, Mark::Cross), (1, Mark::Circle), (2, Mark::Cross)]);
        assert_eq!(winning_line(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Row 0 and column 0 are both complete; the row comes first.
        let board = board_with(&[
            (0, Mark::Cross),
            (1, Mark::Cross),
            (2, Mark::Cross),
            (3, Mark::Cross),
            (6, Mark::Cross),
        ]);
        assert_eq!(winning_line(&board).map(|(_, l)| l.indices()), Some([0, 1, 2]));
    }

    #[test]
    fn test_from_indices() {
        assert_eq!(WinLine::from_indices(&[0, 4, 8]), Some(WinLine::ALL[6]));
        assert_eq!(WinLine::from_indices(&[6, 4, 2]), Some(WinLine::ALL[7]));
        assert_eq!(WinLine::from_indices(&[0, 0, 1]), None);
        assert_eq!(WinLine::from_indices(&[0, 1]), None);
        assert_eq!(WinLine::from_indices(&[0, 1, 3]), None);
        assert_eq!(WinLine::from_indices(&[0, 1, 2, 3]), None);
    }
}
