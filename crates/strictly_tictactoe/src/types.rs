//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A player's mark. Also used as the turn indicator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum Mark {
    /// Cross (moves first).
    #[strum(serialize = "X")]
    Cross,
    /// Circle (moves second).
    #[strum(serialize = "O")]
    Circle,
}

impl Mark {
    /// Returns the other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::Cross => Mark::Circle,
            Mark::Circle => Mark::Cross,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell holding a player's mark.
    Marked(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Number of cells on the board.
    pub const SIZE: usize = 9;

    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::SIZE],
        }
    }

    /// Builds a board directly from its nine cells.
    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Gets the cell at a position.
    pub fn at(&self, pos: Position) -> Cell {
        self.cells[pos.to_index()]
    }

    /// Places a mark at a position.
    ///
    /// Callers are responsible for checking that the cell is empty.
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = Cell::Marked(mark);
    }

    /// Checks if the cell at an index exists and is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the positions that are still empty, in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.at(*pos) == Cell::Empty)
            .collect()
    }

    /// Counts the cells holding the given mark.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|c| **c == Cell::Marked(mark))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Marked(mark) => write!(f, "{}", mark)?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Status of a game session.
///
/// `Display` yields the text shown in the status display.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::Display,
)]
pub enum GameStatus {
    /// No move has been evaluated yet (fresh or reset session).
    #[default]
    #[serde(rename = "LOADING")]
    #[strum(serialize = "LOADING")]
    Loading,
    /// Game is ongoing.
    #[serde(rename = "PLAYING")]
    #[strum(serialize = "PLAYING")]
    Playing,
    /// Board is full with no winner.
    #[serde(rename = "ENDED")]
    #[strum(serialize = "ENDED")]
    Ended,
    /// Cross completed a line.
    #[serde(rename = "X_WIN")]
    #[strum(serialize = "X_WIN")]
    XWin,
    /// Circle completed a line.
    #[serde(rename = "O_WIN")]
    #[strum(serialize = "O_WIN")]
    OWin,
}

impl GameStatus {
    /// Returns the winning status for a mark.
    pub fn won_by(mark: Mark) -> Self {
        match mark {
            Mark::Cross => GameStatus::XWin,
            Mark::Circle => GameStatus::OWin,
        }
    }

    /// Returns true for `Ended`, `XWin` and `OWin`.
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Ended | GameStatus::XWin | GameStatus::OWin)
    }

    /// Returns true while moves are accepted (`Loading` or `Playing`).
    pub fn accepts_moves(self) -> bool {
        !self.is_terminal()
    }

    /// Returns the winner, if the status is a win.
    pub fn winner(self) -> Option<Mark> {
        match self {
            GameStatus::XWin => Some(Mark::Cross),
            GameStatus::OWin => Some(Mark::Circle),
            _ => None,
        }
    }
}

/// A successful move: a mark placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(mark: Mark, position: Position) -> Self {
        Self { mark, position }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.mark, self.position.label())
    }
}
