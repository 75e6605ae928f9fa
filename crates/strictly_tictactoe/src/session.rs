//! Game session controller.
//!
//! A [`GameSession`] owns the board, the turn and the stored status of one
//! game. All state changes go through [`GameSession::apply_move`] and
//! [`GameSession::reset`], and both return the render instructions the
//! view layer needs to reflect the change.

use crate::invariants::{InvariantSet, SessionInvariants};
use crate::rules::{self, WinLine};
use crate::{Board, Cell, GameError, GameErrorKind, GameStatus, Mark, Move, Position, RenderInstruction};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// State of one tic-tac-toe session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) board: Board,
    pub(crate) turn: Mark,
    pub(crate) status: GameStatus,
    pub(crate) win_line: Option<WinLine>,
    pub(crate) history: Vec<Move>,
}

impl GameSession {
    /// Creates a fresh session: empty board, Cross to move, `Loading`.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Mark::Cross,
            status: GameStatus::Loading,
            win_line: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark that moves next.
    pub fn turn(&self) -> Mark {
        self.turn
    }

    /// Returns the stored status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winning line, if the game was won.
    pub fn win_line(&self) -> Option<WinLine> {
        self.win_line
    }

    /// Returns the moves made since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true once the status is terminal.
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// Returns the positions a move would currently be accepted at.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_over() {
            Vec::new()
        } else {
            Position::valid_moves(&self.board)
        }
    }

    /// Applies a move at a cell index (0-8).
    ///
    /// A move on an occupied cell, or after the game has ended, is ignored:
    /// nothing changes and no instructions are returned.
    ///
    /// # Errors
    ///
    /// Returns a `GameState` error for an index outside 0-8. The session is
    /// unchanged.
    #[instrument(skip(self), fields(turn = %self.turn, status = %self.status))]
    pub fn apply_move(&mut self, index: usize) -> Result<Vec<RenderInstruction>, GameError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Cell index out of range");
            GameError::new(GameErrorKind::GameState { index })
        })?;
        Ok(self.apply_position(position))
    }

    /// Applies a move at a position. See [`GameSession::apply_move`].
    #[instrument(skip(self), fields(turn = %self.turn, status = %self.status))]
    pub fn apply_position(&mut self, position: Position) -> Vec<RenderInstruction> {
        if !self.status.accepts_moves() {
            debug!("Game is over, ignoring move");
            return Vec::new();
        }
        if self.board.at(position) != Cell::Empty {
            debug!("Cell already marked, ignoring move");
            return Vec::new();
        }

        let mark = self.turn;
        self.board.place(position, mark);
        self.history.push(Move::new(mark, position));
        self.turn = mark.opponent();

        let evaluation = rules::evaluate(&self.board);
        self.status = evaluation.status;
        self.win_line = evaluation.win_line;

        self.assert_invariants();

        info!(%mark, index = position.to_index(), status = %self.status, "Move applied");

        let mut instructions = vec![
            RenderInstruction::MarkCell { position, mark },
            RenderInstruction::SetTurn(self.turn),
            RenderInstruction::SetStatus(self.status),
        ];
        if let Some(line) = self.win_line {
            instructions.push(RenderInstruction::highlight(line));
        }
        if self.status.is_terminal() {
            instructions.push(RenderInstruction::ShowReplay);
        }
        instructions
    }

    /// Restores the fresh-session state, whatever the current status.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn reset(&mut self) -> Vec<RenderInstruction> {
        *self = Self::new();
        info!("Session reset");

        vec![
            RenderInstruction::SetStatus(GameStatus::Loading),
            RenderInstruction::ClearCells,
            RenderInstruction::SetTurn(Mark::Cross),
            RenderInstruction::HideReplay,
        ]
    }

    fn assert_invariants(&self) {
        if let Err(violations) = SessionInvariants::check_all(self) {
            warn!(?violations, "Session invariants violated");
            debug_assert!(false, "Session invariants violated: {:?}", violations);
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
