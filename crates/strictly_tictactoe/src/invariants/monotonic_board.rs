//! Monotonic board invariant: cells never change once marked.

use super::Invariant;
use crate::{Board, Cell, GameSession};

/// Invariant: Board cells are monotonic (never overwritten).
///
/// Verified by replaying the move history onto an empty board and
/// comparing the result with the session's board.
pub struct MonotonicBoardInvariant;

impl Invariant<GameSession> for MonotonicBoardInvariant {
    fn holds(session: &GameSession) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if reconstructed.at(mov.position) != Cell::Empty {
                return false;
            }
            reconstructed.place(mov.position, mov.mark);
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
