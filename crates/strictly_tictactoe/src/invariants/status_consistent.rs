//! Status consistency invariant: the stored status is the evaluated one.

use super::Invariant;
use crate::{GameSession, GameStatus, rules};

/// Invariant: The stored status and win line equal a fresh evaluation of
/// the board, except for `Loading` before the first move.
pub struct StatusConsistentInvariant;

impl Invariant<GameSession> for StatusConsistentInvariant {
    fn holds(session: &GameSession) -> bool {
        if session.history().is_empty() {
            return session.status() == GameStatus::Loading && session.win_line().is_none();
        }

        let evaluation = rules::evaluate(session.board());
        evaluation.status == session.status() && evaluation.win_line == session.win_line()
    }

    fn description() -> &'static str {
        "Stored status matches the board evaluation"
    }
}
