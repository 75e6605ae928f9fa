//! Alternating turn invariant: Cross, Circle, Cross, ...

use super::Invariant;
use crate::{GameSession, Mark};

/// Invariant: Marks alternate, starting with Cross.
///
/// The current turn must also match the parity of the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameSession> for AlternatingTurnInvariant {
    fn holds(session: &GameSession) -> bool {
        let history = session.history();

        if history.first().is_some_and(|m| m.mark != Mark::Cross) {
            return false;
        }

        if history.windows(2).any(|w| w[0].mark == w[1].mark) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Mark::Cross
        } else {
            Mark::Circle
        };

        session.turn() == expected_next
    }

    fn description() -> &'static str {
        "Marks alternate turns (Cross, Circle, Cross, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = GameSession::new();
        for index in [0, 4, 2, 6, 8] {
            session.apply_move(index).unwrap();
        }
        assert!(AlternatingTurnInvariant::holds(&session));
        assert_eq!(session.turn(), Mark::Circle);
    }

    #[test]
    fn test_same_mark_twice_violates() {
        let mut session = GameSession::new();
        session.apply_move(0).unwrap();
        session.history.push(Move::new(Mark::Cross, Position::Center));
        session.turn = Mark::Cross;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }

    #[test]
    fn test_circle_first_violates() {
        let mut session = GameSession::new();
        session.history.push(Move::new(Mark::Circle, Position::Center));
        session.turn = Mark::Cross;
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
