//! Contract-violation errors.
//!
//! Invalid moves (occupied cell, game already over) are not errors; the
//! session ignores them. These types cover caller bugs only.

use derive_more::{Display, Error};

/// Kind of contract violation.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// A cell index outside 0-8 was submitted.
    #[display("Game state error: cell index {} is out of range (must be 0-8)", index)]
    GameState {
        /// The rejected index.
        index: usize,
    },

    /// A status update carried no status.
    #[display("Status update has no status")]
    MissingStatus,

    /// A highlight request was not a three-cell winning line.
    #[display("Invalid win positions: expected a 3-cell line, got {} positions", count)]
    InvalidWinPositions {
        /// Number of positions in the rejected request.
        count: usize,
    },

    /// A wire instruction could not be parsed.
    #[display("Malformed instruction: {}", message)]
    Decode {
        /// Parser message.
        message: String,
    },
}

/// Contract violation with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// What went wrong.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new error with caller location tracking.
    #[track_caller]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }
}

impl From<serde_json::Error> for GameError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(GameErrorKind::Decode {
            message: err.to_string(),
        })
    }
}
