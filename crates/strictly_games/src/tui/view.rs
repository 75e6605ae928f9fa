//! Presentation state driven by render instructions.

use crate::config::Settings;
use derive_getters::Getters;
use strictly_tictactoe::{GameStatus, Mark, Move, Position, View, WinLine};
use tracing::{debug, instrument};

/// Visual state of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellVisual {
    /// Mark shown in the cell.
    pub mark: Option<Mark>,
    /// Whether the cell is part of the winning line.
    pub winning: bool,
}

/// Everything the terminal front end draws, kept in sync with the session
/// only through forwarded instructions.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct BoardView {
    cells: [CellVisual; 9],
    status: GameStatus,
    turn: Mark,
    replay_visible: bool,
    moves: Vec<Move>,
}

impl BoardView {
    /// Creates the view of a fresh session.
    pub fn new() -> Self {
        Self {
            cells: [CellVisual::default(); 9],
            status: GameStatus::Loading,
            turn: Mark::Cross,
            replay_visible: false,
            moves: Vec::new(),
        }
    }

    /// Returns the visual state of one cell.
    pub fn cell(&self, pos: Position) -> CellVisual {
        self.cells[pos.to_index()]
    }

    /// Renders the view as plain text.
    #[instrument(skip_all)]
    pub fn to_text(&self, settings: &Settings) -> String {
        let mut out = String::new();
        for row in 0..3 {
            let line: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let cell = self.cells[index];
                    let symbol = match cell.mark {
                        Some(mark) => settings.symbol(mark).to_string(),
                        None => (index + 1).to_string(),
                    };
                    if cell.winning {
                        format!("[{}]", symbol)
                    } else {
                        format!(" {} ", symbol)
                    }
                })
                .collect();
            out.push_str(&line.join("|"));
            out.push('\n');
            if row < 2 {
                out.push_str("---+---+---\n");
            }
        }
        out.push_str(&format!("Turn: {}\n", settings.symbol(self.turn)));
        out.push_str(&format!("Status: {}\n", self.status));
        if self.replay_visible {
            out.push_str("Replay available\n");
        }
        out
    }
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for BoardView {
    fn set_status(&mut self, status: GameStatus) {
        debug!(%status, "Status display updated");
        self.status = status;
    }

    fn set_turn(&mut self, mark: Mark) {
        self.turn = mark;
    }

    fn mark_cell(&mut self, position: Position, mark: Mark) {
        self.cells[position.to_index()].mark = Some(mark);
        self.moves.push(Move::new(mark, position));
    }

    fn highlight(&mut self, line: WinLine) {
        for pos in line.positions() {
            self.cells[pos.to_index()].winning = true;
        }
    }

    fn set_replay_visible(&mut self, visible: bool) {
        self.replay_visible = visible;
    }

    fn clear_cells(&mut self) {
        self.cells = [CellVisual::default(); 9];
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_tictactoe::{GameSession, dispatch};

    fn drive(moves: &[usize]) -> (GameSession, BoardView) {
        let mut session = GameSession::new();
        let mut view = BoardView::new();
        for &index in moves {
            let instructions = session.apply_move(index).unwrap();
            dispatch(&mut view, &instructions).unwrap();
        }
        (session, view)
    }

    #[test]
    fn test_view_mirrors_session() {
        let (session, view) = drive(&[4, 0, 8]);
        for pos in Position::ALL {
            assert_eq!(view.cell(pos).mark, session.board().at(pos).mark());
        }
        assert_eq!(view.turn(), &session.turn());
        assert_eq!(view.status(), &GameStatus::Playing);
        assert!(!*view.replay_visible());
        assert_eq!(view.moves().len(), 3);
    }

    #[test]
    fn test_win_highlights_line_and_shows_replay() {
        let (_, view) = drive(&[0, 3, 1, 4, 2]);
        let winning: Vec<usize> = Position::ALL
            .iter()
            .filter(|p| view.cell(**p).winning)
            .map(|p| p.to_index())
            .collect();
        assert_eq!(winning, vec![0, 1, 2]);
        assert_eq!(view.status(), &GameStatus::XWin);
        assert!(*view.replay_visible());
    }

    #[test]
    fn test_reset_clears_view() {
        let (mut session, mut view) = drive(&[0, 3, 1, 4, 2]);
        dispatch(&mut view, &session.reset()).unwrap();
        assert_eq!(view, BoardView::new());
    }

    #[test]
    fn test_text_rendering() {
        let (_, view) = drive(&[0, 3, 1, 4, 2]);
        let text = view.to_text(&Settings::default());
        assert!(text.starts_with("[X]|[X]|[X]\n"));
        assert!(text.contains(" O | O | 6 \n"));
        assert!(text.contains("Status: X_WIN"));
        assert!(text.contains("Replay available"));
    }
}
