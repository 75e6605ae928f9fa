//! Application state and logic.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};
use strictly_tictactoe::{GameError, GameSession, Position, dispatch};
use tracing::{debug, info, instrument};

use super::input::{self, Action};
use super::ui;
use super::view::BoardView;
use crate::config::Settings;

/// Main application state.
pub struct App {
    session: GameSession,
    view: BoardView,
    cursor: Position,
    cell_areas: [Rect; 9],
    settings: Settings,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: Settings) -> Self {
        Self {
            session: GameSession::new(),
            view: BoardView::new(),
            cursor: Position::Center,
            cell_areas: [Rect::default(); 9],
            settings,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the presentation state.
    pub fn view(&self) -> &BoardView {
        &self.view
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Activates a cell and forwards the resulting instructions to the view.
    #[instrument(skip(self))]
    pub fn activate(&mut self, position: Position) -> Result<(), GameError> {
        let instructions = self.session.apply_position(position);
        if instructions.is_empty() {
            debug!("Cell activation ignored");
        }
        dispatch(&mut self.view, &instructions)
    }

    /// Activates the replay control. Does nothing while it is hidden.
    #[instrument(skip(self))]
    pub fn replay(&mut self) -> Result<(), GameError> {
        if !*self.view.replay_visible() {
            debug!("Replay control hidden, ignoring");
            return Ok(());
        }
        info!("Starting a new round");
        let instructions = self.session.reset();
        dispatch(&mut self.view, &instructions)
    }

    /// Performs a user action.
    pub fn handle_action(&mut self, action: Action) -> Result<(), GameError> {
        debug!(?action, "Handling action");
        match action {
            Action::Activate(position) => {
                self.cursor = position;
                self.activate(position)
            }
            Action::ActivateCursor => self.activate(self.cursor),
            Action::MoveCursor(code) => {
                self.cursor = input::move_cursor(self.cursor, code);
                Ok(())
            }
            Action::Replay => self.replay(),
            Action::Quit => {
                self.should_quit = true;
                Ok(())
            }
        }
    }

    /// Handles a key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        match input::key_action(key) {
            Some(action) => self.handle_action(action),
            None => Ok(()),
        }
    }

    /// Handles a mouse event against the cells drawn last frame.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<(), GameError> {
        match input::mouse_action(mouse, &self.cell_areas) {
            Some(action) => self.handle_action(action),
            None => Ok(()),
        }
    }

    /// Draws the screen and remembers where each cell landed.
    pub fn draw(&mut self, frame: &mut Frame) {
        self.cell_areas = ui::draw(frame, &self.view, self.cursor, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_tictactoe::GameStatus;

    fn press(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
            .unwrap();
    }

    #[test]
    fn test_digit_keys_play_a_game() {
        let mut app = App::new(Settings::default());
        for c in ['1', '4', '2', '5', '3'] {
            press(&mut app, c);
        }
        assert_eq!(app.session().status(), GameStatus::XWin);
        assert_eq!(app.view().status(), &GameStatus::XWin);
        assert!(*app.view().replay_visible());
    }

    #[test]
    fn test_replay_only_when_visible() {
        let mut app = App::new(Settings::default());
        press(&mut app, '5');
        press(&mut app, 'r');
        assert_eq!(app.session().history().len(), 1);

        for c in ['1', '6', '2', '9', '3'] {
            press(&mut app, c);
        }
        assert_eq!(app.session().status(), GameStatus::OWin);
        press(&mut app, 'r');
        assert_eq!(app.session().status(), GameStatus::Loading);
        assert!(app.session().history().is_empty());
        assert_eq!(app.view(), &BoardView::new());
    }

    #[test]
    fn test_cursor_activation() {
        let mut app = App::new(Settings::default());
        app.handle_action(Action::MoveCursor(KeyCode::Up)).unwrap();
        app.handle_action(Action::ActivateCursor).unwrap();
        assert_eq!(app.cursor(), Position::TopCenter);
        assert!(app.view().cell(Position::TopCenter).mark.is_some());
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let mut app = App::new(Settings::default());
        press(&mut app, '5');
        press(&mut app, '5');
        assert_eq!(app.session().history().len(), 1);
        assert_eq!(app.view().moves().len(), 1);
    }

    #[test]
    fn test_click_on_drawn_cell() {
        let mut app = App::new(Settings::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();

        let target = app.cell_areas[Position::BottomRight.to_index()];
        app.handle_mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: target.x + 1,
            row: target.y + 1,
            modifiers: KeyModifiers::NONE,
        })
        .unwrap();
        assert!(app.view().cell(Position::BottomRight).mark.is_some());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(Settings::default());
        press(&mut app, 'q');
        assert!(app.should_quit());
    }
}
