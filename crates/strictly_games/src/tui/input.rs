//! Keyboard and mouse input mapping.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use strictly_tictactoe::Position;

/// A user intent produced by a key or mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Activate a specific cell.
    Activate(Position),
    /// Activate the cell under the cursor.
    ActivateCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Activate the replay control.
    Replay,
    /// Leave the game.
    Quit,
}

/// Maps a key press to an action.
pub fn key_action(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Action::Replay),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::ActivateCursor),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            Position::from_index(index).map(Action::Activate)
        }
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(code))
        }
        _ => None,
    }
}

/// Maps a left click on a drawn cell to an action.
pub fn mouse_action(mouse: MouseEvent, cells: &[Rect; 9]) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(cells, mouse.column, mouse.row).map(Action::Activate)
        }
        _ => None,
    }
}

/// Finds the cell whose area contains the screen coordinate.
pub fn hit_test(cells: &[Rect; 9], column: u16, row: u16) -> Option<Position> {
    cells
        .iter()
        .position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
        .and_then(Position::from_index)
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };

    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_digit_keys_activate_cells() {
        assert_eq!(
            key_action(press(KeyCode::Char('1'))),
            Some(Action::Activate(Position::TopLeft))
        );
        assert_eq!(
            key_action(press(KeyCode::Char('9'))),
            Some(Action::Activate(Position::BottomRight))
        );
        assert_eq!(key_action(press(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(key_action(press(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Esc)), Some(Action::Quit));
        assert_eq!(key_action(press(KeyCode::Char('r'))), Some(Action::Replay));
        assert_eq!(key_action(press(KeyCode::Enter)), Some(Action::ActivateCursor));
        assert_eq!(
            key_action(press(KeyCode::Left)),
            Some(Action::MoveCursor(KeyCode::Left))
        );
    }

    #[test]
    fn test_cursor_movement() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
    }

    #[test]
    fn test_hit_test() {
        let mut cells = [Rect::default(); 9];
        for (i, cell) in cells.iter_mut().enumerate() {
            let (row, col) = (i as u16 / 3, i as u16 % 3);
            *cell = Rect::new(10 + col * 10, 5 + row * 4, 9, 3);
        }
        assert_eq!(hit_test(&cells, 10, 5), Some(Position::TopLeft));
        assert_eq!(hit_test(&cells, 25, 10), Some(Position::Center));
        assert_eq!(hit_test(&cells, 19, 5), None);
        assert_eq!(hit_test(&cells, 0, 0), None);
    }

    #[test]
    fn test_only_left_click_activates() {
        let cells = [Rect::new(0, 0, 5, 5); 9];
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(mouse_action(click, &cells), Some(Action::Activate(Position::TopLeft)));

        let right = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Right),
            ..click
        };
        assert_eq!(mouse_action(right, &cells), None);
    }
}
