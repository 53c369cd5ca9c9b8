//! Key mapping from terminal events to input intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cursor::Direction;

/// What a key press asks for, before the cursor resolves it to a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputIntent {
    MoveCursor(Direction),
    /// Flip the tile under the cursor
    Flip,
    Restart,
}

/// Map keyboard input to intents.
pub fn handle_key_event(key: KeyEvent) -> Option<InputIntent> {
    match key.code {
        // Cursor
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
            Some(InputIntent::MoveCursor(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
            Some(InputIntent::MoveCursor(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
            Some(InputIntent::MoveCursor(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
            Some(InputIntent::MoveCursor(Direction::Down))
        }

        // Actions
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('f') | KeyCode::Char('F') => {
            Some(InputIntent::Flip)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputIntent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
