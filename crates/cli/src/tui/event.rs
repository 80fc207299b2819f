//! Event handling: maps keyboard events to application messages.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::Message;

/// Map a key event to an optional message.
pub fn map_key_event(key: KeyEvent) -> Option<Message> {
    // Global binding
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    match key.code {
        KeyCode::Char(c) => Some(Message::InputChar(c)),
        KeyCode::Backspace => Some(Message::InputBackspace),
        KeyCode::Enter => Some(Message::Calculate),
        KeyCode::Esc => Some(Message::Quit),
        _ => None,
    }
}
