//! Key mapping from terminal events to logical keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to a logical movement key.
pub fn key_for(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Key::Forward),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Key::Back),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Key::TurnLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Key::TurnRight),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_wasd_keys() {
        assert_eq!(key_for(KeyCode::Char('w')), Some(Key::Forward));
        assert_eq!(key_for(KeyCode::Char('s')), Some(Key::Back));
        assert_eq!(key_for(KeyCode::Char('a')), Some(Key::TurnLeft));
        assert_eq!(key_for(KeyCode::Char('d')), Some(Key::TurnRight));

        assert_eq!(key_for(KeyCode::Char('W')), Some(Key::Forward));
        assert_eq!(key_for(KeyCode::Char('D')), Some(Key::TurnRight));
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(key_for(KeyCode::Up), Some(Key::Forward));
        assert_eq!(key_for(KeyCode::Down), Some(Key::Back));
        assert_eq!(key_for(KeyCode::Left), Some(Key::TurnLeft));
        assert_eq!(key_for(KeyCode::Right), Some(Key::TurnRight));
    }

    #[test]
    fn test_unmapped_keys() {
        assert_eq!(key_for(KeyCode::Char('x')), None);
        assert_eq!(key_for(KeyCode::Char(' ')), None);
        assert_eq!(key_for(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
