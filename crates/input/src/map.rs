//! Key mapping from terminal events to game keys.

use crate::types::Key;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a keyboard event to a game key.
///
/// Only presses count; repeats and releases are dropped so a held key does not
/// type a name full of the same letter.
pub fn map_key(key: KeyEvent) -> Option<Key> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::Char(c) => Some(Key::Char(c)),
        _ => None,
    }
}

/// Check if key should quit the game regardless of phase.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_named_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Enter)), Some(Key::Enter));
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Backspace)),
            Some(Key::Backspace)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Key::Escape));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), None);
    }

    #[test]
    fn test_chars_keep_case() {
        assert_eq!(
            map_key(KeyEvent::from(KeyCode::Char('E'))),
            Some(Key::Char('E'))
        );
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('E'), KeyModifiers::SHIFT)),
            Some(Key::Char('E'))
        );
    }

    #[test]
    fn test_release_and_control_are_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Char('a'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(map_key(release), None);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
    }
}
