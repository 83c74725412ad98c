//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Key help shown next to the grid, as (keys, meaning) pairs.
pub const KEY_LEGEND: [(&str, &str); 6] = [
    ("a ←", "left"),
    ("d →", "right"),
    ("w ↑", "up"),
    ("s ↓", "down"),
    ("r", "restart"),
    ("q", "quit"),
];

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(GameAction::Move(Direction::Left))
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(GameAction::Move(Direction::Right))
        }
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(GameAction::Move(Direction::Up))
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(GameAction::Move(Direction::Down))
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn dir(key: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(key))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(dir(KeyCode::Left), Some(GameAction::Move(Direction::Left)));
        assert_eq!(dir(KeyCode::Right), Some(GameAction::Move(Direction::Right)));
        assert_eq!(dir(KeyCode::Up), Some(GameAction::Move(Direction::Up)));
        assert_eq!(dir(KeyCode::Down), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_wasd_keys_any_case() {
        assert_eq!(dir(KeyCode::Char('a')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(dir(KeyCode::Char('D')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(dir(KeyCode::Char('w')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(dir(KeyCode::Char('S')), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_vim_keys() {
        assert_eq!(dir(KeyCode::Char('h')), Some(GameAction::Move(Direction::Left)));
        assert_eq!(dir(KeyCode::Char('l')), Some(GameAction::Move(Direction::Right)));
        assert_eq!(dir(KeyCode::Char('k')), Some(GameAction::Move(Direction::Up)));
        assert_eq!(dir(KeyCode::Char('j')), Some(GameAction::Move(Direction::Down)));
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(dir(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(dir(KeyCode::Char('x')), None);
        assert_eq!(dir(KeyCode::Char(' ')), None);
        // Quit keys are handled by should_quit, not mapped to actions.
        assert_eq!(dir(KeyCode::Char('q')), None);
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
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
