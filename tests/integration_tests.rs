//! Integration tests for the game loop: keys -> actions -> session

use crossterm::event::{KeyCode, KeyEvent};

use tui_2048::core::GridEngine;
use tui_2048::input::handle_key_event;
use tui_2048::types::{Direction, GameAction, Outcome, Tile};
use tui_2048::Session;

fn session_from(rows: [[Tile; 4]; 4]) -> Session {
    Session::from_engine(GridEngine::from_rows(&rows, 3).unwrap())
}

#[test]
fn test_session_lifecycle() {
    let mut session = Session::new(4, 4, Some(12345)).unwrap();
    assert_eq!(session.outcome(), Outcome::Continuing);
    assert_eq!(session.episode(), 0);
    assert_eq!(session.snapshot().tile_count(), 2);

    for dir in Direction::ALL {
        let outcome = session.apply_action(GameAction::Move(dir)).unwrap();
        assert_eq!(outcome, Outcome::Continuing);
    }
    assert!(session.snapshot().tile_count() >= 2);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let mut a = Session::new(4, 4, Some(9)).unwrap();
    let mut b = Session::new(4, 4, Some(9)).unwrap();
    for dir in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
        a.apply_action(GameAction::Move(dir)).unwrap();
        b.apply_action(GameAction::Move(dir)).unwrap();
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_keys_drive_the_session() {
    let mut session = session_from([
        [None, None, None, Some(2)],
        [None, None, None, None],
        [None, None, None, None],
        [None, None, None, None],
    ]);

    let action = handle_key_event(KeyEvent::from(KeyCode::Char('a'))).unwrap();
    assert_eq!(action, GameAction::Move(Direction::Left));
    session.apply_action(action).unwrap();

    assert_eq!(session.snapshot().get(0, 0), Some(Some(2)));
    assert_eq!(session.snapshot().tile_count(), 2);
}

#[test]
fn test_win_freezes_the_session_until_restart() {
    let mut session = session_from([
        [Some(1024), Some(1024), None, None],
        [None, None, None, None],
        [None, None, None, None],
        [None, None, None, None],
    ]);

    let outcome = session.apply_action(GameAction::Move(Direction::Left)).unwrap();
    assert_eq!(outcome, Outcome::Won);

    // Further moves are ignored.
    let frozen = session.snapshot();
    let outcome = session.apply_action(GameAction::Move(Direction::Right)).unwrap();
    assert_eq!(outcome, Outcome::Won);
    assert_eq!(session.snapshot(), frozen);

    let outcome = session.apply_action(GameAction::Restart).unwrap();
    assert_eq!(outcome, Outcome::Continuing);
    assert_eq!(session.episode(), 1);
    assert_eq!(session.snapshot().tile_count(), 2);
}

#[test]
fn test_full_grid_with_a_pair_left_keeps_playing() {
    let mut session = session_from([
        [Some(2), Some(4), Some(2), Some(4)],
        [Some(4), Some(2), Some(4), Some(2)],
        [Some(2), Some(4), Some(2), Some(4)],
        [Some(4), Some(2), Some(4), None],
    ]);
    assert_eq!(session.outcome(), Outcome::Continuing);

    // Sliding the last row right fills the grid; the spawn lands at (3, 0) and
    // column 0 ends [2, 4, 2, 2], so a move is still possible.
    let outcome = session.apply_action(GameAction::Move(Direction::Right)).unwrap();
    assert_eq!(outcome, Outcome::Continuing);
    assert!(session.engine().has_legal_move());
}

#[test]
fn test_session_resumed_on_jammed_grid_is_lost() {
    let session = session_from([
        [Some(2), Some(4), Some(2), Some(4)],
        [Some(4), Some(2), Some(4), Some(2)],
        [Some(2), Some(4), Some(2), Some(4)],
        [Some(4), Some(2), Some(4), Some(2)],
    ]);
    assert_eq!(session.outcome(), Outcome::Lost);
}

#[test]
fn test_move_that_jams_the_grid_reports_loss() {
    // Up merges column 0 (2 + 2) and the spawn lands in the freed bottom-left cell.
    let mut session = session_from([
        [Some(2), Some(16), Some(2), Some(8)],
        [Some(2), Some(32), Some(4), Some(2)],
        [Some(8), Some(16), Some(2), Some(8)],
        [Some(4), Some(32), Some(4), Some(2)],
    ]);

    let outcome = session.apply_action(GameAction::Move(Direction::Up)).unwrap();
    let snap = session.snapshot();
    let column: Vec<Tile> = (0..4).map(|r| snap.get(r, 0).unwrap()).collect();
    assert_eq!(column, vec![Some(4), Some(8), Some(4), Some(2)]);
    assert_eq!(outcome, Outcome::Lost);
    assert!(!session.engine().has_legal_move());
}
