//! Integration tests for the input -> session path used by the main loop

use crossterm::event::{KeyCode, KeyEvent};
use tui_memory::core::{GameSession, Phase, SessionConfig};
use tui_memory::input::{handle_key_event, GridCursor, UiAction};
use tui_memory::types::Rgb;

const A: Rgb = Rgb::new(0x9B, 0x9F, 0x4B);
const B: Rgb = Rgb::new(0x72, 0x4E, 0x56);

/// What the game loop does with one key press.
fn press(session: &mut GameSession, cursor: &mut GridCursor, code: KeyCode) {
    match handle_key_event(KeyEvent::from(code)) {
        Some(UiAction::Move(dir)) => cursor.step(dir),
        Some(UiAction::Flip) => session.flip(cursor.index()),
        Some(UiAction::Restart) | None => {}
    }
}

#[test]
fn test_keyboard_pair_match() {
    let config = SessionConfig {
        card_count: 4,
        columns: 2,
        reveal_delay_ms: 10,
        resolve_delay_ms: 10,
        seed: None,
    };
    // Row-major 2x2: A B / B A
    let mut session = GameSession::new(config, &[A, B, B, A]);
    let mut cursor = GridCursor::new(config.columns, config.card_count);
    session.start();
    session.tick(10);

    press(&mut session, &mut cursor, KeyCode::Char(' '));
    press(&mut session, &mut cursor, KeyCode::Down);
    press(&mut session, &mut cursor, KeyCode::Right);
    assert_eq!(cursor.index(), 3);
    press(&mut session, &mut cursor, KeyCode::Enter);

    assert_eq!(session.phase(), Phase::Comparing);
    session.tick(10);
    assert!(!session.state().cards()[0].present);
    assert!(!session.state().cards()[3].present);
    assert_eq!(session.state().pairs_remaining(), 1);
}

#[test]
fn test_flip_same_card_twice_by_keyboard() {
    let config = SessionConfig {
        card_count: 4,
        columns: 2,
        ..SessionConfig::default()
    };
    let mut session = GameSession::new(config, &[A, B, B, A]);
    let mut cursor = GridCursor::new(config.columns, config.card_count);
    session.start();
    session.tick(config.reveal_delay_ms);

    press(&mut session, &mut cursor, KeyCode::Char(' '));
    press(&mut session, &mut cursor, KeyCode::Char(' '));

    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.state().is_interactive());
    assert!(!session.state().cards()[0].visible);
    assert_eq!(session.state().count(), 1);
}
