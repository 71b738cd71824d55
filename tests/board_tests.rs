//! Board transition tests through the public API

use proptest::prelude::*;
use tui_memory::core::{transition, BoardState};
use tui_memory::types::{BoardEvent, Rgb};

const A: Rgb = Rgb::new(0xDB, 0x50, 0x4A);
const B: Rgb = Rgb::new(0x56, 0xA3, 0xA6);

fn four_card_board() -> BoardState {
    BoardState::new(&[A, B, A, B])
}

fn apply(state: &BoardState, events: &[BoardEvent]) -> BoardState {
    events
        .iter()
        .fold(state.clone(), |s, &e| transition(&s, e))
}

#[test]
fn test_initial_reveal_then_hide() {
    let s = transition(&four_card_board(), BoardEvent::DisableBoard);
    assert!(!s.is_interactive());
    assert!(s.cards().iter().all(|c| c.visible && c.present));

    let s = transition(&s, BoardEvent::ShowAllCards);
    assert!(s.is_interactive());
    assert!(s.cards().iter().all(|c| !c.visible && c.present));
    assert_eq!(s.count(), 0);
}

#[test]
fn test_matching_pair_scenario() {
    let s = apply(
        &four_card_board(),
        &[BoardEvent::DisableBoard, BoardEvent::ShowAllCards],
    );

    let s = transition(&s, BoardEvent::Flip(0));
    assert!(s.cards()[0].visible);
    assert_eq!(s.count(), 1);
    assert_eq!(s.flipped_cards(), &[0]);

    let s = transition(&s, BoardEvent::Flip(2));
    assert!(s.cards()[2].visible);
    assert_eq!(s.count(), 2);
    assert_eq!(s.flipped_cards(), &[0, 2]);
    assert!(s.colors_match(0, 2));

    let s = apply(&s, &[BoardEvent::DisableBoard, BoardEvent::SuccessPair]);
    assert!(!s.cards()[0].present);
    assert!(!s.cards()[2].present);
    assert!(s.flipped_cards().is_empty());
    assert!(s.is_interactive());
}

#[test]
fn test_mismatched_pair_scenario() {
    let s = apply(
        &four_card_board(),
        &[
            BoardEvent::DisableBoard,
            BoardEvent::ShowAllCards,
            BoardEvent::Flip(0),
            BoardEvent::Flip(1),
        ],
    );
    assert!(!s.colors_match(0, 1));

    let s = apply(&s, &[BoardEvent::DisableBoard, BoardEvent::FailPair]);
    assert!(!s.cards()[0].visible);
    assert!(!s.cards()[1].visible);
    assert!(s.cards()[0].present);
    assert!(s.cards()[1].present);
    assert!(s.flipped_cards().is_empty());
    assert!(s.is_interactive());
}

#[test]
fn test_success_then_fail_does_not_panic() {
    let s = apply(
        &four_card_board(),
        &[
            BoardEvent::ShowAllCards,
            BoardEvent::Flip(0),
            BoardEvent::Flip(2),
            BoardEvent::SuccessPair,
        ],
    );
    assert_eq!(transition(&s, BoardEvent::FailPair), s);
}

#[test]
fn test_disable_board_twice_equals_once() {
    let s = four_card_board();
    let once = transition(&s, BoardEvent::DisableBoard);
    let twice = apply(&s, &[BoardEvent::DisableBoard, BoardEvent::DisableBoard]);
    assert_eq!(once, twice);
}

#[test]
fn test_count_ignores_programmatic_reveal_and_hide() {
    let s = apply(
        &four_card_board(),
        &[
            BoardEvent::ShowAllCards,
            BoardEvent::Flip(1),
            BoardEvent::Flip(3),
            BoardEvent::FailPair,
            BoardEvent::ShowAllCards,
        ],
    );
    assert_eq!(s.count(), 2);
}

fn arb_event() -> impl Strategy<Value = BoardEvent> {
    prop_oneof![
        (0usize..8).prop_map(BoardEvent::Flip),
        Just(BoardEvent::DisableBoard),
        Just(BoardEvent::ShowAllCards),
        Just(BoardEvent::SuccessPair),
        Just(BoardEvent::FailPair),
    ]
}

prop_compose! {
    /// A board reached by an arbitrary event history.
    fn arb_state()(events in prop::collection::vec(arb_event(), 0..24)) -> BoardState {
        apply(&BoardState::new(&[A, B, A, B, B, A]), &events)
    }
}

proptest! {
    #[test]
    fn transition_preserves_board_length(state in arb_state(), event in arb_event()) {
        let next = transition(&state, event);
        prop_assert_eq!(next.len(), state.len());
    }

    #[test]
    fn flip_while_locked_is_noop(state in arb_state(), idx in 0usize..8) {
        let locked = transition(&state, BoardEvent::DisableBoard);
        prop_assert_eq!(transition(&locked, BoardEvent::Flip(idx)), locked);
    }

    #[test]
    fn show_all_cards_hides_and_unlocks(state in arb_state()) {
        let next = transition(&state, BoardEvent::ShowAllCards);
        prop_assert!(next.is_interactive());
        prop_assert!(next.cards().iter().all(|c| !c.visible));
        prop_assert_eq!(next.count(), state.count());
        prop_assert_eq!(next.flipped_cards(), state.flipped_cards());
    }

    #[test]
    fn selection_never_exceeds_two(state in arb_state(), event in arb_event()) {
        prop_assert!(transition(&state, event).flipped_cards().len() <= 2);
    }

    #[test]
    fn colors_are_never_changed(state in arb_state(), event in arb_event()) {
        let next = transition(&state, event);
        for (a, b) in state.cards().iter().zip(next.cards()) {
            prop_assert_eq!(a.color, b.color);
        }
    }

    #[test]
    fn matched_cards_stay_matched(state in arb_state(), event in arb_event()) {
        let next = transition(&state, event);
        for (a, b) in state.cards().iter().zip(next.cards()) {
            prop_assert!(a.present || !b.present);
        }
    }
}
