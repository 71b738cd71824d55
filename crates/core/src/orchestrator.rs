//! Orchestrator module - reactive rules that schedule delayed board events
//!
//! Two rules watch the board:
//!
//! - **Initial reveal**: on start, lock the board and schedule `ShowAllCards`
//!   after the reveal delay.
//! - **Pair resolution**: whenever the cards or the selection change, cancel any
//!   pending resolution; if two distinct cards are selected, lock the board and
//!   schedule `SuccessPair` or `FailPair` after the resolve delay.
//!
//! The orchestrator never touches the state. It returns events for the session
//! to dispatch and keeps its timers to itself.

use crate::board::BoardState;
use crate::timer::TimerSlot;
use crate::types::{BoardEvent, RESOLVE_DELAY_MS, REVEAL_DELAY_MS};

#[derive(Debug, Clone)]
pub struct Orchestrator {
    reveal_delay_ms: u32,
    resolve_delay_ms: u32,
    reveal: TimerSlot,
    resolve: TimerSlot,
    started: bool,
}

impl Orchestrator {
    pub fn new(reveal_delay_ms: u32, resolve_delay_ms: u32) -> Self {
        Self {
            reveal_delay_ms,
            resolve_delay_ms,
            reveal: TimerSlot::new(),
            resolve: TimerSlot::new(),
            started: false,
        }
    }

    /// Initial reveal rule. Runs once; later calls return `None`.
    pub fn start(&mut self) -> Option<BoardEvent> {
        if self.started {
            return None;
        }
        self.started = true;
        self.reveal
            .schedule(BoardEvent::ShowAllCards, self.reveal_delay_ms);
        Some(BoardEvent::DisableBoard)
    }

    /// Pair resolution rule, evaluated after every applied event.
    ///
    /// Returns the event to dispatch immediately, if any.
    pub fn observe(&mut self, prev: &BoardState, next: &BoardState) -> Option<BoardEvent> {
        if prev.cards() == next.cards() && prev.flipped_cards() == next.flipped_cards() {
            return None;
        }

        // Whatever was scheduled was computed from an older selection.
        self.resolve.cancel();

        let (a, b) = next.selected_pair()?;
        if a == b {
            // The same card was opened and closed again. It is already face-down,
            // so the selection is released right away.
            return Some(BoardEvent::FailPair);
        }

        let outcome = BoardEvent::resolution(next.colors_match(a, b));
        self.resolve.schedule(outcome, self.resolve_delay_ms);
        tracing::trace!(a, b, outcome = outcome.as_str(), "pair resolution scheduled");
        Some(BoardEvent::DisableBoard)
    }

    /// Let `elapsed_ms` pass on both timers. Nothing fires until [`Self::take_due`].
    pub fn elapse(&mut self, elapsed_ms: u32) {
        self.reveal.elapse(elapsed_ms);
        self.resolve.elapse(elapsed_ms);
    }

    /// Take one due event, the reveal first.
    ///
    /// Dispatch it before asking again: the dispatch may cancel the other timer.
    pub fn take_due(&mut self) -> Option<BoardEvent> {
        self.reveal.take_due().or_else(|| self.resolve.take_due())
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Cancel everything still pending.
    pub fn teardown(&mut self) {
        self.reveal.cancel();
        self.resolve.cancel();
    }

    pub fn reveal_pending(&self) -> bool {
        self.reveal.is_pending()
    }

    pub fn resolve_pending(&self) -> bool {
        self.resolve.is_pending()
    }

    pub fn reveal_remaining_ms(&self) -> Option<u32> {
        self.reveal.remaining_ms()
    }

    pub fn resolve_remaining_ms(&self) -> Option<u32> {
        self.resolve.remaining_ms()
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(REVEAL_DELAY_MS, RESOLVE_DELAY_MS)
    }
}
