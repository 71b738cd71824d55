//! Timer module - single-shot, cancelable delayed dispatches
//!
//! A [`TimerSlot`] owns at most one pending dispatch. Scheduling replaces the
//! previous one, canceling removes it, and [`TimerSlot::take_due`] takes it out
//! of the slot once its delay has run out. A canceled dispatch no longer exists,
//! so it can never fire.
//!
//! Time only moves when the owner calls `elapse` (or `advance`) with elapsed
//! milliseconds, the same fixed-timestep model the game loop uses for everything
//! else.

use crate::types::BoardEvent;

/// Identifies one scheduled dispatch (unique per slot).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// An event waiting for its delay to elapse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDispatch {
    pub id: TimerId,
    pub event: BoardEvent,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone, Default)]
pub struct TimerSlot {
    pending: Option<PendingDispatch>,
    next_id: u64,
}

impl TimerSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `event` after `delay_ms`, canceling whatever was pending.
    pub fn schedule(&mut self, event: BoardEvent, delay_ms: u32) -> TimerId {
        self.next_id = self.next_id.wrapping_add(1);
        let id = TimerId(self.next_id);
        if let Some(old) = self.pending.replace(PendingDispatch {
            id,
            event,
            remaining_ms: delay_ms,
        }) {
            tracing::trace!(old = old.id.0, new = id.0, "timer replaced");
        }
        id
    }

    /// Drop the pending dispatch, if any.
    pub fn cancel(&mut self) -> Option<PendingDispatch> {
        let canceled = self.pending.take();
        if let Some(p) = canceled {
            tracing::trace!(id = p.id.0, event = p.event.as_str(), "timer canceled");
        }
        canceled
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingDispatch> {
        self.pending.as_ref()
    }

    pub fn remaining_ms(&self) -> Option<u32> {
        self.pending.map(|p| p.remaining_ms)
    }

    /// Let `elapsed_ms` pass without firing.
    pub fn elapse(&mut self, elapsed_ms: u32) {
        if let Some(pending) = self.pending.as_mut() {
            pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        }
    }

    /// Take the pending event if its delay has run out; the slot is then empty.
    pub fn take_due(&mut self) -> Option<BoardEvent> {
        if self.pending?.remaining_ms > 0 {
            return None;
        }
        self.pending.take().map(|p| p.event)
    }

    /// Let `elapsed_ms` pass. Returns the event if the delay ran out; the slot is
    /// then empty.
    pub fn advance(&mut self, elapsed_ms: u32) -> Option<BoardEvent> {
        self.elapse(elapsed_ms);
        self.take_due()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_delay() {
        let mut slot = TimerSlot::new();
        slot.schedule(BoardEvent::ShowAllCards, 100);

        assert_eq!(slot.advance(60), None);
        assert_eq!(slot.remaining_ms(), Some(40));
        assert_eq!(slot.advance(40), Some(BoardEvent::ShowAllCards));
        assert!(!slot.is_pending());
        assert_eq!(slot.advance(1000), None);
    }

    #[test]
    fn test_overshoot_fires() {
        let mut slot = TimerSlot::new();
        slot.schedule(BoardEvent::FailPair, 10);
        assert_eq!(slot.advance(16), Some(BoardEvent::FailPair));
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut slot = TimerSlot::new();
        slot.schedule(BoardEvent::FailPair, 0);
        assert_eq!(slot.advance(0), Some(BoardEvent::FailPair));
    }

    #[test]
    fn test_elapse_keeps_due_event_until_taken() {
        let mut slot = TimerSlot::new();
        slot.schedule(BoardEvent::SuccessPair, 30);
        assert_eq!(slot.take_due(), None);

        slot.elapse(30);
        assert!(slot.is_pending());
        assert_eq!(slot.remaining_ms(), Some(0));
        assert_eq!(slot.take_due(), Some(BoardEvent::SuccessPair));
        assert_eq!(slot.take_due(), None);
    }

    #[test]
    fn test_canceled_never_fires() {
        let mut slot = TimerSlot::new();
        let id = slot.schedule(BoardEvent::SuccessPair, 100);

        let canceled = slot.cancel().unwrap();
        assert_eq!(canceled.id, id);
        assert_eq!(slot.advance(1000), None);
        assert_eq!(slot.cancel(), None);
    }

    #[test]
    fn test_schedule_replaces_pending() {
        let mut slot = TimerSlot::new();
        let first = slot.schedule(BoardEvent::SuccessPair, 100);
        slot.advance(90);
        let second = slot.schedule(BoardEvent::FailPair, 100);

        assert_ne!(first, second);
        assert_eq!(slot.pending().map(|p| p.id), Some(second));
        // The replaced dispatch would have fired here.
        assert_eq!(slot.advance(10), None);
        assert_eq!(slot.advance(90), Some(BoardEvent::FailPair));
    }
}
