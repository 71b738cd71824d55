//! Game session module - owns the board and serialises every dispatch
//!
//! Events go through a FIFO queue. Each one is fully applied, then the
//! orchestrator looks at the old and new state and may queue follow-ups, which
//! run only after the current event is done. Timers advance in [`GameSession::tick`].

use std::collections::VecDeque;

use crate::board::{transition, BoardState};
use crate::config::SessionConfig;
use crate::deal::{deal_colors, deal_rng};
use crate::error::Result;
use crate::orchestrator::Orchestrator;
use crate::types::{BoardEvent, Rgb};

/// Where the board is in its pair cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// All cards shown before the first hide.
    Memorizing,
    Idle,
    OneFlipped,
    /// Two cards selected, waiting on the resolve delay.
    Comparing,
    /// Every pair matched.
    Cleared,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Memorizing => "memorize",
            Phase::Idle => "idle",
            Phase::OneFlipped => "one flipped",
            Phase::Comparing => "comparing",
            Phase::Cleared => "cleared",
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameSession {
    config: SessionConfig,
    state: BoardState,
    orchestrator: Orchestrator,
    queue: VecDeque<BoardEvent>,
    torn_down: bool,
}

impl GameSession {
    /// Create a session for an already dealt board
    pub fn new(config: SessionConfig, colors: &[Rgb]) -> Self {
        Self {
            config,
            state: BoardState::new(colors),
            orchestrator: Orchestrator::new(config.reveal_delay_ms, config.resolve_delay_ms),
            queue: VecDeque::with_capacity(4),
            torn_down: false,
        }
    }

    /// Validate `config`, deal from `palette`, and create a session
    pub fn deal(config: SessionConfig, palette: &[Rgb]) -> Result<Self> {
        config.validate()?;
        let mut rng = deal_rng(config.seed);
        let colors = deal_colors(palette, config.card_count, &mut rng)?;
        Ok(Self::new(config, &colors))
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Current state, replaced after every dispatch
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn phase(&self) -> Phase {
        if self.state.is_cleared() {
            Phase::Cleared
        } else if self.orchestrator.reveal_pending() {
            Phase::Memorizing
        } else {
            match self.state.flipped_cards().len() {
                0 => Phase::Idle,
                1 => Phase::OneFlipped,
                _ => Phase::Comparing,
            }
        }
    }

    /// Run the initial reveal rule. Later calls do nothing.
    pub fn start(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(event) = self.orchestrator.start() {
            self.dispatch(event);
        }
    }

    /// Flip the card at `idx`. Out-of-range indices are ignored.
    pub fn flip(&mut self, idx: usize) {
        if idx >= self.state.len() {
            tracing::warn!(idx, len = self.state.len(), "flip out of range");
            return;
        }
        self.dispatch(BoardEvent::Flip(idx));
    }

    /// Apply `event` and every follow-up it causes, one at a time.
    ///
    /// Nothing is applied before [`GameSession::start`] has locked the board for
    /// the initial reveal, or after [`GameSession::teardown`].
    pub fn dispatch(&mut self, event: BoardEvent) {
        if self.torn_down {
            return;
        }
        if !self.orchestrator.is_started() {
            tracing::warn!(event = event.as_str(), "dispatch before start ignored");
            return;
        }

        self.queue.push_back(event);
        while let Some(event) = self.queue.pop_front() {
            let next = transition(&self.state, event);
            if next == self.state {
                tracing::trace!(event = event.as_str(), "event ignored");
                continue;
            }
            tracing::debug!(
                event = event.as_str(),
                count = next.count(),
                selected = next.flipped_cards().len(),
                interactive = next.is_interactive(),
                "event applied"
            );

            let prev = std::mem::replace(&mut self.state, next);
            if let Some(follow_up) = self.orchestrator.observe(&prev, &self.state) {
                self.queue.push_back(follow_up);
            }

            if self.state.is_cleared() && !prev.is_cleared() {
                tracing::info!(flips = self.state.count(), "board cleared");
            }
        }
    }

    /// Let `elapsed_ms` pass; dispatch whatever timers fire.
    ///
    /// Due events are taken one at a time, so a dispatch that cancels the other
    /// timer keeps it from firing in the same tick.
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.torn_down {
            return;
        }
        self.orchestrator.elapse(elapsed_ms);
        while let Some(event) = self.orchestrator.take_due() {
            self.dispatch(event);
        }
    }

    /// End the session: pending timers are canceled and nothing dispatches again.
    pub fn teardown(&mut self) {
        self.orchestrator.teardown();
        self.queue.clear();
        self.torn_down = true;
    }
}
