//! Session configuration
//!
//! Board shape and timing for one game session. Defaults match the classic
//! 4x4 board with a three second memorisation window.

use crate::error::ConfigError;
use crate::types::{DEFAULT_CARD_COUNT, DEFAULT_COLUMNS, RESOLVE_DELAY_MS, REVEAL_DELAY_MS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub card_count: usize,
    pub columns: usize,
    pub reveal_delay_ms: u32,
    pub resolve_delay_ms: u32,
    /// Fixed deal seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl SessionConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.card_count == 0 {
            return Err(ConfigError::NoCards);
        }
        if self.card_count % 2 != 0 {
            return Err(ConfigError::OddCardCount(self.card_count));
        }
        if self.columns == 0 {
            return Err(ConfigError::NoColumns);
        }
        if self.card_count % self.columns != 0 {
            return Err(ConfigError::RaggedGrid {
                cards: self.card_count,
                columns: self.columns,
            });
        }
        Ok(())
    }

    pub fn rows(&self) -> usize {
        self.card_count.checked_div(self.columns).unwrap_or(0)
    }

    pub fn pairs(&self) -> usize {
        self.card_count / 2
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            card_count: DEFAULT_CARD_COUNT,
            columns: DEFAULT_COLUMNS,
            reveal_delay_ms: REVEAL_DELAY_MS,
            resolve_delay_ms: RESOLVE_DELAY_MS,
            seed: None,
        }
    }
}
