//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the memory game rules and the state machine driving a
//! board. It has **zero dependencies** on terminals or I/O, making it:
//!
//! - **Deterministic**: Same seed deals the same board, time only moves on `tick`
//! - **Testable**: Every rule can be driven step by step from a unit test
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: card grid and the pure [`transition`](board::transition) function
//! - [`timer`]: single-shot, cancelable delayed dispatches
//! - [`orchestrator`]: the initial reveal and pair resolution rules
//! - [`session`]: owns one board, serialises dispatch, advances timers
//! - [`deal`]: random color assignment, every color used exactly twice
//! - [`config`]: board shape and delays
//!
//! # Game Rules
//!
//! - All cards are shown face-up for 3 seconds, then turned face-down
//! - Flipping a face-down card reveals it and counts one flip
//! - Two selected cards lock the board for 800ms, then either leave play
//!   (same color) or turn face-down again
//! - The board is cleared when every pair has been matched
//!
//! # Example
//!
//! ```
//! use tui_memory_core::{GameSession, Phase, SessionConfig};
//! use tui_memory_core::types::Rgb;
//!
//! const A: Rgb = Rgb::new(200, 0, 0);
//! const B: Rgb = Rgb::new(0, 0, 200);
//!
//! let config = SessionConfig {
//!     card_count: 4,
//!     columns: 2,
//!     ..SessionConfig::default()
//! };
//! let mut game = GameSession::new(config, &[A, B, A, B]);
//! game.start();
//! game.tick(config.reveal_delay_ms);
//!
//! game.flip(0);
//! game.flip(2);
//! assert_eq!(game.phase(), Phase::Comparing);
//!
//! game.tick(config.resolve_delay_ms);
//! assert_eq!(game.state().pairs_remaining(), 1);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) every frame with the
//! elapsed milliseconds. Delays fire on the first tick that reaches them.

pub mod board;
pub mod config;
pub mod deal;
pub mod error;
pub mod orchestrator;
pub mod session;
pub mod timer;

pub use tui_memory_types as types;

// Re-export commonly used types for convenience
pub use board::{transition, BoardState, Card};
pub use config::SessionConfig;
pub use deal::{deal_colors, deal_rng};
pub use error::{ConfigError, DealError};
pub use orchestrator::Orchestrator;
pub use session::{GameSession, Phase};
pub use timer::{PendingDispatch, TimerId, TimerSlot};
