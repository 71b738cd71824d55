//! Terminal input module.
//!
//! Maps `crossterm` key events into [`UiAction`]s and keeps a [`GridCursor`]
//! over the card grid. Board events are produced by the caller from the cursor
//! position, so this crate never touches game state.

pub mod cursor;
pub mod map;

pub use cursor::{Direction, GridCursor};
pub use map::{handle_key_event, should_quit, UiAction};
