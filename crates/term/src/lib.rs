//! Terminal "game renderer" module.
//!
//! Renders a memory board into a simple framebuffer that is flushed to the
//! terminal with crossterm. No widget toolkit is involved.
//!
//! - [`fb`]: styled character framebuffer
//! - [`board_view`]: pure mapping from board state to framebuffer
//! - [`renderer`]: full and diffed terminal output

pub mod board_view;
pub mod fb;
pub mod renderer;

pub use tui_memory_core as core;
pub use tui_memory_types as types;

pub use board_view::{BoardFrame, BoardView, Viewport};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
