//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # Board Dimensions
//!
//! - **Cards**: 16 by default, always an even number (every colour appears twice)
//! - **Columns**: 4 by default, the grid is `cards / columns` rows tall
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `REVEAL_DELAY_MS` | 3000 | Time all cards stay face-up at session start |
//! | `RESOLVE_DELAY_MS` | 800 | Time a selected pair stays visible before it resolves |
//!
//! # Examples
//!
//! ```
//! use tui_memory_types::{BoardEvent, Rgb, DEFAULT_CARD_COUNT, PALETTE};
//!
//! assert_eq!(DEFAULT_CARD_COUNT, 16);
//! assert!(PALETTE.len() >= DEFAULT_CARD_COUNT / 2);
//!
//! let teal = Rgb::from_hex("#063F50").unwrap();
//! assert_eq!(teal, PALETTE[0]);
//!
//! assert_eq!(BoardEvent::Flip(3).as_str(), "flip");
//! ```

use std::fmt;

/// Default number of cards on the board (8 pairs)
pub const DEFAULT_CARD_COUNT: usize = 16;

/// Default number of grid columns
pub const DEFAULT_COLUMNS: usize = 4;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// How long every card stays face-up when a session starts
pub const REVEAL_DELAY_MS: u32 = 3000;

/// How long two selected cards stay face-up before the pair resolves
pub const RESOLVE_DELAY_MS: u32 = 800;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` (or `RRGGBB`) hex string, case-insensitive.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_memory_types::Rgb;
    ///
    /// assert_eq!(Rgb::from_hex("#db504a"), Some(Rgb::new(0xDB, 0x50, 0x4A)));
    /// assert_eq!(Rgb::from_hex("DB504A"), Some(Rgb::new(0xDB, 0x50, 0x4A)));
    /// assert_eq!(Rgb::from_hex("#DB50"), None);
    /// assert_eq!(Rgb::from_hex("#GG504A"), None);
    /// assert_eq!(Rgb::from_hex("#+F504A"), None);
    /// ```
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Perceived brightness in `0..=255`, used to pick readable foregrounds.
    pub fn luma(&self) -> u8 {
        let l = (299 * self.r as u32 + 587 * self.g as u32 + 114 * self.b as u32) / 1000;
        l as u8
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// Default card palette.
///
/// Generated with https://coolors.co/063f50-724e56-db504a-df8328-e3b505-9b9f4b-56a3a6-e6e1c5-ada375
pub const PALETTE: [Rgb; 9] = [
    Rgb::new(0x06, 0x3F, 0x50),
    Rgb::new(0x72, 0x4E, 0x56),
    Rgb::new(0xDB, 0x50, 0x4A),
    Rgb::new(0xDF, 0x83, 0x28),
    Rgb::new(0xE3, 0xB5, 0x05),
    Rgb::new(0x9B, 0x9F, 0x4B),
    Rgb::new(0x56, 0xA3, 0xA6),
    Rgb::new(0xE6, 0xE1, 0xC5),
    Rgb::new(0xAD, 0xA3, 0x75),
];

/// Events accepted by the board state store
///
/// - **Flip**: toggle one card, user originated
/// - **DisableBoard**: lock input while a delayed transition is pending
/// - **ShowAllCards**: end of the initial reveal, turns every card face-down
/// - **SuccessPair**: the two selected cards matched and leave play
/// - **FailPair**: the two selected cards differ and are turned back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardEvent {
    Flip(usize),
    DisableBoard,
    ShowAllCards,
    SuccessPair,
    FailPair,
}

impl BoardEvent {
    /// Stable event name (used in logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            BoardEvent::Flip(_) => "flip",
            BoardEvent::DisableBoard => "disableBoard",
            BoardEvent::ShowAllCards => "showAllCards",
            BoardEvent::SuccessPair => "successPair",
            BoardEvent::FailPair => "failPair",
        }
    }

    /// Pair resolution outcome for a comparison result
    pub fn resolution(colors_match: bool) -> Self {
        if colors_match {
            BoardEvent::SuccessPair
        } else {
            BoardEvent::FailPair
        }
    }
}
