//! Board state module - the card grid and its pure transition function
//!
//! [`transition`] is the only way a [`BoardState`] changes. It never mutates its
//! input: every call returns a new state and the caller replaces its reference.

use arrayvec::ArrayVec;

use crate::types::{BoardEvent, Rgb};

/// One board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// Face-up
    pub visible: bool,
    pub color: Rgb,
    /// Still in play (not yet matched)
    pub present: bool,
}

impl Card {
    /// A face-up, in-play card
    pub fn new(color: Rgb) -> Self {
        Self {
            visible: true,
            color,
            present: true,
        }
    }
}

/// Complete board state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardState {
    board: Vec<Card>,
    is_interactive: bool,
    /// Number of flips that turned a card face-up.
    count: u32,
    /// Indices selected since the last resolution, in flip order.
    flipped_cards: ArrayVec<usize, 2>,
}

impl BoardState {
    /// Create the initial state for a dealt set of colors
    ///
    /// Every card starts face-up and present, the selection is empty and the
    /// board accepts input.
    pub fn new(colors: &[Rgb]) -> Self {
        Self {
            board: colors.iter().copied().map(Card::new).collect(),
            is_interactive: true,
            count: 0,
            flipped_cards: ArrayVec::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.board
    }

    pub fn card(&self, idx: usize) -> Option<&Card> {
        self.board.get(idx)
    }

    pub fn len(&self) -> usize {
        self.board.len()
    }

    pub fn is_empty(&self) -> bool {
        self.board.is_empty()
    }

    pub fn is_interactive(&self) -> bool {
        self.is_interactive
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn flipped_cards(&self) -> &[usize] {
        &self.flipped_cards
    }

    /// The two selected indices, if exactly two are selected.
    pub fn selected_pair(&self) -> Option<(usize, usize)> {
        match self.flipped_cards.as_slice() {
            &[a, b] => Some((a, b)),
            _ => None,
        }
    }

    /// Number of pairs not yet matched
    pub fn pairs_remaining(&self) -> usize {
        self.board.iter().filter(|c| c.present).count() / 2
    }

    /// True once every card has been matched
    pub fn is_cleared(&self) -> bool {
        self.board.iter().all(|c| !c.present)
    }

    /// Compare the colors of two cards. Out-of-range indices never match.
    pub fn colors_match(&self, a: usize, b: usize) -> bool {
        match (self.board.get(a), self.board.get(b)) {
            (Some(x), Some(y)) => x.color == y.color,
            _ => false,
        }
    }

    fn flip(&self, idx: usize) -> Self {
        if !self.is_interactive {
            return self.clone();
        }
        let Some(card) = self.board.get(idx).filter(|c| c.present) else {
            return self.clone();
        };
        // A full selection is waiting on its resolution.
        if self.flipped_cards.is_full() {
            return self.clone();
        }

        let was_visible = card.visible;
        let mut next = self.clone();
        next.board[idx].visible = !was_visible;
        if !was_visible {
            next.count += 1;
        }
        // Hiding an already visible card is still recorded as a selection.
        next.flipped_cards.push(idx);
        next
    }

    fn disable(&self) -> Self {
        Self {
            is_interactive: false,
            ..self.clone()
        }
    }

    fn hide_all(&self) -> Self {
        Self {
            board: self
                .board
                .iter()
                .map(|c| Card {
                    visible: false,
                    ..*c
                })
                .collect(),
            is_interactive: true,
            ..self.clone()
        }
    }

    /// Apply `f` to both selected cards, then clear the selection and unlock.
    fn resolve_pair(&self, f: impl Fn(&mut Card)) -> Self {
        let Some((a, b)) = self.selected_pair() else {
            return self.clone();
        };
        if a >= self.board.len() || b >= self.board.len() {
            return self.clone();
        }

        let mut next = self.clone();
        f(&mut next.board[a]);
        f(&mut next.board[b]);
        next.flipped_cards.clear();
        next.is_interactive = true;
        next
    }
}

/// Apply one event to a board state, returning the next state
///
/// Pure and total: invalid input (a flip while locked, a flip of an out-of-range
/// or already matched card, a resolution without exactly two selected cards)
/// returns an unchanged copy.
pub fn transition(state: &BoardState, event: BoardEvent) -> BoardState {
    match event {
        BoardEvent::Flip(idx) => state.flip(idx),
        BoardEvent::DisableBoard => state.disable(),
        BoardEvent::ShowAllCards => state.hide_all(),
        BoardEvent::SuccessPair => state.resolve_pair(|c| c.present = false),
        BoardEvent::FailPair => state.resolve_pair(|c| c.visible = false),
    }
}
