//! BoardView: maps a memory board into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{BoardState, Card, Phase};
use crate::fb::{CellStyle, FrameBuffer, Rgb};

const BG: Rgb = Rgb::new(30, 30, 40);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Everything one frame shows.
#[derive(Debug, Clone, Copy)]
pub struct BoardFrame<'a> {
    pub state: &'a BoardState,
    pub columns: usize,
    pub cursor: Option<usize>,
    pub phase: Phase,
}

pub struct BoardView {
    /// Card width in terminal columns.
    card_w: u16,
    /// Card height in terminal rows.
    card_h: u16,
    /// Blank cells between neighbouring cards.
    gap: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 6x3 reads as roughly square with typical glyph aspect ratio.
        Self {
            card_w: 6,
            card_h: 3,
            gap: 1,
        }
    }
}

impl BoardView {
    pub fn new(card_w: u16, card_h: u16, gap: u16) -> Self {
        Self {
            card_w: card_w.max(1),
            card_h: card_h.max(1),
            gap,
        }
    }

    /// Outer size of the bordered grid for `columns` x `rows` cards.
    pub fn frame_size(&self, columns: usize, rows: usize) -> (u16, u16) {
        let span = |n: usize, size: u16| {
            let n = n as u16;
            n * size + n.saturating_sub(1) * self.gap + 2
        };
        (span(columns, self.card_w), span(rows, self.card_h))
    }

    /// Top-left terminal cell of card `idx`, given the frame origin.
    pub fn card_origin(&self, origin: (u16, u16), columns: usize, idx: usize) -> (u16, u16) {
        let columns = columns.max(1);
        let (col, row) = ((idx % columns) as u16, (idx / columns) as u16);
        (
            origin.0 + 1 + col * (self.card_w + self.gap),
            origin.1 + 1 + row * (self.card_h + self.gap),
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, frame: &BoardFrame<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let columns = frame.columns.max(1);
        let rows = frame.state.len().div_ceil(columns);
        let (frame_w, frame_h) = self.frame_size(columns, rows);
        let origin = (
            viewport.width.saturating_sub(frame_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        );

        fb.fill_rect(
            origin.0 + 1,
            origin.1 + 1,
            frame_w.saturating_sub(2),
            frame_h.saturating_sub(2),
            ' ',
            CellStyle::new(BG, BG),
        );
        fb.draw_box(
            origin.0,
            origin.1,
            frame_w,
            frame_h,
            CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0)),
        );

        for (idx, card) in frame.state.cards().iter().enumerate() {
            let (x, y) = self.card_origin(origin, columns, idx);
            self.draw_card(fb, x, y, card);
            if frame.cursor == Some(idx) {
                self.draw_cursor(fb, x, y, card);
            }
        }

        self.draw_side_panel(fb, frame, viewport, origin, frame_w);

        match frame.phase {
            Phase::Memorizing => self.draw_overlay_text(fb, origin, frame_w, frame_h, "MEMORIZE"),
            Phase::Cleared => self.draw_overlay_text(fb, origin, frame_w, frame_h, "CLEARED"),
            _ => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &BoardFrame<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, viewport, &mut fb);
        fb
    }

    fn draw_card(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card) {
        let (w, h) = (self.card_w, self.card_h);
        if !card.present {
            let slot = CellStyle::new(Rgb::new(90, 90, 100), BG).dim();
            fb.put_char(x + w / 2, y + h / 2, '·', slot);
        } else if card.visible {
            fb.fill_rect(x, y, w, h, '█', CellStyle::new(card.color, BG));
        } else {
            let back = CellStyle::new(Rgb::new(120, 120, 140), Rgb::new(50, 50, 65));
            fb.fill_rect(x, y, w, h, '▒', back);
        }
    }

    fn draw_cursor(&self, fb: &mut FrameBuffer, x: u16, y: u16, card: &Card) {
        let bg = if card.present && card.visible {
            card.color
        } else {
            BG
        };
        let fg = if bg.luma() > 140 {
            Rgb::new(0, 0, 0)
        } else {
            Rgb::new(255, 255, 255)
        };
        let style = CellStyle::new(fg, bg).bold();
        let (right, bottom) = (x + self.card_w - 1, y + self.card_h - 1);
        fb.put_char(x, y, '┏', style);
        fb.put_char(right, y, '┓', style);
        fb.put_char(x, bottom, '┗', style);
        fb.put_char(right, bottom, '┛', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &BoardFrame<'_>,
        viewport: Viewport,
        origin: (u16, u16),
        frame_w: u16,
    ) {
        let panel_x = origin.0.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = CellStyle::default().bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = origin.1;
        fb.put_str(panel_x, y, "FLIPS", label);
        fb.put_u32(panel_x, y + 1, frame.state.count(), value);
        y += 3;

        fb.put_str(panel_x, y, "PAIRS", label);
        fb.put_u32(panel_x, y + 1, frame.state.pairs_remaining() as u32, value);
        y += 3;

        fb.put_str(panel_x, y, "STATE", label);
        fb.put_str(panel_x, y + 1, frame.phase.as_str(), value);
        y += 3;

        let hint = value.dim();
        fb.put_str(panel_x, y, "space flip", hint);
        fb.put_str(panel_x, y + 1, "r new  q quit", hint);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let text_w = text.chars().count() as u16;
        let x = origin.0.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let y = origin.1.saturating_add(frame_h / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_counts_gaps_and_border() {
        let view = BoardView::default();
        // 4 cards of 6 plus 3 gaps plus border.
        assert_eq!(view.frame_size(4, 4), (29, 17));
        assert_eq!(BoardView::new(2, 1, 0).frame_size(2, 2), (6, 4));
    }

    #[test]
    fn card_origin_steps_by_card_and_gap() {
        let view = BoardView::default();
        assert_eq!(view.card_origin((0, 0), 4, 0), (1, 1));
        assert_eq!(view.card_origin((0, 0), 4, 1), (8, 1));
        assert_eq!(view.card_origin((0, 0), 4, 5), (8, 5));
        assert_eq!(view.card_origin((10, 2), 4, 4), (11, 7));
    }
}
