//! Shared pieces of the game views: viewport, side panel stats and the letter grid.
//!
//! Everything here is pure (no I/O) so views can be unit-tested against a
//! framebuffer.

use crate::core::Board;
use crate::fb::{FrameBuffer, Tone};
use crate::types::WordMatch;

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

/// Placement of a letter grid inside the framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Top-left corner of the border.
    pub x: u16,
    pub y: u16,
    pub columns: u16,
    pub rows: u16,
    /// Terminal columns per board cell.
    pub cell_w: u16,
}

impl GridLayout {
    /// Center a `columns` x `rows` grid in the viewport. Sizes past the
    /// terminal coordinate range are clamped.
    pub fn centered(viewport: Viewport, columns: usize, rows: usize, cell_w: u16) -> Self {
        let mut layout = Self {
            x: 0,
            y: 0,
            columns: clamp_u16(columns),
            rows: clamp_u16(rows),
            cell_w,
        };
        layout.x = viewport.width.saturating_sub(layout.frame_w()) / 2;
        layout.y = viewport.height.saturating_sub(layout.frame_h()) / 2;
        layout
    }

    pub fn frame_w(&self) -> u16 {
        self.columns.saturating_mul(self.cell_w).saturating_add(2)
    }

    pub fn frame_h(&self) -> u16 {
        self.rows.saturating_add(2)
    }

    /// Terminal position of board cell `(x, y)`.
    pub fn cell_origin(&self, x: usize, y: usize) -> (u16, u16) {
        let cx = clamp_u16(x).saturating_mul(self.cell_w);
        (
            self.x.saturating_add(1).saturating_add(cx),
            self.y.saturating_add(1).saturating_add(clamp_u16(y)),
        )
    }

    /// Column right of the frame, for side panels.
    pub fn side_x(&self) -> u16 {
        self.x.saturating_add(self.frame_w()).saturating_add(2)
    }

    pub fn draw_frame(&self, fb: &mut FrameBuffer) {
        let (x, y) = self.cell_origin(0, 0);
        for row in 0..self.rows {
            fb.fill_row(x, y.saturating_add(row), self.columns.saturating_mul(self.cell_w), Tone::Field);
        }
        fb.draw_border(self.x, self.y, self.frame_w(), self.frame_h(), Tone::Border);
    }

    /// Draw one board cell; the letter sits in the first column of the cell.
    pub fn put_cell(&self, fb: &mut FrameBuffer, x: usize, y: usize, ch: char, tone: Tone) {
        let (cx, cy) = self.cell_origin(x, y);
        fb.fill_row(cx, cy, self.cell_w, tone);
        fb.put_char(cx.saturating_add(self.cell_w.saturating_sub(1) / 2), cy, ch, tone);
    }

    /// Draw every letter of `board`, lighting up cells covered by a match.
    pub fn draw_board(&self, fb: &mut FrameBuffer, board: &Board, highlights: &[WordMatch]) {
        for y in 0..board.height() {
            for x in 0..board.width() {
                match board.letter(x as i32, y as i32) {
                    Some(letter) => {
                        let tone = if highlights.iter().any(|m| m.contains(x, y)) {
                            Tone::Highlight
                        } else {
                            Tone::Letter
                        };
                        self.put_cell(fb, x, y, letter, tone);
                    }
                    None => self.put_cell(fb, x, y, '·', Tone::Field),
                }
            }
        }
    }

    /// Centered banner across the middle of the frame.
    pub fn draw_overlay(&self, fb: &mut FrameBuffer, text: &str) {
        let len = text.chars().count() as u16;
        let w = self.frame_w();
        let x = self.x.saturating_add(w.saturating_sub(len.saturating_add(2)) / 2);
        let y = self.y.saturating_add(self.frame_h() / 2);
        fb.put_str(x, y, &format!(" {text} "), Tone::Overlay);
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Empty frame covering the viewport.
pub(crate) fn blank(viewport: Viewport) -> FrameBuffer {
    FrameBuffer::new(viewport.width, viewport.height)
}

/// `label value` pair on one row of a side panel.
pub(crate) fn put_stat(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: &str) {
    let end = fb.put_str(x, y, label, Tone::Label);
    fb.put_str(end.saturating_add(1), y, value, Tone::Value);
}
