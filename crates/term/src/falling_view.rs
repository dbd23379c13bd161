//! FallingView: maps [`FallingLetters`] into a terminal framebuffer.

use crate::core::{Dictionary, FallingLetters};
use crate::fb::{FrameBuffer, Tone};
use crate::types::FallPhase;
use crate::view::{blank, put_stat, GridLayout, Viewport};

/// Renderer for the falling-letters game.
#[derive(Debug, Clone)]
pub struct FallingView {
    cell_w: u16,
}

impl Default for FallingView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl FallingView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    /// Render the game. `recent` lists the words found by the last landing.
    pub fn render<D: Dictionary>(
        &self,
        game: &FallingLetters<D>,
        recent: &[String],
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = blank(viewport);
        let board = game.board();
        let layout = GridLayout::centered(viewport, board.width(), board.height(), self.cell_w);

        layout.draw_frame(&mut fb);
        layout.draw_board(&mut fb, board, game.highlights());

        if let Some(piece) = game.active() {
            for (x, y, letter) in piece.cells() {
                if board.is_inside(x, y) {
                    layout.put_cell(&mut fb, x as usize, y as usize, letter, Tone::Active);
                }
            }
        }

        self.draw_side_panel(&mut fb, game, recent, &layout);

        match game.phase() {
            FallPhase::Ready => layout.draw_overlay(&mut fb, "PRESS ANY KEY"),
            FallPhase::Paused => layout.draw_overlay(&mut fb, "PAUSED"),
            FallPhase::GameOver => layout.draw_overlay(&mut fb, "GAME OVER"),
            FallPhase::Playing => {}
        }
        fb
    }

    fn draw_side_panel<D: Dictionary>(
        &self,
        fb: &mut FrameBuffer,
        game: &FallingLetters<D>,
        recent: &[String],
        layout: &GridLayout,
    ) {
        let x = layout.side_x();
        let mut y = layout.y + 1;

        put_stat(fb, x, y, "SCORE", &game.score().to_string());
        y += 1;
        put_stat(fb, x, y, "PIECES", &game.pieces_landed().to_string());
        y += 2;

        fb.put_str(x, y, "WORD OF THE DAY", Tone::Label);
        y += 1;
        fb.put_str(x, y, game.word_of_day(), Tone::Value);
        y += 1;
        let letters: String = game.allowed_letters().iter().collect();
        fb.put_str(x, y, &letters, Tone::Label);
        y += 2;

        if !recent.is_empty() {
            fb.put_str(x, y, "FOUND", Tone::Label);
            y += 1;
            for word in recent {
                fb.put_str(x, y, word, Tone::Done);
                y += 1;
            }
            y += 1;
        }

        for line in ["←/→ move  ↑ rotate", "↓ drop  p pause", "r restart  q quit"] {
            fb.put_str(x, y, line, Tone::Label);
            y += 1;
        }
    }
}
