//! SlideView: the word slide board and its target.

use crate::core::{SlideRule, WordSlide};
use crate::fb::{FrameBuffer, Tone};
use crate::types::SlidePhase;
use crate::view::{blank, put_stat, GridLayout, Viewport};

#[derive(Debug, Clone, Default)]
pub struct SlideView;

impl SlideView {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, game: &WordSlide, viewport: Viewport) -> FrameBuffer {
        let mut fb = blank(viewport);
        let board = game.board();
        let layout = GridLayout::centered(viewport, board.width(), board.height(), 3);

        layout.draw_frame(&mut fb);
        layout.draw_board(&mut fb, board, game.highlights());

        let x = layout.side_x();
        let mut y = layout.y + 1;
        put_stat(&mut fb, x, y, "TARGET", game.target());
        y += 1;
        put_stat(&mut fb, x, y, "MOVES", &game.moves().to_string());
        y += 1;
        if let Some(left) = game.moves_left() {
            put_stat(&mut fb, x, y, "LEFT", &left.to_string());
            y += 1;
        }
        let rule = match game.rule() {
            SlideRule::Cyclic => "cyclic",
            SlideRule::Compact => "compact",
        };
        put_stat(&mut fb, x, y, "RULE", rule);
        y += 2;
        for line in ["arrows slide", "n new game  q quit"] {
            fb.put_str(x, y, line, Tone::Label);
            y += 1;
        }

        match game.phase() {
            SlidePhase::Menu => layout.draw_overlay(&mut fb, "N FOR NEW GAME"),
            SlidePhase::Won => layout.draw_overlay(&mut fb, "YOU WIN"),
            SlidePhase::Lost => layout.draw_overlay(&mut fb, "OUT OF MOVES"),
            SlidePhase::Playing => {}
        }
        fb
    }
}
