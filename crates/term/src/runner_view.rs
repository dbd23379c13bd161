//! RunnerView: lanes, falling letters and the runner with its stuck stack.
//!
//! The field is scaled so one terminal row covers one letter height.

use crate::core::LetterRunner;
use crate::fb::{FrameBuffer, Tone};
use crate::types::{BonusKind, RunnerPhase};
use crate::view::{blank, put_stat, GridLayout, Viewport};

const LANE_W: u16 = 5;

#[derive(Debug, Clone, Default)]
pub struct RunnerView;

impl RunnerView {
    pub fn new() -> Self {
        Self
    }

    fn rows(game: &LetterRunner) -> usize {
        let config = game.config();
        ((config.field_height / config.letter_size.max(1.0)).round() as usize).max(1)
    }

    /// Field row of a field-space y coordinate, if it is on screen.
    fn row_of(game: &LetterRunner, y: f32) -> Option<usize> {
        let rows = Self::rows(game);
        if y < 0.0 {
            return None;
        }
        let row = (y / game.config().field_height * rows as f32) as usize;
        (row < rows).then_some(row)
    }

    pub fn render(&self, game: &LetterRunner, viewport: Viewport) -> FrameBuffer {
        let mut fb = blank(viewport);
        let rows = Self::rows(game);
        let layout = GridLayout::centered(viewport, game.lane_count(), rows, LANE_W);
        layout.draw_frame(&mut fb);

        for letter in game.letters() {
            if let Some(row) = Self::row_of(game, letter.y) {
                layout.put_cell(&mut fb, letter.lane, row, letter.letter, Tone::Letter);
            }
        }
        for bonus in game.bonuses() {
            if let Some(row) = Self::row_of(game, bonus.y) {
                let mark = match bonus.kind {
                    BonusKind::Clear => '✚',
                    BonusKind::Filter => '◆',
                };
                layout.put_cell(&mut fb, bonus.lane, row, mark, Tone::Selected);
            }
        }

        // Runner and its stack, newest letter on top.
        if let Some(player_row) = Self::row_of(game, game.config().player_y) {
            layout.put_cell(&mut fb, game.lane(), player_row, '▲', Tone::Active);
            for (k, stuck) in game.stuck().iter().enumerate() {
                let Some(row) = player_row.checked_sub(k + 1) else {
                    break;
                };
                let tone = if stuck.is_target { Tone::Highlight } else { Tone::Wrong };
                layout.put_cell(&mut fb, game.lane(), row, stuck.letter, tone);
            }
        }

        self.draw_side_panel(&mut fb, game, &layout);

        match game.phase() {
            RunnerPhase::Won => layout.draw_overlay(&mut fb, "ALL WORDS"),
            RunnerPhase::Lost => layout.draw_overlay(&mut fb, "BURIED"),
            RunnerPhase::Playing => {}
        }
        fb
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &LetterRunner, layout: &GridLayout) {
        let x = layout.side_x();
        let mut y = layout.y + 1;

        put_stat(
            fb,
            x,
            y,
            "WORD",
            &format!("{}/{}", (game.word_index() + 1).min(game.total_words()), game.total_words()),
        );
        y += 1;
        let word = game.current_word();
        let end = fb.put_str(x, y, &game.progress_text(), Tone::Done);
        let rest: String = word.chars().skip(game.progress()).collect();
        fb.put_str(end, y, &rest, Tone::Label);
        y += 2;

        put_stat(fb, x, y, "SPEED", &format!("{:.1}", game.fall_speed()));
        y += 1;
        if game.filter_active() {
            put_stat(fb, x, y, "FILTER", &game.filter_frames_left().to_string());
            y += 1;
        }
        y += 1;
        for line in ["←/→ change lane", "✚ clear  ◆ filter", "r restart  q quit"] {
            fb.put_str(x, y, line, Tone::Label);
            y += 1;
        }
    }
}
