//! PuzzleView: the rotation puzzle board with line numbers and lock marks.

use crate::core::RotationPuzzle;
use crate::fb::{FrameBuffer, Tone};
use crate::types::{Axis, PuzzlePhase};
use crate::view::{blank, put_stat, GridLayout, Viewport};

#[derive(Debug, Clone, Default)]
pub struct PuzzleView;

impl PuzzleView {
    pub fn new() -> Self {
        Self
    }

    /// Render the puzzle. `selected` is the line picked by the player, if any.
    pub fn render(
        &self,
        game: &RotationPuzzle,
        selected: Option<usize>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = blank(viewport);
        let size = game.size();
        let layout = GridLayout::centered(viewport, size, size, 3);

        layout.draw_frame(&mut fb);
        layout.draw_board(&mut fb, game.board(), game.highlights());

        // Locked lines keep their letters on a green field.
        for y in 0..size {
            for x in 0..size {
                if game.is_row_locked(y) || game.is_column_locked(x) {
                    if let Some(letter) = game.board().letter(x as i32, y as i32) {
                        layout.put_cell(&mut fb, x, y, letter, Tone::Locked);
                    }
                }
            }
        }

        self.draw_labels(&mut fb, game, selected, &layout);
        self.draw_side_panel(&mut fb, game, &layout);

        match game.phase() {
            PuzzlePhase::Preview => layout.draw_overlay(&mut fb, "ENTER TO SHUFFLE"),
            PuzzlePhase::Shuffling => {
                let (done, total) = game.shuffle_progress();
                layout.draw_overlay(&mut fb, &format!("SHUFFLING {done}/{total}"));
            }
            PuzzlePhase::Completed => layout.draw_overlay(&mut fb, "SOLVED"),
            PuzzlePhase::Playing => {}
        }
        fb
    }

    /// Line numbers: rows on the left, columns above. Locked lines show `■`.
    fn draw_labels(
        &self,
        fb: &mut FrameBuffer,
        game: &RotationPuzzle,
        selected: Option<usize>,
        layout: &GridLayout,
    ) {
        for i in 0..game.size() {
            let tone = if selected == Some(i) { Tone::Selected } else { Tone::Label };
            let digit = char::from_digit((i + 1) as u32, 10).unwrap_or('?');

            let (_, row_y) = layout.cell_origin(0, i);
            let row_mark = if game.is_locked(Axis::Row, i) { '■' } else { digit };
            fb.put_char(layout.x.saturating_sub(2), row_y, row_mark, tone);

            let (col_x, _) = layout.cell_origin(i, 0);
            let col_mark = if game.is_locked(Axis::Column, i) { '■' } else { digit };
            fb.put_char(col_x.saturating_add(1), layout.y.saturating_sub(1), col_mark, tone);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &RotationPuzzle, layout: &GridLayout) {
        let x = layout.side_x();
        let mut y = layout.y + 1;

        put_stat(fb, x, y, "MOVES", &game.moves().to_string());
        y += 1;
        put_stat(
            fb,
            x,
            y,
            "FOUND",
            &format!("{}/{}", game.found_words().len(), game.target_words().len()),
        );
        y += 2;

        for word in game.target_words() {
            if game.is_found(word) {
                fb.put_str(x, y, &format!("✓ {word}"), Tone::Done);
            } else {
                fb.put_str(x, y, &format!("  {word}"), Tone::Label);
            }
            y += 1;
        }
        y += 1;

        for line in ["1-9 pick a line", "←/→ row  ↑/↓ column", "n new level  q quit"] {
            fb.put_str(x, y, line, Tone::Label);
            y += 1;
        }
    }
}
