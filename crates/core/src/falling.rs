//! Falling letters - letter pieces drop into a well and burn as words
//!
//! Landing order:
//! 1. the piece is copied into the board;
//! 2. every full row is scanned; a full row holding at least one word is
//!    burned, one without stays;
//! 3. every column is scanned (on the board before rows are removed); all
//!    vertical words score, and full columns holding a word are cleared;
//! 4. all matches are scored together and the next piece spawns.

use crate::board::Board;
use crate::config::FallingConfig;
use crate::error::ConfigError;
use crate::pieces::{generate_letters, Piece, PieceShape};
use crate::rng::SimpleRng;
use crate::scoring::{calculate_score, Score};
use crate::types::{Axis, FallPhase, TetrisAction, WordMatch};
use crate::words::{Dictionary, WordFinder, WordList};

/// What one landing did to the board.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LandingReport {
    /// Full rows removed because they held a word.
    pub burned_rows: Vec<usize>,
    /// Full rows left in place because they held no word.
    pub kept_full_rows: Vec<usize>,
    /// Full columns emptied because they held a word.
    pub cleared_columns: Vec<usize>,
    /// Every scored match: burned rows first, then columns.
    pub matches: Vec<WordMatch>,
    pub points: u32,
}

impl LandingReport {
    pub fn found_words(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Complete falling-letters state.
#[derive(Debug, Clone)]
pub struct FallingLetters<D: Dictionary = WordList> {
    config: FallingConfig,
    shapes: Vec<PieceShape>,
    allowed: Vec<char>,
    dict: D,
    finder: WordFinder,
    board: Board,
    active: Option<Piece>,
    rng: SimpleRng,
    seed: u32,
    phase: FallPhase,
    score: Score,
    drop_timer_ms: u32,
    /// Matches on the settled board, refreshed after every board change.
    highlights: Vec<WordMatch>,
    /// Last landing (consumed by the UI).
    last_event: Option<LandingReport>,
    pieces_landed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
}

impl<D: Dictionary> FallingLetters<D> {
    /// Create a game in the `Ready` phase.
    pub fn new(config: FallingConfig, dict: D, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let shapes = config.piece_shapes()?;
        let allowed = config.allowed_letters();
        Ok(Self {
            board: Board::new(config.width, config.height),
            finder: WordFinder::new(config.min_word_len),
            shapes,
            allowed,
            config,
            dict,
            active: None,
            rng: SimpleRng::new(seed),
            seed,
            phase: FallPhase::Ready,
            score: Score::default(),
            drop_timer_ms: 0,
            highlights: Vec::new(),
            last_event: None,
            pieces_landed: 0,
            episode_id: 0,
        })
    }

    /// Start the game and spawn the first piece.
    pub fn start(&mut self) -> bool {
        if self.phase != FallPhase::Ready {
            return false;
        }
        self.phase = FallPhase::Playing;
        tracing::info!(seed = self.seed, episode = self.episode_id, "falling letters started");
        self.spawn_piece();
        true
    }

    pub fn phase(&self) -> FallPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == FallPhase::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score.points()
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_landed(&self) -> u32 {
        self.pieces_landed
    }

    pub fn word_of_day(&self) -> &str {
        &self.config.scoring.word_of_day
    }

    pub fn allowed_letters(&self) -> &[char] {
        &self.allowed
    }

    pub fn config(&self) -> &FallingConfig {
        &self.config
    }

    /// Words currently visible on the settled board.
    pub fn highlights(&self) -> &[WordMatch] {
        &self.highlights
    }

    /// Take and clear the last landing report.
    pub fn take_last_event(&mut self) -> Option<LandingReport> {
        self.last_event.take()
    }

    /// Current gravity interval.
    pub fn drop_interval_ms(&self, fast_drop: bool) -> u32 {
        if fast_drop {
            self.config.fast_drop_interval_ms
        } else {
            self.config.drop_interval_ms
        }
    }

    /// Write letters straight into the settled board (scripted setups).
    pub fn place_letters(&mut self, cells: impl IntoIterator<Item = (i32, i32, char)>) {
        self.board.place_letters(cells);
        self.refresh_highlights();
    }

    /// Replace the active piece. Rejected unless playing and the piece fits.
    pub fn set_active(&mut self, piece: Piece) -> bool {
        if self.phase != FallPhase::Playing || !piece.fits(&self.board, 0, 0) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Spawn a new piece at a random column of the top row.
    ///
    /// Ends the game when the spawn cells are not free.
    pub fn spawn_piece(&mut self) -> bool {
        if self.phase != FallPhase::Playing {
            return false;
        }

        let shape = self
            .rng
            .choose(&self.shapes)
            .copied()
            .unwrap_or(PieceShape::Single);
        let letters = generate_letters(shape, &self.allowed, &mut self.rng);
        let span = self.board.width().saturating_sub(shape.spawn_width()) + 1;
        let x = self.rng.next_index(span) as i8;
        let piece = Piece::new(shape, x, 0, letters);

        if !piece.fits(&self.board, 0, 0) {
            self.active = None;
            self.phase = FallPhase::GameOver;
            tracing::info!(
                score = self.score.points(),
                pieces = self.pieces_landed,
                "game over: spawn blocked"
            );
            return false;
        }

        self.active = Some(piece);
        self.drop_timer_ms = 0;
        true
    }

    /// Try to move the active piece
    pub(crate) fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if !active.fits(&self.board, dx, dy) {
            return false;
        }
        self.active = Some(active.moved(dx, dy));
        true
    }

    /// Try to rotate the active piece with one-cell kicks
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(rotated) = self.active.as_ref().and_then(|p| p.try_rotate(&self.board)) else {
            return false;
        };
        self.active = Some(rotated);
        true
    }

    /// Copy the active piece into the board and resolve rows and columns.
    pub fn land_piece(&mut self) -> LandingReport {
        let Some(piece) = self.active.take() else {
            return LandingReport::default();
        };
        self.board.place_letters(piece.cells());
        self.pieces_landed = self.pieces_landed.wrapping_add(1);

        let mut report = LandingReport::default();

        for row in self.board.full_lines(Axis::Row) {
            let found = self.finder.scan_line(&self.board, row, Axis::Row, &self.dict);
            if found.is_empty() {
                tracing::debug!(row, line = %self.board.row_string(row), "full row without words stays");
                report.kept_full_rows.push(row);
            } else {
                report.burned_rows.push(row);
                report.matches.extend(found);
            }
        }

        let full_columns = self.board.full_lines(Axis::Column);
        for column in 0..self.board.width() {
            let found = self
                .finder
                .scan_line(&self.board, column, Axis::Column, &self.dict);
            if found.is_empty() {
                continue;
            }
            if full_columns.contains(&column) {
                report.cleared_columns.push(column);
            }
            report.matches.extend(found);
        }

        if !report.burned_rows.is_empty() {
            self.board.remove_rows(&report.burned_rows);
        }
        if !report.cleared_columns.is_empty() {
            self.board.clear_columns(&report.cleared_columns);
        }

        report.points = calculate_score(&report.matches, &self.config.scoring);
        self.score.add(report.points);

        if report.found_words() {
            let words: Vec<&str> = report.matches.iter().map(|m| m.word.as_str()).collect();
            tracing::info!(
                words = ?words,
                burned_rows = report.burned_rows.len(),
                cleared_columns = report.cleared_columns.len(),
                points = report.points,
                total = self.score.points(),
                "piece landed"
            );
        }

        self.refresh_highlights();
        self.last_event = Some(report.clone());
        self.spawn_piece();
        report
    }

    fn refresh_highlights(&mut self) {
        self.highlights = self.finder.scan_board(&self.board, &self.dict);
    }

    /// Main game tick - advance gravity.
    ///
    /// Returns true when the piece moved or landed.
    pub fn tick(&mut self, elapsed_ms: u32, fast_drop: bool) -> bool {
        if self.phase != FallPhase::Playing || self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms < self.drop_interval_ms(fast_drop) {
            return false;
        }
        self.drop_timer_ms = 0;

        if !self.try_move(0, 1) {
            self.land_piece();
        }
        true
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: TetrisAction) -> bool {
        match action {
            TetrisAction::Pause => match self.phase {
                FallPhase::Playing => {
                    self.phase = FallPhase::Paused;
                    true
                }
                FallPhase::Paused => {
                    self.phase = FallPhase::Playing;
                    true
                }
                _ => false,
            },
            TetrisAction::Restart => {
                self.restart();
                true
            }
            _ if self.phase != FallPhase::Playing => {
                tracing::debug!(action = action.as_str(), phase = self.phase.as_str(), "action ignored");
                false
            }
            TetrisAction::MoveLeft => self.try_move(-1, 0),
            TetrisAction::MoveRight => self.try_move(1, 0),
            TetrisAction::SoftDrop => {
                let moved = self.try_move(0, 1);
                if moved {
                    self.drop_timer_ms = 0;
                }
                moved
            }
            TetrisAction::Rotate => self.try_rotate(),
        }
    }

    /// Reinitialise with the starting seed and start again.
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.rng = SimpleRng::new(self.seed);
        self.score.reset();
        self.drop_timer_ms = 0;
        self.highlights.clear();
        self.last_event = None;
        self.pieces_landed = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = FallPhase::Ready;
        self.start();
    }
}
