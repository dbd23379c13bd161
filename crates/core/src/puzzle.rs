//! Rotation puzzle - rebuild the level words on a torus
//!
//! A level starts solved (one word per row), is shown as a preview, then
//! scrambled by replaying a recorded script of line rotations. The player
//! rotates rows and columns back; every line holding a target word locks.
//!
//! Locks apply both ways: a locked row can't rotate and keeps its cells when
//! a column rotates through it, and a locked column likewise.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::config::{PuzzleConfig, MAX_SHUFFLE_STEPS};
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{Axis, Direction, PuzzleAction, PuzzlePhase, WordMatch};
use crate::words::{TargetWords, WordFinder};

/// One step of a shuffle script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRotation {
    pub index: usize,
    pub direction: Direction,
}

impl LineRotation {
    pub fn axis(&self) -> Axis {
        self.direction.axis()
    }
}

/// A generated level: the solved board and how to scramble it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub words: Vec<String>,
    pub solved: Board,
    pub rotations: Vec<LineRotation>,
}

impl Level {
    /// The board after replaying the whole script.
    pub fn shuffled(&self) -> Board {
        let mut board = self.solved.clone();
        for step in &self.rotations {
            board.rotate(step.index, step.direction);
        }
        board
    }
}

/// Builds levels from a fixed word list.
#[derive(Debug, Clone)]
pub struct LevelGenerator {
    size: usize,
    words: Vec<String>,
    min_steps: u32,
    max_steps: u32,
}

impl LevelGenerator {
    pub fn new(config: &PuzzleConfig) -> Self {
        Self {
            size: config.size,
            words: config.words.iter().map(|w| w.to_uppercase()).collect(),
            min_steps: config.min_shuffle_steps.min(MAX_SHUFFLE_STEPS),
            max_steps: config
                .max_shuffle_steps
                .max(config.min_shuffle_steps)
                .min(MAX_SHUFFLE_STEPS),
        }
    }

    /// Lay one word per row, pad the rest with letters drawn from all level
    /// words, and record a random rotation script.
    pub fn generate(&self, rng: &mut SimpleRng) -> Level {
        let pool: Vec<char> = self.words.iter().flat_map(|w| w.chars()).collect();
        let mut solved = Board::new(self.size, self.size);

        for y in 0..self.size {
            let word: Vec<char> = self
                .words
                .get(y)
                .map(|w| w.chars().collect())
                .unwrap_or_default();
            for x in 0..self.size {
                let letter = match word.get(x) {
                    Some(&letter) => letter,
                    None => rng.choose(&pool).copied().unwrap_or('?'),
                };
                solved.set_letter(x as i32, y as i32, letter);
            }
        }

        let spread = self.max_steps.saturating_sub(self.min_steps).saturating_add(1);
        let count = self.min_steps.saturating_add(rng.next_range(spread));
        let rotations = (0..count)
            .map(|_| {
                let direction = match rng.next_range(4) {
                    0 => Direction::Left,
                    1 => Direction::Right,
                    2 => Direction::Up,
                    _ => Direction::Down,
                };
                LineRotation {
                    index: rng.next_index(self.size),
                    direction,
                }
            })
            .collect();

        Level {
            words: self.words.clone(),
            solved,
            rotations,
        }
    }
}

/// Complete rotation puzzle state.
#[derive(Debug, Clone)]
pub struct RotationPuzzle {
    config: PuzzleConfig,
    generator: LevelGenerator,
    targets: TargetWords,
    finder: WordFinder,
    rng: SimpleRng,
    seed: u32,
    board: Board,
    level: Level,
    phase: PuzzlePhase,
    moves: u32,
    shuffle_step: usize,
    shuffle_timer_ms: u32,
    locked_rows: BTreeSet<usize>,
    locked_columns: BTreeSet<usize>,
    /// Target words present on the board, in target order.
    found: Vec<String>,
    /// Target-word matches on the board (highlights).
    matches: Vec<WordMatch>,
    levels_played: u32,
}

impl RotationPuzzle {
    /// Create a puzzle showing the preview of its first level.
    pub fn new(config: PuzzleConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let generator = LevelGenerator::new(&config);
        let mut rng = SimpleRng::new(seed);
        let level = generator.generate(&mut rng);
        let mut puzzle = Self {
            targets: TargetWords::new(&config.words),
            finder: WordFinder::default(),
            board: level.solved.clone(),
            level,
            generator,
            config,
            rng,
            seed,
            phase: PuzzlePhase::Preview,
            moves: 0,
            shuffle_step: 0,
            shuffle_timer_ms: 0,
            locked_rows: BTreeSet::new(),
            locked_columns: BTreeSet::new(),
            found: Vec::new(),
            matches: Vec::new(),
            levels_played: 0,
        };
        puzzle.refresh_matches();
        tracing::info!(words = ?puzzle.targets.words(), "puzzle level ready");
        Ok(puzzle)
    }

    /// Generate a fresh level and show its solved preview.
    pub fn prepare_level(&mut self) {
        self.level = self.generator.generate(&mut self.rng);
        self.board = self.level.solved.clone();
        self.phase = PuzzlePhase::Preview;
        self.moves = 0;
        self.shuffle_step = 0;
        self.shuffle_timer_ms = 0;
        self.locked_rows.clear();
        self.locked_columns.clear();
        self.found.clear();
        self.levels_played = self.levels_played.wrapping_add(1);
        self.refresh_matches();
        tracing::info!(
            words = ?self.targets.words(),
            level = self.levels_played,
            "puzzle level ready"
        );
    }

    /// Leave the preview and start replaying the shuffle script.
    pub fn start(&mut self) -> bool {
        if self.phase != PuzzlePhase::Preview {
            return false;
        }
        self.phase = PuzzlePhase::Shuffling;
        self.moves = 0;
        self.found.clear();
        self.shuffle_step = 0;
        self.shuffle_timer_ms = 0;
        tracing::info!(steps = self.level.rotations.len(), "shuffling");
        if self.level.rotations.is_empty() {
            self.finish_shuffle();
        }
        true
    }

    /// Advance the shuffle: one scripted rotation per `shuffle_step_ms`.
    ///
    /// Returns true when the board changed or the phase moved on.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.phase != PuzzlePhase::Shuffling {
            return false;
        }

        self.shuffle_timer_ms = self.shuffle_timer_ms.saturating_add(elapsed_ms);
        let mut changed = false;
        while self.shuffle_timer_ms >= self.config.shuffle_step_ms
            && self.shuffle_step < self.level.rotations.len()
        {
            self.shuffle_timer_ms -= self.config.shuffle_step_ms;
            let step = self.level.rotations[self.shuffle_step];
            self.board.rotate(step.index, step.direction);
            self.shuffle_step += 1;
            changed = true;
        }

        if self.shuffle_step >= self.level.rotations.len() {
            self.finish_shuffle();
            changed = true;
        }
        changed
    }

    fn finish_shuffle(&mut self) {
        self.phase = PuzzlePhase::Playing;
        self.shuffle_timer_ms = 0;
        self.refresh_matches();
        tracing::info!("shuffle done, puzzle playing");
    }

    /// Rotate one row (`Left`/`Right`) or column (`Up`/`Down`).
    ///
    /// Rejected unless playing, for a locked line, or when the line has
    /// fewer than two movable cells. A rejected rotation costs no move.
    pub fn rotate(&mut self, index: usize, direction: Direction) -> bool {
        if self.phase != PuzzlePhase::Playing {
            tracing::debug!(phase = self.phase.as_str(), "rotation ignored");
            return false;
        }

        let rotated = match direction.axis() {
            Axis::Row => {
                !self.locked_rows.contains(&index)
                    && self.board.rotate_with_locks(index, direction, |x| {
                        self.locked_columns.contains(&x)
                    })
            }
            Axis::Column => {
                !self.locked_columns.contains(&index)
                    && self.board.rotate_with_locks(index, direction, |y| {
                        self.locked_rows.contains(&y)
                    })
            }
        };
        if !rotated {
            tracing::debug!(index, direction = direction.as_str(), "rotation rejected");
            return false;
        }

        self.moves += 1;
        self.check_words();
        self.check_win();
        true
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: PuzzleAction) -> bool {
        match action {
            PuzzleAction::Start => self.start(),
            PuzzleAction::Rotate { index, direction } => self.rotate(index, direction),
            PuzzleAction::NewLevel => {
                self.prepare_level();
                true
            }
        }
    }

    /// Rescan the board for target words and lock the lines that hold them.
    ///
    /// Locking only happens while playing. Returns the target words that
    /// were not on the board before this check.
    pub fn check_words(&mut self) -> Vec<String> {
        let previous = std::mem::take(&mut self.found);
        self.refresh_matches();

        if self.phase == PuzzlePhase::Playing {
            for m in &self.matches {
                match m.axis {
                    Axis::Row => self.locked_rows.insert(m.line),
                    Axis::Column => self.locked_columns.insert(m.line),
                };
            }
        }

        let newly_found: Vec<String> = self
            .found
            .iter()
            .filter(|w| !previous.contains(w))
            .cloned()
            .collect();
        for word in &newly_found {
            tracing::info!(word = %word, moves = self.moves, "target word assembled, line locked");
        }
        newly_found
    }

    fn refresh_matches(&mut self) {
        self.matches = self.finder.scan_board(&self.board, &self.targets);
        self.found = self
            .targets
            .words()
            .iter()
            .filter(|w| self.matches.iter().any(|m| &m.word == *w))
            .cloned()
            .collect();
    }

    fn check_win(&mut self) {
        if self.phase != PuzzlePhase::Playing || self.targets.is_empty() {
            return;
        }
        if self.found.len() == self.targets.len() {
            self.phase = PuzzlePhase::Completed;
            tracing::info!(moves = self.moves, "puzzle completed");
        }
    }

    pub fn phase(&self) -> PuzzlePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn target_words(&self) -> &[String] {
        self.targets.words()
    }

    pub fn found_words(&self) -> &[String] {
        &self.found
    }

    pub fn is_found(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.found.iter().any(|w| *w == word)
    }

    /// Target-word matches currently on the board.
    pub fn highlights(&self) -> &[WordMatch] {
        &self.matches
    }

    pub fn is_row_locked(&self, y: usize) -> bool {
        self.locked_rows.contains(&y)
    }

    pub fn is_column_locked(&self, x: usize) -> bool {
        self.locked_columns.contains(&x)
    }

    pub fn is_locked(&self, axis: Axis, index: usize) -> bool {
        match axis {
            Axis::Row => self.is_row_locked(index),
            Axis::Column => self.is_column_locked(index),
        }
    }

    pub fn locked_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.locked_rows.iter().copied()
    }

    pub fn locked_columns(&self) -> impl Iterator<Item = usize> + '_ {
        self.locked_columns.iter().copied()
    }

    /// `(done, total)` scripted rotations.
    pub fn shuffle_progress(&self) -> (usize, usize) {
        (self.shuffle_step, self.level.rotations.len())
    }

    /// Replace the board while playing (scripted setups).
    pub fn load_board(&mut self, board: Board) -> bool {
        if board.width() != self.config.size || board.height() != self.config.size {
            return false;
        }
        self.board = board;
        self.check_words();
        self.check_win();
        true
    }
}
