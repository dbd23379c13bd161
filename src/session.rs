//! Game sessions: one game state, its input mapping and its view.
//!
//! The binary drives a `Box<dyn Session>` with a fixed timestep. Sessions
//! never touch the terminal, so they can be exercised with synthetic keys.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::core::{
    FallingLetters, GameConfig, LetterRunner, RotationPuzzle, WordList, WordSlide,
};
use crate::input::{map_runner_key, map_slide_key, map_tetris_key, DropHold, PuzzleInput};
use crate::term::{FallingView, FrameBuffer, PuzzleView, RunnerView, SlideView, Viewport};
use crate::types::FallPhase;

/// Which game to play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GameKind {
    /// Falling letters: build words in full rows and columns.
    Falling,
    /// Rotation puzzle: rotate rows and columns until every word is back.
    Puzzle,
    /// Word slide: shift the whole board to line up the target word.
    Slide,
    /// Letter runner: catch the letters of each word in order.
    Runner,
}

impl GameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameKind::Falling => "falling",
            GameKind::Puzzle => "puzzle",
            GameKind::Slide => "slide",
            GameKind::Runner => "runner",
        }
    }
}

/// One running game as seen by the main loop.
pub trait Session {
    fn kind(&self) -> GameKind;

    /// Feed one key event (press, repeat or release).
    fn handle_key(&mut self, key: KeyEvent);

    /// Advance by one fixed tick.
    fn tick(&mut self, elapsed_ms: u32);

    fn render(&self, viewport: Viewport) -> FrameBuffer;
}

/// Build the session for `kind` from the loaded configuration.
pub fn build_session(
    kind: GameKind,
    config: &GameConfig,
    dict: WordList,
    seed: u32,
) -> anyhow::Result<Box<dyn Session>> {
    let session: Box<dyn Session> = match kind {
        GameKind::Falling => Box::new(FallingSession::new(FallingLetters::new(
            config.falling.clone(),
            dict,
            seed,
        )?)),
        GameKind::Puzzle => {
            Box::new(PuzzleSession::new(RotationPuzzle::new(config.puzzle.clone(), seed)?))
        }
        GameKind::Slide => Box::new(SlideSession::new(WordSlide::new(config.slide.clone(), seed)?)),
        GameKind::Runner => {
            Box::new(RunnerSession::new(LetterRunner::new(config.runner.clone(), seed)?))
        }
    };
    tracing::info!(game = kind.as_str(), seed, "session created");
    Ok(session)
}

fn is_release(key: &KeyEvent) -> bool {
    key.kind == KeyEventKind::Release
}

pub struct FallingSession {
    game: FallingLetters,
    view: FallingView,
    hold: DropHold,
    /// Words found by the most recent scoring landing.
    recent: Vec<String>,
}

impl FallingSession {
    pub fn new(game: FallingLetters) -> Self {
        Self {
            game,
            view: FallingView::default(),
            hold: DropHold::new(),
            recent: Vec::new(),
        }
    }

    pub fn game(&self) -> &FallingLetters {
        &self.game
    }

    pub fn recent_words(&self) -> &[String] {
        &self.recent
    }
}

impl Session for FallingSession {
    fn kind(&self) -> GameKind {
        GameKind::Falling
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.hold.handle_key(key);
        if is_release(&key) {
            return;
        }
        if self.game.phase() == FallPhase::Ready {
            self.game.start();
            return;
        }
        if let Some(action) = map_tetris_key(key) {
            self.game.apply_action(action);
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.hold.update();
        self.game.tick(elapsed_ms, self.hold.is_held());
        if let Some(report) = self.game.take_last_event() {
            if report.found_words() {
                self.recent = report.matches.iter().map(|m| m.word.clone()).collect();
            }
        }
    }

    fn render(&self, viewport: Viewport) -> FrameBuffer {
        self.view.render(&self.game, &self.recent, viewport)
    }
}

pub struct PuzzleSession {
    game: RotationPuzzle,
    view: PuzzleView,
    input: PuzzleInput,
}

impl PuzzleSession {
    pub fn new(game: RotationPuzzle) -> Self {
        Self {
            game,
            view: PuzzleView::new(),
            input: PuzzleInput::new(),
        }
    }

    pub fn game(&self) -> &RotationPuzzle {
        &self.game
    }

    pub fn selected(&self) -> Option<usize> {
        self.input.selected()
    }
}

impl Session for PuzzleSession {
    fn kind(&self) -> GameKind {
        GameKind::Puzzle
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_release(&key) {
            return;
        }
        if let Some(action) = self.input.handle_key(key, self.game.size()) {
            self.game.apply_action(action);
        }
    }

    fn tick(&mut self, elapsed_ms: u32) {
        self.game.tick(elapsed_ms);
    }

    fn render(&self, viewport: Viewport) -> FrameBuffer {
        self.view.render(&self.game, self.input.selected(), viewport)
    }
}

pub struct SlideSession {
    game: WordSlide,
    view: SlideView,
}

impl SlideSession {
    pub fn new(game: WordSlide) -> Self {
        Self {
            game,
            view: SlideView::new(),
        }
    }

    pub fn game(&self) -> &WordSlide {
        &self.game
    }
}

impl Session for SlideSession {
    fn kind(&self) -> GameKind {
        GameKind::Slide
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_release(&key) {
            return;
        }
        if let Some(action) = map_slide_key(key) {
            self.game.apply_action(action);
        }
    }

    // Turn-based: nothing happens between moves.
    fn tick(&mut self, _elapsed_ms: u32) {}

    fn render(&self, viewport: Viewport) -> FrameBuffer {
        self.view.render(&self.game, viewport)
    }
}

pub struct RunnerSession {
    game: LetterRunner,
    view: RunnerView,
}

impl RunnerSession {
    pub fn new(game: LetterRunner) -> Self {
        Self {
            game,
            view: RunnerView::new(),
        }
    }

    pub fn game(&self) -> &LetterRunner {
        &self.game
    }
}

impl Session for RunnerSession {
    fn kind(&self) -> GameKind {
        GameKind::Runner
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if is_release(&key) {
            return;
        }
        if let Some(action) = map_runner_key(key) {
            self.game.apply_action(action);
        }
    }

    // The runner counts frames; one tick is one frame.
    fn tick(&mut self, _elapsed_ms: u32) {
        self.game.update();
    }

    fn render(&self, viewport: Viewport) -> FrameBuffer {
        self.view.render(&self.game, viewport)
    }
}
