//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the letter grid, the word scanner and the rules of all
//! four games. It does no terminal I/O, so every game:
//!
//! - **Deterministic**: the same seed replays the same game
//! - **Testable**: rules are exercised directly through the state objects
//! - **Portable**: views and input live in their own crates
//!
//! # Module Structure
//!
//! - [`board`]: the letter grid with line extraction, rotation and slides
//! - [`words`]: dictionaries and the substring word finder
//! - [`pieces`]: falling shapes, rotation kicks and letter generation
//! - [`falling`]: falling letters (letter tetris)
//! - [`puzzle`]: rotation puzzle with line locking
//! - [`slide`]: whole-board word slide
//! - [`runner`]: three-lane letter runner
//! - [`scoring`]: points for resolved lines
//! - [`config`] / [`error`]: JSON configuration and startup errors
//! - [`rng`]: seeded LCG shared by every game
//!
//! # Example
//!
//! ```
//! use lettergrid_core::{Board, WordFinder, WordList};
//! use lettergrid_core::types::Axis;
//!
//! let board = Board::from_rows(&["КОТИК", "....."]);
//! let dict = WordList::parse("КОТ\nТИК");
//! let matches = WordFinder::default().scan_axis(&board, Axis::Row, &dict);
//!
//! let words: Vec<&str> = matches.iter().map(|m| m.word.as_str()).collect();
//! assert_eq!(words, ["КОТ", "ТИК"]);
//! ```
//!
//! # Timing
//!
//! The binary runs a fixed 16ms timestep. Falling letters and the puzzle
//! shuffle take elapsed milliseconds in `tick`; the runner counts frames in
//! `update`; the word slide only reacts to moves.

pub mod board;
pub mod config;
pub mod error;
pub mod falling;
pub mod pieces;
pub mod puzzle;
pub mod rng;
pub mod runner;
pub mod scoring;
pub mod slide;
pub mod words;

pub use lettergrid_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SlideRule};
pub use config::{FallingConfig, GameConfig, PuzzleConfig, RunnerConfig, SlideConfig};
pub use error::{ConfigError, DictionaryError};
pub use falling::{FallingLetters, LandingReport};
pub use pieces::{Piece, PieceShape};
pub use puzzle::{Level, LevelGenerator, LineRotation, RotationPuzzle};
pub use rng::SimpleRng;
pub use runner::{Bonus, FallingLetter, LetterRunner, StuckLetter};
pub use scoring::{calculate_score, Score, ScoreRules};
pub use slide::WordSlide;
pub use words::{find_exact, Dictionary, TargetWords, WordFinder, WordList};
