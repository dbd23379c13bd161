//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used by every game in the
//! workspace. All types are pure data with no external dependencies, so they
//! can be shared by the game logic, the terminal views and the input mapping.
//!
//! # Board Dimensions
//!
//! | Game | Width | Height |
//! |------|-------|--------|
//! | Falling letters | 10 | 20 |
//! | Rotation puzzle | 5 | 5 |
//! | Word slide | 6 | 6 |
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 800 | Gravity for falling letters |
//! | `FAST_DROP_INTERVAL_MS` | 50 | Gravity while the down key is held |
//! | `SHUFFLE_STEP_MS` | 100 | Delay between scripted puzzle rotations |
//! | `KEY_RELEASE_TIMEOUT_MS` | 150 | Held-key timeout for terminals without release events |
//!
//! # Examples
//!
//! ```
//! use lettergrid_types::{Axis, Direction, WordMatch};
//!
//! let m = WordMatch::new(2, 1, 3, "кот", Axis::Row);
//! assert_eq!(m.word, "КОТ");
//! assert_eq!(m.len(), 3);
//! assert!(m.contains(2, 2));
//!
//! assert_eq!(Direction::Left.axis(), Axis::Row);
//! assert_eq!(Direction::from_str("up"), Some(Direction::Up));
//! ```

/// Placeholder used for empty cells in line strings.
pub const BLANK: char = ' ';

/// Shortest substring the word finder reports.
pub const MIN_WORD_LENGTH: usize = 3;

/// Falling-letters well width (10 columns).
pub const FALLING_WIDTH: usize = 10;

/// Falling-letters well height (20 rows).
pub const FALLING_HEIGHT: usize = 20;

/// Rotation puzzle board side.
pub const PUZZLE_SIZE: usize = 5;

/// Word slide board side.
pub const SLIDE_SIZE: usize = 6;

/// Letters placed on a fresh word slide board.
pub const SLIDE_INITIAL_LETTERS: usize = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval for falling letters.
pub const DROP_INTERVAL_MS: u32 = 800;

/// Gravity interval while fast drop is held.
pub const FAST_DROP_INTERVAL_MS: u32 = 50;

/// Delay between two scripted rotations of the puzzle shuffle.
pub const SHUFFLE_STEP_MS: u32 = 100;

/// Held-key timeout for terminals that never report key release.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Number of lanes on the runner track.
pub const RUNNER_LANES: usize = 3;

/// A board cell: `None` is empty, `Some(letter)` is occupied.
pub type Cell = Option<char>;

/// Orientation of a board line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Horizontal line, indexed by `y`.
    Row,
    /// Vertical line, indexed by `x`.
    Column,
}

impl Axis {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Axis::Column)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Row => "row",
            Axis::Column => "column",
        }
    }
}

/// A one-step direction.
///
/// `Left`/`Right` act on rows, `Up`/`Down` act on columns. `Left` and `Up`
/// move letters toward index 0 (the first letter wraps to the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The kind of line this direction moves along.
    pub fn axis(&self) -> Axis {
        match self {
            Direction::Left | Direction::Right => Axis::Row,
            Direction::Up | Direction::Down => Axis::Column,
        }
    }

    /// True when letters move toward index 0.
    pub fn toward_start(&self) -> bool {
        matches!(self, Direction::Left | Direction::Up)
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Parse direction from string (case-insensitive)
    ///
    /// ```
    /// use lettergrid_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("LEFT"), Some(Direction::Left));
    /// assert_eq!(Direction::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

/// Where a dictionary or target word was found.
///
/// `line` is the row index for horizontal matches and the column index for
/// vertical ones; `start..=end` are offsets along that line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordMatch {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub word: String,
    pub axis: Axis,
}

impl WordMatch {
    /// Build a match; the word is stored upper-cased.
    pub fn new(line: usize, start: usize, end: usize, word: &str, axis: Axis) -> Self {
        Self {
            line,
            start,
            end,
            word: word.to_uppercase(),
            axis,
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.axis.is_vertical()
    }

    /// Number of cells covered by the match.
    pub fn len(&self) -> usize {
        self.end + 1 - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Board coordinates `(x, y)` covered by the match, in line order.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.start..=self.end).map(move |offset| match self.axis {
            Axis::Row => (offset, self.line),
            Axis::Column => (self.line, offset),
        })
    }

    /// Whether the match covers cell `(x, y)`.
    pub fn contains(&self, x: usize, y: usize) -> bool {
        let (line, offset) = match self.axis {
            Axis::Row => (y, x),
            Axis::Column => (x, y),
        };
        line == self.line && offset >= self.start && offset <= self.end
    }
}

/// Lifecycle of a falling-letters game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallPhase {
    /// Created but not started.
    Ready,
    Playing,
    Paused,
    GameOver,
}

/// Lifecycle of a rotation puzzle level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PuzzlePhase {
    /// Solved board shown before the shuffle.
    Preview,
    /// Scripted rotations are being replayed.
    Shuffling,
    Playing,
    Completed,
}

/// Lifecycle of a word slide game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlidePhase {
    Menu,
    Playing,
    Won,
    Lost,
}

/// Lifecycle of a letter runner game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunnerPhase {
    Playing,
    Won,
    Lost,
}

macro_rules! phase_str {
    ($ty:ty { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

phase_str!(FallPhase { Ready => "ready", Playing => "playing", Paused => "paused", GameOver => "game_over" });
phase_str!(PuzzlePhase { Preview => "preview", Shuffling => "shuffling", Playing => "playing", Completed => "completed" });
phase_str!(SlidePhase { Menu => "menu", Playing => "playing", Won => "won", Lost => "lost" });
phase_str!(RunnerPhase { Playing => "playing", Won => "won", Lost => "lost" });

/// Actions accepted by the falling-letters game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TetrisAction {
    MoveLeft,
    MoveRight,
    /// Drop the piece one cell.
    SoftDrop,
    Rotate,
    Pause,
    Restart,
}

impl TetrisAction {
    /// Parse action from string
    ///
    /// ```
    /// use lettergrid_types::TetrisAction;
    ///
    /// assert_eq!(TetrisAction::from_str("moveLeft"), Some(TetrisAction::MoveLeft));
    /// assert_eq!(TetrisAction::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(TetrisAction::MoveLeft),
            "moveright" => Some(TetrisAction::MoveRight),
            "softdrop" => Some(TetrisAction::SoftDrop),
            "rotate" => Some(TetrisAction::Rotate),
            "pause" => Some(TetrisAction::Pause),
            "restart" => Some(TetrisAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TetrisAction::MoveLeft => "moveLeft",
            TetrisAction::MoveRight => "moveRight",
            TetrisAction::SoftDrop => "softDrop",
            TetrisAction::Rotate => "rotate",
            TetrisAction::Pause => "pause",
            TetrisAction::Restart => "restart",
        }
    }
}

/// Actions accepted by the rotation puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Leave the preview and run the shuffle.
    Start,
    /// Rotate row `index` (`Left`/`Right`) or column `index` (`Up`/`Down`).
    Rotate { index: usize, direction: Direction },
    /// Generate a fresh level and show its preview.
    NewLevel,
}

/// Actions accepted by the word slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideAction {
    Shift(Direction),
    NewGame,
}

/// Actions accepted by the letter runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerAction {
    MoveLeft,
    MoveRight,
    Restart,
}

/// Runner pick-ups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BonusKind {
    /// Burn every wrong letter stuck to the runner.
    Clear,
    /// Ignore wrong letters for a while.
    Filter,
}

impl BonusKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BonusKind::Clear => "clear",
            BonusKind::Filter => "filter",
        }
    }
}
