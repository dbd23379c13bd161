//! Terminal input for the letter games.
//!
//! Maps `crossterm` key events into the per-game action enums from
//! [`crate::types`]. Terminals rarely report key releases, so holding the
//! drop key is tracked with a release timeout (see [`DropHold`]).

pub mod handler;
pub mod map;

pub use lettergrid_types as types;

pub use handler::DropHold;
pub use map::{map_runner_key, map_slide_key, map_tetris_key, should_quit, PuzzleInput};
