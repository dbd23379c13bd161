//! Terminal rendering for the letter games.
//!
//! A small, game-oriented rendering layer: each view draws its game into a
//! [`FrameBuffer`] (pure, unit-testable), and [`TerminalRenderer`] flushes
//! the framebuffer to the terminal as a diff against the previous frame.

pub mod falling_view;
pub mod fb;
pub mod puzzle_view;
pub mod renderer;
pub mod runner_view;
pub mod slide_view;
pub mod view;

pub use lettergrid_core as core;
pub use lettergrid_types as types;

pub use falling_view::FallingView;
pub use fb::{Cell, FrameBuffer, Span, Tone};
pub use puzzle_view::PuzzleView;
pub use renderer::{encode_frame, TerminalRenderer};
pub use runner_view::RunnerView;
pub use slide_view::SlideView;
pub use view::{GridLayout, Viewport};
