//! Key mapping from terminal events to game actions.

use crate::types::{Direction, PuzzleAction, RunnerAction, SlideAction, TetrisAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Arrow keys, WASD and vim keys as a direction.
fn direction_of(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(Direction::Right),
        KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(Direction::Down),
        _ => None,
    }
}

/// Map keyboard input to falling-letters actions.
pub fn map_tetris_key(key: KeyEvent) -> Option<TetrisAction> {
    match key.code {
        KeyCode::Char(' ') => Some(TetrisAction::Rotate),
        KeyCode::Char('p' | 'P') => Some(TetrisAction::Pause),
        KeyCode::Char('r' | 'R') => Some(TetrisAction::Restart),
        code => direction_of(code).map(|direction| match direction {
            Direction::Left => TetrisAction::MoveLeft,
            Direction::Right => TetrisAction::MoveRight,
            Direction::Up => TetrisAction::Rotate,
            Direction::Down => TetrisAction::SoftDrop,
        }),
    }
}

/// Map keyboard input to word slide actions.
pub fn map_slide_key(key: KeyEvent) -> Option<SlideAction> {
    match key.code {
        KeyCode::Enter | KeyCode::Char('n' | 'N' | 'r' | 'R') => Some(SlideAction::NewGame),
        code => direction_of(code).map(SlideAction::Shift),
    }
}

/// Map keyboard input to runner actions. Only the horizontal keys steer.
pub fn map_runner_key(key: KeyEvent) -> Option<RunnerAction> {
    match key.code {
        KeyCode::Char('r' | 'R') => Some(RunnerAction::Restart),
        code => match direction_of(code)? {
            Direction::Left => Some(RunnerAction::MoveLeft),
            Direction::Right => Some(RunnerAction::MoveRight),
            Direction::Up | Direction::Down => None,
        },
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Two-step puzzle input: a digit picks a line, then a direction rotates it.
///
/// Left/Right rotate the selected row, Up/Down the selected column. The
/// selection is consumed by the rotation.
#[derive(Debug, Clone, Default)]
pub struct PuzzleInput {
    selected: Option<usize>,
}

impl PuzzleInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected line index (0-based).
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Feed a key. `size` bounds the digits that can be selected.
    pub fn handle_key(&mut self, key: KeyEvent, size: usize) -> Option<PuzzleAction> {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.selected = None;
                Some(PuzzleAction::Start)
            }
            KeyCode::Char('n' | 'N') => {
                self.selected = None;
                Some(PuzzleAction::NewLevel)
            }
            KeyCode::Backspace => {
                self.selected = None;
                None
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if index < size {
                    self.selected = Some(index);
                }
                None
            }
            code => {
                let direction = direction_of(code)?;
                let index = self.selected.take()?;
                Some(PuzzleAction::Rotate { index, direction })
            }
        }
    }
}
