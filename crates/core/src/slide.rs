//! Word slide - shift the whole board until the target word lines up
//!
//! A fresh game scatters `initial_letters` letters on distinct random cells,
//! cycling through the letters of a random target word. Each move slides the
//! whole board one step; the game is won once the target reads contiguously,
//! forward or reversed, along any row or column.

use crate::board::{Board, SlideRule};
use crate::config::SlideConfig;
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{Direction, SlideAction, SlidePhase, WordMatch};
use crate::words::find_exact;

/// Layout attempts before accepting one that is already solved.
const MAX_LAYOUT_ATTEMPTS: u32 = 16;

/// Complete word slide state.
#[derive(Debug, Clone)]
pub struct WordSlide {
    config: SlideConfig,
    rng: SimpleRng,
    seed: u32,
    board: Board,
    phase: SlidePhase,
    target: String,
    moves: u32,
    win_match: Option<WordMatch>,
    games_played: u32,
}

impl WordSlide {
    /// Create a game sitting in the menu with an empty board.
    pub fn new(config: SlideConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            board: Board::new(config.size, config.size),
            config,
            rng: SimpleRng::new(seed),
            seed,
            phase: SlidePhase::Menu,
            target: String::new(),
            moves: 0,
            win_match: None,
            games_played: 0,
        })
    }

    /// Pick a target word, lay out a fresh board and start playing.
    pub fn new_game(&mut self) {
        self.target = self
            .rng
            .choose(&self.config.target_words)
            .map(|w| w.to_uppercase())
            .unwrap_or_default();

        for _ in 0..MAX_LAYOUT_ATTEMPTS {
            self.scatter_letters();
            if find_exact(&self.board, &self.target).is_none() {
                break;
            }
        }

        self.phase = SlidePhase::Playing;
        self.moves = 0;
        self.win_match = None;
        self.games_played = self.games_played.wrapping_add(1);
        tracing::info!(target = %self.target, game = self.games_played, "word slide started");
        // Every layout can show the target when the board is tiny.
        self.check_win();
    }

    fn scatter_letters(&mut self) {
        let size = self.config.size;
        let mut positions: Vec<(usize, usize)> =
            (0..size).flat_map(|y| (0..size).map(move |x| (x, y))).collect();
        self.rng.shuffle(&mut positions);

        let letters: Vec<char> = self.target.chars().collect();
        self.board.clear();
        if letters.is_empty() {
            return;
        }
        for (i, &(x, y)) in positions.iter().take(self.config.initial_letters).enumerate() {
            self.board
                .set_letter(x as i32, y as i32, letters[i % letters.len()]);
        }
    }

    /// Slide the board one step. Returns whether a move was made.
    pub fn shift(&mut self, direction: Direction) -> bool {
        if self.phase != SlidePhase::Playing {
            tracing::debug!(phase = self.phase.as_str(), "shift ignored");
            return false;
        }
        if !self.board.shift(direction, self.config.rule) {
            return false;
        }

        self.moves += 1;
        if !self.check_win() && self.moves_left() == Some(0) {
            self.phase = SlidePhase::Lost;
            tracing::info!(target = %self.target, moves = self.moves, "word slide lost");
        }
        true
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: SlideAction) -> bool {
        match action {
            SlideAction::Shift(direction) => self.shift(direction),
            SlideAction::NewGame => {
                self.new_game();
                true
            }
        }
    }

    /// Look for the target on the board; a hit wins the game.
    pub fn check_win(&mut self) -> bool {
        if self.phase != SlidePhase::Playing {
            return self.phase == SlidePhase::Won;
        }
        match find_exact(&self.board, &self.target) {
            Some(found) => {
                tracing::info!(target = %self.target, moves = self.moves, "word slide won");
                self.win_match = Some(found);
                self.phase = SlidePhase::Won;
                true
            }
            None => false,
        }
    }

    /// Replace the board while playing (scripted setups).
    pub fn load_board(&mut self, board: Board) -> bool {
        if self.phase != SlidePhase::Playing
            || board.width() != self.config.size
            || board.height() != self.config.size
        {
            return false;
        }
        self.board = board;
        self.check_win();
        true
    }

    pub fn phase(&self) -> SlidePhase {
        self.phase
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn rule(&self) -> SlideRule {
        self.config.rule
    }

    /// Moves remaining before the limit, if there is one.
    pub fn moves_left(&self) -> Option<u32> {
        self.config
            .move_limit
            .map(|limit| limit.saturating_sub(self.moves))
    }

    /// Where the target was found, once won.
    pub fn win_match(&self) -> Option<&WordMatch> {
        self.win_match.as_ref()
    }

    pub fn highlights(&self) -> &[WordMatch] {
        self.win_match.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Axis;

    fn game_for(word: &str) -> WordSlide {
        let config = SlideConfig {
            target_words: vec![word.to_string()],
            ..SlideConfig::default()
        };
        let mut game = WordSlide::new(config, 42).unwrap();
        game.new_game();
        game
    }

    #[test]
    fn test_menu_rejects_moves() {
        let mut game = WordSlide::new(SlideConfig::default(), 1).unwrap();
        assert_eq!(game.phase(), SlidePhase::Menu);
        assert!(!game.shift(Direction::Left));
    }

    #[test]
    fn test_new_game_cycles_target_letters() {
        let game = game_for("кот");
        assert_eq!(game.target(), "КОТ");
        assert_eq!(game.phase(), SlidePhase::Playing);
        assert_eq!(game.board().occupied_count(), 10);

        let count = |ch| game.board().cells().iter().filter(|c| **c == Some(ch)).count();
        // 10 letters cycling К О Т: four К, three О, three Т.
        assert_eq!((count('К'), count('О'), count('Т')), (4, 3, 3));
    }

    #[test]
    fn test_cyclic_shift_always_moves() {
        let mut game = game_for("ШТУКА");
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            if game.phase() != SlidePhase::Playing {
                break;
            }
            assert!(game.shift(direction));
        }
        assert!(game.moves() > 0);
    }

    #[test]
    fn test_reversed_target_wins() {
        let mut game = game_for("КОТ");
        let board = Board::from_rows(&["......", "..ТОК.", "......", "......", "......", "......"]);
        assert!(game.load_board(board));
        assert_eq!(game.phase(), SlidePhase::Won);
        let found = game.win_match().unwrap();
        assert_eq!((found.axis, found.line, found.start), (Axis::Row, 1, 2));
        assert!(!game.shift(Direction::Left));
    }

    #[test]
    fn test_unavoidable_layout_wins_at_once() {
        let config = SlideConfig {
            size: 2,
            initial_letters: 4,
            target_words: vec!["АА".to_string()],
            ..SlideConfig::default()
        };
        let mut game = WordSlide::new(config, 9).unwrap();
        game.new_game();
        assert_eq!(game.phase(), SlidePhase::Won);
        assert!(game.win_match().is_some());
        assert!(!game.shift(Direction::Up));
    }

    #[test]
    fn test_move_limit_loses() {
        let config = SlideConfig {
            target_words: vec!["ЛАМПА".to_string()],
            move_limit: Some(1),
            ..SlideConfig::default()
        };
        let mut game = WordSlide::new(config, 3).unwrap();
        game.new_game();
        let board = Board::from_rows(&["Л.....", "......", "......", "......", "......", "......"]);
        assert!(game.load_board(board));
        assert!(game.shift(Direction::Right));
        assert_eq!(game.phase(), SlidePhase::Lost);
        assert_eq!(game.moves_left(), Some(0));
    }
}
