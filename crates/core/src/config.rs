//! Game configuration, loadable from JSON.
//!
//! Every section and field has a default, so a config file only needs the
//! values it overrides:
//!
//! ```
//! use lettergrid_core::config::GameConfig;
//!
//! let config: GameConfig = serde_json::from_str(r#"{ "slide": { "size": 5 } }"#).unwrap();
//! assert_eq!(config.slide.size, 5);
//! assert_eq!(config.falling.width, 10);
//! assert!(config.validate().is_ok());
//! ```

use std::path::Path;

use crate::board::SlideRule;
use crate::error::ConfigError;
use crate::pieces::PieceShape;
use crate::scoring::ScoreRules;
use crate::types::{
    DROP_INTERVAL_MS, FALLING_HEIGHT, FALLING_WIDTH, FAST_DROP_INTERVAL_MS, MIN_WORD_LENGTH,
    PUZZLE_SIZE, RUNNER_LANES, SHUFFLE_STEP_MS, SLIDE_INITIAL_LETTERS, SLIDE_SIZE,
};

/// Top-level configuration, one section per game.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub falling: FallingConfig,
    pub puzzle: PuzzleConfig,
    pub slide: SlideConfig,
    pub runner: RunnerConfig,
}

impl GameConfig {
    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load configuration from a JSON file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate every section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.falling.validate()?;
        self.puzzle.validate()?;
        self.slide.validate()?;
        self.runner.validate()
    }
}

/// Longest scripted shuffle a level may ask for.
pub const MAX_SHUFFLE_STEPS: u32 = 1000;

/// Tallest runner field, in letter rows.
pub const MAX_RUNNER_ROWS: f32 = 500.0;

fn invalid(message: &str) -> ConfigError {
    ConfigError::Validation(message.to_string())
}

/// Falling letters settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FallingConfig {
    pub width: usize,
    pub height: usize,
    pub min_word_len: usize,
    pub drop_interval_ms: u32,
    pub fast_drop_interval_ms: u32,
    /// Shape names drawn from at spawn time (`"single"`, `"i"`, `"o"`, ...).
    pub shapes: Vec<String>,
    pub scoring: ScoreRules,
}

impl Default for FallingConfig {
    fn default() -> Self {
        Self {
            width: FALLING_WIDTH,
            height: FALLING_HEIGHT,
            min_word_len: MIN_WORD_LENGTH,
            drop_interval_ms: DROP_INTERVAL_MS,
            fast_drop_interval_ms: FAST_DROP_INTERVAL_MS,
            shapes: vec!["single".to_string()],
            scoring: ScoreRules::default(),
        }
    }
}

impl FallingConfig {
    /// Distinct upper-case letters of the word of the day, in first-seen order.
    pub fn allowed_letters(&self) -> Vec<char> {
        let mut letters = Vec::new();
        for ch in self.scoring.word_of_day.to_uppercase().chars() {
            if !ch.is_whitespace() && !letters.contains(&ch) {
                letters.push(ch);
            }
        }
        letters
    }

    /// Resolve the configured shape names.
    pub fn piece_shapes(&self) -> Result<Vec<PieceShape>, ConfigError> {
        self.shapes.iter().map(|name| PieceShape::from_name(name)).collect()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 4 || self.height < 4 {
            return Err(invalid("falling board must be at least 4x4"));
        }
        if self.width > i8::MAX as usize || self.height > i8::MAX as usize {
            return Err(invalid("falling board must be at most 127x127"));
        }
        if self.min_word_len == 0 {
            return Err(invalid("falling.min_word_len must be > 0"));
        }
        if self.drop_interval_ms == 0 || self.fast_drop_interval_ms == 0 {
            return Err(invalid("falling drop intervals must be > 0"));
        }
        if self.allowed_letters().is_empty() {
            return Err(invalid("falling.scoring.word_of_day must not be empty"));
        }
        if self.shapes.is_empty() {
            return Err(invalid("falling.shapes must not be empty"));
        }
        self.piece_shapes().map(|_| ())
    }
}

/// Rotation puzzle settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub size: usize,
    /// Level words, one per row of the solved board.
    pub words: Vec<String>,
    pub shuffle_step_ms: u32,
    pub min_shuffle_steps: u32,
    pub max_shuffle_steps: u32,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: PUZZLE_SIZE,
            words: ["СТОЛБ", "ЛАМПА", "КНИГА", "ШТУКА", "ГРУША"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            shuffle_step_ms: SHUFFLE_STEP_MS,
            min_shuffle_steps: 20,
            max_shuffle_steps: 30,
        }
    }
}

impl PuzzleConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(invalid("puzzle.size must be >= 2"));
        }
        if self.words.is_empty() {
            return Err(invalid("puzzle.words must not be empty"));
        }
        if self.words.len() > self.size {
            return Err(invalid("puzzle.words must fit one word per row"));
        }
        if self
            .words
            .iter()
            .any(|w| w.chars().count() < MIN_WORD_LENGTH || w.chars().count() > self.size)
        {
            return Err(invalid("puzzle.words must be between 3 letters and puzzle.size"));
        }
        if self.min_shuffle_steps > self.max_shuffle_steps {
            return Err(invalid("puzzle.min_shuffle_steps must be <= max_shuffle_steps"));
        }
        if self.max_shuffle_steps > MAX_SHUFFLE_STEPS {
            return Err(invalid("puzzle.max_shuffle_steps must be <= 1000"));
        }
        Ok(())
    }
}

/// Word slide settings.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SlideConfig {
    pub size: usize,
    pub initial_letters: usize,
    pub target_words: Vec<String>,
    pub rule: SlideRule,
    /// Moves allowed before the game is lost; unlimited when absent.
    pub move_limit: Option<u32>,
}

impl Default for SlideConfig {
    fn default() -> Self {
        Self {
            size: SLIDE_SIZE,
            initial_letters: SLIDE_INITIAL_LETTERS,
            target_words: ["СТОЛБ", "ЛАМПА", "КНИГА", "ШТУКА", "ГРУША"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            rule: SlideRule::Cyclic,
            move_limit: None,
        }
    }
}

impl SlideConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size < 2 {
            return Err(invalid("slide.size must be >= 2"));
        }
        if self.initial_letters == 0 || self.initial_letters > self.size * self.size {
            return Err(invalid("slide.initial_letters must be in 1..=size*size"));
        }
        if self.target_words.is_empty() {
            return Err(invalid("slide.target_words must not be empty"));
        }
        if self
            .target_words
            .iter()
            .any(|w| w.is_empty() || w.chars().count() > self.size)
        {
            return Err(invalid("slide.target_words must fit in one line"));
        }
        if self.move_limit == Some(0) {
            return Err(invalid("slide.move_limit must be > 0"));
        }
        Ok(())
    }
}

/// Letter runner settings. Distances are in field units, timings in frames.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    pub field_height: f32,
    pub player_height: f32,
    /// Vertical centre of the runner.
    pub player_y: f32,
    pub lane_count: usize,
    pub letter_size: f32,
    pub spawn_rate: u32,
    pub min_spawn_rate: u32,
    pub spawn_rate_step: u32,
    pub fall_speed: f32,
    pub fall_speed_increase: f32,
    pub stuck_spacing: f32,
    /// Chance in percent that a spawned letter is the next needed one.
    pub target_chance: u32,
    pub target_words: Vec<String>,
    pub bonus_spawn_rate: u32,
    pub bonus_duration: u32,
    pub alphabet: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            field_height: 600.0,
            player_height: 40.0,
            player_y: 500.0,
            lane_count: RUNNER_LANES,
            letter_size: 30.0,
            spawn_rate: 60,
            min_spawn_rate: 40,
            spawn_rate_step: 10,
            fall_speed: 3.2,
            fall_speed_increase: 0.6,
            stuck_spacing: 35.0,
            target_chance: 40,
            target_words: ["КОТ", "КРИК", "ЛАМПА"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            bonus_spawn_rate: 300,
            bonus_duration: 300,
            alphabet: "АБВГДЕЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.lane_count == 0 || self.lane_count > 9 {
            return Err(invalid("runner.lane_count must be in 1..=9"));
        }
        if !(self.letter_size > 0.0 && self.field_height.is_finite()) {
            return Err(invalid("runner.letter_size and runner.field_height must be positive"));
        }
        if self.field_height / self.letter_size > MAX_RUNNER_ROWS {
            return Err(invalid("runner field must be at most 500 letters tall"));
        }
        if self.spawn_rate == 0 || self.min_spawn_rate == 0 || self.bonus_spawn_rate == 0 {
            return Err(invalid("runner spawn rates must be > 0"));
        }
        if self.fall_speed <= 0.0 {
            return Err(invalid("runner.fall_speed must be > 0"));
        }
        if self.target_chance > 100 {
            return Err(invalid("runner.target_chance must be in [0, 100]"));
        }
        if self.target_words.is_empty() || self.target_words.iter().any(|w| w.is_empty()) {
            return Err(invalid("runner.target_words must not be empty"));
        }
        if self.alphabet.trim().is_empty() {
            return Err(invalid("runner.alphabet must not be empty"));
        }
        if self.player_y <= 0.0 || self.player_y > self.field_height {
            return Err(invalid("runner.player_y must lie inside the field"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_allowed_letters_are_unique() {
        let config = FallingConfig::default();
        let letters: String = config.allowed_letters().into_iter().collect();
        assert_eq!(letters, "МЕТРОПЛИС");
    }

    #[test]
    fn test_unknown_shape_rejected() {
        let config = FallingConfig {
            shapes: vec!["single".to_string(), "hexomino".to_string()],
            ..FallingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownShape(name)) if name == "hexomino"
        ));
    }

    #[test]
    fn test_puzzle_words_must_fit() {
        let config = PuzzleConfig {
            words: vec!["МЕТРОПОЛИС".to_string()],
            ..PuzzleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_slide_initial_letters_bounded() {
        let config = SlideConfig {
            size: 3,
            initial_letters: 10,
            target_words: vec!["КОТ".to_string()],
            ..SlideConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_runner_field_bounded() {
        let zero_letters = RunnerConfig {
            letter_size: 0.0,
            ..RunnerConfig::default()
        };
        assert!(zero_letters.validate().is_err());

        let endless = RunnerConfig {
            field_height: 1.0e9,
            player_y: 500.0,
            ..RunnerConfig::default()
        };
        assert!(endless.validate().is_err());

        let nan = RunnerConfig {
            field_height: f32::NAN,
            ..RunnerConfig::default()
        };
        assert!(nan.validate().is_err());
    }

    #[test]
    fn test_shuffle_steps_bounded() {
        let config = PuzzleConfig {
            max_shuffle_steps: u32::MAX,
            ..PuzzleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_rule_parses_lowercase() {
        let config: SlideConfig = serde_json::from_str(r#"{ "rule": "compact" }"#).unwrap();
        assert_eq!(config.rule, SlideRule::Compact);
    }
}
