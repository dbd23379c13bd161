//! Scoring module - points for burned lines
//!
//! Points are a pure function of the matches found in the lines resolved by
//! one landing. Nothing carries over between landings.

use crate::types::WordMatch;

/// Point values used by [`calculate_score`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ScoreRules {
    /// Flat amount for any resolution that found at least one word.
    pub base_line_score: u32,
    /// Points per letter of every found word.
    pub word_bonus: u32,
    /// The featured word; matching it exactly earns `word_of_day_bonus`.
    pub word_of_day: String,
    pub word_of_day_bonus: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            base_line_score: 100,
            word_bonus: 10,
            word_of_day: "МЕТРОПОЛИС".to_string(),
            word_of_day_bonus: 1000,
        }
    }
}

/// Points for one set of matches. No matches, no points.
pub fn calculate_score(matches: &[WordMatch], rules: &ScoreRules) -> u32 {
    if matches.is_empty() {
        return 0;
    }
    let word_of_day = rules.word_of_day.to_uppercase();
    matches.iter().fold(rules.base_line_score, |points, m| {
        let mut points = points.saturating_add(
            (m.word.chars().count() as u32).saturating_mul(rules.word_bonus),
        );
        if m.word == word_of_day {
            points = points.saturating_add(rules.word_of_day_bonus);
        }
        points
    })
}

/// Running total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    points: u32,
}

impl Score {
    pub fn add(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn reset(&mut self) {
        self.points = 0;
    }
}
