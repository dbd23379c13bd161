//! Letter runner - catch falling letters in the order of the target word
//!
//! The runner stands in one of a few lanes near the bottom of the field.
//! Letters and bonuses fall down the lanes; whatever reaches the runner (or
//! the stack of letters already stuck in front of it) sticks. Once the stuck
//! target letters spell the current word in order, the word burns and the
//! next one, faster, begins.
//!
//! Positions are in field units with y growing downward. Timing is counted
//! in frames; the binary calls [`LetterRunner::update`] once per tick.

use crate::config::RunnerConfig;
use crate::error::ConfigError;
use crate::rng::SimpleRng;
use crate::types::{BonusKind, RunnerAction, RunnerPhase};

/// A letter on its way down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingLetter {
    pub lane: usize,
    pub y: f32,
    pub letter: char,
    /// Spawned as the letter the word needed at that moment.
    pub is_target: bool,
}

/// A bonus pick-up on its way down.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bonus {
    pub lane: usize,
    pub y: f32,
    pub kind: BonusKind,
}

/// A letter stuck to the runner, oldest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StuckLetter {
    pub letter: char,
    pub is_target: bool,
}

/// Complete letter runner state.
#[derive(Debug, Clone)]
pub struct LetterRunner {
    config: RunnerConfig,
    words: Vec<Vec<char>>,
    alphabet: Vec<char>,
    rng: SimpleRng,
    seed: u32,
    phase: RunnerPhase,
    lane: usize,
    letters: Vec<FallingLetter>,
    bonuses: Vec<Bonus>,
    stuck: Vec<StuckLetter>,
    word_index: usize,
    /// Length of the in-order prefix of the current word among stuck targets.
    progress: usize,
    fall_speed: f32,
    spawn_rate: u32,
    letter_timer: u32,
    bonus_timer: u32,
    filter_frames: u32,
    frame: u64,
}

impl LetterRunner {
    pub fn new(config: RunnerConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        let words = config
            .target_words
            .iter()
            .map(|w| w.to_uppercase().chars().collect())
            .collect();
        let alphabet = config.alphabet.to_uppercase().chars().filter(|c| !c.is_whitespace()).collect();
        Ok(Self {
            lane: config.lane_count / 2,
            fall_speed: config.fall_speed,
            spawn_rate: config.spawn_rate,
            words,
            alphabet,
            config,
            rng: SimpleRng::new(seed),
            seed,
            phase: RunnerPhase::Playing,
            letters: Vec::new(),
            bonuses: Vec::new(),
            stuck: Vec::new(),
            word_index: 0,
            progress: 0,
            letter_timer: 0,
            bonus_timer: 0,
            filter_frames: 0,
            frame: 0,
        })
    }

    /// Advance one frame. Returns false once the game is over.
    pub fn update(&mut self) -> bool {
        if self.phase != RunnerPhase::Playing {
            return false;
        }
        self.frame += 1;

        if self.filter_frames > 0 {
            self.filter_frames -= 1;
            if self.filter_frames == 0 {
                tracing::debug!("filter bonus expired");
            }
        }

        self.spawn_letters();
        self.spawn_bonuses();
        self.fall();
        self.check_collisions();
        self.check_word();
        self.check_overflow();
        true
    }

    fn spawn_letters(&mut self) {
        self.letter_timer += 1;
        if self.letter_timer < self.spawn_rate {
            return;
        }
        self.letter_timer = 0;

        let lane = self.rng.next_index(self.config.lane_count);
        let (letter, is_target) = match self.next_needed() {
            Some(needed) if self.rng.chance(self.config.target_chance) => (needed, true),
            _ => {
                let wrong = self.wrong_letters();
                (self.rng.choose(&wrong).copied().unwrap_or('?'), false)
            }
        };
        self.letters.push(FallingLetter {
            lane,
            y: -self.config.letter_size,
            letter,
            is_target,
        });
    }

    fn spawn_bonuses(&mut self) {
        self.bonus_timer += 1;
        if self.bonus_timer < self.config.bonus_spawn_rate {
            return;
        }
        self.bonus_timer = 0;

        let lane = self.rng.next_index(self.config.lane_count);
        let kind = if self.rng.chance(50) {
            BonusKind::Clear
        } else {
            BonusKind::Filter
        };
        self.bonuses.push(Bonus {
            lane,
            y: -self.config.letter_size,
            kind,
        });
    }

    fn fall(&mut self) {
        let speed = self.fall_speed;
        let floor = self.config.field_height + self.config.letter_size;
        for letter in &mut self.letters {
            letter.y += speed;
        }
        for bonus in &mut self.bonuses {
            bonus.y += speed;
        }
        self.letters.retain(|l| l.y <= floor);
        self.bonuses.retain(|b| b.y <= floor);
    }

    /// Top edge of the runner plus its stuck stack.
    fn catch_top(&self) -> f32 {
        self.config.player_y
            - (self.config.player_height + self.stuck.len() as f32 * self.config.stuck_spacing)
    }

    fn catches(&self, lane: usize, y: f32, top: f32) -> bool {
        lane == self.lane && y >= top && y <= self.config.player_y
    }

    fn check_collisions(&mut self) {
        let top = self.catch_top();
        let mut i = self.letters.len();
        while i > 0 {
            i -= 1;
            let letter = self.letters[i];
            if !self.catches(letter.lane, letter.y, top) {
                continue;
            }
            self.letters.remove(i);
            if self.filter_active() && !letter.is_target {
                continue;
            }
            self.stuck.push(StuckLetter {
                letter: letter.letter,
                is_target: letter.is_target,
            });
            if letter.is_target {
                self.update_progress();
            }
        }

        let top = self.catch_top();
        let mut i = self.bonuses.len();
        while i > 0 {
            i -= 1;
            let bonus = self.bonuses[i];
            if self.catches(bonus.lane, bonus.y, top) {
                self.bonuses.remove(i);
                self.activate_bonus(bonus.kind);
            }
        }
    }

    fn update_progress(&mut self) {
        let Some(word) = self.words.get(self.word_index) else {
            self.progress = 0;
            return;
        };
        let mut progress = 0;
        for stuck in self.stuck.iter().filter(|s| s.is_target) {
            if word.get(progress) == Some(&stuck.letter) {
                progress += 1;
            }
        }
        self.progress = progress;
    }

    /// Apply a bonus immediately.
    pub fn activate_bonus(&mut self, kind: BonusKind) {
        match kind {
            BonusKind::Clear => self.clear_wrong_letters(),
            BonusKind::Filter => self.filter_frames = self.config.bonus_duration,
        }
        tracing::debug!(bonus = kind.as_str(), "bonus activated");
    }

    /// Burn wrong letters and any target letters beyond what the word needs.
    fn clear_wrong_letters(&mut self) {
        let word = self.words.get(self.word_index).cloned().unwrap_or_default();
        let mut kept: Vec<char> = Vec::new();
        self.stuck.retain(|stuck| {
            if !stuck.is_target {
                return false;
            }
            let needed = word.iter().filter(|&&c| c == stuck.letter).count();
            let have = kept.iter().filter(|&&c| c == stuck.letter).count();
            if have < needed {
                kept.push(stuck.letter);
                true
            } else {
                false
            }
        });
        self.update_progress();
    }

    fn check_word(&mut self) {
        let Some(word) = self.words.get(self.word_index).cloned() else {
            return;
        };
        if word.is_empty() || self.progress < word.len() {
            return;
        }

        self.burn_word(&word);
        self.word_index += 1;
        let finished: String = word.iter().collect();

        if self.word_index >= self.words.len() {
            self.phase = RunnerPhase::Won;
            tracing::info!(word = %finished, frames = self.frame, "runner won");
            return;
        }

        self.progress = 0;
        self.fall_speed += self.config.fall_speed_increase;
        self.spawn_rate = self
            .spawn_rate
            .saturating_sub(self.config.spawn_rate_step)
            .max(self.config.min_spawn_rate);
        tracing::info!(
            word = %finished,
            next = %self.current_word(),
            fall_speed = self.fall_speed,
            spawn_rate = self.spawn_rate,
            "runner word complete"
        );
    }

    /// Remove the word's letters from the stack, matching from the newest.
    fn burn_word(&mut self, word: &[char]) {
        let mut remaining = word.len();
        let mut i = self.stuck.len();
        while i > 0 && remaining > 0 {
            i -= 1;
            let stuck = self.stuck[i];
            if stuck.is_target && stuck.letter == word[remaining - 1] {
                self.stuck.remove(i);
                remaining -= 1;
            }
        }
    }

    fn check_overflow(&mut self) {
        if self.phase != RunnerPhase::Playing {
            return;
        }
        if self.stack_top() < 0.0 {
            self.phase = RunnerPhase::Lost;
            tracing::info!(stuck = self.stuck.len(), "runner lost: stack reached the top");
        }
    }

    /// y of the topmost stuck letter (the runner's head when nothing stuck).
    pub fn stack_top(&self) -> f32 {
        self.config.player_y
            - self.config.player_height / 2.0
            - self.config.stuck_spacing * self.stuck.len() as f32
    }

    pub fn move_left(&mut self) -> bool {
        if self.phase != RunnerPhase::Playing || self.lane == 0 {
            return false;
        }
        self.lane -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.phase != RunnerPhase::Playing || self.lane + 1 >= self.config.lane_count {
            return false;
        }
        self.lane += 1;
        true
    }

    /// Apply a player action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: RunnerAction) -> bool {
        match action {
            RunnerAction::MoveLeft => self.move_left(),
            RunnerAction::MoveRight => self.move_right(),
            RunnerAction::Restart => {
                self.restart();
                true
            }
        }
    }

    /// Start over from the first word with the starting seed.
    pub fn restart(&mut self) {
        self.rng = SimpleRng::new(self.seed);
        self.phase = RunnerPhase::Playing;
        self.lane = self.config.lane_count / 2;
        self.letters.clear();
        self.bonuses.clear();
        self.stuck.clear();
        self.word_index = 0;
        self.progress = 0;
        self.fall_speed = self.config.fall_speed;
        self.spawn_rate = self.config.spawn_rate;
        self.letter_timer = 0;
        self.bonus_timer = 0;
        self.filter_frames = 0;
        self.frame = 0;
        tracing::info!("runner restarted");
    }

    /// Letter the word needs next, if any.
    pub fn next_needed(&self) -> Option<char> {
        self.words
            .get(self.word_index)
            .and_then(|w| w.get(self.progress))
            .copied()
    }

    /// Alphabet letters that do not occur in the current word.
    pub fn wrong_letters(&self) -> Vec<char> {
        let word = self.words.get(self.word_index);
        let wrong: Vec<char> = self
            .alphabet
            .iter()
            .copied()
            .filter(|c| word.map_or(true, |w| !w.contains(c)))
            .collect();
        if wrong.is_empty() {
            self.alphabet.clone()
        } else {
            wrong
        }
    }

    /// Inject a falling letter (scripted setups).
    pub fn push_letter(&mut self, letter: FallingLetter) {
        self.letters.push(letter);
    }

    /// Inject a falling bonus (scripted setups).
    pub fn push_bonus(&mut self, bonus: Bonus) {
        self.bonuses.push(bonus);
    }

    pub fn phase(&self) -> RunnerPhase {
        self.phase
    }

    pub fn lane(&self) -> usize {
        self.lane
    }

    pub fn lane_count(&self) -> usize {
        self.config.lane_count
    }

    pub fn letters(&self) -> &[FallingLetter] {
        &self.letters
    }

    pub fn bonuses(&self) -> &[Bonus] {
        &self.bonuses
    }

    pub fn stuck(&self) -> &[StuckLetter] {
        &self.stuck
    }

    pub fn current_word(&self) -> String {
        self.words
            .get(self.word_index.min(self.words.len().saturating_sub(1)))
            .map(|w| w.iter().collect())
            .unwrap_or_default()
    }

    pub fn word_index(&self) -> usize {
        self.word_index
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    /// Letters of the current word already collected in order.
    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn progress_text(&self) -> String {
        self.current_word().chars().take(self.progress).collect()
    }

    pub fn fall_speed(&self) -> f32 {
        self.fall_speed
    }

    pub fn spawn_rate(&self) -> u32 {
        self.spawn_rate
    }

    pub fn filter_active(&self) -> bool {
        self.filter_frames > 0
    }

    pub fn filter_frames_left(&self) -> u32 {
        self.filter_frames
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}
