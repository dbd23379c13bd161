//! Word search over board lines.
//!
//! Lines are read as strings with [`BLANK`] for empty cells. A word never
//! spans a blank. All lookups use the upper-case form of a candidate.

use std::collections::HashSet;
use std::path::Path;

use crate::board::Board;
use crate::error::DictionaryError;
use crate::types::{Axis, WordMatch, BLANK, MIN_WORD_LENGTH};

/// Word-membership oracle.
///
/// Candidates are passed upper-cased.
pub trait Dictionary {
    fn is_word(&self, candidate: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_word(&self, candidate: &str) -> bool {
        self(candidate)
    }
}

/// Words that come with the binary: everyday nouns spelled from the letters
/// of the default word of the day, plus the puzzle and runner words.
const BUILTIN_WORDS: &str = include_str!("builtin_words.txt");

/// A dictionary backed by a set of upper-case words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse one word per line. Blank lines and `#` comments are skipped.
    pub fn parse(text: &str) -> Self {
        text.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect()
    }

    /// Read a word-list file.
    pub fn load(path: &Path) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&text);
        tracing::info!(path = %path.display(), words = list.len(), "loaded dictionary");
        Ok(list)
    }

    /// The word list compiled into the crate.
    pub fn builtin() -> Self {
        Self::parse(BUILTIN_WORDS)
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_uppercase())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Self::new();
        for word in iter {
            list.insert(word.as_ref());
        }
        list
    }
}

impl Dictionary for WordList {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.contains(candidate)
    }
}

/// A fixed, ordered list of words the player has to assemble.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetWords {
    words: Vec<String>,
}

impl TargetWords {
    pub fn new<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words.iter().map(|w| w.as_ref().to_uppercase()).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for TargetWords {
    fn is_word(&self, candidate: &str) -> bool {
        self.words.iter().any(|w| w == candidate)
    }
}

/// Brute-force substring scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFinder {
    min_len: usize,
}

impl Default for WordFinder {
    fn default() -> Self {
        Self::new(MIN_WORD_LENGTH)
    }
}

impl WordFinder {
    pub fn new(min_len: usize) -> Self {
        Self {
            min_len: min_len.max(1),
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Find every dictionary word in one line.
    ///
    /// For each non-blank start, lengths from `min_len` upward are tested
    /// until a blank would be crossed. O(n²) lookups for a line of length n.
    pub fn find_in_line<D: Dictionary + ?Sized>(
        &self,
        line: &str,
        index: usize,
        axis: Axis,
        dict: &D,
    ) -> Vec<WordMatch> {
        let chars: Vec<char> = line.chars().collect();
        let mut matches = Vec::new();
        if chars.len() < self.min_len {
            return matches;
        }

        let mut seen: HashSet<(Axis, usize, usize, usize, String)> = HashSet::new();
        for start in 0..chars.len() {
            if chars[start] == BLANK {
                continue;
            }
            // Length of the non-blank run beginning at `start`.
            let run = chars[start..].iter().take_while(|&&c| c != BLANK).count();
            for len in self.min_len..=run {
                let candidate: String = chars[start..start + len]
                    .iter()
                    .collect::<String>()
                    .to_uppercase();
                if !dict.is_word(&candidate) {
                    continue;
                }
                let end = start + len - 1;
                if seen.insert((axis, index, start, end, candidate.clone())) {
                    matches.push(WordMatch::new(index, start, end, &candidate, axis));
                }
            }
        }
        matches
    }

    /// Scan one board line.
    pub fn scan_line<D: Dictionary + ?Sized>(
        &self,
        board: &Board,
        index: usize,
        axis: Axis,
        dict: &D,
    ) -> Vec<WordMatch> {
        self.find_in_line(&board.line_string(index, axis), index, axis, dict)
    }

    /// Scan every line along one axis.
    pub fn scan_axis<D: Dictionary + ?Sized>(
        &self,
        board: &Board,
        axis: Axis,
        dict: &D,
    ) -> Vec<WordMatch> {
        (0..board.line_count(axis))
            .flat_map(|index| self.scan_line(board, index, axis, dict))
            .collect()
    }

    /// Scan all rows, then all columns.
    pub fn scan_board<D: Dictionary + ?Sized>(&self, board: &Board, dict: &D) -> Vec<WordMatch> {
        let mut matches = self.scan_axis(board, Axis::Row, dict);
        matches.extend(self.scan_axis(board, Axis::Column, dict));
        matches
    }
}

/// Locate `target` as a contiguous run of letters, forward or reversed, in
/// any row or column. Rows are searched before columns.
pub fn find_exact(board: &Board, target: &str) -> Option<WordMatch> {
    let target: Vec<char> = target.to_uppercase().chars().collect();
    if target.is_empty() {
        return None;
    }
    let reversed: Vec<char> = target.iter().rev().copied().collect();

    for axis in [Axis::Row, Axis::Column] {
        for index in 0..board.line_count(axis) {
            let line: Vec<char> = board
                .line_string(index, axis)
                .to_uppercase()
                .chars()
                .collect();
            if line.len() < target.len() {
                continue;
            }
            for start in 0..=line.len() - target.len() {
                let window = &line[start..start + target.len()];
                if window == target.as_slice() || window == reversed.as_slice() {
                    let word: String = target.iter().collect();
                    return Some(WordMatch::new(
                        index,
                        start,
                        start + target.len() - 1,
                        &word,
                        axis,
                    ));
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_in_line_stops_at_blank() {
        let dict = WordList::parse("КОТ\nТОК");
        let finder = WordFinder::default();
        let matches = finder.find_in_line("КО ТОК", 0, Axis::Row, &dict);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].word, "ТОК");
        assert_eq!((matches[0].start, matches[0].end), (3, 5));
    }

    #[test]
    fn test_lookup_is_case_normalized() {
        let dict = WordList::parse("мир");
        assert!(dict.contains("МИР"));
        let matches = WordFinder::default().find_in_line("мир", 2, Axis::Column, &dict);
        assert_eq!(matches[0].word, "МИР");
        assert!(matches[0].is_vertical());
    }

    #[test]
    fn test_closure_dictionary() {
        let dict = |w: &str| w == "ЛЕС";
        let matches = WordFinder::new(3).find_in_line(" ЛЕС ", 1, Axis::Row, &dict);
        assert_eq!(matches, vec![WordMatch::new(1, 1, 3, "ЛЕС", Axis::Row)]);
    }

    #[test]
    fn test_parse_skips_comments() {
        let list = WordList::parse("# header\n\nкот\n  лес  \n");
        assert_eq!(list.len(), 2);
        assert!(list.is_word("ЛЕС"));
    }

    #[test]
    fn test_builtin_has_word_of_day() {
        let list = WordList::builtin();
        assert!(list.is_word("МЕТРОПОЛИС"));
        assert!(list.is_word("МЕТРО"));
    }
}
