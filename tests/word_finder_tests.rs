//! Word finder tests: substring scanning, blanks and exact targets

use lettergrid::core::{find_exact, Board, WordFinder, WordList};
use lettergrid::types::Axis;

fn spans(board: &Board, dict: &WordList) -> Vec<(String, usize, usize)> {
    WordFinder::default()
        .scan_axis(board, Axis::Row, dict)
        .into_iter()
        .map(|m| (m.word, m.start, m.end))
        .collect()
}

#[test]
fn test_overlapping_words_in_one_line() {
    let dict = WordList::parse("КОТ\nОТИК\nТИК");
    let board = Board::from_rows(&["КОТИК"]);
    assert_eq!(
        spans(&board, &dict),
        vec![
            ("КОТ".to_string(), 0, 2),
            ("ОТИК".to_string(), 1, 4),
            ("ТИК".to_string(), 2, 4),
        ]
    );
}

#[test]
fn test_blank_splits_words() {
    let dict = WordList::parse("КОТ\nОТИК\nТИК");
    let board = Board::from_rows(&["КО.ИК"]);
    assert!(spans(&board, &dict).is_empty());
}

#[test]
fn test_lowercase_dictionary_matches_uppercase_board() {
    let dict = WordList::parse("лес\n  \nдом");
    assert_eq!(dict.len(), 2);
    let board = Board::from_rows(&["ЛЕС.", "Д...", "О...", "М..."]);
    let matches = WordFinder::default().scan_board(&board, &dict);
    let words: Vec<(&str, Axis)> = matches.iter().map(|m| (m.word.as_str(), m.axis)).collect();
    assert_eq!(words, vec![("ЛЕС", Axis::Row), ("ДОМ", Axis::Column)]);
    assert_eq!(matches[1].cells().collect::<Vec<_>>(), vec![(0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_min_len_filters_short_words() {
    let dict = WordList::parse("ОН\nСОН");
    let board = Board::from_rows(&["СОН"]);
    let words: Vec<String> = WordFinder::new(3)
        .scan_axis(&board, Axis::Row, &dict)
        .into_iter()
        .map(|m| m.word)
        .collect();
    assert_eq!(words, vec!["СОН"]);
}

#[test]
fn test_exact_target_forward_reversed_and_vertical() {
    let board = Board::from_rows(&["ОРТЕМ.", "......", "М.....", "Е.....", "Т.....", "Р....."]);
    let reversed = find_exact(&board, "МЕТРО").unwrap();
    assert_eq!((reversed.axis, reversed.line, reversed.start, reversed.end), (Axis::Row, 0, 0, 4));

    let board = Board::from_rows(&["......", "......", "М.....", "Е.....", "Т.....", "Р....."]);
    assert!(find_exact(&board, "МЕТР").is_some());
    assert!(find_exact(&board, "МЕТРО").is_none());
}

#[test]
fn test_exact_target_never_spans_blank() {
    let board = Board::from_rows(&["МЕ.ТРО", "......"]);
    assert!(find_exact(&board, "МЕТРО").is_none());
}

#[test]
fn test_builtin_dictionary_is_not_empty() {
    let dict = WordList::builtin();
    assert!(!dict.is_empty());
    assert!(dict.contains("кот"));
}
