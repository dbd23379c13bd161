//! Word slide tests: layouts, winning lines and move limits

use lettergrid::core::{Board, SlideConfig, SlideRule, WordSlide};
use lettergrid::types::{Axis, Direction, SlideAction, SlidePhase};

fn game_for(word: &str, config: SlideConfig) -> WordSlide {
    let config = SlideConfig {
        target_words: vec![word.to_string()],
        ..config
    };
    let mut game = WordSlide::new(config, 17).unwrap();
    assert!(game.apply_action(SlideAction::NewGame));
    game
}

#[test]
fn test_new_game_layout() {
    let game = game_for("ЛАМПА", SlideConfig::default());
    assert_eq!(game.phase(), SlidePhase::Playing);
    assert_eq!(game.target(), "ЛАМПА");
    assert_eq!(game.board().occupied_count(), 10);
    assert!(game
        .board()
        .cells()
        .iter()
        .flatten()
        .all(|c| "ЛАМП".contains(*c)));
}

#[test]
fn test_word_split_by_blank_never_wins() {
    let mut game = game_for("МЕТРО", SlideConfig::default());
    let board = Board::from_rows(&["МЕ.ТРО", "......", "......", "......", "......", "......"]);
    assert!(game.load_board(board));
    assert_eq!(game.phase(), SlidePhase::Playing);

    // A full cycle of the row never closes the gap.
    for _ in 0..6 {
        assert!(game.shift(Direction::Left));
        assert_eq!(game.phase(), SlidePhase::Playing);
    }
    assert_eq!(game.board().row_string(0), "МЕ ТРО");
    assert_eq!(game.moves(), 6);
}

#[test]
fn test_target_lines_up_after_shifts() {
    let mut game = game_for("КОТ", SlideConfig::default());
    let board = Board::from_rows(&["ОТ...К", "......", "......", "......", "......", "......"]);
    assert!(game.load_board(board));
    assert_eq!(game.phase(), SlidePhase::Playing);

    // Up wraps the top row to the bottom.
    assert!(game.shift(Direction::Up));
    assert_eq!(game.phase(), SlidePhase::Playing);
    assert_eq!(game.board().row_string(5), "ОТ   К");

    assert!(game.shift(Direction::Right));
    assert_eq!(game.phase(), SlidePhase::Won);
    let found = game.win_match().unwrap();
    assert_eq!((found.axis, found.line, found.start, found.end), (Axis::Row, 5, 0, 2));
    assert_eq!(game.highlights().len(), 1);
    assert_eq!(game.moves(), 2);
}

#[test]
fn test_compact_rule_reports_blocked_moves() {
    let config = SlideConfig {
        rule: SlideRule::Compact,
        ..SlideConfig::default()
    };
    let mut game = game_for("ЛАМПА", config);
    let board = Board::from_rows(&["Л.....", "А.....", "......", "......", "......", "......"]);
    assert!(game.load_board(board));
    assert!(!game.shift(Direction::Left));
    assert_eq!(game.moves(), 0);
    assert!(game.shift(Direction::Down));
    assert_eq!(game.board().column_string(0), "    ЛА");
}

#[test]
fn test_move_limit_counts_down() {
    let config = SlideConfig {
        move_limit: Some(3),
        ..SlideConfig::default()
    };
    let mut game = game_for("ГРУША", config);
    let board = Board::from_rows(&["Г.....", "......", "......", "......", "......", "......"]);
    assert!(game.load_board(board));
    assert_eq!(game.moves_left(), Some(3));
    game.shift(Direction::Left);
    game.shift(Direction::Left);
    assert_eq!(game.moves_left(), Some(1));
    game.shift(Direction::Left);
    assert_eq!(game.phase(), SlidePhase::Lost);
    assert!(!game.shift(Direction::Left));

    assert!(game.apply_action(SlideAction::NewGame));
    assert_eq!(game.phase(), SlidePhase::Playing);
    assert_eq!(game.moves_left(), Some(3));
}
