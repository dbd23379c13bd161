//! Falling letters tests: landing resolution, scoring and lifecycle

use lettergrid::core::{FallingConfig, FallingLetters, Piece, PieceShape, WordList};
use lettergrid::types::{FallPhase, TetrisAction};

fn small_game(words: &str) -> FallingLetters {
    let config = FallingConfig {
        width: 4,
        height: 5,
        ..FallingConfig::default()
    };
    let mut game = FallingLetters::new(config, WordList::parse(words), 11).unwrap();
    assert!(game.start());
    game
}

#[test]
fn test_full_row_without_word_stays() {
    let mut game = small_game("КОТ");
    game.place_letters([(0, 4, 'А'), (1, 4, 'Б'), (2, 4, 'В')]);
    assert!(game.set_active(Piece::single('Г', 3, 4)));

    let report = game.land_piece();
    assert_eq!(report.kept_full_rows, vec![4]);
    assert!(report.burned_rows.is_empty());
    assert_eq!(report.points, 0);
    assert_eq!(game.board().row_string(4), "АБВГ");
    assert_eq!(game.score(), 0);
}

#[test]
fn test_full_row_with_word_burns_and_rows_fall() {
    let mut game = small_game("КОТ");
    game.place_letters([(0, 3, 'Я'), (0, 4, 'К'), (1, 4, 'О'), (2, 4, 'Т')]);
    assert!(game.set_active(Piece::single('А', 3, 4)));

    let report = game.land_piece();
    assert_eq!(report.burned_rows, vec![4]);
    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].word, "КОТ");

    // Everything above the burned row moved down one; a blank row appeared on top.
    assert_eq!(game.board().row_string(4), "Я   ");
    assert_eq!(game.board().row_string(0), "    ");
    assert_eq!(game.score(), 100 + 3 * 10);
    assert_eq!(game.take_last_event(), Some(report));
    assert_eq!(game.take_last_event(), None);
}

#[test]
fn test_full_column_with_word_is_cleared() {
    let mut game = small_game("ДОМА");
    game.place_letters([(1, 1, 'Д'), (1, 2, 'О'), (1, 3, 'М'), (1, 4, 'А')]);
    // Fill the top cell of the column with the landing piece.
    assert!(game.set_active(Piece::single('Ж', 1, 0)));

    let report = game.land_piece();
    assert_eq!(report.cleared_columns, vec![1]);
    assert_eq!(game.board().column_string(1), "     ");
}

#[test]
fn test_word_of_day_bonus() {
    let config = FallingConfig {
        width: 10,
        height: 5,
        ..FallingConfig::default()
    };
    let mut game = FallingLetters::new(config, WordList::parse("метрополис"), 3).unwrap();
    game.start();
    let letters: Vec<(i32, i32, char)> = "МЕТРОПОЛИ"
        .chars()
        .enumerate()
        .map(|(x, ch)| (x as i32, 4, ch))
        .collect();
    game.place_letters(letters);
    assert!(game.set_active(Piece::single('С', 9, 4)));

    let report = game.land_piece();
    assert_eq!(report.points, 100 + 10 * 10 + 1000);
}

#[test]
fn test_highlights_follow_the_settled_board() {
    let mut game = small_game("КОТ");
    assert!(game.highlights().is_empty());
    game.place_letters([(0, 2, 'К'), (1, 2, 'О'), (2, 2, 'Т')]);
    assert_eq!(game.highlights().len(), 1);
    assert_eq!(game.highlights()[0].line, 2);
}

#[test]
fn test_piece_falls_on_tick_and_lands() {
    let mut game = small_game("КОТ");
    assert!(game.set_active(Piece::single('К', 0, 0)));

    let interval = game.drop_interval_ms(false);
    assert!(!game.tick(interval - 1, false));
    assert!(game.tick(1, false));
    assert_eq!(game.active().map(|p| p.y), Some(1));

    // Fast drop uses the shorter interval.
    let fast = game.drop_interval_ms(true);
    for _ in 0..3 {
        assert!(game.tick(fast, true));
    }
    assert_eq!(game.active().map(|p| p.y), Some(4));
    assert!(game.tick(fast, true));
    assert_eq!(game.pieces_landed(), 1);
    assert_eq!(game.board().letter(0, 4), Some('К'));
}

#[test]
fn test_pause_blocks_movement() {
    let mut game = small_game("КОТ");
    assert!(game.apply_action(TetrisAction::Pause));
    assert_eq!(game.phase(), FallPhase::Paused);
    assert!(!game.apply_action(TetrisAction::MoveLeft));
    assert!(!game.tick(10_000, false));
    assert!(game.apply_action(TetrisAction::Pause));
    assert_eq!(game.phase(), FallPhase::Playing);
}

#[test]
fn test_blocked_spawn_ends_game_and_restart_replays_seed() {
    let mut game = small_game("КОТ");
    let first = game.active().cloned();
    let cells: Vec<(i32, i32, char)> = (0..4).map(|x| (x, 0, 'Ы')).collect();
    game.place_letters(cells);
    game.place_letters([(0, 4, 'Ы')]);
    game.set_active(Piece::single('Ы', 1, 4));
    game.land_piece();
    assert!(game.is_game_over());
    assert!(game.active().is_none());

    game.apply_action(TetrisAction::Restart);
    assert_eq!(game.phase(), FallPhase::Playing);
    assert_eq!(game.episode_id(), 1);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(game.active().cloned(), first);
}

#[test]
fn test_unknown_shape_is_rejected() {
    let config = FallingConfig {
        shapes: vec!["single".into(), "hexomino".into()],
        ..FallingConfig::default()
    };
    assert!(FallingLetters::new(config, WordList::new(), 1).is_err());
    assert_eq!(PieceShape::from_name("t").unwrap(), PieceShape::T);
}
