//! Letter runner tests: catching, bonuses, word progress and overflow

use lettergrid::core::{Bonus, FallingLetter, LetterRunner, RunnerConfig};
use lettergrid::types::{BonusKind, RunnerAction, RunnerPhase};

fn runner() -> LetterRunner {
    LetterRunner::new(RunnerConfig::default(), 9).unwrap()
}

/// Drop `letter` just above the runner's head and advance one frame.
fn catch(game: &mut LetterRunner, letter: char, is_target: bool) {
    let y = game.config().player_y - 10.0;
    game.push_letter(FallingLetter {
        lane: game.lane(),
        y,
        letter,
        is_target,
    });
    game.update();
}

#[test]
fn test_starts_in_middle_lane() {
    let mut game = runner();
    assert_eq!(game.lane(), 1);
    assert!(game.apply_action(RunnerAction::MoveLeft));
    assert!(!game.apply_action(RunnerAction::MoveLeft));
    assert!(game.apply_action(RunnerAction::MoveRight));
    assert!(game.apply_action(RunnerAction::MoveRight));
    assert!(!game.apply_action(RunnerAction::MoveRight));
    assert_eq!(game.lane(), 2);
}

#[test]
fn test_letter_in_other_lane_passes_by() {
    let mut game = runner();
    let y = game.config().player_y - 10.0;
    game.push_letter(FallingLetter {
        lane: 0,
        y,
        letter: 'К',
        is_target: true,
    });
    game.update();
    assert!(game.stuck().is_empty());
    assert_eq!(game.letters().len(), 1);
}

#[test]
fn test_filter_bonus_keeps_wrong_letters_off() {
    let mut game = runner();
    game.activate_bonus(BonusKind::Filter);
    assert!(game.filter_active());

    catch(&mut game, 'Ж', false);
    assert!(game.stuck().is_empty());
    assert!(game.letters().is_empty());

    catch(&mut game, 'К', true);
    assert_eq!(game.stuck().len(), 1);
    assert_eq!(game.progress(), 1);
}

#[test]
fn test_wrong_letters_stick_without_filter() {
    let mut game = runner();
    catch(&mut game, 'Ж', false);
    assert_eq!(game.stuck().len(), 1);
    assert!(!game.stuck()[0].is_target);
    assert_eq!(game.progress(), 0);
}

#[test]
fn test_clear_bonus_caught_from_the_lane() {
    let mut game = runner();
    catch(&mut game, 'К', true);
    catch(&mut game, 'Ж', false);
    catch(&mut game, 'К', true);
    assert_eq!(game.stuck().len(), 3);

    let y = game.config().player_y - 10.0;
    game.push_bonus(Bonus {
        lane: game.lane(),
        y,
        kind: BonusKind::Clear,
    });
    game.update();
    // Only the one К the word needs survives.
    let letters: Vec<char> = game.stuck().iter().map(|s| s.letter).collect();
    assert_eq!(letters, vec!['К']);
    assert!(game.bonuses().is_empty());
}

#[test]
fn test_words_complete_in_order() {
    let mut game = runner();
    assert_eq!(game.current_word(), "КОТ");

    catch(&mut game, 'О', true);
    assert_eq!(game.progress(), 0);
    catch(&mut game, 'К', true);
    catch(&mut game, 'О', true);
    assert_eq!(game.progress_text(), "КО");
    catch(&mut game, 'Т', true);

    assert_eq!(game.word_index(), 1);
    assert_eq!(game.current_word(), "КРИК");
    assert_eq!(game.progress(), 0);
    // The stray О caught first stays on the stack.
    assert_eq!(game.stuck().len(), 1);
    assert!((game.fall_speed() - 3.8).abs() < 1e-4);
    assert_eq!(game.spawn_rate(), 50);
}

#[test]
fn test_last_word_wins() {
    let config = RunnerConfig {
        target_words: vec!["ОН".to_string()],
        ..RunnerConfig::default()
    };
    let mut game = LetterRunner::new(config, 2).unwrap();
    catch(&mut game, 'О', true);
    catch(&mut game, 'Н', true);
    assert_eq!(game.phase(), RunnerPhase::Won);
    assert!(!game.update());
}

#[test]
fn test_stack_reaching_the_top_loses() {
    let mut game = runner();
    for _ in 0..13 {
        catch(&mut game, 'Ж', false);
    }
    assert_eq!(game.phase(), RunnerPhase::Playing);
    catch(&mut game, 'Ж', false);
    assert_eq!(game.phase(), RunnerPhase::Lost);
    assert!(game.stack_top() < 0.0);

    assert!(game.apply_action(RunnerAction::Restart));
    assert_eq!(game.phase(), RunnerPhase::Playing);
    assert!(game.stuck().is_empty());
    assert_eq!(game.word_index(), 0);
}

#[test]
fn test_spawns_follow_spawn_rate() {
    let mut game = runner();
    for _ in 0..59 {
        game.update();
    }
    assert!(game.letters().is_empty());
    game.update();
    assert_eq!(game.letters().len(), 1);
    assert!(game.letters()[0].y < 0.0);
}
