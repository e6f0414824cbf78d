mod common;

use std::collections::BTreeSet;

use common::{clear_level, custom_game, knight_path, standard_game};
use knight_hunt::clock::Clock;
use knight_hunt::config::KNIGHT_START_SQUARES;
use knight_hunt::core::square::Square;
use knight_hunt::game::{MoveOutcome, Phase, TickOutcome, Transition};
use knight_hunt::levels::LevelSpec;
use knight_hunt::observer::GameEvent;

#[test]
fn fresh_controller_is_not_started_and_ignores_play() {
    let mut game = standard_game(1);
    assert_eq!(game.phase(), Phase::NotStarted);
    assert_eq!(game.level(), 0);
    assert_eq!(game.knight(), None);
    assert!(game.legal_moves().is_empty());

    assert_eq!(game.attempt_move(Square::new(2, 2)), MoveOutcome::Ignored);
    assert_eq!(game.tick(), TickOutcome::Ignored);
    assert_eq!(game.pause(), Transition::Ignored);
    assert_eq!(game.resume(), Transition::Ignored);
    assert_eq!(game.advance_to_next_level(), Ok(Transition::Ignored));
    assert_eq!(game.restart(), Ok(Transition::Ignored));
    assert!(game.observer().events().is_empty());
}

#[test]
fn start_sets_up_level_one() {
    let mut game = standard_game(2);
    assert_eq!(game.start(), Ok(Transition::Applied));

    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.level(), 1);
    assert_eq!(game.total_score(), 0);
    assert_eq!(game.time_remaining(), 120);

    let knight = game.knight().unwrap();
    assert!(KNIGHT_START_SQUARES.contains(&knight));
    let queens = game.queens().unwrap();
    assert_eq!(queens.len(), 25);
    assert!(!queens.contains(&knight));
    assert_eq!(game.legal_moves().len(), 3);
    assert!(game.clock().is_active());

    // Notifications arrive in setup order.
    let events = game.observer().events();
    assert_eq!(events[0], GameEvent::LevelStarted(LevelSpec::new(1, 25, 120)));
    assert_eq!(events[1], GameEvent::ScoreChanged { total: 0, level: 0 });
    assert_eq!(events[2], GameEvent::TimeChanged(120));
    assert!(matches!(events[3], GameEvent::BoardChanged { knight: k, .. } if k == knight));

    // A second start while running is a no-op.
    assert_eq!(game.start(), Ok(Transition::Ignored));
    assert_eq!(game.observer().events().len(), 4);
}

#[test]
fn illegal_move_changes_nothing() {
    let mut game = standard_game(3);
    game.start().unwrap();
    let knight = game.knight().unwrap();
    let queens: BTreeSet<Square> = game.queens().unwrap().clone();
    let events_before = game.observer().events().len();

    for target in [knight, Square::new(4, 4), Square::new(9, 9)] {
        if game.legal_moves().contains(&target) {
            continue;
        }
        assert_eq!(game.attempt_move(target), MoveOutcome::Illegal);
    }

    assert_eq!(game.knight(), Some(knight));
    assert_eq!(game.queens(), Some(&queens));
    assert_eq!(game.total_score(), 0);
    assert_eq!(game.observer().events().len(), events_before);
}

#[test]
fn single_queen_capture_completes_level_with_bonus() {
    // Knight fixed at (0,1); search seeds for a layout with the queen on (2,2).
    let mut game = (0..5000u64)
        .map(|seed| {
            let mut g = custom_game(seed, &[(1, 120), (1, 100)], Square::new(0, 1));
            g.start().unwrap();
            g
        })
        .find(|g| g.queens().unwrap().contains(&Square::new(2, 2)))
        .expect("some seed places the queen on (2,2)");

    assert_eq!(game.knight(), Some(Square::new(0, 1)));
    let outcome = game.attempt_move(Square::new(2, 2));

    assert_eq!(
        outcome,
        MoveOutcome::LevelComplete {
            level: 1,
            level_total: 1200
        }
    );
    assert!(game.queens().unwrap().is_empty());
    assert_eq!(game.total_score(), 100 + 120 * 5 + 500);
    assert_eq!(game.phase(), Phase::LevelComplete);
    assert!(!game.clock().is_active());
    assert_eq!(
        game.observer().last(),
        Some(&GameEvent::LevelComplete {
            level: 1,
            level_total: 1200,
            total: 1200
        })
    );
}

#[test]
fn clearing_a_level_scores_captures_time_and_completion() {
    let mut game = standard_game(4);
    game.start().unwrap();
    for _ in 0..7 {
        let _ = game.tick();
    }
    let t = game.time_remaining();
    assert_eq!(t, 113);

    let outcome = clear_level(&mut game);

    assert!(matches!(outcome, MoveOutcome::LevelComplete { level: 1, .. }));
    assert_eq!(game.total_score(), 25 * 100 + t * 5 + 500);
    assert_eq!(game.level_score(), game.total_score());
}

#[test]
fn legal_moves_follow_the_knight_without_capture() {
    let mut game = custom_game(5, &[(1, 60)], Square::new(0, 1));
    game.start().unwrap();
    let queen = *game.queens().unwrap().first().unwrap();
    let target = game
        .legal_moves()
        .iter()
        .copied()
        .find(|&sq| sq != queen)
        .unwrap();

    assert_eq!(game.attempt_move(target), MoveOutcome::Moved);
    assert_eq!(game.knight(), Some(target));
    assert_eq!(game.legal_moves(), knight_hunt::moves::legal_moves(target, 8).as_slice());
    assert_eq!(game.total_score(), 0);
}

#[test]
fn ticks_while_paused_do_not_count() {
    let mut game = standard_game(6);
    game.start().unwrap();
    assert_eq!(game.tick(), TickOutcome::Counted { remaining: 119 });

    assert_eq!(game.pause(), Transition::Applied);
    assert_eq!(game.phase(), Phase::Paused);
    assert!(!game.clock().is_active());
    for _ in 0..50 {
        assert_eq!(game.tick(), TickOutcome::Ignored);
    }
    assert_eq!(game.time_remaining(), 119);

    // Moves are rejected while paused.
    let target = game.legal_moves()[0];
    assert_eq!(game.attempt_move(target), MoveOutcome::Ignored);

    assert_eq!(game.resume(), Transition::Applied);
    assert_eq!(game.tick(), TickOutcome::Counted { remaining: 118 });
    assert_eq!(game.observer().count(|e| *e == GameEvent::Paused), 1);
    assert_eq!(game.observer().count(|e| *e == GameEvent::Resumed), 1);
}

#[test]
fn toggle_pause_flips_between_running_and_paused() {
    let mut game = standard_game(7);
    assert_eq!(game.toggle_pause(), Transition::Ignored);
    game.start().unwrap();
    assert_eq!(game.toggle_pause(), Transition::Applied);
    assert_eq!(game.phase(), Phase::Paused);
    assert_eq!(game.toggle_pause(), Transition::Applied);
    assert_eq!(game.phase(), Phase::Running);
}

#[test]
fn countdown_reaches_game_over_exactly_once() {
    let mut game = custom_game(8, &[(10, 30)], Square::new(7, 6));
    game.start().unwrap();

    for i in 1..30 {
        assert_eq!(game.tick(), TickOutcome::Counted { remaining: 30 - i });
    }
    assert_eq!(game.tick(), TickOutcome::TimeUp);
    assert_eq!(game.phase(), Phase::GameOver { victory: false });
    assert!(!game.clock().is_active());

    for _ in 0..5 {
        assert_eq!(game.tick(), TickOutcome::Ignored);
    }
    assert_eq!(game.time_remaining(), 0);
    assert_eq!(
        game.observer()
            .count(|e| matches!(e, GameEvent::GameOver { victory: false, .. })),
        1
    );
}

#[test]
fn knight_square_persists_into_next_level() {
    let mut game = custom_game(9, &[(3, 60), (4, 60)], Square::new(0, 6));
    game.start().unwrap();
    clear_level(&mut game);
    let knight = game.knight().unwrap();
    let score = game.total_score();

    // Nothing counts between levels.
    assert_eq!(game.tick(), TickOutcome::Ignored);
    assert_eq!(game.attempt_move(game.legal_moves()[0]), MoveOutcome::Ignored);

    assert_eq!(game.advance_to_next_level(), Ok(Transition::Applied));
    assert_eq!(game.level(), 2);
    assert_eq!(game.knight(), Some(knight));
    assert_eq!(game.level_score(), 0);
    assert_eq!(game.total_score(), score);
    assert_eq!(game.time_remaining(), 60);
    assert_eq!(game.queens().unwrap().len(), 4);
    assert!(!game.queens().unwrap().contains(&knight));
}

#[test]
fn clearing_the_final_level_is_victory() {
    let mut game = custom_game(10, &[(2, 40), (2, 40)], Square::new(7, 1));
    game.start().unwrap();
    clear_level(&mut game);
    game.advance_to_next_level().unwrap();
    let before = game.total_score();

    let outcome = clear_level(&mut game);

    let expected = before + 2 * 100 + 40 * 5 + 500;
    assert_eq!(outcome, MoveOutcome::Victory { final_score: expected });
    assert_eq!(game.phase(), Phase::GameOver { victory: true });
    assert_eq!(game.advance_to_next_level(), Ok(Transition::Ignored));
    assert_eq!(
        game.observer().last(),
        Some(&GameEvent::GameOver {
            victory: true,
            final_score: expected
        })
    );
}

#[test]
fn full_standard_game_runs_to_victory() {
    let mut game = standard_game(11);
    game.start().unwrap();
    for level in 1..=10 {
        assert_eq!(game.level(), level);
        let outcome = clear_level(&mut game);
        if level < 10 {
            assert!(matches!(outcome, MoveOutcome::LevelComplete { .. }));
            game.advance_to_next_level().unwrap();
        } else {
            assert!(matches!(outcome, MoveOutcome::Victory { .. }));
        }
    }
    assert_eq!(game.phase(), Phase::GameOver { victory: true });

    // One subscription at a time, across every level transition.
    assert_eq!(game.clock().peak_active(), 1);
    assert!(!game.clock().is_active());
}

#[test]
fn clock_never_doubles_up_across_pauses_and_levels() {
    let mut game = custom_game(12, &[(2, 30), (2, 30), (2, 30)], Square::new(0, 1));
    game.start().unwrap();
    for _ in 0..3 {
        let _ = game.pause();
        let _ = game.resume();
        let _ = game.resume();
        clear_level(&mut game);
        let _ = game.advance_to_next_level();
    }
    assert_eq!(game.clock().peak_active(), 1);
}

#[test]
fn restart_resets_score_level_and_rerolls_knight() {
    let mut game = custom_game(13, &[(2, 5), (2, 5)], Square::new(0, 1));
    game.start().unwrap();
    clear_level(&mut game);
    game.advance_to_next_level().unwrap();
    for _ in 0..5 {
        let _ = game.tick();
    }
    assert_eq!(game.phase(), Phase::GameOver { victory: false });
    assert!(game.total_score() > 0);

    assert_eq!(game.restart(), Ok(Transition::Applied));
    assert_eq!(game.phase(), Phase::Running);
    assert_eq!(game.level(), 1);
    assert_eq!(game.total_score(), 0);
    assert_eq!(game.level_score(), 0);
    assert_eq!(game.time_remaining(), 5);
    assert_eq!(game.knight(), Some(Square::new(0, 1)));
}

#[test]
fn restart_draws_knight_from_all_start_squares() {
    let mut game = standard_game(14);
    game.start().unwrap();
    let mut seen = BTreeSet::new();
    for _ in 0..64 {
        while game.tick() != TickOutcome::TimeUp {}
        game.restart().unwrap();
        let knight = game.knight().unwrap();
        assert!(KNIGHT_START_SQUARES.contains(&knight));
        seen.insert(knight);
    }
    assert_eq!(seen.len(), 4);
}

#[test]
fn restart_is_ignored_outside_game_over() {
    let mut game = standard_game(15);
    game.start().unwrap();
    assert_eq!(game.restart(), Ok(Transition::Ignored));
    assert_eq!(game.level(), 1);
}

#[test]
fn path_helper_finds_single_hop() {
    assert_eq!(
        knight_path(Square::new(0, 1), Square::new(2, 2), 8),
        vec![Square::new(2, 2)]
    );
    assert_eq!(knight_path(Square::new(0, 0), Square::new(1, 1), 8).len(), 4);
}
