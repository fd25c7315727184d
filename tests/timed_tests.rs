//! Timed play tests.
//!
//! A `ManualClock` stands in for the wall clock. The stepping variant moves
//! one second per reading, which makes the point of interruption exact.

use std::time::Duration;

use pig_dice::{
    Event, GameBuilder, GameConfig, GameResult, LoadedDie, ManualClock, PlayerId, PlayerKind,
    RecordingReporter, ScriptedInput, TimedGameProxy, Victory,
};

type Proxy = TimedGameProxy<LoadedDie, ScriptedInput, RecordingReporter, ManualClock>;

fn proxy(
    kinds: (PlayerKind, PlayerKind),
    faces: &[u32],
    answers: Vec<&str>,
    timed: bool,
    clock: ManualClock,
    limit: Duration,
) -> Proxy {
    let game = GameBuilder::new(GameConfig::default().with_players(kinds.0, kinds.1))
        .build_with_die(
            LoadedDie::new(faces.iter().copied()),
            ScriptedInput::new(answers),
            RecordingReporter::new(),
        );
    TimedGameProxy::new(game, timed, clock, limit)
}

// =============================================================================
// Driving the game
// =============================================================================

/// Without a time limit the proxy plays every turn to the end.
#[test]
fn test_untimed_proxy_plays_to_the_end() {
    let mut p = proxy(
        (PlayerKind::Computer, PlayerKind::Computer),
        &[6],
        vec![],
        false,
        ManualClock::stepping(Duration::from_secs(3600)),
        Duration::from_secs(60),
    );

    let result = p.start_game().unwrap();

    assert_eq!(
        result,
        GameResult::Winner {
            player: PlayerId::One,
            by: Victory::Reached
        }
    );
    assert!(p.game().player(PlayerId::One).score() >= 100);
    // more than a single turn exchange was played
    assert!(p.game().turn() > 2);
    assert!(!p
        .game()
        .reporter()
        .events()
        .iter()
        .any(|e| matches!(e, Event::TimeTaken(_))));
}

/// A timed game that finishes inside the budget ends normally.
#[test]
fn test_timed_game_within_budget() {
    let mut p = proxy(
        (PlayerKind::Computer, PlayerKind::Computer),
        &[6],
        vec![],
        true,
        ManualClock::new(),
        Duration::from_secs(60),
    );

    let result = p.start_game().unwrap();
    assert!(matches!(result, GameResult::Winner { by: Victory::Reached, .. }));
}

/// Time runs out mid-turn: the turn total is dropped and the leader wins.
#[test]
fn test_expiry_mid_turn_goes_to_leader() {
    let mut p = proxy(
        (PlayerKind::Computer, PlayerKind::Computer),
        &[6],
        vec![],
        true,
        ManualClock::stepping(Duration::from_secs(1)),
        Duration::from_secs(10),
    );

    let result = p.start_game().unwrap();

    // player 1 banks 30, player 2 is two rolls into a turn when time is up
    assert_eq!(
        result,
        GameResult::Winner {
            player: PlayerId::One,
            by: Victory::OutOfTime
        }
    );
    assert_eq!(p.game().player(PlayerId::One).score(), 30);
    assert_eq!(p.game().player(PlayerId::Two).score(), 0);
    assert_eq!(p.game().player(PlayerId::Two).turn_total(), 12);

    let events = p.game().reporter().events();
    let n = events.len();
    assert!(matches!(events[n - 3], Event::Scores { .. }));
    assert_eq!(
        events[n - 2],
        Event::Winner {
            name: "Player 1".to_string(),
            by: Victory::OutOfTime
        }
    );
    assert!(matches!(events[n - 1], Event::TimeTaken(_)));
}

/// After interruption nothing else is rolled or asked.
#[test]
fn test_no_play_after_interruption() {
    let answers = vec!["1"; 50];
    let mut p = proxy(
        (PlayerKind::Human, PlayerKind::Human),
        &[2],
        answers,
        true,
        ManualClock::stepping(Duration::from_secs(1)),
        Duration::from_secs(10),
    );

    let result = p.start_game().unwrap();

    assert_eq!(result, GameResult::Tie);
    let game = p.game();
    assert_eq!(game.player(PlayerId::One).score(), 0);
    assert!(game.player(PlayerId::One).turn_total() > 0);
    // every answer consumed became a roll; none were taken after the deadline
    assert_eq!(game.history().len(), 50 - game.input().remaining());
    assert_eq!(game.history().len(), game.die().rolls());
    assert!(game.input().remaining() > 0);
    assert_eq!(game.reporter().count(|e| matches!(e, Event::Tie)), 1);
}

// =============================================================================
// check_time
// =============================================================================

/// Untimed proxies never expire.
#[test]
fn test_check_time_untimed() {
    let clock = ManualClock::new();
    let mut p = proxy(
        (PlayerKind::Human, PlayerKind::Human),
        &[2],
        vec![],
        false,
        clock.clone(),
        Duration::from_secs(60),
    );
    clock.advance(Duration::from_secs(3600));

    assert!(!p.check_time());
    assert!(!p.game().is_over());
    assert!(p.game().reporter().events().is_empty());
}

/// Within budget there are no side effects; past it the game is resolved.
#[test]
fn test_check_time_timed() {
    let clock = ManualClock::new();
    let mut p = proxy(
        (PlayerKind::Human, PlayerKind::Human),
        &[2],
        vec!["1", "1", "2"],
        true,
        clock.clone(),
        Duration::from_secs(60),
    );

    // the clock has not started yet
    assert!(!p.check_time());
    assert!(p.game().reporter().events().is_empty());

    // player 1 banks 4, then the script runs out during player 2's turn
    assert!(p.start_game().is_err());
    assert_eq!(p.game().player(PlayerId::One).score(), 4);
    assert!(!p.check_time());

    clock.advance(Duration::from_secs(61));
    assert!(p.check_time());
    assert_eq!(
        p.game().result(),
        Some(GameResult::Winner {
            player: PlayerId::One,
            by: Victory::OutOfTime
        })
    );
    assert_eq!(
        p.game().reporter().last(),
        Some(&Event::TimeTaken(Duration::from_secs(61)))
    );
}

/// Level scores when time is up make a tie.
#[test]
fn test_check_time_tie() {
    let clock = ManualClock::new();
    let mut p = proxy(
        (PlayerKind::Human, PlayerKind::Human),
        &[3],
        vec!["1", "2", "1", "2"],
        true,
        clock.clone(),
        Duration::from_secs(60),
    );
    // both players bank 3, then the script runs out
    assert!(p.start_game().is_err());
    assert_eq!(p.game().player(PlayerId::One).score(), 3);
    assert_eq!(p.game().player(PlayerId::Two).score(), 3);

    clock.advance(Duration::from_secs(90));
    assert!(p.check_time());
    assert_eq!(p.game().result(), Some(GameResult::Tie));
    assert!(p.game().reporter().events().contains(&Event::Tie));
}
