//! Game integration tests.

use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use typhoon::{
    COLOR_CATALOG, Card, ConfigError, DeckError, FlipBackTicket, Game, GameError, GameRules,
    GameState, ManualScheduler, PointValue, Randomize, Scheduler, build_distribution,
    validate_distribution,
};

const DELAY: Duration = Duration::from_millis(600);

fn game(seed: u64) -> Game<ManualScheduler> {
    Game::with_parts(
        GameRules::default(),
        ChaCha8Rng::seed_from_u64(seed),
        ManualScheduler::new(),
    )
    .unwrap()
}

fn ready_game(seed: u64) -> Game<ManualScheduler> {
    let mut game = game(seed);
    game.init().unwrap();
    game
}

fn points<S: Scheduler>(game: &Game<S>) -> Vec<PointValue> {
    game.deck().cards().iter().map(|card| card.point).collect()
}

fn pairing<S: Scheduler>(game: &Game<S>) -> Vec<(&'static str, PointValue)> {
    game.deck()
        .cards()
        .iter()
        .map(|card| (card.color.name, card.point))
        .collect()
}

fn assert_deck_invariants<S: Scheduler>(game: &Game<S>) {
    let cards: &[Card] = game.deck().cards();
    assert_eq!(cards.len(), 11);
    for color in &COLOR_CATALOG {
        assert_eq!(cards.iter().filter(|card| card.color == *color).count(), 1);
    }
    assert!(validate_distribution(&points(game), game.rules()));
}

fn expect_deferred(outcome: Randomize) -> FlipBackTicket {
    match outcome {
        Randomize::Deferred(ticket) => ticket,
        Randomize::Immediate => panic!("expected a deferred randomize"),
    }
}

#[test]
fn distribution_multiset_is_fixed() {
    let rules = GameRules::default();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    for _ in 0..100 {
        let distribution = build_distribution(&rules, &mut rng).unwrap();
        assert_eq!(distribution.len(), 11);
        for n in 1..=3 {
            let count = distribution
                .iter()
                .filter(|&&p| p == PointValue::Regular(n))
                .count();
            assert_eq!(count, 3);
        }
        assert_eq!(
            distribution
                .iter()
                .filter(|&&p| p == PointValue::Bonus(5))
                .count(),
            1
        );
        assert_eq!(
            distribution
                .iter()
                .filter(|&&p| p == PointValue::ResetMarker)
                .count(),
            1
        );
    }
}

#[test]
fn new_game_is_uninitialized() {
    let game = game(1);
    assert_eq!(game.state(), GameState::Uninitialized);
    assert!(game.deck().is_empty());
    assert!(game.names_visible());

    let snapshot = game.snapshot();
    assert!(snapshot.cards.is_empty());
    assert_eq!(snapshot.card_count, 0);
    assert!(!snapshot.busy);
}

#[test]
fn inconsistent_rules_never_reach_ready() {
    let rules = GameRules::default().with_regular_point_cards(8);
    let err = Game::with_parts(rules, ChaCha8Rng::seed_from_u64(0), ManualScheduler::new())
        .err()
        .unwrap();
    assert_eq!(
        err,
        ConfigError::DistributionSize {
            expected: 11,
            actual: 10
        }
    );
}

#[test]
fn init_builds_hidden_deck() {
    let game = ready_game(2);
    assert_eq!(game.state(), GameState::Ready);
    assert_deck_invariants(&game);
    assert_eq!(game.deck().revealed_count(), 0);
    assert_eq!(game.snapshot().card_count, 11);
}

#[test]
fn init_twice_rebuilds_from_scratch() {
    let mut game = ready_game(3);
    game.reveal_all_cards().unwrap();
    game.set_names_visible(false);

    game.init().unwrap();
    assert_eq!(game.state(), GameState::Ready);
    assert_deck_invariants(&game);
    assert_eq!(game.deck().revealed_count(), 0);
    assert!(game.names_visible());
}

#[test]
fn operations_before_init_are_rejected() {
    let mut game = game(4);
    assert_eq!(game.randomize(), Err(GameError::NotReady));
    assert_eq!(game.reveal_all_cards(), Err(GameError::NotReady));
    assert_eq!(game.request_reveal(0), Err(GameError::NotReady));
}

#[test]
fn request_reveal_toggles_and_checks_range() {
    let mut game = ready_game(5);
    game.request_reveal(2).unwrap();
    assert!(game.snapshot().cards[2].revealed);
    game.request_reveal(2).unwrap();
    assert!(!game.snapshot().cards[2].revealed);

    assert_eq!(
        game.request_reveal(11),
        Err(GameError::Deck(DeckError::IndexOutOfRange { index: 11, len: 11 }))
    );
}

#[test]
fn reveal_all_twice_leaves_everything_revealed() {
    let mut game = ready_game(6);
    game.request_reveal(0).unwrap();
    game.reveal_all_cards().unwrap();
    game.reveal_all_cards().unwrap();
    assert_eq!(game.deck().revealed_count(), 11);
    assert_eq!(game.state(), GameState::Ready);
}

#[test]
fn names_toggle_does_not_touch_deck() {
    let mut game = ready_game(7);
    let before = pairing(&game);
    game.set_names_visible(false);
    assert!(!game.snapshot().names_visible);
    assert_eq!(pairing(&game), before);
}

#[test]
fn snapshot_labels_points() {
    let game = ready_game(8);
    let snapshot = game.snapshot();
    for view in &snapshot.cards {
        let expected = match view.point {
            PointValue::Regular(n) | PointValue::Bonus(n) => format!("{n} Points"),
            PointValue::ResetMarker => "Point Reset".to_string(),
        };
        assert_eq!(view.point_label, expected);
    }
    assert!(snapshot.cards.iter().any(|v| v.point_label == "Point Reset"));
    assert!(snapshot.cards.iter().any(|v| v.point_label == "5 Points"));
}

// Scenario B
#[test]
fn randomize_with_revealed_cards_flips_back_then_reassigns() {
    let mut game = ready_game(9);
    for index in 0..3 {
        game.request_reveal(index).unwrap();
    }
    let before = pairing(&game);

    let ticket = expect_deferred(game.randomize().unwrap());
    assert_eq!(game.state(), GameState::AwaitingFlipBack);
    assert!(game.snapshot().busy);
    assert_eq!(game.deck().revealed_count(), 0);
    assert_eq!(pairing(&game), before);

    game.scheduler_mut().advance(DELAY - Duration::from_millis(1));
    assert!(!game.poll().unwrap());
    assert_eq!(pairing(&game), before);

    game.scheduler_mut().advance(Duration::from_millis(1));
    assert!(game.complete_flip_back(ticket).unwrap());
    assert_eq!(game.state(), GameState::Ready);
    assert!(game.pending().is_none());
    assert_eq!(game.scheduler().pending(), 0);
    assert_deck_invariants(&game);
    assert_eq!(game.deck().revealed_count(), 0);
}

// Scenario C
#[test]
fn randomize_without_revealed_cards_is_immediate() {
    let mut game = ready_game(10);
    let before = pairing(&game);

    let mut changed = false;
    for _ in 0..5 {
        assert_eq!(game.randomize().unwrap(), Randomize::Immediate);
        assert_eq!(game.state(), GameState::Ready);
        assert_eq!(game.scheduler().pending(), 0);
        assert_deck_invariants(&game);
        changed |= pairing(&game) != before;
    }
    assert!(changed);
}

// Scenario D
#[test]
fn second_randomize_while_pending_is_busy() {
    let mut game = ready_game(11);
    game.reveal_all_cards().unwrap();

    let ticket = expect_deferred(game.randomize().unwrap());
    assert_eq!(game.randomize(), Err(GameError::Busy));
    assert_eq!(game.reveal_all_cards(), Err(GameError::Busy));
    assert_eq!(game.request_reveal(0), Err(GameError::Busy));
    assert_eq!(game.pending(), Some(ticket));

    game.scheduler_mut().advance(DELAY);
    assert!(game.poll().unwrap());
    assert_eq!(game.state(), GameState::Ready);
    assert_deck_invariants(&game);

    // A completed ticket cannot be replayed.
    assert!(!game.complete_flip_back(ticket).unwrap());
}

// Scenario E
#[test]
fn reset_during_flip_back_discards_continuation() {
    let mut game = ready_game(12);
    game.request_reveal(1).unwrap();
    let ticket = expect_deferred(game.randomize().unwrap());

    game.reset();
    assert_eq!(game.state(), GameState::Uninitialized);
    assert!(game.deck().is_empty());
    assert_eq!(game.scheduler().pending(), 0);

    game.scheduler_mut().advance(DELAY);
    assert!(!game.complete_flip_back(ticket).unwrap());
    assert!(!game.poll().unwrap());
    assert!(game.deck().is_empty());

    game.init().unwrap();
    let fresh = pairing(&game);
    assert!(!game.complete_flip_back(ticket).unwrap());
    assert_eq!(pairing(&game), fresh);
    assert_eq!(game.state(), GameState::Ready);
}

#[test]
fn init_during_flip_back_discards_continuation() {
    let mut game = ready_game(13);
    game.reveal_all_cards().unwrap();
    let ticket = expect_deferred(game.randomize().unwrap());

    game.init().unwrap();
    assert_eq!(game.state(), GameState::Ready);
    let fresh = pairing(&game);

    game.scheduler_mut().advance(DELAY);
    assert!(!game.complete_flip_back(ticket).unwrap());
    assert_eq!(pairing(&game), fresh);
    assert!(game.generation() > ticket.generation);
}

#[test]
fn reset_restores_name_visibility() {
    let mut game = ready_game(14);
    game.set_names_visible(false);
    game.reset();
    assert!(game.names_visible());
    assert!(game.snapshot().cards.is_empty());
    assert_eq!(game.snapshot().card_count, 0);
}

#[test]
fn same_seed_same_game() {
    let mut a = ready_game(99);
    let mut b = ready_game(99);
    assert_eq!(pairing(&a), pairing(&b));

    a.randomize().unwrap();
    b.randomize().unwrap();
    assert_eq!(pairing(&a), pairing(&b));
}

#[test]
fn custom_delay_is_honored() {
    let rules = GameRules::default().with_animation_duration(Duration::from_millis(50));
    let mut game =
        Game::with_parts(rules, ChaCha8Rng::seed_from_u64(15), ManualScheduler::new()).unwrap();
    game.init().unwrap();
    game.request_reveal(0).unwrap();
    let ticket = expect_deferred(game.randomize().unwrap());

    game.scheduler_mut().advance(Duration::from_millis(50));
    assert!(game.scheduler().is_due(ticket.timer));
    assert!(game.poll().unwrap());
}

#[cfg(feature = "std")]
#[test]
fn system_clock_flip_back_completes_after_delay() {
    let rules = GameRules::default().with_animation_duration(Duration::from_millis(200));
    let mut game = Game::new(rules, 16).unwrap();
    game.init().unwrap();
    game.request_reveal(0).unwrap();

    let ticket = expect_deferred(game.randomize().unwrap());
    assert_eq!(game.deck().revealed_count(), 0);
    assert!(!game.poll().unwrap());
    assert_eq!(game.state(), GameState::AwaitingFlipBack);

    std::thread::sleep(Duration::from_millis(250));
    assert!(game.scheduler().is_due(ticket.timer));
    assert!(game.poll().unwrap());
    assert_eq!(game.state(), GameState::Ready);
    assert_deck_invariants(&game);
}

#[cfg(feature = "std")]
#[test]
fn unreachable_system_deadline_stays_pending() {
    let rules = GameRules::default().with_animation_duration(Duration::MAX);
    let mut game = Game::new(rules, 17).unwrap();
    game.init().unwrap();
    game.request_reveal(0).unwrap();
    let before = pairing(&game);

    expect_deferred(game.randomize().unwrap());
    assert_eq!(game.state(), GameState::AwaitingFlipBack);
    assert!(!game.poll().unwrap());
    assert_eq!(pairing(&game), before);

    game.reset();
    assert_eq!(game.state(), GameState::Uninitialized);
}
