//! Randomized playouts checking the engine's standing invariants.
//!
//! Every step picks a legal move (any seat, so out-of-turn completions are
//! exercised too) and also throws a random, usually illegal, move at the
//! engine to check that rejections leave state untouched.

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use trick_engine::cards::{full_deck, Card};
use trick_engine::core::{GameRng, PlayerId};
use trick_engine::games::president::{Play, PresidentBuilder, PresidentGame, SkipRule};
use trick_engine::rules::{is_ended, TrickGame};

const MAX_STEPS: usize = 600;

fn all_cards(game: &PresidentGame) -> Vec<Card> {
    let mut cards = Vec::new();
    for seat in PlayerId::all(game.player_count()) {
        if let Some(hand) = game.hands(seat)[seat.index()].cards() {
            cards.extend(hand.iter().copied());
        }
    }
    let piles = game.piles();
    cards.extend(piles.active.iter().copied());
    cards.extend(piles.discard.iter().copied());
    cards
}

fn assert_invariants(game: &PresidentGame, previous_winners: &[PlayerId]) {
    let cards = all_cards(game);
    let unique: FxHashSet<Card> = cards.iter().copied().collect();
    assert_eq!(cards.len(), 52, "deck conservation");
    assert_eq!(unique.len(), 52, "no duplicated cards");

    assert!(game.mode() <= 3, "mode out of range: {}", game.mode());

    let winners = game.winners();
    assert!(winners.starts_with(previous_winners), "ranking only grows");
    let distinct: FxHashSet<PlayerId> = winners.iter().copied().collect();
    assert_eq!(distinct.len(), winners.len(), "each seat ranked once");

    if !game.is_over() {
        assert!(!game.is_finished(game.turn()), "turn on a finished seat");
    }
}

fn random_move(game: &PresidentGame, rng: &mut GameRng) -> (PlayerId, Vec<Card>) {
    let seat = PlayerId(rng.gen_range_usize(0..game.player_count()) as u8);
    let deck = full_deck();
    let count = rng.gen_range_usize(0..5);
    let cards = (0..count).filter_map(|_| rng.choose(&deck).copied()).collect();
    (seat, cards)
}

fn playout(players: usize, seed: u64, rule: SkipRule) -> PresidentGame {
    let mut game = PresidentBuilder::new()
        .players((0..players).map(|i| format!("P{}", i)))
        .seed(seed)
        .skip_rule(rule)
        .build()
        .unwrap();
    let mut rng = GameRng::new(seed ^ 0x5eed);
    assert_invariants(&game, &[]);

    for _ in 0..MAX_STEPS {
        if game.is_over() {
            break;
        }

        let (seat, cards) = random_move(&game, &mut rng);
        let before = game.clone();
        if game.play(seat, &cards).is_err() {
            assert_eq!(game, before, "rejected move changed state");
        }
        assert_invariants(&game, &before.winners());

        if game.is_over() {
            break;
        }

        let moves: Vec<(PlayerId, Play)> = PlayerId::all(players)
            .flat_map(|seat| game.legal_plays(seat).into_iter().map(move |play| (seat, play)))
            .collect();
        let (seat, play) = rng.choose(&moves).cloned().expect("the seat to act can always pass");

        let winners = game.winners();
        game.play(seat, &play).unwrap();
        assert_invariants(&game, &winners);
    }

    game
}

fn skip_rule() -> impl Strategy<Value = SkipRule> {
    prop_oneof![
        Just(SkipRule::Never),
        Just(SkipRule::MatchedRank),
        Just(SkipRule::AnySingle),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn prop_invariants_hold_through_random_games(
        players in 2usize..=6,
        seed in any::<u64>(),
        rule in skip_rule(),
    ) {
        let game = playout(players, seed, rule);

        if is_ended(&game) {
            prop_assert_eq!(game.winners().len(), players);
        }
    }

    #[test]
    fn prop_resignations_keep_invariants(
        players in 3usize..=6,
        seed in any::<u64>(),
        quitter in 0u8..3,
    ) {
        let mut game = playout(players, seed, SkipRule::MatchedRank);
        let winners = game.winners();

        match game.resign(PlayerId::new(quitter)) {
            Ok(()) => {
                assert_invariants(&game, &winners);
                prop_assert!(game.is_finished(PlayerId::new(quitter)));
            }
            Err(_) => {
                prop_assert!(game.is_over() || game.is_finished(PlayerId::new(quitter)));
            }
        }
    }
}

#[test]
fn test_every_seat_ranked_once_game_ends() {
    // Seeds 0..20 are plenty to see complete games under every rule.
    let mut finished = 0;
    for seed in 0..20 {
        for rule in [SkipRule::Never, SkipRule::MatchedRank, SkipRule::AnySingle] {
            let game = playout(4, seed, rule);
            if game.is_over() {
                let mut ranked = game.winners();
                ranked.sort();
                assert_eq!(ranked, PlayerId::all(4).collect::<Vec<_>>());
                finished += 1;
            }
        }
    }
    assert!(finished > 0);
}
