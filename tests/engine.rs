//! Card, deck, counting, valuation and advice tests.

#![allow(clippy::float_cmp)]

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seven27::{
    AceTieBreak, Action, Card, CardError, CounterOptions, DECK_SIZE, Direction, Hand,
    JOKER_DECK_SIZE, OddsError, Rank, RoundError, Score, Suit, TableState, UnknownPool, advise,
    branch_ace_value, branch_ace_value_with, full_deck, odds_of_card, odds_of_rank, odds_to_beat,
    parse_card, rate_score, shuffled_deck, total_hand_value, total_hand_value_with,
    try_odds_of_card,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

const fn points(value: i32) -> Score {
    Score::from_points(value)
}

const fn half(value: i32) -> Score {
    Score::from_half_points(value)
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

fn table(hands: &[(&str, &[Card])]) -> TableState {
    let mut table = TableState::new();
    for (player, cards) in hands {
        table.deal(player, Hand::from_cards(cards.to_vec())).unwrap();
    }
    table
}

#[test]
fn parse_card_reads_tokens() {
    assert_eq!(parse_card("AS").unwrap(), card(Rank::Ace, Suit::Spade));
    assert_eq!(parse_card("10C").unwrap(), card(Rank::Ten, Suit::Club));
    assert_eq!(parse_card("QH").unwrap(), card(Rank::Queen, Suit::Heart));
    assert_eq!(parse_card("7D").unwrap(), card(Rank::Seven, Suit::Diamond));
    assert_eq!(parse_card("Joker").unwrap(), Card::Joker);
    assert_eq!("KS".parse::<Card>().unwrap(), card(Rank::King, Suit::Spade));
}

#[test]
fn parse_card_rejects_malformed_tokens() {
    for token in ["", "1X", "ZZ", "11C", "as", " AS", "AS ", "joker", "10", "H", "AHS"] {
        assert_eq!(
            parse_card(token).unwrap_err(),
            CardError::InvalidCard(token.to_string()),
            "token {token:?}"
        );
    }
}

#[test]
fn card_display_round_trips_through_parse() {
    for &deck_card in full_deck(true) {
        assert_eq!(parse_card(&deck_card.to_string()).unwrap(), deck_card);
    }
    assert_eq!(card(Rank::Ten, Suit::Club).to_string(), "10C");
    assert_eq!(Card::Joker.to_string(), "Joker");
}

#[test]
fn card_accessors() {
    let ace = card(Rank::Ace, Suit::Heart);
    assert!(ace.is_ace());
    assert_eq!(ace.rank(), Some(Rank::Ace));
    assert_eq!(ace.suit(), Some(Suit::Heart));
    assert!(Card::Joker.is_joker());
    assert_eq!(Card::Joker.rank(), None);
    assert_eq!(Card::Joker.suit(), None);
}

#[test]
fn rank_point_values() {
    assert_eq!(Rank::Ace.point_value(), None);
    assert_eq!(Rank::Two.point_value(), Some(points(2)));
    assert_eq!(Rank::Eight.point_value(), Some(points(8)));
    assert_eq!(Rank::Nine.point_value(), Some(points(2)));
    assert_eq!(Rank::Ten.point_value(), Some(points(3)));
    for face in [Rank::Jack, Rank::Queen, Rank::King] {
        assert_eq!(face.point_value(), Some(half(1)));
    }
}

#[test]
fn standard_deck_composition() {
    let deck = full_deck(false);
    assert_eq!(deck.len(), DECK_SIZE);

    for rank in Rank::ALL {
        assert_eq!(deck.iter().filter(|c| c.rank() == Some(rank)).count(), 4);
    }
    for suit in Suit::ALL {
        assert_eq!(deck.iter().filter(|c| c.suit() == Some(suit)).count(), 13);
    }

    let distinct: HashSet<Card> = deck.iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);
    assert!(!deck.contains(&Card::Joker));
}

#[test]
fn joker_deck_adds_two_jokers() {
    let deck = full_deck(true);
    assert_eq!(deck.len(), JOKER_DECK_SIZE);
    assert_eq!(deck.iter().filter(|c| c.is_joker()).count(), 2);

    let standard: HashSet<Card> = full_deck(false).iter().copied().collect();
    let rest: HashSet<Card> = deck.iter().copied().filter(|c| !c.is_joker()).collect();
    assert_eq!(rest, standard);
}

#[test]
fn full_deck_is_built_once_per_flag() {
    assert!(std::ptr::eq(full_deck(false), full_deck(false)));
    assert!(std::ptr::eq(full_deck(true), full_deck(true)));
    assert_eq!(full_deck(false), full_deck(false));
}

#[test]
fn shuffled_deck_is_seeded_permutation() {
    let first = shuffled_deck(false, &mut ChaCha8Rng::seed_from_u64(3));
    let second = shuffled_deck(false, &mut ChaCha8Rng::seed_from_u64(3));
    assert_eq!(first, second);

    let mut sorted = first.clone();
    sorted.sort();
    let mut reference = full_deck(false).to_vec();
    reference.sort();
    assert_eq!(sorted, reference);
}

#[test]
fn odds_of_card_with_nothing_known() {
    let ace_of_spades = card(Rank::Ace, Suit::Spade);
    assert_eq!(odds_of_card(&[], ace_of_spades, false), 1.0 / 52.0);
    assert_eq!(odds_of_card(&[], ace_of_spades, true), 1.0 / 54.0);
    assert_eq!(odds_of_card(&[], Card::Joker, true), 2.0 / 54.0);
    assert_eq!(odds_of_card(&[], Card::Joker, false), 0.0);
}

#[test]
fn known_cards_leave_the_pool_once_each() {
    let ace = card(Rank::Ace, Suit::Spade);
    let king = card(Rank::King, Suit::Heart);

    assert_eq!(odds_of_card(&[ace], ace, false), 0.0);
    assert_eq!(odds_of_card(&[ace], king, false), 1.0 / 51.0);

    // A card reported twice only leaves the deck once.
    assert_eq!(odds_of_card(&[ace, ace], king, false), 1.0 / 51.0);
    // Jokers are not in the standard deck.
    assert_eq!(odds_of_card(&[Card::Joker], king, false), 1.0 / 52.0);
    // One joker seen leaves the other one in the pool.
    assert_eq!(odds_of_card(&[Card::Joker], Card::Joker, true), 1.0 / 53.0);

    let pool = UnknownPool::new(&[ace, king, Card::Joker], true);
    assert_eq!(pool.len(), 51);
    assert!(!pool.cards().contains(&ace));
}

#[test]
fn odds_of_rank_sums_suits() {
    assert_close(odds_of_rank(&[], Rank::Seven, false), 4.0 / 52.0);

    let queens: Vec<Card> = Suit::ALL.iter().map(|&s| card(Rank::Queen, s)).collect();
    assert_eq!(odds_of_rank(&queens, Rank::Queen, false), 0.0);
    assert_close(odds_of_rank(&queens, Rank::King, false), 4.0 / 48.0);
}

#[test]
fn fully_known_deck_has_no_odds() {
    let known = full_deck(false);
    let target = card(Rank::Two, Suit::Club);

    assert_eq!(
        try_odds_of_card(known, target, false).unwrap_err(),
        OddsError::DivisionUndefined
    );
    assert_eq!(odds_of_card(known, target, false), 0.0);
    assert_eq!(odds_of_rank(known, Rank::Two, false), 0.0);
    assert!(UnknownPool::new(known, false).is_empty());
}

#[test]
fn rate_score_picks_nearer_target() {
    let seven = rate_score(points(7), Direction::Even);
    assert_eq!(seven.distance, Score::ZERO);
    assert_eq!(seven.direction, Direction::Seven);
    assert_eq!(seven.direction.signum(), -1);

    let twenty_seven = rate_score(points(27), Direction::Even);
    assert_eq!(twenty_seven.distance, Score::ZERO);
    assert_eq!(twenty_seven.direction.signum(), 1);

    let seventeen = rate_score(points(17), Direction::Even);
    assert_eq!(seventeen.distance, points(10));
    assert_eq!(seventeen.direction, Direction::Even);
    assert_eq!(seventeen.direction.signum(), 0);

    let half_point = rate_score(half(1), Direction::Even);
    assert_eq!(half_point.distance, half(13));
    assert_eq!(half_point.direction, Direction::Seven);
}

#[test]
fn rate_score_can_be_forced() {
    let low = rate_score(points(17), Direction::Seven);
    assert_eq!(low.distance, points(10));
    assert_eq!(low.direction, Direction::Seven);

    let high = rate_score(points(3), Direction::TwentySeven);
    assert_eq!(high.distance, points(24));
    assert_eq!(high.direction, Direction::TwentySeven);

    assert_eq!(Direction::Seven.target(), Some(points(7)));
    assert_eq!(Direction::TwentySeven.target(), Some(points(27)));
    assert_eq!(Direction::Even.target(), None);
}

#[test]
fn hand_totals() {
    assert_eq!(total_hand_value(&[card(Rank::Ace, Suit::Spade)]), points(11));
    assert_eq!(total_hand_value(&[card(Rank::Seven, Suit::Heart)]), points(7));
    assert_eq!(
        rate_score(total_hand_value(&[card(Rank::Seven, Suit::Heart)]), Direction::Even).direction,
        Direction::Seven
    );
    assert_eq!(
        total_hand_value(&[card(Rank::Nine, Suit::Club), card(Rank::Ten, Suit::Club)]),
        points(5)
    );
    assert_eq!(
        total_hand_value(&[
            card(Rank::Jack, Suit::Heart),
            card(Rank::Queen, Suit::Heart),
            card(Rank::King, Suit::Heart),
        ]),
        half(3)
    );
    assert_eq!(
        total_hand_value(&[Card::Joker, card(Rank::Seven, Suit::Club)]),
        points(7)
    );
    assert_eq!(total_hand_value(&[]), Score::ZERO);
}

#[test]
fn aces_pick_the_closer_total() {
    // 8 + 8 = 16: an ace as 11 reaches 27.
    let hand = [
        card(Rank::Eight, Suit::Club),
        card(Rank::Eight, Suit::Heart),
        card(Rank::Ace, Suit::Club),
    ];
    assert_eq!(total_hand_value(&hand), points(27));

    // 5 + ace as 1 reaches 6, closer than 16.
    let hand = [card(Rank::Five, Suit::Club), card(Rank::Ace, Suit::Club)];
    assert_eq!(total_hand_value(&hand), points(6));
}

#[test]
fn ace_ties_follow_the_configured_side() {
    // Two aces: 2, 12 and 22 are all 5 away from a target.
    let aces = [card(Rank::Ace, Suit::Club), card(Rank::Ace, Suit::Heart)];
    assert_eq!(total_hand_value(&aces), points(2));
    assert_eq!(total_hand_value_with(&aces, AceTieBreak::Low), points(2));
    assert_eq!(total_hand_value_with(&aces, AceTieBreak::High), points(22));

    let hand = Hand::from_cards(aces.to_vec());
    assert_eq!(hand.ace_count(), 2);
    assert_eq!(hand.value(), points(2));
    assert_eq!(hand.value_with(AceTieBreak::High), points(22));
}

fn recursive_ace_value(base: Score, aces: usize, prefer_high: bool) -> Score {
    if aces == 0 {
        return base;
    }
    let high = recursive_ace_value(base + points(11), aces - 1, prefer_high);
    let low = recursive_ace_value(base + points(1), aces - 1, prefer_high);
    let high_distance = rate_score(high, Direction::Even).distance;
    let low_distance = rate_score(low, Direction::Even).distance;
    if high_distance < low_distance || (prefer_high && high_distance == low_distance) {
        high
    } else {
        low
    }
}

#[test]
fn ace_sweep_matches_branching_definition() {
    for base in 0..=60 {
        for aces in 0..=6 {
            let base = half(base);
            assert_eq!(
                branch_ace_value(base, aces),
                recursive_ace_value(base, aces, false),
                "base {base}, {aces} aces"
            );
            assert_eq!(
                branch_ace_value_with(base, aces, AceTieBreak::High),
                recursive_ace_value(base, aces, true),
                "base {base}, {aces} aces, high ties"
            );
        }
    }
}

#[test]
fn large_ace_counts_are_counted_exactly() {
    let hand: Hand = std::iter::repeat_n(card(Rank::Ace, Suit::Spade), 256).collect();
    assert_eq!(hand.ace_count(), 256);
    // Every extra high ace only moves further from 27.
    assert_eq!(hand.value(), points(256));
    assert_eq!(total_hand_value(hand.cards()), points(256));

    assert_eq!(branch_ace_value(Score::ZERO, 1000), points(1000));
    assert_eq!(
        branch_ace_value_with(Score::ZERO, 300, AceTieBreak::High),
        points(300)
    );
}

#[test]
fn hand_grows_in_order() {
    let mut hand = Hand::new();
    assert!(hand.is_empty());
    hand.push(card(Rank::Four, Suit::Club));
    hand.push(Card::Joker);
    hand.push(card(Rank::Ten, Suit::Spade));
    assert_eq!(hand.len(), 3);
    assert_eq!(hand.to_string(), "4C Joker 10S");
    assert_eq!(hand.value(), points(7));
    assert_eq!(hand.rating().distance, Score::ZERO);

    let cards = vec![
        card(Rank::Four, Suit::Club),
        Card::Joker,
        card(Rank::Ten, Suit::Spade),
    ];
    assert_eq!(Hand::from(cards.clone()), hand);
    assert_eq!(cards.into_iter().collect::<Hand>(), hand);
}

#[test]
fn score_display() {
    assert_eq!(points(7).to_string(), "7");
    assert_eq!(half(15).to_string(), "7.5");
    assert_eq!(half(1).to_string(), "0.5");
    assert_eq!(half(15).as_f64(), 7.5);
    assert_eq!(half(15).half_points(), 15);
    assert_eq!(points(7).half_points(), 14);
}

#[test]
fn table_state_is_append_only() {
    let mut table = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);
    assert_eq!(
        table.deal("Alice", Hand::new()).unwrap_err(),
        RoundError::InvalidState
    );
    assert_eq!(
        table.draw("Carol", Card::Joker).unwrap_err(),
        RoundError::UnknownPlayer("Carol".to_string())
    );

    table.draw("Alice", card(Rank::Two, Suit::Club)).unwrap();
    assert_eq!(table.hand("Alice").unwrap().len(), 2);
    assert_eq!(table.card_count(), 2);
    assert_eq!(table.visible_cards().len(), 2);
    assert!(table.contains("Alice"));
    assert_eq!(table.len(), 1);
}

#[test]
fn bob_can_improve_on_alice() {
    let table = table(&[
        ("Alice", &[card(Rank::King, Suit::Heart)]),
        ("Bob", &[card(Rank::Ace, Suit::Spade)]),
    ]);
    let alice = table.hand("Alice").unwrap().value();
    let bob = table.hand("Bob").unwrap().value();
    assert_eq!(alice, half(1));
    assert_eq!(bob, points(11));

    let odds = odds_to_beat(
        bob,
        &table,
        Some(alice),
        Direction::Even,
        &CounterOptions::default(),
    );

    // Faces (11.5), aces (12), twos and nines (13) beat Alice's 6.5 distance.
    assert_close(odds.improvement, 22.0 / 50.0);
    // Cumulatively they only reach 44%, so no draw is reliable.
    assert_eq!(odds.threshold, bob);
    assert_eq!(odds.direction, Direction::Seven);
}

#[test]
fn threshold_walks_cumulative_odds() {
    let table = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);
    let total = half(1);

    let odds = odds_to_beat(total, &table, None, Direction::Even, &CounterOptions::default());
    assert_close(odds.improvement, 1.0);
    // 6.5, 7.5, 5.5, 8.5, 4.5, 3.5 hold 28/51; the 2.5 draws lift it to 36/51.
    assert_eq!(odds.threshold, half(5));
    assert_eq!(odds.direction, Direction::Seven);

    let options = CounterOptions::default().with_improvement_confidence(0.3);
    let odds = odds_to_beat(total, &table, None, Direction::Even, &options);
    assert_eq!(odds.threshold, half(17));
}

#[test]
fn forced_direction_rates_against_one_target() {
    let table = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);

    let odds = odds_to_beat(
        half(1),
        &table,
        None,
        Direction::TwentySeven,
        &CounterOptions::default(),
    );
    assert_close(odds.improvement, 1.0);
    // 11.5, 8.5, 7.5, 6.5, 5.5, 4.5 hold 24/51; the 3.5 draws lift it to 32/51.
    assert_eq!(odds.threshold, half(7));
    assert_eq!(odds.direction, Direction::TwentySeven);
}

#[test]
fn drawn_ace_follows_the_tie_break() {
    // From 11 a drawn ace makes 12 or 22, both 5 away from a target.
    let table = table(&[("Alice", &[card(Rank::Ace, Suit::Spade)])]);
    let low = CounterOptions::default();
    let high = CounterOptions::default().with_ace_tie_break(AceTieBreak::High);

    // Against 7 alone, 18 is 11 away. Faces, 2-6, 9s and 10s (40 of 51)
    // beat that whichever way the ace goes; the three aces only as 12.
    let odds = odds_to_beat(points(11), &table, Some(points(18)), Direction::Seven, &low);
    assert_close(odds.improvement, 43.0 / 51.0);
    let odds = odds_to_beat(points(11), &table, Some(points(18)), Direction::Seven, &high);
    assert_close(odds.improvement, 40.0 / 51.0);
}

#[test]
fn nothing_beats_a_perfect_score() {
    let table = table(&[("Alice", &[card(Rank::Seven, Suit::Heart)])]);
    let odds = odds_to_beat(points(7), &table, None, Direction::Even, &CounterOptions::default());
    assert_eq!(odds.improvement, 0.0);
    assert_eq!(odds.threshold, points(7));
    assert_eq!(odds.direction, Direction::Seven);
}

#[test]
fn advise_draws_when_alone_and_improvable() {
    let table = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);
    let advice = advise("Alice", &table, &CounterOptions::default()).unwrap();
    assert_eq!(advice.action, Action::Draw);
    assert_eq!(advice.total, half(1));
    assert_eq!(advice.max_opponent, 0.0);
}

#[test]
fn advise_stays_without_reliable_improvement() {
    let table = table(&[
        ("Alice", &[card(Rank::King, Suit::Heart)]),
        ("Bob", &[card(Rank::Ace, Suit::Spade)]),
    ]);
    let advice = advise("Bob", &table, &CounterOptions::default()).unwrap();
    assert_eq!(advice.action, Action::Stay);
    assert_eq!(advice.odds.threshold, advice.total);
    // Alice reaches 3.5 to 8.5 with 28 of 50 cards.
    assert_close(advice.max_opponent, 28.0 / 50.0);
}

#[test]
fn advise_folds_past_the_fold_limit() {
    let table = table(&[
        ("Alice", &[card(Rank::King, Suit::Heart)]),
        ("Bob", &[card(Rank::Ace, Suit::Spade)]),
    ]);
    let options = CounterOptions::default()
        .with_stay_above(0.5)
        .with_fold_above(0.55);
    let advice = advise("Bob", &table, &options).unwrap();
    assert_eq!(advice.action, Action::Fold);

    let options = CounterOptions::default().with_stay_above(0.5);
    let advice = advise("Bob", &table, &options).unwrap();
    assert_eq!(advice.action, Action::Stay);
}

#[test]
fn jokers_in_play_dilute_the_odds() {
    let unseen = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);
    let seen = table(&[("Alice", &[card(Rank::King, Suit::Heart), Card::Joker])]);
    let options = CounterOptions::default().with_jokers(true);

    // A joker leaves the total where it is, so only 51 of 53 cards improve.
    let advice = advise("Alice", &unseen, &options).unwrap();
    assert_eq!(advice.action, Action::Draw);
    assert_close(advice.odds.improvement, 51.0 / 53.0);
    // 28/53 is still short of 0.6; the 2.5 draws lift it to 36/53.
    assert_eq!(advice.odds.threshold, half(5));

    // A seen joker leaves the pool.
    let advice = advise("Alice", &seen, &options).unwrap();
    assert_close(advice.odds.improvement, 51.0 / 52.0);
}

#[test]
fn advise_requires_a_seated_player() {
    let table = table(&[("Alice", &[card(Rank::King, Suit::Heart)])]);
    assert_eq!(
        advise("Carol", &table, &CounterOptions::default()).unwrap_err(),
        RoundError::UnknownPlayer("Carol".to_string())
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = CounterOptions::default()
        .with_improvement_confidence(0.5)
        .with_stay_above(0.6)
        .with_fold_above(0.8)
        .with_ace_tie_break(AceTieBreak::High)
        .with_jokers(true);

    assert_eq!(options.improvement_confidence, 0.5);
    assert_eq!(options.stay_above, 0.6);
    assert_eq!(options.fold_above, 0.8);
    assert_eq!(options.ace_tie_break, AceTieBreak::High);
    assert!(options.include_jokers);

    let defaults = CounterOptions::default();
    assert_eq!(defaults.improvement_confidence, 0.6);
    assert_eq!(defaults.stay_above, 0.7);
    assert_eq!(defaults.fold_above, 0.9);
    assert_eq!(defaults.ace_tie_break, AceTieBreak::Low);
    assert!(!defaults.include_jokers);
}
