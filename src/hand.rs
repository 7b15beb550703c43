//! Hands and the ace-flexible 7-27 valuation.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::options::AceTieBreak;
use crate::score::{Direction, HIGH_TARGET, LOW_TARGET, Rating, Score};

const ACE_LOW: Score = Score::from_points(1);
const ACE_SPREAD: Score = Score::from_points(10);

/// Rates how close `score` is to the nearer target, or to the target
/// `force` points at.
///
/// # Example
///
/// ```
/// use seven27::{Direction, Score, rate_score};
///
/// let rating = rate_score(Score::from_points(17), Direction::Even);
/// assert_eq!(rating.distance, Score::from_points(10));
/// assert_eq!(rating.direction, Direction::Even);
/// ```
#[must_use]
pub fn rate_score(score: Score, force: Direction) -> Rating {
    let to_seven = score.abs_diff(LOW_TARGET);
    let to_twenty_seven = score.abs_diff(HIGH_TARGET);

    match force {
        Direction::Seven => Rating {
            distance: to_seven,
            direction: Direction::Seven,
        },
        Direction::TwentySeven => Rating {
            distance: to_twenty_seven,
            direction: Direction::TwentySeven,
        },
        Direction::Even => Rating {
            distance: to_seven.min(to_twenty_seven),
            direction: match to_seven.cmp(&to_twenty_seven) {
                core::cmp::Ordering::Less => Direction::Seven,
                core::cmp::Ordering::Equal => Direction::Even,
                core::cmp::Ordering::Greater => Direction::TwentySeven,
            },
        },
    }
}

/// Returns the best total reachable by counting each of `aces` aces as
/// either 1 or 11 on top of `base`, preferring the lower total on ties.
#[must_use]
pub fn branch_ace_value(base: Score, aces: usize) -> Score {
    branch_ace_value_with(base, aces, AceTieBreak::Low)
}

/// Returns the best total reachable by counting each of `aces` aces as
/// either 1 or 11 on top of `base`.
///
/// Only the number of aces counted high matters, so the candidates are
/// `base + aces + 10k` for `k` in `0..=aces`. The candidate with the
/// smallest unforced distance wins and `tie_break` settles equal distances.
#[must_use]
pub fn branch_ace_value_with(base: Score, aces: usize, tie_break: AceTieBreak) -> Score {
    let mut all_low = base;
    for _ in 0..aces {
        all_low = all_low + ACE_LOW;
    }

    let mut best = all_low;
    let mut best_distance = rate_score(best, Direction::Even).distance;
    let mut candidate = all_low;

    for _ in 0..aces {
        candidate = candidate + ACE_SPREAD;
        let distance = rate_score(candidate, Direction::Even).distance;

        let better = match tie_break {
            AceTieBreak::Low => distance < best_distance,
            AceTieBreak::High => distance <= best_distance,
        };
        if better {
            best = candidate;
            best_distance = distance;
        }
    }

    best
}

/// Returns the best total of a hand, preferring the lower total on ties.
///
/// Jokers count for nothing.
///
/// # Example
///
/// ```
/// use seven27::{Card, Rank, Score, Suit, total_hand_value};
///
/// let hand = [Card::new(Rank::Ace, Suit::Spade)];
/// assert_eq!(total_hand_value(&hand), Score::from_points(11));
/// ```
#[must_use]
pub fn total_hand_value(cards: &[Card]) -> Score {
    total_hand_value_with(cards, AceTieBreak::Low)
}

/// Returns the best total of a hand using the given ace tie-break.
#[must_use]
pub fn total_hand_value_with(cards: &[Card], tie_break: AceTieBreak) -> Score {
    let mut base = Score::ZERO;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        } else if let Some(points) = card.rank().and_then(|rank| rank.point_value()) {
            base = base + points;
        }
    }

    branch_ace_value_with(base, aces, tie_break)
}

/// A player's hand.
///
/// Cards are only ever appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Creates a hand holding the given cards.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Adds a card to the hand.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of aces in the hand.
    #[must_use]
    pub fn ace_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_ace()).count()
    }

    /// Calculates the best total of the hand.
    #[must_use]
    pub fn value(&self) -> Score {
        total_hand_value(&self.cards)
    }

    /// Calculates the best total of the hand using the given ace tie-break.
    #[must_use]
    pub fn value_with(&self, tie_break: AceTieBreak) -> Score {
        total_hand_value_with(&self.cards, tie_break)
    }

    /// Rates the best total of the hand against the nearer target.
    #[must_use]
    pub fn rating(&self) -> Rating {
        rate_score(self.value(), Direction::Even)
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self::from_cards(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self::from_cards(iter.into_iter().collect())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
