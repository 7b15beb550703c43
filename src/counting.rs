//! Draw odds over the cards nobody has seen yet.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;

use crate::card::{Card, Rank, Suit};
use crate::deck::full_deck;
use crate::error::OddsError;

/// The reference deck with every known card taken out.
///
/// Each known card removes one matching card from the deck. Known cards
/// the deck does not contain (a joker when jokers are out of play, or a
/// card reported twice) remove nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPool {
    cards: Vec<Card>,
}

impl UnknownPool {
    /// Builds the pool from the cards already seen.
    #[must_use]
    pub fn new(known: &[Card], include_jokers: bool) -> Self {
        let mut cards = full_deck(include_jokers).to_vec();

        for card in known {
            if let Some(index) = cards.iter().position(|c| c == card) {
                cards.swap_remove(index);
            }
        }

        Self { cards }
    }

    /// Returns the unseen cards, in no particular order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of unseen cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been seen.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Probability that the next draw is exactly `target`.
    ///
    /// # Errors
    ///
    /// Returns [`OddsError::DivisionUndefined`] if the pool is empty.
    pub fn try_odds_of_card(&self, target: Card) -> Result<f64, OddsError> {
        if self.cards.is_empty() {
            return Err(OddsError::DivisionUndefined);
        }

        let hits = self.cards.iter().filter(|&&c| c == target).count();

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let odds = hits as f64 / self.cards.len() as f64;

        Ok(odds)
    }

    /// Probability that the next draw is exactly `target`, or `0.0` when
    /// no unseen cards remain.
    #[must_use]
    pub fn odds_of_card(&self, target: Card) -> f64 {
        self.try_odds_of_card(target).unwrap_or_else(|err| {
            debug!("odds of {target}: {err}, using 0");
            0.0
        })
    }

    /// Probability that the next draw has rank `rank`, in any suit.
    #[must_use]
    pub fn odds_of_rank(&self, rank: Rank) -> f64 {
        Suit::ALL
            .into_iter()
            .map(|suit| self.odds_of_card(Card::new(rank, suit)))
            .sum()
    }
}

/// Probability that a draw from the unseen cards is exactly `target`.
///
/// # Errors
///
/// Returns [`OddsError::DivisionUndefined`] if every card of the deck is
/// already known.
pub fn try_odds_of_card(
    known: &[Card],
    target: Card,
    include_jokers: bool,
) -> Result<f64, OddsError> {
    UnknownPool::new(known, include_jokers).try_odds_of_card(target)
}

/// Probability that a draw from the unseen cards is exactly `target`.
///
/// When every card of the deck is already known the odds are `0.0`.
///
/// # Example
///
/// ```
/// use seven27::{Card, Rank, Suit, odds_of_card};
///
/// let odds = odds_of_card(&[], Card::new(Rank::Ace, Suit::Spade), false);
/// assert_eq!(odds, 1.0 / 52.0);
/// ```
#[must_use]
pub fn odds_of_card(known: &[Card], target: Card, include_jokers: bool) -> f64 {
    UnknownPool::new(known, include_jokers).odds_of_card(target)
}

/// Probability that a draw from the unseen cards has rank `rank`.
#[must_use]
pub fn odds_of_rank(known: &[Card], rank: Rank, include_jokers: bool) -> f64 {
    UnknownPool::new(known, include_jokers).odds_of_rank(rank)
}
