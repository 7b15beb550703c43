//! Reference decks.
//!
//! The two reference decks (with and without jokers) are built once per
//! process and shared as `'static` slices.

extern crate alloc;

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, Rank, Suit};
use crate::sync::Lazy;

/// Number of cards in a deck without jokers.
pub const DECK_SIZE: usize = 52;

/// Number of cards in a deck with jokers.
pub const JOKER_DECK_SIZE: usize = DECK_SIZE + JOKER_COUNT;

/// Number of jokers in a joker deck.
pub const JOKER_COUNT: usize = 2;

static STANDARD: Lazy<Vec<Card>> = Lazy::new(|| build_deck(false));
static WITH_JOKERS: Lazy<Vec<Card>> = Lazy::new(|| build_deck(true));

/// Jokers first, then every rank in order over every suit.
fn build_deck(include_jokers: bool) -> Vec<Card> {
    let mut cards = Vec::with_capacity(JOKER_DECK_SIZE);

    if include_jokers {
        cards.extend([Card::Joker; JOKER_COUNT]);
    }

    for rank in Rank::ALL {
        for suit in Suit::ALL {
            cards.push(Card::new(rank, suit));
        }
    }

    cards
}

/// Returns the reference deck.
///
/// The deck is generated on first use for each value of `include_jokers`
/// and the same slice is returned on every later call.
///
/// # Example
///
/// ```
/// use seven27::full_deck;
///
/// assert_eq!(full_deck(false).len(), 52);
/// assert_eq!(full_deck(true).len(), 54);
/// ```
#[must_use]
pub fn full_deck(include_jokers: bool) -> &'static [Card] {
    if include_jokers {
        WITH_JOKERS.get()
    } else {
        STANDARD.get()
    }
}

/// Returns a shuffled copy of the reference deck.
#[must_use]
pub fn shuffled_deck<R: Rng + ?Sized>(include_jokers: bool, rng: &mut R) -> Vec<Card> {
    let mut cards = full_deck(include_jokers).to_vec();
    cards.shuffle(rng);
    cards
}
