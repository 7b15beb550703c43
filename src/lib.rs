//! Card counting and hand valuation for the card game 7-27, with optional
//! `no_std` support.
//!
//! In 7-27 every player aims for a hand total closest to either 7 or 27.
//! Aces are worth 1 or 11, face cards half a point, nines 2 and tens 3.
//! The crate tracks the cards on the table, works out the odds of the next
//! draw, and advises whether to draw, stay or fold.
//!
//! # Example
//!
//! ```
//! use seven27::{CounterOptions, Direction, Hand, TableState, odds_to_beat, parse_card};
//!
//! let mut table = TableState::new();
//! table.deal("Alice", Hand::from_cards(vec![parse_card("KH")?]))?;
//! table.deal("Bob", Hand::from_cards(vec![parse_card("AS")?]))?;
//!
//! let alice = table.hand("Alice").map(Hand::value).unwrap_or_default();
//! let bob = table.hand("Bob").map(Hand::value).unwrap_or_default();
//! let odds = odds_to_beat(bob, &table, Some(alice), Direction::Even, &CounterOptions::default());
//! assert!(odds.improvement > 0.0);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod advice;
pub mod card;
pub mod counting;
pub mod dealer;
pub mod deck;
pub mod error;
pub mod hand;
pub mod options;
pub mod round;
pub mod score;
mod sync;
pub mod table;

// Re-export main types
pub use advice::{Action, Advice, Odds, advise, odds_to_beat};
pub use card::{Card, Rank, Suit, parse_card};
pub use counting::{UnknownPool, odds_of_card, odds_of_rank, try_odds_of_card};
pub use dealer::ShuffledTable;
pub use deck::{DECK_SIZE, JOKER_COUNT, JOKER_DECK_SIZE, full_deck, shuffled_deck};
pub use error::{CardError, OddsError, RoundError};
pub use hand::{
    Hand, branch_ace_value, branch_ace_value_with, rate_score, total_hand_value,
    total_hand_value_with,
};
pub use options::{AceTieBreak, CounterOptions};
pub use round::{Phase, RoundState, TableIo, Turn, play};
pub use score::{Direction, HIGH_TARGET, LOW_TARGET, Rating, Score};
pub use table::TableState;
