//! The cards every player holds.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::Card;
use crate::error::RoundError;
use crate::hand::Hand;

/// Hands on the table, keyed by player name.
///
/// Players are seated once and never removed; hands only grow.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    hands: HashMap<String, Hand>,
}

impl TableState {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            hands: HashMap::new(),
        }
    }

    /// Seats a player with their dealt hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the player is already seated.
    pub fn deal(&mut self, player: &str, hand: Hand) -> Result<(), RoundError> {
        if self.hands.contains_key(player) {
            return Err(RoundError::InvalidState);
        }
        self.hands.insert(player.to_string(), hand);
        Ok(())
    }

    /// Appends a drawn card to a player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::UnknownPlayer`] if the player is not seated.
    pub fn draw(&mut self, player: &str, card: Card) -> Result<(), RoundError> {
        self.hands
            .get_mut(player)
            .ok_or_else(|| RoundError::UnknownPlayer(player.to_string()))?
            .push(card);
        Ok(())
    }

    /// Returns a player's hand.
    #[must_use]
    pub fn hand(&self, player: &str) -> Option<&Hand> {
        self.hands.get(player)
    }

    /// Returns whether a player is seated.
    #[must_use]
    pub fn contains(&self, player: &str) -> bool {
        self.hands.contains_key(player)
    }

    /// Iterates over seated players and their hands, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Hand)> {
        self.hands.iter().map(|(name, hand)| (name.as_str(), hand))
    }

    /// Returns every card on the table.
    #[must_use]
    pub fn visible_cards(&self) -> Vec<Card> {
        self.hands
            .values()
            .flat_map(|hand| hand.cards().iter().copied())
            .collect()
    }

    /// Returns the number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hands.values().map(Hand::len).sum()
    }

    /// Returns the number of seated players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hands.len()
    }

    /// Returns whether no player is seated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }
}
