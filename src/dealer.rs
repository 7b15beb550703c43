//! A self-dealing table for playing rounds without a human at the keyboard.

extern crate alloc;

use alloc::vec::Vec;

use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::advice::{Action, Advice, advise};
use crate::card::Card;
use crate::deck::shuffled_deck;
use crate::hand::Hand;
use crate::options::CounterOptions;
use crate::round::TableIo;
use crate::table::TableState;

/// A [`TableIo`] that deals from its own shuffled
/// shoe.
///
/// Every player is dealt a showing and a hidden card. The controlled
/// player draws only when advised to; every other player runs the same
/// advice on the full table, hidden cards included, and draws on
/// [`Action::Draw`]. An empty shoe makes every player pass.
pub struct ShuffledTable {
    /// Cards left in the shoe.
    pub shoe: Vec<Card>,
    /// Options used for the opponents' decisions.
    pub options: CounterOptions,
    /// Every dealt and drawn card, hidden cards included.
    hands: TableState,
    /// Rounds still to be played after the current one.
    rounds_left: u32,
    /// Whether the next deal starts a fresh shoe.
    fresh_round: bool,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl ShuffledTable {
    /// Creates a table that plays `rounds` rounds with the given seed.
    #[must_use]
    pub fn new(options: CounterOptions, seed: u64, rounds: u32) -> Self {
        Self {
            shoe: Vec::new(),
            options,
            hands: TableState::new(),
            rounds_left: rounds.saturating_sub(1),
            fresh_round: true,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Returns every hand dealt this round, hidden cards included.
    #[must_use]
    pub const fn hands(&self) -> &TableState {
        &self.hands
    }

    /// Returns the number of cards remaining in the shoe.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.shoe.len()
    }

    fn draw(&mut self) -> Option<Card> {
        self.shoe.pop()
    }

    /// Draws a card onto `player`'s hand. A card that cannot be recorded
    /// goes back on top of the shoe.
    fn draw_for(&mut self, player: &str) -> Option<Card> {
        let card = self.draw()?;
        if let Err(err) = self.hands.draw(player, card) {
            debug!("{player} cannot draw: {err}");
            self.shoe.push(card);
            return None;
        }
        Some(card)
    }
}

/// The part of a dealt hand the controlled player gets to see.
fn visible(cards: &[Card], controlled: bool) -> Vec<Card> {
    if controlled {
        cards.to_vec()
    } else {
        cards.iter().take(1).copied().collect()
    }
}

impl TableIo for ShuffledTable {
    fn deal(&mut self, player: &str, controlled: bool) -> Vec<Card> {
        if self.fresh_round {
            self.shoe = shuffled_deck(self.options.include_jokers, &mut self.rng);
            self.hands = TableState::new();
            self.fresh_round = false;
        }

        let dealt: Vec<Card> = [self.draw(), self.draw()].into_iter().flatten().collect();
        if let Err(err) = self.hands.deal(player, Hand::from_cards(dealt.clone())) {
            debug!("{player} cannot be dealt in: {err}");
            self.shoe.extend(dealt.into_iter().rev());
            return self
                .hands
                .hand(player)
                .map(|hand| visible(hand.cards(), controlled))
                .unwrap_or_default();
        }

        visible(&dealt, controlled)
    }

    fn turn(&mut self, player: &str, advice: Option<&Advice>) -> Option<Card> {
        let action = match advice {
            Some(advice) => advice.action,
            None => advise(player, &self.hands, &self.options).map_or(Action::Stay, |a| a.action),
        };

        if action == Action::Draw {
            self.draw_for(player)
        } else {
            None
        }
    }

    fn another_round(&mut self) -> bool {
        self.fresh_round = true;
        if self.rounds_left == 0 {
            return false;
        }
        self.rounds_left -= 1;
        true
    }
}
