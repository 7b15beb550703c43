//! Round flow: turns go around the table until a full pass without a draw.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use log::info;

use crate::advice::{Action, Advice, advise};
use crate::card::Card;
use crate::deck::full_deck;
use crate::error::RoundError;
use crate::hand::Hand;
use crate::options::CounterOptions;
use crate::table::TableState;

pub mod state;

pub use state::{Phase, Turn};

/// The outside world a round talks to: whoever knows what was dealt and
/// drawn, and who acts on the advice.
pub trait TableIo {
    /// Returns the cards dealt to `player` that the controlled player can
    /// see. For the controlled player this is both the showing and the
    /// hidden card; for everyone else only the showing card.
    fn deal(&mut self, player: &str, controlled: bool) -> Vec<Card>;

    /// Plays `player`'s turn and returns the card they drew, or `None` if
    /// they passed. `advice` is present on the controlled player's turn.
    fn turn(&mut self, player: &str, advice: Option<&Advice>) -> Option<Card>;

    /// Returns whether another round should be played.
    fn another_round(&mut self) -> bool;
}

fn seating<S: AsRef<str>>(order: &[S], controlled: &str) -> Result<Vec<String>, RoundError> {
    if order.is_empty() {
        return Err(RoundError::InvalidState);
    }

    let mut seats: Vec<String> = Vec::with_capacity(order.len());
    for player in order {
        let player = player.as_ref();
        if seats.iter().any(|seated| seated == player) {
            return Err(RoundError::InvalidState);
        }
        seats.push(player.to_string());
    }

    if !seats.iter().any(|seated| seated == controlled) {
        return Err(RoundError::UnknownPlayer(controlled.to_string()));
    }

    Ok(seats)
}

/// One round of 7-27 seen from the controlled player's seat.
///
/// Turns are recorded one at a time in seating order; the round is
/// complete once a whole pass around the table records no draw.
#[derive(Debug, Clone)]
pub struct RoundState {
    order: Vec<String>,
    controlled: String,
    table: TableState,
    options: CounterOptions,
    phase: Phase,
    position: usize,
    drew_this_pass: bool,
    folded: bool,
}

impl RoundState {
    /// Starts a round from the dealt table.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the seating order is empty,
    /// names a player twice, does not match the players on the table, or
    /// the table holds more cards than the deck. Returns
    /// [`RoundError::UnknownPlayer`] if the controlled player or a seated
    /// player has no hand.
    pub fn new<S: AsRef<str>>(
        order: &[S],
        controlled: &str,
        table: TableState,
        options: CounterOptions,
    ) -> Result<Self, RoundError> {
        let order = seating(order, controlled)?;

        if let Some(missing) = order.iter().find(|player| !table.contains(player)) {
            return Err(RoundError::UnknownPlayer(missing.clone()));
        }
        if table.len() != order.len() || table.card_count() > full_deck(options.include_jokers).len()
        {
            return Err(RoundError::InvalidState);
        }

        Ok(Self {
            order,
            controlled: controlled.to_string(),
            table,
            options,
            phase: Phase::Dealt,
            position: 0,
            drew_this_pass: false,
            folded: false,
        })
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the hands on the table.
    #[must_use]
    pub const fn table(&self) -> &TableState {
        &self.table
    }

    /// Returns the seating order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Returns the controlled player's name.
    #[must_use]
    pub fn controlled(&self) -> &str {
        &self.controlled
    }

    /// Returns whether the controlled player has folded.
    #[must_use]
    pub const fn is_folded(&self) -> bool {
        self.folded
    }

    /// Marks the controlled player as folded; they pass every later turn.
    pub const fn fold(&mut self) {
        self.folded = true;
    }

    /// Returns the player whose turn it is, or `None` once the round is
    /// complete.
    #[must_use]
    pub fn current_player(&self) -> Option<&str> {
        if self.phase == Phase::RoundComplete {
            return None;
        }
        self.order.get(self.position).map(String::as_str)
    }

    /// Returns whether it is the controlled player's turn.
    #[must_use]
    pub fn is_controlled_turn(&self) -> bool {
        self.current_player() == Some(self.controlled.as_str())
    }

    /// Returns advice for the current turn.
    ///
    /// Advice is only given on the controlled player's turn while they are
    /// still in the round.
    ///
    /// # Errors
    ///
    /// Returns an error if the controlled player has no hand on the table.
    pub fn advise_current(&self) -> Result<Option<Advice>, RoundError> {
        if !self.is_controlled_turn() || self.folded {
            return Ok(None);
        }
        advise(&self.controlled, &self.table, &self.options).map(Some)
    }

    /// Records the current player's turn and moves to the next player.
    ///
    /// # Errors
    ///
    /// Returns [`RoundError::InvalidState`] if the round is already
    /// complete or the draw would put more cards on the table than the
    /// deck holds.
    pub fn record_turn(&mut self, turn: Turn) -> Result<Phase, RoundError> {
        if self.phase == Phase::RoundComplete {
            return Err(RoundError::InvalidState);
        }
        let player = self
            .order
            .get(self.position)
            .ok_or(RoundError::InvalidState)?;

        if let Turn::Drew(card) = turn {
            if self.table.card_count() >= full_deck(self.options.include_jokers).len() {
                return Err(RoundError::InvalidState);
            }
            self.table.draw(player, card)?;
            self.drew_this_pass = true;
        }

        self.phase = Phase::PlayerTurn;
        self.position += 1;

        if self.position == self.order.len() {
            self.position = 0;
            if self.drew_this_pass {
                self.drew_this_pass = false;
            } else {
                info!("round complete with {} cards on the table", self.table.card_count());
                self.phase = Phase::RoundComplete;
            }
        }

        Ok(self.phase)
    }
}

/// Plays one round of 7-27 for `controlled`, seated among `order`.
///
/// Hands are dealt through `io`, then turns go around the table in
/// `order`. On the controlled player's turn `io` receives the advice and
/// reports what was actually done; a controlled player who folds passes
/// silently for the rest of the round. Returns whether `io` wants another
/// round.
///
/// # Errors
///
/// Returns an error if the seating is invalid or `io` reports more cards
/// than the deck holds.
pub fn play<S, T>(
    order: &[S],
    controlled: &str,
    io: &mut T,
    options: &CounterOptions,
) -> Result<bool, RoundError>
where
    S: AsRef<str>,
    T: TableIo + ?Sized,
{
    let seats = seating(order, controlled)?;

    let mut table = TableState::new();
    for player in &seats {
        let cards = io.deal(player, *player == controlled);
        table.deal(player, Hand::from_cards(cards))?;
    }

    let mut round = RoundState::new(seats.as_slice(), controlled, table, options.clone())?;
    info!("dealt {} players", seats.len());

    while let Some(player) = round.current_player() {
        let player = player.to_string();

        let draw = match round.advise_current()? {
            Some(advice) => {
                let draw = io.turn(&player, Some(&advice));
                if draw.is_none() && advice.action == Action::Fold {
                    info!("{player} folds");
                    round.fold();
                }
                draw
            }
            None if round.is_controlled_turn() => None,
            None => io.turn(&player, None),
        };

        round.record_turn(draw.into())?;
    }

    Ok(io.another_round())
}
