//! Error types for engine operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur while reading a card token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    /// The token is not a rank followed by a suit, nor `Joker`.
    #[error("invalid card `{0}`")]
    InvalidCard(String),
}

/// Errors that can occur while computing draw odds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OddsError {
    /// Every card of the reference deck is already known.
    #[error("no unknown cards left to draw from")]
    DivisionUndefined,
}

/// Errors that can occur while driving a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundError {
    /// The caller broke the round contract (empty or duplicated seating,
    /// turns after completion, more cards than the deck holds).
    #[error("invalid round state")]
    InvalidState,
    /// Player not found.
    #[error("player `{0}` not found")]
    UnknownPlayer(String),
}
