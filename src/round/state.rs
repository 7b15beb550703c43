//! Round state types.

use crate::card::Card;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Hands have been dealt and no turn has been taken.
    Dealt,
    /// Players are taking turns around the table.
    PlayerTurn,
    /// A full pass around the table ended without a draw.
    RoundComplete,
}

/// Outcome of a single turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// The player drew this card.
    Drew(Card),
    /// The player did not draw.
    Passed,
}

impl From<Option<Card>> for Turn {
    fn from(draw: Option<Card>) -> Self {
        draw.map_or(Self::Passed, Self::Drew)
    }
}
