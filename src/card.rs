//! Card types and the card token grammar.
//!
//! A token is a rank (`A`, `2`..`10`, `J`, `Q`, `K`) followed by a suit
//! letter (`H`, `C`, `S`, `D`), or the literal `Joker`.

extern crate alloc;

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::CardError;
use crate::score::Score;

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Rank {
    /// Ace, worth 1 or 11.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine, worth 2.
    Nine,
    /// Ten, worth 3.
    Ten,
    /// Jack, worth 0.5.
    Jack,
    /// Queen, worth 0.5.
    Queen,
    /// King, worth 0.5.
    King,
}

impl Rank {
    /// All ranks in deck order.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Returns the fixed point value of the rank.
    ///
    /// Aces have no fixed value and return `None`.
    #[must_use]
    pub const fn point_value(self) -> Option<Score> {
        let half_points = match self {
            Self::Ace => return None,
            Self::Two | Self::Nine => 4,
            Self::Three | Self::Ten => 6,
            Self::Four => 8,
            Self::Five => 10,
            Self::Six => 12,
            Self::Seven => 14,
            Self::Eight => 16,
            Self::Jack | Self::Queen | Self::King => 1,
        };
        Some(Score::from_half_points(half_points))
    }

    /// Returns the rank's token.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Reads a rank token.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.token() == token)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    /// Hearts.
    Heart,
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Diamonds.
    Diamond,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Self; 4] = [Self::Heart, Self::Club, Self::Spade, Self::Diamond];

    /// Returns the suit's token letter.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Heart => 'H',
            Self::Club => 'C',
            Self::Spade => 'S',
            Self::Diamond => 'D',
        }
    }

    /// Reads a suit letter.
    #[must_use]
    pub const fn from_token(token: char) -> Option<Self> {
        match token {
            'H' => Some(Self::Heart),
            'C' => Some(Self::Club),
            'S' => Some(Self::Spade),
            'D' => Some(Self::Diamond),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// A playing card.
///
/// Cards compare structurally: every Joker equals every other Joker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Card {
    /// A ranked, suited card.
    Standard {
        /// The rank of the card.
        rank: Rank,
        /// The suit of the card.
        suit: Suit,
    },
    /// A joker, which has neither rank nor suit.
    Joker,
}

impl Card {
    /// Creates a standard card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self::Standard { rank, suit }
    }

    /// Returns the rank, or `None` for a joker.
    #[must_use]
    pub const fn rank(self) -> Option<Rank> {
        match self {
            Self::Standard { rank, .. } => Some(rank),
            Self::Joker => None,
        }
    }

    /// Returns the suit, or `None` for a joker.
    #[must_use]
    pub const fn suit(self) -> Option<Suit> {
        match self {
            Self::Standard { suit, .. } => Some(suit),
            Self::Joker => None,
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self, Self::Joker)
    }

    /// Returns whether the card is an ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self, Self::Standard { rank: Rank::Ace, .. })
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard { rank, suit } => write!(f, "{rank}{suit}"),
            Self::Joker => f.write_str("Joker"),
        }
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse_card(token)
    }
}

/// Reads a card token such as `"AS"`, `"10C"` or `"Joker"`.
///
/// # Errors
///
/// Returns [`CardError::InvalidCard`] if the rank or suit part of the token
/// is not recognized.
///
/// # Example
///
/// ```
/// use seven27::{Card, Rank, Suit, parse_card};
///
/// assert_eq!(parse_card("10C"), Ok(Card::new(Rank::Ten, Suit::Club)));
/// assert!(parse_card("11C").is_err());
/// ```
pub fn parse_card(token: &str) -> Result<Card, CardError> {
    if token == "Joker" {
        return Ok(Card::Joker);
    }

    let invalid = || CardError::InvalidCard(token.to_string());

    let mut chars = token.chars();
    let suit = chars
        .next_back()
        .and_then(Suit::from_token)
        .ok_or_else(invalid)?;
    let rank = Rank::from_token(chars.as_str()).ok_or_else(invalid)?;

    Ok(Card::new(rank, suit))
}
