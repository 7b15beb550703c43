//! Exact hand totals and their closeness to the two targets.

use core::fmt;
use core::ops::{Add, Sub};

/// The low target total.
pub const LOW_TARGET: Score = Score::from_points(7);

/// The high target total.
pub const HIGH_TARGET: Score = Score::from_points(27);

/// A hand total.
///
/// Every card is worth a multiple of half a point, so totals are stored as
/// a count of half points and compare, hash and sum exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(i32);

impl Score {
    /// A total of zero.
    pub const ZERO: Self = Self(0);

    /// Creates a score from whole points.
    #[must_use]
    pub const fn from_points(points: i32) -> Self {
        Self(points * 2)
    }

    /// Creates a score from half points (`from_half_points(1)` is 0.5).
    #[must_use]
    pub const fn from_half_points(half_points: i32) -> Self {
        Self(half_points)
    }

    /// Returns the score in half points.
    #[must_use]
    pub const fn half_points(self) -> i32 {
        self.0
    }

    /// Returns the score as a floating point number of points.
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Returns the absolute difference between two scores.
    #[must_use]
    pub const fn abs_diff(self, other: Self) -> Self {
        Self((self.0 - other.0).abs())
    }
}

impl Add for Score {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Score {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}", self.as_f64())
        }
    }
}

/// Which target a total is rated against.
///
/// As a rating result this is the nearer target; as an input it forces the
/// rating against one target, with [`Direction::Even`] meaning "whichever
/// is nearer".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Towards 7.
    Seven,
    /// Equally far from both targets, or unforced.
    #[default]
    Even,
    /// Towards 27.
    TwentySeven,
}

impl Direction {
    /// Returns -1 for 7, 0 for even and +1 for 27.
    #[must_use]
    pub const fn signum(self) -> i8 {
        match self {
            Self::Seven => -1,
            Self::Even => 0,
            Self::TwentySeven => 1,
        }
    }

    /// Returns the target total this direction points at, if any.
    #[must_use]
    pub const fn target(self) -> Option<Score> {
        match self {
            Self::Seven => Some(LOW_TARGET),
            Self::Even => None,
            Self::TwentySeven => Some(HIGH_TARGET),
        }
    }
}

/// How close a total is to a target, and which target that is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rating {
    /// Distance to the rated target.
    pub distance: Score,
    /// The rated target.
    pub direction: Direction,
}
