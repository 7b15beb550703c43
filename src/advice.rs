//! Odds of improving on a score with one draw, and draw/stay/fold advice.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::ToString;
use alloc::vec::Vec;

use log::{debug, trace};

use crate::card::Rank;
use crate::counting::UnknownPool;
use crate::error::RoundError;
use crate::hand::{branch_ace_value_with, rate_score};
use crate::options::CounterOptions;
use crate::score::{Direction, Score};
use crate::table::TableState;

/// What one more card is likely to do for a hand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Odds {
    /// Probability that the next draw rates strictly better than the score
    /// to beat.
    pub improvement: f64,
    /// The best total whose cumulative draw probability exceeds the
    /// configured confidence, or the current total if there is none.
    pub threshold: Score,
    /// Which target the threshold is rated against.
    pub direction: Direction,
}

/// Recommended action for a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Take another card.
    Draw,
    /// Do not take a card.
    Stay,
    /// Do not take a card, and withdraw from the round.
    Fold,
}

/// Advice for the controlled player's turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advice {
    /// The recommended action.
    pub action: Action,
    /// The player's own hand total.
    pub total: Score,
    /// The player's own odds of improving with a draw.
    pub odds: Odds,
    /// The best odds any opponent has of beating the player's threshold.
    pub max_opponent: f64,
}

/// Estimates the odds of beating `to_beat` by drawing one card onto a hand
/// worth `hand_total`.
///
/// Every card on `table` is treated as seen. When `to_beat` is `None` the
/// hand's own total is the score to beat. `force` rates totals against one
/// target only; [`Direction::Even`] rates them against the nearer one.
///
/// A drawn ace is valued against the current total alone, so aces already
/// in the hand keep the values they were given.
#[must_use]
pub fn odds_to_beat(
    hand_total: Score,
    table: &TableState,
    to_beat: Option<Score>,
    force: Direction,
    options: &CounterOptions,
) -> Odds {
    let to_beat = to_beat.unwrap_or(hand_total);
    let pool = UnknownPool::new(&table.visible_cards(), options.include_jokers);

    let mut mass: BTreeMap<Score, f64> = BTreeMap::new();
    for rank in Rank::ALL {
        let odds = pool.odds_of_rank(rank);
        let total = match rank.point_value() {
            None => branch_ace_value_with(hand_total, 1, options.ace_tie_break),
            Some(points) => branch_ace_value_with(hand_total + points, 0, options.ace_tie_break),
        };
        *mass.entry(total).or_insert(0.0) += odds;
    }

    let bar = rate_score(to_beat, force).distance;
    let mut better: Vec<(Score, f64)> = mass
        .into_iter()
        .filter(|&(total, _)| rate_score(total, force).distance < bar)
        .collect();
    better.sort_by_key(|&(total, _)| (rate_score(total, force).distance, total));

    let improvement: f64 = better.iter().map(|&(_, odds)| odds).sum();

    let mut cumulative = 0.0;
    let threshold = better
        .iter()
        .find_map(|&(total, odds)| {
            cumulative += odds;
            trace!("total {total}: {odds:.4} (cumulative {cumulative:.4})");
            (cumulative > options.improvement_confidence).then_some(total)
        })
        .unwrap_or(hand_total);

    Odds {
        improvement,
        threshold,
        direction: rate_score(threshold, force).direction,
    }
}

/// Advises `player` whether to draw.
///
/// The player's own odds set a threshold and direction; every opponent's
/// odds of beating that threshold in that direction are then compared
/// against the stay and fold limits in `options`.
///
/// # Errors
///
/// Returns [`RoundError::UnknownPlayer`] if the player is not seated.
pub fn advise(
    player: &str,
    table: &TableState,
    options: &CounterOptions,
) -> Result<Advice, RoundError> {
    let hand = table
        .hand(player)
        .ok_or_else(|| RoundError::UnknownPlayer(player.to_string()))?;
    let total = hand.value_with(options.ace_tie_break);
    let odds = odds_to_beat(total, table, None, Direction::Even, options);

    let max_opponent = table
        .iter()
        .filter(|&(name, _)| name != player)
        .map(|(_, other)| {
            let other_total = other.value_with(options.ace_tie_break);
            odds_to_beat(
                other_total,
                table,
                Some(odds.threshold),
                odds.direction,
                options,
            )
            .improvement
        })
        .fold(0.0, f64::max);

    let action = if max_opponent > options.stay_above || odds.threshold == total {
        if max_opponent > options.fold_above {
            Action::Fold
        } else {
            Action::Stay
        }
    } else {
        Action::Draw
    };

    debug!(
        "{player} at {total}: improve {:.3} to {} ({:?}), opponents {max_opponent:.3} -> {action:?}",
        odds.improvement, odds.threshold, odds.direction
    );

    Ok(Advice {
        action,
        total,
        odds,
        max_opponent,
    })
}
