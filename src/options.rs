//! Engine configuration options.

/// Which ace valuation wins when two totals are equally close to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AceTieBreak {
    /// Prefer the smaller total (more aces counted as 1).
    #[default]
    Low,
    /// Prefer the larger total (more aces counted as 11).
    High,
}

/// Configuration for odds estimation and draw advice.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use seven27::CounterOptions;
///
/// let options = CounterOptions::default()
///     .with_improvement_confidence(0.5)
///     .with_stay_above(0.65)
///     .with_fold_above(0.85);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CounterOptions {
    /// Cumulative probability a draw must exceed before its total is
    /// reported as the reliably attainable score.
    pub improvement_confidence: f64,
    /// Opponent odds above which drawing is not advised.
    pub stay_above: f64,
    /// Opponent odds above which folding is advised.
    pub fold_above: f64,
    /// Tie-break between equally rated ace valuations.
    pub ace_tie_break: AceTieBreak,
    /// Whether the deck in play includes the two jokers.
    pub include_jokers: bool,
}

impl Default for CounterOptions {
    fn default() -> Self {
        Self {
            improvement_confidence: 0.6,
            stay_above: 0.7,
            fold_above: 0.9,
            ace_tie_break: AceTieBreak::Low,
            include_jokers: false,
        }
    }
}

impl CounterOptions {
    /// Sets the cumulative probability needed to report an attainable score.
    ///
    /// # Example
    ///
    /// ```
    /// use seven27::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_improvement_confidence(0.75);
    /// assert_eq!(options.improvement_confidence, 0.75);
    /// ```
    #[must_use]
    pub const fn with_improvement_confidence(mut self, confidence: f64) -> Self {
        self.improvement_confidence = confidence;
        self
    }

    /// Sets the opponent odds above which drawing is not advised.
    ///
    /// # Example
    ///
    /// ```
    /// use seven27::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_stay_above(0.5);
    /// assert_eq!(options.stay_above, 0.5);
    /// ```
    #[must_use]
    pub const fn with_stay_above(mut self, odds: f64) -> Self {
        self.stay_above = odds;
        self
    }

    /// Sets the opponent odds above which folding is advised.
    ///
    /// # Example
    ///
    /// ```
    /// use seven27::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_fold_above(0.95);
    /// assert_eq!(options.fold_above, 0.95);
    /// ```
    #[must_use]
    pub const fn with_fold_above(mut self, odds: f64) -> Self {
        self.fold_above = odds;
        self
    }

    /// Sets the ace valuation tie-break.
    ///
    /// # Example
    ///
    /// ```
    /// use seven27::{AceTieBreak, CounterOptions};
    ///
    /// let options = CounterOptions::default().with_ace_tie_break(AceTieBreak::High);
    /// assert_eq!(options.ace_tie_break, AceTieBreak::High);
    /// ```
    #[must_use]
    pub const fn with_ace_tie_break(mut self, tie_break: AceTieBreak) -> Self {
        self.ace_tie_break = tie_break;
        self
    }

    /// Sets whether the deck in play includes jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use seven27::CounterOptions;
    ///
    /// let options = CounterOptions::default().with_jokers(true);
    /// assert!(options.include_jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, include_jokers: bool) -> Self {
        self.include_jokers = include_jokers;
        self
    }
}
