//! Session configuration options.

use core::time::Duration;

/// Configuration options for a blackjack session.
///
/// House rules are fixed; options only cover money and pacing.
///
/// ```
/// use core::time::Duration;
/// use bjtable::GameOptions;
///
/// let options = GameOptions::default()
///     .with_starting_bankroll(500)
///     .with_dealer_draw_delay(Duration::ZERO);
/// assert_eq!(options.starting_bankroll, 500);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Bankroll at session start and after a bankroll reset.
    pub starting_bankroll: usize,
    /// Pause before each dealer draw.
    pub dealer_draw_delay: Duration,
    /// Pause before an outcome is revealed.
    pub outcome_delay: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            starting_bankroll: 1000,
            dealer_draw_delay: Duration::from_millis(1200),
            outcome_delay: Duration::from_millis(1500),
        }
    }
}

impl GameOptions {
    /// Sets the starting bankroll.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_bankroll(250);
    /// assert_eq!(options.starting_bankroll, 250);
    /// ```
    #[must_use]
    pub const fn with_starting_bankroll(mut self, bankroll: usize) -> Self {
        self.starting_bankroll = bankroll;
        self
    }

    /// Sets the pause before each dealer draw.
    #[must_use]
    pub const fn with_dealer_draw_delay(mut self, delay: Duration) -> Self {
        self.dealer_draw_delay = delay;
        self
    }

    /// Sets the pause before an outcome is revealed.
    #[must_use]
    pub const fn with_outcome_delay(mut self, delay: Duration) -> Self {
        self.outcome_delay = delay;
        self
    }

    /// Removes all pacing delays.
    ///
    /// Steps are still scheduled one at a time; only their delay becomes zero.
    #[must_use]
    pub const fn without_delays(self) -> Self {
        self.with_dealer_draw_delay(Duration::ZERO)
            .with_outcome_delay(Duration::ZERO)
    }
}
