//! Round outcome types.

/// How a round ended for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundOutcome {
    /// Player beat the dealer or the dealer busted.
    Win,
    /// Player reached exactly 21 during their turn.
    Blackjack,
    /// Player went over 21.
    Bust,
    /// Dealer matched or beat the player. Ties land here.
    Lose,
}

impl RoundOutcome {
    /// Returns whether the outcome pays the player.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::Win | Self::Blackjack)
    }
}

/// Record of a settled round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settlement {
    /// The outcome.
    pub outcome: RoundOutcome,
    /// The wager that was riding on the round.
    pub wager: usize,
    /// Amount credited to the bankroll (0 on a loss).
    pub payout: usize,
    /// The player's final hand value.
    pub player_value: u8,
    /// The dealer's visible hand value at settlement.
    pub dealer_value: u8,
}
