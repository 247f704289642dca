//! Bankroll and wager bookkeeping.

use tracing::debug;

use crate::error::BetError;

/// A table chip denomination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// 1.
    One,
    /// 5.
    Five,
    /// 10.
    Ten,
    /// 25.
    TwentyFive,
    /// 100.
    Hundred,
}

impl Chip {
    /// Every denomination on the table, smallest first.
    pub const ALL: [Self; 5] = [
        Self::One,
        Self::Five,
        Self::Ten,
        Self::TwentyFive,
        Self::Hundred,
    ];

    /// Returns the chip's face value.
    #[must_use]
    pub const fn value(self) -> usize {
        match self {
            Self::One => 1,
            Self::Five => 5,
            Self::Ten => 10,
            Self::TwentyFive => 25,
            Self::Hundred => 100,
        }
    }
}

/// Identifies one placed bet so it can be taken back individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChipId(pub u32);

/// A bet contribution currently on the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedChip {
    /// Identity of the contribution.
    pub id: ChipId,
    /// Amount moved from the bankroll.
    pub amount: usize,
}

/// Money available to bet and money committed to the active bet.
///
/// Both balances are unsigned and every subtraction saturates at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    bankroll: usize,
    wagered: usize,
}

impl Ledger {
    /// Creates a ledger with the given bankroll and nothing wagered.
    #[must_use]
    pub const fn new(bankroll: usize) -> Self {
        Self {
            bankroll,
            wagered: 0,
        }
    }

    /// Returns the money available to bet.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the money committed to the active bet.
    #[must_use]
    pub const fn wagered(&self) -> usize {
        self.wagered
    }

    /// Moves `amount` from the bankroll into the wager.
    ///
    /// # Errors
    ///
    /// Returns [`BetError::InsufficientFunds`] if `amount` exceeds the bankroll.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        if amount > self.bankroll {
            return Err(BetError::InsufficientFunds);
        }
        self.debit(amount);
        self.wagered = self.wagered.saturating_add(amount);
        debug!(amount, bankroll = self.bankroll, wagered = self.wagered, "bet placed");
        Ok(())
    }

    /// Moves `amount` back from the wager into the bankroll.
    ///
    /// The wager is floored at zero; the bankroll is credited the full amount.
    pub fn retract_bet(&mut self, amount: usize) {
        self.wagered = self.wagered.saturating_sub(amount);
        self.credit(amount);
        debug!(amount, bankroll = self.bankroll, wagered = self.wagered, "bet retracted");
    }

    /// Pays the wager back plus equal winnings. Returns the amount paid.
    ///
    /// The wager itself stays recorded until [`Ledger::reset_wager`].
    pub fn settle_win(&mut self) -> usize {
        let payout = self.wagered.saturating_mul(2);
        self.credit(payout);
        payout
    }

    /// Settles a lost round. The wager was already taken at bet time.
    pub const fn settle_loss(&mut self) -> usize {
        0
    }

    /// Zeroes the wager.
    pub const fn reset_wager(&mut self) {
        self.wagered = 0;
    }

    /// Adds money to the bankroll.
    pub const fn credit(&mut self, amount: usize) {
        self.bankroll = self.bankroll.saturating_add(amount);
    }

    /// Removes money from the bankroll, stopping at zero.
    pub const fn debit(&mut self, amount: usize) {
        self.bankroll = self.bankroll.saturating_sub(amount);
    }

    /// Replaces the bankroll and drops any wager.
    pub const fn reset(&mut self, bankroll: usize) {
        self.bankroll = bankroll;
        self.wagered = 0;
    }
}
