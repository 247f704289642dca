use alloc::vec::Vec;

use tracing::{debug, info};

use crate::deck::CardPicker;
use crate::error::{BetError, StartError};
use crate::ledger::{Chip, ChipId, PlacedChip};

use super::{GameSession, Phase, RoundView, Table};

impl<P: CardPicker> Table<P> {
    fn ensure_betting(&self) -> Result<(), BetError> {
        if self.phase == Phase::Betting {
            Ok(())
        } else {
            Err(BetError::InvalidTransition)
        }
    }

    fn take_chip(&mut self, index: usize) -> PlacedChip {
        let chip = self.chips.remove(index);
        self.ledger.retract_bet(chip.amount);
        chip
    }
}

impl<P: CardPicker> GameSession<P> {
    /// Moves `amount` from the bankroll onto the table.
    ///
    /// Returns an identifier that can later take back exactly this bet.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in the betting phase, the amount
    /// is zero, or the amount exceeds the bankroll.
    pub fn place_bet(&self, amount: usize) -> Result<ChipId, BetError> {
        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        let mut table = self.table.lock();
        table.ensure_betting()?;
        table.ledger.place_bet(amount)?;

        let id = ChipId(table.next_chip);
        table.next_chip = table.next_chip.wrapping_add(1);
        table.chips.push(PlacedChip { id, amount });
        Ok(id)
    }

    /// Places one chip of the given denomination.
    ///
    /// # Errors
    ///
    /// Same as [`GameSession::place_bet`].
    pub fn place_chip(&self, chip: Chip) -> Result<ChipId, BetError> {
        self.place_bet(chip.value())
    }

    /// Takes back the bet placed under `id`.
    ///
    /// Returns the amount returned to the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in the betting phase or no bet
    /// with that identifier is on the table.
    pub fn retract_chip(&self, id: ChipId) -> Result<usize, BetError> {
        let mut table = self.table.lock();
        table.ensure_betting()?;

        let index = table
            .chips
            .iter()
            .position(|chip| chip.id == id)
            .ok_or(BetError::ChipNotFound)?;
        Ok(table.take_chip(index).amount)
    }

    /// Takes back the most recent bet of exactly `amount`.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in the betting phase or no bet
    /// of that amount is on the table.
    pub fn retract_bet(&self, amount: usize) -> Result<ChipId, BetError> {
        let mut table = self.table.lock();
        table.ensure_betting()?;

        let index = table
            .chips
            .iter()
            .rposition(|chip| chip.amount == amount)
            .ok_or(BetError::ChipNotFound)?;
        Ok(table.take_chip(index).id)
    }

    /// Returns the bets currently on the table, oldest first.
    pub fn placed_chips(&self) -> Vec<PlacedChip> {
        self.table.lock().chips.clone()
    }

    /// Restores the starting bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error unless the session is in the betting phase with no bets
    /// on the table.
    pub fn reset_bankroll(&self) -> Result<(), BetError> {
        let mut table = self.table.lock();
        table.ensure_betting()?;
        if !table.chips.is_empty() {
            return Err(BetError::InvalidTransition);
        }

        table.ledger.reset(self.options.starting_bankroll);
        debug!(bankroll = self.options.starting_bankroll, "bankroll reset");
        Ok(())
    }

    /// Deals a fresh round: two cards to the player, one face-up and one
    /// face-down card to the dealer.
    ///
    /// The deck is reset first. If the opening hand already totals 21 the
    /// returned view carries a pending outcome step.
    ///
    /// # Errors
    ///
    /// Returns an error if the session is not in the betting phase or nothing
    /// has been wagered.
    pub fn start_round(&self) -> Result<RoundView, StartError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Betting {
            return Err(StartError::InvalidTransition);
        }
        if table.ledger.wagered() == 0 {
            return Err(StartError::InsufficientWager);
        }

        table.next_round();
        table.deck.reset();
        table.player.clear();
        table.dealer.clear();
        table.outcome = None;
        table.pending = None;

        let card = table.draw();
        table.player.add_card(card);
        let card = table.draw();
        table.dealer.add_card(card);
        let card = table.draw();
        table.player.add_card(card);
        let card = table.draw();
        table.dealer.set_hole(card);

        table.phase = Phase::PlayerTurn;
        info!(
            round = table.round.0,
            wagered = table.ledger.wagered(),
            player_value = table.player.value(),
            dealer_up = table.dealer.value(),
            "round started"
        );

        table.check_player_total(self.options.outcome_delay);
        Ok(table.view())
    }
}
