use core::time::Duration;

use tracing::debug;

use crate::deck::CardPicker;
use crate::error::ActionError;
use crate::hand::BLACKJACK;

use super::{GameSession, Phase, RoundView, StepKind, Table};

impl<P: CardPicker> Table<P> {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.phase != Phase::PlayerTurn {
            return Err(ActionError::InvalidTransition);
        }
        if self.pending.is_some() {
            return Err(ActionError::StepPending);
        }
        Ok(())
    }

    /// Schedules the outcome reveal once the player reaches 21 or busts.
    pub(super) fn check_player_total(&mut self, delay: Duration) {
        if self.player.value() >= BLACKJACK {
            self.schedule(StepKind::RevealOutcome, delay);
        }
    }
}

impl<P: CardPicker> GameSession<P> {
    /// Player action: Hit (draw a card).
    ///
    /// Reaching exactly 21 or going over schedules the outcome reveal; the
    /// round settles when that step runs.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or a scheduled step is
    /// still pending.
    pub fn hit(&self) -> Result<RoundView, ActionError> {
        let mut table = self.table.lock();
        table.ensure_player_turn()?;

        let card = table.draw();
        table.player.add_card(card);
        debug!(rank = card.rank, value = table.player.value(), "player hit");

        table.check_player_total(self.options.outcome_delay);
        Ok(table.view())
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Reveals the dealer's hole card and schedules the dealer's play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or a scheduled step is
    /// still pending.
    pub fn stand(&self) -> Result<RoundView, ActionError> {
        let mut table = self.table.lock();
        table.ensure_player_turn()?;

        table.dealer.reveal_hole();
        table.phase = Phase::DealerTurn;
        debug!(
            player_value = table.player.value(),
            dealer_value = table.dealer.value(),
            "player stood"
        );

        table.schedule_dealer_step(&self.options);
        Ok(table.view())
    }
}
