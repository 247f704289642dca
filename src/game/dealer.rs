use tracing::{debug, warn};

use crate::deck::CardPicker;
use crate::error::StepError;
use crate::hand::BLACKJACK;
use crate::options::GameOptions;
use crate::result::RoundOutcome;

use super::{GameSession, Phase, RoundView, ScheduledStep, StepKind, Table};

/// The dealer draws while below this value.
pub const DEALER_STANDS_ON: u8 = 17;

/// Decides a round the dealer has played out. Ties go to the dealer.
const fn compare_hands(player_value: u8, dealer_value: u8) -> RoundOutcome {
    if dealer_value > BLACKJACK {
        RoundOutcome::Win
    } else if dealer_value >= player_value {
        RoundOutcome::Lose
    } else {
        RoundOutcome::Win
    }
}

impl<P: CardPicker> Table<P> {
    /// Schedules the dealer's next draw, or the outcome once the dealer stands.
    pub(super) fn schedule_dealer_step(&mut self, options: &GameOptions) {
        if self.dealer.value() < DEALER_STANDS_ON {
            self.schedule(StepKind::DealerDraw, options.dealer_draw_delay);
        } else {
            self.schedule(StepKind::RevealOutcome, options.outcome_delay);
        }
    }

    fn run_step(&mut self, kind: StepKind, options: &GameOptions) {
        self.pending = None;
        match kind {
            StepKind::DealerDraw => {
                let card = self.draw();
                self.dealer.add_card(card);
                debug!(rank = card.rank, value = self.dealer.value(), "dealer drew");
                self.schedule_dealer_step(options);
            }
            StepKind::RevealOutcome => {
                let player_value = self.player.value();
                let outcome = match self.phase {
                    Phase::DealerTurn => compare_hands(player_value, self.dealer.value()),
                    _ if player_value > BLACKJACK => RoundOutcome::Bust,
                    _ => RoundOutcome::Blackjack,
                };
                self.settle(outcome);
            }
        }
    }
}

impl<P: CardPicker> GameSession<P> {
    /// Runs a scheduled step.
    ///
    /// The step must be the one currently pending for the current round;
    /// anything else is discarded as stale. Running a step may schedule the
    /// next one, which is reported in the returned view.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is pending or the step is stale.
    pub fn advance(&self, step: ScheduledStep) -> Result<RoundView, StepError> {
        let mut table = self.table.lock();
        if step.round != table.round {
            warn!(step_round = step.round.0, round = table.round.0, "discarding step from an earlier round");
            return Err(StepError::StaleStep);
        }

        let Some(pending) = table.pending else {
            return Err(StepError::NothingPending);
        };
        if pending != step {
            warn!(seq = step.seq, pending_seq = pending.seq, "discarding stale step");
            return Err(StepError::StaleStep);
        }

        table.run_step(step.kind, &self.options);
        Ok(table.view())
    }

    /// Runs every pending step immediately, ignoring their delays.
    ///
    /// Returns the view after the last step; a no-op if nothing is pending.
    pub fn drain_pending(&self) -> RoundView {
        let mut table = self.table.lock();
        while let Some(step) = table.pending {
            table.run_step(step.kind, &self.options);
        }
        table.view()
    }
}
