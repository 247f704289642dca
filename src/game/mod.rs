//! Session engine and round state machine.

use alloc::vec::Vec;
use core::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::{CardPicker, Deck, RngPicker};
use crate::error::ReturnError;
use crate::hand::{DealerHand, Hand};
use crate::ledger::{Ledger, PlacedChip};
use crate::options::GameOptions;
use crate::result::{RoundOutcome, Settlement};

mod actions;
mod bet;
mod dealer;
pub mod state;

pub use dealer::DEALER_STANDS_ON;
pub use state::{Phase, RoundId, RoundView, ScheduledStep, StepKind};

/// A single-player blackjack session.
///
/// The session owns the deck, the ledger and the active round. Every operation
/// takes one lock over all of them, so operations never interleave. Timed
/// parts of a round (dealer draws, outcome reveals) are handed to the host as
/// [`ScheduledStep`]s and run through [`GameSession::advance`].
pub struct GameSession<P = RngPicker<ChaCha8Rng>> {
    /// Session options.
    pub options: GameOptions,
    table: Mutex<Table<P>>,
}

/// Mutable session state guarded by the session lock.
struct Table<P> {
    deck: Deck,
    picker: P,
    ledger: Ledger,
    /// Bets on the table, oldest first.
    chips: Vec<PlacedChip>,
    next_chip: u32,
    round: RoundId,
    phase: Phase,
    player: Hand,
    dealer: DealerHand,
    outcome: Option<RoundOutcome>,
    pending: Option<ScheduledStep>,
    next_seq: u32,
    last_settlement: Option<Settlement>,
}

impl GameSession {
    /// Creates a session dealing from a `ChaCha8` generator seeded with `seed`.
    ///
    /// # Example
    ///
    /// ```
    /// use bjtable::{GameOptions, GameSession, Phase};
    ///
    /// let session = GameSession::new(GameOptions::default(), 42);
    /// assert_eq!(session.bankroll(), 1000);
    /// assert_eq!(session.phase(), Phase::Betting);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        Self::with_picker(options, RngPicker(ChaCha8Rng::seed_from_u64(seed)))
    }
}

impl<P: CardPicker> GameSession<P> {
    /// Creates a session that deals with the given picker.
    #[must_use]
    pub fn with_picker(options: GameOptions, picker: P) -> Self {
        let ledger = Ledger::new(options.starting_bankroll);
        Self {
            options,
            table: Mutex::new(Table {
                deck: Deck::new(),
                picker,
                ledger,
                chips: Vec::new(),
                next_chip: 0,
                round: RoundId::default(),
                phase: Phase::Betting,
                player: Hand::new(),
                dealer: DealerHand::new(),
                outcome: None,
                pending: None,
                next_seq: 0,
                last_settlement: None,
            }),
        }
    }

    /// Returns the money available to bet.
    pub fn bankroll(&self) -> usize {
        self.table.lock().ledger.bankroll()
    }

    /// Returns the money riding on the current bet.
    pub fn wagered(&self) -> usize {
        self.table.lock().ledger.wagered()
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.table.lock().phase
    }

    /// Returns the current round identifier.
    pub fn round(&self) -> RoundId {
        self.table.lock().round
    }

    /// Returns the step the host should run next, if any.
    pub fn pending_step(&self) -> Option<ScheduledStep> {
        self.table.lock().pending
    }

    /// Returns the number of cards left in the deck.
    pub fn remaining_cards(&self) -> usize {
        self.table.lock().deck.remaining_count()
    }

    /// Returns the settlement of the most recently finished round.
    pub fn last_settlement(&self) -> Option<Settlement> {
        self.table.lock().last_settlement
    }

    /// Returns whether the player has no money left to bet.
    pub fn is_broke(&self) -> bool {
        self.table.lock().is_broke()
    }

    /// Returns a snapshot of the session for rendering.
    pub fn view(&self) -> RoundView {
        self.table.lock().view()
    }

    /// Clears the settled round and reopens betting.
    ///
    /// Both hands are emptied, the wager and placed bets are cleared and any
    /// step still scheduled for the old round becomes stale.
    ///
    /// # Errors
    ///
    /// Returns an error if the round has not been settled.
    pub fn return_to_main(&self) -> Result<(), ReturnError> {
        let mut table = self.table.lock();
        if table.phase != Phase::Settled {
            return Err(ReturnError::InvalidTransition);
        }

        table.player.clear();
        table.dealer.clear();
        table.ledger.reset_wager();
        table.chips.clear();
        table.outcome = None;
        table.pending = None;
        table.next_round();
        table.phase = Phase::Betting;

        if table.is_broke() {
            info!("player is out of money");
        }
        debug!(round = table.round.0, bankroll = table.ledger.bankroll(), "returned to betting");
        Ok(())
    }
}

impl<P: CardPicker> Table<P> {
    fn draw(&mut self) -> Card {
        self.deck.deal_card(&mut self.picker)
    }

    fn next_round(&mut self) {
        self.round = RoundId(self.round.0.wrapping_add(1));
        self.next_seq = 0;
    }

    fn is_broke(&self) -> bool {
        self.phase == Phase::Betting && self.ledger.bankroll() == 0 && self.ledger.wagered() == 0
    }

    fn schedule(&mut self, kind: StepKind, delay: Duration) {
        let step = ScheduledStep {
            round: self.round,
            seq: self.next_seq,
            kind,
            delay,
        };
        self.next_seq = self.next_seq.wrapping_add(1);
        self.pending = Some(step);
        debug!(round = step.round.0, seq = step.seq, kind = ?step.kind, "step scheduled");
    }

    fn settle(&mut self, outcome: RoundOutcome) {
        let wager = self.ledger.wagered();
        let payout = if outcome.is_player_win() {
            self.ledger.settle_win()
        } else {
            self.ledger.settle_loss()
        };

        let settlement = Settlement {
            outcome,
            wager,
            payout,
            player_value: self.player.value(),
            dealer_value: self.dealer.value(),
        };
        self.last_settlement = Some(settlement);
        self.outcome = Some(outcome);
        self.pending = None;
        self.phase = Phase::Settled;

        info!(
            round = self.round.0,
            ?outcome,
            wager,
            payout,
            player_value = settlement.player_value,
            dealer_value = settlement.dealer_value,
            bankroll = self.ledger.bankroll(),
            "round settled"
        );
    }

    fn view(&self) -> RoundView {
        RoundView {
            round: self.round,
            phase: self.phase,
            player_cards: self.player.cards().to_vec(),
            player_value: self.player.value(),
            dealer_cards: self.dealer.cards().to_vec(),
            dealer_value: self.dealer.value(),
            hole_revealed: self.dealer.is_hole_revealed(),
            outcome: self.outcome,
            pending: self.pending,
            bankroll: self.ledger.bankroll(),
            wagered: self.ledger.wagered(),
        }
    }
}
