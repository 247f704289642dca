//! Round phase, scheduled steps and the view handed to renderers.

extern crate alloc;

use alloc::vec::Vec;
use core::time::Duration;

use crate::card::Card;
use crate::result::RoundOutcome;

/// Round phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Accepting and retracting bets.
    #[default]
    Betting,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Outcome decided and paid; only a return to betting is allowed.
    Settled,
}

/// Generation number of a round.
///
/// Bumped whenever a round starts or is torn down, so steps scheduled for an
/// earlier round can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RoundId(pub u64);

/// What a scheduled step does when it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Dealer draws one card.
    DealerDraw,
    /// The round outcome is decided and settled.
    RevealOutcome,
}

/// A delayed continuation of the round.
///
/// The host waits `delay` and then passes the step back to
/// [`GameSession::advance`](crate::GameSession::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScheduledStep {
    /// Round the step was scheduled for.
    pub round: RoundId,
    /// Position of the step within the round.
    pub seq: u32,
    /// Action to run.
    pub kind: StepKind,
    /// Suggested pause before running the step.
    pub delay: Duration,
}

/// Snapshot of the session for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundView {
    /// Current round.
    pub round: RoundId,
    /// Current phase.
    pub phase: Phase,
    /// Player cards in deal order.
    pub player_cards: Vec<Card>,
    /// Player hand value.
    pub player_value: u8,
    /// Dealer's face-up cards.
    pub dealer_cards: Vec<Card>,
    /// Value of the dealer's face-up cards.
    pub dealer_value: u8,
    /// Whether the dealer's hole card has been revealed.
    pub hole_revealed: bool,
    /// Outcome once settled.
    pub outcome: Option<RoundOutcome>,
    /// Step the host should run next, if any.
    pub pending: Option<ScheduledStep>,
    /// Money available to bet.
    pub bankroll: usize,
    /// Money riding on the round.
    pub wagered: usize,
}
