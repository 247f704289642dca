//! Error types for session operations.
//!
//! A rejected operation never changes the session.

use thiserror::Error;

/// Errors that can occur while betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Bets can only change during the betting phase.
    #[error("bets can only change during the betting phase")]
    InvalidTransition,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Insufficient funds.
    #[error("insufficient funds")]
    InsufficientFunds,
    /// No placed bet matches the request.
    #[error("no placed bet matches")]
    ChipNotFound,
}

/// Errors that can occur when starting a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    /// A round is already in progress.
    #[error("a round is already in progress")]
    InvalidTransition,
    /// Nothing has been wagered.
    #[error("nothing has been wagered")]
    InsufficientWager,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// It is not the player's turn.
    #[error("invalid game state for this action")]
    InvalidTransition,
    /// The round is waiting on a scheduled step.
    #[error("a scheduled step is pending")]
    StepPending,
}

/// Errors that can occur when running a scheduled step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// No step is scheduled.
    #[error("no step is scheduled")]
    NothingPending,
    /// The step belongs to another round or was already run.
    #[error("step is stale")]
    StaleStep,
}

/// Errors that can occur when returning to the betting phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReturnError {
    /// The round has not been settled.
    #[error("the round has not been settled")]
    InvalidTransition,
}
