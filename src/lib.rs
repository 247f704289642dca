//! A single-player blackjack table engine with optional `no_std` support.
//!
//! The crate provides a [`GameSession`] that owns the deck, the betting
//! ledger and the active round. A presentation layer forwards the player's
//! intents (bet, start, hit, stand, return) and renders the [`RoundView`]
//! each call reports. The dealer's play and outcome reveals are paced by
//! [`ScheduledStep`]s the host runs when it is ready.
//!
//! # Example
//!
//! ```
//! use bjtable::{Chip, GameOptions, GameSession, Phase};
//!
//! let session = GameSession::new(GameOptions::default(), 42);
//! session.place_chip(Chip::TwentyFive).unwrap();
//! let view = session.start_round().unwrap();
//! assert_eq!(view.player_cards.len(), 2);
//!
//! if view.pending.is_none() {
//!     session.stand().unwrap();
//! }
//! let view = session.drain_pending();
//! assert_eq!(view.phase, Phase::Settled);
//! session.return_to_main().unwrap();
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod ledger;
pub mod options;
pub mod result;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Suit};
pub use deck::{CardPicker, Deck, RngPicker};
pub use error::{ActionError, BetError, ReturnError, StartError, StepError};
pub use game::{
    DEALER_STANDS_ON, GameSession, Phase, RoundId, RoundView, ScheduledStep, StepKind,
};
pub use hand::{BLACKJACK, DealerHand, Hand, score_hand};
pub use ledger::{Chip, ChipId, Ledger, PlacedChip};
pub use options::GameOptions;
pub use result::{RoundOutcome, Settlement};
