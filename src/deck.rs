//! Single-deck shoe that deals without replacement.

use alloc::vec::Vec;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashSet;
use rand::{Rng, RngCore};
#[cfg(feature = "std")]
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::card::{Card, DECK_SIZE};

/// Chooses which of the remaining cards is dealt next.
///
/// The deck hands the picker every identifier still in the shoe, in ascending
/// order. Implementations return an index into that slice; out of range
/// indices are clamped to the last identifier.
pub trait CardPicker {
    /// Returns an index into `available`, which is never empty.
    fn pick(&mut self, available: &[u8]) -> usize;
}

/// A [`CardPicker`] that chooses uniformly at random.
#[derive(Debug, Clone)]
pub struct RngPicker<R>(pub R);

impl<R: RngCore> CardPicker for RngPicker<R> {
    fn pick(&mut self, available: &[u8]) -> usize {
        self.0.random_range(0..available.len())
    }
}

impl<P: CardPicker + ?Sized> CardPicker for &mut P {
    fn pick(&mut self, available: &[u8]) -> usize {
        (**self).pick(available)
    }
}

/// A 52-card shoe tracking which identifiers have been dealt.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    used: HashSet<u8>,
}

impl Deck {
    /// Creates a full deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every dealt identifier to the shoe.
    pub fn reset(&mut self) {
        self.used.clear();
    }

    /// Returns the number of cards left before the deck resets itself.
    #[must_use]
    pub fn remaining_count(&self) -> usize {
        DECK_SIZE - self.used.len()
    }

    /// Returns whether the identifier has been dealt since the last reset.
    #[must_use]
    pub fn is_used(&self, id: u8) -> bool {
        self.used.contains(&id)
    }

    /// Deals one card chosen by `picker` among the remaining identifiers.
    ///
    /// An exhausted deck is reset before dealing, so cards dealt earlier in the
    /// same round can come out again.
    pub fn deal_card<P: CardPicker + ?Sized>(&mut self, picker: &mut P) -> Card {
        if self.remaining_count() == 0 {
            warn!("deck exhausted, reshuffling used cards back into the shoe");
            self.reset();
        }

        let available: Vec<u8> = (1..=DECK_SIZE as u8)
            .filter(|id| !self.used.contains(id))
            .collect();
        let index = picker.pick(&available).min(available.len() - 1);
        let id = available[index];
        self.used.insert(id);

        let card = Card::decode(id);
        debug!(id, rank = card.rank, suit = ?card.suit, remaining = self.remaining_count(), "dealt card");
        card
    }
}
