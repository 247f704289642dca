//! Hand scoring plus the player and dealer hands.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;

/// Highest value a hand can hold without busting.
pub const BLACKJACK: u8 = 21;

const fn hard_value(rank: u8) -> u8 {
    match rank {
        2..=10 => rank,
        11..=13 => 10,
        _ => 0,
    }
}

/// Computes the best blackjack value of `cards`.
///
/// Non-Ace cards are summed first. Aces are then applied one at a time: each
/// counts 11 if the total still leaves room for the Aces after it to count 1
/// without passing 21, otherwise it counts 1.
///
/// ```
/// use bjtable::{Card, Suit, score_hand};
///
/// let ace = Card::new(Suit::Hearts, 1);
/// let king = Card::new(Suit::Spades, 13);
/// assert_eq!(score_hand(&[ace, king]), 21);
/// assert_eq!(score_hand(&[ace, ace]), 12);
/// ```
#[must_use]
pub fn score_hand(cards: &[Card]) -> u8 {
    score_with_softness(cards).0
}

fn score_with_softness(cards: &[Card]) -> (u8, bool) {
    let mut total: u8 = 0;
    let mut aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            aces = aces.saturating_add(1);
        } else {
            total = total.saturating_add(hard_value(card.rank));
        }
    }

    let mut soft = false;
    for counted in 0..aces {
        let later_aces = aces - counted - 1;
        if total.saturating_add(11).saturating_add(later_aces) <= BLACKJACK {
            total += 11;
            soft = true;
        } else {
            total = total.saturating_add(1);
        }
    }

    (total, soft)
}

/// The player's hand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Appends a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        score_hand(&self.cards)
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        score_with_softness(&self.cards).1
    }

    /// Returns whether the hand is over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes all cards.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

/// The dealer's hand.
///
/// The hole card is held apart from the visible cards until it is revealed,
/// so it never contributes to the visible value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealerHand {
    /// Face-up cards.
    cards: Vec<Card>,
    /// Face-down card, if one has been dealt and not yet revealed.
    hole: Option<Card>,
    /// Whether the hole card has been turned over.
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole: None,
            hole_revealed: false,
        }
    }

    /// Adds a face-up card.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Deals the face-down card, replacing any unrevealed one.
    pub const fn set_hole(&mut self, card: Card) {
        self.hole = Some(card);
        self.hole_revealed = false;
    }

    /// Returns the face-up cards.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.cards.first()
    }

    /// Returns the face-down card while it is still hidden.
    #[must_use]
    pub const fn hole_card(&self) -> Option<&Card> {
        self.hole.as_ref()
    }

    /// Returns whether the hole card has been revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Turns the hole card face up, appending it to the visible cards.
    ///
    /// Returns the revealed card, or `None` if there was nothing to reveal.
    pub fn reveal_hole(&mut self) -> Option<Card> {
        let card = self.hole.take()?;
        self.cards.push(card);
        self.hole_revealed = true;
        Some(card)
    }

    /// Calculates the value of the face-up cards.
    ///
    /// This is the dealer's score: a hidden hole card is never counted.
    #[must_use]
    pub fn value(&self) -> u8 {
        score_hand(&self.cards)
    }

    /// Returns whether the dealer's face-up cards are over 21.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.value() > BLACKJACK
    }

    /// Clears the hand for a new round.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.hole = None;
        self.hole_revealed = false;
    }
}
