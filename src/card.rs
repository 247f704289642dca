//! Card types and the identifier mapping used by the deck.

/// Card suit.
///
/// Declared in identifier order: hearts own identifiers 1-13, diamonds 14-26,
/// spades 27-39 and clubs 40-52.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Spades.
    Spades,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in identifier order.
    pub const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Spades, Self::Clubs];

    const fn index(self) -> u8 {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Spades => 2,
            Self::Clubs => 3,
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 1..=13
    /// are accepted but score as zero and have no deck identifier.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Maps a deck identifier (1..=52) to its card.
    ///
    /// Returns `None` for identifiers outside the deck.
    ///
    /// ```
    /// use bjtable::{Card, Suit};
    ///
    /// assert_eq!(Card::from_id(1), Some(Card::new(Suit::Hearts, 1)));
    /// assert_eq!(Card::from_id(26), Some(Card::new(Suit::Diamonds, 13)));
    /// assert_eq!(Card::from_id(40), Some(Card::new(Suit::Clubs, 1)));
    /// assert_eq!(Card::from_id(53), None);
    /// ```
    #[must_use]
    pub const fn from_id(id: u8) -> Option<Self> {
        if id == 0 || id as usize > DECK_SIZE {
            return None;
        }
        Some(Self::decode(id))
    }

    /// Decodes an identifier already known to lie in 1..=52.
    pub(crate) const fn decode(id: u8) -> Self {
        let suit = Suit::ALL[((id - 1) / 13) as usize];
        let rank = match id % 13 {
            0 => 13,
            r => r,
        };
        Self::new(suit, rank)
    }

    /// Returns the deck identifier of this card, or `None` for an invalid rank.
    #[must_use]
    pub const fn id(&self) -> Option<u8> {
        if self.rank == 0 || self.rank > 13 {
            return None;
        }
        Some(self.suit.index() * 13 + self.rank)
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(&self) -> bool {
        self.rank == 1
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
