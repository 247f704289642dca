//! Card, deck, scoring and ledger tests.

use std::collections::HashSet;

use bjtable::{
    BetError, Card, CardPicker, Chip, DECK_SIZE, Deck, Hand, Ledger, RngPicker, Suit, score_hand,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

fn ranks(ranks: &[u8]) -> Vec<Card> {
    ranks.iter().map(|&rank| card(Suit::Clubs, rank)).collect()
}

/// Always deals the given identifier if it is still available.
struct Always(u8);

impl CardPicker for Always {
    fn pick(&mut self, available: &[u8]) -> usize {
        available.iter().position(|&id| id == self.0).unwrap_or(0)
    }
}

#[test]
fn identifiers_map_to_suits_in_blocks_of_thirteen() {
    assert_eq!(Card::from_id(1), Some(card(Suit::Hearts, 1)));
    assert_eq!(Card::from_id(13), Some(card(Suit::Hearts, 13)));
    assert_eq!(Card::from_id(14), Some(card(Suit::Diamonds, 1)));
    assert_eq!(Card::from_id(27), Some(card(Suit::Spades, 1)));
    assert_eq!(Card::from_id(39), Some(card(Suit::Spades, 13)));
    assert_eq!(Card::from_id(52), Some(card(Suit::Clubs, 13)));
    assert_eq!(Card::from_id(0), None);
    assert_eq!(Card::from_id(53), None);
    assert_eq!(card(Suit::Hearts, 14).id(), None);

    let cards: HashSet<Card> = (1..=52).filter_map(Card::from_id).collect();
    assert_eq!(cards.len(), DECK_SIZE);
    for id in 1..=52 {
        assert_eq!(Card::from_id(id).and_then(|c| c.id()), Some(id));
    }
}

#[test]
fn score_known_hands() {
    assert_eq!(score_hand(&ranks(&[1, 13])), 21);
    assert_eq!(score_hand(&ranks(&[1, 1])), 12);
    assert_eq!(score_hand(&ranks(&[1, 1, 9])), 21);
    assert_eq!(score_hand(&ranks(&[13, 12, 2])), 22);
    assert_eq!(score_hand(&ranks(&[10, 1, 1])), 12);
    assert_eq!(score_hand(&ranks(&[1, 1, 1, 1])), 14);
    assert_eq!(score_hand(&ranks(&[11, 12, 13])), 30);
    assert_eq!(score_hand(&[]), 0);
}

#[test]
fn hand_softness_and_bust() {
    let mut hand = Hand::new();
    hand.add_card(card(Suit::Hearts, 1));
    hand.add_card(card(Suit::Spades, 6));
    assert_eq!(hand.value(), 17);
    assert!(hand.is_soft());

    hand.add_card(card(Suit::Clubs, 10));
    assert_eq!(hand.value(), 17);
    assert!(!hand.is_soft());

    hand.add_card(card(Suit::Clubs, 5));
    assert!(hand.is_bust());
    assert_eq!(hand.len(), 4);
}

fn best_value(cards: &[Card]) -> u8 {
    let aces = cards.iter().filter(|c| c.rank == 1).count() as u8;
    let hard: u8 = cards
        .iter()
        .map(|c| match c.rank {
            1 => 1,
            11..=13 => 10,
            r => r,
        })
        .sum();
    (0..=aces)
        .map(|soft| hard + 10 * soft)
        .filter(|&value| value <= 21)
        .max()
        .unwrap_or(hard)
}

#[test]
fn ace_assignment_is_never_improvable() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    for _ in 0..20_000 {
        let size = rng.random_range(1..=11);
        let cards: Vec<Card> = (0..size)
            .map(|_| card(Suit::Hearts, rng.random_range(1..=13)))
            .collect();
        assert_eq!(score_hand(&cards), best_value(&cards), "hand {cards:?}");
    }
}

#[test]
fn fresh_deck_deals_fifty_two_distinct_cards() {
    let mut deck = Deck::new();
    let mut picker = RngPicker(ChaCha8Rng::seed_from_u64(9));
    let mut seen = HashSet::new();

    for dealt in 1..=DECK_SIZE {
        let card = deck.deal_card(&mut picker);
        assert!(seen.insert(card.id()), "{card:?} dealt twice");
        assert_eq!(deck.remaining_count(), DECK_SIZE - dealt);
    }
    assert_eq!(deck.remaining_count(), 0);
}

#[test]
fn exhausted_deck_reshuffles_and_can_repeat_cards() {
    let mut deck = Deck::new();
    let mut picker = Always(1);
    let first = deck.deal_card(&mut picker);
    assert_eq!(first, card(Suit::Hearts, 1));

    for _ in 1..DECK_SIZE {
        deck.deal_card(&mut picker);
    }
    assert_eq!(deck.remaining_count(), 0);

    // The used set is cleared, so the ace of hearts comes out a second time.
    let again = deck.deal_card(&mut picker);
    assert_eq!(again, first);
    assert_eq!(deck.remaining_count(), DECK_SIZE - 1);
}

#[test]
fn reset_returns_all_cards() {
    let mut deck = Deck::new();
    let mut picker = Always(30);
    let card = deck.deal_card(&mut picker);
    assert!(deck.is_used(30));
    assert_eq!(card, card_from(30));

    deck.reset();
    assert!(!deck.is_used(30));
    assert_eq!(deck.remaining_count(), DECK_SIZE);
}

fn card_from(id: u8) -> Card {
    Card::from_id(id).unwrap()
}

#[test]
fn out_of_range_pick_is_clamped() {
    struct TooFar;
    impl CardPicker for TooFar {
        fn pick(&mut self, available: &[u8]) -> usize {
            available.len() + 10
        }
    }

    let mut deck = Deck::new();
    assert_eq!(deck.deal_card(&mut TooFar), card_from(52));
    assert_eq!(deck.deal_card(&mut TooFar), card_from(51));
}

#[test]
fn ledger_bet_and_retract() {
    let mut ledger = Ledger::new(1000);
    ledger.place_bet(10).unwrap();
    assert_eq!(ledger.bankroll(), 990);
    assert_eq!(ledger.wagered(), 10);

    ledger.retract_bet(10);
    assert_eq!(ledger.bankroll(), 1000);
    assert_eq!(ledger.wagered(), 0);
}

#[test]
fn ledger_rejects_bet_over_bankroll() {
    let mut ledger = Ledger::new(20);
    assert_eq!(ledger.place_bet(21).unwrap_err(), BetError::InsufficientFunds);
    assert_eq!(ledger.bankroll(), 20);
    assert_eq!(ledger.wagered(), 0);

    ledger.place_bet(20).unwrap();
    assert_eq!(ledger.bankroll(), 0);
}

#[test]
fn ledger_settlement() {
    let mut ledger = Ledger::new(1000);
    ledger.place_bet(50).unwrap();
    let before = ledger.bankroll();

    assert_eq!(ledger.settle_win(), 100);
    assert_eq!(ledger.bankroll(), before + 100);
    // The wager stays recorded until the round is torn down.
    assert_eq!(ledger.wagered(), 50);
    ledger.reset_wager();
    assert_eq!(ledger.wagered(), 0);

    ledger.place_bet(50).unwrap();
    let before = ledger.bankroll();
    assert_eq!(ledger.settle_loss(), 0);
    assert_eq!(ledger.bankroll(), before);
}

#[test]
fn ledger_never_goes_negative() {
    let mut ledger = Ledger::new(5);
    ledger.debit(50);
    assert_eq!(ledger.bankroll(), 0);

    ledger.retract_bet(30);
    assert_eq!(ledger.wagered(), 0);
    assert_eq!(ledger.bankroll(), 30);

    ledger.reset(1000);
    assert_eq!(ledger.bankroll(), 1000);
}

#[test]
fn chip_denominations() {
    let values: Vec<usize> = Chip::ALL.iter().map(|chip| chip.value()).collect();
    assert_eq!(values, [1, 5, 10, 25, 100]);
}
