//! Card sequences.
//!
//! A `Deck` plays three roles in a game: a hand (order is cosmetic), the pile
//! (append order is play order, the back is the top to beat) and the discard
//! (append-only history). It is an `im::Vector` so that handing a copy to a
//! caller is O(1) and cannot alias engine state.

use im::Vector;

use super::card::{Card, Suit};
use crate::core::GameRng;

/// Ordered sequence of cards.
pub type Deck = Vector<Card>;

/// Number of cards in a canonical deck.
pub const DECK_SIZE: usize = 52;

/// Every (rank, suit) combination exactly once, suit-major.
#[must_use]
pub fn full_deck() -> Vec<Card> {
    Suit::ALL
        .iter()
        .flat_map(|&suit| (Card::ACE..=Card::KING).map(move |rank| Card::new(rank, suit)))
        .collect()
}

/// Shuffle cards in place.
pub fn shuffle(cards: &mut [Card], rng: &mut GameRng) {
    rng.shuffle(cards);
}
