//! Card primitives shared by every variant.
//!
//! - `Card`: immutable rank/suit value
//! - `Deck`: persistent card sequence, plus canonical deck construction and
//!   shuffling

pub mod card;
pub mod deck;

pub use card::{Card, Suit};
pub use deck::{full_deck, shuffle, Deck, DECK_SIZE};
