//! Playing cards: rank and suit identity.
//!
//! Ranks run 1..=13 with 1 as the Ace. The card itself carries no notion of
//! strength; each variant decides how ranks compare.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCardError;

/// The four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Single-letter code used by `Display` and `FromStr`.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// Immutable card value. Equality is structural.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: u8,
    suit: Suit,
}

impl Card {
    /// Lowest rank (the Ace).
    pub const ACE: u8 = 1;
    /// Highest rank (the King).
    pub const KING: u8 = 13;

    /// Create a card. `rank` must be in `1..=13`.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!(rank >= Self::ACE && rank <= Self::KING);
        Self { rank, suit }
    }

    /// Face rank, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            1 => write!(f, "A")?,
            11 => write!(f, "J")?,
            12 => write!(f, "Q")?,
            13 => write!(f, "K")?,
            n => write!(f, "{}", n)?,
        }
        write!(f, "{}", self.suit.letter())
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parse short names such as `"3S"`, `"10h"`, `"QD"` or `"AC"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError(s.to_string());

        let s = s.trim();
        let suit_char = s.chars().last().ok_or_else(err)?;
        let suit = Suit::from_letter(suit_char).ok_or_else(err)?;
        let rank_text = &s[..s.len() - suit_char.len_utf8()];

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "A" => 1,
            "J" => 11,
            "Q" => 12,
            "K" => 13,
            digits => digits.parse::<u8>().map_err(|_| err())?,
        };
        if !(Self::ACE..=Self::KING).contains(&rank) {
            return Err(err());
        }

        Ok(Self::new(rank, suit))
    }
}
