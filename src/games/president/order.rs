//! Rank ordering for President.
//!
//! During play Aces and Twos are the strongest ranks: Ace counts as 14 and
//! Two as 15, everything else keeps its face value. Hands are sorted for
//! display with only the Ace lifted, so Twos sit at the low end there.

use std::cmp::Ordering;

use crate::cards::Card;

/// The rank that bombs the pile when played alone.
pub const BOMB_RANK: u8 = 2;

/// Play strength of a rank.
#[must_use]
pub const fn play_value(rank: u8) -> u8 {
    if rank <= 2 {
        rank + 13
    } else {
        rank
    }
}

/// Compare two cards by play strength. Suits never matter.
#[must_use]
pub fn compare(a: Card, b: Card) -> Ordering {
    play_value(a.rank()).cmp(&play_value(b.rank()))
}

/// True when `a` is strictly lower than `b` and so cannot be played on it.
#[must_use]
pub fn is_lower(a: Card, b: Card) -> bool {
    compare(a, b) == Ordering::Less
}

/// Sort key for dealt hands.
#[must_use]
pub const fn display_value(rank: u8) -> u8 {
    if rank == Card::ACE {
        14
    } else {
        rank
    }
}
