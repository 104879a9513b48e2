//! Game contract trait for variant implementations.
//!
//! Variants implement `TrickGame` to expose:
//! - The seats and whose turn it is
//! - Per-viewer hands with opponents' cards hidden
//! - The table piles and the finishing order
//! - A single `play` entry point that validates and applies a move

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::PlayerId;
use crate::error::PlayError;

/// Known variants. Hosts dispatch on this instead of on type names.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVariant {
    President,
}

impl GameVariant {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameVariant::President => "president",
        }
    }
}

/// One seat's hand as seen by a particular viewer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandView {
    /// The viewer's own hand.
    Visible(Deck),
    /// Someone else's hand: only the size is public.
    Hidden { size: usize },
}

impl HandView {
    /// Number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            HandView::Visible(cards) => cards.len(),
            HandView::Hidden { size } => *size,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The cards, if the viewer may see them.
    #[must_use]
    pub fn cards(&self) -> Option<&Deck> {
        match self {
            HandView::Visible(cards) => Some(cards),
            HandView::Hidden { .. } => None,
        }
    }
}

/// The face-up pile and the discard heap.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piles {
    /// Cards in play order; the back is the top to beat.
    pub active: Deck,
    /// Cleared cards. They never re-enter play.
    pub discard: Deck,
}

/// Game contract.
///
/// Every accessor returns an owned snapshot; callers can never reach the
/// engine's live containers.
///
/// ## Implementation Notes
///
/// - `play`: a rejected move must leave state untouched
/// - `play` with an empty slice is a pass
/// - `winners`: grows over the game, full length once it has ended
pub trait TrickGame {
    /// Which variant this is, if it is one the facade knows.
    fn variant(&self) -> Option<GameVariant> {
        None
    }

    /// Seat labels in seat order.
    fn players(&self) -> Vec<String>;

    /// Whose move it is.
    fn turn(&self) -> PlayerId;

    /// Every hand from `viewer`'s point of view.
    fn hands(&self, viewer: PlayerId) -> Vec<HandView>;

    /// The table piles.
    fn piles(&self) -> Piles;

    /// Seats in finishing order.
    fn winners(&self) -> Vec<PlayerId>;

    /// Make `player` play `cards`. An empty slice passes.
    fn play(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), PlayError>;

    // === Convenience Methods ===

    /// One slot per place; `None` for places not yet decided.
    fn rankings(&self) -> Vec<Option<PlayerId>> {
        let winners = self.winners();
        let seats = self.players().len();
        (0..seats).map(|place| winners.get(place).copied()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_hand_view_hides_cards() {
        let hidden = HandView::Hidden { size: 3 };
        assert_eq!(hidden.len(), 3);
        assert!(hidden.cards().is_none());

        let visible = HandView::Visible(Deck::unit(Card::new(3, Suit::Spades)));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible.cards().map(Deck::len), Some(1));
        assert!(HandView::Hidden { size: 0 }.is_empty());
    }

    #[test]
    fn test_variant_names() {
        assert_eq!(GameVariant::President.name(), "president");
    }
}
