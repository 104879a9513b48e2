//! Legal move enumeration.
//!
//! Candidates are every same-rank subset of a hand (at most four cards per
//! rank, so at most fifteen subsets each) plus the pass. Each one is run
//! through the same validation `play` uses, so the list never disagrees with
//! what `play` accepts.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::game::{Play, PresidentGame};
use super::order::display_value;
use crate::cards::Card;
use crate::core::PlayerId;

impl PresidentGame {
    /// Every move `player` could make right now, including out-of-turn
    /// completions. A pass appears as an empty `Play`.
    ///
    /// Order is deterministic: the pass first, then by display rank.
    #[must_use]
    pub fn legal_plays(&self, player: PlayerId) -> Vec<Play> {
        let mut plays = Vec::new();
        if player.index() >= self.player_count() {
            return plays;
        }
        if self.check(player, &[]).is_ok() {
            plays.push(Play::new());
        }

        let mut by_rank: FxHashMap<u8, SmallVec<[Card; 4]>> = FxHashMap::default();
        for &card in self.hand(player) {
            by_rank.entry(card.rank()).or_default().push(card);
        }
        let mut groups: Vec<_> = by_rank.into_iter().collect();
        groups.sort_by_key(|(rank, _)| display_value(*rank));

        for (_, group) in groups {
            for mask in 1u32..(1 << group.len()) {
                let candidate: Play = group
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, &card)| card)
                    .collect();
                if self.check(player, &candidate).is_ok() {
                    plays.push(candidate);
                }
            }
        }

        plays
    }
}
