//! President game implementation.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::order::{display_value, is_lower, BOMB_RANK};
use super::turn;
use crate::cards::{full_deck, shuffle, Card, Deck, Suit};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap};
use crate::error::{ConfigError, PlayError};
use crate::rules::{GameVariant, HandView, Piles, TrickGame};

/// A proposed move. Empty means pass.
pub type Play = SmallVec<[Card; 4]>;

/// The card that decides who leads.
pub const STARTING_CARD: Card = Card::new(3, Suit::Spades);

/// When a single-card beat also skips the next seat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipRule {
    /// Never skip.
    Never,
    /// Skip when the card matches the rank of the top it covered.
    MatchedRank,
    /// Skip on every single card played onto a non-empty pile.
    #[default]
    AnySingle,
}

/// What a validated move will do once applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Move {
    Pass,
    Beat { skip: bool },
    Bomb,
}

/// A game of President.
///
/// Hands, the pile and the discard always partition one canonical deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresidentGame {
    players: Vec<String>,
    turn: PlayerId,
    /// Last seat whose move was not a pass.
    last_play: PlayerId,
    /// Required play size for the current streak; 0 when the pile is fresh.
    mode: u8,
    skip_rule: SkipRule,

    hands: PlayerMap<Deck>,
    pile: Deck,
    discard: Deck,

    winners: Vec<PlayerId>,
    /// Resigned seats, earliest first. They take the bottom places.
    resigned: Vec<PlayerId>,
}

/// Builder for creating a PresidentGame.
#[derive(Clone, Debug, Default)]
pub struct PresidentBuilder {
    config: GameConfig,
    skip_rule: SkipRule,
}

impl PresidentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seat labels in seating order.
    pub fn players<I, S>(mut self, players: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.players = players.into_iter().map(Into::into).collect();
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn skip_rule(mut self, rule: SkipRule) -> Self {
        self.skip_rule = rule;
        self
    }

    /// Replace the whole table configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle a fresh deck and deal it round-robin.
    pub fn build(self) -> Result<PresidentGame, ConfigError> {
        self.config.validate()?;

        let mut rng = self.config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        let mut deck = full_deck();
        shuffle(&mut deck, &mut rng);

        let seats = self.config.player_count();
        let mut hands = vec![Vec::new(); seats];
        for (index, card) in deck.into_iter().enumerate() {
            hands[index % seats].push(card);
        }

        log::info!(
            "dealt president for {} players with seed {}",
            seats,
            rng.seed()
        );
        Ok(PresidentGame::deal(self.config.players, hands, self.skip_rule))
    }

    /// Use a prearranged deal, one hand per seat.
    ///
    /// The hands must together hold every card of one canonical deck exactly
    /// once.
    pub fn build_with_hands(self, hands: Vec<Vec<Card>>) -> Result<PresidentGame, ConfigError> {
        self.config.validate()?;

        if hands.len() != self.config.player_count() {
            return Err(ConfigError::InvalidDeal(format!(
                "{} hands for {} players",
                hands.len(),
                self.config.player_count()
            )));
        }

        let mut seen = FxHashSet::default();
        for &card in hands.iter().flatten() {
            if !seen.insert(card) {
                return Err(ConfigError::InvalidDeal(format!("{} dealt twice", card)));
            }
        }
        if let Some(missing) = full_deck().into_iter().find(|card| !seen.contains(card)) {
            return Err(ConfigError::InvalidDeal(format!("{} not dealt", missing)));
        }

        log::info!("dealt prearranged president for {} players", hands.len());
        Ok(PresidentGame::deal(self.config.players, hands, self.skip_rule))
    }
}

impl PresidentGame {
    fn deal(players: Vec<String>, hands: Vec<Vec<Card>>, skip_rule: SkipRule) -> Self {
        let mut hands: Vec<Deck> = hands
            .into_iter()
            .map(|mut hand| {
                hand.sort_by_key(|card| display_value(card.rank()));
                hand.into_iter().collect()
            })
            .collect();
        hands.resize_with(players.len(), Deck::new);

        let start = hands
            .iter()
            .position(|hand| hand.contains(&STARTING_CARD))
            .map_or(PlayerId::new(0), |index| PlayerId(index as u8));

        let mut game = Self {
            players,
            turn: start,
            last_play: PlayerId::new(0),
            mode: 0,
            skip_rule,
            hands: PlayerMap::from_vec(hands),
            pile: Deck::new(),
            discard: Deck::new(),
            winners: Vec::new(),
            resigned: Vec::new(),
        };
        game.finalize();
        game
    }

    /// Get player count.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Required play size for the current streak (0 = any).
    #[must_use]
    pub fn mode(&self) -> u8 {
        self.mode
    }

    /// Last seat whose move was not a pass.
    #[must_use]
    pub fn last_play(&self) -> PlayerId {
        self.last_play
    }

    #[must_use]
    pub fn skip_rule(&self) -> SkipRule {
        self.skip_rule
    }

    /// Seats that left the game, earliest first.
    #[must_use]
    pub fn resigned(&self) -> &[PlayerId] {
        &self.resigned
    }

    /// Whether a seat already has a placement (finished or resigned).
    #[must_use]
    pub fn is_finished(&self, player: PlayerId) -> bool {
        self.winners.contains(&player) || self.resigned.contains(&player)
    }

    /// True once every seat is placed. Every later move returns `GameOver`.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.winners.len() == self.player_count()
    }

    /// Remove a seat from the game.
    ///
    /// The hand goes to the discard and the seat takes the lowest place not
    /// yet taken by an earlier resignation.
    pub fn resign(&mut self, player: PlayerId) -> Result<(), PlayError> {
        self.check_seat(player)?;
        if self.is_finished(player) {
            return Err(PlayError::AlreadyFinished(player));
        }

        let hand = std::mem::take(&mut self.hands[player]);
        self.discard.append(hand);
        self.resigned.push(player);
        log::debug!("{} resigned", self.label(player));

        if self.last_play == player {
            self.last_play = self.next_seat(player, 1);
        }
        if self.turn == player {
            self.turn = self.next_seat(player, 1);
            if self.turn == self.last_play {
                log::debug!("nobody beat {}; clearing the pile", self.label(self.last_play));
                self.clear_pile();
            }
        }

        self.finalize();
        Ok(())
    }

    pub(super) fn hand(&self, player: PlayerId) -> &Deck {
        &self.hands[player]
    }

    // === Validation ===

    fn check_seat(&self, player: PlayerId) -> Result<(), PlayError> {
        if self.is_over() {
            return Err(PlayError::GameOver);
        }
        if player.index() >= self.player_count() {
            return Err(PlayError::UnknownPlayer(player));
        }
        Ok(())
    }

    /// Whether the pile topped with `cards` ends in four of a kind.
    fn is_completion(&self, cards: &[Card]) -> bool {
        if cards.is_empty() {
            return false;
        }
        let tail: SmallVec<[Card; 4]> = self.pile.iter().chain(cards).rev().take(4).copied().collect();
        tail.len() == 4 && tail.iter().all(|card| card.rank() == tail[0].rank())
    }

    /// Decide what `player` playing `cards` would do, without touching state.
    pub(super) fn check(&self, player: PlayerId, cards: &[Card]) -> Result<Move, PlayError> {
        self.check_seat(player)?;

        let completion = self.is_completion(cards);
        if player != self.turn && !completion {
            return Err(PlayError::OutOfTurn {
                player,
                turn: self.turn,
            });
        }

        let Some(&lead) = cards.first() else {
            return Ok(Move::Pass);
        };

        let hand = &self.hands[player];
        let mut claimed = FxHashSet::default();
        for &card in cards {
            if !claimed.insert(card) || !hand.contains(&card) {
                return Err(PlayError::CardNotInHand(card));
            }
        }

        let count = cards.len();
        if self.mode != 0
            && count != usize::from(self.mode)
            && count != 4
            && lead.rank() != BOMB_RANK
            && !completion
        {
            return Err(PlayError::WrongPlayCount {
                given: count,
                required: self.mode,
            });
        }

        if count > 1 {
            if let Some(pair) = cards.windows(2).find(|pair| pair[0].rank() != pair[1].rank()) {
                return Err(PlayError::NonUniformRank(pair[0], pair[1]));
            }
            if lead.rank() == BOMB_RANK {
                return Err(PlayError::MultipleTwosDisallowed);
            }
        }

        let top = self.pile.back().copied();
        if let Some(top) = top {
            if is_lower(lead, top) {
                return Err(PlayError::PlayTooLow { played: lead, top });
            }
        }

        if lead.rank() == BOMB_RANK && top.is_none() {
            return Err(PlayError::EmptyPileBomb);
        }

        if lead.rank() == BOMB_RANK || count == 4 || completion {
            return Ok(Move::Bomb);
        }

        let skip = count == 1
            && match self.skip_rule {
                SkipRule::Never => false,
                SkipRule::MatchedRank => top.is_some_and(|top| top.rank() == lead.rank()),
                SkipRule::AnySingle => top.is_some(),
            };
        Ok(Move::Beat { skip })
    }

    // === Mutation ===

    fn apply(&mut self, player: PlayerId, cards: &[Card], action: Move) {
        match action {
            Move::Pass => self.pass(player),
            Move::Beat { skip } => {
                self.commit(player, cards);
                let steps = if skip { 2 } else { 1 };
                self.turn = self.next_seat(self.turn, steps);
                log::debug!(
                    "{} played {}; {} to act",
                    self.label(player),
                    format_cards(cards),
                    self.label(self.turn)
                );
            }
            Move::Bomb => {
                self.commit(player, cards);
                log::debug!("{} bombed with {}", self.label(player), format_cards(cards));
                self.clear_pile();
                self.turn = player;
            }
        }

        if action != Move::Pass {
            self.last_play = player;
            if self.hands[player].is_empty() {
                self.winners.push(player);
                log::debug!("{} finished in place {}", self.label(player), self.winners.len());
                self.last_play = self.next_seat(player, 1);
                self.clear_pile();
                if self.turn == player {
                    self.turn = self.next_seat(player, 1);
                }
            }
        }

        self.finalize();
    }

    fn pass(&mut self, player: PlayerId) {
        self.turn = self.next_seat(self.turn, 1);
        log::debug!("{} passed", self.label(player));

        if self.turn == self.last_play {
            log::debug!("nobody beat {}; clearing the pile", self.label(self.last_play));
            self.clear_pile();
        }
    }

    fn commit(&mut self, player: PlayerId, cards: &[Card]) {
        self.mode = cards.len() as u8;

        let hand = &mut self.hands[player];
        for card in cards {
            if let Some(position) = hand.index_of(card) {
                hand.remove(position);
            }
        }

        self.pile.extend(cards.iter().copied());
    }

    fn clear_pile(&mut self) {
        let pile = std::mem::take(&mut self.pile);
        self.discard.append(pile);
        self.mode = 0;
    }

    /// Place the last seat standing, then the resigned seats in reverse.
    fn finalize(&mut self) {
        if self.is_over() {
            return;
        }

        let remaining: SmallVec<[PlayerId; 2]> = PlayerId::all(self.player_count())
            .filter(|&seat| !self.is_finished(seat))
            .take(2)
            .collect();
        if remaining.len() > 1 {
            return;
        }

        if let Some(&last) = remaining.first() {
            log::debug!("{} is the last player standing", self.label(last));
            self.winners.push(last);
        }
        self.winners.extend(self.resigned.iter().rev());
        log::debug!("game over: {:?}", self.winners);
    }

    fn next_seat(&self, from: PlayerId, steps: usize) -> PlayerId {
        turn::after(from, steps, self.player_count(), |seat| self.is_finished(seat))
    }

    fn label(&self, player: PlayerId) -> &str {
        self.players.get(player.index()).map_or("?", String::as_str)
    }
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(Card::to_string).collect::<Vec<_>>().join(" ")
}

impl TrickGame for PresidentGame {
    fn variant(&self) -> Option<GameVariant> {
        Some(GameVariant::President)
    }

    fn players(&self) -> Vec<String> {
        self.players.clone()
    }

    fn turn(&self) -> PlayerId {
        self.turn
    }

    fn hands(&self, viewer: PlayerId) -> Vec<HandView> {
        self.hands
            .iter()
            .map(|(seat, hand)| {
                if seat == viewer {
                    HandView::Visible(hand.clone())
                } else {
                    HandView::Hidden { size: hand.len() }
                }
            })
            .collect()
    }

    fn piles(&self) -> Piles {
        Piles {
            active: self.pile.clone(),
            discard: self.discard.clone(),
        }
    }

    fn winners(&self) -> Vec<PlayerId> {
        self.winners.clone()
    }

    fn play(&mut self, player: PlayerId, cards: &[Card]) -> Result<(), PlayError> {
        match self.check(player, cards) {
            Ok(action) => {
                self.apply(player, cards, action);
                Ok(())
            }
            Err(err) => {
                log::trace!("rejected move by {}: {}", self.label(player), err);
                Err(err)
            }
        }
    }

    /// Finished seats fill places from the top, resigned seats from the
    /// bottom.
    fn rankings(&self) -> Vec<Option<PlayerId>> {
        let mut places = vec![None; self.player_count()];
        for (place, &seat) in self.winners.iter().enumerate() {
            places[place] = Some(seat);
        }
        if !self.is_over() {
            for (place, &seat) in places.iter_mut().rev().zip(&self.resigned) {
                *place = Some(seat);
            }
        }
        places
    }
}
