use thiserror::Error;

use crate::cards::Card;
use crate::core::PlayerId;

/// Why a proposed move was rejected.
///
/// Rejections never change engine state; the host shows the message to the
/// player and lets them try again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    #[error("playing out of turn: it's {turn}'s turn, not {player}'s")]
    OutOfTurn { player: PlayerId, turn: PlayerId },

    #[error("can't play card: {0} is not in your hand")]
    CardNotInHand(Card),

    #[error("can't play cards: {given} given but {required} required")]
    WrongPlayCount { given: usize, required: u8 },

    #[error("can't play cards: {0} and {1} have different face values")]
    NonUniformRank(Card, Card),

    #[error("can't play multiple 2s")]
    MultipleTwosDisallowed,

    #[error("can't play card: {played} is less than {top}")]
    PlayTooLow { played: Card, top: Card },

    #[error("can't bomb an empty pile")]
    EmptyPileBomb,

    #[error("no such player: {0}")]
    UnknownPlayer(PlayerId),

    #[error("{0} has already finished")]
    AlreadyFinished(PlayerId),

    #[error("the game is over")]
    GameOver,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("a table needs at least one player")]
    NoPlayers,

    #[error("too many players: {0} (at most 255)")]
    TooManyPlayers(usize),

    #[error("invalid deal: {0}")]
    InvalidDeal(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid card: {0:?}")]
pub struct ParseCardError(pub String);
