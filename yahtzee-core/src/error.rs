//! Errors raised by the rule engine.
//!
//! Every error is a broken caller contract. Operations validate fully before
//! touching state, so a returned error means nothing changed.

use thiserror::Error;

use crate::score_group::ScoreGroup;

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request itself was malformed for the current state (bad keep values, no players).
    InvalidArgument,
    /// The request is not allowed in the current phase of the game.
    IllegalState,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("a game needs at least one player")]
    NoPlayers,
    #[error("cannot keep dice before the first roll of a turn")]
    KeepBeforeFirstRoll,
    #[error("die {0} not present in the current hand")]
    DieNotPresent(u8),
    #[error("cannot keep {0} dice, a hand has 5")]
    TooManyKept(usize),
    #[error("die generator produced {0}, expected 1..=6")]
    InvalidDieValue(u8),
    #[error("no more rolls this turn")]
    NoMoreRolls,
    #[error("game finished")]
    GameFinished,
    #[error("must roll before scoring")]
    NotRolled,
    #[error("category {0} already scored")]
    GroupAlreadyScored(ScoreGroup),
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::NoPlayers
            | GameError::KeepBeforeFirstRoll
            | GameError::DieNotPresent(_)
            | GameError::TooManyKept(_) => ErrorKind::InvalidArgument,
            GameError::InvalidDieValue(_)
            | GameError::NoMoreRolls
            | GameError::GameFinished
            | GameError::NotRolled
            | GameError::GroupAlreadyScored(_) => ErrorKind::IllegalState,
        }
    }
}
