//! Moves a player can make during a turn.

use serde::{Deserialize, Serialize};

use crate::score_group::ScoreGroup;

/// Rolls allowed per turn.
pub const MAX_ROLLS_PER_TURN: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Re-roll every die not listed in `keep`. `keep` holds face values, not positions.
    Roll { keep: Vec<u8> },
    /// Put the current dice on a group; ends the turn.
    Score(ScoreGroup),
}

impl Action {
    /// Roll all five dice.
    pub fn roll_all() -> Self {
        Action::Roll { keep: Vec::new() }
    }

    pub fn keep(values: impl Into<Vec<u8>>) -> Self {
        Action::Roll {
            keep: values.into(),
        }
    }

    pub fn ends_turn(&self) -> bool {
        matches!(self, Action::Score(_))
    }
}
