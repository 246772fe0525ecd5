//! Legality checks for the current player's next action.
//!
//! These mirror the validation done by [`YahtzeeGame`] so callers (UIs,
//! policies) can grey out moves without attempting them.

use crate::action::{Action, MAX_ROLLS_PER_TURN};
use crate::game::YahtzeeGame;
use crate::score_group::ScoreGroup;

/// True if another roll is allowed this turn.
pub fn can_roll(game: &YahtzeeGame) -> bool {
    !game.is_finished() && game.round_in_turn() < MAX_ROLLS_PER_TURN
}

/// True if the current dice may be put on `group`.
pub fn can_score(game: &YahtzeeGame, group: ScoreGroup) -> bool {
    !game.is_finished()
        && game.round_in_turn() > 0
        && !game.current_player_state().is_scored(group)
}

/// Groups the current player has not played yet.
pub fn open_groups(game: &YahtzeeGame) -> Vec<ScoreGroup> {
    game.current_player_state().open_groups().collect()
}

pub fn is_legal(game: &YahtzeeGame, action: &Action) -> bool {
    match action {
        Action::Roll { keep } => can_roll(game) && game.hand().can_keep(keep),
        Action::Score(group) => can_score(game, *group),
    }
}
