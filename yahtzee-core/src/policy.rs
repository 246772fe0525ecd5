//! Decision policies for computer-controlled players.
//!
//! A policy is asked for one [`Action`] at a time. The engine applies it and
//! asks again until the policy scores a group, so a policy only has to return
//! legal moves; it never mutates the game itself.

use std::cmp::Reverse;

use crate::action::{Action, MAX_ROLLS_PER_TURN};
use crate::game::YahtzeeGame;
use crate::score_group::ScoreGroup;
use crate::scoring::{face_counts, scores_for_dice, LARGE_STRAIGHT_SCORE};

pub trait TurnPolicy {
    fn choose_action(&self, game: &YahtzeeGame) -> Action;
}

impl<F> TurnPolicy for F
where
    F: Fn(&YahtzeeGame) -> Action,
{
    fn choose_action(&self, game: &YahtzeeGame) -> Action {
        self(game)
    }
}

/// Chase the most common face, then take the best-paying open group.
///
/// Scores early when the hand is already worth a straight or better.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPolicy;

impl TurnPolicy for GreedyPolicy {
    fn choose_action(&self, game: &YahtzeeGame) -> Action {
        let Some(dice) = game.dice_values() else {
            return Action::roll_all();
        };

        let scores = scores_for_dice(dice);
        // Ties go to the earlier group on the sheet. A complete sheet only happens
        // once the game is over; the engine rejects the fallback then.
        let best = game
            .current_player_state()
            .open_groups()
            .max_by_key(|g| (scores[g.index()], Reverse(g.index())))
            .unwrap_or(ScoreGroup::Chance);

        if game.round_in_turn() >= MAX_ROLLS_PER_TURN || scores[best.index()] >= LARGE_STRAIGHT_SCORE
        {
            return Action::Score(best);
        }

        let counts = face_counts(&dice);
        // Highest face among the most frequent ones.
        let (face_idx, &count) = counts
            .iter()
            .enumerate()
            .max_by_key(|&(i, &c)| (c, i))
            .unwrap_or((5, &0));
        Action::keep(vec![face_idx as u8 + 1; count as usize])
    }
}
