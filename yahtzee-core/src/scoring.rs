//! Scoring of a 5-dice hand against each category.
//!
//! All functions here are pure: they read the hand and never modify it.

use crate::score_group::{ScoreGroup, NUM_GROUPS};

/// Upper subtotal needed to earn the bonus.
pub const UPPER_BONUS_THRESHOLD: i32 = 63;
/// Points added to the upper total once the threshold is reached.
pub const UPPER_BONUS: i32 = 25;

pub const FULL_HOUSE_SCORE: i32 = 25;
pub const SMALL_STRAIGHT_SCORE: i32 = 30;
pub const LARGE_STRAIGHT_SCORE: i32 = 40;
pub const YAHTZEE_SCORE: i32 = 50;

/// Count occurrences of each face; `counts[f - 1]` is the number of dice showing `f`.
///
/// Input dice must be in 1..=6. Order does not matter.
pub fn face_counts(dice: &[u8; 5]) -> [u8; 6] {
    let mut counts = [0u8; 6];
    for &d in dice {
        debug_assert!((1..=6).contains(&d), "die out of range: {}", d);
        counts[(d - 1) as usize] += 1;
    }
    counts
}

/// Score `dice` in `group`. Upper bonus is not included.
pub fn score(dice: [u8; 5], group: ScoreGroup) -> i32 {
    let counts = face_counts(&dice);
    score_counts(&counts, group)
}

/// Raw scores for every category, indexed like [`ScoreGroup::ALL`].
pub fn scores_for_dice(dice: [u8; 5]) -> [i32; NUM_GROUPS] {
    let counts = face_counts(&dice);
    let mut s = [0i32; NUM_GROUPS];
    for g in ScoreGroup::ALL {
        s[g.index()] = score_counts(&counts, g);
    }
    s
}

/// Apply the upper-section bonus rule to a raw subtotal.
pub fn upper_total_with_bonus(upper_sub_total: i32) -> i32 {
    if upper_sub_total >= UPPER_BONUS_THRESHOLD {
        upper_sub_total + UPPER_BONUS
    } else {
        upper_sub_total
    }
}

fn score_counts(counts: &[u8; 6], group: ScoreGroup) -> i32 {
    let sum = sum_of_dice(counts);
    let max_count = counts.iter().copied().max().unwrap_or(0);

    match group {
        ScoreGroup::Ones
        | ScoreGroup::Twos
        | ScoreGroup::Threes
        | ScoreGroup::Fours
        | ScoreGroup::Fives
        | ScoreGroup::Sixes => {
            let i = group.index();
            counts[i] as i32 * (i as i32 + 1)
        }
        ScoreGroup::ThreeOfAKind => {
            if max_count >= 3 {
                sum
            } else {
                0
            }
        }
        ScoreGroup::FourOfAKind => {
            if max_count >= 4 {
                sum
            } else {
                0
            }
        }
        ScoreGroup::FullHouse => {
            let has3 = counts.iter().any(|&c| c == 3);
            let has2 = counts.iter().any(|&c| c == 2);
            if has3 && has2 {
                FULL_HOUSE_SCORE
            } else {
                0
            }
        }
        ScoreGroup::SmallStraight => {
            if has_run(counts, 4) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        ScoreGroup::LargeStraight => {
            if has_run(counts, 5) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        ScoreGroup::Yahtzee => {
            if max_count == 5 {
                YAHTZEE_SCORE
            } else {
                0
            }
        }
        ScoreGroup::Chance => sum,
    }
}

fn sum_of_dice(counts: &[u8; 6]) -> i32 {
    counts
        .iter()
        .enumerate()
        .map(|(i, &c)| c as i32 * (i as i32 + 1))
        .sum()
}

/// True if `len` consecutive faces are all present.
fn has_run(counts: &[u8; 6], len: usize) -> bool {
    counts.windows(len).any(|w| w.iter().all(|&c| c >= 1))
}
