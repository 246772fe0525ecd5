//! The thirteen scoring categories, split into the upper and lower section.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of scoring categories on a sheet.
pub const NUM_GROUPS: usize = 13;

/// A scoring category. Ordering follows the printed score sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreGroup {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yahtzee,
    Chance,
}

impl ScoreGroup {
    pub const ALL: [ScoreGroup; NUM_GROUPS] = [
        ScoreGroup::Ones,
        ScoreGroup::Twos,
        ScoreGroup::Threes,
        ScoreGroup::Fours,
        ScoreGroup::Fives,
        ScoreGroup::Sixes,
        ScoreGroup::ThreeOfAKind,
        ScoreGroup::FourOfAKind,
        ScoreGroup::FullHouse,
        ScoreGroup::SmallStraight,
        ScoreGroup::LargeStraight,
        ScoreGroup::Yahtzee,
        ScoreGroup::Chance,
    ];

    /// Position of this group in [`ScoreGroup::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// True for ONES..SIXES.
    #[inline]
    pub fn is_upper(self) -> bool {
        self.index() < 6
    }

    #[inline]
    pub fn is_lower(self) -> bool {
        !self.is_upper()
    }

    /// The die face counted by an upper group (`Ones` -> 1 .. `Sixes` -> 6).
    pub fn face(self) -> Option<u8> {
        if self.is_upper() {
            Some(self.index() as u8 + 1)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreGroup::Ones => "ONES",
            ScoreGroup::Twos => "TWOS",
            ScoreGroup::Threes => "THREES",
            ScoreGroup::Fours => "FOURS",
            ScoreGroup::Fives => "FIVES",
            ScoreGroup::Sixes => "SIXES",
            ScoreGroup::ThreeOfAKind => "THREE_OF_A_KIND",
            ScoreGroup::FourOfAKind => "FOUR_OF_A_KIND",
            ScoreGroup::FullHouse => "FULL_HOUSE",
            ScoreGroup::SmallStraight => "SMALL_STRAIGHT",
            ScoreGroup::LargeStraight => "LARGE_STRAIGHT",
            ScoreGroup::Yahtzee => "YAHTZEE",
            ScoreGroup::Chance => "CHANCE",
        }
    }
}

impl fmt::Display for ScoreGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
