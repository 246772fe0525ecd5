//! Scripted dice for reproducible games.
//!
//! A turn is written as comma-separated rolls. Each roll lists the kept
//! values in parentheses followed by the freshly rolled values:
//!
//! ```text
//! 5 4 6 6 1, (6 6) 3 5 6, (6 6 6) 2 3
//! ```
//!
//! [`ScriptedGenerator`] hands out the fresh values in order, so a game driven
//! with the listed keeps reproduces the listed hands exactly.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;
use thiserror::Error;

use crate::error::GameError;
use crate::game::YahtzeeGame;
use crate::generator::DieGenerator;
use crate::score_group::ScoreGroup;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScriptError {
    #[error("unbalanced parentheses in roll {0:?}")]
    Parens(String),
    #[error("invalid die face {0:?}")]
    InvalidFace(String),
    #[error("roll {0:?} does not add up to 5 dice")]
    DiceCount(String),
}

/// One roll: dice kept from the previous hand and the new values drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedRoll {
    pub keep: Vec<u8>,
    pub new: Vec<u8>,
}

impl ScriptedRoll {
    /// The hand after this roll, sorted.
    pub fn expected_dice(&self) -> Vec<u8> {
        let mut all: Vec<u8> = self.keep.iter().chain(self.new.iter()).copied().collect();
        all.sort_unstable();
        all
    }
}

impl FromStr for ScriptedRoll {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (keep_str, new_str) = match (s.find('('), s.find(')')) {
            (Some(open), Some(close)) if open < close => {
                let rest = format!("{} {}", &s[..open], &s[close + 1..]);
                (s[open + 1..close].to_string(), rest)
            }
            (None, None) => (String::new(), s.to_string()),
            _ => return Err(ScriptError::Parens(s.trim().to_string())),
        };
        let roll = ScriptedRoll {
            keep: parse_faces(&keep_str)?,
            new: parse_faces(&new_str)?,
        };
        if roll.keep.len() + roll.new.len() != 5 {
            return Err(ScriptError::DiceCount(s.trim().to_string()));
        }
        Ok(roll)
    }
}

impl fmt::Display for ScriptedRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |v: &[u8]| {
            v.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        match (self.keep.is_empty(), self.new.is_empty()) {
            (true, _) => write!(f, "{}", join(&self.new)),
            (false, true) => write!(f, "({})", join(&self.keep)),
            (false, false) => write!(f, "({}) {}", join(&self.keep), join(&self.new)),
        }
    }
}

fn parse_faces(s: &str) -> Result<Vec<u8>, ScriptError> {
    s.split_whitespace()
        .map(|tok| match tok.parse::<u8>() {
            Ok(d) if (1..=6).contains(&d) => Ok(d),
            _ => Err(ScriptError::InvalidFace(tok.to_string())),
        })
        .collect()
}

/// Parse a full turn's rolls, e.g. `"1 2 3 4 5, (1 2) 6 6 6"`.
pub fn parse_rolls(s: &str) -> Result<Vec<ScriptedRoll>, ScriptError> {
    s.split(',').map(str::parse).collect()
}

/// A turn: up to three rolls, the group it is scored on and the expected points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedTurn {
    pub rolls: Vec<ScriptedRoll>,
    pub group: ScoreGroup,
    pub expected_score: i32,
}

impl ScriptedTurn {
    pub fn parse(rolls: &str, group: ScoreGroup, expected_score: i32) -> Result<Self, ScriptError> {
        Ok(Self {
            rolls: parse_rolls(rolls)?,
            group,
            expected_score,
        })
    }

    /// Play this turn on `game` for its current player: every roll with its
    /// keep list, then the scoring. The game's generator must supply the new
    /// values (see [`ScriptedGenerator`]).
    pub fn play(&self, game: &mut YahtzeeGame) -> Result<i32, GameError> {
        for roll in &self.rolls {
            game.roll_dice_keeping(&roll.keep)?;
        }
        game.apply_dice_to_group(self.group)
    }
}

impl fmt::Display for ScriptedTurn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rolls: Vec<String> = self.rolls.iter().map(ToString::to_string).collect();
        write!(
            f,
            "{} => {} {}",
            rolls.join(", "),
            self.group,
            self.expected_score
        )
    }
}

/// Replays the new values of scripted rolls in order.
///
/// Once the script runs dry it keeps producing dice from a seeded PRNG, so a
/// game can continue past the scripted part deterministically.
pub struct ScriptedGenerator {
    queue: VecDeque<u8>,
    fallback: ChaCha8Rng,
}

impl ScriptedGenerator {
    pub fn new<'a>(turns: impl IntoIterator<Item = &'a ScriptedTurn>) -> Self {
        Self::from_rolls(turns.into_iter().flat_map(|t| t.rolls.iter()))
    }

    pub fn from_rolls<'a>(rolls: impl IntoIterator<Item = &'a ScriptedRoll>) -> Self {
        Self {
            queue: rolls
                .into_iter()
                .flat_map(|r| r.new.iter().copied())
                .collect(),
            fallback: ChaCha8Rng::seed_from_u64(0),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }
}

impl DieGenerator for ScriptedGenerator {
    fn next_die(&mut self) -> u8 {
        match self.queue.pop_front() {
            Some(d) => d,
            None => self.fallback.gen_range(1..=6),
        }
    }
}
