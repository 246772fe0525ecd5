//! yahtzee-core: Yahtzee rules, scoring, score sheets, turn sequencing and
//! game sessions.

pub mod action;
pub mod config;
pub mod dice;
pub mod error;
pub mod game;
pub mod generator;
pub mod legal;
pub mod listener;
pub mod player;
pub mod policy;
pub mod score_group;
pub mod scoring;
pub mod script;
pub mod sheet;

pub use action::{Action, MAX_ROLLS_PER_TURN};
pub use config::{Config, ConfigError};
pub use dice::{DiceHand, NUM_DICE};
pub use error::{ErrorKind, GameError};
pub use game::{ScoreRecord, YahtzeeGame};
pub use generator::{DieGenerator, RandomGenerator, SequenceGenerator};
pub use legal::{can_roll, can_score, is_legal, open_groups};
pub use listener::{GameFinishedListener, GameUpdateListener};
pub use player::{Player, PlayerId, PlayerKind};
pub use policy::{GreedyPolicy, TurnPolicy};
pub use score_group::{ScoreGroup, NUM_GROUPS};
pub use scoring::{
    face_counts, score, scores_for_dice, upper_total_with_bonus, UPPER_BONUS,
    UPPER_BONUS_THRESHOLD,
};
pub use script::{ScriptError, ScriptedGenerator, ScriptedRoll, ScriptedTurn};
pub use sheet::ScoreSheet;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod legal_tests;
mod scoring_tests;
