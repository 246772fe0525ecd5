//! Game setup loaded from YAML.
//!
//! ```yaml
//! players:
//!   - name: Ann
//!     kind: human
//!   - name: Bot
//!     kind: computer
//! dice:
//!   seed: 42
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GameError;
use crate::game::YahtzeeGame;
use crate::generator::RandomGenerator;
use crate::player::Player;
use crate::policy::GreedyPolicy;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid game setup: {0}")]
    Game(#[from] GameError),
}

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Seating order; the first entry moves first.
    #[serde(default = "default_players")]
    pub players: Vec<PlayerConfig>,
    #[serde(default)]
    pub dice: DiceConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub kind: PlayerKindConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerKindConfig {
    #[default]
    Human,
    /// Plays with [`GreedyPolicy`].
    Computer,
}

/// Dice source settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DiceConfig {
    /// Fixed seed for reproducible dice. Entropy-seeded if unset.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_players() -> Vec<PlayerConfig> {
    vec![
        PlayerConfig {
            name: "Player 1".to_string(),
            kind: PlayerKindConfig::Human,
        },
        PlayerConfig {
            name: "Player 2".to_string(),
            kind: PlayerKindConfig::Human,
        },
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            players: default_players(),
            dice: DiceConfig::default(),
        }
    }
}

impl PlayerConfig {
    pub fn to_player(&self) -> Player {
        match self.kind {
            PlayerKindConfig::Human => Player::human(self.name.clone()),
            PlayerKindConfig::Computer => Player::computer(self.name.clone(), GreedyPolicy),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Create the players and a game with the configured dice.
    pub fn build_game(&self) -> Result<YahtzeeGame, ConfigError> {
        let players: Vec<Player> = self.players.iter().map(PlayerConfig::to_player).collect();
        let generator = match self.dice.seed {
            Some(seed) => RandomGenerator::seeded(seed),
            None => RandomGenerator::new(),
        };
        Ok(YahtzeeGame::new(&players)?.with_generator(Box::new(generator)))
    }
}
