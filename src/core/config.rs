//! Race configuration.
//!
//! A `Game` carries its `RaceConfig` from creation onwards. The defaults
//! are the standard table rules: two to six players, two puffs per yacht,
//! and one to three legs per turn.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Invalid race configuration.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Player bounds are empty or inverted.
    #[display("player bounds {min}..={max} are invalid")]
    PlayerBounds { min: usize, max: usize },

    /// Leg roll bounds are empty or inverted.
    #[display("leg roll bounds {min}..={max} are invalid")]
    LegBounds { min: u8, max: u8 },
}

/// Game constants fixed at creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Most players the lobby admits.
    pub max_players: usize,

    /// Fewest players needed to leave the lobby.
    pub min_players: usize,

    /// Puff charges each yacht starts with.
    pub starting_puffs: u32,

    /// Smallest legs-per-turn roll.
    pub min_legs: u8,

    /// Largest legs-per-turn roll.
    pub max_legs: u8,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            max_players: 6,
            min_players: 2,
            starting_puffs: 2,
            min_legs: 1,
            max_legs: 3,
        }
    }
}

impl RaceConfig {
    /// Create the standard configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the player bounds.
    #[must_use]
    pub fn with_players(mut self, min: usize, max: usize) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    /// Set the number of puffs each yacht starts with.
    #[must_use]
    pub fn with_starting_puffs(mut self, puffs: u32) -> Self {
        self.starting_puffs = puffs;
        self
    }

    /// Set the inclusive legs-per-turn roll range.
    #[must_use]
    pub fn with_leg_roll(mut self, min: u8, max: u8) -> Self {
        self.min_legs = min;
        self.max_legs = max;
        self
    }

    /// Check that the bounds describe a playable race.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_players == 0 || self.min_players > self.max_players {
            return Err(ConfigError::PlayerBounds {
                min: self.min_players,
                max: self.max_players,
            });
        }
        if self.min_legs == 0 || self.min_legs > self.max_legs {
            return Err(ConfigError::LegBounds {
                min: self.min_legs,
                max: self.max_legs,
            });
        }
        Ok(())
    }
}
