//! Core engine types: players, positions, configuration, RNG.
//!
//! These are the leaf building blocks every other module uses. None of them
//! know about phases or turn order.

pub mod player;
pub mod position;
pub mod rng;
pub mod config;

pub use player::PlayerId;
pub use position::Position;
pub use rng::{GameRng, GameRngState, RaceRandom};
pub use config::{ConfigError, RaceConfig};
