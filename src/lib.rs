//! # regatta
//!
//! Rules engine for a turn-based sailing race board game.
//!
//! ## Design Principles
//!
//! 1. **Immutable state**: a `Game` is a value. Every operation returns a
//!    new game or a `Rejection`; the input is never touched.
//!
//! 2. **Deterministic**: the only randomness (turn order, legs per turn)
//!    comes through the `RaceRandom` trait, so a seeded or scripted source
//!    reproduces a race exactly.
//!
//! 3. **First failure wins**: preconditions run in a fixed order and the
//!    first one that fails is reported as a structured rejection.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so deriving a
//!   new game per action is cheap.
//!
//! - **Stateless engine**: no storage, transport, or sessions. Callers
//!   fetch a game, apply one action, and persist the result.
//!
//! ## Modules
//!
//! - `core`: Player IDs, positions, configuration, RNG
//! - `wind`: Compass headings, point of sail, leg speed
//! - `board`: Grid bounds, course marks, starting line
//! - `game`: Yachts and the game aggregate
//! - `rules`: State transitions, actions, rejections
//!
//! ## Example
//!
//! ```
//! use regatta::{
//!     add_player, choose_starting_position, start_round, start_setup, Board, Game, GameRng,
//!     Grid, Heading, Phase, PlayerId, Position,
//! };
//!
//! let board = Board::new(
//!     Grid::new(6, 6),
//!     [Position::new(3, 3)],
//!     (Position::new(0, 0), Position::new(3, 0)),
//! );
//! let mut rng = GameRng::new(7);
//!
//! let mut game = Game::new("race-1", board, Heading::South);
//! for id in ["ann", "bob"] {
//!     game = add_player(&game, &PlayerId::new(id)).unwrap();
//! }
//! game = start_setup(&game, &mut rng).unwrap();
//!
//! for x in 0..2 {
//!     let current = game.current_player().cloned().unwrap();
//!     game = choose_starting_position(&game, &current, Position::new(x, 0)).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::Racing);
//!
//! let game = start_round(&game, &mut rng).unwrap();
//! assert!((1..=3).contains(&game.legs_remaining()));
//! ```

pub mod core;
pub mod wind;
pub mod board;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, GameRng, GameRngState, PlayerId, Position, RaceConfig, RaceRandom,
};

pub use crate::wind::{leg_speed, point_of_sail, Heading, PointOfSail, WindDirection};

pub use crate::board::{Board, Grid, StartingLine};

pub use crate::game::{Game, Phase, Yacht};

pub use crate::rules::{
    add_player, apply_action, choose_starting_position, end_turn, legal_headings,
    lower_spinnaker, move_leg, preview_leg, raise_spinnaker, start_round, start_setup, use_puff,
    Action, LegPreview, Rejection, RejectionKind, RuleResult,
};
