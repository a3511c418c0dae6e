//! The game aggregate.
//!
//! `Game` is an immutable value. Rules operations never modify a game in
//! place; they derive a new one through the `with_*` methods, which each
//! replace a single field and carry the rest forward. Collections are `im`
//! persistent structures, so deriving is cheap.
//!
//! ## Phases
//!
//! ```text
//! LOBBY --start_setup--> SETUP --(all placed)--> RACING --(win)--> FINISHED
//! ```

use derive_more::Display;
use im::{OrdMap, OrdSet, Vector};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::yacht::Yacht;
use crate::board::Board;
use crate::core::{ConfigError, PlayerId, Position, RaceConfig};
use crate::wind::WindDirection;

/// Macro-state of a game.
#[derive(
    Clone, Copy, Debug, Display, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
    Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Phase {
    /// Players are joining.
    #[default]
    #[display("LOBBY")]
    Lobby,
    /// Players are choosing starting positions.
    #[display("SETUP")]
    Setup,
    /// Yachts are sailing.
    #[display("RACING")]
    Racing,
    /// A winner has been declared. Terminal.
    #[display("FINISHED")]
    Finished,
}

/// Complete state of one race.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    id: String,
    config: RaceConfig,
    board: Board,
    wind_direction: WindDirection,

    players: OrdSet<PlayerId>,
    yachts: OrdMap<PlayerId, Yacht>,

    phase: Phase,
    setup_order: Vector<PlayerId>,
    current_player_index: usize,

    legs_per_turn: u8,
    legs_remaining: u8,
    has_used_puff: bool,
    round_number: u32,

    winner: Option<PlayerId>,
}

impl Game {
    /// A new game in the lobby under the standard rules.
    #[must_use]
    pub fn new(id: impl Into<String>, board: Board, wind_direction: WindDirection) -> Self {
        Self::lobby(id.into(), board, wind_direction, RaceConfig::default())
    }

    /// A new game in the lobby under `config`.
    ///
    /// Fails if `config` does not validate, so every game in play carries
    /// usable player and leg bounds.
    pub fn with_config(
        id: impl Into<String>,
        board: Board,
        wind_direction: WindDirection,
        config: RaceConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::lobby(id.into(), board, wind_direction, config))
    }

    fn lobby(id: String, board: Board, wind_direction: WindDirection, config: RaceConfig) -> Self {
        Self {
            id,
            config,
            board,
            wind_direction,
            players: OrdSet::new(),
            yachts: OrdMap::new(),
            phase: Phase::Lobby,
            setup_order: Vector::new(),
            current_player_index: 0,
            legs_per_turn: 0,
            legs_remaining: 0,
            has_used_puff: false,
            round_number: 0,
            winner: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn config(&self) -> &RaceConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn wind_direction(&self) -> WindDirection {
        self.wind_direction
    }

    #[must_use]
    pub fn players(&self) -> &OrdSet<PlayerId> {
        &self.players
    }

    #[must_use]
    pub fn yachts(&self) -> &OrdMap<PlayerId, Yacht> {
        &self.yachts
    }

    #[must_use]
    pub fn yacht(&self, player: &PlayerId) -> Option<&Yacht> {
        self.yachts.get(player)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Turn order, fixed when setup starts.
    #[must_use]
    pub fn setup_order(&self) -> &Vector<PlayerId> {
        &self.setup_order
    }

    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    /// Whose turn it is, if the turn order has been drawn.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.setup_order.get(self.current_player_index)
    }

    #[must_use]
    pub fn legs_per_turn(&self) -> u8 {
        self.legs_per_turn
    }

    #[must_use]
    pub fn legs_remaining(&self) -> u8 {
        self.legs_remaining
    }

    #[must_use]
    pub fn has_used_puff(&self) -> bool {
        self.has_used_puff
    }

    /// Number of legs-per-turn rolls so far.
    #[must_use]
    pub fn round_number(&self) -> u32 {
        self.round_number
    }

    #[must_use]
    pub fn winner(&self) -> Option<&PlayerId> {
        self.winner.as_ref()
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Whether `current_player_index` is the final slot of the turn order.
    #[must_use]
    pub fn is_last_in_order(&self) -> bool {
        self.current_player_index + 1 >= self.setup_order.len()
    }

    /// Squares currently holding a yacht.
    #[must_use]
    pub fn occupied_positions(&self) -> FxHashSet<Position> {
        self.yachts.values().map(Yacht::position).collect()
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.yachts.values().any(|yacht| yacht.position() == position)
    }

    // === Derivation ===

    #[must_use]
    pub fn with_players(&self, players: OrdSet<PlayerId>) -> Self {
        Self {
            players,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_player(&self, player: PlayerId) -> Self {
        self.with_players(self.players.update(player))
    }

    #[must_use]
    pub fn with_yachts(&self, yachts: OrdMap<PlayerId, Yacht>) -> Self {
        Self {
            yachts,
            ..self.clone()
        }
    }

    /// Insert or replace one player's yacht.
    #[must_use]
    pub fn with_yacht(&self, player: PlayerId, yacht: Yacht) -> Self {
        self.with_yachts(self.yachts.update(player, yacht))
    }

    #[must_use]
    pub fn with_phase(&self, phase: Phase) -> Self {
        Self {
            phase,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_setup_order(&self, setup_order: impl IntoIterator<Item = PlayerId>) -> Self {
        Self {
            setup_order: setup_order.into_iter().collect(),
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_current_player_index(&self, current_player_index: usize) -> Self {
        Self {
            current_player_index,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_legs_per_turn(&self, legs_per_turn: u8) -> Self {
        Self {
            legs_per_turn,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_legs_remaining(&self, legs_remaining: u8) -> Self {
        Self {
            legs_remaining,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_has_used_puff(&self, has_used_puff: bool) -> Self {
        Self {
            has_used_puff,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_round_number(&self, round_number: u32) -> Self {
        Self {
            round_number,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_winner(&self, winner: Option<PlayerId>) -> Self {
        Self {
            winner,
            ..self.clone()
        }
    }
}
