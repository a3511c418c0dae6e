//! Rejections returned by rules operations.
//!
//! Every failed precondition maps to exactly one variant, carrying enough
//! structured data to tell which check failed and for whom. Callers branch
//! on the variant (or its coarse `RejectionKind`), never on message text.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

use crate::core::{PlayerId, Position};
use crate::game::Phase;

/// Result of a rules operation.
pub type RuleResult<T> = Result<T, Rejection>;

/// Coarse grouping of rejections.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionKind {
    /// Wrong phase for the operation.
    Phase,
    /// Player cap, duplicate join, too few players, or no yacht.
    Membership,
    /// Acting player is not the current player.
    Turn,
    /// Target square is off the board, off the line, or taken.
    Spatial,
    /// No legs, no puffs, or puff already used.
    Resource,
    /// Spinnaker already in the requested state.
    RedundantState,
}

/// A violated precondition. The input game is left unchanged.
#[derive(Clone, Debug, Display, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    #[display("operation requires phase {expected}, game is in {actual}")]
    WrongPhase { expected: Phase, actual: Phase },

    #[display("player {player} is already in the game")]
    AlreadyJoined { player: PlayerId },

    #[display("the game already has the maximum of {max} players")]
    LobbyFull { max: usize },

    #[display("at least {min} players are needed to start, game has {actual}")]
    NotEnoughPlayers { min: usize, actual: usize },

    #[display("it is not player {player}'s turn (current: {current:?})")]
    NotYourTurn {
        player: PlayerId,
        current: Option<PlayerId>,
    },

    #[display("player {player} has no yacht on the course")]
    NoYacht { player: PlayerId },

    #[display("position {position} is not on the starting line")]
    NotOnStartingLine { position: Position },

    #[display("position {position} is out of bounds")]
    OutOfBounds { position: Position },

    #[display("position {position} is occupied")]
    Occupied { position: Position },

    #[display("player {player} has no legs remaining")]
    NoLegsRemaining { player: PlayerId },

    #[display("the current turn still has {remaining} legs remaining")]
    LegsRemaining { remaining: u8 },

    #[display("player {player} has already used a puff this turn")]
    PuffAlreadyUsed { player: PlayerId },

    #[display("player {player} is out of puffs")]
    OutOfPuffs { player: PlayerId },

    #[display("player {player}'s spinnaker is already raised")]
    SpinnakerAlreadyRaised { player: PlayerId },

    #[display("player {player}'s spinnaker is already lowered")]
    SpinnakerAlreadyLowered { player: PlayerId },
}

impl Rejection {
    /// Which group of preconditions this rejection belongs to.
    #[must_use]
    pub fn kind(&self) -> RejectionKind {
        match self {
            Rejection::WrongPhase { .. } => RejectionKind::Phase,
            Rejection::AlreadyJoined { .. }
            | Rejection::LobbyFull { .. }
            | Rejection::NotEnoughPlayers { .. }
            | Rejection::NoYacht { .. } => RejectionKind::Membership,
            Rejection::NotYourTurn { .. } => RejectionKind::Turn,
            Rejection::NotOnStartingLine { .. }
            | Rejection::OutOfBounds { .. }
            | Rejection::Occupied { .. } => RejectionKind::Spatial,
            Rejection::NoLegsRemaining { .. }
            | Rejection::LegsRemaining { .. }
            | Rejection::PuffAlreadyUsed { .. }
            | Rejection::OutOfPuffs { .. } => RejectionKind::Resource,
            Rejection::SpinnakerAlreadyRaised { .. }
            | Rejection::SpinnakerAlreadyLowered { .. } => RejectionKind::RedundantState,
        }
    }
}
