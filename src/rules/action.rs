//! Actions as data.
//!
//! A transport layer receives requests, decodes them into an `Action`, and
//! hands it to `apply_action` together with the stored game and a random
//! source. Every variant maps to exactly one operation in `engine`.

use serde::{Deserialize, Serialize};

use super::engine;
use super::error::RuleResult;
use crate::core::{PlayerId, Position, RaceRandom};
use crate::game::Game;
use crate::wind::Heading;

/// A single request against a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    AddPlayer { player: PlayerId },
    StartSetup,
    ChooseStartingPosition { player: PlayerId, position: Position },
    StartRound,
    MoveLeg { player: PlayerId, heading: Heading },
    EndTurn,
    UsePuff { player: PlayerId, direction: Heading },
    RaiseSpinnaker { player: PlayerId },
    LowerSpinnaker { player: PlayerId },
}

/// Apply `action` to `game`.
pub fn apply_action(game: &Game, action: &Action, rng: &mut impl RaceRandom) -> RuleResult<Game> {
    match action {
        Action::AddPlayer { player } => engine::add_player(game, player),
        Action::StartSetup => engine::start_setup(game, rng),
        Action::ChooseStartingPosition { player, position } => {
            engine::choose_starting_position(game, player, *position)
        }
        Action::StartRound => engine::start_round(game, rng),
        Action::MoveLeg { player, heading } => engine::move_leg(game, player, *heading),
        Action::EndTurn => engine::end_turn(game, rng),
        Action::UsePuff { player, direction } => engine::use_puff(game, player, *direction),
        Action::RaiseSpinnaker { player } => engine::raise_spinnaker(game, player),
        Action::LowerSpinnaker { player } => engine::lower_spinnaker(game, player),
    }
}
