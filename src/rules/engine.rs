//! State transitions.
//!
//! Each operation takes the current game (plus its arguments) and returns
//! either a new game or the first failed precondition. The input game is
//! never modified, so a rejection leaves the caller's state exactly as it
//! was.
//!
//! Check order matters when several preconditions fail at once: phase
//! first, then turn ownership, then resources and geometry, as listed on
//! each operation.

use tracing::{debug, info, instrument};

use super::checks::{require_legs, require_open_water, require_phase, require_turn, require_yacht};
use super::error::{Rejection, RuleResult};
use crate::core::{PlayerId, Position, RaceRandom};
use crate::game::{Game, Phase, Yacht};
use crate::wind::{leg_speed, Heading};

// === Lobby ===

/// Add a player to the lobby.
///
/// Checks: phase is LOBBY, player not present, lobby not full.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn add_player(game: &Game, player: &PlayerId) -> RuleResult<Game> {
    require_phase(game, Phase::Lobby)?;
    if game.players().contains(player) {
        return Err(Rejection::AlreadyJoined {
            player: player.clone(),
        });
    }
    let max = game.config().max_players;
    if game.players().len() >= max {
        return Err(Rejection::LobbyFull { max });
    }
    Ok(game.with_player(player.clone()))
}

/// Close the lobby and draw the turn order.
///
/// Checks: phase is LOBBY, enough players.
#[instrument(skip(game, rng), fields(game = %game.id()), err(level = "debug"))]
pub fn start_setup(game: &Game, rng: &mut impl RaceRandom) -> RuleResult<Game> {
    require_phase(game, Phase::Lobby)?;
    let min = game.config().min_players;
    let actual = game.players().len();
    if actual < min {
        return Err(Rejection::NotEnoughPlayers { min, actual });
    }

    let order = rng.permutation(game.players().iter().cloned().collect());
    debug!(?order, "turn order drawn");

    Ok(game
        .with_setup_order(order)
        .with_phase(Phase::Setup)
        .with_current_player_index(0))
}

// === Setup ===

/// Place the current player's yacht on the starting line.
///
/// Checks: phase is SETUP, player's turn, position on the line, position
/// free. The yacht faces away from the wind. Placing the last yacht starts
/// the race with the first player in the order.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn choose_starting_position(
    game: &Game,
    player: &PlayerId,
    position: Position,
) -> RuleResult<Game> {
    require_phase(game, Phase::Setup)?;
    require_turn(game, player)?;
    if !game.board().on_starting_line(position) {
        return Err(Rejection::NotOnStartingLine { position });
    }
    if game.is_occupied(position) {
        return Err(Rejection::Occupied { position });
    }

    let yacht = Yacht::new(position, game.wind_direction().opposite())
        .with_puff_count(game.config().starting_puffs);
    let placed = game.with_yacht(player.clone(), yacht);

    if game.is_last_in_order() {
        debug!("all yachts placed, race begins");
        Ok(placed
            .with_phase(Phase::Racing)
            .with_current_player_index(0))
    } else {
        Ok(placed.with_current_player_index(game.current_player_index() + 1))
    }
}

// === Racing: turn structure ===

/// Roll the legs for a fresh round.
///
/// Checks: phase is RACING. Seeds the very first round; later rounds are
/// rolled by `end_turn`.
#[instrument(skip(game, rng), fields(game = %game.id()), err(level = "debug"))]
pub fn start_round(game: &Game, rng: &mut impl RaceRandom) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    Ok(new_round(game, rng))
}

/// Pass the turn to the next player.
///
/// Checks: phase is RACING, no legs remaining. Wrapping past the last
/// player starts a new round with a fresh roll; mid-round the roll carries
/// over.
#[instrument(skip(game, rng), fields(game = %game.id()), err(level = "debug"))]
pub fn end_turn(game: &Game, rng: &mut impl RaceRandom) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    if game.legs_remaining() > 0 {
        return Err(Rejection::LegsRemaining {
            remaining: game.legs_remaining(),
        });
    }

    if game.is_last_in_order() {
        Ok(new_round(&game.with_current_player_index(0), rng))
    } else {
        Ok(game
            .with_current_player_index(game.current_player_index() + 1)
            .with_legs_remaining(game.legs_per_turn())
            .with_has_used_puff(false))
    }
}

fn new_round(game: &Game, rng: &mut impl RaceRandom) -> Game {
    let config = game.config();
    let legs = rng.roll(config.min_legs, config.max_legs);
    let round = game.round_number() + 1;
    debug!(round, legs, "new round");

    game.with_legs_per_turn(legs)
        .with_legs_remaining(legs)
        .with_has_used_puff(false)
        .with_round_number(round)
}

// === Racing: in-turn actions ===

/// Sail one leg.
///
/// Checks: phase is RACING, player's turn, legs remaining, player has a
/// yacht, destination in bounds, destination free. Only the destination is
/// checked; the yacht passes over anything in between.
///
/// The yacht turns to `heading`, rounds the destination if it is a course
/// mark, and wins if it then holds every mark and sits on the line.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn move_leg(game: &Game, player: &PlayerId, heading: Heading) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    require_turn(game, player)?;
    require_legs(game, player)?;
    let yacht = require_yacht(game, player)?;

    let speed = leg_speed(game.wind_direction(), heading, yacht.spinnaker());
    let destination = yacht.position().advance(heading, speed);
    require_open_water(game, player, destination)?;

    let board = game.board();
    let mut moved = yacht.with_position(destination).with_heading(heading);
    if board.on_course_mark(destination) {
        moved = moved.round_mark(destination);
    }

    let has_won = moved.has_rounded_all(board.course_marks())
        && board.on_starting_line(destination);

    let next = game
        .with_yacht(player.clone(), moved)
        .with_legs_remaining(game.legs_remaining() - 1);

    if has_won {
        info!(%player, "race won");
        Ok(next
            .with_phase(Phase::Finished)
            .with_winner(Some(player.clone())))
    } else {
        Ok(next)
    }
}

/// Use a puff: one free step in any direction, wind ignored.
///
/// Checks: phase is RACING, player's turn, no puff yet this turn, player
/// has a yacht, charges left, destination in bounds, destination free.
/// Costs no leg and works with no legs left.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn use_puff(game: &Game, player: &PlayerId, direction: Heading) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    require_turn(game, player)?;
    if game.has_used_puff() {
        return Err(Rejection::PuffAlreadyUsed {
            player: player.clone(),
        });
    }
    let yacht = require_yacht(game, player)?;
    if yacht.puff_count() == 0 {
        return Err(Rejection::OutOfPuffs {
            player: player.clone(),
        });
    }

    let destination = yacht.position().step(direction);
    require_open_water(game, player, destination)?;

    let moved = yacht
        .with_position(destination)
        .with_puff_count(yacht.puff_count() - 1);

    Ok(game
        .with_yacht(player.clone(), moved)
        .with_has_used_puff(true))
}

/// Raise the spinnaker. Free.
///
/// Checks: phase is RACING, player's turn, player has a yacht, spinnaker
/// lowered.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn raise_spinnaker(game: &Game, player: &PlayerId) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    require_turn(game, player)?;
    let yacht = require_yacht(game, player)?;
    if yacht.spinnaker() {
        return Err(Rejection::SpinnakerAlreadyRaised {
            player: player.clone(),
        });
    }

    Ok(game.with_yacht(player.clone(), yacht.with_spinnaker(true)))
}

/// Lower the spinnaker. Costs a leg.
///
/// Checks: phase is RACING, player's turn, player has a yacht, spinnaker
/// raised, legs remaining.
#[instrument(skip(game), fields(game = %game.id()), err(level = "debug"))]
pub fn lower_spinnaker(game: &Game, player: &PlayerId) -> RuleResult<Game> {
    require_phase(game, Phase::Racing)?;
    require_turn(game, player)?;
    let yacht = require_yacht(game, player)?;
    if !yacht.spinnaker() {
        return Err(Rejection::SpinnakerAlreadyLowered {
            player: player.clone(),
        });
    }
    require_legs(game, player)?;

    Ok(game
        .with_yacht(player.clone(), yacht.with_spinnaker(false))
        .with_legs_remaining(game.legs_remaining() - 1))
}
