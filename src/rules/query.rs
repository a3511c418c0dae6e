//! Read-only questions about a game: what a leg would do, which legs are
//! open. Nothing here changes state or logs rejections.

use serde::{Deserialize, Serialize};

use super::checks::{require_legs, require_open_water, require_phase, require_turn, require_yacht};
use super::error::RuleResult;
use crate::core::{PlayerId, Position};
use crate::game::{Game, Phase};
use crate::wind::{leg_speed, point_of_sail, Heading, PointOfSail};

/// Outcome of a leg, before bounds and occupancy are considered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegPreview {
    pub point_of_sail: PointOfSail,
    /// Squares covered, spinnaker bonus included.
    pub speed: u32,
    pub destination: Position,
}

/// What `move_leg` would do for `player` on `heading`.
///
/// Only requires that the player has a yacht; phase, turn, and destination
/// are not checked.
pub fn preview_leg(game: &Game, player: &PlayerId, heading: Heading) -> RuleResult<LegPreview> {
    let yacht = require_yacht(game, player)?;
    let speed = leg_speed(game.wind_direction(), heading, yacht.spinnaker());

    Ok(LegPreview {
        point_of_sail: point_of_sail(game.wind_direction(), heading),
        speed,
        destination: yacht.position().advance(heading, speed),
    })
}

/// Headings on which `move_leg` would currently succeed for `player`.
///
/// Empty when the player cannot sail at all (wrong phase, not their turn,
/// no legs, no yacht).
#[must_use]
pub fn legal_headings(game: &Game, player: &PlayerId) -> Vec<Heading> {
    let can_sail = require_phase(game, Phase::Racing)
        .and_then(|()| require_turn(game, player))
        .and_then(|()| require_legs(game, player))
        .and_then(|()| require_yacht(game, player).map(|_| ()));
    if can_sail.is_err() {
        return Vec::new();
    }

    Heading::ALL
        .into_iter()
        .filter(|&heading| {
            preview_leg(game, player, heading)
                .and_then(|leg| require_open_water(game, player, leg.destination))
                .is_ok()
        })
        .collect()
}
