//! Precondition checks shared by the rules operations.
//!
//! Each check either passes or returns the one `Rejection` describing the
//! failure. Operations run their checks in a fixed order and stop at the
//! first failure.

use super::error::{Rejection, RuleResult};
use crate::core::{PlayerId, Position};
use crate::game::{Game, Phase, Yacht};

pub(crate) fn require_phase(game: &Game, expected: Phase) -> RuleResult<()> {
    if game.phase() == expected {
        Ok(())
    } else {
        Err(Rejection::WrongPhase {
            expected,
            actual: game.phase(),
        })
    }
}

/// `setup_order[current_player_index] == player`.
///
/// An index past the end of the order (including an empty order) matches
/// nobody.
pub(crate) fn require_turn(game: &Game, player: &PlayerId) -> RuleResult<()> {
    match game.current_player() {
        Some(current) if current == player => Ok(()),
        current => Err(Rejection::NotYourTurn {
            player: player.clone(),
            current: current.cloned(),
        }),
    }
}

pub(crate) fn require_yacht<'a>(game: &'a Game, player: &PlayerId) -> RuleResult<&'a Yacht> {
    game.yacht(player).ok_or_else(|| Rejection::NoYacht {
        player: player.clone(),
    })
}

pub(crate) fn require_legs(game: &Game, player: &PlayerId) -> RuleResult<()> {
    if game.legs_remaining() > 0 {
        Ok(())
    } else {
        Err(Rejection::NoLegsRemaining {
            player: player.clone(),
        })
    }
}

/// Destination must be on the board and free of other yachts.
///
/// The mover's own square does not count as occupied, so a zero-speed leg
/// that ends where it started is allowed.
pub(crate) fn require_open_water(
    game: &Game,
    player: &PlayerId,
    position: Position,
) -> RuleResult<()> {
    if !game.board().in_bounds(position) {
        return Err(Rejection::OutOfBounds { position });
    }
    let blocked = game
        .yachts()
        .iter()
        .any(|(owner, yacht)| owner != player && yacht.position() == position);
    if blocked {
        return Err(Rejection::Occupied { position });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Grid};
    use crate::wind::Heading;

    fn game() -> Game {
        let board = Board::new(
            Grid::new(5, 5),
            [Position::new(2, 2)],
            (Position::new(0, 0), Position::new(3, 0)),
        );
        Game::new("g", board, Heading::East)
    }

    #[test]
    fn test_require_turn_on_empty_order() {
        let err = require_turn(&game(), &PlayerId::new("a")).unwrap_err();
        assert_eq!(
            err,
            Rejection::NotYourTurn {
                player: PlayerId::new("a"),
                current: None,
            }
        );
    }

    #[test]
    fn test_require_turn_matches_current() {
        let game = game().with_setup_order([PlayerId::new("a"), PlayerId::new("b")]);

        assert!(require_turn(&game, &PlayerId::new("a")).is_ok());
        assert!(require_turn(&game, &PlayerId::new("b")).is_err());
        assert!(require_turn(&game.with_current_player_index(1), &PlayerId::new("b")).is_ok());
    }

    #[test]
    fn test_open_water_ignores_own_yacht() {
        let a = PlayerId::new("a");
        let b = PlayerId::new("b");
        let game = game()
            .with_yacht(a.clone(), Yacht::new(Position::new(1, 1), Heading::East))
            .with_yacht(b.clone(), Yacht::new(Position::new(2, 1), Heading::East));

        assert!(require_open_water(&game, &a, Position::new(1, 1)).is_ok());
        assert_eq!(
            require_open_water(&game, &a, Position::new(2, 1)),
            Err(Rejection::Occupied { position: Position::new(2, 1) })
        );
        assert_eq!(
            require_open_water(&game, &a, Position::new(5, 1)),
            Err(Rejection::OutOfBounds { position: Position::new(5, 1) })
        );
    }
}
