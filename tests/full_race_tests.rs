//! A whole race, lobby to finish, driven through `apply_action`.

mod common;

use common::{make_game, p, ScriptedRng};
use regatta::{apply_action, Action, Game, Heading, Phase, Position, Rejection};

fn apply(game: &Game, action: Action, rng: &mut ScriptedRng) -> Game {
    apply_action(game, &action, rng).unwrap_or_else(|e| panic!("{action:?} rejected: {e}"))
}

fn sail(player: &str, heading: Heading) -> Action {
    Action::MoveLeg { player: p(player), heading }
}

fn position_of(game: &Game, player: &str) -> Position {
    game.yacht(&p(player)).unwrap().position()
}

#[test]
fn test_scripted_race_to_the_finish() {
    // Marks (1,1), (2,2), (3,3); line (0,0)-(1,1); wind from the east.
    let mut rng = ScriptedRng::new().with_order(&["a", "b"]).with_rolls(&[1, 3, 1]);
    let mut game = make_game();

    // Lobby and setup.
    game = apply(&game, Action::AddPlayer { player: p("a") }, &mut rng);
    game = apply(&game, Action::AddPlayer { player: p("b") }, &mut rng);
    game = apply(&game, Action::StartSetup, &mut rng);
    assert_eq!(game.current_player(), Some(&p("a")));

    game = apply(
        &game,
        Action::ChooseStartingPosition { player: p("a"), position: Position::new(0, 0) },
        &mut rng,
    );
    game = apply(
        &game,
        Action::ChooseStartingPosition { player: p("b"), position: Position::new(1, 1) },
        &mut rng,
    );
    assert_eq!(game.phase(), Phase::Racing);
    assert_eq!(game.yacht(&p("b")).unwrap().heading(), Heading::West);
    // Starting on a mark does not round it.
    assert!(game.yacht(&p("b")).unwrap().marks_rounded().is_empty());

    // Round 1: one leg each.
    game = apply(&game, Action::StartRound, &mut rng);
    assert_eq!((game.round_number(), game.legs_remaining()), (1, 1));

    game = apply(&game, sail("a", Heading::South), &mut rng);
    assert_eq!(position_of(&game, "a"), Position::new(0, 2));
    assert_eq!(
        apply_action(&game, &sail("a", Heading::South), &mut rng),
        Err(Rejection::NoLegsRemaining { player: p("a") })
    );

    game = apply(&game, Action::EndTurn, &mut rng);
    assert_eq!(game.current_player(), Some(&p("b")));
    game = apply(&game, sail("b", Heading::South), &mut rng);
    assert_eq!(position_of(&game, "b"), Position::new(1, 3));

    // Round 2: three legs, a rounds every mark.
    game = apply(&game, Action::EndTurn, &mut rng);
    assert_eq!((game.round_number(), game.legs_remaining()), (2, 3));
    assert_eq!(game.current_player(), Some(&p("a")));

    game = apply(&game, sail("a", Heading::NorthEast), &mut rng);
    game = apply(&game, sail("a", Heading::SouthEast), &mut rng);
    game = apply(&game, sail("a", Heading::SouthEast), &mut rng);
    let a = game.yacht(&p("a")).unwrap();
    assert_eq!(a.position(), Position::new(3, 3));
    assert_eq!(a.marks_rounded().len(), 3);
    assert_eq!(game.phase(), Phase::Racing);

    // b: spinnaker up, a leg home, a failed run west, spinnaker down, luff.
    game = apply(&game, Action::EndTurn, &mut rng);
    assert_eq!(game.legs_remaining(), 3);
    game = apply(&game, Action::RaiseSpinnaker { player: p("b") }, &mut rng);
    game = apply(&game, sail("b", Heading::North), &mut rng);
    assert_eq!(position_of(&game, "b"), Position::new(1, 1));

    let before = game.clone();
    assert_eq!(
        apply_action(&game, &sail("b", Heading::West), &mut rng),
        Err(Rejection::OutOfBounds { position: Position::new(-2, 1) })
    );
    assert_eq!(game, before);

    game = apply(&game, Action::LowerSpinnaker { player: p("b") }, &mut rng);
    game = apply(&game, sail("b", Heading::East), &mut rng);
    assert_eq!(position_of(&game, "b"), Position::new(1, 1));
    assert_eq!(game.legs_remaining(), 0);

    // Round 3: a broad-reaches home.
    game = apply(&game, Action::EndTurn, &mut rng);
    assert_eq!(game.round_number(), 3);
    game = apply(&game, sail("a", Heading::NorthWest), &mut rng);

    assert_eq!(position_of(&game, "a"), Position::new(0, 0));
    assert_eq!(game.phase(), Phase::Finished);
    assert_eq!(game.winner(), Some(&p("a")));
    assert_eq!(rng.roll_calls, 3);

    assert!(matches!(
        apply_action(&game, &Action::EndTurn, &mut rng),
        Err(Rejection::WrongPhase { .. })
    ));
}

#[test]
fn test_game_survives_json_round_trip() {
    let mut rng = ScriptedRng::new().with_order(&["a", "b"]).with_rolls(&[2]);
    let mut game = make_game();
    for action in [
        Action::AddPlayer { player: p("a") },
        Action::AddPlayer { player: p("b") },
        Action::StartSetup,
        Action::ChooseStartingPosition { player: p("a"), position: Position::new(0, 0) },
        Action::ChooseStartingPosition { player: p("b"), position: Position::new(1, 1) },
        Action::StartRound,
        sail("a", Heading::South),
    ] {
        game = apply(&game, action, &mut rng);
    }

    let json = serde_json::to_string(&game).unwrap();
    let restored: Game = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, game);
    // The restored game keeps playing.
    let next = apply(&restored, sail("a", Heading::SouthEast), &mut rng);
    assert_eq!(position_of(&next, "a"), Position::new(1, 3));
}
