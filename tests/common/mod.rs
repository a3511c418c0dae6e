//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use regatta::{Board, Game, Grid, Heading, PlayerId, Position, RaceRandom};

/// 5x5 board with marks on the diagonal and a short diagonal line.
pub fn standard_board() -> Board {
    Board::new(
        Grid::new(5, 5),
        [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)],
        (Position::new(0, 0), Position::new(1, 1)),
    )
}

/// Lobby game on `standard_board` with an easterly wind.
pub fn make_game() -> Game {
    Game::new("mock_game_id", standard_board(), Heading::East)
}

pub fn p(id: &str) -> PlayerId {
    PlayerId::new(id)
}

/// Random source with scripted draws.
///
/// Permutations come back in the order given to `with_order` (or unchanged
/// if none was scripted); rolls pop from the front of the queue and fall
/// back to `low` when it runs dry.
#[derive(Default)]
pub struct ScriptedRng {
    order: Option<Vec<PlayerId>>,
    rolls: VecDeque<u8>,
    pub roll_calls: usize,
}

impl ScriptedRng {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(mut self, order: &[&str]) -> Self {
        self.order = Some(order.iter().map(|id| p(id)).collect());
        self
    }

    pub fn with_rolls(mut self, rolls: &[u8]) -> Self {
        self.rolls = rolls.iter().copied().collect();
        self
    }
}

impl RaceRandom for ScriptedRng {
    fn permutation(&mut self, players: Vec<PlayerId>) -> Vec<PlayerId> {
        match &self.order {
            Some(order) => order.clone(),
            None => players,
        }
    }

    fn roll(&mut self, low: u8, _high: u8) -> u8 {
        self.roll_calls += 1;
        self.rolls.pop_front().unwrap_or(low)
    }
}
