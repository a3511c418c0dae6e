//! Integer grid coordinates.
//!
//! `x` grows eastward and `y` grows southward, so `Heading::North` is a
//! step of `(0, -1)`.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::wind::Heading;

/// A square on the board.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[display("({x}, {y})")]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring square one step along `heading`.
    #[must_use]
    pub fn step(self, heading: Heading) -> Self {
        let (dx, dy) = heading.unit_vector();
        Self::new(self.x + dx, self.y + dy)
    }

    /// The square reached after `steps` unit steps along `heading`.
    ///
    /// Intermediate squares are not inspected.
    #[must_use]
    pub fn advance(self, heading: Heading, steps: u32) -> Self {
        (0..steps).fold(self, |pos, _| pos.step(heading))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
