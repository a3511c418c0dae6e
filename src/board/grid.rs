//! Rectangular playing area.

use serde::{Deserialize, Serialize};

use crate::core::Position;

/// `width` x `height` rectangle anchored at the origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    /// Create a new grid.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// `0 <= x < width` and `0 <= y < height`.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}
