//! Course layout: grid, course marks, starting line.
//!
//! The starting line doubles as the finish line. It is stored as its two
//! endpoints and materialized on demand by unit-stepping each axis towards
//! the far endpoint. That walk only traces the true segment when the line
//! is horizontal, vertical, or a 45 degree diagonal; courses are laid out
//! that way.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::grid::Grid;
use crate::core::Position;

/// Materialized starting line squares, in order from `start` to `end`.
pub type LinePoints = SmallVec<[Position; 8]>;

/// Segment between two endpoints, both inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StartingLine {
    pub start: Position,
    pub end: Position,
}

impl StartingLine {
    /// Create a new line.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Every square on the line, `start` first.
    ///
    /// Each step moves one square along each axis that still differs, so
    /// the walk takes `max(|dx|, |dy|)` steps and always ends on `end`.
    #[must_use]
    pub fn points(&self) -> LinePoints {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let steps = dx.abs().max(dy.abs());

        (0..=steps)
            .map(|i| {
                Position::new(
                    self.start.x + dx.signum() * i.min(dx.abs()),
                    self.start.y + dy.signum() * i.min(dy.abs()),
                )
            })
            .collect()
    }

    /// Whether `position` is one of the materialized squares.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.points().contains(&position)
    }
}

impl From<(Position, Position)> for StartingLine {
    fn from((start, end): (Position, Position)) -> Self {
        Self::new(start, end)
    }
}

/// Immutable course layout, fixed for the life of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    course_marks: Vec<Position>,
    starting_line: StartingLine,
}

impl Board {
    /// Create a new board.
    #[must_use]
    pub fn new(
        grid: Grid,
        course_marks: impl IntoIterator<Item = Position>,
        starting_line: impl Into<StartingLine>,
    ) -> Self {
        Self {
            grid,
            course_marks: course_marks.into_iter().collect(),
            starting_line: starting_line.into(),
        }
    }

    /// The playing area.
    #[must_use]
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Course marks in course order.
    #[must_use]
    pub fn course_marks(&self) -> &[Position] {
        &self.course_marks
    }

    /// The starting (and finish) line.
    #[must_use]
    pub fn starting_line(&self) -> StartingLine {
        self.starting_line
    }

    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        self.grid.contains(position)
    }

    #[must_use]
    pub fn on_course_mark(&self, position: Position) -> bool {
        self.course_marks.contains(&position)
    }

    #[must_use]
    pub fn on_starting_line(&self, position: Position) -> bool {
        self.starting_line.contains(position)
    }

    #[must_use]
    pub fn starting_line_points(&self) -> LinePoints {
        self.starting_line.points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(
            Grid::new(5, 5),
            [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)],
            (Position::new(0, 0), Position::new(3, 3)),
        )
    }

    #[test]
    fn test_board_accessors() {
        let board = Board::new(
            Grid::new(5, 5),
            [Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)],
            (Position::new(0, 0), Position::new(1, 1)),
        );

        assert_eq!(board.grid(), Grid::new(5, 5));
        assert_eq!(
            board.course_marks(),
            &[Position::new(1, 1), Position::new(2, 2), Position::new(3, 3)]
        );
        assert_eq!(
            board.starting_line(),
            StartingLine::new(Position::new(0, 0), Position::new(1, 1))
        );
    }

    #[test]
    fn test_in_bounds() {
        let board = board();
        assert!(!board.in_bounds(Position::new(6, 6)));
        assert!(board.in_bounds(Position::new(3, 3)));
    }

    #[test]
    fn test_on_course_mark() {
        let board = board();
        assert!(board.on_course_mark(Position::new(1, 1)));
        assert!(!board.on_course_mark(Position::new(4, 5)));
    }

    #[test]
    fn test_diagonal_line_points() {
        let points = board().starting_line_points();
        assert_eq!(
            points.as_slice(),
            &[
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 2),
                Position::new(3, 3),
            ]
        );
    }

    #[test]
    fn test_horizontal_and_reversed_lines() {
        let horizontal = StartingLine::new(Position::new(0, 0), Position::new(3, 0));
        assert_eq!(
            horizontal.points().as_slice(),
            &[
                Position::new(0, 0),
                Position::new(1, 0),
                Position::new(2, 0),
                Position::new(3, 0),
            ]
        );

        let vertical_up = StartingLine::new(Position::new(4, 2), Position::new(4, 0));
        assert_eq!(
            vertical_up.points().as_slice(),
            &[Position::new(4, 2), Position::new(4, 1), Position::new(4, 0)]
        );
    }

    #[test]
    fn test_shallow_line_runs_diagonal_then_straight() {
        let line = StartingLine::new(Position::new(0, 0), Position::new(3, 1));
        assert_eq!(
            line.points().as_slice(),
            &[
                Position::new(0, 0),
                Position::new(1, 1),
                Position::new(2, 1),
                Position::new(3, 1),
            ]
        );
    }

    #[test]
    fn test_single_point_line() {
        let line = StartingLine::new(Position::new(2, 2), Position::new(2, 2));
        assert_eq!(line.points().as_slice(), &[Position::new(2, 2)]);
    }

    #[test]
    fn test_on_starting_line() {
        let board = board();
        assert!(board.on_starting_line(Position::new(0, 0)));
        assert!(board.on_starting_line(Position::new(2, 2)));
        assert!(!board.on_starting_line(Position::new(4, 4)));
        assert!(!board.on_starting_line(Position::new(1, 0)));
    }
}
