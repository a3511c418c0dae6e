//! Eight-point compass headings.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One of the eight compass points, 45 degrees apart.
///
/// Used both for the ambient wind and for the direction a yacht sails.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Heading {
    #[display("N")]
    North,
    #[display("NE")]
    NorthEast,
    #[display("E")]
    East,
    #[display("SE")]
    SouthEast,
    #[display("S")]
    South,
    #[display("SW")]
    SouthWest,
    #[display("W")]
    West,
    #[display("NW")]
    NorthWest,
}

/// The wind blows from one of the same eight points.
pub type WindDirection = Heading;

impl Heading {
    /// All headings, clockwise from north.
    pub const ALL: [Heading; 8] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// The heading rotated by 180 degrees.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Heading::North => Heading::South,
            Heading::NorthEast => Heading::SouthWest,
            Heading::East => Heading::West,
            Heading::SouthEast => Heading::NorthWest,
            Heading::South => Heading::North,
            Heading::SouthWest => Heading::NorthEast,
            Heading::West => Heading::East,
            Heading::NorthWest => Heading::SouthEast,
        }
    }

    /// Grid delta of one step along this heading (y grows southward).
    #[must_use]
    pub const fn unit_vector(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::NorthEast => (1, -1),
            Heading::East => (1, 0),
            Heading::SouthEast => (1, 1),
            Heading::South => (0, 1),
            Heading::SouthWest => (-1, 1),
            Heading::West => (-1, 0),
            Heading::NorthWest => (-1, -1),
        }
    }

    /// This heading as seen from `reference`, i.e. rotated so that
    /// `reference` points north.
    #[must_use]
    pub const fn relative_to(self, reference: Heading) -> Self {
        Self::ALL[(self as usize + 8 - reference as usize) % 8]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_is_half_turn() {
        for heading in Heading::ALL {
            let (dx, dy) = heading.unit_vector();
            assert_eq!(heading.opposite().unit_vector(), (-dx, -dy));
            assert_eq!(heading.opposite().opposite(), heading);
        }
    }

    #[test]
    fn test_all_is_clockwise_from_north() {
        let vectors: Vec<_> = Heading::ALL.into_iter().map(Heading::unit_vector).collect();
        assert_eq!(
            vectors,
            [(0, -1), (1, -1), (1, 0), (1, 1), (0, 1), (-1, 1), (-1, 0), (-1, -1)]
        );
    }

    #[test]
    fn test_relative_wraps_around_north() {
        assert_eq!(Heading::NorthWest.relative_to(Heading::North), Heading::NorthWest);
        assert_eq!(Heading::North.relative_to(Heading::NorthWest), Heading::NorthEast);
        assert_eq!(Heading::West.relative_to(Heading::East), Heading::South);
        assert_eq!(Heading::South.relative_to(Heading::South), Heading::North);

        for heading in Heading::ALL {
            assert_eq!(heading.relative_to(heading), Heading::North);
            assert_eq!(heading.opposite().relative_to(heading), Heading::South);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Heading::NorthEast).unwrap();
        assert_eq!(json, "\"NORTH_EAST\"");

        let back: Heading = serde_json::from_str("\"SOUTH_WEST\"").unwrap();
        assert_eq!(back, Heading::SouthWest);
    }
}
