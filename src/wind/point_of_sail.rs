//! Point of sail and boat speed.
//!
//! The angle between the wind and a yacht's heading decides how well the
//! yacht sails, which in turn decides how many squares one leg covers.
//! Port and starboard are symmetric.
//!
//! | angle | heading relative to wind | point of sail   | speed |
//! |-------|--------------------------|-----------------|-------|
//! | 0     | N                        | luffing         | 0     |
//! | 45    | NE, NW                   | beating         | 1     |
//! | 90    | E, W                     | beam reaching   | 2     |
//! | 135   | SE, SW                   | broad reaching  | 3     |
//! | 180   | S                        | running         | 2     |

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::heading::{Heading, WindDirection};

/// Sailing-efficiency classification.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PointOfSail {
    Luffing,
    Beating,
    BeamReaching,
    Running,
    BroadReaching,
}

impl PointOfSail {
    /// Classify a heading already turned relative to the wind, so that
    /// `North` means straight into it.
    #[must_use]
    pub const fn from_relative(relative: Heading) -> Self {
        match relative {
            Heading::North => PointOfSail::Luffing,
            Heading::NorthEast | Heading::NorthWest => PointOfSail::Beating,
            Heading::East | Heading::West => PointOfSail::BeamReaching,
            Heading::SouthEast | Heading::SouthWest => PointOfSail::BroadReaching,
            Heading::South => PointOfSail::Running,
        }
    }

    /// Squares covered by one leg.
    #[must_use]
    pub const fn speed(self) -> u32 {
        match self {
            PointOfSail::Luffing => 0,
            PointOfSail::Beating => 1,
            PointOfSail::BeamReaching => 2,
            PointOfSail::Running => 2,
            PointOfSail::BroadReaching => 3,
        }
    }

    /// Whether a raised spinnaker adds a square on this point of sail.
    #[must_use]
    pub const fn is_downwind(self) -> bool {
        matches!(self, PointOfSail::Running | PointOfSail::BroadReaching)
    }
}

/// Point of sail for a yacht on `heading` in `wind`.
#[must_use]
pub const fn point_of_sail(wind: WindDirection, heading: Heading) -> PointOfSail {
    PointOfSail::from_relative(heading.relative_to(wind))
}

/// Squares one leg covers, including the spinnaker bonus.
#[must_use]
pub fn leg_speed(wind: WindDirection, heading: Heading, spinnaker: bool) -> u32 {
    let pos = point_of_sail(wind, heading);
    let bonus = u32::from(spinnaker && pos.is_downwind());
    pos.speed() + bonus
}
