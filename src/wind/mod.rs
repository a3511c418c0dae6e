//! Wind model: compass headings, point of sail, leg speed.

pub mod heading;
pub mod point_of_sail;

pub use heading::{Heading, WindDirection};
pub use point_of_sail::{leg_speed, point_of_sail, PointOfSail};
