//! Spatial model: grid bounds, course marks, starting line.
//!
//! Everything here is a pure query over immutable data.

pub mod grid;
pub mod course;

pub use grid::Grid;
pub use course::{Board, LinePoints, StartingLine};
