//! Per-player vessel state.
//!
//! A `Yacht` is a value: every `with_*` method returns a new yacht with one
//! field replaced and leaves the receiver untouched. The yacht does no
//! validation of its own; legality is the rules engine's job.

use im::OrdSet;
use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::wind::Heading;

/// Puff charges a yacht starts with under the standard rules.
const DEFAULT_PUFFS: u32 = 2;

/// A player's yacht.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Yacht {
    position: Position,
    heading: Heading,
    spinnaker: bool,
    puff_count: u32,
    #[serde(default)]
    marks_rounded: OrdSet<Position>,
}

impl Yacht {
    /// A yacht at `position` with the spinnaker lowered, full puffs, and
    /// no marks rounded.
    #[must_use]
    pub fn new(position: Position, heading: Heading) -> Self {
        Self {
            position,
            heading,
            spinnaker: false,
            puff_count: DEFAULT_PUFFS,
            marks_rounded: OrdSet::new(),
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Whether the spinnaker is raised.
    #[must_use]
    pub fn spinnaker(&self) -> bool {
        self.spinnaker
    }

    /// Remaining puff charges.
    #[must_use]
    pub fn puff_count(&self) -> u32 {
        self.puff_count
    }

    /// Course marks this yacht has visited.
    #[must_use]
    pub fn marks_rounded(&self) -> &OrdSet<Position> {
        &self.marks_rounded
    }

    /// Whether every mark in `marks` has been rounded.
    #[must_use]
    pub fn has_rounded_all(&self, marks: &[Position]) -> bool {
        marks.iter().all(|mark| self.marks_rounded.contains(mark))
    }

    #[must_use]
    pub fn with_position(&self, position: Position) -> Self {
        Self {
            position,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_heading(&self, heading: Heading) -> Self {
        Self {
            heading,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_spinnaker(&self, spinnaker: bool) -> Self {
        Self {
            spinnaker,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_puff_count(&self, puff_count: u32) -> Self {
        Self {
            puff_count,
            ..self.clone()
        }
    }

    #[must_use]
    pub fn with_marks_rounded(&self, marks_rounded: OrdSet<Position>) -> Self {
        Self {
            marks_rounded,
            ..self.clone()
        }
    }

    /// Record `mark` as rounded. Re-rounding a mark changes nothing.
    #[must_use]
    pub fn round_mark(&self, mark: Position) -> Self {
        self.with_marks_rounded(self.marks_rounded.update(mark))
    }
}
