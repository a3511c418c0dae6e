//! Rules engine: the phase/turn state machine.
//!
//! Operations are pure functions from the current `Game` (and arguments) to
//! a new `Game` or a `Rejection`:
//!
//! - Lobby: `add_player`, `start_setup`
//! - Setup: `choose_starting_position`
//! - Racing: `start_round`, `move_leg`, `end_turn`, `use_puff`,
//!   `raise_spinnaker`, `lower_spinnaker`
//!
//! `Action` and `apply_action` wrap the same operations as data for callers
//! that receive requests over a wire.

mod checks;
pub mod error;
pub mod engine;
pub mod action;
pub mod query;

pub use error::{Rejection, RejectionKind, RuleResult};
pub use engine::{
    add_player, choose_starting_position, end_turn, lower_spinnaker, move_leg, raise_spinnaker,
    start_round, start_setup, use_puff,
};
pub use action::{apply_action, Action};
pub use query::{legal_headings, preview_leg, LegPreview};
