//! Game data model: yachts and the game aggregate.

pub mod yacht;
pub mod state;

pub use yacht::Yacht;
pub use state::{Game, Phase};
