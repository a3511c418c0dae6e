//! Player identification.
//!
//! Players are named by an opaque string token handed to the engine by the
//! caller. The engine never interprets the token; it only compares, orders,
//! and stores it.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Opaque player identifier.
///
/// Ordered so that player sets iterate deterministically, which keeps
/// seeded shuffles reproducible.
#[derive(Clone, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for PlayerId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
