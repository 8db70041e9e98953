//! Opaque card values.
//!
//! The concrete card representation (suit, rank, trump rules) belongs to
//! the game-logic collaborator. This crate only moves card values between
//! a player's hand and the outward view, so a card is an opaque code.

use serde::{Deserialize, Serialize};

/// An opaque card value, owned by exactly one player's hand.
///
/// The code is assigned and interpreted by the card-representation
/// collaborator; the session core never inspects it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Card(pub String);

impl Card {
    /// Create a card from its externally-owned code.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the raw card code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
