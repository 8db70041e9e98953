//! Player identity and hand ownership.
//!
//! ## PlayerId
//!
//! Caller-supplied opaque string identifier, unique within a session.
//!
//! ## Player
//!
//! A session participant. The hand is private to the player: it is not
//! serializable and is only readable through the accessor, so the only
//! outward path for hand contents is the requester-scoped view.

use serde::{Deserialize, Serialize};

use super::card::Card;

/// Opaque player identifier, unique within a session.
///
/// The id is supplied by the caller; no format is imposed beyond
/// non-emptiness, which is checked at the join boundary.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub String);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the id is the empty string.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant in a session.
///
/// Deliberately not `Serialize`: the hand must never reach the wire
/// except through `SessionView::for_player`, which scopes it to its
/// owner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    /// Unique id within the session.
    pub id: PlayerId,

    /// Display name, fixed at first join.
    pub name: String,

    /// Private hand, in hand order.
    hand: Vec<Card>,
}

impl Player {
    /// Create a new player with an empty hand.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hand: Vec::new(),
        }
    }

    /// Get the player's hand, in hand order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Mutable access to the hand, for the game-logic collaborator
    /// (dealing, playing cards). Session management never calls this.
    pub fn hand_mut(&mut self) -> &mut Vec<Card> {
        &mut self.hand
    }
}
