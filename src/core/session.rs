//! Session state: participants, status, turn marker, last played card.
//!
//! A `Session` is one identified instance of the game. This core owns
//! enrollment (who is in the session, in what order) and carries the
//! fields that game-play logic advances (`status`, `current_player_id`,
//! `last_played_card`) without interpreting them.
//!
//! ## Invariants
//!
//! - At most one player per id; re-joining is a no-op (first name wins).
//! - Player order is join order and never reorders; downstream logic
//!   uses it as turn order.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::player::{Player, PlayerId};

/// Opaque session identifier, unique within a registry.
///
/// Assigned by the first joiner and immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub String);

impl GameId {
    /// Create a new game ID.
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

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a session.
///
/// The session core only carries this field; transitions out of
/// `Waiting` are owned by game-play logic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameStatus {
    /// Waiting for players to join.
    Waiting,
    /// Game in progress.
    InProgress,
    /// Game over.
    Finished,
}

/// One identified game session and its mutable state.
///
/// Not `Serialize`: it contains every player's hand. The wire-facing
/// projection is `SessionView`.
#[derive(Clone, Debug)]
pub struct Session {
    id: GameId,

    /// Carried for game-play logic; starts at `Waiting`.
    pub status: GameStatus,

    /// Join order, doubling as turn order for downstream logic.
    players: Vec<Player>,

    /// Whose turn it is; absent until game-start logic assigns it.
    pub current_player_id: Option<PlayerId>,

    /// Most recently played card, public to all observers.
    pub last_played_card: Option<Card>,
}

impl Session {
    /// Create an empty waiting session.
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            status: GameStatus::Waiting,
            players: Vec::new(),
            current_player_id: None,
            last_played_card: None,
        }
    }

    /// Get the session id.
    #[must_use]
    pub fn id(&self) -> &GameId {
        &self.id
    }

    /// Get the players in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Get the number of enrolled players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    ///
    /// `None` for an unknown id; callers decide the policy (the view
    /// builder treats it as an empty hand, not an error).
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Look up a player mutably, for the game-logic collaborator.
    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| &p.id == id)
    }

    /// Enroll a player if not already present, returning the enrolled
    /// player either way.
    ///
    /// Re-joining is idempotent: the existing entry is returned
    /// unchanged, keeping the first-seen name and the original join
    /// position. New players append, preserving join order.
    pub fn add_player_if_absent(&mut self, id: &PlayerId, name: impl Into<String>) -> &Player {
        let pos = match self.players.iter().position(|p| &p.id == id) {
            Some(pos) => pos,
            None => {
                self.players.push(Player::new(id.clone(), name));
                self.players.len() - 1
            }
        };
        &self.players[pos]
    }
}
