//! Player-scoped session views.
//!
//! `SessionView` is the only wire-facing projection of session state,
//! and `SessionView::for_player` is the single enforcement point of the
//! hidden-information rule: shared fields are copied verbatim, player
//! entries are reduced to id and name, and the only hand included is
//! the requester's own.
//!
//! Field names and status strings follow the transport contract
//! (`gameId`, `currentPlayerId`, `handCards`, `lastPlayedCard`).

use serde::{Deserialize, Serialize};

use crate::core::{Card, GameId, GameStatus, PlayerId, Session};

/// Public summary of one player: identity only, never the hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSummary {
    /// Player id.
    pub id: PlayerId,
    /// Display name from first join.
    pub name: String,
}

/// The session state one player is allowed to see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    /// Session id.
    pub game_id: GameId,

    /// Session status, shared with all players.
    pub status: GameStatus,

    /// Whose turn it is, if assigned.
    pub current_player_id: Option<PlayerId>,

    /// All enrolled players in join order, identity only.
    pub players: Vec<PlayerSummary>,

    /// The requester's own hand; empty when the requester is not
    /// enrolled in the session.
    pub hand_cards: Vec<Card>,

    /// Most recently played card, public information.
    pub last_played_card: Option<Card>,
}

impl SessionView {
    /// Project a session for one requesting player.
    ///
    /// Pure and infallible: an unknown `requester` yields an empty
    /// `hand_cards` with all shared fields intact, by policy rather
    /// than by accident.
    #[must_use]
    pub fn for_player(session: &Session, requester: &PlayerId) -> Self {
        let players = session
            .players()
            .iter()
            .map(|p| PlayerSummary {
                id: p.id.clone(),
                name: p.name.clone(),
            })
            .collect();

        let hand_cards = session
            .player(requester)
            .map(|p| p.hand().to_vec())
            .unwrap_or_default();

        Self {
            game_id: session.id().clone(),
            status: session.status,
            current_player_id: session.current_player_id.clone(),
            players,
            hand_cards,
            last_played_card: session.last_played_card.clone(),
        }
    }
}
