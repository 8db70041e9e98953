//! Session registry: the process-wide id -> session store.
//!
//! The registry is an explicitly owned value; the embedding server
//! constructs one and shares it (typically via `Arc`) with whatever
//! handles requests. There is no global state.
//!
//! ## Concurrency
//!
//! Two points are serialized:
//!
//! - **Registry level**: get-or-create holds the map's write lock across
//!   the check-then-insert, so concurrent joins to the same unknown id
//!   observe exactly one session.
//! - **Session level**: each session sits behind its own mutex;
//!   enrollment and the state snapshot happen under it. The lock is
//!   released before the (pure) view projection runs.
//!
//! Nothing here blocks on I/O; lock hold times are bounded by map and
//! player-list mutation plus one session clone.

use std::sync::{Arc, Mutex, PoisonError, RwLock};

use log::{debug, trace};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{GameId, PlayerId, Session};
use crate::error::JoinError;
use crate::view::SessionView;

/// A session shared between concurrent request handlers.
pub type SharedSession = Arc<Mutex<Session>>;

/// A player's request to join (or re-join) a session.
///
/// `game_id` and `player_id` are caller-supplied opaque strings; the
/// registry rejects empty ones and imposes no further format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinRequest {
    /// Session to join; created on first use.
    pub game_id: GameId,
    /// Joining player's id, unique within the session.
    pub player_id: PlayerId,
    /// Display name; recorded on first join only.
    pub player_name: String,
}

/// In-memory store of all active sessions, keyed by game id.
///
/// Lives for the process lifetime; sessions are created lazily on first
/// join and never removed by this core.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<GameId, SharedSession>>,
}

impl SessionRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the session for `id`, creating it if absent.
    ///
    /// Atomic: concurrent callers with the same unknown id all observe
    /// the same session instance. Errs only if a previous writer
    /// panicked while holding the map lock.
    pub fn get_or_create(&self, id: &GameId) -> Result<SharedSession, JoinError> {
        // Fast path: session already exists, shared read is enough.
        {
            let sessions = self
                .sessions
                .read()
                .map_err(|_| JoinError::ConcurrencyFailure)?;
            if let Some(session) = sessions.get(id) {
                return Ok(Arc::clone(session));
            }
        }

        let mut sessions = self
            .sessions
            .write()
            .map_err(|_| JoinError::ConcurrencyFailure)?;
        let session = sessions.entry(id.clone()).or_insert_with(|| {
            debug!("creating session {id}");
            Arc::new(Mutex::new(Session::new(id.clone())))
        });
        Ok(Arc::clone(session))
    }

    /// Handle a join request end to end: validate, resolve the session,
    /// enroll the player, and project the requester's view.
    ///
    /// Joining is idempotent per `(game_id, player_id)`; a re-join
    /// returns the current state without changing enrollment. The view
    /// is built from a snapshot taken under the session lock, so it is
    /// internally consistent and the lock is never held across
    /// projection.
    pub fn join(&self, request: &JoinRequest) -> Result<SessionView, JoinError> {
        if request.game_id.is_empty() {
            return Err(JoinError::InvalidIdentifier { field: "gameId" });
        }
        if request.player_id.is_empty() {
            return Err(JoinError::InvalidIdentifier { field: "playerId" });
        }

        let session = self.get_or_create(&request.game_id)?;

        let snapshot = {
            let mut session = session.lock().map_err(|_| JoinError::ConcurrencyFailure)?;
            session.add_player_if_absent(&request.player_id, request.player_name.as_str());
            trace!(
                "session {}: player {} enrolled ({} total)",
                request.game_id,
                request.player_id,
                session.player_count()
            );
            session.clone()
        };

        Ok(SessionView::for_player(&snapshot, &request.player_id))
    }

    /// Get the number of active sessions.
    #[must_use]
    pub fn len(&self) -> usize {
        // Read-only introspection tolerates a poisoned lock.
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the registry has no sessions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a session exists for `id`.
    #[must_use]
    pub fn contains(&self, id: &GameId) -> bool {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(id)
    }
}
