//! # wizard-session
//!
//! In-memory session management for a trick-taking card game: players
//! join a named session and receive a view of shared state plus their
//! own private hand.
//!
//! ## Design Principles
//!
//! 1. **Explicit ownership**: the registry is a plain value the server
//!    constructs and shares; no global or framework-managed state.
//!
//! 2. **Single projection point**: `SessionView::for_player` is the only
//!    wire-facing rendering of a session, and the only place the
//!    hidden-hand rule needs enforcing.
//!
//! 3. **Idempotent enrollment**: joining is safe to repeat; re-joins
//!    change nothing and return current state.
//!
//! ## Modules
//!
//! - `core`: cards, players, sessions
//! - `registry`: concurrent id -> session store and the join operation
//! - `view`: player-scoped projection of session state
//! - `error`: errors surfaced to the serving layer
//!
//! ## Example
//!
//! ```
//! use wizard_session::{GameId, JoinRequest, PlayerId, SessionRegistry};
//!
//! let registry = SessionRegistry::new();
//!
//! let view = registry
//!     .join(&JoinRequest {
//!         game_id: GameId::new("g1"),
//!         player_id: PlayerId::new("p1"),
//!         player_name: "Alice".to_string(),
//!     })
//!     .unwrap();
//!
//! assert_eq!(view.players.len(), 1);
//! assert!(view.hand_cards.is_empty());
//! ```

pub mod core;
pub mod error;
pub mod registry;
pub mod view;

// Re-export commonly used types
pub use crate::core::{Card, GameId, GameStatus, Player, PlayerId, Session};
pub use crate::error::JoinError;
pub use crate::registry::{JoinRequest, SessionRegistry, SharedSession};
pub use crate::view::{PlayerSummary, SessionView};
