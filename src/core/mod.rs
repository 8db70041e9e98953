//! Core session types: cards, players, sessions.
//!
//! These are the leaf value types of the crate. Concurrency control
//! lives in `registry`; outward projection lives in `view`.

pub mod card;
pub mod player;
pub mod session;

pub use card::Card;
pub use player::{Player, PlayerId};
pub use session::{GameId, GameStatus, Session};
