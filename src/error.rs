//! Error taxonomy for the join path.
//!
//! The core has very few failure modes: malformed identifiers are
//! rejected at the boundary, and a poisoned lock is surfaced rather
//! than retried. An unknown requester during view building is not an
//! error; it degrades to an empty hand.

use thiserror::Error;

/// Errors surfaced to the serving layer from a join request.
///
/// No variant is fatal to the process.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum JoinError {
    /// An identifier field was empty. `field` names the offending
    /// request field in wire casing (`gameId`, `playerId`).
    #[error("invalid identifier: {field} must be non-empty")]
    InvalidIdentifier {
        /// The request field that failed validation.
        field: &'static str,
    },

    /// A registry or session lock was poisoned by a panicking writer.
    /// Surfaced to the caller; never retried internally.
    #[error("session store lock poisoned")]
    ConcurrencyFailure,
}
