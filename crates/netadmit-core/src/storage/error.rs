//! Storage error types.

use thiserror::Error;

use crate::model::SessionId;

/// Errors surfaced by a [`Store`](super::Store) implementation.
///
/// Absence of a record is not an error; these variants cover genuine
/// storage failures, which the engine propagates and treats as fatal for
/// the current invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The backing store cannot be reached.
    #[error("storage unavailable: {reason}")]
    Unavailable {
        /// Human-readable failure description.
        reason: String,
    },

    /// A write targeted a session that does not exist.
    #[error("session {session} does not exist")]
    UnknownSession {
        /// The missing session.
        session: SessionId,
    },
}
