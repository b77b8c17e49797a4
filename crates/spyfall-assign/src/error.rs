//! Error types for the assignment layer.

use spyfall_pool::PoolError;

/// Errors that can occur while building a game assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AssignError {
    /// A game needs at least one player.
    #[error("invalid player count: {0}")]
    InvalidPlayerCount(usize),

    /// The pool had no available locations. Surfaced as its own condition
    /// so the caller can offer a pool reset instead of failing opaquely.
    #[error(transparent)]
    PoolExhausted(#[from] PoolError),
}
