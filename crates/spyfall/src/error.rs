//! Error types for the session layer.

use spyfall_pool::PoolError;

/// Errors surfaced to UI collaborators by [`GameSession`](crate::GameSession).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// The requested player count is outside the configured policy range.
    /// No state is mutated; the caller shows a message and retries.
    #[error("invalid player count {given}: need between {min} and {max} players")]
    InvalidPlayerCount {
        given: usize,
        min: usize,
        max: usize,
    },

    /// Every location has been played. Recoverable: reset the pool or add
    /// a custom location, then start again.
    #[error(transparent)]
    PoolExhausted(#[from] PoolError),
}
