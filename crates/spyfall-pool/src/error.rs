//! Error types for the pool layer.

/// Errors that can occur during pool operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PoolError {
    /// A draw was attempted with no available locations. Recoverable:
    /// reset the pool or add a custom location, then draw again.
    #[error("no locations left to draw")]
    Empty,
}
