//! Location-pool lifecycle for Spyfall.
//!
//! A [`LocationPool`] owns the session's mutable partition of locations:
//! the **available** set (drawable this game) and the **played** set (used
//! up or manually removed). One pool per session, owned by the session
//! controller; there is no global state.
//!
//! # Key types
//!
//! - [`LocationPool`] — draw, add, remove, restore, reset
//! - [`PoolError`] — exhausted-pool draw failure

mod error;
mod pool;

pub use error::PoolError;
pub use pool::LocationPool;
