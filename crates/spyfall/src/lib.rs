//! # Spyfall
//!
//! A single-device assistant for the Spyfall party game: hidden
//! roles/locations for players passing one device around, with per-player
//! secret reveals, a location board, and randomized discussion questions.
//!
//! The heart of the crate is [`GameSession`], which owns the location
//! pool, the policy settings, and the current game:
//!
//! ```rust
//! use spyfall::prelude::*;
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let assignment = session.start_game(4)?;
//! assert_eq!(assignment.num_players(), 4);
//!
//! // Pass the device around…
//! while let Some(player) = session.current_player() {
//!     let _secret = (player.location.clone(), player.role.clone());
//!     if session.advance_player() == RevealOutcome::Complete {
//!         break;
//!     }
//! }
//!
//! // …then talk.
//! assert_eq!(session.helper_questions().len(), 3);
//! # Ok::<(), spyfall::GameError>(())
//! ```
//!
//! Rendering, sound, and speech belong to UI collaborators; this crate
//! only produces the state and display text they consume.

mod config;
mod error;
mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use session::{GameSession, HELPER_QUESTION_COUNT, RevealOutcome};

// Re-export the layers underneath so callers need only this crate.
pub use spyfall_assign::{AssignError, GameAssignment, PlayerInfo, assign, pick_questions};
pub use spyfall_catalog::{
    EVERYONE_IS_SPY_LABEL, HELPER_QUESTIONS, Location, SPY_NAME, locations_text, master_catalog,
    roles_text,
};
pub use spyfall_pool::{LocationPool, PoolError};

/// The common imports, one `use` away.
pub mod prelude {
    pub use crate::{
        GameAssignment, GameConfig, GameError, GameSession, Location, LocationPool, PlayerInfo,
        RevealOutcome,
    };
}
