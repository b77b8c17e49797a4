//! Role and location assignment for Spyfall.
//!
//! One call to [`assign`] turns "start a game with N players" into a
//! [`GameAssignment`]: a drawn common location, one secret
//! [`PlayerInfo`] per player (exactly one spy, or everyone in sentinel
//! mode), and the location board captured for display. The
//! [`pick_questions`] helper selects the discussion prompts surfaced after
//! the reveal phase.
//!
//! All randomness flows through the caller's [`rand::Rng`], so tests can
//! drive every outcome from a seed.

mod assignment;
mod error;
mod questions;

pub use assignment::{GameAssignment, PlayerInfo, assign};
pub use error::AssignError;
pub use questions::pick_questions;
