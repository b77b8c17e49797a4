//! Seed data and value types for Spyfall.
//!
//! This crate owns everything that is fixed for a session before any game
//! starts:
//!
//! - **Types** ([`Location`]) — a named setting with its role titles.
//! - **Catalogs** ([`master_catalog`], [`HELPER_QUESTIONS`]) — the built-in
//!   locations and the discussion-question list.
//! - **Display helpers** ([`locations_text`], [`roles_text`]) — the
//!   read-aloud strings shown (or spoken) to all players.
//!
//! It knows nothing about pools, games, or randomness: it is pure data,
//! shared by every other crate.

mod display;
mod location;
mod locations;
mod questions;

pub use display::{display_names, locations_text, roles_text};
pub use location::{EVERYONE_IS_SPY_LABEL, Location, SPY_NAME};
pub use locations::master_catalog;
pub use questions::HELPER_QUESTIONS;
