//! The session controller: one device, one pool, one game at a time.

use rand::Rng;
use rand::rngs::ThreadRng;
use spyfall_assign::{AssignError, GameAssignment, PlayerInfo, assign, pick_questions};
use spyfall_catalog::HELPER_QUESTIONS;
use spyfall_pool::LocationPool;

use crate::{GameConfig, GameError};

/// How many helper questions a reveal-complete transition surfaces.
pub const HELPER_QUESTION_COUNT: usize = 3;

/// What [`GameSession::advance_player`] reports after a player confirms
/// they have seen their role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Hand the device to the given player (1-based number).
    NextPlayer(usize),
    /// Every player has seen their role; discussion can start.
    Complete,
}

/// Owns all mutable state for one device's session: the location pool,
/// the policy settings, the current game's assignment, and the
/// pass-the-device reveal cursor.
///
/// Every operation runs synchronously to completion in response to a
/// single user action; there is no shared state and no locking. The RNG
/// is a type parameter so tests can drive the whole session from a seed.
/// Production callers use [`GameSession::new`], which runs on the
/// thread-local generator.
pub struct GameSession<R: Rng = ThreadRng> {
    config: GameConfig,
    pool: LocationPool,
    rng: R,
    assignment: Option<GameAssignment>,
    current_player: usize,
    questions: Vec<String>,
}

impl GameSession<ThreadRng> {
    /// Creates a session with the given policy settings.
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::rng())
    }
}

impl<R: Rng> GameSession<R> {
    /// Creates a session over an explicit random source.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let mut pool = LocationPool::new();
        pool.set_everyone_spy(config.everyone_spy_enabled);
        Self {
            config,
            pool,
            rng,
            assignment: None,
            current_player: 0,
            questions: Vec::new(),
        }
    }

    /// The current policy settings.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    // -----------------------------------------------------------------
    // Game lifecycle
    // -----------------------------------------------------------------

    /// Starts a game for `num_players`, discarding any previous game.
    ///
    /// Validates the policy range first (nothing is mutated on a bad
    /// count), then draws a location and deals roles. Pool exhaustion
    /// comes back as [`GameError::PoolExhausted`] so the UI can offer a
    /// reset instead of crashing.
    pub fn start_game(&mut self, num_players: usize) -> Result<&GameAssignment, GameError> {
        if num_players < self.config.min_players || num_players > self.config.max_players {
            return Err(GameError::InvalidPlayerCount {
                given: num_players,
                min: self.config.min_players,
                max: self.config.max_players,
            });
        }

        let assignment = assign(
            num_players,
            &mut self.pool,
            self.config.remove_location_after_play,
            &mut self.rng,
        )
        .map_err(|err| match err {
            AssignError::PoolExhausted(pool_err) => GameError::PoolExhausted(pool_err),
            AssignError::InvalidPlayerCount(given) => GameError::InvalidPlayerCount {
                given,
                min: self.config.min_players,
                max: self.config.max_players,
            },
        })?;

        tracing::info!(
            players = num_players,
            everyone_spy = assignment.is_everyone_spy(),
            "game started"
        );

        self.assignment = Some(assignment);
        self.current_player = 0;
        self.questions.clear();
        Ok(self.assignment.as_ref().expect("assignment just stored"))
    }

    /// Clears the current game but keeps the pool and settings; played
    /// locations stay played until an explicit pool reset.
    pub fn new_game(&mut self) {
        self.assignment = None;
        self.current_player = 0;
        self.questions.clear();
        tracing::info!("session cleared for a new game");
    }

    /// The current game's assignment, if one is running.
    pub fn assignment(&self) -> Option<&GameAssignment> {
        self.assignment.as_ref()
    }

    // -----------------------------------------------------------------
    // Reveal sequencing
    // -----------------------------------------------------------------

    /// The player currently holding the device, if a game is running.
    pub fn current_player(&self) -> Option<&PlayerInfo> {
        self.assignment.as_ref()?.players.get(self.current_player)
    }

    /// 1-based number of the player currently holding the device.
    pub fn current_player_number(&self) -> usize {
        self.current_player + 1
    }

    /// Advances the reveal cursor after the current player has seen their
    /// role. On the final player this generates the game's helper
    /// questions and reports [`RevealOutcome::Complete`]; with no active
    /// game it is already complete.
    pub fn advance_player(&mut self) -> RevealOutcome {
        let total = self.assignment.as_ref().map_or(0, GameAssignment::num_players);
        if self.current_player + 1 < total {
            self.current_player += 1;
            RevealOutcome::NextPlayer(self.current_player + 1)
        } else {
            if total > 0 && self.questions.is_empty() {
                self.questions =
                    pick_questions(&HELPER_QUESTIONS, HELPER_QUESTION_COUNT, &mut self.rng);
                tracing::info!(players = total, "all players revealed");
            }
            RevealOutcome::Complete
        }
    }

    // -----------------------------------------------------------------
    // Helper questions
    // -----------------------------------------------------------------

    /// The helper questions for the current game (empty until the reveal
    /// phase completes).
    pub fn helper_questions(&self) -> &[String] {
        &self.questions
    }

    /// Re-rolls the current game's helper questions.
    pub fn new_questions(&mut self) -> &[String] {
        self.questions = pick_questions(&HELPER_QUESTIONS, HELPER_QUESTION_COUNT, &mut self.rng);
        &self.questions
    }

    /// Picks `k` helper questions without touching the stored set.
    pub fn pick_helper_questions(&mut self, k: usize) -> Vec<String> {
        pick_questions(&HELPER_QUESTIONS, k, &mut self.rng)
    }

    // -----------------------------------------------------------------
    // Display text
    // -----------------------------------------------------------------

    /// The location board for the current game, one name per line.
    ///
    /// This is the read-aloud source: it reflects the board as captured
    /// at game start and can be rebuilt at any time, independent of any
    /// speech playback a UI collaborator may be running.
    pub fn locations_text(&self) -> Option<String> {
        let assignment = self.assignment.as_ref()?;
        Some(spyfall_catalog::locations_text(&assignment.display_locations))
    }

    /// The role list for the current game's location, one per line.
    pub fn roles_text(&self) -> Option<String> {
        let assignment = self.assignment.as_ref()?;
        Some(spyfall_catalog::roles_text(&assignment.common_location))
    }

    // -----------------------------------------------------------------
    // Pool management
    // -----------------------------------------------------------------

    /// Restores the full catalog; see [`LocationPool::reset`].
    pub fn reset_pool(&mut self) {
        self.pool.reset();
    }

    /// Adds a custom location. The name and each role are trimmed;
    /// returns `false` for an empty name, an empty role list, or a name
    /// collision.
    pub fn add_location<S: AsRef<str>>(&mut self, name: &str, roles: &[S]) -> bool {
        let name = name.trim();
        if name.is_empty() {
            return false;
        }
        let roles: Vec<String> = roles
            .iter()
            .map(|r| r.as_ref().trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string)
            .collect();
        if roles.is_empty() {
            return false;
        }
        self.pool.add_location(name, roles)
    }

    /// Removes a location from play; see [`LocationPool::remove_location`].
    pub fn remove_location(&mut self, name: &str) {
        self.pool.remove_location(name);
    }

    /// Restores a played location; see [`LocationPool::restore_location`].
    pub fn restore_location(&mut self, name: &str) {
        self.pool.restore_location(name);
    }

    /// Display names of locations still in the pool.
    pub fn available_names(&self) -> Vec<String> {
        self.pool.available_names()
    }

    /// Display names of played/removed locations.
    pub fn played_names(&self) -> Vec<String> {
        self.pool.played_names()
    }

    // -----------------------------------------------------------------
    // Settings
    // -----------------------------------------------------------------

    /// Toggles the remove-after-play draw policy for future games.
    pub fn set_remove_after_play(&mut self, enabled: bool) {
        self.config.remove_location_after_play = enabled;
    }

    /// Toggles "everyone is spy" mode, seeding or unseeding the sentinel.
    pub fn set_everyone_spy(&mut self, enabled: bool) {
        self.config.everyone_spy_enabled = enabled;
        self.pool.set_everyone_spy(enabled);
    }
}
