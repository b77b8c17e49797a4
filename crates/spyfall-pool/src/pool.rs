//! The available/played location partition.

use rand::Rng;
use spyfall_catalog::{Location, master_catalog};

use crate::PoolError;

/// The session's pool of locations.
///
/// Conceptually a partition of the catalog (plus any custom additions)
/// into two disjoint sets:
///
/// - **available** — drawable in the next game
/// - **played** — used up under the remove-after-play policy, or manually
///   removed
///
/// No location name ever appears in both sets, and names are unique across
/// the pool. The spy sentinel is a mode flag rather than a consumable
/// location: it is seeded/unseeded by [`set_everyone_spy`], is never moved
/// to played, and ignores [`remove_location`]/[`restore_location`].
///
/// [`set_everyone_spy`]: LocationPool::set_everyone_spy
/// [`remove_location`]: LocationPool::remove_location
/// [`restore_location`]: LocationPool::restore_location
#[derive(Debug, Clone)]
pub struct LocationPool {
    catalog: Vec<Location>,
    available: Vec<Location>,
    played: Vec<Location>,
    everyone_spy: bool,
}

impl LocationPool {
    /// Creates a pool seeded with the full master catalog and the spy
    /// sentinel enabled (the session defaults).
    pub fn new() -> Self {
        let mut pool = Self::with_catalog(master_catalog());
        pool.set_everyone_spy(true);
        pool
    }

    /// Creates a pool over a custom seed catalog, sentinel disabled.
    ///
    /// [`reset`](LocationPool::reset) restores this catalog, not the
    /// built-in one. Catalog names must be unique and must not use the
    /// reserved sentinel name.
    pub fn with_catalog(catalog: Vec<Location>) -> Self {
        debug_assert!(
            catalog.iter().all(|l| !l.is_spy_sentinel()),
            "seed catalogs must not contain the sentinel"
        );
        Self {
            available: catalog.clone(),
            catalog,
            played: Vec::new(),
            everyone_spy: false,
        }
    }

    /// Restores the available set to the full seed catalog and clears the
    /// played set. Custom additions are discarded; the everyone-is-spy
    /// toggle keeps its current value.
    pub fn reset(&mut self) {
        self.available = self.catalog.clone();
        self.played.clear();
        if self.everyone_spy {
            self.available.push(Location::spy_sentinel());
        }
        tracing::info!(available = self.available.len(), "pool reset");
    }

    /// Draws one location uniformly at random from the available set.
    ///
    /// Under the remove-after-play policy the drawn location moves to the
    /// played set as part of this call, so it cannot recur until a reset or
    /// restore. The spy sentinel is exempt from removal. Without the policy
    /// the draw is non-destructive.
    ///
    /// Fails with [`PoolError::Empty`] when nothing is available; callers
    /// must surface this so the player can reset the pool.
    pub fn draw_random(
        &mut self,
        rng: &mut impl Rng,
        remove_after_play: bool,
    ) -> Result<Location, PoolError> {
        if self.available.is_empty() {
            return Err(PoolError::Empty);
        }
        let index = rng.random_range(0..self.available.len());
        let location = self.available[index].clone();

        if remove_after_play && !location.is_spy_sentinel() {
            let drawn = self.available.remove(index);
            self.played.push(drawn);
        }

        tracing::debug!(
            location = %location.name,
            available = self.available.len(),
            "location drawn"
        );
        Ok(location)
    }

    /// Inserts a custom location into the available set.
    ///
    /// Returns `false` (and changes nothing) if the name collides with any
    /// location in the pool (available or played) or with the reserved
    /// sentinel name.
    pub fn add_location(&mut self, name: impl Into<String>, roles: Vec<String>) -> bool {
        let name = name.into();
        if name == spyfall_catalog::SPY_NAME || self.contains(&name) {
            return false;
        }
        tracing::info!(location = %name, "custom location added");
        self.available.push(Location { name, roles });
        true
    }

    /// Moves the named location from available to played. No-op if the
    /// name is not currently available (or names the sentinel).
    pub fn remove_location(&mut self, name: &str) {
        let position = self
            .available
            .iter()
            .position(|l| l.name == name && !l.is_spy_sentinel());
        if let Some(index) = position {
            let location = self.available.remove(index);
            tracing::info!(location = %location.name, "location removed");
            self.played.push(location);
        }
    }

    /// Moves the named location from played back to available. No-op if
    /// the name is not currently played.
    pub fn restore_location(&mut self, name: &str) {
        if let Some(index) = self.played.iter().position(|l| l.name == name) {
            let location = self.played.remove(index);
            tracing::info!(location = %location.name, "location restored");
            self.available.push(location);
        }
    }

    /// Seeds or unseeds the "everyone is spy" sentinel. The flag survives
    /// [`reset`](LocationPool::reset).
    pub fn set_everyone_spy(&mut self, enabled: bool) {
        self.everyone_spy = enabled;
        let seeded = self.available.iter().any(Location::is_spy_sentinel);
        if enabled && !seeded {
            self.available.push(Location::spy_sentinel());
        } else if !enabled {
            self.available.retain(|l| !l.is_spy_sentinel());
        }
    }

    /// Returns `true` if the everyone-is-spy sentinel is seeded.
    pub fn everyone_spy(&self) -> bool {
        self.everyone_spy
    }

    /// The currently available locations, in insertion order.
    pub fn available(&self) -> &[Location] {
        &self.available
    }

    /// The played (or manually removed) locations, in the order they left
    /// the available set.
    pub fn played(&self) -> &[Location] {
        &self.played
    }

    /// Display names of the available locations (sentinel rewritten).
    pub fn available_names(&self) -> Vec<String> {
        self.available
            .iter()
            .map(|l| l.display_name().to_string())
            .collect()
    }

    /// Display names of the played locations.
    pub fn played_names(&self) -> Vec<String> {
        self.played
            .iter()
            .map(|l| l.display_name().to_string())
            .collect()
    }

    fn contains(&self, name: &str) -> bool {
        self.available.iter().chain(self.played.iter()).any(|l| l.name == name)
    }
}

impl Default for LocationPool {
    fn default() -> Self {
        Self::new()
    }
}
