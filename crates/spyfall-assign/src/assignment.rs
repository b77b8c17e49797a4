//! Building a [`GameAssignment`] from a player count and the pool.

use rand::Rng;
use serde::{Deserialize, Serialize};
use spyfall_catalog::{Location, SPY_NAME, display_names};
use spyfall_pool::LocationPool;

use crate::AssignError;

// ---------------------------------------------------------------------------
// PlayerInfo
// ---------------------------------------------------------------------------

/// One player's secret hand: the location they are "at" and their role
/// there. The spy carries the sentinel value in both fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    pub location: String,
    pub role: String,
}

impl PlayerInfo {
    /// The spy's hand.
    pub fn spy() -> Self {
        Self {
            location: SPY_NAME.to_string(),
            role: SPY_NAME.to_string(),
        }
    }

    /// Returns `true` if this player is a spy.
    pub fn is_spy(&self) -> bool {
        self.role == SPY_NAME
    }
}

// ---------------------------------------------------------------------------
// GameAssignment
// ---------------------------------------------------------------------------

/// Everything one game start produces.
///
/// Invariants:
/// - `players.len()` equals the requested player count, in player-index
///   order (index 0 is "Player 1").
/// - Exactly one player is a spy, unless `common_location` is the spy
///   sentinel, in which case every player is.
/// - Every non-spy player's `location` equals `common_location.name`.
/// - `display_locations` is the available set as it stood when the game
///   started, inclusive of the drawn location, sorted by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameAssignment {
    pub players: Vec<PlayerInfo>,
    pub common_location: Location,
    pub display_locations: Vec<Location>,
}

impl GameAssignment {
    /// Number of players in this game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// Returns `true` if this game is running in "everyone is spy" mode.
    pub fn is_everyone_spy(&self) -> bool {
        self.common_location.is_spy_sentinel()
    }

    /// Display names for the location board (sentinel rewritten, sorted).
    pub fn display_names(&self) -> Vec<String> {
        display_names(&self.display_locations)
    }
}

// ---------------------------------------------------------------------------
// Assignment
// ---------------------------------------------------------------------------

/// Produces one [`GameAssignment`] for a game of `num_players`.
///
/// The display board is captured **before** the draw's removal side
/// effect, so it includes the location being played. The draw itself
/// follows the pool's remove-after-play policy. If the drawn location is
/// the spy sentinel, every player becomes a spy and no role dealing runs;
/// otherwise one uniformly-chosen player is the spy and the rest deal
/// roles from the location's role list, without replacement, refilling the
/// working copy once a full cycle is exhausted.
pub fn assign(
    num_players: usize,
    pool: &mut LocationPool,
    remove_after_play: bool,
    rng: &mut impl Rng,
) -> Result<GameAssignment, AssignError> {
    if num_players == 0 {
        return Err(AssignError::InvalidPlayerCount(num_players));
    }

    let mut display_locations = pool.available().to_vec();
    display_locations.sort_by(|a, b| a.name.cmp(&b.name));

    let common_location = pool.draw_random(rng, remove_after_play)?;

    let players = if common_location.is_spy_sentinel() {
        vec![PlayerInfo::spy(); num_players]
    } else {
        deal_players(num_players, &common_location, rng)
    };

    tracing::debug!(
        players = num_players,
        location = %common_location.name,
        everyone_spy = common_location.is_spy_sentinel(),
        "assignment built"
    );

    Ok(GameAssignment {
        players,
        common_location,
        display_locations,
    })
}

/// Deals one spy and `num_players - 1` roles at the common location.
///
/// Roles are drawn by removal from a working copy of the role list; when
/// the copy runs dry it is refilled, so each refill cycle is itself a full
/// without-replacement shuffle and no role repeats within a cycle.
fn deal_players(
    num_players: usize,
    location: &Location,
    rng: &mut impl Rng,
) -> Vec<PlayerInfo> {
    debug_assert!(!location.roles.is_empty(), "location has no roles to deal");

    let spy_index = rng.random_range(0..num_players);
    let mut remaining: Vec<&str> = Vec::new();
    let mut players = Vec::with_capacity(num_players);

    for index in 0..num_players {
        if index == spy_index {
            players.push(PlayerInfo::spy());
            continue;
        }
        if remaining.is_empty() {
            remaining = location.roles.iter().map(String::as_str).collect();
        }
        let role = remaining.remove(rng.random_range(0..remaining.len()));
        players.push(PlayerInfo {
            location: location.name.clone(),
            role: role.to_string(),
        });
    }

    players
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashMap;

    fn casino() -> Location {
        Location::new("Casino", ["Gambler", "Dealer"])
    }

    fn seeded(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }

    /// A pool holding exactly the given locations, sentinel disabled.
    fn pool_of(locations: Vec<Location>) -> LocationPool {
        LocationPool::with_catalog(locations)
    }

    #[test]
    fn test_assign_produces_one_entry_per_player() {
        for num_players in 1..=12 {
            let mut pool = pool_of(vec![casino()]);
            let assignment =
                assign(num_players, &mut pool, false, &mut seeded(7)).unwrap();
            assert_eq!(assignment.num_players(), num_players);
        }
    }

    #[test]
    fn test_assign_has_exactly_one_spy_in_normal_mode() {
        for seed in 0..50 {
            let mut pool = pool_of(vec![casino()]);
            let assignment = assign(6, &mut pool, false, &mut seeded(seed)).unwrap();
            let spies = assignment.players.iter().filter(|p| p.is_spy()).count();
            assert_eq!(spies, 1, "seed {seed}");
        }
    }

    #[test]
    fn test_non_spies_share_the_common_location() {
        let mut pool = pool_of(vec![casino()]);
        let assignment = assign(5, &mut pool, false, &mut seeded(3)).unwrap();
        for player in assignment.players.iter().filter(|p| !p.is_spy()) {
            assert_eq!(player.location, assignment.common_location.name);
        }
    }

    #[test]
    fn test_two_roles_three_players_deals_both_roles_once() {
        // Non-spy count equals role count, so both roles appear exactly
        // once regardless of which player ended up as the spy.
        for seed in 0..50 {
            let mut pool = pool_of(vec![casino()]);
            let assignment = assign(3, &mut pool, false, &mut seeded(seed)).unwrap();

            let mut roles: Vec<&str> = assignment
                .players
                .iter()
                .filter(|p| !p.is_spy())
                .map(|p| p.role.as_str())
                .collect();
            roles.sort();
            assert_eq!(roles, vec!["Dealer", "Gambler"], "seed {seed}");
        }
    }

    #[test]
    fn test_role_counts_differ_by_at_most_one_within_a_game() {
        // 10 players, 9 non-spies, 2 roles: counts must split 5/4 (or 4/5).
        for seed in 0..50 {
            let mut pool = pool_of(vec![casino()]);
            let assignment = assign(10, &mut pool, false, &mut seeded(seed)).unwrap();

            let mut counts: HashMap<&str, usize> = HashMap::new();
            for player in assignment.players.iter().filter(|p| !p.is_spy()) {
                *counts.entry(player.role.as_str()).or_default() += 1;
            }
            let max = counts.values().max().copied().unwrap();
            let min = counts.values().min().copied().unwrap();
            assert!(max - min <= 1, "seed {seed}: counts {counts:?}");
            assert_eq!(counts.values().sum::<usize>(), 9);
        }
    }

    #[test]
    fn test_spy_sentinel_makes_everyone_a_spy() {
        let mut pool = pool_of(vec![]);
        pool.set_everyone_spy(true);
        let assignment = assign(4, &mut pool, true, &mut seeded(1)).unwrap();

        assert!(assignment.is_everyone_spy());
        for player in &assignment.players {
            assert_eq!(player.location, SPY_NAME);
            assert_eq!(player.role, SPY_NAME);
        }
    }

    #[test]
    fn test_display_locations_include_drawn_location() {
        let mut pool = pool_of(vec![casino(), Location::new("Bank", ["Banker"])]);
        let assignment = assign(3, &mut pool, true, &mut seeded(9)).unwrap();

        // Captured before the removal side effect: both locations show,
        // even though the drawn one just left the pool.
        assert_eq!(assignment.display_locations.len(), 2);
        assert!(
            assignment
                .display_locations
                .iter()
                .any(|l| l.name == assignment.common_location.name)
        );
        assert_eq!(pool.available().len(), 1);
    }

    #[test]
    fn test_display_locations_are_sorted_by_name() {
        let mut pool = pool_of(vec![
            Location::new("Ship", ["Captain"]),
            Location::new("Bank", ["Banker"]),
            casino(),
        ]);
        let assignment = assign(3, &mut pool, false, &mut seeded(2)).unwrap();
        let names: Vec<&str> = assignment
            .display_locations
            .iter()
            .map(|l| l.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bank", "Casino", "Ship"]);
    }

    #[test]
    fn test_zero_players_is_rejected_without_touching_the_pool() {
        let mut pool = pool_of(vec![casino()]);
        let result = assign(0, &mut pool, true, &mut seeded(4));
        assert_eq!(result, Err(AssignError::InvalidPlayerCount(0)));
        assert_eq!(pool.available().len(), 1);
    }

    #[test]
    fn test_empty_pool_surfaces_pool_exhaustion() {
        let mut pool = pool_of(vec![]);
        let result = assign(3, &mut pool, true, &mut seeded(4));
        assert_eq!(
            result,
            Err(AssignError::PoolExhausted(spyfall_pool::PoolError::Empty))
        );
    }

    #[test]
    fn test_single_player_game_is_just_the_spy() {
        let mut pool = pool_of(vec![casino()]);
        let assignment = assign(1, &mut pool, false, &mut seeded(5)).unwrap();
        assert_eq!(assignment.players, vec![PlayerInfo::spy()]);
    }

    #[test]
    fn test_player_info_serializes_with_plain_fields() {
        let json: serde_json::Value = serde_json::to_value(PlayerInfo::spy()).unwrap();
        assert_eq!(json["location"], "spy");
        assert_eq!(json["role"], "spy");
    }
}
