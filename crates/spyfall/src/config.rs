//! Session configuration.

use serde::{Deserialize, Serialize};

/// Policy settings for a session.
///
/// The player-count range is policy, not a core constraint; the
/// assignment logic itself only needs one player. Callers can loosen it
/// by overriding the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Minimum players accepted by `start_game`.
    pub min_players: usize,

    /// Maximum players accepted by `start_game`.
    pub max_players: usize,

    /// Whether a drawn location leaves the pool until reset/restore.
    pub remove_location_after_play: bool,

    /// Whether the "everyone is spy" sentinel is seeded into the pool.
    pub everyone_spy_enabled: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_players: 3,
            max_players: 20,
            remove_location_after_play: true,
            everyone_spy_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_config_default() {
        let config = GameConfig::default();
        assert_eq!(config.min_players, 3);
        assert_eq!(config.max_players, 20);
        assert!(config.remove_location_after_play);
        assert!(config.everyone_spy_enabled);
    }
}
