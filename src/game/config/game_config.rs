//! Top-level configuration: terrain generation plus arena tuning.

use serde::{Deserialize, Serialize};

use crate::terrain::HeightfieldParams;

use super::ArenaConfig;

/// Everything needed to build a [`GameState`](crate::game::GameState).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub terrain: HeightfieldParams,
    pub arena: ArenaConfig,
}

impl GameConfig {
    /// Parse a configuration from JSON. Missing fields fall back to the
    /// defaults, so a file can override just the knobs it cares about.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_yields_defaults() {
        let config = GameConfig::from_json("{}").unwrap();
        let defaults = GameConfig::default();
        assert_eq!(config.terrain.vertex_count, defaults.terrain.vertex_count);
        assert_eq!(config.arena.aggro_range, defaults.arena.aggro_range);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "terrain": { "seed": 42, "vertex_count": 16 },
            "arena": { "charge_delay": 0.5 }
        }"#;
        let config = GameConfig::from_json(json).unwrap();
        assert_eq!(config.terrain.seed, 42);
        assert_eq!(config.terrain.vertex_count, 16);
        assert_eq!(config.arena.charge_delay, 0.5);
        // Untouched fields keep their defaults
        assert_eq!(config.arena.reset_delay, ArenaConfig::default().reset_delay);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(GameConfig::from_json("{ not json").is_err());
    }
}
