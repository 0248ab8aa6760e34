//! Movement fallback policy used when no opponent is in sight.

use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::types::Faction;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackOrder {
    /// Faction default step, then one random compass step, then stay.
    PreferredThenRandom,
    /// One random compass step, then the faction default step, then stay.
    RandomThenPreferred,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub hero_default_step: Direction,
    pub monster_default_step: Direction,
    pub fallback: FallbackOrder,
}

impl SimConfig {
    pub fn default_step(&self, faction: Faction) -> Direction {
        match faction {
            Faction::Hero => self.hero_default_step,
            Faction::Monster => self.monster_default_step,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            hero_default_step: Direction::NorthWest,
            monster_default_step: Direction::SouthEast,
            fallback: FallbackOrder::PreferredThenRandom,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_heroes_northwest_and_monsters_southeast() {
        let config = SimConfig::default();
        assert_eq!(config.default_step(Faction::Hero), Direction::NorthWest);
        assert_eq!(config.default_step(Faction::Monster), Direction::SouthEast);
        assert_eq!(config.fallback, FallbackOrder::PreferredThenRandom);
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"fallback":"random_then_preferred"}"#)
            .expect("config should parse");
        assert_eq!(config.fallback, FallbackOrder::RandomThenPreferred);
        assert_eq!(config.hero_default_step, Direction::NorthWest);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = serde_json::from_str::<SimConfig>(r#"{"hero_step":"NORTH"}"#);
        assert!(result.is_err());
    }
}
