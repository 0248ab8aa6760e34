//! Combat units and terrain that occupy grid cells.
//! Decision heuristics live in `tactics`; this module owns stats and occupancy rules.

use crate::types::{Faction, UnitId, WeaponType};

mod tactics;

/// Armor every monster wears regardless of weapon.
pub const MONSTER_ARMOR_STRENGTH: i32 = 2;

/// Shared terrain standing in for every cell outside a grid.
pub static BOUNDARY_WALL: Entity =
    Entity { id: UnitId(0), symbol: '#', health: 0, kind: EntityKind::Wall };

/// Issues process-unique unit ids. Threaded explicitly through entity
/// constructors so separate simulations never share numbering state.
#[derive(Clone, Debug)]
pub struct IdCounter {
    next: u64,
}

impl IdCounter {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn issue(&mut self) -> UnitId {
        let id = UnitId(self.next);
        self.next += 1;
        id
    }

    /// Rewinds numbering to 1. Only meant for isolating test fixtures.
    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Hero { weapon_strength: i32, armor_strength: i32 },
    Monster { weapon: WeaponType },
    Wall,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    id: UnitId,
    symbol: char,
    health: i32,
    kind: EntityKind,
}

impl Entity {
    pub fn hero(
        ids: &mut IdCounter,
        health: i32,
        symbol: char,
        weapon_strength: i32,
        armor_strength: i32,
    ) -> Self {
        assert!(
            weapon_strength > 0,
            "hero weapon strength must be positive, got {weapon_strength}"
        );
        Self {
            id: ids.issue(),
            symbol,
            health: health.max(0),
            kind: EntityKind::Hero { weapon_strength, armor_strength },
        }
    }

    pub fn monster(ids: &mut IdCounter, health: i32, symbol: char, weapon: WeaponType) -> Self {
        Self {
            id: ids.issue(),
            symbol,
            health: health.max(0),
            kind: EntityKind::Monster { weapon },
        }
    }

    pub fn wall(ids: &mut IdCounter) -> Self {
        Self { id: ids.issue(), symbol: '#', health: 0, kind: EntityKind::Wall }
    }

    pub fn id(&self) -> UnitId {
        self.id
    }

    pub fn symbol(&self) -> char {
        self.symbol
    }

    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn faction(&self) -> Option<Faction> {
        match self.kind {
            EntityKind::Hero { .. } => Some(Faction::Hero),
            EntityKind::Monster { .. } => Some(Faction::Monster),
            EntityKind::Wall => None,
        }
    }

    pub fn is_wall(&self) -> bool {
        matches!(self.kind, EntityKind::Wall)
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn is_dead(&self) -> bool {
        !self.is_alive()
    }

    pub fn weapon_strength(&self) -> i32 {
        match self.kind {
            EntityKind::Hero { weapon_strength, .. } => weapon_strength,
            EntityKind::Monster { weapon } => weapon.strength(),
            EntityKind::Wall => 0,
        }
    }

    pub fn armor_strength(&self) -> i32 {
        match self.kind {
            EntityKind::Hero { armor_strength, .. } => armor_strength,
            EntityKind::Monster { .. } => MONSTER_ARMOR_STRENGTH,
            EntityKind::Wall => 0,
        }
    }

    /// Walls never yield their cell; combatants only once dead.
    pub fn can_move_on_top_of(&self) -> bool {
        !self.is_wall() && self.is_dead()
    }

    pub fn can_be_attacked(&self) -> bool {
        !self.is_wall() && self.is_alive()
    }

    /// Subtracts `amount` from health, flooring at zero.
    pub fn apply_damage(&mut self, amount: i32) {
        self.health = (self.health - amount.max(0)).max(0);
    }

    pub fn short_label(&self) -> String {
        let prefix = match self.kind {
            EntityKind::Hero { .. } => "Hero",
            EntityKind::Monster { .. } => "Mons",
            EntityKind::Wall => "Wall",
        };
        format!("{prefix}({})", self.id.0)
    }

    /// One tab-separated row of the unit table printed under the map.
    pub fn info_row(&self) -> String {
        let status = if self.is_alive() { "ALIVE" } else { "DEAD" };
        let mut row = format!("{}\t{}\t{}\t{status}", self.short_label(), self.symbol, self.health);
        match self.kind {
            EntityKind::Hero { weapon_strength, armor_strength } => {
                row.push_str(&format!("\t{weapon_strength}\t{armor_strength}"));
            }
            EntityKind::Monster { weapon } => {
                row.push('\t');
                row.push_str(weapon.name());
            }
            EntityKind::Wall => {}
        }
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_and_resettable() {
        let mut ids = IdCounter::new();
        let first = Entity::monster(&mut ids, 10, 'M', WeaponType::Sword);
        let second = Entity::hero(&mut ids, 10, 'H', 3, 1);
        let wall = Entity::wall(&mut ids);
        assert_eq!(first.id(), UnitId(1));
        assert_eq!(second.id(), UnitId(2));
        assert_eq!(wall.id(), UnitId(3));

        ids.reset();
        assert_eq!(ids.issue(), UnitId(1));
    }

    #[test]
    fn damage_floors_health_at_zero() {
        let mut ids = IdCounter::new();
        let mut hero = Entity::hero(&mut ids, 5, 'H', 3, 1);
        hero.apply_damage(2);
        assert_eq!(hero.health(), 3);
        assert!(hero.is_alive());

        hero.apply_damage(40);
        assert_eq!(hero.health(), 0);
        assert!(hero.is_dead());

        hero.apply_damage(1);
        assert_eq!(hero.health(), 0);
    }

    #[test]
    fn negative_construction_health_is_stored_as_zero() {
        let mut ids = IdCounter::new();
        let monster = Entity::monster(&mut ids, -4, 'M', WeaponType::Club);
        assert_eq!(monster.health(), 0);
        assert!(monster.is_dead());
    }

    #[test]
    fn monster_stats_come_from_weapon_table() {
        let mut ids = IdCounter::new();
        let axe = Entity::monster(&mut ids, 10, 'A', WeaponType::Axe);
        let sword = Entity::monster(&mut ids, 10, 'S', WeaponType::Sword);
        let club = Entity::monster(&mut ids, 10, 'C', WeaponType::Club);
        assert_eq!(axe.weapon_strength(), 3);
        assert_eq!(sword.weapon_strength(), 4);
        assert_eq!(club.weapon_strength(), 2);
        for monster in [&axe, &sword, &club] {
            assert_eq!(monster.armor_strength(), MONSTER_ARMOR_STRENGTH);
        }
    }

    #[test]
    fn occupancy_rules_follow_life_and_kind() {
        let mut ids = IdCounter::new();
        let mut hero = Entity::hero(&mut ids, 1, 'H', 2, 0);
        let wall = Entity::wall(&mut ids);

        assert!(!hero.can_move_on_top_of());
        assert!(hero.can_be_attacked());
        hero.apply_damage(1);
        assert!(hero.can_move_on_top_of());
        assert!(!hero.can_be_attacked());

        assert!(!wall.can_move_on_top_of());
        assert!(!wall.can_be_attacked());
        assert!(!BOUNDARY_WALL.can_move_on_top_of());
        assert!(!BOUNDARY_WALL.can_be_attacked());
    }

    #[test]
    #[should_panic(expected = "weapon strength must be positive")]
    fn hero_without_weapon_is_rejected() {
        let mut ids = IdCounter::new();
        let _ = Entity::hero(&mut ids, 10, 'H', 0, 1);
    }

    #[test]
    fn info_rows_match_unit_table_layout() {
        let mut ids = IdCounter::new();
        let monster = Entity::monster(&mut ids, 10, 'M', WeaponType::Sword);
        let mut hero = Entity::hero(&mut ids, 10, 'H', 3, 1);
        assert_eq!(monster.info_row(), "Mons(1)\tM\t10\tALIVE\tSWORD");
        assert_eq!(hero.info_row(), "Hero(2)\tH\t10\tALIVE\t3\t1");

        hero.apply_damage(10);
        assert_eq!(hero.info_row(), "Hero(2)\tH\t0\tDEAD\t3\t1");
    }
}
