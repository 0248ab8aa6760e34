use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

use crate::direction::Direction;

new_key_type! {
    /// Arena slot of an entity placed in a `World`.
    pub struct EntityId;
}

/// Human-facing identity number rendered as `Hero(2)` / `Mons(1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: i32,
    pub column: i32,
}

impl Pos {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn step(self, direction: Direction) -> Self {
        let (row_change, column_change) = direction.delta();
        Self { row: self.row + row_change, column: self.column + column_change }
    }

    pub fn chebyshev(self, other: Pos) -> u32 {
        self.row.abs_diff(other.row).max(self.column.abs_diff(other.column))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Faction {
    Hero,
    Monster,
}

impl Faction {
    pub fn opponent(self) -> Self {
        match self {
            Self::Hero => Self::Monster,
            Self::Monster => Self::Hero,
        }
    }

    /// Heroes read their surroundings top-left first, monsters bottom-right
    /// first. The two orders pick different targets when several are in reach.
    pub fn scan_order(self) -> ScanOrder {
        match self {
            Self::Hero => ScanOrder::Ascending,
            Self::Monster => ScanOrder::Descending,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOrder {
    Ascending,
    Descending,
}

impl ScanOrder {
    /// Row-major cell coordinates of a `rows` x `columns` window in this order.
    pub fn cells(self, rows: usize, columns: usize) -> impl Iterator<Item = Pos> {
        let total = rows * columns;
        (0..total).map(move |step| {
            let index = match self {
                Self::Ascending => step,
                Self::Descending => total - 1 - step,
            };
            Pos { row: (index / columns) as i32, column: (index % columns) as i32 }
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WeaponType {
    Axe,
    Sword,
    Club,
}

impl WeaponType {
    pub const fn strength(self) -> i32 {
        match self {
            Self::Club => 2,
            Self::Axe => 3,
            Self::Sword => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Axe => "AXE",
            Self::Sword => "SWORD",
            Self::Club => "CLUB",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimState {
    Active,
    Inactive,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    HeroesWin,
    MonstersWin,
    MutualDestruction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnEvent {
    Attacked {
        attacker: EntityId,
        target: EntityId,
        direction: Direction,
        roll: i32,
        armor: i32,
        damage: i32,
    },
    AttackFailed { attacker: EntityId, direction: Direction },
    Died { unit: EntityId },
    Moved { unit: EntityId, direction: Direction, to: Pos },
    MoveBlocked { unit: EntityId, direction: Direction },
    Held { unit: EntityId },
    SimulationEnded { turn: u64, outcome: Outcome },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_serializes_in_screaming_snake_case() {
        let json = serde_json::to_string(&Outcome::MutualDestruction).expect("serialize");
        assert_eq!(json, "\"MUTUAL_DESTRUCTION\"");
        let parsed: Outcome = serde_json::from_str("\"HEROES_WIN\"").expect("deserialize");
        assert_eq!(parsed, Outcome::HeroesWin);
    }
}
