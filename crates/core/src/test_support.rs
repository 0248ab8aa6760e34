//! Shared world fixtures for the unit test suites.
//! Each fixture starts its own id numbering at 1 and hands the counter back
//! so tests can keep placing units with predictable ids.

use crate::entity::{Entity, IdCounter};
use crate::types::WeaponType;
use crate::world::World;

/// 3x3: sword monster `M` top-left, hero `H` bottom-right.
pub(crate) fn two_unit_world() -> (World, IdCounter) {
    let mut ids = IdCounter::new();
    let mut world = World::new(3, 3, 7);
    world.place(0, 0, Entity::monster(&mut ids, 10, 'M', WeaponType::Sword));
    world.place(2, 2, Entity::hero(&mut ids, 10, 'H', 3, 1));
    (world, ids)
}

/// 5 rows x 4 columns: monsters along the top, heroes along the bottom,
/// nobody within reach of anybody else.
pub(crate) fn big_world() -> (World, IdCounter) {
    let mut ids = IdCounter::new();
    let mut world = World::new(5, 4, 7);
    world.place(0, 0, Entity::monster(&mut ids, 10, 'A', WeaponType::Axe));
    world.place(0, 2, Entity::monster(&mut ids, 9, 'B', WeaponType::Sword));
    world.place(1, 2, Entity::monster(&mut ids, 8, 'C', WeaponType::Club));
    world.place(4, 1, Entity::hero(&mut ids, 8, 'D', 5, 2));
    world.place(4, 2, Entity::hero(&mut ids, 7, 'E', 4, 1));
    world.place(4, 3, Entity::hero(&mut ids, 6, 'F', 3, 1));
    (world, ids)
}

/// 5 rows x 4 columns: one isolated monster at (0, 2), a monster at (3, 3)
/// directly above the hero at (4, 3), and an isolated hero at (4, 1).
pub(crate) fn big_world_two() -> (World, IdCounter) {
    let mut ids = IdCounter::new();
    let mut world = World::new(5, 4, 7);
    world.place(0, 2, Entity::monster(&mut ids, 10, 'A', WeaponType::Axe));
    world.place(3, 3, Entity::monster(&mut ids, 9, 'B', WeaponType::Sword));
    world.place(4, 1, Entity::hero(&mut ids, 8, 'D', 5, 2));
    world.place(4, 3, Entity::hero(&mut ids, 6, 'F', 3, 1));
    (world, ids)
}
