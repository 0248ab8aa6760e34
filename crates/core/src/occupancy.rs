//! Read-only cell queries shared by a full `World` and its local views.

use crate::direction::Direction;
use crate::entity::{BOUNDARY_WALL, Entity};
use crate::render;
use crate::types::{Faction, Pos};

pub trait Occupancy {
    /// `(rows, columns)`.
    fn dimensions(&self) -> (usize, usize);

    /// The in-bounds occupant of `pos`, or `None` for floor.
    /// Only called with in-bounds positions.
    fn occupant_in_bounds(&self, pos: Pos) -> Option<&Entity>;

    fn in_bounds(&self, pos: Pos) -> bool {
        let (rows, columns) = self.dimensions();
        pos.row >= 0
            && pos.column >= 0
            && (pos.row as usize) < rows
            && (pos.column as usize) < columns
    }

    /// Cells off the grid read as the shared boundary wall.
    fn entity_at(&self, pos: Pos) -> Option<&Entity> {
        if self.in_bounds(pos) { self.occupant_in_bounds(pos) } else { Some(&BOUNDARY_WALL) }
    }

    fn entity_toward(&self, pos: Pos, direction: Direction) -> Option<&Entity> {
        self.entity_at(pos.step(direction))
    }

    fn can_move_onto(&self, pos: Pos) -> bool {
        self.entity_at(pos).is_none_or(Entity::can_move_on_top_of)
    }

    fn can_be_attacked(&self, pos: Pos) -> bool {
        self.entity_at(pos).is_some_and(Entity::can_be_attacked)
    }

    fn holds_faction(&self, pos: Pos, faction: Faction) -> bool {
        self.entity_at(pos).and_then(Entity::faction) == Some(faction)
    }

    fn holds_living(&self, pos: Pos, faction: Faction) -> bool {
        self.holds_faction(pos, faction) && self.entity_at(pos).is_some_and(Entity::is_alive)
    }

    fn world_string(&self) -> String {
        render::world_string(self)
    }

    fn game_string(&self) -> String {
        render::game_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::two_unit_world;
    use crate::types::WeaponType;

    #[test]
    fn neighbours_resolve_through_directions() {
        let (world, _) = two_unit_world();
        let hero = Pos::new(2, 2);
        assert!(world.entity_toward(hero, Direction::North).is_none());
        assert!(world.entity_toward(hero, Direction::South).is_some_and(Entity::is_wall));
        assert_eq!(world.entity_toward(hero, Direction::Stay).map(Entity::symbol), Some('H'));
    }

    #[test]
    fn faction_queries_distinguish_corpses() {
        let (mut world, mut ids) = two_unit_world();
        world.place(1, 1, Entity::monster(&mut ids, 0, 'Z', WeaponType::Club));

        assert!(world.holds_faction(Pos::new(1, 1), Faction::Monster));
        assert!(!world.holds_living(Pos::new(1, 1), Faction::Monster));
        assert!(world.holds_living(Pos::new(0, 0), Faction::Monster));
        assert!(!world.holds_faction(Pos::new(0, 0), Faction::Hero));
        assert!(!world.holds_faction(Pos::new(-1, 0), Faction::Hero));
    }

    #[test]
    fn passability_and_attackability_by_cell() {
        let (mut world, mut ids) = two_unit_world();
        world.place(1, 0, Entity::wall(&mut ids));
        world.place(1, 1, Entity::hero(&mut ids, 0, 'D', 2, 0));

        assert!(world.can_move_onto(Pos::new(0, 1)));
        assert!(world.can_move_onto(Pos::new(1, 1)));
        assert!(!world.can_move_onto(Pos::new(1, 0)));
        assert!(!world.can_move_onto(Pos::new(0, 0)));
        assert!(!world.can_move_onto(Pos::new(3, 0)));

        assert!(world.can_be_attacked(Pos::new(0, 0)));
        assert!(!world.can_be_attacked(Pos::new(1, 1)));
        assert!(!world.can_be_attacked(Pos::new(1, 0)));
        assert!(!world.can_be_attacked(Pos::new(0, 1)));
    }
}
