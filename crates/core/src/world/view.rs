//! Square windows onto a world, used for decisions and fog-of-war rendering.

use slotmap::SlotMap;

use super::Grid;
use crate::entity::{BOUNDARY_WALL, Entity};
use crate::occupancy::Occupancy;
use crate::types::{EntityId, Pos};

/// A `size` x `size` window that borrows the live entities it shows.
/// Cells beyond the source grid hold the shared boundary wall.
#[derive(Clone, Debug)]
pub struct LocalView<'w> {
    size: usize,
    cells: Vec<Option<&'w Entity>>,
}

impl<'w> LocalView<'w> {
    pub(crate) fn extract(
        grid: &Grid,
        units: &'w SlotMap<EntityId, Entity>,
        size: usize,
        center: Pos,
    ) -> Self {
        assert!(size % 2 == 1, "local view size must be odd, got {size}");
        let reach = ((size - 1) / 2) as i32;

        let mut cells = Vec::with_capacity(size * size);
        for row in (center.row - reach)..=(center.row + reach) {
            for column in (center.column - reach)..=(center.column + reach) {
                let source = Pos::new(row, column);
                let cell = if grid.in_bounds(source) {
                    grid.get(source).map(|id| &units[id])
                } else {
                    Some(&BOUNDARY_WALL)
                };
                cells.push(cell);
            }
        }
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The cell the view was extracted around.
    pub fn center(&self) -> Pos {
        let middle = ((self.size - 1) / 2) as i32;
        Pos::new(middle, middle)
    }
}

impl Occupancy for LocalView<'_> {
    fn dimensions(&self) -> (usize, usize) {
        (self.size, self.size)
    }

    fn occupant_in_bounds(&self, pos: Pos) -> Option<&Entity> {
        self.cells[(pos.row as usize) * self.size + (pos.column as usize)]
    }
}
