//! Grid engine: owns entities, their cells, and the turn loop.
//!
//! Positions are stored twice: each grid cell holds an arena key, and the
//! location index maps that key back to its cell. `place`, `move_unit` and
//! `kill` are the only writers and keep both sides in step. A unit that dies
//! leaves the location index immediately but its corpse stays on the grid
//! until something moves onto it.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;
use slotmap::{SecondaryMap, SlotMap};

use crate::config::SimConfig;
use crate::direction::Direction;
use crate::entity::Entity;
use crate::occupancy::Occupancy;
use crate::types::*;

mod hash;
mod turn;
mod view;

pub use view::LocalView;

/// Window handed to `attack_where`.
pub const ATTACK_VIEW_SIZE: usize = 3;
/// Window handed to `choose_move`.
pub const MOVE_VIEW_SIZE: usize = 5;

#[derive(Clone, Debug)]
pub(crate) struct Grid {
    pub(crate) rows: usize,
    pub(crate) columns: usize,
    pub(crate) cells: Vec<Option<EntityId>>,
}

impl Grid {
    fn new(rows: usize, columns: usize) -> Self {
        Self { rows, columns, cells: vec![None; rows * columns] }
    }

    pub(crate) fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.column >= 0
            && (pos.row as usize) < self.rows
            && (pos.column as usize) < self.columns
    }

    pub(crate) fn get(&self, pos: Pos) -> Option<EntityId> {
        if !self.in_bounds(pos) {
            return None;
        }
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Pos, cell: Option<EntityId>) {
        let index = self.index(pos);
        self.cells[index] = cell;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.columns + (pos.column as usize)
    }
}

pub struct World {
    seed: u64,
    turn: u64,
    rng: ChaCha8Rng,
    config: SimConfig,
    grid: Grid,
    units: SlotMap<EntityId, Entity>,
    turn_order: Vec<EntityId>,
    locations: SecondaryMap<EntityId, Pos>,
    state: SimState,
    outcome: Option<Outcome>,
    log: Vec<TurnEvent>,
}

impl World {
    pub fn new(rows: usize, columns: usize, seed: u64) -> Self {
        Self::with_config(rows, columns, seed, SimConfig::default())
    }

    pub fn with_config(rows: usize, columns: usize, seed: u64, config: SimConfig) -> Self {
        Self {
            seed,
            turn: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            grid: Grid::new(rows, columns),
            units: SlotMap::with_key(),
            turn_order: Vec::new(),
            locations: SecondaryMap::new(),
            state: SimState::Active,
            outcome: None,
            log: Vec::new(),
        }
    }

    /// Puts `entity` at `(row, column)` and appends it to the turn order.
    /// Any previous occupant of the cell loses its position but keeps its
    /// place in the turn order.
    ///
    /// Panics if the cell is outside the grid.
    pub fn place(&mut self, row: usize, column: usize, entity: Entity) -> EntityId {
        let pos = Pos::new(row as i32, column as i32);
        assert!(
            self.grid.in_bounds(pos),
            "cannot place at ({row}, {column}) in a {}x{} world",
            self.grid.rows,
            self.grid.columns
        );

        if let Some(previous) = self.grid.get(pos) {
            self.locations.remove(previous);
        }
        let id = self.units.insert(entity);
        self.grid.set(pos, Some(id));
        self.turn_order.push(id);
        self.locations.insert(id, pos);
        id
    }

    /// Relocates the occupant of `from` one step in `direction`, dropping
    /// whatever was left at the destination off the grid. Passability is the
    /// caller's responsibility.
    pub fn move_unit(&mut self, from: Pos, direction: Direction) {
        let to = from.step(direction);
        assert!(self.grid.in_bounds(to), "move from {from:?} {direction:?} leaves the grid");
        let Some(id) = self.grid.get(from) else {
            return;
        };
        if from == to {
            return;
        }
        if let Some(displaced) = self.grid.get(to) {
            self.locations.remove(displaced);
        }
        self.grid.set(from, None);
        self.grid.set(to, Some(id));
        self.locations.insert(id, to);
    }

    /// Drops a dead unit from position lookup; the corpse stays on the grid.
    fn kill(&mut self, id: EntityId) {
        self.locations.remove(id);
    }

    pub fn is_active(&self) -> bool {
        self.state == SimState::Active
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn end_simulation(&mut self) {
        self.state = SimState::Inactive;
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn rows(&self) -> usize {
        self.grid.rows
    }

    pub fn columns(&self) -> usize {
        self.grid.columns
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.units.get(id)
    }

    pub fn id_at(&self, pos: Pos) -> Option<EntityId> {
        self.grid.get(pos)
    }

    pub fn location_of(&self, id: EntityId) -> Option<Pos> {
        self.locations.get(id).copied()
    }

    /// Every entity ever placed, in the order they act.
    pub fn turn_order(&self) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.turn_order.iter().map(|id| (*id, &self.units[*id]))
    }

    pub fn log(&self) -> &[TurnEvent] {
        &self.log
    }

    /// Label used in narration, e.g. `Hero(2)`.
    pub fn label(&self, id: EntityId) -> String {
        self.units.get(id).map_or_else(|| "?".to_string(), Entity::short_label)
    }

    /// Fresh `size` x `size` window centred on `(row, column)`; cells off the
    /// grid read as boundary wall.
    ///
    /// Panics if `size` is even.
    pub fn extract_local_view(&self, size: usize, row: usize, column: usize) -> LocalView<'_> {
        LocalView::extract(&self.grid, &self.units, size, Pos::new(row as i32, column as i32))
    }
}

impl Occupancy for World {
    fn dimensions(&self) -> (usize, usize) {
        (self.grid.rows, self.grid.columns)
    }

    fn occupant_in_bounds(&self, pos: Pos) -> Option<&Entity> {
        self.grid.get(pos).map(|id| &self.units[id])
    }
}
