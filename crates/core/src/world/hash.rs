//! Digest of the whole board, used to compare runs that share a seed.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::entity::EntityKind;

impl World {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.turn);
        hasher.write_u8(match self.state {
            SimState::Active => 0,
            SimState::Inactive => 1,
        });
        hasher.write_u64(self.grid.rows as u64);
        hasher.write_u64(self.grid.columns as u64);
        for cell in &self.grid.cells {
            let Some(id) = cell else {
                hasher.write_u8(0);
                continue;
            };
            let unit = &self.units[*id];
            hasher.write_u8(match unit.kind() {
                EntityKind::Hero { .. } => 1,
                EntityKind::Monster { .. } => 2,
                EntityKind::Wall => 3,
            });
            hasher.write_u64(unit.id().0);
            hasher.write_i32(unit.health());
        }
        hasher.finish()
    }
}
