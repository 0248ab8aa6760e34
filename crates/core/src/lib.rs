pub mod config;
pub mod direction;
pub mod entity;
pub mod occupancy;
pub mod render;
pub mod types;
pub mod world;
pub mod world_file;

#[cfg(test)]
mod test_support;

pub use config::{FallbackOrder, SimConfig};
pub use direction::Direction;
pub use entity::{BOUNDARY_WALL, Entity, EntityKind, IdCounter, MONSTER_ARMOR_STRENGTH};
pub use occupancy::Occupancy;
pub use types::*;
pub use world::{ATTACK_VIEW_SIZE, LocalView, MOVE_VIEW_SIZE, World};
pub use world_file::{WorldFileError, load_world_file, parse_world};
