//! Text world definitions.
//!
//! The first two whitespace-separated integers are rows and columns. Every
//! following whitespace-separated record places one entity, usually one per
//! line:
//!
//! ```text
//! row,column,HERO,symbol,health,weapon_strength,armor_strength
//! row,column,MONSTER,symbol,health,weapon
//! row,column,WALL,symbol
//! ```
//!
//! `weapon` is `AXE`, `SWORD` or `CLUB`, or just its first letter.

use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;
use tracing::debug;

use crate::config::SimConfig;
use crate::entity::{Entity, IdCounter};
use crate::types::WeaponType;
use crate::world::World;

#[derive(Debug, Error)]
pub enum WorldFileError {
    #[error("world file I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("world file is missing its {0} count")]
    MissingDimension(&'static str),
    #[error("line {line}: invalid {what} '{value}'")]
    InvalidNumber { line: usize, what: &'static str, value: String },
    #[error("line {line}: world dimensions must be positive")]
    EmptyWorld { line: usize },
    #[error("line {line}: unknown entity kind '{kind}'")]
    UnknownKind { line: usize, kind: String },
    #[error("line {line}: {kind} record needs {expected} fields, found {found}")]
    FieldCount { line: usize, kind: &'static str, expected: usize, found: usize },
    #[error("line {line}: unknown weapon '{weapon}'")]
    UnknownWeapon { line: usize, weapon: String },
    #[error("line {line}: symbol field is empty")]
    MissingSymbol { line: usize },
    #[error("line {line}: hero weapon strength must be positive, found {strength}")]
    UnarmedHero { line: usize, strength: i32 },
    #[error("line {line}: ({row}, {column}) is outside the {rows}x{columns} world")]
    OutOfBounds { line: usize, row: i64, column: i64, rows: usize, columns: usize },
}

pub fn load_world_file(
    path: &Path,
    ids: &mut IdCounter,
    seed: u64,
    config: SimConfig,
) -> Result<World, WorldFileError> {
    let text = fs::read_to_string(path)?;
    parse_world(&text, ids, seed, config)
}

pub fn parse_world(
    text: &str,
    ids: &mut IdCounter,
    seed: u64,
    config: SimConfig,
) -> Result<World, WorldFileError> {
    let mut tokens = text
        .lines()
        .enumerate()
        .flat_map(|(index, line)| line.split_whitespace().map(move |token| (index + 1, token)));

    let (_, row_token) = tokens.next().ok_or(WorldFileError::MissingDimension("row"))?;
    let (line, column_token) = tokens.next().ok_or(WorldFileError::MissingDimension("column"))?;
    let rows = parse_field::<usize>(row_token, line, "row count")?;
    let columns = parse_field::<usize>(column_token, line, "column count")?;
    if rows == 0 || columns == 0 {
        return Err(WorldFileError::EmptyWorld { line });
    }

    let mut world = World::with_config(rows, columns, seed, config);
    for (line, record) in tokens {
        let fields: Vec<&str> = record.split(',').collect();
        if fields.len() < 3 {
            return Err(WorldFileError::UnknownKind { line, kind: record.to_string() });
        }

        let row = parse_field::<i64>(fields[0], line, "row")?;
        let column = parse_field::<i64>(fields[1], line, "column")?;
        if row < 0 || column < 0 || row as usize >= rows || column as usize >= columns {
            return Err(WorldFileError::OutOfBounds { line, row, column, rows, columns });
        }

        let entity = parse_entity(&fields, line, ids)?;
        debug!(line, row, column, unit = %entity.short_label(), "placing entity");
        world.place(row as usize, column as usize, entity);
    }
    Ok(world)
}

fn parse_entity(
    fields: &[&str],
    line: usize,
    ids: &mut IdCounter,
) -> Result<Entity, WorldFileError> {
    match fields[2].to_ascii_uppercase().as_str() {
        "HERO" => {
            expect_fields(fields, line, "HERO", 7)?;
            let symbol = parse_symbol(fields[3], line)?;
            let health = parse_field::<i32>(fields[4], line, "health")?;
            let weapon_strength = parse_field::<i32>(fields[5], line, "weapon strength")?;
            let armor_strength = parse_field::<i32>(fields[6], line, "armor strength")?;
            if weapon_strength <= 0 {
                return Err(WorldFileError::UnarmedHero { line, strength: weapon_strength });
            }
            Ok(Entity::hero(ids, health, symbol, weapon_strength, armor_strength))
        }
        "MONSTER" => {
            expect_fields(fields, line, "MONSTER", 6)?;
            let symbol = parse_symbol(fields[3], line)?;
            let health = parse_field::<i32>(fields[4], line, "health")?;
            let weapon = parse_weapon(fields[5], line)?;
            Ok(Entity::monster(ids, health, symbol, weapon))
        }
        "WALL" => {
            expect_fields(fields, line, "WALL", 4)?;
            Ok(Entity::wall(ids))
        }
        _ => Err(WorldFileError::UnknownKind { line, kind: fields[2].to_string() }),
    }
}

fn expect_fields(
    fields: &[&str],
    line: usize,
    kind: &'static str,
    expected: usize,
) -> Result<(), WorldFileError> {
    if fields.len() == expected {
        Ok(())
    } else {
        Err(WorldFileError::FieldCount { line, kind, expected, found: fields.len() })
    }
}

fn parse_field<T: FromStr>(
    value: &str,
    line: usize,
    what: &'static str,
) -> Result<T, WorldFileError> {
    value.parse::<T>().map_err(|_| WorldFileError::InvalidNumber {
        line,
        what,
        value: value.to_string(),
    })
}

fn parse_symbol(value: &str, line: usize) -> Result<char, WorldFileError> {
    value.chars().next().ok_or(WorldFileError::MissingSymbol { line })
}

fn parse_weapon(value: &str, line: usize) -> Result<WeaponType, WorldFileError> {
    match value.to_ascii_uppercase().as_str() {
        "A" | "AXE" => Ok(WeaponType::Axe),
        "S" | "SWORD" => Ok(WeaponType::Sword),
        "C" | "CLUB" => Ok(WeaponType::Club),
        _ => Err(WorldFileError::UnknownWeapon { line, weapon: value.to_string() }),
    }
}
