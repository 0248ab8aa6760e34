//! Textual snapshot of a grid: bordered map plus unit table.
//! The layout is byte-exact so fixture files can be compared verbatim.

use std::iter;

use crate::occupancy::Occupancy;
use crate::types::Pos;

pub const WALL_GLYPH: char = '#';
pub const DEAD_GLYPH: char = '$';
pub const FLOOR_GLYPH: char = '.';
pub const TABLE_HEADER: &str = "NAME   \tS\tH\tSTATE\tINFO";

pub fn world_string<G: Occupancy + ?Sized>(grid: &G) -> String {
    let (rows, columns) = grid.dimensions();
    let border: String = iter::repeat_n(WALL_GLYPH, columns + 2).collect();

    let mut text = String::with_capacity((rows + 2) * (columns + 3));
    text.push_str(&border);
    text.push('\n');
    for row in 0..rows {
        text.push(WALL_GLYPH);
        for column in 0..columns {
            let glyph = match grid.entity_at(Pos::new(row as i32, column as i32)) {
                None => FLOOR_GLYPH,
                Some(entity) if entity.is_wall() => WALL_GLYPH,
                Some(entity) if entity.is_alive() => entity.symbol(),
                Some(_) => DEAD_GLYPH,
            };
            text.push(glyph);
        }
        text.push(WALL_GLYPH);
        text.push('\n');
    }
    text.push_str(&border);
    text.push('\n');
    text
}

/// Map followed by one table row per grid-resident hero or monster, row-major.
pub fn game_string<G: Occupancy + ?Sized>(grid: &G) -> String {
    let (rows, columns) = grid.dimensions();
    let mut text = world_string(grid);
    text.push_str(TABLE_HEADER);
    text.push('\n');
    for row in 0..rows {
        for column in 0..columns {
            if let Some(entity) = grid.entity_at(Pos::new(row as i32, column as i32))
                && entity.faction().is_some()
            {
                text.push_str(&entity.info_row());
                text.push('\n');
            }
        }
    }
    text
}
