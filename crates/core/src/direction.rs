//! The nine legal single-cell steps and the search orders built from them.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;
use serde::{Deserialize, Serialize};

/// Serialized under the same upper-case names `name()` prints, so a
/// direction copied from narration can be pasted into a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    Stay,
}

impl Direction {
    /// Enumeration order; every tie-break in this crate falls back to it.
    pub const ALL: [Direction; 9] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::Stay,
    ];

    /// The eight steps that actually leave the current cell.
    pub const COMPASS: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// `(row change, column change)`; rows grow southward.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::North => (-1, 0),
            Self::NorthEast => (-1, 1),
            Self::East => (0, 1),
            Self::SouthEast => (1, 1),
            Self::South => (1, 0),
            Self::SouthWest => (1, -1),
            Self::West => (0, -1),
            Self::NorthWest => (-1, -1),
            Self::Stay => (0, 0),
        }
    }

    pub fn from_delta(row_change: i32, column_change: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|direction| direction.delta() == (row_change, column_change))
    }

    /// The step that closes distance on both axes toward a target offset.
    pub fn toward(row_offset: i32, column_offset: i32) -> Self {
        Self::from_delta(row_offset.signum(), column_offset.signum()).unwrap_or(Self::Stay)
    }

    /// All nine steps ordered by how close each lands to the target offset
    /// (squared distance from the landing cell), ties in enumeration order.
    /// The first entry is always `toward(row_offset, column_offset)` for
    /// offsets inside a 5x5 window.
    pub fn ranked_toward(row_offset: i32, column_offset: i32) -> [Direction; 9] {
        let mut ranked = Self::ALL;
        ranked.sort_by_key(|direction| {
            let (row_change, column_change) = direction.delta();
            let row_gap = row_offset - row_change;
            let column_gap = column_offset - column_change;
            row_gap * row_gap + column_gap * column_gap
        });
        ranked
    }

    /// Uniform pick among the eight compass steps.
    pub fn random(rng: &mut ChaCha8Rng) -> Self {
        let index = rng.next_u64() % Self::COMPASS.len() as u64;
        Self::COMPASS[index as usize]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::North => "NORTH",
            Self::NorthEast => "NORTHEAST",
            Self::East => "EAST",
            Self::SouthEast => "SOUTHEAST",
            Self::South => "SOUTH",
            Self::SouthWest => "SOUTHWEST",
            Self::West => "WEST",
            Self::NorthWest => "NORTHWEST",
            Self::Stay => "STAY",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::rand_core::SeedableRng;

    #[test]
    fn every_delta_resolves_back_to_its_direction() {
        for direction in Direction::ALL {
            let (row_change, column_change) = direction.delta();
            assert_eq!(Direction::from_delta(row_change, column_change), Some(direction));
        }
        assert_eq!(Direction::from_delta(2, 0), None);
    }

    #[test]
    fn ranked_candidates_start_with_the_direct_step() {
        for row_offset in -2..=2 {
            for column_offset in -2..=2 {
                let ranked = Direction::ranked_toward(row_offset, column_offset);
                assert_eq!(ranked[0], Direction::toward(row_offset, column_offset));
            }
        }
    }

    #[test]
    fn ranked_candidates_are_total_and_stable() {
        let ranked = Direction::ranked_toward(-2, 1);
        assert_eq!(
            ranked,
            [
                Direction::NorthEast,
                Direction::North,
                Direction::East,
                Direction::NorthWest,
                Direction::Stay,
                Direction::West,
                Direction::SouthEast,
                Direction::South,
                Direction::SouthWest,
            ]
        );
        assert_eq!(ranked, Direction::ranked_toward(-2, 1));
    }

    #[test]
    fn straight_offset_ties_break_in_enumeration_order() {
        let ranked = Direction::ranked_toward(-2, 0);
        assert_eq!(&ranked[..3], &[Direction::North, Direction::NorthEast, Direction::NorthWest]);
    }

    #[test]
    fn serialized_names_match_display_names() {
        for direction in Direction::ALL {
            let json = serde_json::to_string(&direction).expect("serialize");
            assert_eq!(json, format!("\"{}\"", direction.name()));
            let parsed: Direction = serde_json::from_str(&json).expect("deserialize");
            assert_eq!(parsed, direction);
        }
        assert!(serde_json::from_str::<Direction>("\"NORTH_WEST\"").is_err());
    }

    #[test]
    fn random_never_picks_stay_and_is_seed_stable() {
        let mut left = ChaCha8Rng::seed_from_u64(7);
        let mut right = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let direction = Direction::random(&mut left);
            assert_ne!(direction, Direction::Stay);
            assert_eq!(direction, Direction::random(&mut right));
        }
    }
}
