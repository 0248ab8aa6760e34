//! Per-faction attack and movement decisions made from a local view.

use rand_chacha::ChaCha8Rng;

use super::Entity;
use crate::config::{FallbackOrder, SimConfig};
use crate::direction::Direction;
use crate::occupancy::Occupancy;
use crate::types::{Faction, Pos};
use crate::world::LocalView;

impl Entity {
    /// Direction of an adjacent living opponent, or `Stay` if none.
    /// Heroes take the first match scanning top-left to bottom-right, monsters
    /// the reverse.
    pub fn attack_where(&self, view: &LocalView<'_>) -> Direction {
        let Some(faction) = self.faction() else {
            return Direction::Stay;
        };
        let center = view.center();
        faction
            .scan_order()
            .cells(view.size(), view.size())
            .filter(|cell| *cell != center && cell.chebyshev(center) == 1)
            .find(|cell| view.holds_living(*cell, faction.opponent()))
            .and_then(|cell| {
                Direction::from_delta(cell.row - center.row, cell.column - center.column)
            })
            .unwrap_or(Direction::Stay)
    }

    /// Step toward the nearest visible living opponent, or the configured
    /// fallback when nothing is in sight. `Stay` when every option is blocked.
    pub fn choose_move(
        &self,
        view: &LocalView<'_>,
        config: &SimConfig,
        rng: &mut ChaCha8Rng,
    ) -> Direction {
        let Some(faction) = self.faction() else {
            return Direction::Stay;
        };
        let center = view.center();

        if let Some(target) = nearest_opponent(view, faction) {
            let row_offset = target.row - center.row;
            let column_offset = target.column - center.column;
            return Direction::ranked_toward(row_offset, column_offset)
                .into_iter()
                .filter(|direction| *direction != Direction::Stay)
                .find(|direction| view.can_move_onto(center.step(*direction)))
                .unwrap_or(Direction::Stay);
        }

        let preferred = config.default_step(faction);
        let passable = |direction: Direction| {
            direction != Direction::Stay && view.can_move_onto(center.step(direction))
        };
        match config.fallback {
            FallbackOrder::PreferredThenRandom => {
                if passable(preferred) {
                    return preferred;
                }
                let random = Direction::random(rng);
                if passable(random) {
                    return random;
                }
            }
            FallbackOrder::RandomThenPreferred => {
                let random = Direction::random(rng);
                if passable(random) {
                    return random;
                }
                if passable(preferred) {
                    return preferred;
                }
            }
        }
        Direction::Stay
    }
}

/// Closest living opponent by Chebyshev distance; ties go to the faction's
/// scan order.
fn nearest_opponent(view: &LocalView<'_>, faction: Faction) -> Option<Pos> {
    let center = view.center();
    let mut best: Option<(Pos, u32)> = None;
    for cell in faction.scan_order().cells(view.size(), view.size()) {
        if cell == center || !view.holds_living(cell, faction.opponent()) {
            continue;
        }
        let distance = cell.chebyshev(center);
        if best.is_none_or(|(_, best_distance)| distance < best_distance) {
            best = Some((cell, distance));
        }
    }
    best.map(|(cell, _)| cell)
}
