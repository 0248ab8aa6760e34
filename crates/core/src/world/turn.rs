//! One simulation turn: every living unit attacks or moves, in placement order.

use rand_chacha::rand_core::Rng;
use tracing::{debug, info};

use super::*;

impl World {
    /// Gives each living unit one action, then checks whether a faction has
    /// been wiped out. Does nothing once the world is inactive.
    pub fn advance_turn(&mut self) {
        if self.state == SimState::Inactive {
            return;
        }

        for index in 0..self.turn_order.len() {
            let id = self.turn_order[index];
            let actor = &self.units[id];
            if actor.is_wall() || actor.is_dead() {
                continue;
            }
            // Overwritten by a later placement: still in the order, but nowhere on the grid.
            let Some(pos) = self.locations.get(id).copied() else {
                continue;
            };

            let view = LocalView::extract(&self.grid, &self.units, ATTACK_VIEW_SIZE, pos);
            let attack = actor.attack_where(&view);
            if attack == Direction::Stay {
                let view = LocalView::extract(&self.grid, &self.units, MOVE_VIEW_SIZE, pos);
                let step = actor.choose_move(&view, &self.config, &mut self.rng);
                self.resolve_move(id, pos, step);
            } else {
                self.resolve_attack(id, pos, attack);
            }
        }

        self.turn += 1;
        self.check_active();
    }

    fn resolve_move(&mut self, id: EntityId, pos: Pos, step: Direction) {
        if step == Direction::Stay {
            debug!(unit = %self.label(id), "holding position");
            self.log.push(TurnEvent::Held { unit: id });
            return;
        }

        let to = pos.step(step);
        if self.can_move_onto(to) {
            debug!(unit = %self.label(id), direction = step.name(), "moving");
            self.move_unit(pos, step);
            self.log.push(TurnEvent::Moved { unit: id, direction: step, to });
        } else {
            debug!(unit = %self.label(id), direction = step.name(), "move blocked");
            self.log.push(TurnEvent::MoveBlocked { unit: id, direction: step });
        }
    }

    fn resolve_attack(&mut self, attacker: EntityId, pos: Pos, direction: Direction) {
        let target_pos = pos.step(direction);
        let target = match self.grid.get(target_pos) {
            Some(target) if self.can_be_attacked(target_pos) => target,
            _ => {
                debug!(unit = %self.label(attacker), direction = direction.name(), "attack failed");
                self.log.push(TurnEvent::AttackFailed { attacker, direction });
                return;
            }
        };

        let weapon = self.units[attacker].weapon_strength().max(1);
        let roll = 1 + (self.rng.next_u64() % weapon as u64) as i32;
        let armor = self.units[target].armor_strength();
        let damage = (roll - armor).max(0);
        self.units[target].apply_damage(damage);
        debug!(
            attacker = %self.label(attacker),
            target = %self.label(target),
            roll,
            armor,
            damage,
            "attack landed"
        );
        self.log.push(TurnEvent::Attacked { attacker, target, direction, roll, armor, damage });

        if self.units[target].is_dead() {
            self.kill(target);
            info!(unit = %self.label(target), "unit died");
            self.log.push(TurnEvent::Died { unit: target });
        }
    }

    /// Ends the simulation once the grid holds no living hero or no living
    /// monster.
    fn check_active(&mut self) {
        if self.state == SimState::Inactive {
            return;
        }
        let mut heroes_alive = false;
        let mut monsters_alive = false;
        for cell in self.grid.cells.iter().flatten() {
            let unit = &self.units[*cell];
            if !unit.is_alive() {
                continue;
            }
            match unit.faction() {
                Some(Faction::Hero) => heroes_alive = true,
                Some(Faction::Monster) => monsters_alive = true,
                None => {}
            }
        }

        let outcome = match (heroes_alive, monsters_alive) {
            (true, true) => return,
            (true, false) => Outcome::HeroesWin,
            (false, true) => Outcome::MonstersWin,
            (false, false) => Outcome::MutualDestruction,
        };
        self.state = SimState::Inactive;
        self.outcome = Some(outcome);
        info!(turn = self.turn, ?outcome, "simulation ended");
        self.log.push(TurnEvent::SimulationEnded { turn: self.turn, outcome });
    }
}
