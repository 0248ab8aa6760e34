//! Console narration of structured turn events.

use mvh_core::{Outcome, TurnEvent, World};

pub fn narrate(world: &World, event: &TurnEvent) -> String {
    match event {
        TurnEvent::Attacked { attacker, target, direction, roll, armor, damage } => format!(
            "{} attacking {} in direction {}\n{} attacked {} for {roll} damage against {armor} defense for {damage}",
            world.label(*attacker),
            world.label(*target),
            direction.name(),
            world.label(*attacker),
            world.label(*target),
        ),
        TurnEvent::AttackFailed { attacker, direction } => format!(
            "{} tried to attack {} but nothing could be hit",
            world.label(*attacker),
            direction.name()
        ),
        TurnEvent::Died { unit } => format!("{} died!", world.label(*unit)),
        TurnEvent::Moved { unit, direction, .. } => {
            format!("{} moving {}", world.label(*unit), direction.name())
        }
        TurnEvent::MoveBlocked { unit, direction } => format!(
            "{} tried to move {} somewhere it could not!",
            world.label(*unit),
            direction.name()
        ),
        TurnEvent::Held { unit } => format!("{} holding position", world.label(*unit)),
        TurnEvent::SimulationEnded { turn, outcome } => {
            format!("Simulation ended after {turn} turns: {}", outcome_text(*outcome))
        }
    }
}

pub fn outcome_text(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::HeroesWin => "heroes win",
        Outcome::MonstersWin => "monsters win",
        Outcome::MutualDestruction => "nobody is left standing",
    }
}
