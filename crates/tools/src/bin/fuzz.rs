use anyhow::{Result, ensure};
use clap::Parser;
use mvh_core::{
    Direction, Entity, EntityId, FallbackOrder, IdCounter, Pos, SimConfig, WeaponType, World,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 200)]
    worlds: u32,
    #[arg(short, long, default_value_t = 300)]
    turns: u64,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn roll(rng: &mut ChaCha8Rng, low: u64, high: u64) -> u64 {
    low + rng.next_u64() % (high - low + 1)
}

fn random_world(rng: &mut ChaCha8Rng, seed: u64) -> World {
    let rows = roll(rng, 1, 12) as usize;
    let columns = roll(rng, 1, 12) as usize;
    let config = SimConfig {
        hero_default_step: choose(rng, &Direction::ALL),
        monster_default_step: choose(rng, &Direction::ALL),
        fallback: choose(
            rng,
            &[FallbackOrder::PreferredThenRandom, FallbackOrder::RandomThenPreferred],
        ),
    };
    let mut world = World::with_config(rows, columns, seed, config);
    let mut ids = IdCounter::new();

    let placements = roll(rng, 0, (rows * columns) as u64);
    for _ in 0..placements {
        let row = roll(rng, 0, rows as u64 - 1) as usize;
        let column = roll(rng, 0, columns as u64 - 1) as usize;
        let health = roll(rng, 0, 15) as i32;
        let entity = match rng.next_u64() % 5 {
            0 => Entity::wall(&mut ids),
            1 | 2 => Entity::hero(
                &mut ids,
                health,
                'H',
                roll(rng, 1, 6) as i32,
                roll(rng, 0, 3) as i32,
            ),
            _ => Entity::monster(
                &mut ids,
                health,
                'M',
                choose(rng, &[WeaponType::Axe, WeaponType::Sword, WeaponType::Club]),
            ),
        };
        world.place(row, column, entity);
    }
    world
}

fn check_invariants(world: &World, order: &[EntityId]) -> Result<()> {
    let current: Vec<EntityId> = world.turn_order().map(|(id, _)| id).collect();
    ensure!(current == order, "Invariant failed: turn order changed");

    for (id, entity) in world.turn_order() {
        ensure!(entity.health() >= 0, "Invariant failed: negative health");
        if let Some(pos) = world.location_of(id) {
            ensure!(
                world.id_at(pos) == Some(id),
                "Invariant failed: location index disagrees with grid"
            );
        }
    }

    for row in 0..world.rows() {
        for column in 0..world.columns() {
            let pos = Pos::new(row as i32, column as i32);
            let Some(id) = world.id_at(pos) else {
                continue;
            };
            let Some(entity) = world.entity(id) else {
                continue;
            };
            if entity.is_alive() {
                ensure!(
                    world.location_of(id) == Some(pos),
                    "Invariant failed: living unit on grid missing from location index"
                );
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!(
        "Starting Fuzz harness on seed {} for {} worlds of up to {} turns...",
        args.seed, args.worlds, args.turns
    );
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut finished = 0u32;

    for index in 0..args.worlds {
        let world_seed = rng.next_u64();
        let mut world = random_world(&mut rng, world_seed);
        let order: Vec<EntityId> = world.turn_order().map(|(id, _)| id).collect();
        check_invariants(&world, &order)?;

        let mut was_inactive = !world.is_active();
        while world.turn() < args.turns && world.is_active() {
            world.advance_turn();
            check_invariants(&world, &order)?;
            ensure!(!(was_inactive && world.is_active()), "Invariant failed: world reactivated");
            was_inactive = !world.is_active();
        }

        if world.outcome().is_some() {
            finished += 1;
        }
        if index % 50 == 0 {
            println!("world {index}: {} turns, outcome {:?}", world.turn(), world.outcome());
        }
    }

    println!(
        "Fuzzing completed successfully: {finished}/{} worlds reached an outcome.",
        args.worlds
    );
    Ok(())
}
