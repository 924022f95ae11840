//! Headless demo run
//!
//! Seeds a world, spawns the standard cast, and lets a small autopilot play
//! for a while: haul cargo between the planets, shoot at whatever alien is
//! closest. Useful for watching the simulation via logs and as an end-to-end
//! smoke test of the collision core.

use glam::Vec2;

use space_defence::collision::Rect;
use space_defence::consts::*;
use space_defence::entities::{Alien, Asteroid, Planet, Ship, Supply};
use space_defence::sim::{EntityKind, PlanetKind, TickInput, World};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xDEFECE);
    log::info!("space defence demo, seed {seed}");

    let bounds = Rect::new(0, 0, FIELD_WIDTH, FIELD_HEIGHT);
    let mut world = World::new(seed, bounds);

    let ship_id = world.ctx.next_entity_id();
    world.spawn(Box::new(Ship::new(ship_id, bounds.center())));

    let pickup_id = world.ctx.next_entity_id();
    world.spawn(Box::new(Planet::new(
        pickup_id,
        Vec2::new(200.0, 200.0),
        PlanetKind::Pickup,
    )));
    let dropoff_id = world.ctx.next_entity_id();
    world.spawn(Box::new(Planet::new(
        dropoff_id,
        Vec2::new(1080.0, 520.0),
        PlanetKind::Dropoff,
    )));

    let asteroid_id = world.ctx.next_entity_id();
    world.spawn(Box::new(Asteroid::new(asteroid_id, Vec2::new(640.0, 120.0))));

    let alien = Alien::spawn(&mut world.ctx);
    world.spawn(Box::new(alien));
    let supply = Supply::spawn(&mut world.ctx);
    world.spawn(Box::new(supply));

    // One minute of simulated time
    let ticks = (60.0 / SIM_DT) as u32;
    for tick in 0..ticks {
        let input = autopilot(&world);
        world.tick(&input, SIM_DT);

        if world.ctx.game_over {
            log::info!("game over after {:.1}s", tick as f32 * SIM_DT);
            break;
        }

        // Keep a supply crate on the field
        if !world
            .entities()
            .iter()
            .any(|entity| entity.kind() == EntityKind::Supply)
        {
            let supply = Supply::spawn(&mut world.ctx);
            world.spawn(Box::new(supply));
        }
    }

    log::info!(
        "final score {}, {} entities live",
        world.ctx.score,
        world.len()
    );
    println!("score: {}", world.ctx.score);
}

/// Steer toward the current cargo objective and fire at the nearest alien.
fn autopilot(world: &World) -> TickInput {
    let player = world.ctx.player_pos;

    let objective = nearest_of(world, player, EntityKind::Supply)
        .or_else(|| nearest_of(world, player, EntityKind::Planet(PlanetKind::Pickup)));
    let steer = objective
        .map(|target| (target - player).normalize_or_zero())
        .unwrap_or(Vec2::ZERO);

    TickInput {
        steer,
        fire_target: nearest_of(world, player, EntityKind::Alien),
    }
}

fn nearest_of(world: &World, from: Vec2, kind: EntityKind) -> Option<Vec2> {
    world
        .entities()
        .iter()
        .filter(|entity| entity.kind() == kind)
        .filter_map(|entity| entity.collider())
        .map(|collider| collider.bounding_box().center())
        .min_by(|a, b| {
            a.distance(from)
                .partial_cmp(&b.distance(from))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
