//! Headless симуляция Tindalos
//!
//! Один герой в арене со стенами, input из seeded скрипта.
//! Использование: tindalos_simulation [seed] [ticks]

use bevy::prelude::*;
use tindalos_simulation::hero::HERO_SPAWN_HEIGHT;
use tindalos_simulation::*;

const ARENA_HALF_SIZE: f32 = 10.0;

fn main() {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse::<u64>().ok()).unwrap_or(42);
    let ticks = args.next().and_then(|s| s.parse::<u32>().ok()).unwrap_or(1000);

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin, ScriptedInputPlugin))
        .insert_resource(ScriptedInput {
            arena_half_size: ARENA_HALF_SIZE,
            ..Default::default()
        })
        .add_systems(FixedPostUpdate, log_projectile_requests);

    log_info(&format!("Starting Tindalos headless simulation (seed: {}, ticks: {})", seed, ticks));

    let hero = {
        let world = app.world_mut();
        let hero = {
            let mut commands = world.commands();
            spawn_arena(&mut commands, ARENA_HALF_SIZE);
            spawn_hero(&mut commands, Vec3::new(0.0, HERO_SPAWN_HEIGHT, 0.0), HeroConfig::hero_character())
        };
        world.flush();
        hero
    };

    for tick in 0..ticks {
        app.update();

        if tick % 100 == 0 {
            let world = app.world();
            let (Some(transform), Some(fire)) = (world.get::<Transform>(hero), world.get::<FireController>(hero)) else {
                log_error("Hero entity disappeared");
                break;
            };
            log_info(&format!(
                "Tick {}: hero at ({:.2}, {:.2}), shots fired: {}",
                tick, transform.translation.x, transform.translation.z, fire.shots_fired
            ));
        }
    }

    log_info("Simulation complete!");
}

fn log_projectile_requests(mut requests: EventReader<ProjectileSpawnRequest>) {
    for request in requests.read() {
        tindalos_simulation::log(&format!("projectile '{}' at {:?}", request.kind, request.location));
    }
}
