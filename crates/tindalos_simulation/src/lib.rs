//! Tindalos Simulation Core
//!
//! Twin-stick герой на Bevy 0.16: движение со wall-slide, прицеливание курсором,
//! стрельба с cooldown, здоровье и смерть.
//!
//! Два слоя:
//! - Core: чистые данные + функции поверх capability traits (`host`),
//!   без ECS и без движка (movement, aim, shooting, combat, hero::tick_hero)
//! - ECS: `SimulationPlugin` играет роль хоста в headless детерминированном App

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

// Публичные модули
pub mod aim;
pub mod combat;
pub mod components;
pub mod hero;
pub mod host;
pub mod input;
pub mod logger;
pub mod movement;
pub mod shooting;

// Re-export базовых типов для удобства
pub use combat::{EntityDied, EntityRevived, HealthDelta};
pub use components::*;
pub use hero::{spawn_arena, spawn_hero, tick_hero, HeroFrame, HeroPlugin, HeroTickReport};
pub use host::{CursorRay, PlaySoundRequest, SimClock};
pub use input::{PlayerInputEvent, ScriptedInput, ScriptedInputPlugin};
pub use logger::*;
pub use shooting::{FireController, FireState, ProjectileSpawnRequest};

/// Fixed timestep симуляции: 64Hz (ровно 15.625ms, без накопления ошибки)
pub const FIXED_TIMESTEP: Duration = Duration::from_micros(15_625);

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        // Детерминистичный RNG (seed по умолчанию, если App его ещё не задал)
        if !app.world().contains_resource::<DeterministicRng>() {
            app.insert_resource(DeterministicRng::new(42));
        }

        app.insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP))
            .add_plugins(HeroPlugin);
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// Время двигается вручную ровно на FIXED_TIMESTEP за `app.update()`:
/// один update = один FixedUpdate tick (кроме самого первого, у него delta = 0).
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(DeterministicRng::new(seed))
        .insert_resource(TimeUpdateStrategy::ManualDuration(FIXED_TIMESTEP))
        .insert_resource(Time::<Fixed>::from_duration(FIXED_TIMESTEP));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    // Сериализуем в байты через Debug (простейший способ)
    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
