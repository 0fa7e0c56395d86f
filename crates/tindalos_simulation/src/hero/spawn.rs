//! Spawn helpers: герой и стены арены

use bevy::prelude::*;

use crate::components::{Health, Hero, HeroConfig, Obstacle, Player};

/// Высота центра героя над полом (капсула ~1.8м)
pub const HERO_SPAWN_HEIGHT: f32 = 0.9;

/// Полный набор компонентов героя под управлением игрока
///
/// Остальное (HeroInput, FireController, AnimationParams, CameraOffset)
/// добавляют required components у `Hero`.
pub fn hero_bundle(position: Vec3, config: HeroConfig) -> impl Bundle {
    (
        Hero,
        Player,
        Health::new(config.initial_health),
        config,
        Transform::from_translation(position),
    )
}

pub fn spawn_hero(commands: &mut Commands, position: Vec3, config: HeroConfig) -> Entity {
    let entity = commands.spawn(hero_bundle(position, config)).id();

    crate::logger::log_info(&format!("✅ Hero {:?} spawned at {:?}", entity, position));
    entity
}

/// Четыре стены вокруг квадратной арены [-half, half]² (толщина 1м, высота 2м)
pub fn arena_walls(half_size: f32) -> [(Vec3, Obstacle); 4] {
    let span = half_size + 1.0;
    let along_x = Obstacle::wall(Vec3::new(span, 1.0, 0.5));
    let along_z = Obstacle::wall(Vec3::new(0.5, 1.0, span));

    [
        (Vec3::new(0.0, 1.0, -half_size - 0.5), along_x),
        (Vec3::new(0.0, 1.0, half_size + 0.5), along_x),
        (Vec3::new(-half_size - 0.5, 1.0, 0.0), along_z),
        (Vec3::new(half_size + 0.5, 1.0, 0.0), along_z),
    ]
}

pub fn spawn_obstacle(commands: &mut Commands, position: Vec3, obstacle: Obstacle) -> Entity {
    commands
        .spawn((obstacle, Transform::from_translation(position)))
        .id()
}

pub fn spawn_arena(commands: &mut Commands, half_size: f32) {
    for (position, wall) in arena_walls(half_size) {
        spawn_obstacle(commands, position, wall);
    }
}
