//! Hero systems (FixedUpdate)

use bevy::prelude::*;

use super::{tick_hero, HeroFrame};
use crate::components::{
    AnimationParams, ArenaGround, CameraOffset, Health, Hero, HeroConfig, HeroInput, Obstacle,
};
use crate::host::{ArenaHost, CursorRay, ObstacleBox, PlaySoundRequest, SimClock};
use crate::shooting::{FireController, ProjectileSpawnRequest};

/// Система: tick всех героев
///
/// ArenaHost собирается на каждого героя поверх его Transform и снимка
/// препятствий. Спавны и звуки, накопленные хостом, уходят в events.
pub fn tick_heroes(
    time: Res<Time>,
    cursor: Res<CursorRay>,
    ground: Res<ArenaGround>,
    obstacles: Query<(&Obstacle, &Transform), Without<Hero>>,
    mut heroes: Query<
        (
            Entity,
            &HeroConfig,
            &HeroInput,
            &Health,
            &mut FireController,
            &mut AnimationParams,
            &mut CameraOffset,
            &mut Transform,
        ),
        With<Hero>,
    >,
    mut projectile_events: EventWriter<ProjectileSpawnRequest>,
    mut sound_events: EventWriter<PlaySoundRequest>,
) {
    let clock = SimClock::from_time(&time);

    let boxes: Vec<ObstacleBox> = obstacles
        .iter()
        .map(|(obstacle, transform)| ObstacleBox::from_obstacle(obstacle, transform.translation))
        .collect();

    for (entity, config, input, health, mut fire, mut anim, mut camera, mut transform) in heroes.iter_mut() {
        let mut host = ArenaHost::new(&mut transform, config.collision_radius, &boxes)
            .with_cursor(cursor.ray)
            .with_ground(Some(ground.height));

        let frame = HeroFrame {
            config,
            input,
            health,
            fire: &mut fire,
            anim: &mut anim,
            camera: &mut camera,
        };

        let report = tick_hero(frame, clock, &mut host);

        for spawn in std::mem::take(&mut host.spawns) {
            projectile_events.write(ProjectileSpawnRequest {
                shooter: entity,
                kind: spawn.kind,
                location: spawn.location,
                rotation: spawn.rotation,
            });
        }

        for cue in std::mem::take(&mut host.sounds) {
            sound_events.write(PlaySoundRequest {
                source: entity,
                sound: cue.sound,
                location: cue.location,
            });
        }

        if report.shot.is_some() {
            crate::logger::log(&format!(
                "🔫 {:?} shot #{} dir={:?} at t={:.3}",
                entity, fire.shots_fired, report.fire_direction, clock.now
            ));
        }

        if let Some(movement) = report.movement {
            if movement.outcome.start_penetrating {
                crate::logger::log(&format!(
                    "{:?} started inside obstacle (depth {:.3}), move allowed",
                    entity, movement.outcome.penetration_depth
                ));
            }
        }
    }
}
