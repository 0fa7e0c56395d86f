//! Hero domain: per-frame orchestration героя
//!
//! Порядок одного tick (`tick_hero`):
//! 1. cooldown refresh (идёт и у мёртвых)
//! 2. dead gate: мёртвый герой инертен
//! 3. movement: оси → sweep + wall-slide
//! 4. курсор: нет hit'а → aim/fire пропускаются в этом frame
//! 5. aim: fire direction (после движения), blend, camera offset, facing
//! 6. fire: state machine + спавн + звук
//!
//! ECS интеграция: `HeroPlugin` (PreUpdate input → FixedUpdate tick → damage).

pub mod spawn;
pub mod systems;


pub use spawn::*;
pub use systems::*;

use bevy::prelude::*;

use crate::aim::{aim_blend, camera_offset, facing_rotation, fire_direction, AimBlend};
use crate::combat::{apply_health_deltas, sync_dead_markers, EntityDied, EntityRevived, HealthDelta};
use crate::components::{
    AnimationParams, ArenaGround, CameraOffset, CollisionChannel, FacingMode, Health, HeroConfig, HeroInput, Obstacle,
};
use crate::host::{CursorRay, HeroHost, PlaySoundRequest, ProjectileSpawn, SimClock};
use crate::input::{apply_player_input, PlayerInputEvent};
use crate::movement::{movement_direction, resolve_move, MoveReport};
use crate::shooting::{fire_shot, FireController, ProjectileSpawnRequest};

/// Mutable view на состояние одного героя для `tick_hero`
pub struct HeroFrame<'a> {
    pub config: &'a HeroConfig,
    pub input: &'a HeroInput,
    pub health: &'a Health,
    pub fire: &'a mut FireController,
    pub anim: &'a mut AnimationParams,
    pub camera: &'a mut CameraOffset,
}

/// Что произошло за tick (для логов и тестов)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroTickReport {
    /// Герой мёртв, tick пропущен после refresh
    pub skipped_dead: bool,
    pub move_direction: Vec3,
    pub movement: Option<MoveReport>,
    pub cursor_hit: Option<Vec3>,
    pub fire_direction: Vec3,
    pub blend: Option<AimBlend>,
    pub shot: Option<ProjectileSpawn>,
}

/// Один frame героя
pub fn tick_hero<H: HeroHost + ?Sized>(frame: HeroFrame<'_>, clock: SimClock, host: &mut H) -> HeroTickReport {
    let HeroFrame {
        config,
        input,
        health,
        fire,
        anim,
        camera,
    } = frame;

    fire.refresh(clock.now);

    if health.is_dead() {
        anim.latch_dead();
        return HeroTickReport {
            skipped_dead: true,
            ..Default::default()
        };
    }

    let move_direction = movement_direction(input.forward, input.right);
    let movement = resolve_move(&mut *host, move_direction, config.move_speed, clock.delta);

    if config.facing == FacingMode::Movement {
        if let Some(rotation) = facing_rotation(move_direction) {
            host.set_rotation(rotation);
        }
    }

    let mut report = HeroTickReport {
        move_direction,
        movement,
        ..Default::default()
    };

    // Нет viewer'а или hit'а → aim/fire в этом frame не трогаем
    let Some(cursor_hit) = host.hit_under_cursor(config.cursor_channel) else {
        return report;
    };
    report.cursor_hit = Some(cursor_hit);

    let position = host.position();
    let fire_dir = fire_direction(position, cursor_hit);
    report.fire_direction = fire_dir;

    let blend = aim_blend(move_direction, fire_dir);
    anim.set_blend(blend.forward, blend.slide);
    report.blend = Some(blend);

    camera.0 = camera_offset(position, cursor_hit, config.camera_max_offset);

    if config.facing == FacingMode::Aim {
        if let Some(rotation) = facing_rotation(fire_dir) {
            host.set_rotation(rotation);
        }
    }

    report.shot = fire_shot(fire, config, input.fire_held, position, fire_dir, clock, &mut *host);
    report
}

/// Hero Plugin
///
/// Регистрирует события, ресурсы хоста и системы героя.
///
/// Порядок выполнения:
/// - PreUpdate: apply_player_input (host input → HeroInput)
/// - FixedUpdate (64Hz, chain):
///   1. sync_dead_markers: Dead для героев, заспавненных мёртвыми
///   2. tick_heroes: движение, aim, стрельба
///   3. apply_health_deltas: урон/лечение, смерть
pub struct HeroPlugin;

impl Plugin for HeroPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PlayerInputEvent>()
            .add_event::<HealthDelta>()
            .add_event::<EntityDied>()
            .add_event::<EntityRevived>()
            .add_event::<ProjectileSpawnRequest>()
            .add_event::<PlaySoundRequest>();

        app.init_resource::<CursorRay>().init_resource::<ArenaGround>();

        app.register_type::<HeroConfig>()
            .register_type::<HeroInput>()
            .register_type::<Health>()
            .register_type::<FireController>()
            .register_type::<AnimationParams>()
            .register_type::<CameraOffset>()
            .register_type::<Obstacle>()
            .register_type::<CollisionChannel>();

        app.add_systems(PreUpdate, apply_player_input);

        app.add_systems(FixedUpdate, (sync_dead_markers, tick_heroes, apply_health_deltas).chain());
    }
}
