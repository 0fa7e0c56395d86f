//! Host capabilities: всё, что герой просит у окружения
//!
//! Core логика (movement/aim/shooting/combat) не знает ни про ECS, ни про движок.
//! Она работает через узкий набор capability traits:
//! - `Movable`: позиция, sweep move, поворот
//! - `Raycastable`: точка под курсором
//! - `Spawnable`: fire-and-forget спавн projectile
//! - `SoundPlayer`: best-effort звук в точке
//! Плюс `SimClock`: детерминированное время вместо callback таймеров.
//!
//! `ArenaHost`: headless реализация поверх ECS данных (Transform + Obstacle).

use bevy::math::Ray3d;
use bevy::prelude::*;

use crate::components::CollisionChannel;

pub mod arena;
pub mod sweep;

pub use arena::{ArenaHost, ObstacleBox};
pub use sweep::{raycast_boxes, segment_vs_box, sweep_circle, BoxHit};

/// Результат sweep move
///
/// - blocking_hit: движение упёрлось во что-то
/// - time: доля пройденного displacement в [0, 1]
/// - normal: нормаль поверхности в точке контакта
/// - start_penetrating: начали внутри препятствия (depth: глубина)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveOutcome {
    pub blocking_hit: bool,
    pub normal: Vec3,
    pub time: f32,
    pub penetration_depth: f32,
    pub start_penetrating: bool,
}

impl MoveOutcome {
    /// Движение прошло полностью
    pub const CLEAR: Self = Self {
        blocking_hit: false,
        normal: Vec3::ZERO,
        time: 1.0,
        penetration_depth: 0.0,
        start_penetrating: false,
    };

    pub fn blocked(time: f32, normal: Vec3) -> Self {
        Self {
            blocking_hit: true,
            normal,
            time,
            penetration_depth: 0.0,
            start_penetrating: false,
        }
    }

    pub fn penetrating(normal: Vec3, depth: f32) -> Self {
        Self {
            blocking_hit: true,
            normal,
            time: 0.0,
            penetration_depth: depth,
            start_penetrating: true,
        }
    }

    /// Только такие hit'ы дают wall-slide (старт внутри стены: не считается)
    pub fn is_valid_blocking_hit(&self) -> bool {
        self.blocking_hit && !self.start_penetrating
    }
}

impl Default for MoveOutcome {
    fn default() -> Self {
        Self::CLEAR
    }
}

/// Запрос на спавн projectile (fire-and-forget, ссылку не храним)
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectileSpawn {
    /// Тип projectile (host решает, что именно спавнить)
    pub kind: String,
    pub location: Vec3,
    pub rotation: Quat,
}

/// Запрос на звук в точке
#[derive(Debug, Clone, PartialEq)]
pub struct SoundCue {
    pub sound: String,
    pub location: Vec3,
}

/// Время симуляции для одного tick
///
/// now: абсолютное время (секунды от старта), delta: длительность frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimClock {
    pub now: f64,
    pub delta: f32,
}

impl SimClock {
    pub fn new(now: f64, delta: f32) -> Self {
        Self { now, delta }
    }

    pub fn from_time(time: &Time) -> Self {
        Self::new(time.elapsed_secs_f64(), time.delta_secs())
    }
}

pub trait Movable {
    fn position(&self) -> Vec3;

    /// Сдвинуть на delta со sweep'ом (останавливается на первом препятствии)
    fn sweep_move(&mut self, delta: Vec3) -> MoveOutcome;

    fn set_rotation(&mut self, rotation: Quat);
}

pub trait Raycastable {
    /// Точка пересечения луча из-под курсора (None = нет viewer'а или нет hit'а)
    fn hit_under_cursor(&self, channel: CollisionChannel) -> Option<Vec3>;
}

pub trait Spawnable {
    fn spawn_projectile(&mut self, spawn: ProjectileSpawn);
}

pub trait SoundPlayer {
    fn play_sound(&mut self, sound: &str, location: Vec3);
}

/// Полный набор capabilities для `tick_hero`
pub trait HeroHost: Movable + Raycastable + Spawnable + SoundPlayer {}

impl<T: Movable + Raycastable + Spawnable + SoundPlayer> HeroHost for T {}

impl SoundPlayer for Vec<SoundCue> {
    fn play_sound(&mut self, sound: &str, location: Vec3) {
        self.push(SoundCue {
            sound: sound.to_string(),
            location,
        });
    }
}

/// Луч из-под курсора (viewer хоста)
///
/// `ray == None`: viewer'а нет (окно без курсора, headless без скрипта).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorRay {
    pub ray: Option<Ray3d>,
}

impl CursorRay {
    /// Луч сверху вниз точно в точку на полу (удобно для тестов и скриптов)
    pub fn looking_down_at(point: Vec3) -> Self {
        Self {
            ray: Some(Ray3d {
                origin: point + Vec3::Y * 50.0,
                direction: Dir3::NEG_Y,
            }),
        }
    }
}

/// Event: ECS → host, проиграть звук
#[derive(Event, Debug, Clone, PartialEq)]
pub struct PlaySoundRequest {
    pub source: Entity,
    pub sound: String,
    pub location: Vec3,
}
