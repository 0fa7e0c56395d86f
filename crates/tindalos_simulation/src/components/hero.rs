//! Hero: персонаж twin-stick шутера и его неизменяемая конфигурация
//!
//! Координаты: Y вверх, forward = -Z, right = +X (Bevy convention).
//! Единицы: метры и секунды.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AnimationParams, CameraOffset, CollisionChannel, Health, HeroInput};
use crate::shooting::FireController;

pub const DEFAULT_HERO_HEALTH: i32 = 10;

/// Hero marker
///
/// Required Components собирают полный набор состояния героя.
/// Health и HeroConfig обычно переопределяются в `spawn_hero`.
#[derive(Component, Debug, Clone, Copy, Default)]
#[require(
    HeroConfig,
    Health,
    HeroInput,
    FireController,
    AnimationParams,
    CameraOffset,
    Transform
)]
pub struct Hero;

/// Куда смотрит герой каждый frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum FacingMode {
    /// Лицом к курсору (стрельба на ходу, боком/задом)
    #[default]
    Aim,
    /// Лицом по направлению движения
    Movement,
}

/// Конфигурация героя (asset-time константы, runtime API изменения нет)
#[derive(Component, Debug, Clone, PartialEq, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct HeroConfig {
    /// Скорость движения (м/с)
    pub move_speed: f32,

    /// Cooldown между выстрелами (секунды)
    pub fire_rate: f32,

    /// Точка спавна projectile в local space героя (-Z = вперёд)
    pub gun_offset: Vec3,

    /// Делитель смещения камеры к курсору
    pub camera_max_offset: f32,

    /// Стартовое здоровье
    pub initial_health: i32,

    /// Радиус коллизии в горизонтальной плоскости (метры)
    pub collision_radius: f32,

    pub facing: FacingMode,

    /// Канал для cursor raycast
    pub cursor_channel: CollisionChannel,

    /// Тип projectile для спавна хостом
    pub projectile_kind: String,

    /// Звук выстрела (None = без звука)
    pub fire_sound: Option<String>,

    /// Звук попадания (None = без звука)
    pub hit_sound: Option<String>,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self::hero_character()
    }
}

impl HeroConfig {
    /// Герой с health-gated смертью и прицеливанием курсором
    pub fn hero_character() -> Self {
        Self {
            move_speed: 5.0,
            fire_rate: 0.12,
            gun_offset: Vec3::new(0.15, 0.5, -1.2),
            camera_max_offset: 4.0,
            initial_health: DEFAULT_HERO_HEALTH,
            collision_radius: 0.4,
            facing: FacingMode::Aim,
            cursor_channel: CollisionChannel::WorldDynamic,
            projectile_kind: "hero_projectile".to_string(),
            fire_sound: Some("audio/m4a1_single.ogg".to_string()),
            hit_sound: Some("audio/classic_hurt.ogg".to_string()),
        }
    }

    /// Классический twin-stick pawn: быстрее, стреляет чаще, смотрит по ходу движения
    pub fn twin_stick_pawn() -> Self {
        Self {
            move_speed: 10.0,
            fire_rate: 0.1,
            gun_offset: Vec3::new(0.0, 0.0, -0.9),
            facing: FacingMode::Movement,
            projectile_kind: "twin_stick_projectile".to_string(),
            fire_sound: Some("audio/twin_stick_fire.ogg".to_string()),
            hit_sound: None,
            ..Self::hero_character()
        }
    }
}
