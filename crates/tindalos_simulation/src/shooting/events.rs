//! Shooting events

use bevy::prelude::*;

/// Event: ECS → host, заспавнить projectile
///
/// Fire-and-forget: ECS не хранит ссылку на projectile.
/// Полёт, попадание и cleanup: целиком на стороне хоста.
#[derive(Event, Debug, Clone, PartialEq)]
pub struct ProjectileSpawnRequest {
    /// Кто стреляет
    pub shooter: Entity,

    /// Тип projectile из HeroConfig
    pub kind: String,

    /// World space точка спавна (позиция героя + повернутый gun offset)
    pub location: Vec3,

    /// Ориентация projectile (local -Z = направление полёта)
    pub rotation: Quat,
}
