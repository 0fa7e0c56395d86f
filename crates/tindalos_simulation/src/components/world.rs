//! Статическая геометрия арены: Obstacle, CollisionChannel

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Канал коллизий (фильтр для cursor raycast)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum CollisionChannel {
    /// Стены, пол уровня
    WorldStatic,
    /// Всё, что должно ловить курсор
    #[default]
    WorldDynamic,
}

/// Препятствие (axis-aligned box вокруг Transform.translation)
///
/// Блокирует движение героев всегда, курсор: только на своём канале.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
#[require(Transform)]
pub struct Obstacle {
    pub half_extents: Vec3,
    pub channel: CollisionChannel,
}

impl Obstacle {
    pub fn wall(half_extents: Vec3) -> Self {
        Self {
            half_extents,
            channel: CollisionChannel::WorldStatic,
        }
    }

    pub fn with_channel(mut self, channel: CollisionChannel) -> Self {
        self.channel = channel;
        self
    }
}

/// Высота пола арены (курсор всегда попадает в пол, если луч идёт вниз)
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct ArenaGround {
    pub height: f32,
}
