//! Combat events

use bevy::prelude::*;

/// Event: host → ECS, изменить здоровье героя
///
/// delta < 0 урон, delta > 0 лечение. Источник урона ECS не интересует:
/// projectile hit, hazard или скрипт, всё приходит одним событием.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthDelta {
    pub target: Entity,
    pub delta: i32,
}

/// Event: герой умер (Health перешёл через 0 вниз)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDied {
    pub entity: Entity,
    /// Здоровье после смертельного delta (может быть < 0)
    pub health: i32,
}

/// Event: мёртвого героя вылечили выше 0
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityRevived {
    pub entity: Entity,
    pub health: i32,
}
