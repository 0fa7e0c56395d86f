//! Health delta: урон/лечение + hit звук
//!
//! Смерть не хранится отдельно, а выводится из `Health::is_dead()`.
//! Снимок до/после нужен системе, чтобы решить: Dead marker, events, latch.

use bevy::prelude::*;

use crate::components::Health;
use crate::host::SoundPlayer;

/// Результат применения одного delta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthChange {
    pub previous: i32,
    pub current: i32,
    pub was_dead: bool,
    pub is_dead: bool,
    pub hit_sound_played: bool,
}

impl HealthChange {
    /// Переход жив → мертв именно этим delta
    pub fn died(&self) -> bool {
        !self.was_dead && self.is_dead
    }

    /// Переход мертв → жив (лечение трупа)
    pub fn revived(&self) -> bool {
        self.was_dead && !self.is_dead
    }
}

/// Применить signed delta к здоровью
///
/// Hit звук играет на любой delta (в том числе лечение), но только если
/// герой был жив ДО применения. Звук в точке `location`.
pub fn apply_health_delta<S>(
    health: &mut Health,
    delta: i32,
    location: Vec3,
    hit_sound: Option<&str>,
    sounds: &mut S,
) -> HealthChange
where
    S: SoundPlayer + ?Sized,
{
    let previous = health.current;
    let was_dead = health.is_dead();

    health.apply_delta(delta);

    let mut hit_sound_played = false;
    if !was_dead {
        if let Some(sound) = hit_sound {
            sounds.play_sound(sound, location);
            hit_sound_played = true;
        }
    }

    HealthChange {
        previous,
        current: health.current,
        was_dead,
        is_dead: health.is_dead(),
        hit_sound_played,
    }
}
