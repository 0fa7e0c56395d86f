//! Здоровье и смерть героя: Health, Dead

use bevy::prelude::*;

/// Здоровье героя
///
/// Пола нет: current может уйти в минус. Смерть: строго `current <= 0`,
/// отдельного флага не храним, он всегда выводится из current.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: i32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(super::hero::DEFAULT_HERO_HEALTH)
    }
}

impl Health {
    pub fn new(current: i32) -> Self {
        Self { current }
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Signed delta: отрицательный = урон, положительный = лечение
    pub fn apply_delta(&mut self, delta: i32) {
        self.current = self.current.saturating_add(delta);
    }
}

/// Компонент-маркер: герой мертв (Health <= 0)
///
/// Вешается/снимается системой `apply_health_deltas`,
/// героям, заспавненным с Health <= 0, вешает `sync_dead_markers`.
/// Мертвый герой не двигается, не целится и не стреляет.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Dead;
