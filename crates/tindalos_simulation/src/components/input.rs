//! Latched input героя (то, что host прочитал в этом frame)

use bevy::prelude::*;

/// Состояние input для одного героя
///
/// - forward/right: оси движения в [-1, 1]
/// - fire_held: зеркало кнопки огня (press → true, release → false)
///
/// fire_held сам по себе ничего не запускает: только разрешает выстрел.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct HeroInput {
    pub forward: f32,
    pub right: f32,
    pub fire_held: bool,
}

impl HeroInput {
    /// Записать оси (NaN/inf → 0, остальное clamp в [-1, 1])
    pub fn set_axes(&mut self, forward: f32, right: f32) {
        self.forward = sanitize_axis(forward);
        self.right = sanitize_axis(right);
    }

    pub fn press_fire(&mut self) {
        self.fire_held = true;
    }

    pub fn release_fire(&mut self) {
        self.fire_held = false;
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        0.0
    }
}
