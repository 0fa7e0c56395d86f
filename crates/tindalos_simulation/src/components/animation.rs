//! Выходы для animation graph и камеры хоста

use bevy::prelude::*;

/// Параметры для locomotion blend (читает host animation graph)
///
/// - forward/slide: blend weights в [-1, 1]
/// - is_dead: one-way latch, обратно в false не сбрасывается
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct AnimationParams {
    pub forward: f32,
    pub slide: f32,
    pub is_dead: bool,
}

impl AnimationParams {
    pub fn set_blend(&mut self, forward: f32, slide: f32) {
        self.forward = forward;
        self.slide = slide;
    }

    pub fn latch_dead(&mut self) {
        self.is_dead = true;
    }
}

/// Смещение камеры в сторону курсора (world space, горизонтальное)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CameraOffset(pub Vec3);
