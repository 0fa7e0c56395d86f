//! Locomotion blend: forward/slide из угла между огнём и движением
//!
//! Знак угла: по вертикальной (Y) компоненте cross(fire, move):
//! огонь правее движения → slide < 0, левее → slide > 0.
//! Нет направления огня → угол π/2 (dot = 0), т.е. чистый strafe.

use bevy::prelude::*;

/// Пара blend weights для animation graph, обе в [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AimBlend {
    pub forward: f32,
    pub slide: f32,
}

impl AimBlend {
    pub const IDLE: Self = Self {
        forward: 0.0,
        slide: 0.0,
    };
}

/// Signed угол (радианы) от направления движения к направлению огня
///
/// Нулевой вектор с любой стороны → dot = 0 → π/2.
pub fn signed_aim_angle(move_direction: Vec3, fire_direction: Vec3) -> f32 {
    let move_dir = move_direction.normalize_or_zero();
    let fire_dir = fire_direction.normalize_or_zero();

    // clamp: из-за округления dot может чуть вылезти за [-1, 1] → acos = NaN
    let angle = fire_dir.dot(move_dir).clamp(-1.0, 1.0).acos();

    if fire_dir.cross(move_dir).y > 0.0 {
        -angle
    } else {
        angle
    }
}

/// Движения нет → IDLE, иначе (cos θ, sin θ)
pub fn aim_blend(move_direction: Vec3, fire_direction: Vec3) -> AimBlend {
    if move_direction.length_squared() <= 0.0 {
        return AimBlend::IDLE;
    }

    let angle = signed_aim_angle(move_direction, fire_direction);

    AimBlend {
        forward: angle.cos(),
        slide: angle.sin(),
    }
}
