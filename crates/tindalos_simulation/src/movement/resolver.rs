//! Movement resolver
//!
//! Отображение осей: forward → -Z, right → +X, Y не трогаем.
//! Диагональ (1, 1) не даёт ускорения: направление clamp'ится до длины 1.

use bevy::prelude::*;

use crate::host::{Movable, MoveOutcome};

/// Результат движения за один frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveReport {
    /// Запрошенный displacement (direction × speed × delta)
    pub displacement: Vec3,
    /// Outcome первого sweep'а
    pub outcome: MoveOutcome,
    /// Остаток, отправленный вдоль стены (если был valid blocking hit)
    pub deflection: Option<Vec3>,
}

/// Оси input → направление движения (|dir| ≤ 1)
pub fn movement_direction(forward: f32, right: f32) -> Vec3 {
    let forward = forward.clamp(-1.0, 1.0);
    let right = right.clamp(-1.0, 1.0);

    Vec3::new(right, 0.0, -forward).clamp_length_max(1.0)
}

/// Остаток движения вдоль стены
///
/// Нормаль обрезается до горизонтальной плоскости: наклонные поверхности
/// не должны толкать героя вверх/вниз.
pub fn wall_slide(displacement: Vec3, outcome: &MoveOutcome) -> Vec3 {
    let normal_2d = Vec3::new(outcome.normal.x, 0.0, outcome.normal.z).normalize_or_zero();

    displacement.reject_from_normalized(normal_2d) * (1.0 - outcome.time)
}

/// Двигает героя на direction × speed × delta
///
/// - Нулевой displacement → host не трогаем, возвращаем None
/// - Valid blocking hit → второй sweep с wall_slide остатком
pub fn resolve_move<M: Movable + ?Sized>(
    mover: &mut M,
    direction: Vec3,
    speed: f32,
    delta: f32,
) -> Option<MoveReport> {
    let displacement = direction * speed * delta.max(0.0);

    if displacement.length_squared() <= 0.0 {
        return None;
    }

    let outcome = mover.sweep_move(displacement);

    let deflection = if outcome.is_valid_blocking_hit() {
        let residual = wall_slide(displacement, &outcome);
        if residual.length_squared() > 0.0 {
            mover.sweep_move(residual);
            Some(residual)
        } else {
            None
        }
    } else {
        None
    };

    Some(MoveReport {
        displacement,
        outcome,
        deflection,
    })
}
