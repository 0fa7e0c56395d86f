//! Геометрия для headless host: отрезок/луч против axis-aligned boxes
//!
//! Slab test по трём осям. Нормаль: грань, через которую отрезок вошёл в box.
//! Круг героя в горизонтальной плоскости аппроксимируется box'ом,
//! расширенным на радиус по X/Z (углы чуть "квадратнее" настоящего Минковского).

use bevy::math::Ray3d;
use bevy::prelude::*;

use super::MoveOutcome;

/// Пересечение отрезка `origin → origin + delta` с box'ом
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHit {
    /// Доля delta до входа в box, [0, 1]
    pub time: f32,
    pub normal: Vec3,
    /// origin строго внутри box'а
    pub inside: bool,
    /// Глубина до ближайшей грани (только для inside)
    pub depth: f32,
}

const AXES: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

pub fn segment_vs_box(origin: Vec3, delta: Vec3, min: Vec3, max: Vec3) -> Option<BoxHit> {
    if origin.cmpgt(min).all() && origin.cmplt(max).all() {
        return Some(inside_hit(origin, min, max, &[0, 1, 2]));
    }

    let mut t_enter = f32::NEG_INFINITY;
    let mut t_exit = 1.0_f32;
    let mut normal = Vec3::ZERO;

    for (axis, unit) in AXES.iter().enumerate() {
        let o = origin[axis];
        let d = delta[axis];

        if d.abs() <= f32::EPSILON {
            // Параллельно slab'у: либо всегда внутри по этой оси, либо мимо
            if o < min[axis] || o > max[axis] {
                return None;
            }
            continue;
        }

        let t_min = (min[axis] - o) / d;
        let t_max = (max[axis] - o) / d;

        // Входим через min-грань при d > 0, через max-грань при d < 0
        let (near, far, face) = if d > 0.0 {
            (t_min, t_max, -*unit)
        } else {
            (t_max, t_min, *unit)
        };

        if near > t_enter {
            t_enter = near;
            normal = face;
        }
        t_exit = t_exit.min(far);

        if t_enter > t_exit {
            return None;
        }
    }

    // t_exit <= 0: box позади (или стоим на грани и уходим от неё)
    if t_exit <= 0.0 || t_enter > 1.0 {
        return None;
    }

    Some(BoxHit {
        time: t_enter.max(0.0),
        normal,
        inside: false,
        depth: 0.0,
    })
}

fn inside_hit(origin: Vec3, min: Vec3, max: Vec3, axes: &[usize]) -> BoxHit {
    let to_min = origin - min;
    let to_max = max - origin;

    let mut depth = f32::INFINITY;
    let mut normal = Vec3::ZERO;
    for &axis in axes {
        let unit = AXES[axis];
        if to_min[axis] < depth {
            depth = to_min[axis];
            normal = -unit;
        }
        if to_max[axis] < depth {
            depth = to_max[axis];
            normal = unit;
        }
    }

    BoxHit {
        time: 0.0,
        normal,
        inside: true,
        depth,
    }
}

/// Sweep круга радиуса `radius` (горизонтальная плоскость) против набора boxes
///
/// Возвращает earliest hit. Penetration (старт внутри) имеет приоритет:
/// про него хост должен знать даже если где-то дальше есть обычный hit.
pub fn sweep_circle<I>(origin: Vec3, delta: Vec3, radius: f32, boxes: I) -> MoveOutcome
where
    I: IntoIterator<Item = (Vec3, Vec3)>,
{
    let inflate = Vec3::new(radius, 0.0, radius);
    let mut earliest: Option<BoxHit> = None;
    let mut deepest: Option<BoxHit> = None;

    for (min, max) in boxes {
        let (min, max) = (min - inflate, max + inflate);
        let Some(mut hit) = segment_vs_box(origin, delta, min, max) else {
            continue;
        };

        if hit.inside {
            // Круг выталкивается только по X/Z: вертикальная нормаль не даёт выхода
            hit = inside_hit(origin, min, max, &[0, 2]);
            if deepest.is_none_or(|d| hit.depth > d.depth) {
                deepest = Some(hit);
            }
        } else if earliest.is_none_or(|e| hit.time < e.time) {
            earliest = Some(hit);
        }
    }

    match (deepest, earliest) {
        (Some(pen), _) => MoveOutcome::penetrating(pen.normal, pen.depth),
        (None, Some(hit)) => MoveOutcome::blocked(hit.time, hit.normal),
        (None, None) => MoveOutcome::CLEAR,
    }
}

/// Луч против boxes + горизонтального пола, nearest hit point
pub fn raycast_boxes<I>(ray: Ray3d, max_distance: f32, ground_height: Option<f32>, boxes: I) -> Option<Vec3>
where
    I: IntoIterator<Item = (Vec3, Vec3)>,
{
    let delta = *ray.direction * max_distance;
    let mut best: Option<f32> = None;

    for (min, max) in boxes {
        if let Some(hit) = segment_vs_box(ray.origin, delta, min, max) {
            if best.is_none_or(|t| hit.time < t) {
                best = Some(hit.time);
            }
        }
    }

    if let Some(height) = ground_height {
        if delta.y.abs() > f32::EPSILON {
            let t = (height - ray.origin.y) / delta.y;
            if (0.0..=1.0).contains(&t) && best.is_none_or(|b| t < b) {
                best = Some(t);
            }
        }
    }

    best.map(|t| ray.origin + delta * t)
}
