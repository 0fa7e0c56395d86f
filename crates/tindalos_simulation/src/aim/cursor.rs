//! Курсор → направление огня, поворот героя, смещение камеры

use bevy::prelude::*;

/// Горизонтальное направление от героя к точке под курсором (unit или ZERO)
///
/// Высота цели игнорируется: стреляем в плоскости героя.
pub fn fire_direction(from: Vec3, target: Vec3) -> Vec3 {
    Vec3::new(target.x - from.x, 0.0, target.z - from.z).normalize_or_zero()
}

/// Поворот вокруг Y, при котором local -Z смотрит вдоль `direction`
///
/// None для нулевого (или чисто вертикального) направления.
pub fn facing_rotation(direction: Vec3) -> Option<Quat> {
    let flat = Vec3::new(direction.x, 0.0, direction.z);
    if flat.length_squared() <= 0.0 {
        return None;
    }

    let yaw = f32::atan2(-flat.x, -flat.z);
    Some(Quat::from_rotation_y(yaw))
}

/// Смещение камеры к курсору: (hit на высоте героя − позиция) / divisor
///
/// divisor <= 0 → без смещения.
pub fn camera_offset(position: Vec3, cursor_hit: Vec3, divisor: f32) -> Vec3 {
    if divisor <= 0.0 {
        return Vec3::ZERO;
    }

    let projected = Vec3::new(cursor_hit.x, position.y, cursor_hit.z);
    (projected - position) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fire_direction_ignores_height() {
        let dir = fire_direction(Vec3::new(0.0, 0.9, 0.0), Vec3::new(3.0, 0.0, 4.0));

        assert_eq!(dir.y, 0.0);
        assert!((dir - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_fire_direction_zero_when_target_straight_below() {
        let dir = fire_direction(Vec3::new(1.0, 0.9, 2.0), Vec3::new(1.0, 0.0, 2.0));
        assert_eq!(dir, Vec3::ZERO);
    }

    #[test]
    fn test_facing_rotation_maps_forward() {
        for direction in [Vec3::X, Vec3::NEG_X, Vec3::Z, Vec3::NEG_Z, Vec3::new(1.0, 0.0, -1.0).normalize()] {
            let rotation = facing_rotation(direction).unwrap();
            let forward = rotation * Vec3::NEG_Z;

            assert!((forward - direction).length() < 1e-5, "{:?} → {:?}", direction, forward);
        }
    }

    #[test]
    fn test_facing_rotation_none_for_zero() {
        assert!(facing_rotation(Vec3::ZERO).is_none());
        assert!(facing_rotation(Vec3::Y).is_none());
    }

    #[test]
    fn test_camera_offset() {
        let offset = camera_offset(Vec3::new(1.0, 0.9, 1.0), Vec3::new(9.0, 0.0, -3.0), 4.0);
        assert!((offset - Vec3::new(2.0, 0.0, -1.0)).length() < 1e-6);

        assert_eq!(camera_offset(Vec3::ZERO, Vec3::X, 0.0), Vec3::ZERO);
    }
}
