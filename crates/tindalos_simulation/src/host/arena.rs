//! ArenaHost: headless реализация host capabilities
//!
//! Собирается на один tick одного героя:
//! - Transform героя (mutable, сюда пишутся move/rotation)
//! - snapshot препятствий арены
//! - cursor ray (viewer)
//! Спавны и звуки копятся в очередях, ECS система потом превращает их в events.

use bevy::math::Ray3d;
use bevy::prelude::*;

use super::{sweep, Movable, MoveOutcome, ProjectileSpawn, Raycastable, SoundCue, SoundPlayer, Spawnable};
use crate::components::{CollisionChannel, Obstacle};

/// Отступ от стены после blocking hit'а
///
/// Гарантия только одна: герой не заходит за контактную плоскость.
/// Свободный move (без hit'а) может закончиться ближе skin'а к стене.
pub const CONTACT_SKIN: f32 = 1e-3;

/// Дальность cursor raycast (метры)
pub const CURSOR_TRACE_DISTANCE: f32 = 1000.0;

/// Box препятствия в world space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleBox {
    pub min: Vec3,
    pub max: Vec3,
    pub channel: CollisionChannel,
}

impl ObstacleBox {
    pub fn from_obstacle(obstacle: &Obstacle, translation: Vec3) -> Self {
        Self {
            min: translation - obstacle.half_extents,
            max: translation + obstacle.half_extents,
            channel: obstacle.channel,
        }
    }

    fn bounds(&self) -> (Vec3, Vec3) {
        (self.min, self.max)
    }
}

pub struct ArenaHost<'a> {
    pub transform: &'a mut Transform,
    pub radius: f32,
    pub obstacles: &'a [ObstacleBox],
    pub cursor: Option<Ray3d>,
    pub ground_height: Option<f32>,
    pub spawns: Vec<ProjectileSpawn>,
    pub sounds: Vec<SoundCue>,
}

impl<'a> ArenaHost<'a> {
    pub fn new(transform: &'a mut Transform, radius: f32, obstacles: &'a [ObstacleBox]) -> Self {
        Self {
            transform,
            radius,
            obstacles,
            cursor: None,
            ground_height: Some(0.0),
            spawns: Vec::new(),
            sounds: Vec::new(),
        }
    }

    pub fn with_cursor(mut self, cursor: Option<Ray3d>) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_ground(mut self, ground_height: Option<f32>) -> Self {
        self.ground_height = ground_height;
        self
    }
}

impl Movable for ArenaHost<'_> {
    fn position(&self) -> Vec3 {
        self.transform.translation
    }

    fn sweep_move(&mut self, delta: Vec3) -> MoveOutcome {
        let origin = self.transform.translation;
        let outcome = sweep::sweep_circle(
            origin,
            delta,
            self.radius,
            self.obstacles.iter().map(ObstacleBox::bounds),
        );

        if outcome.start_penetrating {
            // Из пересечения выпускаем только наружу (по нормали выталкивания)
            if delta.dot(outcome.normal) > 0.0 {
                self.transform.translation += delta;
            }
        } else if outcome.blocking_hit {
            // Skin считаем по нормали: зазор до стены не тает от кадра к кадру при скольжении
            let approach = -delta.dot(outcome.normal);
            let safe_time = if approach > 0.0 {
                (outcome.time - CONTACT_SKIN / approach).max(0.0)
            } else {
                outcome.time
            };
            self.transform.translation += delta * safe_time;
        } else {
            self.transform.translation += delta;
        }

        outcome
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.transform.rotation = rotation;
    }
}

impl Raycastable for ArenaHost<'_> {
    fn hit_under_cursor(&self, channel: CollisionChannel) -> Option<Vec3> {
        let ray = self.cursor?;
        let boxes = self
            .obstacles
            .iter()
            .filter(|obstacle| obstacle.channel == channel)
            .map(ObstacleBox::bounds);

        sweep::raycast_boxes(ray, CURSOR_TRACE_DISTANCE, self.ground_height, boxes)
    }
}

impl Spawnable for ArenaHost<'_> {
    fn spawn_projectile(&mut self, spawn: ProjectileSpawn) {
        self.spawns.push(spawn);
    }
}

impl SoundPlayer for ArenaHost<'_> {
    fn play_sound(&mut self, sound: &str, location: Vec3) {
        self.sounds.play_sound(sound, location);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::CursorRay;
    use crate::movement::resolve_move;

    fn wall_at_x(x: f32) -> ObstacleBox {
        ObstacleBox::from_obstacle(
            &Obstacle::wall(Vec3::new(0.5, 1.0, 5.0)),
            Vec3::new(x, 1.0, 0.0),
        )
    }

    #[test]
    fn test_clear_move_applies_full_delta() {
        let mut transform = Transform::from_xyz(0.0, 0.9, 0.0);
        let mut host = ArenaHost::new(&mut transform, 0.4, &[]);

        let outcome = host.sweep_move(Vec3::new(1.0, 0.0, -2.0));

        assert_eq!(outcome, MoveOutcome::CLEAR);
        assert_eq!(transform.translation, Vec3::new(1.0, 0.9, -2.0));
    }

    #[test]
    fn test_blocked_move_stops_before_wall() {
        let walls = [wall_at_x(3.0)];
        let mut transform = Transform::from_xyz(0.0, 0.9, 0.0);
        let mut host = ArenaHost::new(&mut transform, 0.4, &walls);

        let outcome = host.sweep_move(Vec3::new(5.0, 0.0, 0.0));

        assert!(outcome.is_valid_blocking_hit());
        assert_eq!(outcome.normal, Vec3::NEG_X);
        // Стена x ∈ [2.5, 3.5], круг радиуса 0.4 → контакт на x = 2.1
        assert!(transform.translation.x < 2.1);
        assert!(transform.translation.x > 2.09);
    }

    #[test]
    fn test_sliding_along_wall_never_crosses_contact_plane() {
        // Длинная стена x ∈ [2.5, 3.5], контакт круга r=0.4 на x = 2.1
        let walls = [ObstacleBox::from_obstacle(
            &Obstacle::wall(Vec3::new(0.5, 1.0, 50.0)),
            Vec3::new(3.0, 1.0, 0.0),
        )];
        let direction = Vec3::new(1.0, 0.0, -1.0).normalize();

        for start in 0..40 {
            let mut transform = Transform::from_xyz(1.5 + start as f32 * 0.015, 0.9, 0.0);

            for frame in 0..300 {
                let mut host = ArenaHost::new(&mut transform, 0.4, &walls);
                resolve_move(&mut host, direction, 5.0, 1.0 / 64.0);

                let x = transform.translation.x;
                assert!(x <= 2.1 + 1e-4, "start {} frame {}: x = {}", start, frame, x);
            }

            // Скользим вдоль стены, а не залипаем
            assert!(transform.translation.z < -10.0, "start {}: {:?}", start, transform.translation);
        }
    }

    #[test]
    fn test_penetrating_move_lets_hero_out() {
        let walls = [wall_at_x(0.0)];
        let mut transform = Transform::from_xyz(0.2, 0.9, 0.0);
        let mut host = ArenaHost::new(&mut transform, 0.4, &walls);

        let outcome = host.sweep_move(Vec3::new(1.0, 0.0, 0.0));

        assert!(outcome.start_penetrating);
        assert!(outcome.penetration_depth > 0.0);
        assert!((transform.translation.x - 1.2).abs() < 1e-5);
    }

    #[test]
    fn test_penetrating_move_deeper_is_held() {
        let walls = [wall_at_x(0.0)];
        let mut transform = Transform::from_xyz(0.2, 0.9, 0.0);

        // Нормаль выталкивания +X: движение вглубь (-X) и вдоль грани не проходят
        for delta in [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.0, 0.0, 0.5)] {
            let mut host = ArenaHost::new(&mut transform, 0.4, &walls);
            let outcome = host.sweep_move(delta);

            assert!(outcome.start_penetrating);
            assert_eq!(outcome.normal, Vec3::X);
            assert_eq!(transform.translation, Vec3::new(0.2, 0.9, 0.0));
        }

        // Наружу с боковой составляющей: проходит целиком
        let mut host = ArenaHost::new(&mut transform, 0.4, &walls);
        host.sweep_move(Vec3::new(1.0, 0.0, 0.3));
        assert!((transform.translation - Vec3::new(1.2, 0.9, 0.3)).length() < 1e-5);
    }

    #[test]
    fn test_cursor_missing_means_no_target() {
        let mut transform = Transform::IDENTITY;
        let host = ArenaHost::new(&mut transform, 0.4, &[]);

        assert!(host.hit_under_cursor(CollisionChannel::WorldDynamic).is_none());
    }

    #[test]
    fn test_cursor_ignores_other_channel() {
        let walls = [wall_at_x(3.0)];
        let mut transform = Transform::IDENTITY;
        let cursor = CursorRay::looking_down_at(Vec3::new(3.0, 0.0, 0.0)).ray;
        let host = ArenaHost::new(&mut transform, 0.4, &walls).with_cursor(cursor);

        // Стена WorldStatic → на WorldDynamic луч проходит до пола
        let dynamic_hit = host.hit_under_cursor(CollisionChannel::WorldDynamic).unwrap();
        assert!(dynamic_hit.y.abs() < 1e-3);

        let static_hit = host.hit_under_cursor(CollisionChannel::WorldStatic).unwrap();
        assert!((static_hit.y - 2.0).abs() < 1e-3);
    }
}
