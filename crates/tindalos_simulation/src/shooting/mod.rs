//! Shooting domain: fire controller и спавн projectile
//!
//! Содержит:
//! - FireController / FireState (cooldown state machine)
//! - ProjectileSpawnRequest (event для хоста)
//! - fire_shot (выстрел: state machine + спавн + звук)

pub mod components;
pub mod events;

pub use components::*;
pub use events::*;

use bevy::prelude::*;

use crate::aim::facing_rotation;
use crate::components::HeroConfig;
use crate::host::{ProjectileSpawn, SimClock, SoundPlayer, Spawnable};

/// Точка спавна: позиция героя + gun offset, повернутый в сторону огня
pub fn spawn_location(position: Vec3, rotation: Quat, gun_offset: Vec3) -> Vec3 {
    position + rotation * gun_offset
}

/// Попытка выстрела за этот frame
///
/// Если state machine разрешила: спавн projectile, звук (если настроен),
/// cooldown уже запущен внутри `try_fire`.
pub fn fire_shot<H>(
    fire: &mut FireController,
    config: &HeroConfig,
    fire_held: bool,
    position: Vec3,
    fire_direction: Vec3,
    clock: SimClock,
    host: &mut H,
) -> Option<ProjectileSpawn>
where
    H: Spawnable + SoundPlayer + ?Sized,
{
    let rotation = facing_rotation(fire_direction)?;

    if !fire.try_fire(fire_held, fire_direction, clock.now, config.fire_rate) {
        return None;
    }

    let spawn = ProjectileSpawn {
        kind: config.projectile_kind.clone(),
        location: spawn_location(position, rotation, config.gun_offset),
        rotation,
    };
    host.spawn_projectile(spawn.clone());

    if let Some(sound) = config.fire_sound.as_deref() {
        host.play_sound(sound, position);
    }

    Some(spawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SoundCue;

    #[derive(Default)]
    struct RecordingHost {
        spawns: Vec<ProjectileSpawn>,
        sounds: Vec<SoundCue>,
    }

    impl Spawnable for RecordingHost {
        fn spawn_projectile(&mut self, spawn: ProjectileSpawn) {
            self.spawns.push(spawn);
        }
    }

    impl SoundPlayer for RecordingHost {
        fn play_sound(&mut self, sound: &str, location: Vec3) {
            self.sounds.play_sound(sound, location);
        }
    }

    #[test]
    fn test_spawn_location_rotates_gun_offset() {
        let config = HeroConfig::hero_character();
        let rotation = facing_rotation(Vec3::X).unwrap();

        let location = spawn_location(Vec3::new(1.0, 0.9, 1.0), rotation, config.gun_offset);

        // Смотрим в +X: 1.2 вперёд → +X, 0.15 вправо → +Z, 0.5 вверх
        let expected = Vec3::new(1.0 + 1.2, 0.9 + 0.5, 1.0 + 0.15);
        assert!((location - expected).length() < 1e-5, "{:?}", location);
    }

    #[test]
    fn test_fire_shot_spawns_and_plays_sound() {
        let config = HeroConfig::hero_character();
        let mut fire = FireController::default();
        let mut host = RecordingHost::default();

        let spawn = fire_shot(&mut fire, &config, true, Vec3::ZERO, Vec3::NEG_Z, SimClock::new(0.5, 0.016), &mut host);

        assert_eq!(spawn.map(|s| s.kind), Some(config.projectile_kind.clone()));
        assert_eq!(host.spawns.len(), 1);
        assert_eq!(host.sounds.len(), 1);
        assert_eq!(host.sounds[0].location, Vec3::ZERO);
        assert!(!fire.is_ready());
    }

    #[test]
    fn test_fire_shot_without_sound() {
        let config = HeroConfig {
            fire_sound: None,
            ..HeroConfig::hero_character()
        };
        let mut fire = FireController::default();
        let mut host = RecordingHost::default();

        fire_shot(&mut fire, &config, true, Vec3::ZERO, Vec3::X, SimClock::default(), &mut host);

        assert_eq!(host.spawns.len(), 1);
        assert!(host.sounds.is_empty());
    }

    #[test]
    fn test_fire_shot_blocked_by_cooldown() {
        let config = HeroConfig::hero_character();
        let mut fire = FireController::default();
        let mut host = RecordingHost::default();

        fire_shot(&mut fire, &config, true, Vec3::ZERO, Vec3::X, SimClock::new(0.0, 0.016), &mut host);
        let second = fire_shot(&mut fire, &config, true, Vec3::ZERO, Vec3::X, SimClock::new(0.05, 0.016), &mut host);

        assert!(second.is_none());
        assert_eq!(host.spawns.len(), 1);
    }

    #[test]
    fn test_fire_shot_zero_direction() {
        let config = HeroConfig::hero_character();
        let mut fire = FireController::default();
        let mut host = RecordingHost::default();

        let spawn = fire_shot(&mut fire, &config, true, Vec3::ZERO, Vec3::ZERO, SimClock::default(), &mut host);

        assert!(spawn.is_none());
        assert!(host.spawns.is_empty());
        assert!(fire.is_ready());
    }
}
