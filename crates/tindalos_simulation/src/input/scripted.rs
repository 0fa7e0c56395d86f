//! Scripted input: seeded случайный "игрок" для headless симуляции
//!
//! Каждые `change_every` frame'ов: новые оси, новое состояние огня,
//! новая точка курсора на полу арены. Всё из `DeterministicRng`,
//! поэтому один seed = один и тот же прогон.

use bevy::prelude::*;
use rand::Rng;

use super::{apply_player_input, PlayerInputEvent};
use crate::host::CursorRay;
use crate::DeterministicRng;

/// Настройки scripted input
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScriptedInput {
    /// Раз в сколько frame'ов менять решение
    pub change_every: u32,
    /// Курсор выбирается в квадрате [-half, half] по X/Z
    pub arena_half_size: f32,
    /// Вероятность держать огонь в очередном окне
    pub fire_chance: f64,
    pub frame: u32,
}

impl Default for ScriptedInput {
    fn default() -> Self {
        Self {
            change_every: 16,
            arena_half_size: 8.0,
            fire_chance: 0.6,
            frame: 0,
        }
    }
}

pub struct ScriptedInputPlugin;

impl Plugin for ScriptedInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScriptedInput>()
            .add_systems(PreUpdate, drive_scripted_input.before(apply_player_input));
    }
}

/// Система: случайный input раз в `change_every` frame'ов
pub fn drive_scripted_input(
    mut script: ResMut<ScriptedInput>,
    mut rng: ResMut<DeterministicRng>,
    mut cursor: ResMut<CursorRay>,
    mut input_events: EventWriter<PlayerInputEvent>,
) {
    let frame = script.frame;
    script.frame = script.frame.wrapping_add(1);

    if script.change_every == 0 || frame % script.change_every != 0 {
        return;
    }

    let forward = rng.rng.gen_range(-1.0_f32..=1.0);
    let right = rng.rng.gen_range(-1.0_f32..=1.0);
    input_events.write(PlayerInputEvent::MoveAxes { forward, right });

    if rng.rng.gen_bool(script.fire_chance.clamp(0.0, 1.0)) {
        input_events.write(PlayerInputEvent::FirePressed);
    } else {
        input_events.write(PlayerInputEvent::FireReleased);
    }

    let half = script.arena_half_size.max(0.0);
    let target = if half > 0.0 {
        Vec3::new(rng.rng.gen_range(-half..=half), 0.0, rng.rng.gen_range(-half..=half))
    } else {
        Vec3::ZERO
    };
    *cursor = CursorRay::looking_down_at(target);
}
