//! Input domain: host input → HeroInput
//!
//! Host (окно, скрипт, сеть) шлёт `PlayerInputEvent`, ECS latch'ит его в
//! `HeroInput` героя с маркером `Player`. Симуляция читает только `HeroInput`.
//!
//! Содержит:
//! - PlayerInputEvent + apply_player_input (PreUpdate)
//! - ScriptedInputPlugin (seeded случайный input для headless прогонов)

pub mod scripted;

pub use scripted::*;

use bevy::prelude::*;

use crate::components::{HeroInput, Player};

/// Event: host → ECS, input игрока за frame
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum PlayerInputEvent {
    /// Оси движения (любые значения, clamp/NaN обработка в HeroInput)
    MoveAxes { forward: f32, right: f32 },
    FirePressed,
    FireReleased,
}

/// Система: latch input events в HeroInput всех Player героев
///
/// Порядок events сохраняется: Pressed → Released в одном frame = не зажато.
pub fn apply_player_input(
    mut events: EventReader<PlayerInputEvent>,
    mut players: Query<&mut HeroInput, With<Player>>,
) {
    for event in events.read() {
        for mut input in players.iter_mut() {
            match *event {
                PlayerInputEvent::MoveAxes { forward, right } => input.set_axes(forward, right),
                PlayerInputEvent::FirePressed => input.press_fire(),
                PlayerInputEvent::FireReleased => input.release_fire(),
            }
        }
    }
}
